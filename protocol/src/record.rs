use chrono::{DateTime, Utc};
use sapper_core::{CellCount, Coord, Game, GameError, GameState, decode_board, encode_board};
use serde::{Deserialize, Serialize};

use crate::Result;

/// Stored form of a game. Cells are kept as codec integers, rows top to bottom.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub width: Coord,
    pub height: Coord,
    pub mines: CellCount,
    pub board: Vec<Vec<i64>>,
    #[serde(default)]
    pub state: GameState,
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub ended_at: Option<DateTime<Utc>>,
}

impl GameRecord {
    pub fn from_game(game: &Game) -> Self {
        let config = game.config();
        let board = encode_board(game.board())
            .into_iter()
            .map(|row| row.into_iter().map(i64::from).collect())
            .collect();

        Self {
            width: config.width,
            height: config.height,
            mines: config.mines,
            board,
            state: game.state(),
            started_at: game.started_at(),
            ended_at: game.ended_at(),
        }
    }

    pub fn into_game(self) -> core::result::Result<Game, GameError> {
        let board = decode_board(self.width, self.height, self.mines, &self.board)?;
        Game::from_parts(board, self.state, self.started_at, self.ended_at)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses and validates a stored game in one step.
    pub fn load(json: &str) -> Result<Game> {
        let record = Self::from_json(json)?;
        record.into_game().map_err(|err| {
            log::warn!("Rejected stored game: {}", err);
            err.into()
        })
    }
}
