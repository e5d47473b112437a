use chrono::{DateTime, Utc};
use sapper_core::*;
use serde::{Deserialize, Serialize};

/// What a player may know about one cell. Mine and count only travel once the cell is revealed.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mine: Option<bool>,
    #[serde(with = "crate::visibility_ordinal")]
    pub state: Visibility,
}

impl CellView {
    pub fn redact(cell: Cell) -> Self {
        match cell.visibility {
            Visibility::Revealed => Self {
                count: Some(cell.adjacent_count),
                mine: Some(cell.has_mine),
                state: cell.visibility,
            },
            Visibility::Hidden | Visibility::Flagged => Self {
                count: None,
                mine: None,
                state: cell.visibility,
            },
        }
    }
}

/// Player-facing snapshot of a game. Summaries leave the board out.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameView {
    pub width: Coord,
    pub height: Coord,
    pub mines: CellCount,
    pub state: GameState,
    pub started_at: Option<DateTime<Utc>>,
    pub ended_at: Option<DateTime<Utc>>,
    pub progress: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub board: Option<Vec<Vec<CellView>>>,
}

impl GameView {
    pub fn full(game: &Game) -> Self {
        let board = game
            .board()
            .cells()
            .rows()
            .into_iter()
            .map(|row| row.iter().copied().map(CellView::redact).collect())
            .collect();

        Self {
            board: Some(board),
            ..Self::summary(game)
        }
    }

    pub fn summary(game: &Game) -> Self {
        let config = game.config();
        Self {
            width: config.width,
            height: config.height,
            mines: config.mines,
            state: game.state(),
            started_at: game.started_at(),
            ended_at: game.ended_at(),
            progress: game.progress(),
            board: None,
        }
    }
}
