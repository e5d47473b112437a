use sapper_core::{Coord, Game, GameError};
use serde::{Deserialize, Serialize};

use crate::GameView;

/// A player's move. `flag: true` toggles the flag on the cell, anything else reveals it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRequest {
    pub row: Coord,
    pub col: Coord,
    #[serde(default)]
    pub flag: bool,
}

impl MoveRequest {
    pub fn reveal(row: Coord, col: Coord) -> Self {
        Self {
            row,
            col,
            flag: false,
        }
    }

    pub fn toggle_flag(row: Coord, col: Coord) -> Self {
        Self {
            row,
            col,
            flag: true,
        }
    }

    /// Plays the move and returns what the player gets to see afterwards.
    pub fn apply(&self, game: &mut Game) -> Result<GameView, GameError> {
        if self.flag {
            let visibility = game.flag(self.row, self.col, None)?;
            log::debug!("Flag at ({}, {}) now {:?}", self.row, self.col, visibility);
        } else {
            let report = game.reveal(self.row, self.col)?;
            log::debug!(
                "Reveal at ({}, {}): {:?}, {} cells changed",
                self.row,
                self.col,
                report.outcome,
                report.changed.len()
            );
        }
        Ok(GameView::full(game))
    }
}
