use thiserror::Error;

use crate::{CellCount, Coord};

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid configuration: {width}x{height} board cannot hold {mines} mines")]
    InvalidConfiguration {
        width: Coord,
        height: Coord,
        mines: CellCount,
    },
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Cannot decode cell from stored value {code}")]
    DecodeError { code: i64 },
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
    #[error("Board holds {actual} mines but {expected} were declared")]
    MineCountMismatch {
        expected: CellCount,
        actual: CellCount,
    },
    #[error("Game record is inconsistent with its state")]
    InvalidGameRecord,
    #[error("Game already over, no new moves are accepted")]
    GameAlreadyOver,
}

pub type Result<T> = core::result::Result<T, GameError>;
