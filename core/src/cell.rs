use serde::{Deserialize, Serialize};

/// What the player can currently see of a cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    #[default]
    Hidden,
    Revealed,
    Flagged,
}

impl Visibility {
    pub const fn ordinal(self) -> u8 {
        match self {
            Self::Hidden => 0,
            Self::Revealed => 1,
            Self::Flagged => 2,
        }
    }

    pub const fn from_ordinal(ordinal: u8) -> Option<Self> {
        match ordinal {
            0 => Some(Self::Hidden),
            1 => Some(Self::Revealed),
            2 => Some(Self::Flagged),
            _ => None,
        }
    }

    pub const fn is_revealed(self) -> bool {
        matches!(self, Self::Revealed)
    }

    pub const fn is_flagged(self) -> bool {
        matches!(self, Self::Flagged)
    }
}

/// One grid position. `adjacent_count` is zero for mines.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub has_mine: bool,
    pub adjacent_count: u8,
    pub visibility: Visibility,
}

impl Cell {
    pub const fn mine() -> Self {
        Self {
            has_mine: true,
            adjacent_count: 0,
            visibility: Visibility::Hidden,
        }
    }

    pub const fn safe(adjacent_count: u8) -> Self {
        Self {
            has_mine: false,
            adjacent_count,
            visibility: Visibility::Hidden,
        }
    }

    pub const fn with_visibility(self, visibility: Visibility) -> Self {
        Self { visibility, ..self }
    }

    pub const fn is_revealed(self) -> bool {
        self.visibility.is_revealed()
    }

    pub const fn is_flagged(self) -> bool {
        self.visibility.is_flagged()
    }
}
