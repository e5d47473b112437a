use crate::*;
pub use random::*;

mod random;

pub trait BoardGenerator {
    fn generate(self, config: GameConfig) -> Result<Board>;
}

/// Validates the dimensions and builds a freshly shuffled board from OS entropy.
pub fn generate(width: Coord, height: Coord, mine_count: CellCount) -> Result<Board> {
    let config = GameConfig::new(width, height, mine_count)?;
    RandomBoardGenerator::from_entropy().generate(config)
}
