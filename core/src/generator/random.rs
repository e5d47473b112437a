use ndarray::Array2;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;

/// Purely random placement, every arrangement of the requested mines equally likely.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomBoardGenerator {
    seed: u64,
}

impl RandomBoardGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn from_entropy() -> Self {
        use rand::Rng;

        Self::new(rand::rng().random())
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl BoardGenerator for RandomBoardGenerator {
    fn generate(self, config: GameConfig) -> Result<Board> {
        let config = config.validate().inspect_err(|_| {
            log::warn!(
                "Refusing to generate {}x{} board with {} mines",
                config.width,
                config.height,
                config.mines
            );
        })?;
        let total_cells = config.total_cells() as usize;
        let mines = config.mines as usize;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut mine_mask: Array2<bool> = Array2::default(config.nd_shape());
        let width = usize::from(config.width);
        for index in rand::seq::index::sample(&mut rng, total_cells, mines) {
            mine_mask[[index / width, index % width]] = true;
        }

        log::debug!(
            "Generated {}x{} board with {} mines from seed {}",
            config.width,
            config.height,
            config.mines,
            self.seed
        );
        Ok(Board::from_mine_mask(config, &mine_mask))
    }
}
