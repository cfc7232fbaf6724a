use super::*;

/// Purely random generation: rejection-sampled mine placement from a seeded rng, so the same seed and config always
/// produce the same board.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMinefieldGenerator {
    seed: u64,
}

impl RandomMinefieldGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MinefieldGenerator for RandomMinefieldGenerator {
    fn generate(self, config: GameConfig) -> Result<Board> {
        use rand::prelude::*;

        config.validate()?;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut board = Board::init_grid(config.size)?;
        board.place_mines(config.mines, &mut rng)?;
        board.compute_adjacency();

        // double check mine count
        let count = board.cells().filter(|cell| cell.has_mine()).count() as CellCount;
        if count != config.mines {
            log::warn!(
                "Generated minefield count mismatch, actual: {}, requested: {}",
                count,
                config.mines
            );
        }
        log::debug!("Generated {:?} board with seed {}", config, self.seed);
        Ok(board)
    }
}
