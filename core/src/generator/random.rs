use super::*;

/// Purely random placement: each mine lands on a uniformly drawn cell, redrawing while that
/// cell already holds a mine.
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

        if let Err(err) = config.validate() {
            log::warn!("Refusing to generate minefield for {config:?}: {err}");
            return Err(err);
        }

        let mut board = Board::empty(config.size)?;
        let total_cells = usize::from(config.total_cells());
        let mut rng = SmallRng::seed_from_u64(self.seed);

        for _ in 0..config.mines {
            // terminates because validation leaves at least one safe cell
            loop {
                let index = rng.random_range(0..total_cells);
                if board.place_mine(index) {
                    break;
                }
            }
        }

        log::debug!(
            "Generated {}x{} minefield with {} mines",
            config.size.0,
            config.size.1,
            board.mine_count()
        );
        Ok(board)
    }
}
