#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use snapshot::*;
pub use types::*;

mod board;
mod cell;
mod engine;
mod error;
mod generator;
mod snapshot;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub size: Coord2,
    pub mines: CellCount,
}

impl GameConfig {
    /// 10x10 with 15 mines, the only configuration a standard new game uses.
    pub const STANDARD: Self = Self::new_unchecked((10, 10), 15);

    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    pub fn new(size: Coord2, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(size, mines);
        config.validate()?;
        Ok(config)
    }

    /// Requires a non-empty board and at least one safe cell.
    pub fn validate(&self) -> Result<()> {
        let (width, height) = self.size;
        if width == 0 || height == 0 {
            return Err(GameError::InvalidConfiguration("board must be at least 1x1"));
        }
        if self.mines >= self.total_cells() {
            return Err(GameError::InvalidConfiguration(
                "mine count must be less than the number of cells",
            ));
        }
        Ok(())
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }

    pub const fn safe_cell_count(&self) -> CellCount {
        self.total_cells().saturating_sub(self.mines)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_config() {
        let config = GameConfig::default();
        assert_eq!(config.size, (10, 10));
        assert_eq!(config.total_cells(), 100);
        assert_eq!(config.safe_cell_count(), 85);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn config_validation() {
        assert!(GameConfig::new((4, 4), 15).is_ok());
        assert!(GameConfig::new((4, 4), 0).is_ok());
        assert!(matches!(
            GameConfig::new((4, 4), 16),
            Err(GameError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            GameConfig::new((0, 4), 0),
            Err(GameError::InvalidConfiguration(_))
        ));
    }
}
