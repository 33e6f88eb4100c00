use serde::{Deserialize, Serialize};

pub use cell::*;
pub use error::*;
pub use generator::*;
pub use grid::*;
pub use session::*;
pub use types::*;

mod cell;
mod error;
mod generator;
mod grid;
mod session;
mod types;

/// Validated grid construction parameters.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    size: Coord2,
    mines: CellCount,
}

impl GridConfig {
    /// Builds a config without validating it. Invariants are re-checked at
    /// generation time.
    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self { size, mines }
    }

    pub fn new(size: Coord2, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(size, mines);
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let (size_x, size_y) = self.size;
        if size_x == 0 || size_y == 0 || self.mines > self.total_cells() {
            Err(GameError::InvalidConfiguration)
        } else {
            Ok(())
        }
    }

    pub const fn size(&self) -> Coord2 {
        self.size
    }

    pub const fn width(&self) -> Coord {
        self.size.0
    }

    pub const fn height(&self) -> Coord {
        self.size.1
    }

    pub const fn mines(&self) -> CellCount {
        self.mines
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_rejects_zero_dimensions() {
        assert_eq!(
            GridConfig::new((0, 5), 1),
            Err(GameError::InvalidConfiguration)
        );
        assert_eq!(
            GridConfig::new((5, 0), 1),
            Err(GameError::InvalidConfiguration)
        );
    }

    #[test]
    fn config_rejects_more_mines_than_cells() {
        assert_eq!(
            GridConfig::new((3, 3), 10),
            Err(GameError::InvalidConfiguration)
        );
    }

    #[test]
    fn config_accepts_full_and_empty_boards() {
        assert!(GridConfig::new((3, 3), 0).is_ok());
        assert!(GridConfig::new((3, 3), 9).is_ok());
    }
}
