use crate::*;
pub use random::*;

mod random;

/// Strategy for placing mines into a fresh grid.
pub trait GridGenerator {
    fn generate(self, config: GridConfig) -> Result<Grid>;
}
