use std::collections::BTreeSet;

use ndarray::Array2;
use rand::prelude::*;
use rand::rngs::SmallRng;

use super::*;

/// Rejection-sampling generator: draws uniformly random coordinates and
/// redraws whenever the candidate already holds a mine or is excluded, until
/// the requested mine count is placed.
///
/// Redraw cost grows with mine density, which is acceptable at minesweeper
/// densities (well under full boards); a configuration the sampler could
/// never satisfy is rejected up front instead.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomGridGenerator {
    seed: u64,
    excluded: BTreeSet<Coord2>,
}

impl RandomGridGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            excluded: BTreeSet::new(),
        }
    }

    /// Marks coordinates that must never receive a mine, e.g. the cell of a
    /// first click that is guaranteed safe.
    pub fn excluding<I>(mut self, coords: I) -> Self
    where
        I: IntoIterator<Item = Coord2>,
    {
        self.excluded.extend(coords);
        self
    }
}

impl GridGenerator for RandomGridGenerator {
    fn generate(self, config: GridConfig) -> Result<Grid> {
        config.validate()?;
        let (width, height) = config.size();

        let excluded: BTreeSet<Coord2> = self
            .excluded
            .iter()
            .copied()
            .filter(|&(x, y)| x < width && y < height)
            .collect();
        if excluded.len() < self.excluded.len() {
            log::warn!(
                "ignoring {} excluded coordinates outside the {}x{} grid",
                self.excluded.len() - excluded.len(),
                width,
                height
            );
        }

        let free_cells = config.total_cells() - excluded.len() as CellCount;
        if config.mines() > free_cells {
            return Err(GameError::InvalidConfiguration);
        }

        let mut mine_mask: Array2<bool> = Array2::default(config.size().to_nd_index());
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut placed: CellCount = 0;

        while placed < config.mines() {
            let coords: Coord2 = (rng.random_range(0..width), rng.random_range(0..height));
            if excluded.contains(&coords) || mine_mask[coords.to_nd_index()] {
                continue;
            }
            mine_mask[coords.to_nd_index()] = true;
            placed += 1;
        }

        log::debug!("placed {placed} mines in a {width}x{height} grid");
        Grid::from_mine_mask(mine_mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(size: Coord2, mines: CellCount) -> GridConfig {
        GridConfig::new(size, mines).unwrap()
    }

    #[test]
    fn places_the_exact_mine_count() {
        for seed in 0..8 {
            let grid = RandomGridGenerator::new(seed)
                .generate(config((9, 9), 10))
                .unwrap();
            assert_eq!(grid.mine_count(), 10);
        }
    }

    #[test]
    fn zero_mines_places_none() {
        let grid = RandomGridGenerator::new(1)
            .generate(config((6, 4), 0))
            .unwrap();

        assert_eq!(grid.mine_count(), 0);
    }

    #[test]
    fn full_board_mines_every_cell() {
        let grid = RandomGridGenerator::new(7)
            .generate(config((4, 4), 16))
            .unwrap();

        for y in 0..4 {
            for x in 0..4 {
                assert!(grid.cell_at((x, y)).unwrap().has_mine);
            }
        }
    }

    #[test]
    fn generated_cells_start_hidden() {
        let grid = RandomGridGenerator::new(3)
            .generate(config((5, 5), 12))
            .unwrap();

        for y in 0..5 {
            for x in 0..5 {
                assert!(grid.cell_at((x, y)).unwrap().visibility.is_hidden());
            }
        }
    }

    #[test]
    fn excluded_coordinates_stay_mine_free() {
        let start = (2, 2);
        let exclusions = [start, (1, 2), (3, 2), (2, 1), (2, 3)];

        let grid = RandomGridGenerator::new(42)
            .excluding(exclusions)
            .generate(config((5, 5), 20))
            .unwrap();

        assert_eq!(grid.mine_count(), 20);
        for coords in exclusions {
            assert!(!grid.cell_at(coords).unwrap().has_mine);
        }
    }

    #[test]
    fn exclusions_leaving_no_room_are_rejected() {
        let result = RandomGridGenerator::new(0)
            .excluding([(0, 0)])
            .generate(config((2, 2), 4));

        assert_eq!(result, Err(GameError::InvalidConfiguration));
    }

    #[test]
    fn exclusions_outside_the_grid_are_ignored() {
        let grid = RandomGridGenerator::new(0)
            .excluding([(9, 9)])
            .generate(config((3, 3), 9))
            .unwrap();

        assert_eq!(grid.mine_count(), 9);
    }

    #[test]
    fn invalid_configs_never_reach_sampling() {
        let degenerate = GridConfig::new_unchecked((0, 3), 0);

        assert_eq!(
            RandomGridGenerator::new(0).generate(degenerate),
            Err(GameError::InvalidConfiguration)
        );
    }

    #[test]
    fn same_seed_reproduces_the_same_grid() {
        let a = RandomGridGenerator::new(99)
            .generate(config((8, 8), 13))
            .unwrap();
        let b = RandomGridGenerator::new(99)
            .generate(config((8, 8), 13))
            .unwrap();

        assert_eq!(a, b);
    }
}
