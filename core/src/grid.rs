use std::collections::VecDeque;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Rectangular minefield addressed by `(x, y)` with `0 <= x < width` and
/// `0 <= y < height`.
///
/// Every operation taking coordinates validates them first; on
/// `OutOfBounds` the grid is left untouched.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    cells: Array2<Cell>,
}

impl Grid {
    /// Builds a fully hidden grid from a mine mask.
    pub fn from_mine_mask(mine_mask: Array2<bool>) -> Result<Self> {
        let dim = mine_mask.dim();
        if dim.0 == 0 || dim.1 == 0 || dim.0 > Coord::MAX as usize || dim.1 > Coord::MAX as usize {
            return Err(GameError::InvalidConfiguration);
        }

        Ok(Self {
            cells: mine_mask.mapv(Cell::new),
        })
    }

    /// Builds a fully hidden grid with mines at the given coordinates.
    pub fn from_mine_coords(size: Coord2, mine_coords: &[Coord2]) -> Result<Self> {
        let mut mine_mask: Array2<bool> = Array2::default(size.to_nd_index());

        for &coords in mine_coords {
            if coords.0 >= size.0 || coords.1 >= size.1 {
                return Err(GameError::OutOfBounds);
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Self::from_mine_mask(mine_mask)
    }

    /// Convenience for [`RandomGridGenerator`] without an exclusion set.
    pub fn generate_random(config: GridConfig, seed: u64) -> Result<Self> {
        RandomGridGenerator::new(seed).generate(config)
    }

    pub fn size(&self) -> Coord2 {
        let dim = self.cells.dim();
        (dim.0.try_into().unwrap(), dim.1.try_into().unwrap())
    }

    pub fn width(&self) -> Coord {
        self.size().0
    }

    pub fn height(&self) -> Coord {
        self.size().1
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len().try_into().unwrap()
    }

    /// Number of mines in the grid, counted from the cells themselves so it
    /// can never drift from what [`Grid::set_cell`] stored.
    pub fn mine_count(&self) -> CellCount {
        self.cells
            .iter()
            .filter(|cell| cell.has_mine)
            .count()
            .try_into()
            .unwrap()
    }

    pub fn config(&self) -> GridConfig {
        GridConfig::new_unchecked(self.size(), self.mine_count())
    }

    pub fn is_valid(&self, coords: Coord2) -> bool {
        let size = self.size();
        coords.0 < size.0 && coords.1 < size.1
    }

    fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.is_valid(coords) {
            Ok(coords)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(self.cells[coords.to_nd_index()])
    }

    /// Replaces the cell stored at `coords`.
    pub fn set_cell(&mut self, coords: Coord2, cell: Cell) -> Result<()> {
        let coords = self.validate_coords(coords)?;
        self.cells[coords.to_nd_index()] = cell;
        Ok(())
    }

    /// Shows the cell. Flagged cells are left alone; the flag has to be
    /// removed explicitly before the cell can be shown.
    pub fn reveal(&mut self, coords: Coord2) -> Result<()> {
        let coords = self.validate_coords(coords)?;
        let cell = self.cells[coords.to_nd_index()];
        if !cell.visibility.is_flagged() {
            self.cells[coords.to_nd_index()] = cell.with_visibility(Visibility::Shown);
        }
        Ok(())
    }

    /// Flags the cell as suspected-mine. Shown cells cannot be flagged.
    pub fn flag(&mut self, coords: Coord2) -> Result<()> {
        let coords = self.validate_coords(coords)?;
        let cell = self.cells[coords.to_nd_index()];
        if !cell.visibility.is_shown() {
            self.cells[coords.to_nd_index()] = cell.with_visibility(Visibility::Flagged);
        }
        Ok(())
    }

    /// Puts the cell back to hidden, removing a flag if present.
    pub fn hide(&mut self, coords: Coord2) -> Result<()> {
        let coords = self.validate_coords(coords)?;
        let cell = self.cells[coords.to_nd_index()];
        self.cells[coords.to_nd_index()] = cell.with_visibility(Visibility::Hidden);
        Ok(())
    }

    /// Number of mines in the 3x3 neighborhood of `coords`, the center cell
    /// excluded, clipped to the grid.
    pub fn mines_around(&self, coords: Coord2) -> Result<u8> {
        let coords = self.validate_coords(coords)?;
        Ok(self.count_adjacent_mines(coords))
    }

    fn count_adjacent_mines(&self, coords: Coord2) -> u8 {
        self.cells
            .iter_neighbors(coords)
            .filter(|&pos| self.cells[pos.to_nd_index()].has_mine)
            .count()
            .try_into()
            .unwrap()
    }

    /// Shows `coords` and, when it has no adjacent mines, every safe cell
    /// reachable from it through orthogonally connected zero-count cells.
    ///
    /// The expansion runs over an explicit work-list (breadth-first), so call
    /// depth stays constant no matter the grid size. A flagged target is a
    /// no-op, and a mined target is shown without expanding; whether that
    /// reveal lost the game is the caller's question to ask via
    /// [`Grid::is_loss`].
    pub fn reveal_area(&mut self, coords: Coord2) -> Result<()> {
        let coords = self.validate_coords(coords)?;
        let cell = self.cells[coords.to_nd_index()];
        if cell.visibility.is_flagged() {
            return Ok(());
        }

        self.cells[coords.to_nd_index()] = cell.with_visibility(Visibility::Shown);
        if cell.has_mine || self.count_adjacent_mines(coords) != 0 {
            return Ok(());
        }

        let mut to_visit: VecDeque<Coord2> = self
            .cells
            .iter_orthogonal(coords)
            .filter(|&pos| self.cells[pos.to_nd_index()].visibility.is_hidden())
            .collect();

        while let Some(visit_coords) = to_visit.pop_front() {
            let visit_cell = self.cells[visit_coords.to_nd_index()];
            if !visit_cell.visibility.is_hidden() {
                // queued twice through two zero-count neighbors
                continue;
            }

            self.cells[visit_coords.to_nd_index()] =
                visit_cell.with_visibility(Visibility::Shown);

            if self.count_adjacent_mines(visit_coords) == 0 {
                to_visit.extend(
                    self.cells
                        .iter_orthogonal(visit_coords)
                        .filter(|&pos| self.cells[pos.to_nd_index()].visibility.is_hidden()),
                );
            }
        }

        Ok(())
    }

    /// True iff a mine has been shown.
    pub fn is_loss(&self) -> bool {
        self.cells
            .iter()
            .any(|cell| cell.has_mine && cell.visibility.is_shown())
    }

    /// True iff every mine is flagged and no safe cell is flagged.
    pub fn is_win(&self) -> bool {
        self.cells
            .iter()
            .all(|cell| cell.has_mine == cell.visibility.is_flagged())
    }

    pub fn has_ended(&self) -> bool {
        self.is_loss() || self.is_win()
    }

    /// Shows every mine, for end-of-game display after a loss.
    pub fn reveal_all_mines(&mut self) {
        self.cells.mapv_inplace(|cell| {
            if cell.has_mine {
                cell.with_visibility(Visibility::Shown)
            } else {
                cell
            }
        });
    }
}
