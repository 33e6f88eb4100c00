use serde::{Deserialize, Serialize};

/// Player-facing state of a single cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Visibility {
    Hidden,
    Flagged,
    Shown,
}

impl Visibility {
    pub const fn is_shown(self) -> bool {
        matches!(self, Self::Shown)
    }

    pub const fn is_flagged(self) -> bool {
        matches!(self, Self::Flagged)
    }

    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }
}

impl Default for Visibility {
    fn default() -> Self {
        Self::Hidden
    }
}

/// One cell of the grid: whether it hides a mine, and what the player sees.
///
/// Cells are plain values; mutation replaces the stored cell with a new one
/// derived from the old.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub has_mine: bool,
    pub visibility: Visibility,
}

impl Cell {
    pub const fn new(has_mine: bool) -> Self {
        Self {
            has_mine,
            visibility: Visibility::Hidden,
        }
    }

    pub const fn with_visibility(self, visibility: Visibility) -> Self {
        Self {
            has_mine: self.has_mine,
            visibility,
        }
    }
}
