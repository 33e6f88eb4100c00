use crate::*;

/// One player input, already translated to 0-based grid coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Reveal(Coord2),
    Flag(Coord2),
    Quit,
}

/// Capability set a presentation layer provides to the session.
///
/// The frontend owns everything user-facing: prompt text, input validation
/// and retries, and any coordinate-base translation. `next_action` blocks
/// until the player has produced one well-formed action.
pub trait Frontend {
    fn show_grid(&mut self, grid: &Grid);
    fn next_action(&mut self, grid: &Grid) -> Action;
    fn announce_end(&mut self, grid: &Grid, won: bool);
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SessionOutcome {
    Won,
    Lost,
    Aborted,
}

/// Binds one grid to one frontend and drives turns until the game ends.
#[derive(Debug)]
pub struct GameSession<F: Frontend> {
    grid: Grid,
    frontend: F,
}

impl<F: Frontend> GameSession<F> {
    pub fn new(grid: Grid, frontend: F) -> Self {
        Self { grid, frontend }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn frontend(&self) -> &F {
        &self.frontend
    }

    /// Runs show/input/apply turns until the grid reaches a terminal state,
    /// then shows the final grid and announces the result.
    ///
    /// Exactly one action is applied per turn. A turn the grid rejects with
    /// `OutOfBounds` is dropped; the frontend is expected to re-prompt on
    /// the next turn rather than the loop retrying. `Quit` aborts without an
    /// announcement.
    pub fn play_until_end(&mut self) -> SessionOutcome {
        while !self.grid.has_ended() {
            self.frontend.show_grid(&self.grid);

            match self.frontend.next_action(&self.grid) {
                Action::Quit => return SessionOutcome::Aborted,
                Action::Reveal(coords) => {
                    if let Err(err) = self.grid.reveal_area(coords) {
                        log::warn!("reveal at {coords:?} rejected: {err}");
                    }
                }
                Action::Flag(coords) => {
                    if let Err(err) = self.grid.flag(coords) {
                        log::warn!("flag at {coords:?} rejected: {err}");
                    }
                }
            }
        }

        let won = self.grid.is_win();
        if !won {
            self.grid.reveal_all_mines();
        }
        self.frontend.show_grid(&self.grid);
        self.frontend.announce_end(&self.grid, won);

        if won {
            SessionOutcome::Won
        } else {
            SessionOutcome::Lost
        }
    }
}
