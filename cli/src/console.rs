use std::io::{BufRead, Write};

use zapador_core::{Action, Coord, Coord2, Frontend, Grid, Visibility};

const HIDDEN_GLYPH: char = '■';
const EMPTY_GLYPH: char = '□';
const FLAG_GLYPH: char = 'F';
const MINE_GLYPH: char = 'M';

/// Text front-end: draws the grid as glyph rows and reads typed commands.
///
/// Coordinates are typed 1-based and translated to the grid's 0-based space
/// here; the session never sees raw input.
#[derive(Debug)]
pub struct ConsoleFrontend<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleFrontend<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn write(&mut self, text: &str) {
        self.output
            .write_all(text.as_bytes())
            .and_then(|()| self.output.flush())
            .expect("console write failed");
    }

    fn render(grid: &Grid) -> String {
        let mut out = String::new();
        for y in 0..grid.height() {
            for x in 0..grid.width() {
                out.push(glyph(grid, (x, y)));
                out.push(' ');
            }
            out.push('\n');
        }
        out.push_str(&"=".repeat(grid.width() as usize * 2));
        out.push('\n');
        out
    }

    /// Reads one line; `None` means end of input.
    fn read_line(&mut self) -> Option<String> {
        let mut line = String::new();
        match self.input.read_line(&mut line) {
            Ok(0) => None,
            Ok(_) => Some(line),
            Err(err) => {
                log::error!("reading input failed: {err}");
                None
            }
        }
    }
}

fn glyph(grid: &Grid, coords: Coord2) -> char {
    let cell = grid.cell_at(coords).expect("coordinates from grid extent");
    match cell.visibility {
        Visibility::Hidden => HIDDEN_GLYPH,
        Visibility::Flagged => FLAG_GLYPH,
        Visibility::Shown if cell.has_mine => MINE_GLYPH,
        Visibility::Shown => {
            let around = grid.mines_around(coords).expect("coordinates from grid extent");
            match around {
                0 => EMPTY_GLYPH,
                n => char::from_digit(n.into(), 10).expect("at most 8 neighbors"),
            }
        }
    }
}

/// A syntactically valid command with still-1-based coordinates.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Command {
    Reveal(u32, u32),
    Flag(u32, u32),
    Quit,
}

fn parse_command(line: &str) -> Option<Command> {
    let line = line.trim();
    if line.eq_ignore_ascii_case("q") {
        return Some(Command::Quit);
    }

    let (verb, coords) = line.split_once(' ')?;
    let (x, y) = coords.trim().split_once(',')?;
    let x: u32 = x.trim().parse().ok()?;
    let y: u32 = y.trim().parse().ok()?;

    match verb {
        "r" | "R" => Some(Command::Reveal(x, y)),
        "f" | "F" => Some(Command::Flag(x, y)),
        _ => None,
    }
}

/// Translates 1-based command coordinates into grid space, if in range.
fn to_grid_coords(grid: &Grid, x: u32, y: u32) -> Option<Coord2> {
    if x == 0 || y == 0 {
        return None;
    }
    let coords = (
        Coord::try_from(x - 1).ok()?,
        Coord::try_from(y - 1).ok()?,
    );
    grid.is_valid(coords).then_some(coords)
}

impl<R: BufRead, W: Write> Frontend for ConsoleFrontend<R, W> {
    fn show_grid(&mut self, grid: &Grid) {
        let rendered = Self::render(grid);
        self.write(&rendered);
    }

    fn next_action(&mut self, grid: &Grid) -> Action {
        self.write("Type r X,Y to reveal, f X,Y to flag, or q to quit\n");
        loop {
            let Some(line) = self.read_line() else {
                return Action::Quit;
            };

            let Some(command) = parse_command(&line) else {
                self.write("Could not read that, expected r X,Y / f X,Y / q\n");
                continue;
            };

            let (x, y, build): (u32, u32, fn(Coord2) -> Action) = match command {
                Command::Quit => return Action::Quit,
                Command::Reveal(x, y) => (x, y, Action::Reveal),
                Command::Flag(x, y) => (x, y, Action::Flag),
            };

            let Some(coords) = to_grid_coords(grid, x, y) else {
                self.write(&format!(
                    "Coordinates must be between 1,1 and {},{}\n",
                    grid.width(),
                    grid.height()
                ));
                continue;
            };
            return build(coords);
        }
    }

    fn announce_end(&mut self, grid: &Grid, won: bool) {
        let message = if won {
            "You won! Every mine flagged.\n".to_string()
        } else {
            format!("You lost! {} mine(s) went off.\n", grid.mine_count())
        };
        self.write(&message);
    }
}
