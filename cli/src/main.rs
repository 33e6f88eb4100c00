use std::io;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use clap::Parser;
use clap_verbosity_flag::{Verbosity, WarnLevel};
use zapador_core::{
    CellCount, Coord, GameSession, GridConfig, GridGenerator, RandomGridGenerator, SessionOutcome,
};

mod console;

/// Console minesweeper.
#[derive(Debug, Parser)]
#[command(name = "zapador", version, about)]
struct Args {
    /// Grid width in cells.
    #[arg(long, default_value_t = 10)]
    width: Coord,

    /// Grid height in cells.
    #[arg(long, default_value_t = 10)]
    height: Coord,

    /// Number of mines; defaults to 10% of the grid.
    #[arg(long)]
    mines: Option<CellCount>,

    /// Seed for mine placement; taken from the clock when omitted.
    #[arg(long)]
    seed: Option<u64>,

    #[command(flatten)]
    verbosity: Verbosity<WarnLevel>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbosity.log_level_filter())
        .init();

    let config = grid_config(&args).context("unplayable grid parameters")?;
    let seed = args.seed.unwrap_or_else(clock_seed);
    log::debug!(
        "starting a {}x{} game with {} mines, seed {seed}",
        config.width(),
        config.height(),
        config.mines()
    );

    let grid = RandomGridGenerator::new(seed)
        .generate(config)
        .context("mine placement failed")?;
    let frontend = console::ConsoleFrontend::new(io::stdin().lock(), io::stdout());

    match GameSession::new(grid, frontend).play_until_end() {
        SessionOutcome::Aborted => log::info!("game aborted"),
        SessionOutcome::Won | SessionOutcome::Lost => {}
    }
    Ok(())
}

fn grid_config(args: &Args) -> zapador_core::Result<GridConfig> {
    let size = (args.width, args.height);
    let default_mines = (zapador_core::mult(args.width, args.height) / 10).max(1);
    GridConfig::new(size, args.mines.unwrap_or(default_mines))
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_nanos() as u64)
        .unwrap_or_default()
}
