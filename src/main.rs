use cgolpaint::{Cadence, Cell, Grid, Result, Simulation, TickOutcome, enc, stats::Recorder};
use std::time::Instant;

mod console;
mod options;

use console::{ConsoleCommand, ConsoleRender};
use options::Args;

/// Default bounds when no terminal decides them
const HEADLESS_GRID: (i32, i32) = (20, 20);

fn args_to_alive(args: &Args, (grid_w, grid_h): (i32, i32)) -> Result<Vec<Cell>> {
    if let Some(file_name) = args.input_file() {
        return enc::load(file_name);
    }
    Ok(args.fill_mode()?.create_alive(grid_w, grid_h))
}

fn advance(game: &mut Simulation, threads: bool) -> Result<TickOutcome> {
    if threads {
        game.tick_parallel()
    } else {
        game.tick()
    }
}

/// Runs a fixed number of generations and prints the visible grid
fn headless(args: &Args, gens: usize) -> Result<()> {
    let (w, h) = args.grid_size(HEADLESS_GRID)?;
    let grid = Grid::new(w, h)?;
    let mut game = Simulation::from_alive(args_to_alive(args, (w, h))?);
    println!("alive: {}", game.alive_count());

    let mut stats = Recorder::new(game.alive_count());
    game.run();
    for _ in 0..gens {
        let outcome = advance(&mut game, args.threads())?;
        stats.record(game.alive_count(), game.state());
        if outcome == TickOutcome::Extinct {
            println!("population died out, back to the starting pattern");
            break;
        }

        // report metrics every 500ms
        if stats.has_report() {
            println!("{}", stats.report());
        }
    }

    println!("{}", stats.report());
    println!("{}", game.frame(grid));
    Ok(())
}

/// Edit and run the grid in the terminal until the user quits
fn interactive(args: &Args, mut cadence: Cadence) -> Result<()> {
    let mut console = ConsoleRender::new(args.requested_bounds()?)?;
    let grid = console.grid();
    let fill_area = (grid.horizontal(), grid.vertical());
    let mut game = Simulation::from_alive(args_to_alive(args, fill_area)?);
    let mut stats = Recorder::new(game.alive_count());

    loop {
        let timeout = cadence.delay(game.state());
        if let Some(ConsoleCommand::Exit) = console.poll_events(&mut game, &mut cadence, timeout)? {
            break;
        }

        // compute the next generation once the cadence allows it
        if game.is_running() && cadence.due(Instant::now()) {
            advance(&mut game, args.threads())?;
            stats.record(game.alive_count(), game.state());
        } else {
            stats.observe(game.alive_count(), game.state());
        }

        if stats.has_report() {
            console.set_report(format!("{} @ {}fps", stats.report(), cadence.fps()));
        }
        console.render(&game)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("warn")).init();

    let Some(args) = Args::from_env()? else {
        return Ok(());
    };
    let cadence = Cadence::new(args.fps()?)?;

    match args.generations()? {
        Some(gens) => headless(&args, gens),
        None => interactive(&args, cadence),
    }
}
