mod index;
mod window;

pub use self::window::{CellStyle, Frame};
use crate::{Cell, Error, Grid, Result};
use rayon::prelude::*;
use std::collections::HashSet;

/// Whether the grid is being edited or a simulation is in progress
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Lifecycle {
    #[default]
    Editing,
    Running,
}

/// What a successful [`Simulation::tick`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// The next generation was committed
    Advanced,
    /// The population died out and the engine reset itself to editing
    Extinct,
}

/// The Game of Life state machine
///
/// Owns the alive-set, the snapshot taken when a run starts, and the
/// editing/running lifecycle. Collaborators only get read-only views.
#[derive(Debug, Default)]
pub struct Simulation {
    alive: HashSet<Cell>,
    saved: HashSet<Cell>,
    state: Lifecycle,
    generation: usize,
}

impl Simulation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine in the editing state with the given cells alive
    pub fn from_alive<I: IntoIterator<Item = Cell>>(alive: I) -> Self {
        Self {
            alive: alive.into_iter().collect(),
            ..Self::default()
        }
    }

    fn editable(&self, action: &str, cell: Cell) -> bool {
        if self.state == Lifecycle::Running {
            log::debug!("ignoring {action} of {cell} while running");
            return false;
        }
        true
    }

    /// Flips the membership of `cell`
    ///
    /// Returns the new membership, or `None` when the edit was rejected
    /// because a simulation is running.
    pub fn toggle_cell(&mut self, cell: Cell) -> Option<bool> {
        if !self.editable("toggle", cell) {
            return None;
        }
        if self.alive.remove(&cell) {
            Some(false)
        } else {
            self.alive.insert(cell);
            Some(true)
        }
    }

    /// Removes `cell` when `erase` is set, otherwise makes it alive
    ///
    /// Unlike [`Simulation::toggle_cell`] repeating this is harmless, which is
    /// what a drag gesture passing over the same cell needs. Returns whether
    /// the edit was applied.
    pub fn paint_cell(&mut self, cell: Cell, erase: bool) -> bool {
        if !self.editable("paint", cell) {
            return false;
        }
        if erase {
            self.alive.remove(&cell);
        } else {
            self.alive.insert(cell);
        }
        true
    }

    /// Snapshots the alive-set and starts running
    ///
    /// Does nothing if already running; the snapshot from the first `run` is kept.
    pub fn run(&mut self) {
        if self.state == Lifecycle::Running {
            log::debug!("run requested while already running");
            return;
        }
        self.saved = self.alive.clone();
        self.state = Lifecycle::Running;
        self.generation = 0;
        log::info!("running with {} alive cells", self.alive.len());
    }

    /// Discards every cell and returns to editing
    pub fn stop(&mut self) {
        self.alive.clear();
        self.state = Lifecycle::Editing;
        self.generation = 0;
        log::info!("stopped, grid cleared");
    }

    /// Restores the cells from the last `run` and returns to editing
    pub fn reset(&mut self) {
        self.alive = self.saved.clone();
        self.state = Lifecycle::Editing;
        self.generation = 0;
        log::info!("reset to {} alive cells", self.alive.len());
    }

    /// Advances one generation
    ///
    /// Fails with [`Error::NotRunning`] while editing. An extinct population
    /// resets the engine, see [`TickOutcome::Extinct`].
    pub fn tick(&mut self) -> Result<TickOutcome> {
        self.ensure_running()?;

        let mut transition = Transition::default();
        for &cell in &self.alive {
            transition.visit(&self.alive, cell);
        }
        Ok(self.commit(transition))
    }

    /// Same as [`Simulation::tick`], with the search for births and deaths
    /// spread over the rayon thread pool
    pub fn tick_parallel(&mut self) -> Result<TickOutcome> {
        self.ensure_running()?;

        let alive = &self.alive;
        let transition = alive
            .par_iter()
            .fold(Transition::default, |mut transition, &cell| {
                transition.visit(alive, cell);
                transition
            })
            .reduce(Transition::default, Transition::merge);
        Ok(self.commit(transition))
    }

    fn ensure_running(&self) -> Result<()> {
        match self.state {
            Lifecycle::Running => Ok(()),
            Lifecycle::Editing => Err(Error::NotRunning),
        }
    }

    fn commit(&mut self, transition: Transition) -> TickOutcome {
        log::trace!(
            "generation {}: {} born, {} dying",
            self.generation + 1,
            transition.born.len(),
            transition.dying.len()
        );
        self.alive = transition.apply(&self.alive);
        self.generation += 1;

        if self.alive.is_empty() {
            log::info!("population extinct after {} generations", self.generation);
            self.reset();
            return TickOutcome::Extinct;
        }
        TickOutcome::Advanced
    }

    /// Everything the renderer needs to draw the cells inside `grid`
    pub fn frame(&self, grid: Grid) -> Frame {
        Frame::new(self, grid)
    }

    #[inline]
    pub fn alive(&self) -> impl Iterator<Item = &Cell> {
        self.alive.iter()
    }
    #[inline]
    pub fn is_alive(&self, cell: Cell) -> bool {
        self.alive.contains(&cell)
    }
    #[inline]
    pub fn alive_count(&self) -> usize {
        self.alive.len()
    }
    #[inline]
    pub fn state(&self) -> Lifecycle {
        self.state
    }
    #[inline]
    pub fn is_running(&self) -> bool {
        self.state == Lifecycle::Running
    }
    /// Generations computed since the last lifecycle change
    #[inline]
    pub fn generation(&self) -> usize {
        self.generation
    }
}

/// Number of `cell`'s eight neighbors present in `alive`
fn neighbor_count(alive: &HashSet<Cell>, cell: Cell) -> usize {
    cell.neighbors().filter(|n| alive.contains(n)).count()
}

/// Births and deaths for one generation, computed against the current
/// alive-set before anything is committed
#[derive(Debug, Default)]
struct Transition {
    born: HashSet<Cell>,
    dying: HashSet<Cell>,
}

impl Transition {
    fn visit(&mut self, alive: &HashSet<Cell>, cell: Cell) {
        if !index::survives(neighbor_count(alive, cell)) {
            self.dying.insert(cell);
        }
        for neighbor in cell.neighbors() {
            if !alive.contains(&neighbor) && index::reproduces(neighbor_count(alive, neighbor)) {
                self.born.insert(neighbor);
            }
        }
    }

    fn merge(mut self, other: Self) -> Self {
        self.born.extend(other.born);
        self.dying.extend(other.dying);
        self
    }

    fn apply(self, alive: &HashSet<Cell>) -> HashSet<Cell> {
        // births are dead cells and deaths are alive cells, so the symmetric
        // difference below only ever removes
        debug_assert!(self.dying.is_subset(alive), "dying cell was not alive");
        debug_assert!(self.born.is_disjoint(alive), "born cell was already alive");

        let grown = alive | &self.born;
        &grown ^ &self.dying
    }
}
