//! Core library for an editable Conway's Game of Life grid.

pub mod cadence;
pub mod enc;
pub mod engine;
mod error;
pub mod grid;
pub mod pos;
pub mod stats;

pub use cadence::Cadence;
pub use enc::{PatternDecoder, Plaintext, RunLengthEncoded};
pub use engine::{CellStyle, Frame, Lifecycle, Simulation, TickOutcome};
pub use error::{Error, Result};
pub use grid::Grid;
pub use pos::Cell;
