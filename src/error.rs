use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("grid bounds must be positive, got {horizontal}x{vertical}")]
    InvalidBounds { horizontal: i32, vertical: i32 },
    #[error("cannot advance a generation while editing")]
    NotRunning,
    #[error("cadence must be between 1 and 1000 generations per second, got {0}")]
    InvalidCadence(u32),
    #[error("malformed pattern: {0}")]
    Pattern(String),
    #[error("{0}")]
    Usage(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
