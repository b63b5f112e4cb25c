use crate::{Error, Lifecycle, Result};
use std::time::{Duration, Instant};

/// Redraw delay while editing, short enough for drag painting to keep up
pub const EDITING_DELAY: Duration = Duration::from_millis(16);

/// Fastest supported cadence, one generation per millisecond
pub const MAX_FPS: u32 = 1000;

fn check(fps: u32) -> Result<u32> {
    if !(1..=MAX_FPS).contains(&fps) {
        return Err(Error::InvalidCadence(fps));
    }
    Ok(fps)
}

/// How often the redraw driver should call back, and when a generation is due
#[derive(Debug, Clone, Copy)]
pub struct Cadence {
    fps: u32,
    last_tick: Option<Instant>,
}

impl Cadence {
    /// Runs at `fps` generations per second, between one and [`MAX_FPS`]
    pub fn new(fps: u32) -> Result<Self> {
        Ok(Self {
            fps: check(fps)?,
            last_tick: None,
        })
    }

    #[inline]
    pub fn fps(&self) -> u32 {
        self.fps
    }

    /// Time between generations while running, never below a millisecond
    #[inline]
    pub fn running_delay(&self) -> Duration {
        Duration::from_millis((1000 / u64::from(self.fps)).max(1))
    }

    /// How long the driver may wait before its next cycle
    pub fn delay(&self, state: Lifecycle) -> Duration {
        match state {
            Lifecycle::Editing => EDITING_DELAY,
            Lifecycle::Running => self.running_delay(),
        }
    }

    /// Doubles the cadence, up to [`MAX_FPS`]
    pub fn faster(&mut self) {
        self.fps = self.fps.saturating_mul(2).min(MAX_FPS);
        log::debug!("cadence now {} generations per second", self.fps);
    }

    /// Halves the cadence, down to one generation per second
    pub fn slower(&mut self) {
        self.fps = (self.fps / 2).max(1);
        log::debug!("cadence now {} generations per second", self.fps);
    }

    /// Whether a generation is due at `now`, marking it as taken if so
    pub fn due(&mut self, now: Instant) -> bool {
        match self.last_tick {
            Some(last) if now.duration_since(last) < self.running_delay() => false,
            _ => {
                self.last_tick = Some(now);
                true
            }
        }
    }

    /// Changes the cadence, leaving it untouched if `fps` is out of range
    pub fn set_fps(&mut self, fps: u32) -> Result<()> {
        let fps = check(fps)?;
        log::debug!("cadence {} -> {} generations per second", self.fps, fps);
        self.fps = fps;
        Ok(())
    }
}

impl Default for Cadence {
    fn default() -> Self {
        Self {
            fps: 120,
            last_tick: None,
        }
    }
}
