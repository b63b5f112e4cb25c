use crate::Lifecycle;
use std::time::{Duration, Instant};

const REPORT_INTERVAL: Duration = Duration::from_millis(500);

/// Tracks generation throughput for the status line
pub struct Recorder {
    gens: usize,
    alive: usize,
    state: Lifecycle,
    gens_in_report: usize,
    last_report: Instant,
}
impl Recorder {
    pub fn new(alive: usize) -> Self {
        Self {
            gens: 0,
            alive,
            state: Lifecycle::Editing,
            gens_in_report: 0,
            last_report: Instant::now(),
        }
    }

    /// Records one computed generation
    pub fn record(&mut self, alive: usize, state: Lifecycle) {
        self.gens += 1;
        self.gens_in_report += 1;
        self.observe(alive, state);
    }

    /// Updates the population without counting a generation, e.g. after an edit
    pub fn observe(&mut self, alive: usize, state: Lifecycle) {
        if state != self.state && state == Lifecycle::Editing {
            self.gens = 0;
        }
        self.alive = alive;
        self.state = state;
    }

    pub fn has_report(&self) -> bool {
        self.last_report.elapsed() >= REPORT_INTERVAL
    }
    pub fn report(&mut self) -> String {
        let gens_per_sec = self.gens_in_report as f64 / self.last_report.elapsed().as_secs_f64();
        // reset stats for next report
        self.last_report = Instant::now();
        self.gens_in_report = 0;

        format!(
            "{:.02}gen/s gens:{}, alive:{}, {}",
            gens_per_sec,
            self.gens,
            self.alive,
            match self.state {
                Lifecycle::Editing => "editing",
                Lifecycle::Running => "running",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_counts_generations() {
        let mut stats = Recorder::new(3);
        stats.record(3, Lifecycle::Running);
        stats.record(5, Lifecycle::Running);

        let report = stats.report();

        assert!(report.ends_with("gens:2, alive:5, running"), "{report}");
    }

    #[test]
    fn returning_to_editing_clears_generation_count() {
        let mut stats = Recorder::new(3);
        stats.record(3, Lifecycle::Running);
        stats.observe(3, Lifecycle::Editing);

        assert!(stats.report().ends_with("gens:0, alive:3, editing"));
    }
}
