use std::time::{Duration, Instant};

/// Records labelled instants and reports the time spent between consecutive ones
pub struct Stopwatch {
    instants: Vec<(&'static str, Instant)>,
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

impl Stopwatch {
    /// Start a stopwatch, the first instant is labelled "start"
    pub fn new() -> Stopwatch {
        Stopwatch { instants: vec![("start", Instant::now())] }
    }

    /// Mark the end of the phase named `label`
    pub fn click(&mut self, label: &'static str) {
        self.instants.push((label, Instant::now()));
    }

    /// Duration of each phase in the order they were clicked
    pub fn laps(&self) -> Vec<(&'static str, Duration)> {
        self.instants
            .windows(2)
            .map(|w| {
                let ((_, earlier), (label, later)) = (w[0], w[1]);
                (label, later.duration_since(earlier))
            })
            .collect()
    }

    /// Time since the stopwatch was started
    pub fn total(&self) -> Duration {
        match (self.instants.first(), self.instants.last()) {
            (Some((_, first)), Some((_, last))) => last.duration_since(*first),
            _ => Duration::ZERO,
        }
    }

    pub fn report(&self) {
        for (i, (label, elapsed)) in self.laps().into_iter().enumerate() {
            tracing::debug!(lap = i, phase = label, elapsed_ms = elapsed.as_millis() as u64, "phase finished");
        }
        tracing::debug!(elapsed_ms = self.total().as_millis() as u64, "total");
    }
}
