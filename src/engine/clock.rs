//! Elapsed play time.

use std::time::{Duration, Instant};

/// Stopwatch that starts on the first move and stops on a win.
#[derive(Clone, Copy, Debug, Default)]
pub struct GameClock {
    accumulated: Duration,
    running_since: Option<Instant>,
}

impl GameClock {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or keep) running.
    pub fn start(&mut self) {
        if self.running_since.is_none() {
            self.running_since = Some(Instant::now());
        }
    }

    /// Stop and bank the running interval.
    pub fn stop(&mut self) {
        if let Some(since) = self.running_since.take() {
            self.accumulated += since.elapsed();
        }
    }

    /// Back to zero, stopped.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Stopped clock showing `elapsed` (session restore).
    pub fn resume_from(&mut self, elapsed: Duration) {
        self.accumulated = elapsed;
        self.running_since = None;
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running_since.is_some()
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.accumulated + self.running_since.map_or(Duration::ZERO, |since| since.elapsed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_lifecycle() {
        let mut clock = GameClock::new();
        assert!(!clock.is_running());
        assert_eq!(clock.elapsed(), Duration::ZERO);

        clock.start();
        assert!(clock.is_running());
        clock.stop();
        let banked = clock.elapsed();
        assert!(!clock.is_running());
        assert_eq!(clock.elapsed(), banked);

        clock.resume_from(Duration::from_secs(90));
        assert_eq!(clock.elapsed(), Duration::from_secs(90));

        clock.reset();
        assert_eq!(clock.elapsed(), Duration::ZERO);
    }
}
