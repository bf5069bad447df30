use std::time::{Duration, Instant};

use tracing::debug;

/// Times one search and logs its effort once it is done.
pub(crate) struct Stopwatch {
    started: Instant,
    label: &'static str,
    settled: usize,
    relaxed: usize,
}

impl Stopwatch {
    pub fn start(label: &'static str) -> Self {
        Stopwatch {
            started: Instant::now(),
            label,
            settled: 0,
            relaxed: 0,
        }
    }

    #[inline(always)]
    pub fn settle(&mut self) {
        self.settled += 1;
    }

    #[inline(always)]
    pub fn relax(&mut self) {
        self.relaxed += 1;
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn report(&self) {
        debug!(
            settled = self.settled,
            relaxed = self.relaxed,
            elapsed = ?self.elapsed(),
            "{} finished",
            self.label
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_search_effort() {
        let mut stopwatch = Stopwatch::start("search");
        stopwatch.settle();
        stopwatch.relax();
        stopwatch.relax();

        assert_eq!((stopwatch.settled, stopwatch.relaxed), (1, 2));
        assert!(stopwatch.elapsed() < Duration::from_secs(60));
    }
}
