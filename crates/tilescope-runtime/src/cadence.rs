use std::{
    thread,
    time::{Duration, Instant},
};

/// Paces frame processing to a fixed target interval.
///
/// A frame that is already overdue when [`FrameCadence::wait`] is called is released
/// immediately and the schedule restarts from that moment; missed frames are not
/// caught up in a burst.
#[derive(Debug, Clone)]
pub struct FrameCadence {
    interval: Duration,
    next_due: Option<Instant>,
}

impl FrameCadence {
    /// Default target rate of the camera loop (one frame every 100/3 ms).
    pub const DEFAULT_RATE: f64 = 30.0;

    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    /// Creates a cadence from a frame rate (FPS). Non-positive or non-finite rates
    /// disable pacing.
    #[must_use]
    pub fn from_rate(rate: f64) -> Self {
        if rate > 0.0 && rate.is_finite() {
            Self::new(Duration::from_secs_f64(1.0 / rate))
        } else {
            Self::unpaced()
        }
    }

    /// Releases frames as fast as they come.
    #[must_use]
    pub fn unpaced() -> Self {
        Self::new(Duration::ZERO)
    }

    #[must_use]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Blocks until the next frame is due.
    pub fn wait(&mut self) {
        if let Some(delay) = self.advance(Instant::now()) {
            thread::sleep(delay);
        }
    }

    /// Schedules the next frame as of `now` and returns how long to sleep first.
    fn advance(&mut self, now: Instant) -> Option<Duration> {
        let (start, delay) = match self.next_due {
            Some(due) if due > now => (due, Some(due - now)),
            _ => (now, None),
        };
        self.next_due = Some(start + self.interval);
        delay
    }
}

impl Default for FrameCadence {
    fn default() -> Self {
        Self::from_rate(Self::DEFAULT_RATE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: Duration = Duration::from_millis(1);

    #[test]
    fn test_first_frame_is_immediate() {
        let mut cadence = FrameCadence::new(10 * MS);
        assert_eq!(cadence.advance(Instant::now()), None);
    }

    #[test]
    fn test_early_call_sleeps_until_due() {
        let mut cadence = FrameCadence::new(10 * MS);
        let t0 = Instant::now();
        assert_eq!(cadence.advance(t0), None);
        assert_eq!(cadence.advance(t0 + 4 * MS), Some(6 * MS));
        // Schedule continues from the due time, not from the call.
        assert_eq!(cadence.advance(t0 + 12 * MS), Some(8 * MS));
    }

    #[test]
    fn test_overdue_frame_restarts_schedule() {
        let mut cadence = FrameCadence::new(10 * MS);
        let t0 = Instant::now();
        cadence.advance(t0);
        assert_eq!(cadence.advance(t0 + 35 * MS), None);
        assert_eq!(cadence.advance(t0 + 40 * MS), Some(5 * MS));
    }

    #[test]
    fn test_from_rate() {
        assert_eq!(FrameCadence::from_rate(50.0).interval(), 20 * MS);
        assert_eq!(FrameCadence::from_rate(0.0).interval(), Duration::ZERO);
        assert_eq!(FrameCadence::from_rate(-1.0).interval(), Duration::ZERO);
        assert_eq!(FrameCadence::from_rate(f64::NAN).interval(), Duration::ZERO);
        let default = FrameCadence::default().interval();
        assert!(default > 33 * MS && default < 34 * MS);
    }

    #[test]
    fn test_unpaced_never_sleeps() {
        let mut cadence = FrameCadence::unpaced();
        let t0 = Instant::now();
        for i in 0..5 {
            assert_eq!(cadence.advance(t0 + i * MS / 2), None);
        }
    }

    #[test]
    fn test_wait_paces_real_time() {
        let mut cadence = FrameCadence::new(5 * MS);
        let start = Instant::now();
        for _ in 0..4 {
            cadence.wait();
        }
        assert!(start.elapsed() >= 15 * MS);
    }
}
