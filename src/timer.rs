use std::time::Duration;
use crate::error::{CarouselError, CarouselResult};

/// Repeating auto-advance timer driven by frame time.
///
/// Owned by the controller, so it stops ticking as soon as the controller is
/// dropped. `stop()` cancels it earlier and throws away the partial period.
#[derive(Debug, Clone)]
pub struct AutoAdvance {
    interval: Duration,
    elapsed: Duration,
    running: bool,
}

impl AutoAdvance {
    pub fn new(interval: Duration) -> CarouselResult<Self> {
        if interval.is_zero() {
            return Err(CarouselError::InvalidInterval);
        }
        Ok(Self {
            interval,
            elapsed: Duration::ZERO,
            running: false,
        })
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.elapsed = Duration::ZERO;
    }

    /// Time accumulated towards the next tick.
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Share of the current period already elapsed, in `[0, 1)`.
    pub fn progress(&self) -> f32 {
        (self.elapsed().as_secs_f64() / self.interval.as_secs_f64()) as f32
    }

    /// Advance by `dt` seconds and return how many full periods went by.
    ///
    /// Non-finite or non-positive `dt` is ignored.
    pub fn tick(&mut self, dt: f32) -> u64 {
        if !self.running || !dt.is_finite() || dt <= 0.0 {
            return 0;
        }
        let step = Duration::try_from_secs_f32(dt).unwrap_or(Duration::MAX);
        let total = self.elapsed.saturating_add(step).as_nanos();
        let period = self.interval.as_nanos();

        let remainder = total % period;
        self.elapsed = Duration::new(
            (remainder / NANOS_PER_SEC) as u64,
            (remainder % NANOS_PER_SEC) as u32,
        );
        u64::try_from(total / period).unwrap_or(u64::MAX)
    }
}

const NANOS_PER_SEC: u128 = 1_000_000_000;
