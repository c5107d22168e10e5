use std::time::{Duration, Instant};

/// Implements performance timer functionality.
#[derive(Clone)]
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Creates a timer started at the current moment.
    pub fn start() -> Self {
        Self { start: Instant::now() }
    }

    /// Returns amount of elapsed milliseconds.
    pub fn elapsed_millis(&self) -> u128 {
        (Instant::now() - self.start).as_millis()
    }

    /// Measures duration of the given action.
    pub fn measure_duration<R, F: Fn() -> R>(action: F) -> (R, Duration) {
        let start = Timer::start();
        let result = action();
        let elapsed = start.elapsed_millis();

        (result, Duration::from_millis(elapsed as u64))
    }
}
