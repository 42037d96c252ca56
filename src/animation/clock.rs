/// Gaps longer than this are treated as a stall (tab hidden, debugger pause).
pub const LAG_THRESHOLD_MS: f64 = 500.0;
/// Delta substituted for a stalled frame.
pub const LAG_ADJUSTED_MS: f64 = 33.0;

/// Converts host frame timestamps (milliseconds) into timeline deltas (seconds).
#[derive(Clone, Copy, Debug)]
pub struct FrameClock {
    last_ms: Option<f64>,
    lag_threshold_ms: f64,
    lag_adjusted_ms: f64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self {
            last_ms: None,
            lag_threshold_ms: LAG_THRESHOLD_MS,
            lag_adjusted_ms: LAG_ADJUSTED_MS,
        }
    }
}

impl FrameClock {
    /// Clock with the default lag smoothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override lag smoothing; a non-positive threshold disables it.
    pub fn with_lag_smoothing(mut self, threshold_ms: f64, adjusted_ms: f64) -> Self {
        self.lag_threshold_ms = threshold_ms;
        self.lag_adjusted_ms = adjusted_ms.max(0.0);
        self
    }

    /// Delta in seconds since the previous frame. The first frame yields 0.
    ///
    /// Timestamps that go backwards or are not finite yield 0 and resynchronise the clock.
    pub fn advance(&mut self, now_ms: f64) -> f64 {
        if !now_ms.is_finite() {
            tracing::warn!(now_ms, "ignoring non-finite frame timestamp");
            return 0.0;
        }
        let Some(last) = self.last_ms.replace(now_ms) else {
            return 0.0;
        };
        let mut dt_ms = now_ms - last;
        if dt_ms < 0.0 {
            tracing::warn!(now_ms, last, "frame timestamp went backwards");
            return 0.0;
        }
        if self.lag_threshold_ms > 0.0 && dt_ms > self.lag_threshold_ms {
            tracing::trace!(dt_ms, "smoothing frame lag");
            dt_ms = self.lag_adjusted_ms;
        }
        dt_ms / 1000.0
    }

    /// Forget the previous timestamp.
    pub fn reset(&mut self) {
        self.last_ms = None;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/clock.rs"]
mod tests;
