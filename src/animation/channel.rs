use crate::animation::ease::Ease;
use crate::foundation::error::{PrismaError, PrismaResult};
use crate::transform::linear::lerp;
use crate::transform::non_linear::{mirror01, wrap01};

/// What a channel does when it reaches `to`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepeatMode {
    /// Stop at `to` and complete.
    #[default]
    None,
    /// Jump back to `from` and run again, forever.
    Loop,
    /// Reverse direction at each bound, forever.
    PingPong,
}

/// Definition of one named animated value.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ChannelSpec {
    /// Diagnostic name (`rotation_y`, `float_y`, `progress`, ...).
    pub name: String,
    /// Value at the start of each forward pass.
    pub from: f64,
    /// Value at the end of each forward pass.
    pub to: f64,
    /// Seconds to traverse `from -> to` once (`> 0`).
    pub duration_secs: f64,
    /// Behaviour at the bounds.
    #[serde(default)]
    pub repeat: RepeatMode,
    /// Interpolation curve.
    #[serde(default)]
    pub ease: Ease,
    /// Seconds to hold `from` before the first pass.
    #[serde(default)]
    pub delay_secs: f64,
}

/// Result of sampling a channel at an elapsed time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChannelSample {
    /// Interpolated value.
    pub value: f64,
    /// `true` once a non-repeating channel has reached `to`.
    pub finished: bool,
}

impl ChannelSpec {
    /// One-shot linear channel.
    pub fn new(name: impl Into<String>, from: f64, to: f64, duration_secs: f64) -> Self {
        Self {
            name: name.into(),
            from,
            to,
            duration_secs,
            repeat: RepeatMode::None,
            ease: Ease::Linear,
            delay_secs: 0.0,
        }
    }

    /// Set the repeat mode.
    pub fn repeat(mut self, repeat: RepeatMode) -> Self {
        self.repeat = repeat;
        self
    }

    /// Set the easing curve.
    pub fn ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Set the start delay.
    pub fn delay(mut self, delay_secs: f64) -> Self {
        self.delay_secs = delay_secs;
        self
    }

    /// Check bounds, duration and delay.
    pub fn validate(&self) -> PrismaResult<()> {
        if !self.from.is_finite() || !self.to.is_finite() {
            return Err(PrismaError::animation(format!(
                "channel '{}' bounds must be finite",
                self.name
            )));
        }
        if !self.duration_secs.is_finite() || self.duration_secs <= 0.0 {
            return Err(PrismaError::animation(format!(
                "channel '{}' duration must be > 0",
                self.name
            )));
        }
        if !self.delay_secs.is_finite() || self.delay_secs < 0.0 {
            return Err(PrismaError::animation(format!(
                "channel '{}' delay must be >= 0",
                self.name
            )));
        }
        Ok(())
    }

    /// Sample at `elapsed_secs` since registration. Pure; the channel spec must be valid.
    ///
    /// `Loop` is periodic with period `duration_secs`. `PingPong` mirrors around every
    /// multiple of `duration_secs`, so `sample(d + t) == sample(d - t)`.
    pub fn sample(&self, elapsed_secs: f64) -> ChannelSample {
        let local = (elapsed_secs - self.delay_secs).max(0.0);
        let d = self.duration_secs;
        let (progress, finished) = match self.repeat {
            RepeatMode::None => ((local / d).min(1.0), local >= d),
            RepeatMode::Loop => (wrap01(local, d), false),
            RepeatMode::PingPong => (mirror01(local, d), false),
        };
        ChannelSample {
            value: lerp(self.from, self.to, self.ease.apply(progress)),
            finished,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/channel.rs"]
mod tests;
