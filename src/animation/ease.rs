use crate::foundation::error::{PrismaError, PrismaResult};

/// Easing functions used to map normalized animation progress.
///
/// Values at `t = 0.5`, for reference: `Linear` 0.5, `InQuad` 0.25, `OutQuad` 0.75,
/// `InOutQuad` 0.5, `InCubic` 0.125, `OutCubic` 0.875, `InOutCubic` 0.5, `InQuart` 0.0625,
/// `OutQuart` 0.9375, `InOutQuart` 0.5, `InOutSine` 0.5.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Ease {
    /// Linear interpolation (`none`).
    #[default]
    Linear,
    /// Quadratic ease-in (`power1.in`).
    InQuad,
    /// Quadratic ease-out (`power1.out`).
    OutQuad,
    /// Quadratic ease-in/out (`power1.inOut`).
    InOutQuad,
    /// Cubic ease-in (`power2.in`).
    InCubic,
    /// Cubic ease-out (`power2.out`).
    OutCubic,
    /// Cubic ease-in/out (`power2.inOut`).
    InOutCubic,
    /// Quartic ease-in (`power3.in`).
    InQuart,
    /// Quartic ease-out (`power3.out`).
    OutQuart,
    /// Quartic ease-in/out (`power3.inOut`).
    InOutQuart,
    /// Sinusoidal ease-in/out (`sine.inOut`).
    InOutSine,
}

impl Ease {
    /// Apply this easing function to normalized progress `t` in `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::InQuad => t * t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::InCubic => t * t * t,
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
            Self::InOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::InQuart => t.powi(4),
            Self::OutQuart => 1.0 - (1.0 - t).powi(4),
            Self::InOutQuart => {
                if t < 0.5 {
                    8.0 * t.powi(4)
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(4) / 2.0)
                }
            }
            Self::InOutSine => -((std::f64::consts::PI * t).cos() - 1.0) / 2.0,
        }
    }

    /// Parse a tween-style name such as `none`, `power2.inOut` or `sine.inOut`.
    pub fn parse(name: &str) -> PrismaResult<Self> {
        let norm = name.trim().to_ascii_lowercase();
        Ok(match norm.as_str() {
            "none" | "linear" | "power0" => Self::Linear,
            "power1.in" | "quad.in" => Self::InQuad,
            "power1" | "power1.out" | "quad.out" => Self::OutQuad,
            "power1.inout" | "quad.inout" => Self::InOutQuad,
            "power2.in" | "cubic.in" => Self::InCubic,
            "power2" | "power2.out" | "cubic.out" => Self::OutCubic,
            "power2.inout" | "cubic.inout" => Self::InOutCubic,
            "power3.in" | "quart.in" => Self::InQuart,
            "power3" | "power3.out" | "quart.out" => Self::OutQuart,
            "power3.inout" | "quart.inout" => Self::InOutQuart,
            "sine.inout" => Self::InOutSine,
            _ => {
                return Err(PrismaError::validation(format!(
                    "unknown easing '{name}'"
                )));
            }
        })
    }
}

impl std::str::FromStr for Ease {
    type Err = PrismaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
