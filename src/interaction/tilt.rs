use crate::animation::channel::ChannelSpec;
use crate::animation::ease::Ease;
use crate::animation::scope::ChannelScope;
use crate::animation::timeline::Timeline;
use crate::foundation::error::PrismaResult;
use crate::interaction::pointer::PointerState;

/// Rest pose and response of a pointer-tilted visual.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TiltParams {
    /// Rest rotation about the horizontal axis.
    pub base_x_deg: f64,
    /// Rest rotation about the vertical axis.
    pub base_y_deg: f64,
    /// Degrees of tilt per unit of normalised pointer offset.
    pub gain_deg: f64,
    /// Seconds to ease back to rest after the pointer leaves.
    pub return_secs: f64,
    /// Curve of the return.
    pub return_ease: Ease,
}

impl Default for TiltParams {
    fn default() -> Self {
        Self {
            base_x_deg: -15.0,
            base_y_deg: 25.0,
            gain_deg: 20.0,
            return_secs: 0.3,
            return_ease: Ease::OutCubic,
        }
    }
}

/// Rotation pair in degrees.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TiltAngles {
    /// About the horizontal axis.
    pub x_deg: f64,
    /// About the vertical axis.
    pub y_deg: f64,
}

const RETURN_X: &str = "tilt_x";
const RETURN_Y: &str = "tilt_y";

/// Pointer-driven tilt. Moves set the angles synchronously; leaving eases them back to
/// rest through a short one-shot channel pair.
#[derive(Debug)]
pub struct TiltController {
    params: TiltParams,
    angles: TiltAngles,
    hovering: bool,
    returning: Option<ChannelScope>,
}

impl TiltController {
    /// Controller at rest.
    pub fn new(params: TiltParams) -> Self {
        Self {
            angles: TiltAngles {
                x_deg: params.base_x_deg,
                y_deg: params.base_y_deg,
            },
            params,
            hovering: false,
            returning: None,
        }
    }

    /// Parameters.
    pub fn params(&self) -> &TiltParams {
        &self.params
    }

    /// Apply a pointer move. Cancels any return in progress.
    pub fn pointer_move(&mut self, pointer: PointerState) {
        self.returning = None;
        self.hovering = true;
        self.angles = TiltAngles {
            x_deg: self.params.base_x_deg + pointer.y * self.params.gain_deg,
            y_deg: self.params.base_y_deg + pointer.x * self.params.gain_deg,
        };
    }

    /// Pointer left the element: start easing back to rest.
    pub fn pointer_leave(&mut self, timeline: &mut Timeline) -> PrismaResult<()> {
        let from = self.angles();
        self.hovering = false;
        self.returning = None;
        let p = self.params;
        let scope = ChannelScope::acquire(timeline, "tilt-return", |scope, tl| {
            scope.register(
                tl,
                ChannelSpec::new(RETURN_X, from.x_deg, p.base_x_deg, p.return_secs)
                    .ease(p.return_ease),
            )?;
            scope.register(
                tl,
                ChannelSpec::new(RETURN_Y, from.y_deg, p.base_y_deg, p.return_secs)
                    .ease(p.return_ease),
            )
        })?;
        self.angles = TiltAngles {
            x_deg: p.base_x_deg,
            y_deg: p.base_y_deg,
        };
        self.returning = Some(scope);
        Ok(())
    }

    /// Current angles, including an in-flight return.
    pub fn angles(&self) -> TiltAngles {
        match &self.returning {
            Some(scope) => TiltAngles {
                x_deg: scope.value_or(RETURN_X, self.angles.x_deg),
                y_deg: scope.value_or(RETURN_Y, self.angles.y_deg),
            },
            None => self.angles,
        }
    }

    /// `true` while the pointer is over the element.
    pub fn is_hovering(&self) -> bool {
        self.hovering
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interaction/tilt.rs"]
mod tests;
