use std::f64::consts::TAU;

use crate::animation::channel::ChannelSpec;
use crate::animation::ease::Ease;
use crate::animation::timeline::{ChannelCallbacks, ChannelHandle, Timeline};
use crate::composite::draw::{DrawOp, Glow, LayerDraw, LayerTransform, Stroke};
use crate::foundation::core::{Circle, PRISMA_BLUE, PRISMA_WHITE, Point};
use crate::foundation::error::PrismaResult;
use crate::interaction::host::HostCapabilities;
use crate::visuals::frame::{StackPose, Visual, VisualFrame, VisualKind};
use crate::visuals::logo::{LogoConfig, PrismaLogo, flat_layer};

/// Progress ring radius inside its 100-unit view box.
pub const RING_RADIUS: f64 = 45.0;
/// Ring circumference.
pub const RING_CIRCUMFERENCE: f64 = TAU * RING_RADIUS;

const VIEW_BOX: f64 = 100.0;
const RING_BOX: f64 = 132.0;
const LOGO_SIZE: f64 = 100.0;
const FRAME_SIZE: (f64, f64) = (200.0, 240.0);

/// Timings of the loading screen.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Seconds for the progress sweep `0 -> 100`.
    pub progress_secs: f64,
    /// Seconds to fade out once full.
    pub fade_secs: f64,
    /// Curve of both phases.
    pub ease: Ease,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            progress_secs: 2.5,
            fade_secs: 0.6,
            ease: Ease::InOutCubic,
        }
    }
}

/// Where the loader is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoaderPhase {
    /// Ring filling.
    Progress,
    /// Ring full, screen fading.
    FadingOut,
    /// Gone; the completion callback has fired.
    Done,
}

/// Full-screen progress ring with the animated mark in its centre.
///
/// The fade channel is queued behind the progress channel, so the completion callback
/// fires once the fade ends, exactly once, from inside a timeline tick.
#[derive(Debug)]
pub struct LoadingScreen {
    config: LoaderConfig,
    logo: Option<PrismaLogo>,
    progress: Option<ChannelHandle>,
    fade: Option<ChannelHandle>,
}

impl LoadingScreen {
    /// Start the loader. On reduced-motion hosts it is skipped: `on_complete` runs
    /// immediately and the loader is already `Done`.
    #[tracing::instrument(skip(timeline, on_complete))]
    pub fn mount(
        config: LoaderConfig,
        timeline: &mut Timeline,
        host: &HostCapabilities,
        on_complete: impl FnOnce() + 'static,
    ) -> PrismaResult<Self> {
        if !host.allows_motion() {
            tracing::debug!("reduced motion, skipping loader");
            on_complete();
            return Ok(Self {
                config,
                logo: None,
                progress: None,
                fade: None,
            });
        }

        let progress = timeline.register_plain(
            ChannelSpec::new("progress", 0.0, 100.0, config.progress_secs).ease(config.ease),
        )?;
        let fade = timeline.register(
            ChannelSpec::new("loader_opacity", 1.0, 0.0, config.fade_secs)
                .ease(config.ease)
                .delay(config.progress_secs),
            ChannelCallbacks::none().on_complete(move || {
                tracing::debug!("loader finished");
                on_complete();
            }),
        )?;
        let logo = PrismaLogo::mount(
            LogoConfig {
                size: LOGO_SIZE,
                animated: true,
            },
            timeline,
            host,
        )?;

        Ok(Self {
            config,
            logo: Some(logo),
            progress: Some(progress),
            fade: Some(fade),
        })
    }

    /// Timings the loader was mounted with.
    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Lifecycle phase.
    pub fn phase(&self) -> LoaderPhase {
        match (&self.progress, &self.fade) {
            (Some(progress), Some(fade)) => {
                if fade.is_finished() {
                    LoaderPhase::Done
                } else if progress.is_finished() {
                    LoaderPhase::FadingOut
                } else {
                    LoaderPhase::Progress
                }
            }
            _ => LoaderPhase::Done,
        }
    }

    /// Progress in `[0, 100]`.
    pub fn progress(&self) -> f64 {
        self.progress.as_ref().map_or(100.0, ChannelHandle::value)
    }

    /// Stroke dash offset of the progress ring: `C - p / 100 * C`.
    pub fn dash_offset(&self) -> f64 {
        RING_CIRCUMFERENCE - self.progress() / 100.0 * RING_CIRCUMFERENCE
    }

    /// Zero-padded percentage label, e.g. `042%`.
    pub fn label(&self) -> String {
        format!("{:03}%", self.progress().round() as u32)
    }

    /// Screen opacity.
    pub fn opacity(&self) -> f64 {
        self.fade.as_ref().map_or(0.0, ChannelHandle::value)
    }

    fn ring_layer(&self) -> LayerDraw {
        let c = Point::new(VIEW_BOX / 2.0, VIEW_BOX / 2.0);
        let ring = Circle::new(c, RING_RADIUS);
        let ops = vec![
            DrawOp::Circle {
                circle: ring,
                stroke: Stroke::solid(PRISMA_WHITE.with_alpha(0.05), 1.0),
                rotation_deg: 0.0,
            },
            DrawOp::Circle {
                circle: ring,
                stroke: Stroke::solid(PRISMA_BLUE, 1.5)
                    .dashed([RING_CIRCUMFERENCE, RING_CIRCUMFERENCE])
                    .dash_offset(self.dash_offset())
                    .glowing(Glow {
                        color: PRISMA_BLUE.with_alpha(0.5),
                        radius: 8.0,
                    }),
                rotation_deg: -90.0,
            },
            DrawOp::Label {
                anchor: Point::new(c.x, VIEW_BOX + 30.0),
                text: self.label(),
                size: 18.0,
                fill: PRISMA_WHITE,
            },
        ];
        LayerDraw {
            state: flat_layer(),
            transform: LayerTransform {
                translate_z: 0.0,
                scale: RING_BOX / VIEW_BOX,
            },
            group_opacity: 1.0,
            size: (VIEW_BOX, VIEW_BOX),
            ops,
        }
    }
}

impl Visual for LoadingScreen {
    fn kind(&self) -> VisualKind {
        VisualKind::Loader
    }

    fn frame(&self) -> VisualFrame {
        let mut layers = Vec::with_capacity(2);
        if let Some(logo) = &self.logo {
            layers.push(logo.layer());
        }
        layers.push(self.ring_layer());
        VisualFrame {
            kind: VisualKind::Loader,
            size: FRAME_SIZE,
            perspective: None,
            pose: StackPose::default(),
            opacity: self.opacity(),
            layers,
            faces: Vec::new(),
            glow: None,
        }
    }

    fn is_animated(&self) -> bool {
        self.phase() != LoaderPhase::Done
    }
}

#[cfg(test)]
#[path = "../../tests/unit/visuals/loader.rs"]
mod tests;
