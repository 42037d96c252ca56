use std::path::Path;

use crate::animation::timeline::Timeline;
use crate::composite::layer::FalloffParams;
use crate::foundation::core::{Canvas, PRISMA_BLACK, Rgba8};
use crate::foundation::error::{PrismaError, PrismaResult};
use crate::foundation::math::{require_non_negative, require_positive};
use crate::interaction::host::HostCapabilities;
use crate::render::raster::MAX_DIM;
use crate::render::svg::{DEFAULT_CIRCLE_SEGMENTS, SvgOptions};
use crate::visuals::frame::{Visual, VisualFrame, VisualKind};
use crate::visuals::geometric_prism::{GeometricPrism, GeometricPrismConfig};
use crate::visuals::loader::{LoaderConfig, LoadingScreen};
use crate::visuals::logo::{LogoConfig, PrismaLogo};
use crate::visuals::prisma3d::{Prisma3d, Prisma3dConfig};

/// JSON-facing description of one rendered visual.
///
/// Unset optional fields fall back to the component's own defaults.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneConfig {
    /// Component to mount.
    pub visual: VisualKind,
    /// Container edge.
    pub size: Option<f64>,
    /// Stacked layers (prisms only).
    pub layers: Option<u32>,
    /// Depth between layers (prisms only).
    pub layer_spacing: Option<f64>,
    /// Run the component's channels.
    pub animated: bool,
    /// Falloff override (prisms only).
    pub falloff: Option<FalloffParams>,
    /// Host capabilities the component is mounted for.
    pub host: HostCapabilities,
    /// Output size in pixels.
    pub canvas: Canvas,
    /// Background fill; `None` renders transparent.
    pub background: Option<Rgba8>,
    /// Timeline position to sample, in seconds.
    pub time_secs: f64,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            visual: VisualKind::GeometricPrism,
            size: None,
            layers: None,
            layer_spacing: None,
            animated: true,
            falloff: None,
            host: HostCapabilities::DESKTOP,
            canvas: Canvas::default(),
            background: Some(PRISMA_BLACK),
            time_secs: 0.0,
        }
    }
}

impl SceneConfig {
    /// Default scene for `visual`.
    pub fn for_visual(visual: VisualKind) -> Self {
        Self {
            visual,
            ..Self::default()
        }
    }

    /// Parse and validate a JSON document.
    pub fn from_json_str(s: &str) -> PrismaResult<Self> {
        let cfg: Self = serde_json::from_str(s)
            .map_err(|e| PrismaError::serde(format!("parse scene config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse and validate a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> PrismaResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| {
            PrismaError::validation(format!("open scene config '{}': {e}", path.display()))
        })?;
        Self::from_json_str(&text)
    }

    /// Pretty JSON for this config.
    pub fn to_json_pretty(&self) -> PrismaResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PrismaError::serde(format!("serialize scene config: {e}")))
    }

    /// Check every field the chosen component will read.
    pub fn validate(&self) -> PrismaResult<()> {
        if let Some(size) = self.size {
            require_positive("size", size)?;
        }
        if self.layers == Some(0) {
            return Err(PrismaError::validation("layers must be >= 1"));
        }
        if let Some(spacing) = self.layer_spacing {
            require_non_negative("layer_spacing", spacing)?;
        }
        if let Some(falloff) = &self.falloff {
            falloff.validate()?;
        }
        let Canvas { width, height } = self.canvas;
        if width == 0 || height == 0 || width > MAX_DIM || height > MAX_DIM {
            return Err(PrismaError::validation(format!(
                "canvas {width}x{height} outside 1..={MAX_DIM}"
            )));
        }
        require_non_negative("time_secs", self.time_secs)?;

        let layered = matches!(
            self.visual,
            VisualKind::GeometricPrism | VisualKind::Prisma3d
        );
        if !layered && (self.layers.is_some() || self.layer_spacing.is_some() || self.falloff.is_some())
        {
            tracing::warn!(
                visual = self.visual.as_str(),
                "layer options are ignored for this visual"
            );
        }
        Ok(())
    }

    /// Hero prism options with overrides applied.
    pub fn geometric_prism_config(&self) -> GeometricPrismConfig {
        let d = GeometricPrismConfig::default();
        GeometricPrismConfig {
            size: self.size.unwrap_or(d.size),
            layers: self.layers.unwrap_or(d.layers),
            layer_spacing: self.layer_spacing.unwrap_or(d.layer_spacing),
            falloff: self.falloff.unwrap_or(d.falloff),
            animated: self.animated,
            ..d
        }
    }

    /// Interactive prism options with overrides applied.
    pub fn prisma3d_config(&self) -> Prisma3dConfig {
        let d = Prisma3dConfig::default();
        Prisma3dConfig {
            size: self.size.unwrap_or(d.size),
            layers: self.layers.unwrap_or(d.layers),
            layer_spacing: self.layer_spacing.unwrap_or(d.layer_spacing),
            falloff: self.falloff.unwrap_or(d.falloff),
            animated: self.animated,
            ..d
        }
    }

    /// Logo options with overrides applied.
    pub fn logo_config(&self) -> LogoConfig {
        LogoConfig {
            size: self.size.unwrap_or(LogoConfig::default().size),
            animated: self.animated,
        }
    }

    /// SVG emission options.
    pub fn svg_options(&self) -> SvgOptions {
        SvgOptions {
            canvas: self.canvas,
            background: self.background,
            circle_segments: DEFAULT_CIRCLE_SEGMENTS,
        }
    }

    /// Mount the configured component on `timeline`.
    pub fn mount(&self, timeline: &mut Timeline) -> PrismaResult<Box<dyn Visual>> {
        let host = &self.host;
        Ok(match self.visual {
            VisualKind::GeometricPrism => Box::new(GeometricPrism::mount(
                self.geometric_prism_config(),
                timeline,
                host,
            )?),
            VisualKind::Prisma3d => {
                Box::new(Prisma3d::mount(self.prisma3d_config(), timeline, host)?)
            }
            VisualKind::Logo => Box::new(PrismaLogo::mount(self.logo_config(), timeline, host)?),
            VisualKind::Loader => Box::new(LoadingScreen::mount(
                LoaderConfig::default(),
                timeline,
                host,
                || {},
            )?),
        })
    }

    /// Mount on a fresh timeline, advance to `time_secs`, and capture the frame.
    #[tracing::instrument(skip(self), fields(visual = self.visual.as_str(), t = self.time_secs))]
    pub fn frame(&self) -> PrismaResult<VisualFrame> {
        self.validate()?;
        let mut timeline = Timeline::new();
        let visual = self.mount(&mut timeline)?;
        if self.time_secs > 0.0 {
            timeline.tick(self.time_secs);
        }
        Ok(visual.frame())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
