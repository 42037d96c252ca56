use crate::foundation::error::{PrismaError, PrismaResult};

pub use kurbo::{Affine, Circle, Line, Point, Rect, Vec2};

/// Straight (non-premultiplied) RGBA8 colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel (`255` is opaque).
    pub a: u8,
}

impl Rgba8 {
    /// Opaque colour from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Fully transparent black.
    pub const fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }

    /// Parse `#rgb`, `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(s: &str) -> PrismaResult<Self> {
        let hex = s.trim().trim_start_matches('#');
        let digit = |c: u8| -> PrismaResult<u8> {
            (c as char)
                .to_digit(16)
                .map(|d| d as u8)
                .ok_or_else(|| PrismaError::validation(format!("invalid hex colour '{s}'")))
        };
        let bytes = hex.as_bytes();
        match bytes.len() {
            3 => {
                let r = digit(bytes[0])?;
                let g = digit(bytes[1])?;
                let b = digit(bytes[2])?;
                Ok(Self::rgb(r * 17, g * 17, b * 17))
            }
            6 | 8 => {
                let mut out = [255u8; 4];
                for (i, pair) in bytes.chunks(2).enumerate() {
                    out[i] = (digit(pair[0])? << 4) | digit(pair[1])?;
                }
                Ok(Self {
                    r: out[0],
                    g: out[1],
                    b: out[2],
                    a: out[3],
                })
            }
            _ => Err(PrismaError::validation(format!(
                "invalid hex colour '{s}'"
            ))),
        }
    }

    /// Same colour with alpha replaced by `alpha` in `[0, 1]`.
    pub fn with_alpha(self, alpha: f64) -> Self {
        let a = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self { a, ..self }
    }

    /// Alpha as a normalized `[0, 1]` value.
    pub fn alpha_f64(self) -> f64 {
        f64::from(self.a) / 255.0
    }

    /// `#rrggbb` without alpha; pair with [`Rgba8::alpha_f64`] for SVG opacity attributes.
    pub fn to_hex_rgb(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Studio accent blue (`#3C4FFF`).
pub const PRISMA_BLUE: Rgba8 = Rgba8::rgb(60, 79, 255);
/// Off-white used for outlines (`#F5F5F5`).
pub const PRISMA_WHITE: Rgba8 = Rgba8::rgb(245, 245, 245);
/// Page background.
pub const PRISMA_BLACK: Rgba8 = Rgba8::rgb(10, 10, 10);

/// Output surface size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Create a validated canvas with non-zero dimensions.
    pub fn new(width: u32, height: u32) -> PrismaResult<Self> {
        if width == 0 || height == 0 {
            return Err(PrismaError::validation("Canvas dimensions must be > 0"));
        }
        Ok(Self { width, height })
    }

    /// Canvas centre point.
    pub fn center(self) -> Point {
        Point::new(f64::from(self.width) * 0.5, f64::from(self.height) * 0.5)
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 512,
            height: 512,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
