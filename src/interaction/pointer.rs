use crate::foundation::core::{Point, Rect, Vec2};
use crate::foundation::error::{PrismaError, PrismaResult};

/// Pointer position relative to a reference element, normalised to `[-0.5, 0.5]` per axis
/// with `(0, 0)` at the element centre.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PointerState {
    /// Horizontal offset, positive to the right.
    pub x: f64,
    /// Vertical offset, positive downwards.
    pub y: f64,
    /// `true` while the pointer is over the element.
    pub inside: bool,
}

impl PointerState {
    /// Centred, outside the element.
    pub const NEUTRAL: Self = Self {
        x: 0.0,
        y: 0.0,
        inside: false,
    };

    /// Normalise a client-space position against the element's bounding box.
    pub fn from_client(client: Point, bounds: Rect) -> PrismaResult<Self> {
        let (w, h) = (bounds.width(), bounds.height());
        if !(w > 0.0 && h > 0.0) || !client.x.is_finite() || !client.y.is_finite() {
            return Err(PrismaError::validation(
                "pointer bounds must have positive size and the position must be finite",
            ));
        }
        let c = bounds.center();
        Ok(Self {
            x: ((client.x - c.x) / w).clamp(-0.5, 0.5),
            y: ((client.y - c.y) / h).clamp(-0.5, 0.5),
            inside: bounds.contains(client),
        })
    }

    /// Update from a pointer-move event.
    pub fn move_to(&mut self, client: Point, bounds: Rect) -> PrismaResult<()> {
        *self = Self::from_client(client, bounds)?;
        self.inside = true;
        Ok(())
    }

    /// Reset on pointer-leave.
    pub fn leave(&mut self) {
        *self = Self::NEUTRAL;
    }

    /// Offset as a vector.
    pub fn offset(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Document-wide pointer position shared by every pointer-driven visual.
///
/// Observers read it; only the host event feed writes it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerTracker {
    position: Option<Point>,
    in_document: bool,
}

impl PointerTracker {
    /// Record a move in client coordinates.
    pub fn moved(&mut self, client: Point) {
        self.position = Some(client);
        self.in_document = true;
    }

    /// Pointer left the document.
    pub fn left_document(&mut self) {
        self.in_document = false;
    }

    /// Pointer re-entered the document.
    pub fn entered_document(&mut self) {
        self.in_document = true;
    }

    /// Last known client position.
    pub fn position(&self) -> Option<Point> {
        self.position
    }

    /// `true` while the pointer is inside the document.
    pub fn in_document(&self) -> bool {
        self.in_document
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interaction/pointer.rs"]
mod tests;
