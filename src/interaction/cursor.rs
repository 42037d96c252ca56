use crate::animation::channel::ChannelSpec;
use crate::animation::ease::Ease;
use crate::animation::scope::ChannelScope;
use crate::animation::timeline::Timeline;
use crate::foundation::core::{PRISMA_BLUE, PRISMA_WHITE, Point, Rgba8};
use crate::foundation::error::PrismaResult;
use crate::interaction::host::HostCapabilities;
use crate::interaction::regions::{RegionRegistry, RegionWatcher};

/// Follow timings and sizes of the custom cursor.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CursorParams {
    /// Seconds for the dot to catch up.
    pub dot_follow_secs: f64,
    /// Seconds for the ring to catch up.
    pub ring_follow_secs: f64,
    /// Follow curve.
    pub ease: Ease,
    /// Dot diameter `(idle, hover)`.
    pub dot_size: (f64, f64),
    /// Ring diameter `(idle, hover)`.
    pub ring_size: (f64, f64),
}

impl Default for CursorParams {
    fn default() -> Self {
        Self {
            dot_follow_secs: 0.08,
            ring_follow_secs: 0.15,
            ease: Ease::OutCubic,
            dot_size: (6.0, 8.0),
            ring_size: (32.0, 48.0),
        }
    }
}

/// What the presentation layer draws for the cursor this frame.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct CursorState {
    /// Dot centre.
    pub dot: Point,
    /// Ring centre.
    pub ring: Point,
    /// Dot diameter.
    pub dot_size: f64,
    /// Ring diameter.
    pub ring_size: f64,
    /// Ring stroke colour.
    pub ring_color: Rgba8,
    /// Dot fill colour.
    pub dot_color: Rgba8,
    /// `false` while the pointer is outside the document.
    pub visible: bool,
    /// `true` over an interactive region.
    pub hovering: bool,
}

/// Dot and trailing ring that chase the pointer.
///
/// Disabled on hosts without a fine pointer; a disabled follower ignores input and is
/// never visible. Under reduced motion the dot and ring jump straight to the pointer.
#[derive(Debug)]
pub struct CursorFollower {
    params: CursorParams,
    enabled: bool,
    animated: bool,
    visible: bool,
    hovering: bool,
    target: Point,
    rest_dot: Point,
    rest_ring: Point,
    scope: Option<ChannelScope>,
    watcher: RegionWatcher,
}

impl CursorFollower {
    /// Follower for the given host.
    pub fn new(params: CursorParams, host: &HostCapabilities) -> Self {
        let enabled = host.allows_hover();
        if !enabled {
            tracing::debug!(pointer = ?host.pointer, "custom cursor disabled");
        }
        Self {
            params,
            enabled,
            animated: host.allows_motion(),
            visible: false,
            hovering: false,
            target: Point::ZERO,
            rest_dot: Point::ZERO,
            rest_ring: Point::ZERO,
            scope: None,
            watcher: RegionWatcher::new(),
        }
    }

    /// `false` on coarse or missing pointers.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Retarget both followers from where they are now.
    pub fn pointer_move(
        &mut self,
        at: Point,
        regions: &RegionRegistry,
        timeline: &mut Timeline,
    ) -> PrismaResult<()> {
        if !self.enabled {
            return Ok(());
        }
        self.visible = true;
        self.target = at;
        self.hovering = regions.hit(at).is_some();

        let (dot, ring) = (self.dot(), self.ring());
        let p = self.params;
        self.scope = None;
        if !self.animated {
            self.rest_dot = at;
            self.rest_ring = at;
            return Ok(());
        }
        let scope = ChannelScope::acquire(timeline, "cursor", |scope, tl| {
            let follow = |name: &str, from: f64, to: f64, secs: f64| {
                ChannelSpec::new(name, from, to, secs).ease(p.ease)
            };
            scope.register(tl, follow("dot_x", dot.x, at.x, p.dot_follow_secs))?;
            scope.register(tl, follow("dot_y", dot.y, at.y, p.dot_follow_secs))?;
            scope.register(tl, follow("ring_x", ring.x, at.x, p.ring_follow_secs))?;
            scope.register(tl, follow("ring_y", ring.y, at.y, p.ring_follow_secs))
        })?;
        self.rest_dot = at;
        self.rest_ring = at;
        self.scope = Some(scope);
        Ok(())
    }

    /// Re-evaluate hover when the interactive set changed under a still pointer.
    pub fn sync_regions(&mut self, regions: &RegionRegistry) {
        if self.enabled && self.watcher.poll(regions) {
            self.hovering = self.visible && regions.hit(self.target).is_some();
        }
    }

    /// Pointer left the document.
    pub fn pointer_leave_document(&mut self) {
        self.visible = false;
        self.hovering = false;
    }

    /// Pointer entered the document.
    pub fn pointer_enter_document(&mut self) {
        if self.enabled {
            self.visible = true;
        }
    }

    fn dot(&self) -> Point {
        self.follow_point("dot_x", "dot_y", self.rest_dot)
    }

    fn ring(&self) -> Point {
        self.follow_point("ring_x", "ring_y", self.rest_ring)
    }

    fn follow_point(&self, x: &str, y: &str, rest: Point) -> Point {
        match &self.scope {
            Some(scope) => Point::new(scope.value_or(x, rest.x), scope.value_or(y, rest.y)),
            None => rest,
        }
    }

    /// Snapshot for drawing.
    pub fn state(&self) -> CursorState {
        let pick = |(idle, hover): (f64, f64)| if self.hovering { hover } else { idle };
        CursorState {
            dot: self.dot(),
            ring: self.ring(),
            dot_size: pick(self.params.dot_size),
            ring_size: pick(self.params.ring_size),
            ring_color: if self.hovering {
                PRISMA_BLUE.with_alpha(0.6)
            } else {
                PRISMA_WHITE.with_alpha(0.3)
            },
            dot_color: PRISMA_BLUE,
            visible: self.enabled && self.visible,
            hovering: self.hovering,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interaction/cursor.rs"]
mod tests;
