use std::collections::BTreeMap;

use crate::foundation::core::{Point, Rect};
use crate::foundation::error::{PrismaError, PrismaResult};

/// Kind of element that turns the custom cursor into its hover state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RegionKind {
    /// Anchor.
    Link,
    /// Button element.
    Button,
    /// Text input.
    Input,
    /// Multi-line text input.
    TextArea,
    /// Drop-down.
    Select,
    /// Any element with a button role.
    RoleButton,
    /// Element opted in explicitly.
    CustomHover,
}

/// Identifier returned by [`RegionRegistry::insert`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RegionId(u64);

/// One interactive region in client coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Region {
    /// Identifier.
    pub id: RegionId,
    /// Element kind.
    pub kind: RegionKind,
    /// Bounding box.
    pub bounds: Rect,
}

/// The set of interactive regions, maintained by the presentation layer.
///
/// Every mutation bumps [`RegionRegistry::revision`] so observers can resynchronise.
#[derive(Clone, Debug, Default)]
pub struct RegionRegistry {
    regions: BTreeMap<RegionId, Region>,
    next_id: u64,
    revision: u64,
}

impl RegionRegistry {
    /// Empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a region.
    pub fn insert(&mut self, kind: RegionKind, bounds: Rect) -> RegionId {
        let id = RegionId(self.next_id);
        self.next_id += 1;
        self.regions.insert(id, Region { id, kind, bounds });
        self.revision += 1;
        id
    }

    /// Move or resize a region.
    pub fn update_bounds(&mut self, id: RegionId, bounds: Rect) -> PrismaResult<()> {
        let region = self
            .regions
            .get_mut(&id)
            .ok_or_else(|| PrismaError::validation(format!("unknown region {}", id.0)))?;
        if region.bounds != bounds {
            region.bounds = bounds;
            self.revision += 1;
        }
        Ok(())
    }

    /// Remove a region; returns `false` when it was not registered.
    pub fn remove(&mut self, id: RegionId) -> bool {
        let removed = self.regions.remove(&id).is_some();
        if removed {
            self.revision += 1;
        }
        removed
    }

    /// Remove every region.
    pub fn clear(&mut self) {
        if !self.regions.is_empty() {
            self.regions.clear();
            self.revision += 1;
        }
    }

    /// Most recently added region containing `point`.
    pub fn hit(&self, point: Point) -> Option<&Region> {
        self.regions
            .values()
            .rev()
            .find(|r| r.bounds.contains(point))
    }

    /// Change counter.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Number of regions.
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// `true` when empty.
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

/// Change subscription over a [`RegionRegistry`].
#[derive(Clone, Copy, Debug, Default)]
pub struct RegionWatcher {
    seen: Option<u64>,
}

impl RegionWatcher {
    /// Watcher that reports a change on its first poll.
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` when the registry changed since the previous poll.
    pub fn poll(&mut self, registry: &RegionRegistry) -> bool {
        let rev = registry.revision();
        let changed = self.seen != Some(rev);
        self.seen = Some(rev);
        changed
    }
}

#[cfg(test)]
#[path = "../../tests/unit/interaction/regions.rs"]
mod tests;
