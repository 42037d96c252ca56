//! The decorative components. Each one mounts against a [`Timeline`](crate::Timeline),
//! owns its channels, and reports a [`VisualFrame`](crate::VisualFrame) per tick.

pub(crate) mod frame;
pub(crate) mod geometric_prism;
pub(crate) mod loader;
pub(crate) mod logo;
pub(crate) mod prisma3d;
