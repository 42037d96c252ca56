//! Pointer-driven behaviour: normalised pointer state, tilt, the cursor follower and the
//! interactive-region registry.

pub(crate) mod cursor;
pub(crate) mod host;
pub(crate) mod pointer;
pub(crate) mod regions;
pub(crate) mod tilt;
