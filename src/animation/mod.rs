//! Frame-driven timeline: easing curves, channel specs, the scheduler, scoped ownership
//! and scroll reveals.

pub(crate) mod channel;
pub(crate) mod clock;
pub(crate) mod ease;
pub(crate) mod reveal;
pub(crate) mod scope;
pub(crate) mod timeline;
