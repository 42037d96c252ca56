//! Routing and the stage that mounts and releases page visuals on navigation.

pub(crate) mod route;
pub(crate) mod stage;
