//! Parametric prism geometry. Every function here is pure: identical inputs yield identical
//! coordinates, and every coordinate is proportional to `base_size`.

pub(crate) mod lattice;
pub(crate) mod radial;
pub(crate) mod shape;
pub(crate) mod spec;
pub(crate) mod triangle;
