//! **gridlab-core**: shared types for the gridlab pathfinding test bench.
//!
//! This crate provides the foundational types used across the *gridlab*
//! crates: geometry primitives, the obstacle [`Map`] consumed by search
//! routines through [`GridMap`], and packed RGB [`Color`]s.

pub mod color;
pub mod geom;
pub mod map;

pub use color::Color;
pub use geom::{Point, Range};
pub use map::{GridMap, Map, MapError, parse_cells};
