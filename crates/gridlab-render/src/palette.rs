//! Fixed colours used when rasterizing a search result.

use gridlab_core::Color;

/// Canvas background.
pub const BACKGROUND: Color = Color::WHITE;
/// Obstacle cells.
pub const OBSTACLE: Color = Color::from_rgb(70, 80, 80);
/// Nodes generated by the search.
pub const DISCOVERED: Color = Color::from_rgb(213, 219, 219);
/// Nodes expanded by the search.
pub const EXPANDED: Color = Color::from_rgb(131, 145, 146);
/// Nodes expanded more than once.
pub const REEXPANDED: Color = Color::from_rgb(255, 145, 146);
/// Path over free cells, and the any-angle path line.
pub const PATH: Color = Color::from_rgb(52, 152, 219);
/// Path cells that lie on an obstacle.
pub const PATH_BLOCKED: Color = Color::from_rgb(230, 126, 34);
/// Start marker.
pub const START: Color = Color::from_rgb(40, 180, 99);
/// Goal marker.
pub const GOAL: Color = Color::from_rgb(231, 76, 60);
