//! Rendering of search results for visual inspection.
//!
//! The bench describes what to draw with a [`DrawRequest`] and hands it to
//! a [`RenderSink`]. [`Canvas`] rasterizes requests into RGB images and
//! [`ImageSink`] writes those images out as PNG files.

mod canvas;
pub mod palette;
mod request;
mod sink;

pub use canvas::{Canvas, DEFAULT_SCALE, MAX_SCALE};
pub use request::{DrawMode, DrawRequest};
pub use sink::{ImageSink, NoopSink, RenderError, RenderSink};
