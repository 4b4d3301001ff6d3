//! Bench configuration.

use std::path::PathBuf;

use gridlab_render::{DEFAULT_SCALE, ImageSink};

/// Settings for rendering search results to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BenchConfig {
    /// Pixels per grid cell.
    pub scale: u32,
    /// Directory rendered images are written to.
    pub output_dir: PathBuf,
    /// File name prefix of rendered images.
    pub file_prefix: String,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            output_dir: PathBuf::from("gridlab-out"),
            file_prefix: "scenario".to_string(),
        }
    }
}

impl BenchConfig {
    /// Image sink writing into the configured directory.
    pub fn image_sink(&self) -> ImageSink {
        ImageSink::new(&self.output_dir, &self.file_prefix, self.scale)
    }
}
