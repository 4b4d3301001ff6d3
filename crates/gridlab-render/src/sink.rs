use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::canvas::Canvas;
use crate::request::DrawRequest;

/// Receiver of draw requests.
///
/// Drawing is best-effort: sinks report their own failures (usually through
/// the `log` facade) and never hand errors back to the bench.
pub trait RenderSink {
    fn draw(&mut self, request: &DrawRequest<'_>);
}

impl<S: RenderSink + ?Sized> RenderSink for &mut S {
    fn draw(&mut self, request: &DrawRequest<'_>) {
        (**self).draw(request)
    }
}

impl<S: RenderSink + ?Sized> RenderSink for Box<S> {
    fn draw(&mut self, request: &DrawRequest<'_>) {
        (**self).draw(request)
    }
}

/// Sink that discards every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl RenderSink for NoopSink {
    fn draw(&mut self, _request: &DrawRequest<'_>) {}
}

/// Error writing a rendered image.
#[derive(Debug)]
pub enum RenderError {
    /// The output directory could not be created.
    Io(std::io::Error),
    /// The image could not be encoded or written.
    Image(image::ImageError),
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::Io(e) => write!(f, "cannot prepare output directory: {e}"),
            RenderError::Image(e) => write!(f, "cannot write image: {e}"),
        }
    }
}

impl std::error::Error for RenderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            RenderError::Io(e) => Some(e),
            RenderError::Image(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for RenderError {
    fn from(e: std::io::Error) -> Self {
        RenderError::Io(e)
    }
}

impl From<image::ImageError> for RenderError {
    fn from(e: image::ImageError) -> Self {
        RenderError::Image(e)
    }
}

/// Sink that rasterizes each request and saves it as
/// `<dir>/<prefix>-<NNN>.png`, numbering from zero.
#[derive(Debug, Clone)]
pub struct ImageSink {
    canvas: Canvas,
    dir: PathBuf,
    prefix: String,
    written: usize,
}

impl ImageSink {
    pub fn new(dir: impl Into<PathBuf>, prefix: impl Into<String>, scale: u32) -> Self {
        Self {
            canvas: Canvas::new(scale),
            dir: dir.into(),
            prefix: prefix.into(),
            written: 0,
        }
    }

    /// Directory images are written to.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Number of images written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Render `request` and write it out, returning the file path.
    pub fn save(&mut self, request: &DrawRequest<'_>) -> Result<PathBuf, RenderError> {
        fs::create_dir_all(&self.dir)?;
        let path = self
            .dir
            .join(format!("{}-{:03}.png", self.prefix, self.written));
        self.canvas.render(request).save(&path)?;
        self.written += 1;
        Ok(path)
    }
}

impl RenderSink for ImageSink {
    fn draw(&mut self, request: &DrawRequest<'_>) {
        match self.save(request) {
            Ok(path) => log::info!("wrote {}", path.display()),
            Err(e) => log::warn!("rendering skipped: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::DrawMode;
    use gridlab_core::Map;

    #[test]
    fn image_sink_numbers_files() {
        let dir = tempfile::tempdir().unwrap();
        let map: Map = ". #\n# .".parse().unwrap();
        let mut sink = ImageSink::new(dir.path().join("out"), "run", 4);

        let req = DrawRequest::new(DrawMode::Discrete, &map);
        let first = sink.save(&req).unwrap();
        sink.draw(&req);

        assert_eq!(first.file_name().unwrap(), "run-000.png");
        assert!(dir.path().join("out/run-001.png").exists());
        assert_eq!(sink.written(), 2);

        let img = image::open(&first).unwrap().to_rgb8();
        assert_eq!(img.dimensions(), (8, 8));
    }

    #[test]
    fn image_sink_swallows_io_errors() {
        let dir = tempfile::tempdir().unwrap();
        // A regular file where the output directory should go.
        let blocker = dir.path().join("taken");
        fs::write(&blocker, b"x").unwrap();

        let map = Map::new(2, 2);
        let mut sink = ImageSink::new(&blocker, "run", 5);
        let req = DrawRequest::new(DrawMode::Continuous, &map);
        assert!(matches!(sink.save(&req), Err(RenderError::Io(_))));
        sink.draw(&req);
        assert_eq!(sink.written(), 0);
    }

    #[test]
    fn noop_sink_through_trait_object() {
        let map = Map::new(1, 1);
        let mut sink: Box<dyn RenderSink> = Box::new(NoopSink);
        sink.draw(&DrawRequest::new(DrawMode::Discrete, &map));
    }
}
