use gridlab_core::{Color, GridMap, Point};
use image::{Rgb, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_line_segment_mut};
use imageproc::rect::Rect;

use crate::palette;
use crate::request::{DrawMode, DrawRequest};

/// Pixels per grid cell unless configured otherwise.
pub const DEFAULT_SCALE: u32 = 5;

/// Largest accepted pixels-per-cell value.
pub const MAX_SCALE: u32 = 64;

/// Rasterizes [`DrawRequest`]s into RGB images, `scale` pixels per cell.
#[derive(Debug, Clone, Copy)]
pub struct Canvas {
    scale: u32,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(DEFAULT_SCALE)
    }
}

impl Canvas {
    /// Create a canvas. The scale is clamped to `1..=MAX_SCALE`.
    pub fn new(scale: u32) -> Self {
        Self {
            scale: scale.clamp(1, MAX_SCALE),
        }
    }

    /// Pixels per cell.
    pub fn scale(&self) -> u32 {
        self.scale
    }

    /// Width of the path line in continuous mode.
    pub fn line_width(&self) -> u32 {
        (self.scale / 2).max(2)
    }

    /// Draw `req` into a fresh image.
    ///
    /// Layers, bottom to top: obstacles, discovered, expanded, re-expanded
    /// (discrete only), path cells (discrete only), start and goal markers,
    /// path line (continuous only). Markers on obstacle cells are skipped.
    pub fn render(&self, req: &DrawRequest<'_>) -> RgbImage {
        let (h, w) = req.map.size();
        let mut img = RgbImage::from_pixel(
            (w.max(0) as u32).saturating_mul(self.scale),
            (h.max(0) as u32).saturating_mul(self.scale),
            rgb(palette::BACKGROUND),
        );

        for p in req.map.obstacles() {
            self.fill_cell(&mut img, p, palette::OBSTACLE);
        }

        let mut overlays = vec![
            (&req.discovered, palette::DISCOVERED),
            (&req.expanded, palette::EXPANDED),
        ];
        if req.mode == DrawMode::Discrete {
            overlays.push((&req.reexpanded, palette::REEXPANDED));
        }
        for (nodes, color) in overlays {
            for &p in nodes.iter().flatten() {
                self.fill_cell(&mut img, p, color);
            }
        }

        if req.mode == DrawMode::Discrete {
            for &p in req.path.iter().flatten() {
                let color = if req.map.traversable(p.row(), p.col()) {
                    palette::PATH
                } else {
                    palette::PATH_BLOCKED
                };
                self.fill_cell(&mut img, p, color);
            }
        }

        for (marker, color) in [(req.start, palette::START), (req.goal, palette::GOAL)] {
            if let Some(p) = marker {
                if req.map.traversable(p.row(), p.col()) {
                    self.fill_cell(&mut img, p, color);
                }
            }
        }

        if req.mode == DrawMode::Continuous {
            if let Some(path) = &req.path {
                self.draw_polyline(&mut img, path, palette::PATH);
            }
        }

        img
    }

    /// Pixel coordinates of a cell's centre.
    pub fn cell_center(&self, p: Point) -> (f32, f32) {
        let s = self.scale as f32;
        (p.col() as f32 * s + s / 2.0, p.row() as f32 * s + s / 2.0)
    }

    fn fill_cell(&self, img: &mut RgbImage, p: Point, color: Color) {
        if p.x < 0 || p.y < 0 {
            return;
        }
        let s = self.scale as i32;
        // Cells too far out to have a pixel origin lie off the image anyway.
        let (Some(x), Some(y)) = (p.x.checked_mul(s), p.y.checked_mul(s)) else {
            return;
        };
        let rect = Rect::at(x, y).of_size(self.scale, self.scale);
        draw_filled_rect_mut(img, rect, rgb(color));
    }

    fn draw_polyline(&self, img: &mut RgbImage, path: &[Point], color: Color) {
        match path {
            [] => {}
            [only] => self.draw_thick_segment(img, *only, *only, color),
            _ => {
                for seg in path.windows(2) {
                    self.draw_thick_segment(img, seg[0], seg[1], color);
                }
            }
        }
    }

    // A line_width() x line_width() brush swept from `a` to `b`.
    fn draw_thick_segment(&self, img: &mut RgbImage, a: Point, b: Point, color: Color) {
        let width = self.line_width() as i32;
        let lo = -(width / 2);
        let (x0, y0) = self.cell_center(a);
        let (x1, y1) = self.cell_center(b);
        for dy in lo..lo + width {
            for dx in lo..lo + width {
                let (dx, dy) = (dx as f32, dy as f32);
                draw_line_segment_mut(img, (x0 + dx, y0 + dy), (x1 + dx, y1 + dy), rgb(color));
            }
        }
    }
}

fn rgb(c: Color) -> Rgb<u8> {
    Rgb(c.to_rgb())
}
