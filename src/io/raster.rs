//! Raster rendering surface backed by an RGBA image
//!
//! Strokes are drawn by stamping filled discs along the sampled outline, which keeps
//! thick lines and arcs visually consistent without an anti-aliasing pass.

use image::{Rgba, RgbaImage};

use crate::io::configuration::{BACKGROUND_COLOR, HSB_COLOR_MAX};
use crate::io::surface::{RenderSurface, Transform};
use crate::math::color::Hsb;
use crate::math::interpolation::{lerp, lerp_point};
use crate::spatial::grid::TileGrid;
use crate::spatial::tiles::Point;

/// Distance in pixels between stamped discs along a stroke
const SAMPLE_SPACING: f64 = 0.5;

/// Image-backed [`RenderSurface`]
#[derive(Debug, Clone)]
pub struct RasterSurface {
    image: RgbaImage,
    color: Rgba<u8>,
    weight: f64,
    transform: Transform,
    saved: Vec<Transform>,
}

impl RasterSurface {
    /// Create a surface filled with the background color
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, Rgba(BACKGROUND_COLOR)),
            color: Rgba([255, 255, 255, 255]),
            weight: 1.0,
            transform: Transform::default(),
            saved: Vec::new(),
        }
    }

    /// Create a surface exactly covering a grid
    pub fn for_grid(grid: &TileGrid) -> Self {
        let (width, height) = grid.pixel_size();
        Self::new(width.ceil() as u32, height.ceil() as u32)
    }

    /// Rendered pixels
    pub const fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Consume the surface, keeping its pixels
    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Replace every pixel with the background color
    pub fn clear(&mut self) {
        for pixel in self.image.pixels_mut() {
            *pixel = Rgba(BACKGROUND_COLOR);
        }
    }

    /// Overwrite every pixel with those of `image` when the sizes match
    pub fn restore(&mut self, image: &RgbaImage) {
        if image.dimensions() == self.image.dimensions() {
            self.image.clone_from(image);
        }
    }

    fn stamp(&mut self, center: Point) {
        let radius = (self.weight / 2.0).max(SAMPLE_SPACING);
        let radius_squared = radius * radius;
        let width = i64::from(self.image.width());
        let height = i64::from(self.image.height());

        let min_x = ((center.x - radius).floor() as i64).max(0);
        let max_x = ((center.x + radius).ceil() as i64).min(width - 1);
        let min_y = ((center.y - radius).floor() as i64).max(0);
        let max_y = ((center.y + radius).ceil() as i64).min(height - 1);

        for py in min_y..=max_y {
            for px in min_x..=max_x {
                let dx = px as f64 + 0.5 - center.x;
                let dy = py as f64 + 0.5 - center.y;
                if dx.mul_add(dx, dy * dy) <= radius_squared {
                    self.image.put_pixel(px as u32, py as u32, self.color);
                }
            }
        }
    }
}

impl RenderSurface for RasterSurface {
    fn stroke(&mut self, color: Hsb) {
        self.color = Rgba(color.to_rgba(HSB_COLOR_MAX));
    }

    fn stroke_weight(&mut self, weight: f64) {
        self.weight = weight;
    }

    fn line(&mut self, from: Point, to: Point) {
        let from = self.transform.apply(from);
        let to = self.transform.apply(to);
        let length = (to.x - from.x).hypot(to.y - from.y);
        let steps = (length / SAMPLE_SPACING).ceil().max(1.0) as usize;

        for step in 0..=steps {
            self.stamp(lerp_point(from, to, step as f64 / steps as f64));
        }
    }

    fn arc(&mut self, center: Point, width: f64, height: f64, start: f64, stop: f64) {
        if stop <= start {
            return;
        }

        let radius_x = width / 2.0;
        let radius_y = height / 2.0;
        let scale = self.transform.scale;
        let reach = (radius_x * scale.x.abs()).max(radius_y * scale.y.abs());
        let steps = ((stop - start) * reach / SAMPLE_SPACING).ceil().max(1.0) as usize;

        for step in 0..=steps {
            let angle = lerp(start, stop, step as f64 / steps as f64);
            let local = Point::new(
                radius_x.mul_add(angle.cos(), center.x),
                radius_y.mul_add(angle.sin(), center.y),
            );
            self.stamp(self.transform.apply(local));
        }
    }

    fn push(&mut self) {
        self.saved.push(self.transform);
    }

    fn pop(&mut self) {
        self.transform = self.saved.pop().unwrap_or_default();
    }

    fn translate(&mut self, offset: Point) {
        self.transform = self.transform.translated(offset);
    }

    fn scale(&mut self, x: f64, y: f64) {
        self.transform = self.transform.scaled(x, y);
    }
}
