//! CPU raster surface.
//!
//! An RGBA8 backing store with source-over blending and one-pixel
//! analytic antialiasing for circle fills and thin line strokes. Spawn
//! radii go down to 0.2 px, so hard-edged rasterization would drop the
//! smallest dots entirely; coverage-based blending keeps them visible.
//!
//! The pixel buffer is `bytemuck`-castable for upload by the window
//! presenter, and can be snapshotted to a PNG for debugging.

use bytemuck::{Pod, Zeroable};
use glam::Vec2;
use std::path::Path;

use crate::error::SnapshotError;

/// A straight-alpha color with components in `0..=1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// The same color with a different alpha.
    pub const fn with_alpha(self, a: f32) -> Self {
        Self {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }
}

/// One packed pixel of the backing store.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Pod, Zeroable)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Immediate-mode drawing operations the frame renderer needs.
///
/// The window presenter paints into a [`Canvas`]; renderer tests
/// substitute a recording surface to assert on the draw-call sequence.
pub trait Surface {
    fn clear(&mut self, color: Rgba);
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba);
    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);
}

/// The concrete raster surface the field is painted onto.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Rgba8>,
}

impl Canvas {
    /// A black, fully transparent canvas. Zero on either axis is valid
    /// and makes every draw a no-op.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgba8::zeroed(); (width as usize) * (height as usize)],
        }
    }

    /// Reallocate the backing store for new dimensions. Previous pixel
    /// content is discarded.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixels.clear();
        self.pixels
            .resize((width as usize) * (height as usize), Rgba8::zeroed());
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// The backing store, row-major from the top-left.
    pub fn pixels(&self) -> &[Rgba8] {
        &self.pixels
    }

    /// The backing store as raw bytes, ready for texture upload.
    pub fn bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Read one pixel; panics out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Rgba8 {
        assert!(x < self.width && y < self.height);
        self.pixels[(y * self.width + x) as usize]
    }

    /// Write the current frame to a PNG file.
    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<(), SnapshotError> {
        let image = image::RgbaImage::from_raw(self.width, self.height, self.bytes().to_vec())
            .ok_or_else(|| {
                SnapshotError::Io(std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    "pixel buffer does not match canvas dimensions",
                ))
            })?;
        image.save(path.as_ref())?;
        Ok(())
    }

    /// Source-over blend of `color` scaled by `coverage` onto one pixel.
    /// Out-of-bounds coordinates are ignored.
    fn blend(&mut self, x: i64, y: i64, color: Rgba, coverage: f32) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let alpha = (color.a * coverage).clamp(0.0, 1.0);
        if alpha <= 0.0 {
            return;
        }

        let index = (y as usize) * (self.width as usize) + x as usize;
        let dst = self.pixels[index];
        let inv = 1.0 - alpha;

        self.pixels[index] = Rgba8 {
            r: to_byte(color.r * alpha + from_byte(dst.r) * inv),
            g: to_byte(color.g * alpha + from_byte(dst.g) * inv),
            b: to_byte(color.b * alpha + from_byte(dst.b) * inv),
            a: to_byte(alpha + from_byte(dst.a) * inv),
        };
    }
}

impl Surface for Canvas {
    fn clear(&mut self, color: Rgba) {
        let pixel = Rgba8 {
            r: to_byte(color.r),
            g: to_byte(color.g),
            b: to_byte(color.b),
            a: to_byte(color.a),
        };
        self.pixels.fill(pixel);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        if radius <= 0.0 {
            return;
        }
        let reach = radius + 0.5;
        let x0 = (center.x - reach).floor() as i64;
        let x1 = (center.x + reach).ceil() as i64;
        let y0 = (center.y - reach).floor() as i64;
        let y1 = (center.y + reach).ceil() as i64;

        for y in y0..=y1 {
            for x in x0..=x1 {
                let sample = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                let coverage = (radius + 0.5 - sample.distance(center)).clamp(0.0, 1.0);
                self.blend(x, y, color, coverage);
            }
        }
    }

    fn stroke_line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        let half = width * 0.5;
        let reach = half + 1.0;
        let x0 = (from.x.min(to.x) - reach).floor() as i64;
        let x1 = (from.x.max(to.x) + reach).ceil() as i64;
        let y0 = (from.y.min(to.y) - reach).floor() as i64;
        let y1 = (from.y.max(to.y) + reach).ceil() as i64;

        for y in y0..=y1 {
            for x in x0..=x1 {
                let sample = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                let coverage =
                    (half + 0.5 - segment_distance(sample, from, to)).clamp(0.0, 1.0);
                self.blend(x, y, color, coverage);
            }
        }
    }
}

/// Distance from `point` to the segment `a`-`b`.
fn segment_distance(point: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq <= f32::EPSILON {
        return point.distance(a);
    }
    let t = ((point - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    point.distance(a + ab * t)
}

fn from_byte(value: u8) -> f32 {
    value as f32 / 255.0
}

fn to_byte(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0 + 0.5) as u8
}
