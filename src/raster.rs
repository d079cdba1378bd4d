//! CPU raster implementation of [`Surface2D`].
//!
//! Backed by an [`image::RgbaImage`], with straightforward alpha-over
//! blending. This is the surface the demos and offline renders use; a
//! browser canvas or GPU host would supply its own implementation instead.
//! A zero-sized surface is a valid no-op target.

use glam::{Vec2, Vec3};
use image::RgbaImage;
use std::path::Path;

use crate::error::RasterError;
use crate::render::Surface2D;

/// An owned RGBA pixel buffer implementing [`Surface2D`].
pub struct RasterSurface {
    image: RgbaImage,
}

impl RasterSurface {
    /// A black, fully opaque surface of the given pixel size.
    pub fn new(width: u32, height: u32) -> Self {
        let mut image = RgbaImage::new(width, height);
        for px in image.pixels_mut() {
            px.0[3] = 255;
        }
        Self { image }
    }

    /// Surface size in pixels.
    pub fn size(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// The underlying pixel buffer.
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Write the surface as a PNG, creating parent directories as needed.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<(), RasterError> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        self.image.save(path.as_ref())?;
        Ok(())
    }

    /// Alpha-over blend of `color` at `alpha` into pixel `(x, y)`.
    fn blend(&mut self, x: i64, y: i64, color: Vec3, alpha: f32) {
        let (w, h) = self.image.dimensions();
        if x < 0 || y < 0 || x >= w as i64 || y >= h as i64 {
            return;
        }
        let alpha = alpha.clamp(0.0, 1.0);
        if alpha <= 0.0 {
            return;
        }
        let px = self.image.get_pixel_mut(x as u32, y as u32);
        for c in 0..3 {
            let dst = px.0[c] as f32 / 255.0;
            let src = color[c].clamp(0.0, 1.0);
            px.0[c] = ((src * alpha + dst * (1.0 - alpha)) * 255.0).round() as u8;
        }
    }

    /// Stamp a filled disc with one pixel of edge softness.
    fn stamp(&mut self, center: Vec2, radius: f32, color: Vec3, alpha: f32, glow: bool) {
        if radius <= 0.0 {
            return;
        }
        let min_x = (center.x - radius).floor() as i64;
        let max_x = (center.x + radius).ceil() as i64;
        let min_y = (center.y - radius).floor() as i64;
        let max_y = (center.y + radius).ceil() as i64;
        for y in min_y..=max_y {
            for x in min_x..=max_x {
                let d = Vec2::new(x as f32 + 0.5, y as f32 + 0.5).distance(center);
                let coverage = if glow {
                    let t = (d / radius).min(1.0);
                    (1.0 - t) * (1.0 - t)
                } else {
                    (radius - d + 0.5).clamp(0.0, 1.0)
                };
                if coverage > 0.0 {
                    self.blend(x, y, color, alpha * coverage);
                }
            }
        }
    }
}

impl Surface2D for RasterSurface {
    fn fade(&mut self, color: Vec3, alpha: f32) {
        let (w, h) = self.image.dimensions();
        for y in 0..h as i64 {
            for x in 0..w as i64 {
                self.blend(x, y, color, alpha);
            }
        }
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Vec3, alpha: f32) {
        self.stamp(center, radius, color, alpha, false);
    }

    fn fill_glow(&mut self, center: Vec2, radius: f32, color: Vec3, alpha: f32) {
        self.stamp(center, radius, color, alpha, true);
    }

    fn gradient_line(
        &mut self,
        from: Vec2,
        to: Vec2,
        from_color: Vec3,
        to_color: Vec3,
        width: f32,
        alpha: f32,
    ) {
        let length = from.distance(to);
        if length <= 0.0 {
            self.stamp(from, width * 0.5, from_color, alpha, false);
            return;
        }
        // Stamp discs along the segment, spaced at half the line width so
        // the stroke reads as continuous.
        let step = (width * 0.5).max(0.5);
        let steps = (length / step).ceil() as u32;
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            let at = from.lerp(to, t);
            let color = from_color.lerp(to_color, t);
            self.stamp(at, width * 0.5 + 0.5, color, alpha, false);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_surface_is_opaque_black() {
        let s = RasterSurface::new(4, 4);
        for px in s.image().pixels() {
            assert_eq!(px.0, [0, 0, 0, 255]);
        }
    }

    #[test]
    fn fade_moves_pixels_toward_color() {
        let mut s = RasterSurface::new(2, 2);
        s.fade(Vec3::ONE, 0.5);
        for px in s.image().pixels() {
            assert_eq!(px.0[0], 128);
        }
        s.fade(Vec3::ONE, 1.0);
        for px in s.image().pixels() {
            assert_eq!(px.0[0], 255);
        }
    }

    #[test]
    fn circle_colors_its_center() {
        let mut s = RasterSurface::new(20, 20);
        s.fill_circle(Vec2::new(10.0, 10.0), 3.0, Vec3::new(1.0, 0.0, 0.0), 1.0);
        let center = s.image().get_pixel(10, 10);
        assert_eq!(center.0[0], 255);
        assert_eq!(center.0[1], 0);
        // Far corner untouched.
        assert_eq!(s.image().get_pixel(0, 0).0[0], 0);
    }

    #[test]
    fn glow_falls_off_with_distance() {
        let mut s = RasterSurface::new(40, 40);
        s.fill_glow(Vec2::new(20.0, 20.0), 10.0, Vec3::ONE, 1.0);
        let center = s.image().get_pixel(20, 20).0[0];
        let mid = s.image().get_pixel(25, 20).0[0];
        let edge = s.image().get_pixel(29, 20).0[0];
        assert!(center > mid);
        assert!(mid > edge);
    }

    #[test]
    fn line_touches_both_endpoints() {
        let mut s = RasterSurface::new(30, 10);
        s.gradient_line(
            Vec2::new(2.0, 5.0),
            Vec2::new(27.0, 5.0),
            Vec3::new(1.0, 0.0, 0.0),
            Vec3::new(0.0, 0.0, 1.0),
            2.0,
            1.0,
        );
        assert!(s.image().get_pixel(2, 5).0[0] > 100);
        assert!(s.image().get_pixel(27, 5).0[2] > 100);
    }

    #[test]
    fn out_of_bounds_drawing_is_safe() {
        let mut s = RasterSurface::new(8, 8);
        s.fill_circle(Vec2::new(-50.0, -50.0), 10.0, Vec3::ONE, 1.0);
        s.fill_glow(Vec2::new(100.0, 100.0), 30.0, Vec3::ONE, 1.0);
        s.gradient_line(
            Vec2::new(-10.0, -10.0),
            Vec2::new(50.0, 50.0),
            Vec3::ONE,
            Vec3::ONE,
            1.0,
            1.0,
        );
    }

    #[test]
    fn zero_sized_surface_is_a_noop_target() {
        let mut s = RasterSurface::new(0, 0);
        s.fade(Vec3::ONE, 1.0);
        s.fill_circle(Vec2::ZERO, 5.0, Vec3::ONE, 1.0);
        assert_eq!(s.size(), (0, 0));
    }
}
