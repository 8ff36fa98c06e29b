//! Software RGBA raster implementing [`Surface`].

use crate::color::Rgba;
use crate::surface::Surface;
use crate::vector::Vector2;

/// CPU pixel buffer, row-major, origin top-left.
///
/// Lines are rasterized with Bresenham after clipping the segment to the
/// canvas bounds, so work per line is bounded by the canvas size no matter
/// how far off-screen the endpoints are.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl Canvas {
    /// Creates a fully transparent canvas.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgba::TRANSPARENT; width as usize * height as usize],
        }
    }

    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        self.index(i64::from(x), i64::from(y)).map(|i| self.pixels[i])
    }

    /// Pixels in row-major order.
    #[inline]
    pub fn pixels(&self) -> &[Rgba] {
        &self.pixels
    }

    /// Counts pixels equal to `color`.
    pub fn count(&self, color: Rgba) -> usize {
        self.pixels.iter().filter(|&&p| p == color).count()
    }

    #[inline]
    fn index(&self, x: i64, y: i64) -> Option<usize> {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }

    #[inline]
    fn blend(&mut self, x: i64, y: i64, color: Rgba) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color.over(self.pixels[i]);
        }
    }

    fn rasterize(&mut self, from: (i64, i64), to: (i64, i64), color: Rgba) {
        let (mut x0, mut y0) = from;
        let (x1, y1) = to;

        let dx = (x1 - x0).abs();
        let dy = -(y1 - y0).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;

        loop {
            self.blend(x0, y0, color);
            if x0 == x1 && y0 == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x0 += sx;
            }
            if e2 <= dx {
                err += dx;
                y0 += sy;
            }
        }
    }
}

impl Surface for Canvas {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn fill(&mut self, color: Rgba) {
        self.pixels.fill(color);
    }

    fn draw_line(&mut self, from: Vector2, to: Vector2, color: Rgba) {
        if self.width == 0 || self.height == 0 || !from.is_finite() || !to.is_finite() {
            return;
        }

        let max = Vector2::new(f64::from(self.width - 1), f64::from(self.height - 1));
        let Some((a, b)) = clip_segment(from, to, max) else { return };

        let round = |v: Vector2| (v.x.round() as i64, v.y.round() as i64);
        self.rasterize(round(a), round(b), color);
    }

    fn draw_image(&mut self, image: &Canvas, offset: Vector2) {
        if !offset.is_finite() {
            return;
        }
        let ox = offset.x.round() as i64;
        let oy = offset.y.round() as i64;

        for sy in 0..image.height {
            for sx in 0..image.width {
                let src = image.pixels[sy as usize * image.width as usize + sx as usize];
                if src.a == 0 {
                    continue;
                }
                self.blend(ox + i64::from(sx), oy + i64::from(sy), src);
            }
        }
    }
}

/// Liang–Barsky clip of segment `p0 → p1` against `[0, max.x] × [0, max.y]`.
fn clip_segment(p0: Vector2, p1: Vector2, max: Vector2) -> Option<(Vector2, Vector2)> {
    let d = p1 - p0;
    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;

    let edges = [
        (-d.x, p0.x),
        (d.x, max.x - p0.x),
        (-d.y, p0.y),
        (d.y, max.y - p0.y),
    ];

    for (p, q) in edges {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }

    Some((p0 + d * t0, p0 + d * t1))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f64, y: f64) -> Vector2 { Vector2::new(x, y) }

    #[test]
    fn new_canvas_is_transparent() {
        let c = Canvas::new(4, 3);
        assert_eq!(c.pixels().len(), 12);
        assert_eq!(c.count(Rgba::TRANSPARENT), 12);
    }

    #[test]
    fn fill_replaces_every_pixel() {
        let mut c = Canvas::new(4, 3);
        c.draw_line(v(0.0, 0.0), v(3.0, 0.0), Rgba::RED);
        c.fill(Rgba::BLACK);
        assert_eq!(c.count(Rgba::BLACK), 12);
    }

    #[test]
    fn horizontal_line_covers_both_endpoints() {
        let mut c = Canvas::new(10, 10);
        c.draw_line(v(2.0, 5.0), v(7.0, 5.0), Rgba::GREEN);
        for x in 2..=7 {
            assert_eq!(c.pixel(x, 5), Some(Rgba::GREEN), "x={x}");
        }
        assert_eq!(c.pixel(1, 5), Some(Rgba::TRANSPARENT));
        assert_eq!(c.pixel(8, 5), Some(Rgba::TRANSPARENT));
        assert_eq!(c.count(Rgba::GREEN), 6);
    }

    #[test]
    fn diagonal_line_is_one_pixel_per_step() {
        let mut c = Canvas::new(10, 10);
        c.draw_line(v(0.0, 0.0), v(4.0, 4.0), Rgba::BLUE);
        for i in 0..=4 {
            assert_eq!(c.pixel(i, i), Some(Rgba::BLUE));
        }
        assert_eq!(c.count(Rgba::BLUE), 5);
    }

    #[test]
    fn far_off_screen_endpoints_are_clipped() {
        let mut c = Canvas::new(20, 10);
        c.draw_line(v(-1.0e9, 4.0), v(1.0e9, 4.0), Rgba::RED);
        assert_eq!(c.count(Rgba::RED), 20);
    }

    #[test]
    fn segment_outside_bounds_draws_nothing() {
        let mut c = Canvas::new(10, 10);
        c.draw_line(v(-5.0, -5.0), v(-1.0, 20.0), Rgba::RED);
        c.draw_line(v(11.0, 0.0), v(30.0, 9.0), Rgba::RED);
        assert_eq!(c.count(Rgba::RED), 0);
    }

    #[test]
    fn non_finite_endpoints_are_skipped() {
        let mut c = Canvas::new(10, 10);
        c.draw_line(v(f64::NAN, 0.0), v(5.0, 5.0), Rgba::RED);
        assert_eq!(c.count(Rgba::RED), 0);
    }

    #[test]
    fn draw_image_composites_at_offset() {
        let mut sprite = Canvas::new(2, 2);
        sprite.draw_line(v(0.0, 0.0), v(1.0, 0.0), Rgba::RED);

        let mut c = Canvas::new(5, 5);
        c.fill(Rgba::BLACK);
        c.draw_image(&sprite, v(3.0, 2.0));

        assert_eq!(c.pixel(3, 2), Some(Rgba::RED));
        assert_eq!(c.pixel(4, 2), Some(Rgba::RED));
        // Transparent source pixels leave the destination alone.
        assert_eq!(c.pixel(3, 3), Some(Rgba::BLACK));
        assert_eq!(c.count(Rgba::RED), 2);
    }

    #[test]
    fn draw_image_clips_at_edges() {
        let mut sprite = Canvas::new(3, 3);
        sprite.fill(Rgba::WHITE);

        let mut c = Canvas::new(4, 4);
        c.draw_image(&sprite, v(-1.0, 2.0));
        assert_eq!(c.count(Rgba::WHITE), 4);
    }

    #[test]
    fn zero_sized_canvas_accepts_draws() {
        let mut c = Canvas::new(0, 0);
        c.fill(Rgba::RED);
        c.draw_line(v(0.0, 0.0), v(1.0, 1.0), Rgba::RED);
        assert!(c.pixels().is_empty());
    }
}
