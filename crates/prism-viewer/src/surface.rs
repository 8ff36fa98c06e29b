use prism_engine::coords::Vec2;
use prism_engine::paint::Color;
use prism_engine::scene::DrawList;
use prism_scene::{Canvas, Rgba, Surface, Vector2};

/// [`Surface`] that records into an engine [`DrawList`] for the GPU line renderer.
///
/// The draw list is in logical pixels of a `width x height` viewport.
pub struct DrawListSurface<'a> {
    list: &'a mut DrawList,
    width: u32,
    height: u32,
}

impl<'a> DrawListSurface<'a> {
    pub fn new(list: &'a mut DrawList, width: u32, height: u32) -> Self {
        Self { list, width, height }
    }
}

pub fn to_color(c: Rgba) -> Color {
    Color::from_srgb_u8(c.r, c.g, c.b, c.a)
}

pub fn to_vec2(v: Vector2) -> Vec2 {
    Vec2::new(v.x as f32, v.y as f32)
}

impl Surface for DrawListSurface<'_> {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn fill(&mut self, color: Rgba) {
        self.list.fill(to_color(color));
    }

    fn draw_line(&mut self, from: Vector2, to: Vector2, color: Rgba) {
        self.list.push_line(to_vec2(from), to_vec2(to), to_color(color));
    }

    /// Replays each row of `image` as horizontal segments, one per run of
    /// identical non-transparent pixels. Segments are half-open: a run of
    /// pixels `x0..=x1` becomes a line from `x0` to `x1 + 1`.
    fn draw_image(&mut self, image: &Canvas, offset: Vector2) {
        if !offset.is_finite() {
            return;
        }
        let ox = offset.x.round() as f32;
        let oy = offset.y.round() as f32;
        let width = Surface::width(image) as usize;
        if width == 0 {
            return;
        }

        for (y, row) in image.pixels().chunks_exact(width).enumerate() {
            let y = oy + y as f32;
            let mut x = 0;
            while x < row.len() {
                let color = row[x];
                let start = x;
                while x < row.len() && row[x] == color {
                    x += 1;
                }
                if color.a == 0 {
                    continue;
                }
                self.list.push_line(
                    Vec2::new(ox + start as f32, y),
                    Vec2::new(ox + x as f32, y),
                    to_color(color),
                );
            }
        }
    }
}
