use crate::canvas::Canvas;
use crate::color::Rgba;
use crate::vector::Vector2;

/// 2D raster target the frame renderer draws into.
///
/// Coordinates are screen pixels, origin top-left, +Y down. Implementations
/// clip anything outside `width() × height()`.
pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Replaces the whole surface with `color`.
    fn fill(&mut self, color: Rgba);

    /// Draws a one-pixel line segment from `from` to `to`.
    fn draw_line(&mut self, from: Vector2, to: Vector2, color: Rgba);

    /// Composites `image` onto this surface with its top-left corner at `offset`.
    fn draw_image(&mut self, image: &Canvas, offset: Vector2);
}
