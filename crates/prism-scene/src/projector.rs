use crate::triangle::Triangle;
use crate::vector::Vector2;

/// Screen pixels per world unit.
pub const DEFAULT_SCALE: f64 = 100.0;

/// Orthographic world → screen mapping.
///
/// The camera offset is subtracted first, the result scaled uniformly, then
/// centered in the viewport. Depends only on `v - camera`.
#[inline]
pub fn project(
    v: Vector2,
    camera: Vector2,
    scale: f64,
    viewport_width: f64,
    viewport_height: f64,
) -> Vector2 {
    Vector2::new(
        (v.x - camera.x) * scale + viewport_width / 2.0,
        (v.y - camera.y) * scale + viewport_height / 2.0,
    )
}

/// [`project`] with the scale and viewport bound once per frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Projector {
    pub scale: f64,
    pub viewport_width: f64,
    pub viewport_height: f64,
}

impl Projector {
    #[inline]
    pub const fn new(scale: f64, viewport_width: f64, viewport_height: f64) -> Self {
        Self { scale, viewport_width, viewport_height }
    }

    #[inline]
    pub fn project(&self, v: Vector2, camera: Vector2) -> Vector2 {
        project(v, camera, self.scale, self.viewport_width, self.viewport_height)
    }

    pub fn project_triangle(&self, tri: &Triangle, camera: Vector2) -> [Vector2; 3] {
        tri.vertices.map(|v| self.project(v, camera))
    }
}
