use crate::color::Rgba;
use crate::error::SceneError;
use crate::vector::Vector2;

/// A colored triangle in world space.
///
/// `z` is a depth hint recorded with the triangle. Depth ordering does not read
/// it; see [`DepthSorter`](crate::DepthSorter) for the actual sort key.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Triangle {
    pub vertices: [Vector2; 3],
    pub color: Rgba,
    pub z: f64,
}

impl Triangle {
    /// Creates a triangle, rejecting non-finite vertices or depth hint.
    pub fn new(vertices: [Vector2; 3], color: Rgba, z: f64) -> Result<Self, SceneError> {
        let tri = Self { vertices, color, z };
        tri.validate()?;
        Ok(tri)
    }

    pub fn validate(&self) -> Result<(), SceneError> {
        for (index, v) in self.vertices.iter().enumerate() {
            if !v.is_finite() {
                return Err(SceneError::NonFiniteVertex { index, x: v.x, y: v.y });
            }
        }
        if !self.z.is_finite() {
            return Err(SceneError::NonFiniteDepth(self.z));
        }
        Ok(())
    }

    /// Reference point for depth ordering: the first vertex.
    #[inline]
    pub fn anchor(&self) -> Vector2 {
        self.vertices[0]
    }

    /// Outline edges as a closed loop: `v0→v1`, `v1→v2`, `v2→v0`.
    #[inline]
    pub fn edges(&self) -> [(Vector2, Vector2); 3] {
        let [a, b, c] = self.vertices;
        [(a, b), (b, c), (c, a)]
    }
}
