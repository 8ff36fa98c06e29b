use crate::error::SceneError;
use crate::input::{Direction, Directions};
use crate::vector::Vector2;

/// World units the camera moves per tick for each held direction.
///
/// Applied per tick, not per elapsed second, so pan speed follows the frame rate.
pub const CAMERA_STEP: f64 = 0.1;

/// 2D camera: the world-space point that projects to the viewport center.
///
/// Position is unbounded in both axes.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Camera {
    pub x: f64,
    pub y: f64,
}

impl Camera {
    #[inline]
    pub const fn origin() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Places the camera at `(x, y)`, rejecting non-finite coordinates.
    pub fn at(x: f64, y: f64) -> Result<Self, SceneError> {
        if !(x.is_finite() && y.is_finite()) {
            return Err(SceneError::NonFiniteCamera { x, y });
        }
        Ok(Self { x, y })
    }

    #[inline]
    pub fn position(self) -> Vector2 {
        Vector2::new(self.x, self.y)
    }

    /// Applies one tick of movement. Each held direction contributes its own
    /// axis step; opposite directions cancel.
    pub fn tick(&mut self, directions: Directions) {
        if directions.contains(Direction::Up) {
            self.y -= CAMERA_STEP;
        }
        if directions.contains(Direction::Down) {
            self.y += CAMERA_STEP;
        }
        if directions.contains(Direction::Left) {
            self.x -= CAMERA_STEP;
        }
        if directions.contains(Direction::Right) {
            self.x += CAMERA_STEP;
        }
    }
}
