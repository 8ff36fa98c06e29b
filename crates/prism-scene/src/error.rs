use std::fmt;

/// Rejected scene input.
///
/// Projection and depth ordering are only meaningful for finite coordinates, so
/// the constructors that admit data into a [`Scene`](crate::Scene) check for
/// NaN / infinity up front.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneError {
    /// A triangle vertex has a NaN or infinite component.
    NonFiniteVertex { index: usize, x: f64, y: f64 },
    /// A triangle depth hint is NaN or infinite.
    NonFiniteDepth(f64),
    /// A camera position has a NaN or infinite component.
    NonFiniteCamera { x: f64, y: f64 },
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::NonFiniteVertex { index, x, y } => {
                write!(f, "triangle vertex {index} is not finite: ({x}, {y})")
            }
            SceneError::NonFiniteDepth(z) => write!(f, "triangle depth hint is not finite: {z}"),
            SceneError::NonFiniteCamera { x, y } => {
                write!(f, "camera position is not finite: ({x}, {y})")
            }
        }
    }
}

impl std::error::Error for SceneError {}
