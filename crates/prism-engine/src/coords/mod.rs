//! Screen-space coordinates.
//!
//! Logical pixels, origin top-left, +X right, +Y down. The line shader maps
//! these to NDC through a viewport uniform.

mod vec2;
mod viewport;

pub use vec2::Vec2;
pub use viewport::Viewport;
