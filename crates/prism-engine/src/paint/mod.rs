//! Color model shared by the draw list and the line renderer.
//!
//! Colors are linear and premultiplied; the surface is configured with an
//! sRGB format when available so the GPU encodes on write.

pub mod color;

pub use color::Color;
