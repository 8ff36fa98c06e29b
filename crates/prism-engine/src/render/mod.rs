//! GPU rendering subsystem.
//!
//! Renderers consume `scene` draw lists and own their GPU resources
//! (pipelines, buffers). CPU geometry is in logical pixels; the vertex shader
//! converts to NDC with a viewport uniform.

mod ctx;
pub mod shapes;

pub use ctx::{RenderCtx, RenderTarget};
