//! Prism engine crate.
//!
//! Platform + GPU runtime for the triangle viewer: the winit event loop and
//! window, the wgpu surface, keyboard state, frame timing, and a line renderer
//! that consumes recorded draw lists.

pub mod core;
pub mod device;
pub mod input;
pub mod time;
pub mod window;

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
