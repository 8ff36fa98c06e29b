//! Contract between the runtime (platform loop) and the application.
//!
//! The runtime owns the window, GPU and input state; the application sees
//! them only through `FrameCtx` once per frame.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
