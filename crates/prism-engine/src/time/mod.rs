//! Frame timing.
//!
//! One `FrameClock` per window; the runtime ticks it once per redraw and hands
//! the resulting `FrameTime` to the app. Game logic in this project is
//! per-tick, so `dt` is informational (logging, diagnostics).

mod frame_clock;

pub use frame_clock::{FrameClock, FrameTime};
