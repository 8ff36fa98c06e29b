//! Recorded draw stream.
//!
//! Commands are kept in insertion order; the producer decides paint order
//! (the scene core already emits far-to-near). Shape-specific payloads and
//! push helpers live under `scene::shapes`.

mod cmd;
mod list;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::DrawList;
pub use shapes::line::LineCmd;
