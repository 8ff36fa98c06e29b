use crate::scene::shapes::line::LineCmd;

/// Renderer-agnostic draw command.
///
/// A new shape adds a variant here, a payload + push helper under
/// `scene::shapes`, and a renderer under `render::shapes`.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Line(LineCmd),
}
