use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

/// One-pixel line segment in logical pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineCmd {
    pub from: Vec2,
    pub to: Vec2,
    pub color: Color,
}

impl LineCmd {
    #[inline]
    pub fn new(from: Vec2, to: Vec2, color: Color) -> Self {
        Self { from, to, color }
    }
}

impl DrawList {
    /// Records a line segment. Segments with non-finite endpoints are dropped.
    #[inline]
    pub fn push_line(&mut self, from: Vec2, to: Vec2, color: Color) {
        if !(from.is_finite() && to.is_finite()) {
            log::trace!("dropping non-finite line {from:?} -> {to:?}");
            return;
        }
        self.push(DrawCmd::Line(LineCmd::new(from, to, color)));
    }
}
