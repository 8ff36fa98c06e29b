use crate::paint::Color;

use super::DrawCmd;

/// Draw stream for one frame: a clear color plus commands in paint order.
///
/// `clear()` keeps allocated capacity, so a list reused every frame stops
/// allocating once warmed.
#[derive(Debug, Clone)]
pub struct DrawList {
    clear_color: Color,
    commands: Vec<DrawCmd>,
}

impl Default for DrawList {
    fn default() -> Self {
        Self {
            clear_color: Color::black(),
            commands: Vec::new(),
        }
    }
}

impl DrawList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops recorded commands. The clear color is kept.
    #[inline]
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Replaces the whole frame with `color`: earlier commands are covered
    /// by the fill, so they are discarded.
    #[inline]
    pub fn fill(&mut self, color: Color) {
        self.commands.clear();
        self.clear_color = color;
    }

    #[inline]
    pub fn push(&mut self, cmd: DrawCmd) {
        self.commands.push(cmd);
    }

    #[inline]
    pub fn clear_color(&self) -> Color {
        self.clear_color
    }

    /// Commands in paint order (back-to-front).
    #[inline]
    pub fn commands(&self) -> &[DrawCmd] {
        &self.commands
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coords::Vec2;
    use crate::scene::LineCmd;

    fn red() -> Color {
        Color::from_premul(1.0, 0.0, 0.0, 1.0)
    }

    #[test]
    fn records_lines_in_order() {
        let mut list = DrawList::new();
        list.push_line(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), red());
        list.push_line(Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0), Color::black());

        assert_eq!(list.len(), 2);
        assert_eq!(
            list.commands()[0],
            DrawCmd::Line(LineCmd::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), red()))
        );
        let DrawCmd::Line(second) = &list.commands()[1];
        assert_eq!(second.color, Color::black());
    }

    #[test]
    fn fill_discards_commands_and_sets_clear_color() {
        let mut list = DrawList::new();
        list.push_line(Vec2::zero(), Vec2::new(1.0, 1.0), red());
        list.fill(red());

        assert!(list.is_empty());
        assert_eq!(list.clear_color(), red());
    }

    #[test]
    fn clear_keeps_clear_color() {
        let mut list = DrawList::new();
        list.fill(red());
        list.push_line(Vec2::zero(), Vec2::new(1.0, 1.0), red());
        list.clear();

        assert!(list.is_empty());
        assert_eq!(list.clear_color(), red());
        assert_eq!(DrawList::new().clear_color(), Color::black());
    }

    #[test]
    fn non_finite_lines_are_dropped() {
        let mut list = DrawList::new();
        list.push_line(Vec2::new(f32::NAN, 0.0), Vec2::zero(), red());
        list.push_line(Vec2::zero(), Vec2::new(0.0, f32::INFINITY), red());
        assert!(list.is_empty());
    }
}
