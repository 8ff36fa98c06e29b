use prism_engine::input::{InputState, Key};
use prism_scene::{Direction, DirectionInput};

/// Keys that pan the camera in `direction`.
pub const fn keys_for(direction: Direction) -> [Key; 2] {
    match direction {
        Direction::Up => [Key::W, Key::ArrowUp],
        Direction::Down => [Key::S, Key::ArrowDown],
        Direction::Left => [Key::A, Key::ArrowLeft],
        Direction::Right => [Key::D, Key::ArrowRight],
    }
}

/// Held-key view of the engine keyboard state.
pub struct KeyboardDirections<'a> {
    input: &'a InputState,
}

impl<'a> KeyboardDirections<'a> {
    pub fn new(input: &'a InputState) -> Self {
        Self { input }
    }
}

impl DirectionInput for KeyboardDirections<'_> {
    fn is_held(&self, direction: Direction) -> bool {
        self.input.any_down(&keys_for(direction))
    }
}
