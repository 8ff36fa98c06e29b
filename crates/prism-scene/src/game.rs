use crate::frame::FrameRenderer;
use crate::input::DirectionInput;
use crate::scene::Scene;
use crate::surface::Surface;

/// Fixed logical viewport width in pixels.
pub const VIEWPORT_WIDTH: u32 = 800;
/// Fixed logical viewport height in pixels.
pub const VIEWPORT_HEIGHT: u32 = 600;

/// Shape of a runnable game as seen by the platform run loop.
///
/// The loop calls `update` then `draw` once per tick, and `layout` whenever it
/// needs the logical screen size for a given outer window size.
pub trait Game {
    fn update(&mut self, input: &dyn DirectionInput);

    fn draw(&mut self, surface: &mut dyn Surface);

    fn layout(&self, outside_width: u32, outside_height: u32) -> (u32, u32);
}

/// [`Game`] adapter owning a [`Scene`] and its [`FrameRenderer`].
#[derive(Debug)]
pub struct SceneGame {
    scene: Scene,
    renderer: FrameRenderer,
}

impl SceneGame {
    pub fn new(scene: Scene) -> Self {
        Self::with_renderer(scene, FrameRenderer::new())
    }

    pub fn with_renderer(scene: Scene, renderer: FrameRenderer) -> Self {
        Self { scene, renderer }
    }

    #[inline]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }
}

impl Game for SceneGame {
    fn update(&mut self, input: &dyn DirectionInput) {
        let held = input.held_directions();
        if held.is_empty() {
            return;
        }
        self.scene.tick(held);

        let cam = self.scene.camera();
        log::trace!("camera moved to ({:.2}, {:.2})", cam.x, cam.y);
    }

    fn draw(&mut self, surface: &mut dyn Surface) {
        self.renderer.render_frame(&self.scene, surface);
    }

    /// Always the fixed 800×600 viewport; the outer size is ignored.
    fn layout(&self, _outside_width: u32, _outside_height: u32) -> (u32, u32) {
        (VIEWPORT_WIDTH, VIEWPORT_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::Camera;
    use crate::canvas::Canvas;
    use crate::color::Rgba;
    use crate::input::{Direction, Directions};
    use crate::triangle::Triangle;
    use crate::vector::Vector2;

    fn game() -> SceneGame {
        let tri = Triangle::new(
            [Vector2::new(0.0, 0.0), Vector2::new(1.0, 1.0), Vector2::new(-1.0, 1.0)],
            Rgba::RED,
            2.0,
        )
        .unwrap();
        SceneGame::new(Scene::with_triangles(Camera::origin(), [tri]).unwrap())
    }

    #[test]
    fn layout_ignores_outer_size() {
        let g = game();
        assert_eq!(g.layout(1920, 1080), (800, 600));
        assert_eq!(g.layout(0, 0), (800, 600));
    }

    #[test]
    fn update_applies_held_directions() {
        let mut g = game();
        g.update(&Directions::empty().with(Direction::Up).with(Direction::Left));
        assert_eq!(g.scene().camera(), Camera { x: -0.1, y: -0.1 });
    }

    #[test]
    fn update_without_input_keeps_camera() {
        let mut g = game();
        g.update(&Directions::empty());
        assert_eq!(g.scene().camera(), Camera::origin());
    }

    #[test]
    fn draw_follows_camera() {
        let mut g = game();
        // Ten ticks right moves the camera by one world unit.
        for _ in 0..10 {
            g.update(&Directions::empty().with(Direction::Right));
        }
        let mut canvas = Canvas::new(800, 600);
        g.draw(&mut canvas);

        // The first vertex now lands one scale unit left of center.
        assert_eq!(canvas.pixel(300, 300), Some(Rgba::RED));
        assert_eq!(canvas.pixel(400, 300), Some(Rgba::BLACK));
    }
}
