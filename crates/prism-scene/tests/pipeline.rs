//! Frame pipeline checks against a surface that records draw calls.

use prism_scene::{
    Camera, Canvas, Direction, Directions, FrameRenderer, Game, Rgba, Scene, SceneGame, Surface,
    Triangle, Vector2,
};

#[derive(Debug, Clone, PartialEq)]
enum Op {
    Fill(Rgba),
    Line(Vector2, Vector2, Rgba),
    Image(Vector2),
}

struct Recorder {
    width: u32,
    height: u32,
    ops: Vec<Op>,
}

impl Recorder {
    fn new() -> Self {
        Self { width: 800, height: 600, ops: Vec::new() }
    }

    fn lines(&self) -> Vec<(Vector2, Vector2, Rgba)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Line(a, b, c) => Some((*a, *b, *c)),
                _ => None,
            })
            .collect()
    }
}

impl Surface for Recorder {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn fill(&mut self, color: Rgba) {
        self.ops.push(Op::Fill(color));
    }

    fn draw_line(&mut self, from: Vector2, to: Vector2, color: Rgba) {
        self.ops.push(Op::Line(from, to, color));
    }

    fn draw_image(&mut self, _image: &Canvas, offset: Vector2) {
        self.ops.push(Op::Image(offset));
    }
}

fn v(x: f64, y: f64) -> Vector2 {
    Vector2::new(x, y)
}

fn reference_triangle() -> Triangle {
    Triangle::new([v(0.0, 0.0), v(1.0, 1.0), v(-1.0, 1.0)], Rgba::RED, 2.0).unwrap()
}

/// The three triangles the viewer starts with.
fn startup_scene() -> Scene {
    Scene::with_triangles(
        Camera::origin(),
        [
            reference_triangle(),
            Triangle::new([v(1.0, 0.0), v(2.0, 1.0), v(0.5, 1.0)], Rgba::GREEN, 1.0).unwrap(),
            Triangle::new([v(-1.0, -1.0), v(0.0, 0.0), v(-1.5, 0.5)], Rgba::BLUE, 3.0).unwrap(),
        ],
    )
    .unwrap()
}

#[test]
fn single_triangle_end_to_end() {
    let scene = Scene::with_triangles(Camera::origin(), [reference_triangle()]).unwrap();
    let mut surface = Recorder::new();
    FrameRenderer::new().render_frame(&scene, &mut surface);

    let (a, b, c) = (v(400.0, 300.0), v(500.0, 400.0), v(300.0, 400.0));
    assert_eq!(
        surface.ops,
        vec![
            Op::Fill(Rgba::BLACK),
            Op::Line(a, b, Rgba::RED),
            Op::Line(b, c, Rgba::RED),
            Op::Line(c, a, Rgba::RED),
        ]
    );
}

#[test]
fn every_outline_is_a_closed_loop_in_its_own_color() {
    let scene = startup_scene();
    let mut surface = Recorder::new();
    FrameRenderer::new().render_frame(&scene, &mut surface);

    let lines = surface.lines();
    assert_eq!(lines.len(), 9);

    for chunk in lines.chunks(3) {
        let [(a0, a1, ca), (b0, b1, cb), (c0, c1, cc)] = [chunk[0], chunk[1], chunk[2]];
        assert_eq!(a1, b0);
        assert_eq!(b1, c0);
        assert_eq!(c1, a0);
        assert!(ca == cb && cb == cc);
    }
}

#[test]
fn startup_scene_draws_farthest_first() {
    // Anchors: red (0,0) d=0, green (1,0) d=1, blue (-1,-1) d=√2.
    let scene = startup_scene();
    let mut surface = Recorder::new();
    FrameRenderer::new().render_frame(&scene, &mut surface);

    let order: Vec<Rgba> = surface.lines().iter().step_by(3).map(|l| l.2).collect();
    assert_eq!(order, vec![Rgba::BLUE, Rgba::GREEN, Rgba::RED]);
}

#[test]
fn panning_reorders_without_touching_scene_order() {
    let mut game = SceneGame::new(startup_scene());
    let original = game.scene().triangles().to_vec();

    // Fifteen ticks right/down puts the camera at about (1.5, 1.5).
    let held = Directions::empty().with(Direction::Right).with(Direction::Down);
    for _ in 0..15 {
        game.update(&held);
    }

    let mut surface = Recorder::new();
    game.draw(&mut surface);

    // Distances from (1.5, 1.5): blue ≈ 3.54, red ≈ 2.12, green ≈ 1.58.
    let order: Vec<Rgba> = surface.lines().iter().step_by(3).map(|l| l.2).collect();
    assert_eq!(order, vec![Rgba::BLUE, Rgba::RED, Rgba::GREEN]);
    assert_eq!(game.scene().triangles(), original.as_slice());
}

#[test]
fn renderer_never_composites_offscreen_images() {
    let mut surface = Recorder::new();
    FrameRenderer::new().render_frame(&startup_scene(), &mut surface);
    assert!(!surface.ops.iter().any(|op| matches!(op, Op::Image(_))));
}

#[test]
fn projection_uses_surface_size_as_viewport() {
    let scene = Scene::with_triangles(Camera::origin(), [reference_triangle()]).unwrap();
    let mut surface = Recorder { width: 200, height: 100, ops: Vec::new() };
    FrameRenderer::new().render_frame(&scene, &mut surface);

    assert_eq!(surface.lines()[0].0, v(100.0, 50.0));
}
