//! Scene model and per-frame render pipeline for the **prism** triangle viewer.
//!
//! This crate knows nothing about windows or GPUs. The platform side talks to
//! it through three small seams: [`DirectionInput`] (held keys), [`Surface`]
//! (a 2D raster target) and [`Game`] (the update/draw/layout shape the run
//! loop drives).
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`vector`] | `Vector2` |
//! | [`color`] | `Rgba` |
//! | [`triangle`] | `Triangle` |
//! | [`camera`] | `Camera`, `CAMERA_STEP` |
//! | [`input`] | `Direction`, `Directions`, `DirectionInput` |
//! | [`projector`] | `project`, `Projector`, `DEFAULT_SCALE` |
//! | [`depth`] | `DepthSorter`, `sort` |
//! | [`surface`] | `Surface` |
//! | [`canvas`] | `Canvas` (software raster surface) |
//! | [`frame`] | `FrameRenderer` |
//! | [`scene`] | `Scene` |
//! | [`game`] | `Game`, `SceneGame`, viewport constants |
//! | [`error`] | `SceneError` |
//!
//! # Quick start
//!
//! ```rust
//! use prism_scene::{Canvas, Camera, FrameRenderer, Rgba, Scene, Triangle, Vector2};
//!
//! let mut scene = Scene::new(Camera::origin());
//! scene
//!     .push(Triangle::new(
//!         [Vector2::new(0.0, 0.0), Vector2::new(1.0, 1.0), Vector2::new(-1.0, 1.0)],
//!         Rgba::RED,
//!         2.0,
//!     ).unwrap())
//!     .unwrap();
//!
//! let mut canvas = Canvas::new(800, 600);
//! FrameRenderer::new().render_frame(&scene, &mut canvas);
//! assert_eq!(canvas.pixel(400, 300), Some(Rgba::RED));
//! ```

pub mod camera;
pub mod canvas;
pub mod color;
pub mod depth;
pub mod error;
pub mod frame;
pub mod game;
pub mod input;
pub mod projector;
pub mod scene;
pub mod surface;
pub mod triangle;
pub mod vector;

pub use camera::{Camera, CAMERA_STEP};
pub use canvas::Canvas;
pub use color::Rgba;
pub use depth::DepthSorter;
pub use error::SceneError;
pub use frame::FrameRenderer;
pub use game::{Game, SceneGame, VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
pub use input::{Direction, DirectionInput, Directions};
pub use projector::{project, Projector, DEFAULT_SCALE};
pub use scene::Scene;
pub use surface::Surface;
pub use triangle::Triangle;
pub use vector::Vector2;
