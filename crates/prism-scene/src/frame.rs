use crate::color::Rgba;
use crate::depth::DepthSorter;
use crate::projector::{Projector, DEFAULT_SCALE};
use crate::scene::Scene;
use crate::surface::Surface;
use crate::triangle::Triangle;

/// Per-frame render pipeline: clear, depth sort, project, outline.
///
/// Keeps its sort snapshot and key buffers between frames so steady-state
/// rendering does not allocate.
#[derive(Debug)]
pub struct FrameRenderer {
    scale: f64,
    background: Rgba,
    snapshot: Vec<Triangle>,
    sorter: DepthSorter,
}

impl Default for FrameRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameRenderer {
    /// Renderer with scale 100 px/unit on a black background.
    pub fn new() -> Self {
        Self {
            scale: DEFAULT_SCALE,
            background: Rgba::BLACK,
            snapshot: Vec::new(),
            sorter: DepthSorter::new(),
        }
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_background(mut self, background: Rgba) -> Self {
        self.background = background;
        self
    }

    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[inline]
    pub fn background(&self) -> Rgba {
        self.background
    }

    /// Draws `scene` onto `surface`.
    ///
    /// The surface is cleared first; triangles are then outlined farthest to
    /// nearest, each as `v0→v1`, `v1→v2`, `v2→v0` in its own color.
    pub fn render_frame<S>(&mut self, scene: &Scene, surface: &mut S)
    where
        S: Surface + ?Sized,
    {
        surface.fill(self.background);

        self.snapshot.clear();
        self.snapshot.extend_from_slice(scene.triangles());

        let camera = scene.camera().position();
        self.sorter.sort_in_place(&mut self.snapshot, camera);

        let projector = Projector::new(
            self.scale,
            f64::from(surface.width()),
            f64::from(surface.height()),
        );

        for tri in &self.snapshot {
            let [a, b, c] = projector.project_triangle(tri, camera);
            surface.draw_line(a, b, tri.color);
            surface.draw_line(b, c, tri.color);
            surface.draw_line(c, a, tri.color);
        }
    }
}
