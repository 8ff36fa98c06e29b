use crate::camera::Camera;
use crate::error::SceneError;
use crate::input::Directions;
use crate::triangle::Triangle;

/// All renderable state for a frame: the triangles and the camera.
///
/// Triangle order is the insertion order and is never changed by rendering;
/// the renderer sorts its own copy.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    triangles: Vec<Triangle>,
    camera: Camera,
}

impl Scene {
    pub fn new(camera: Camera) -> Self {
        Self { triangles: Vec::new(), camera }
    }

    /// Builds a scene from `triangles`, failing on the first invalid one.
    pub fn with_triangles<I>(camera: Camera, triangles: I) -> Result<Self, SceneError>
    where
        I: IntoIterator<Item = Triangle>,
    {
        let mut scene = Self::new(camera);
        for tri in triangles {
            scene.push(tri)?;
        }
        Ok(scene)
    }

    /// Appends a triangle after checking its coordinates are finite.
    pub fn push(&mut self, triangle: Triangle) -> Result<(), SceneError> {
        if let Err(err) = triangle.validate() {
            log::warn!("rejecting triangle #{}: {err}", self.triangles.len());
            return Err(err);
        }
        self.triangles.push(triangle);
        Ok(())
    }

    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    #[inline]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    #[inline]
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }

    /// Advances the camera by one tick of held directions.
    #[inline]
    pub fn tick(&mut self, directions: Directions) {
        self.camera.tick(directions);
    }
}
