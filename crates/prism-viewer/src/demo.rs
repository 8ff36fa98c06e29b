use prism_scene::{Camera, Rgba, Scene, SceneError, Triangle, Vector2};

/// The startup scene: three overlapping triangles around the origin, camera at (0, 0).
pub fn default_scene() -> Result<Scene, SceneError> {
    let v = Vector2::new;
    Scene::with_triangles(
        Camera::origin(),
        [
            Triangle::new([v(0.0, 0.0), v(1.0, 1.0), v(-1.0, 1.0)], Rgba::RED, 2.0)?,
            Triangle::new([v(1.0, 0.0), v(2.0, 1.0), v(0.5, 1.0)], Rgba::GREEN, 1.0)?,
            Triangle::new([v(-1.0, -1.0), v(0.0, 0.0), v(-1.5, 0.5)], Rgba::BLUE, 3.0)?,
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn startup_scene() {
        let scene = default_scene().unwrap();

        assert_eq!(scene.camera(), Camera::origin());
        let colors: Vec<Rgba> = scene.triangles().iter().map(|t| t.color).collect();
        assert_eq!(colors, [Rgba::RED, Rgba::GREEN, Rgba::BLUE]);

        let z: Vec<f64> = scene.triangles().iter().map(|t| t.z).collect();
        assert_eq!(z, [2.0, 1.0, 3.0]);
    }
}
