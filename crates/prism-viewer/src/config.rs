use prism_engine::window::RuntimeConfig;
use prism_scene::{FrameRenderer, Rgba, DEFAULT_SCALE, VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
use winit::dpi::LogicalSize;

/// Viewer startup settings.
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    pub title: String,
    /// Initial window size in logical pixels. The scene is always laid out
    /// at 800x600 and stretched to the window.
    pub width: u32,
    pub height: u32,
    /// World units to pixels.
    pub scale: f64,
    pub background: Rgba,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            title: "prism".to_string(),
            width: VIEWPORT_WIDTH,
            height: VIEWPORT_HEIGHT,
            scale: DEFAULT_SCALE,
            background: Rgba::BLACK,
        }
    }
}

impl ViewerConfig {
    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            title: self.title.clone(),
            initial_size: LogicalSize::new(f64::from(self.width), f64::from(self.height)),
            resizable: false,
        }
    }

    pub fn frame_renderer(&self) -> FrameRenderer {
        FrameRenderer::new()
            .with_scale(self.scale)
            .with_background(self.background)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_fixed_viewport() {
        let config = ViewerConfig::default();
        let runtime = config.runtime_config();

        assert_eq!(runtime.title, "prism");
        assert_eq!(runtime.initial_size, LogicalSize::new(800.0, 600.0));
        assert!(!runtime.resizable);
    }

    #[test]
    fn renderer_carries_scale_and_background() {
        let config = ViewerConfig {
            scale: 50.0,
            background: Rgba::WHITE,
            ..ViewerConfig::default()
        };
        let renderer = config.frame_renderer();

        assert_eq!(renderer.scale(), 50.0);
        assert_eq!(renderer.background(), Rgba::WHITE);
    }
}
