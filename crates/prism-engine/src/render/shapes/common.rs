//! GPU types shared by shape renderers.

use std::num::NonZeroU64;

use bytemuck::{Pod, Zeroable};

use crate::coords::Viewport;

pub(super) fn premul_alpha_blend() -> wgpu::BlendState {
    let component = wgpu::BlendComponent {
        src_factor: wgpu::BlendFactor::One,
        dst_factor: wgpu::BlendFactor::OneMinusSrcAlpha,
        operation: wgpu::BlendOperation::Add,
    };
    wgpu::BlendState {
        color: component,
        alpha: component,
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub(super) struct ViewportUniform {
    pub viewport: [f32; 2],
    pub _pad: [f32; 2], // 16-byte alignment
}

impl ViewportUniform {
    /// Degenerate sizes are raised to 1 so the shader never divides by zero.
    pub(super) fn new(viewport: Viewport) -> Self {
        Self {
            viewport: [viewport.width.max(1.0), viewport.height.max(1.0)],
            _pad: [0.0; 2],
        }
    }

    pub(super) const SIZE: u64 = std::mem::size_of::<ViewportUniform>() as u64;

    pub(super) fn min_binding_size() -> Option<NonZeroU64> {
        NonZeroU64::new(Self::SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_is_16_byte_aligned() {
        assert_eq!(ViewportUniform::SIZE, 16);
        assert!(ViewportUniform::min_binding_size().is_some());
    }

    #[test]
    fn uniform_clamps_degenerate_viewport() {
        let u = ViewportUniform::new(Viewport::new(0.0, 600.0));
        assert_eq!(u.viewport, [1.0, 600.0]);
    }
}
