/// Straight-alpha 8-bit RGBA color.
///
/// This is the color triangles carry in world space. Platform surfaces convert
/// it into whatever their backend expects (the engine uses linear premultiplied
/// `f32`).
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);
    pub const BLACK: Rgba = Rgba::opaque(0, 0, 0);
    pub const WHITE: Rgba = Rgba::opaque(255, 255, 255);
    pub const RED: Rgba = Rgba::opaque(255, 0, 0);
    pub const GREEN: Rgba = Rgba::opaque(0, 255, 0);
    pub const BLUE: Rgba = Rgba::opaque(0, 0, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    #[inline]
    pub fn is_opaque(self) -> bool {
        self.a == u8::MAX
    }

    /// Source-over composite of `self` onto `dst`.
    pub fn over(self, dst: Rgba) -> Rgba {
        match self.a {
            0 => dst,
            u8::MAX => self,
            _ => {
                let sa = f32::from(self.a) / 255.0;
                let da = f32::from(dst.a) / 255.0;
                let out_a = sa + da * (1.0 - sa);

                let channel = |s: u8, d: u8| -> u8 {
                    let c = (f32::from(s) * sa + f32::from(d) * da * (1.0 - sa)) / out_a;
                    c.round().clamp(0.0, 255.0) as u8
                };

                Rgba::new(
                    channel(self.r, dst.r),
                    channel(self.g, dst.g),
                    channel(self.b, dst.b),
                    (out_a * 255.0).round() as u8,
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_source_replaces_destination() {
        assert_eq!(Rgba::RED.over(Rgba::BLUE), Rgba::RED);
    }

    #[test]
    fn transparent_source_keeps_destination() {
        assert_eq!(Rgba::TRANSPARENT.over(Rgba::GREEN), Rgba::GREEN);
    }

    #[test]
    fn half_alpha_over_opaque_mixes_evenly() {
        let src = Rgba::new(255, 0, 0, 128);
        let out = src.over(Rgba::BLACK);
        assert_eq!(out.a, 255);
        assert!((127..=129).contains(&out.r));
        assert_eq!(out.g, 0);
        assert_eq!(out.b, 0);
    }

    #[test]
    fn translucent_over_transparent_keeps_source_color() {
        let src = Rgba::new(10, 20, 30, 100);
        assert_eq!(src.over(Rgba::TRANSPARENT), src);
    }
}
