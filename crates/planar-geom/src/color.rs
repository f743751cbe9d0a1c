/// Straight (non-premultiplied) RGB color with channels in `[0, 1]`.
///
/// Shapes carry this; renderers convert to their own GPU color format.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const RED: Rgb = Rgb::new(1.0, 0.0, 0.0);
    pub const GREEN: Rgb = Rgb::new(0.0, 1.0, 0.0);
    pub const BLUE: Rgb = Rgb::new(0.0, 0.0, 1.0);
    pub const WHITE: Rgb = Rgb::new(1.0, 1.0, 1.0);
    pub const YELLOW: Rgb = Rgb::new(1.0, 1.0, 0.0);
    pub const MAGENTA: Rgb = Rgb::new(1.0, 0.0, 1.0);
    pub const CYAN: Rgb = Rgb::new(0.0, 1.0, 1.0);

    #[inline]
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    #[inline]
    pub const fn gray(v: f32) -> Self {
        Self::new(v, v, v)
    }

    /// Multiplies every channel by `factor` (used for faded clip colors).
    #[inline]
    pub fn scaled(self, factor: f32) -> Self {
        Self::new(self.r * factor, self.g * factor, self.b * factor)
    }

    /// Palette name for the seven drawing colors; `None` for anything else.
    pub fn palette_name(self) -> Option<&'static str> {
        let named = [
            (Rgb::RED, "red"),
            (Rgb::GREEN, "green"),
            (Rgb::BLUE, "blue"),
            (Rgb::WHITE, "white"),
            (Rgb::YELLOW, "yellow"),
            (Rgb::MAGENTA, "magenta"),
            (Rgb::CYAN, "cyan"),
        ];
        named.iter().find(|(c, _)| *c == self).map(|(_, n)| *n)
    }
}
