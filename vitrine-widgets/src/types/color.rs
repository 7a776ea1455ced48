/// A color in either OKLCH or sRGB form.
///
/// Theme colors are declared in OKLCH so lightness adjustments stay
/// perceptually uniform; they are converted to 24-bit RGB at the point a
/// cell is written.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Color {
    Oklch { l: f32, c: f32, h: f32 },
    Rgb { r: u8, g: u8, b: u8 },
}

/// Concrete 24-bit color as written to terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl Color {
    pub const fn oklch(l: f32, c: f32, h: f32) -> Self {
        Self::Oklch { l, c, h }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgb { r, g, b }
    }

    /// Raise lightness by `amount`, clamped to [0, 1].
    pub fn lighten(self, amount: f32) -> Self {
        let (l, c, h) = self.to_oklch_components();
        Self::Oklch {
            l: (l + amount).clamp(0.0, 1.0),
            c,
            h,
        }
    }

    /// Lower lightness by `amount`, clamped to [0, 1].
    pub fn darken(self, amount: f32) -> Self {
        self.lighten(-amount)
    }

    pub fn to_rgb(self) -> Rgb {
        match self {
            Self::Rgb { r, g, b } => Rgb::new(r, g, b),
            Self::Oklch { l, c, h } => oklch_to_rgb(l, c, h),
        }
    }

    fn to_oklch_components(self) -> (f32, f32, f32) {
        match self {
            Self::Oklch { l, c, h } => (l, c, h),
            Self::Rgb { r, g, b } => rgb_to_oklch(r, g, b),
        }
    }
}

fn oklch_to_rgb(l: f32, c: f32, h: f32) -> Rgb {
    use palette::{IntoColor, Oklch, Srgb};

    let oklch = Oklch::new(l, c, h);
    let srgb: Srgb = oklch.into_color();
    let (r, g, b) = srgb.into_format::<u8>().into_components();

    Rgb::new(r, g, b)
}

fn rgb_to_oklch(r: u8, g: u8, b: u8) -> (f32, f32, f32) {
    use palette::{IntoColor, Oklch, Srgb};

    let srgb = Srgb::new(r, g, b).into_format::<f32>();
    let oklch: Oklch = srgb.into_color();

    (oklch.l, oklch.chroma, oklch.hue.into_positive_degrees())
}
