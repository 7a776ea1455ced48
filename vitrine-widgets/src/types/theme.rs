use super::Color;

/// Named colors shared by every widget.
///
/// Widgets never hardcode colors; they resolve the slots below and derive
/// hover/disabled shades with [`Color::lighten`]/[`Color::darken`].
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub background: Color,
    pub surface: Color,
    pub foreground: Color,
    pub muted: Color,
    pub border: Color,
    pub primary: Color,
    pub selection: Color,
    pub danger: Color,
    pub success: Color,
}

impl Theme {
    /// Dark default. Ensures content is readable without any host setup.
    pub const fn dark() -> Self {
        Self {
            background: Color::oklch(0.16, 0.012, 260.0),
            surface: Color::oklch(0.22, 0.015, 260.0),
            foreground: Color::oklch(0.93, 0.01, 260.0),
            muted: Color::oklch(0.64, 0.02, 260.0),
            border: Color::oklch(0.42, 0.02, 260.0),
            primary: Color::oklch(0.72, 0.13, 295.0),
            selection: Color::oklch(0.46, 0.09, 295.0),
            danger: Color::oklch(0.62, 0.19, 25.0),
            success: Color::oklch(0.72, 0.15, 150.0),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
