mod color;
mod enums;
mod theme;

pub use color::{Color, Rgb};
pub use enums::TextStyle;
pub use theme::Theme;
