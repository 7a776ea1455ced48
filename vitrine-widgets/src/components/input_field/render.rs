//! InputField rendering.

use crate::buffer::Buffer;
use crate::rect::Rect;
use crate::text::{display_width, draw_str, fill_row};
use crate::types::{Rgb, TextStyle, Theme};

use super::state::{InputField, InputVariant, MessageKind};

impl InputField {
    /// Rows this field needs: optional label, the field itself (three
    /// rows for the outlined variant's border box, one otherwise), and
    /// an optional message line.
    pub fn height(&self) -> u16 {
        let label = u16::from(self.label_text().is_some());
        let field = if self.variant_tag() == InputVariant::Outlined {
            3
        } else {
            1
        };
        let message = u16::from(self.message().is_some());
        label + field + message
    }

    /// The widget-relative row holding the editable text.
    pub(super) fn field_row(&self) -> u16 {
        let label = u16::from(self.label_text().is_some());
        if self.variant_tag() == InputVariant::Outlined {
            label + 1
        } else {
            label
        }
    }

    /// The widget-relative column where the text starts.
    pub(super) fn content_left(&self) -> u16 {
        let border = u16::from(self.variant_tag() == InputVariant::Outlined);
        border + self.size_tag().padding()
    }

    /// Draw the field into `area`. `focused` controls cursor visibility.
    pub fn render(&self, theme: &Theme, focused: bool, buf: &mut Buffer, area: Rect) {
        if area.is_empty() {
            return;
        }

        let bg = theme.background.to_rgb();
        let muted = theme.muted.to_rgb();
        let danger = theme.danger.to_rgb();

        let mut y = area.y;
        if let Some(label) = self.label_text() {
            let next = draw_str(
                buf,
                area.x,
                y,
                area.width,
                label,
                muted,
                bg,
                TextStyle::new(),
            );
            if self.is_required() {
                draw_str(
                    buf,
                    next,
                    y,
                    area.width.saturating_sub(next - area.x),
                    " *",
                    danger,
                    bg,
                    TextStyle::new(),
                );
            }
            y += 1;
        }

        y = self.render_field(theme, focused, buf, area, y);

        if let Some((kind, text)) = self.message() {
            let fg = match kind {
                MessageKind::Alert => danger,
                MessageKind::Info => muted,
            };
            draw_str(buf, area.x, y, area.width, text, fg, bg, TextStyle::new());
        }
    }

    /// Draw the field body, returning the row below it.
    fn render_field(
        &self,
        theme: &Theme,
        focused: bool,
        buf: &mut Buffer,
        area: Rect,
        y: u16,
    ) -> u16 {
        let bg = theme.background.to_rgb();

        match self.variant_tag() {
            InputVariant::Filled => {
                let field_bg = if self.is_invalid() {
                    theme.danger.darken(0.35).to_rgb()
                } else if focused {
                    theme.surface.lighten(0.05).to_rgb()
                } else {
                    theme.surface.to_rgb()
                };
                fill_row(
                    buf,
                    area.x,
                    y,
                    area.width,
                    ' ',
                    theme.foreground.to_rgb(),
                    field_bg,
                    TextStyle::new(),
                );
                self.render_content(theme, focused, buf, area, y, field_bg);
                y + 1
            }
            InputVariant::Ghost => {
                // Border-bottom effect: the whole row is underlined.
                let style = TextStyle::new().underline();
                fill_row(
                    buf,
                    area.x,
                    y,
                    area.width,
                    ' ',
                    theme.foreground.to_rgb(),
                    bg,
                    style,
                );
                self.render_content(theme, focused, buf, area, y, bg);
                y + 1
            }
            InputVariant::Outlined => {
                let border_fg = if self.is_invalid() {
                    theme.danger.to_rgb()
                } else if focused {
                    theme.primary.to_rgb()
                } else {
                    theme.border.to_rgb()
                };
                draw_box(buf, Rect::new(area.x, y, area.width, 3), border_fg, bg);
                self.render_content(theme, focused, buf, area, y + 1, bg);
                y + 3
            }
        }
    }

    fn render_content(
        &self,
        theme: &Theme,
        focused: bool,
        buf: &mut Buffer,
        area: Rect,
        y: u16,
        field_bg: Rgb,
    ) {
        let muted = theme.muted.to_rgb();
        let border = u16::from(self.variant_tag() == InputVariant::Outlined);
        let pad = self.content_left();
        let x = area.x + pad;

        let toggle_width = if self.has_password_toggle() { 7 } else { 0 };
        let content_width = area.width.saturating_sub(pad * 2 + toggle_width);

        let display = self.display_text();
        let mut fg = if self.is_disabled() {
            muted
        } else {
            theme.foreground.to_rgb()
        };
        let mut style = if self.is_disabled() {
            TextStyle::new().dim()
        } else {
            TextStyle::new()
        };
        if self.variant_tag() == InputVariant::Ghost {
            style = style.underline();
        }

        let text = if display.is_empty() {
            fg = muted;
            style = style.dim();
            self.placeholder_text().unwrap_or_default().to_string()
        } else {
            display.clone()
        };
        draw_str(buf, x, y, content_width, &text, fg, field_bg, style);

        // Cursor: reverse video over the character at the cursor.
        if focused && !self.is_disabled() {
            let offset: usize = display
                .chars()
                .take(self.cursor())
                .map(crate::text::char_width)
                .sum();
            if (offset as u16) < content_width {
                let cursor_char = display.chars().nth(self.cursor()).unwrap_or(' ');
                draw_str(
                    buf,
                    x + offset as u16,
                    y,
                    content_width - offset as u16,
                    &cursor_char.to_string(),
                    fg,
                    field_bg,
                    style.reverse(),
                );
            }
        }

        if self.has_password_toggle() {
            let action = if self.password_visible() {
                "[hide]"
            } else {
                "[show]"
            };
            let ax = area
                .right()
                .saturating_sub(border + 1 + display_width(action) as u16);
            draw_str(
                buf,
                ax,
                y,
                display_width(action) as u16,
                action,
                muted,
                field_bg,
                TextStyle::new(),
            );
        }
    }
}

fn draw_box(buf: &mut Buffer, area: Rect, fg: Rgb, bg: Rgb) {
    if area.width < 2 || area.height < 2 {
        return;
    }
    let style = TextStyle::new();
    let right = area.right() - 1;
    let bottom = area.bottom() - 1;

    fill_row(buf, area.x + 1, area.y, area.width - 2, '─', fg, bg, style);
    fill_row(buf, area.x + 1, bottom, area.width - 2, '─', fg, bg, style);
    for y in (area.y + 1)..bottom {
        draw_str(buf, area.x, y, 1, "│", fg, bg, style);
        fill_row(buf, area.x + 1, y, area.width - 2, ' ', fg, bg, style);
        draw_str(buf, right, y, 1, "│", fg, bg, style);
    }
    draw_str(buf, area.x, area.y, 1, "┌", fg, bg, style);
    draw_str(buf, right, area.y, 1, "┐", fg, bg, style);
    draw_str(buf, area.x, bottom, 1, "└", fg, bg, style);
    draw_str(buf, right, bottom, 1, "┘", fg, bg, style);
}
