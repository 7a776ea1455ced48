use unicode_width::UnicodeWidthChar;
use unicode_width::UnicodeWidthStr;

use crate::buffer::{Buffer, Cell};
use crate::types::{Rgb, TextStyle};

pub fn display_width(s: &str) -> usize {
    s.width()
}

pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    let current_width = display_width(s);
    if current_width <= max_width {
        return s.to_string();
    }

    if max_width == 0 {
        return String::new();
    }

    let ellipsis = "…";
    let ellipsis_width = 1;
    let target_width = max_width.saturating_sub(ellipsis_width);

    let mut result = String::new();
    let mut width = 0;

    for ch in s.chars() {
        let ch_width = char_width(ch);
        if width + ch_width > target_width {
            break;
        }
        result.push(ch);
        width += ch_width;
    }

    result.push_str(ellipsis);
    result
}

/// Write `text` into the buffer starting at (x, y), clipping at
/// `max_width` columns. Wide characters emit a continuation cell.
/// Returns the x position after the last written column.
pub fn draw_str(
    buf: &mut Buffer,
    x: u16,
    y: u16,
    max_width: u16,
    text: &str,
    fg: Rgb,
    bg: Rgb,
    style: TextStyle,
) -> u16 {
    let mut cursor = x;
    let limit = x.saturating_add(max_width);

    for ch in text.chars() {
        let w = char_width(ch) as u16;
        if w == 0 {
            continue;
        }
        if cursor + w > limit {
            break;
        }
        buf.set(
            cursor,
            y,
            Cell::new(ch).with_fg(fg).with_bg(bg).with_style(style),
        );
        for cont in 1..w {
            let mut cell = Cell::new(' ').with_fg(fg).with_bg(bg).with_style(style);
            cell.wide_continuation = true;
            buf.set(cursor + cont, y, cell);
        }
        cursor += w;
    }

    cursor
}

/// Fill `width` columns of row `y` with `ch`.
pub fn fill_row(
    buf: &mut Buffer,
    x: u16,
    y: u16,
    width: u16,
    ch: char,
    fg: Rgb,
    bg: Rgb,
    style: TextStyle,
) {
    for dx in 0..width {
        buf.set(
            x + dx,
            y,
            Cell::new(ch).with_fg(fg).with_bg(bg).with_style(style),
        );
    }
}
