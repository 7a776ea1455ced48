//! DataTable rendering.

use crate::buffer::Buffer;
use crate::rect::Rect;
use crate::text::{display_width, draw_str, fill_row, truncate_to_width};
use crate::types::{Rgb, TextStyle, Theme};

use super::column::Alignment;
use super::state::{DataTable, SortIndicator, LOADING_PLACEHOLDER_ROWS};

/// Width of the selection checkbox cell, matching the "■ "/"□ " glyphs.
pub(super) const CELL_GAP: u16 = 1;
pub(super) const INDICATOR_WIDTH: u16 = 2;

const CHECKED: &str = "■ ";
const UNCHECKED: &str = "□ ";
const PLACEHOLDER: char = '░';

impl<T: Clone> DataTable<T> {
    /// Draw the table into `area`: header row, data rows (or loading
    /// placeholders), and the selection summary footer when present.
    /// Rows that do not fit are clipped; there is no scrolling.
    pub fn render(&self, theme: &Theme, buf: &mut Buffer, area: Rect) {
        if area.is_empty() {
            return;
        }

        let bg = theme.background.to_rgb();
        let surface = theme.surface.to_rgb();
        let fg = theme.foreground.to_rgb();
        let muted = theme.muted.to_rgb();

        self.render_header(theme, buf, area);

        let body = Rect::new(
            area.x,
            area.y + 1,
            area.width,
            area.height.saturating_sub(1),
        );

        if self.is_loading() {
            self.render_placeholder_rows(buf, body, muted, bg);
            return;
        }

        let summary = self.selection_summary();
        let mut body_rows = body.height;
        if summary.is_some() {
            body_rows = body_rows.saturating_sub(1);
        }

        for index in 0..self.view_len().min(body_rows as usize) {
            let y = body.y + index as u16;
            let row_bg = if self.cursor() == Some(index) {
                theme.primary.to_rgb()
            } else if self.is_row_selected(index) {
                theme.selection.to_rgb()
            } else {
                bg
            };
            let row_fg = if self.cursor() == Some(index) || self.is_row_selected(index) {
                theme.background.to_rgb()
            } else {
                fg
            };

            fill_row(buf, area.x, y, area.width, ' ', row_fg, row_bg, TextStyle::new());

            let mut x = area.x;
            if self.is_selectable() {
                let glyph = if self.is_row_selected(index) {
                    CHECKED
                } else {
                    UNCHECKED
                };
                x = draw_str(
                    buf,
                    x,
                    y,
                    INDICATOR_WIDTH,
                    glyph,
                    row_fg,
                    row_bg,
                    TextStyle::new(),
                );
                x += CELL_GAP;
            }

            let Some(row) = self.row(index) else { break };
            for column in self.columns() {
                if x >= area.right() {
                    break;
                }
                let content = column.cell_content(row, index);
                let cell_fg = match content.fg {
                    // Highlighted rows keep their inverted foreground.
                    Some(color) if row_bg == bg => color.to_rgb(),
                    _ => row_fg,
                };
                let width = column.width.min(area.right() - x);
                let text = align_cell(&content.text, width, column.align);
                draw_str(buf, x, y, width, &text, cell_fg, row_bg, content.style);
                x += column.width + CELL_GAP;
            }
        }

        if let Some(summary) = summary {
            let y = area.bottom() - 1;
            fill_row(buf, area.x, y, area.width, ' ', muted, surface, TextStyle::new());
            draw_str(
                buf,
                area.x + 1,
                y,
                area.width.saturating_sub(1),
                &summary,
                muted,
                surface,
                TextStyle::new(),
            );
        }
    }

    fn render_header(&self, theme: &Theme, buf: &mut Buffer, area: Rect) {
        let surface = theme.surface.to_rgb();
        let muted = theme.muted.to_rgb();
        let primary = theme.primary.to_rgb();
        let style = TextStyle::new().bold();

        fill_row(buf, area.x, area.y, area.width, ' ', muted, surface, style);

        let mut x = area.x;
        if self.is_selectable() {
            let glyph = if self.is_loading() {
                "░ "
            } else if self.all_selected() {
                CHECKED
            } else {
                UNCHECKED
            };
            x = draw_str(buf, x, area.y, INDICATOR_WIDTH, glyph, muted, surface, style);
            x += CELL_GAP;
        }

        for column in self.columns() {
            if x >= area.right() {
                break;
            }
            let width = column.width.min(area.right() - x);
            if self.is_loading() {
                let blocks = PLACEHOLDER.to_string().repeat((width.min(8)) as usize);
                draw_str(buf, x, area.y, width, &blocks, muted, surface, style);
            } else {
                let (indicator, indicator_fg) = match self.sort_indicator(&column.key) {
                    SortIndicator::Ascending => (" ▲", primary),
                    SortIndicator::Descending => (" ▼", primary),
                    SortIndicator::None if column.sortable => (" ↕", muted),
                    SortIndicator::None => ("", muted),
                };
                let title_width = width.saturating_sub(display_width(indicator) as u16);
                let title = truncate_to_width(&column.title, title_width as usize);
                let next = draw_str(buf, x, area.y, title_width, &title, muted, surface, style);
                draw_str(
                    buf,
                    next,
                    area.y,
                    width.saturating_sub(next - x),
                    indicator,
                    indicator_fg,
                    surface,
                    style,
                );
            }
            x += column.width + CELL_GAP;
        }
    }

    fn render_placeholder_rows(&self, buf: &mut Buffer, body: Rect, muted: Rgb, bg: Rgb) {
        let style = TextStyle::new().dim();
        for row in 0..LOADING_PLACEHOLDER_ROWS.min(body.height) {
            let y = body.y + row;
            let mut x = body.x;
            if self.is_selectable() {
                x = draw_str(buf, x, y, INDICATOR_WIDTH, "░ ", muted, bg, style);
                x += CELL_GAP;
            }
            for column in self.columns() {
                if x >= body.right() {
                    break;
                }
                let width = column.width.min(body.right() - x);
                let blocks = PLACEHOLDER.to_string().repeat(width as usize);
                draw_str(buf, x, y, width, &blocks, muted, bg, style);
                x += column.width + CELL_GAP;
            }
        }
    }

    /// Height needed to show every row plus header and summary.
    pub fn preferred_height(&self) -> u16 {
        if self.is_loading() {
            return 1 + LOADING_PLACEHOLDER_ROWS;
        }
        let summary = u16::from(self.selection_summary().is_some());
        1 + self.view_len() as u16 + summary
    }
}

fn align_cell(text: &str, width: u16, align: Alignment) -> String {
    let width = width as usize;
    let truncated = truncate_to_width(text, width);
    let text_width = display_width(&truncated);
    let pad = width.saturating_sub(text_width);
    match align {
        Alignment::Left => truncated,
        Alignment::Center => format!("{}{}", " ".repeat(pad / 2), truncated),
        Alignment::Right => format!("{}{}", " ".repeat(pad), truncated),
    }
}
