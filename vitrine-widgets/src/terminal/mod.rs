use std::io::{self, Write};
use std::time::Duration;

use crossterm::{
    cursor,
    event::{self},
    execute,
    style::{Attribute, Color as CtColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};

use crate::buffer::Buffer;
use crate::event::Event;
use crate::text::char_width;
use crate::types::Rgb;

/// Owns the raw-mode terminal session and the double buffer.
///
/// Hosts draw a frame by mutating [`Terminal::frame`] and then calling
/// [`Terminal::flush`], which writes only the cells that changed since
/// the previous frame.
pub struct Terminal {
    stdout: io::Stdout,
    current_buffer: Buffer,
    previous_buffer: Buffer,
}

impl Terminal {
    pub fn new() -> io::Result<Self> {
        let mut stdout = io::stdout();

        terminal::enable_raw_mode()?;
        execute!(
            stdout,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            event::EnableMouseCapture
        )?;

        let (width, height) = terminal::size()?;
        let current_buffer = Buffer::new(width, height);
        let previous_buffer = Buffer::new(width, height);

        Ok(Self {
            stdout,
            current_buffer,
            previous_buffer,
        })
    }

    pub fn size(&self) -> (u16, u16) {
        (self.current_buffer.width(), self.current_buffer.height())
    }

    /// Wait for input, translating to widget events. `None` blocks.
    pub fn poll(&self, timeout: Option<Duration>) -> io::Result<Vec<Event>> {
        let mut raw = Vec::new();

        match timeout {
            Some(dur) => {
                if event::poll(dur)? {
                    raw.push(event::read()?);
                    while event::poll(Duration::ZERO)? {
                        raw.push(event::read()?);
                    }
                }
            }
            None => {
                raw.push(event::read()?);
                while event::poll(Duration::ZERO)? {
                    raw.push(event::read()?);
                }
            }
        }

        Ok(raw.iter().filter_map(Event::from_crossterm).collect())
    }

    /// The draw target for the next frame, cleared and resized to the
    /// current terminal dimensions.
    pub fn frame(&mut self) -> io::Result<&mut Buffer> {
        let (width, height) = terminal::size()?;
        if width != self.current_buffer.width() || height != self.current_buffer.height() {
            log::debug!("terminal resized to {width}x{height}");
            self.current_buffer = Buffer::new(width, height);
            // Force a full repaint by desyncing the previous buffer.
            self.previous_buffer = Buffer::new(0, 0);
        }

        self.current_buffer.clear();
        Ok(&mut self.current_buffer)
    }

    /// Diff the frame against the previous one and write the changes.
    pub fn flush(&mut self) -> io::Result<()> {
        if self.previous_buffer.width() != self.current_buffer.width()
            || self.previous_buffer.height() != self.current_buffer.height()
        {
            self.previous_buffer =
                Buffer::new(self.current_buffer.width(), self.current_buffer.height());
            execute!(self.stdout, terminal::Clear(terminal::ClearType::All))?;
            // Desync every cell so the whole frame is written.
            for y in 0..self.previous_buffer.height() {
                for x in 0..self.previous_buffer.width() {
                    if let Some(cell) = self.previous_buffer.get_mut(x, y) {
                        cell.char = '\0';
                    }
                }
            }
        }

        self.flush_diff()?;
        std::mem::swap(&mut self.current_buffer, &mut self.previous_buffer);
        Ok(())
    }

    fn flush_diff(&mut self) -> io::Result<()> {
        let mut last_x = u16::MAX;
        let mut last_y = u16::MAX;
        let mut last_char_width: u16 = 1;
        let mut last_fg = Rgb::new(255, 255, 255);
        let mut last_bg = Rgb::new(0, 0, 0);
        let mut last_style = crate::types::TextStyle::new();

        execute!(self.stdout, SetAttribute(Attribute::Reset))?;

        for (x, y, cell) in self.current_buffer.diff(&self.previous_buffer) {
            // Wide chars already occupy their continuation columns.
            if cell.wide_continuation {
                continue;
            }

            if y != last_y || x != last_x + last_char_width {
                execute!(self.stdout, cursor::MoveTo(x, y))?;
            }

            if cell.fg != last_fg {
                execute!(
                    self.stdout,
                    SetForegroundColor(CtColor::Rgb {
                        r: cell.fg.r,
                        g: cell.fg.g,
                        b: cell.fg.b,
                    })
                )?;
                last_fg = cell.fg;
            }

            if cell.bg != last_bg {
                execute!(
                    self.stdout,
                    SetBackgroundColor(CtColor::Rgb {
                        r: cell.bg.r,
                        g: cell.bg.g,
                        b: cell.bg.b,
                    })
                )?;
                last_bg = cell.bg;
            }

            if cell.style.bold != last_style.bold {
                if cell.style.bold {
                    execute!(self.stdout, SetAttribute(Attribute::Bold))?;
                } else {
                    execute!(self.stdout, SetAttribute(Attribute::NormalIntensity))?;
                }
            }
            if cell.style.dim != last_style.dim {
                if cell.style.dim {
                    execute!(self.stdout, SetAttribute(Attribute::Dim))?;
                } else {
                    execute!(self.stdout, SetAttribute(Attribute::NormalIntensity))?;
                }
            }
            if cell.style.italic != last_style.italic {
                if cell.style.italic {
                    execute!(self.stdout, SetAttribute(Attribute::Italic))?;
                } else {
                    execute!(self.stdout, SetAttribute(Attribute::NoItalic))?;
                }
            }
            if cell.style.underline != last_style.underline {
                if cell.style.underline {
                    execute!(self.stdout, SetAttribute(Attribute::Underlined))?;
                } else {
                    execute!(self.stdout, SetAttribute(Attribute::NoUnderline))?;
                }
            }
            if cell.style.reverse != last_style.reverse {
                if cell.style.reverse {
                    execute!(self.stdout, SetAttribute(Attribute::Reverse))?;
                } else {
                    execute!(self.stdout, SetAttribute(Attribute::NoReverse))?;
                }
            }
            last_style = cell.style;

            write!(self.stdout, "{}", cell.char)?;

            last_x = x;
            last_y = y;
            last_char_width = char_width(cell.char).max(1) as u16;
        }

        execute!(self.stdout, SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = execute!(
            self.stdout,
            event::DisableMouseCapture,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }
}
