//! Terminal plumbing shared by the demos.

#![allow(dead_code)]

use std::io::{self, stdout, Stdout, Write};

use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{DisableBracketedPaste, DisableFocusChange, EnableBracketedPaste, EnableFocusChange};
use crossterm::style::{Attribute, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, queue};
use spark_pin::pin::{CellVisualState, PinConfig, PinStyle};
use spark_pin::state::input::{disable_mouse, enable_mouse};
use spark_pin::{Attr, CellRect, PinLayout, Rgba};

/// Logs go to stderr, only when `RUST_LOG` is set, so they never draw over
/// the alternate screen unless redirected.
pub fn init_tracing() {
    if std::env::var_os("RUST_LOG").is_none() {
        return;
    }
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .with_ansi(false)
        .try_init();
}

// =============================================================================
// TERMINAL GUARD
// =============================================================================

/// Raw mode + alternate screen for the guard's lifetime.
pub struct Terminal {
    out: Stdout,
}

impl Terminal {
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let mut out = stdout();
        execute!(out, EnterAlternateScreen, Hide, EnableBracketedPaste, EnableFocusChange)?;
        enable_mouse()?;
        Ok(Self { out })
    }

    pub fn clear(&mut self) -> io::Result<()> {
        queue!(self.out, ResetColor, Clear(ClearType::All))
    }

    pub fn line(&mut self, x: u16, y: u16, text: &str, fg: Rgba) -> io::Result<()> {
        queue!(self.out, MoveTo(x, y))?;
        if let Some(color) = fg.to_terminal() {
            queue!(self.out, SetForegroundColor(color))?;
        }
        queue!(self.out, Print(text), ResetColor)
    }

    /// Draw every cell of a placed layout.
    pub fn pin_row(
        &mut self,
        layout: &PinLayout,
        cells: &[CellVisualState],
        config: &PinConfig,
    ) -> io::Result<()> {
        for (rect, cell) in layout.cells.iter().zip(cells) {
            match config.style {
                PinStyle::Boxed => self.boxed_cell(rect, cell, config)?,
                PinStyle::Underlined => self.underlined_cell(rect, cell, config)?,
            }
        }
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    fn boxed_cell(&mut self, rect: &CellRect, cell: &CellVisualState, config: &PinConfig) -> io::Result<()> {
        if rect.width < 2 || rect.height < 2 {
            return Ok(());
        }
        let palette = &config.palette;
        let (h, v, tl, tr, br, bl) = config.border.chars();
        let inner = (rect.width - 2) as usize;
        let border = palette.border_color(cell.border_emphasis);

        self.line(rect.x, rect.y, &format!("{tl}{}{tr}", h.repeat(inner)), border)?;
        for row in 1..rect.height - 1 {
            self.line(rect.x, rect.y + row, v, border)?;
            self.fill(rect.x + 1, rect.y + row, inner, palette.fill_color(cell.fill))?;
            self.line(rect.x + rect.width - 1, rect.y + row, v, border)?;
        }
        self.line(rect.x, rect.y + rect.height - 1, &format!("{bl}{}{br}", h.repeat(inner)), border)?;

        self.glyph(rect.x + rect.width / 2, rect.y + rect.height / 2, cell, config)
    }

    fn underlined_cell(&mut self, rect: &CellRect, cell: &CellVisualState, config: &PinConfig) -> io::Result<()> {
        let palette = &config.palette;
        let thickness = config.metrics.underline_thickness.min(rect.height);
        let body = rect.height - thickness;
        let (h, ..) = config.border.chars();

        for row in 0..body {
            self.fill(rect.x, rect.y + row, rect.width as usize, palette.fill_color(cell.fill))?;
        }
        let border = palette.border_color(cell.border_emphasis);
        for row in body..rect.height {
            self.line(rect.x, rect.y + row, &h.repeat(rect.width as usize), border)?;
        }

        self.glyph(rect.x + rect.width / 2, rect.y + body / 2, cell, config)
    }

    fn fill(&mut self, x: u16, y: u16, width: usize, bg: Rgba) -> io::Result<()> {
        let Some(color) = bg.to_terminal() else {
            return Ok(());
        };
        queue!(self.out, MoveTo(x, y), SetBackgroundColor(color), Print(" ".repeat(width)), ResetColor)
    }

    fn glyph(&mut self, x: u16, y: u16, cell: &CellVisualState, config: &PinConfig) -> io::Result<()> {
        let Some(ch) = cell.display_char else {
            return Ok(());
        };
        let palette = &config.palette;
        queue!(self.out, MoveTo(x, y))?;
        if let Some(color) = palette.font.to_terminal() {
            queue!(self.out, SetForegroundColor(color))?;
        }
        if let Some(color) = palette.fill_color(cell.fill).to_terminal() {
            queue!(self.out, SetBackgroundColor(color))?;
        }
        if palette.font_attrs.contains(Attr::BOLD) {
            queue!(self.out, SetAttribute(Attribute::Bold))?;
        }
        if palette.font_attrs.contains(Attr::UNDERLINE) {
            queue!(self.out, SetAttribute(Attribute::Underlined))?;
        }
        queue!(self.out, Print(ch), SetAttribute(Attribute::Reset), ResetColor)
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        let _ = disable_mouse();
        let _ = execute!(self.out, DisableFocusChange, DisableBracketedPaste, Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}
