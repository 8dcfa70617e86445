//! Terminal color state using crossterm
//!
//! The terminal's colors are one process-wide resource. A `RenderContext`
//! owns them for the length of a run: styles are pushed and popped through
//! it, and whatever happens, the terminal's own colors are put back when
//! the context is finished or dropped.

use std::io::{self, Write};

use crossterm::{
    queue,
    style::{Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal,
};

use crate::error::Result;
use crate::syntax::Style;

/// Width assumed when stdout is not a terminal
const FALLBACK_COLS: u16 = 80;

/// Styled writer with a style stack
pub struct RenderContext<W: Write> {
    out: W,
    /// Terminal width in columns
    cols: u16,
    /// Active styles, innermost last; the first entry is the base style
    styles: Vec<Style>,
    /// Set once colors have been put back
    restored: bool,
}

impl RenderContext<io::Stdout> {
    /// Take over stdout, starting in `base` colors
    pub fn stdout(base: Style) -> Result<Self> {
        let cols = terminal::size().map(|(cols, _)| cols).unwrap_or(FALLBACK_COLS);
        Self::new(io::stdout(), cols, base)
    }
}

impl<W: Write> RenderContext<W> {
    /// Wrap any writer, starting in `base` colors
    pub fn new(out: W, cols: u16, base: Style) -> Result<Self> {
        let mut ctx = Self {
            out,
            cols,
            styles: vec![base],
            restored: false,
        };
        ctx.apply(base)?;
        Ok(ctx)
    }

    /// Get terminal width
    pub fn cols(&self) -> u16 {
        self.cols
    }

    /// Style currently in effect
    pub fn current(&self) -> Style {
        self.styles.last().copied().unwrap_or_default()
    }

    /// Switch to `style` until the matching `pop_style`
    pub fn push_style(&mut self, style: Style) -> Result<()> {
        self.styles.push(style);
        self.apply(style)
    }

    /// Return to the style that was active before the last push
    ///
    /// The base style is never popped.
    pub fn pop_style(&mut self) -> Result<()> {
        if self.styles.len() > 1 {
            self.styles.pop();
        }
        self.apply(self.current())
    }

    /// Write a string in the current style
    pub fn write_str(&mut self, s: &str) -> Result<()> {
        queue!(self.out, Print(s))?;
        Ok(())
    }

    /// End the current output line
    pub fn newline(&mut self) -> Result<()> {
        queue!(self.out, Print('\n'))?;
        Ok(())
    }

    /// Put the terminal's own colors back and flush
    pub fn finish(mut self) -> Result<()> {
        self.restore()
    }

    fn apply(&mut self, style: Style) -> Result<()> {
        queue!(
            self.out,
            SetForegroundColor(style.fg.into()),
            SetBackgroundColor(style.bg.into())
        )?;
        Ok(())
    }

    fn restore(&mut self) -> Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        queue!(self.out, ResetColor)?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> Drop for RenderContext<W> {
    fn drop(&mut self) {
        // Restore terminal colors even when a run bails out early
        let _ = self.restore();
    }
}
