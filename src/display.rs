//! Line rendering
//!
//! Turns a classified line into styled terminal output: optional
//! line-number gutter, one styled run per segment, and word wrapping for
//! the segments that allow it.

use std::io::Write;

use log::trace;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::config::DisplayOptions;
use crate::error::Result;
use crate::syntax::{Highlight, Style, Theme, TokenType};
use crate::terminal::RenderContext;

/// Writes classified lines through a render context
pub struct Renderer<'a> {
    options: &'a DisplayOptions,
    theme: &'a Theme,
}

impl<'a> Renderer<'a> {
    pub fn new(options: &'a DisplayOptions, theme: &'a Theme) -> Self {
        Self { options, theme }
    }

    /// Style a line's content sits on
    ///
    /// With line numbers on, the options' default colors take over after
    /// the gutter; otherwise the theme's.
    fn line_style(&self) -> Style {
        if self.options.show_line_numbers {
            self.options.content_style()
        } else {
            self.theme.default_style()
        }
    }

    /// Render one line, including its trailing newline
    pub fn render_line<W: Write>(
        &self,
        ctx: &mut RenderContext<W>,
        line_number: usize,
        raw: &str,
        highlight: &Highlight,
    ) -> Result<()> {
        let gutter = self.options.gutter_width();

        if self.options.show_line_numbers {
            ctx.push_style(self.options.gutter_style())?;
            ctx.write_str(&format!("{:>width$}", line_number, width = gutter))?;
            ctx.pop_style()?;
        }

        let line_style = self.line_style();
        ctx.push_style(line_style)?;

        let wrap_width = (ctx.cols() as usize).saturating_sub(1 + gutter).max(1);
        let mut col = 0;

        for segment in highlight.segments(raw) {
            trace!("{} {:?}", segment.token.name(), segment.text);
            let style = match segment.token {
                TokenType::Default => line_style,
                token => self.theme.style_for(token).with_bg(line_style.bg),
            };
            ctx.push_style(style)?;

            if segment.wrap && self.options.wrap_text {
                // No room left on this row; start the segment on the next one
                if col > 0 && col >= wrap_width {
                    ctx.newline()?;
                    ctx.write_str(&" ".repeat(gutter))?;
                    col = 0;
                }
                let first_width = wrap_width.saturating_sub(col);
                let pieces = wrap(segment.text, first_width, wrap_width);
                let last = pieces.len() - 1;
                for (i, piece) in pieces.into_iter().enumerate() {
                    if i > 0 {
                        ctx.newline()?;
                        ctx.write_str(&" ".repeat(gutter))?;
                        col = 0;
                    }
                    ctx.write_str(piece)?;
                    if i == last {
                        col += piece.width();
                    }
                }
            } else {
                ctx.write_str(segment.text)?;
                col += segment.text.width();
            }

            ctx.pop_style()?;
        }

        ctx.pop_style()?;
        ctx.newline()
    }
}

/// Word-wrap `text` into rows of display columns
///
/// The first row may use `first_width` columns, later rows `width`. Rows
/// break at whitespace, which is dropped at the break; a word wider than a
/// row is split between characters. Always returns at least one row.
pub fn wrap(text: &str, first_width: usize, width: usize) -> Vec<&str> {
    let mut rows = Vec::new();
    let mut rest = text;
    let mut limit = first_width.max(1);

    while rest.width() > limit {
        let cut = break_point(rest, limit);
        rows.push(rest[..cut].trim_end());
        rest = rest[cut..].trim_start();
        limit = width.max(1);
    }

    rows.push(rest);
    rows
}

/// Byte offset to break `text` at so the row fits in `limit` columns
fn break_point(text: &str, limit: usize) -> usize {
    let mut col = 0;
    let mut fit = 0;
    let mut last_space = None;

    for (i, ch) in text.char_indices() {
        let ch_width = ch.width().unwrap_or(1);
        if col + ch_width > limit {
            break;
        }
        col += ch_width;
        if ch.is_whitespace() && !text[..i].trim().is_empty() {
            last_space = Some(i);
        }
        fit = i + ch.len_utf8();
    }

    match last_space {
        Some(i) => i,
        // Nothing fits at all; take one character so the loop moves on
        None if fit == 0 => text.chars().next().map_or(text.len(), char::len_utf8),
        None => fit,
    }
}
