//! The cat driver
//!
//! Reads a batch file one line at a time and pushes each line through the
//! filter, the classifier and the renderer. Nothing is buffered beyond the
//! current line.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

use log::{debug, trace};

use crate::config::DisplayOptions;
use crate::display::Renderer;
use crate::error::{CatError, Result};
use crate::filter::{Decision, LineFilter};
use crate::syntax::{BatchSyntax, Theme};
use crate::terminal::RenderContext;

/// Counters for one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunState {
    /// Lines read so far; also the 1-based number of the current line
    pub line_number: usize,
    /// Lines written to the output
    pub rendered: usize,
}

/// Colorizes batch files
pub struct BatchCat {
    syntax: BatchSyntax,
    theme: Theme,
}

impl BatchCat {
    /// Create a cat with the built-in rules and theme
    pub fn new() -> Result<Self> {
        Ok(Self {
            syntax: BatchSyntax::new()?,
            theme: Theme::default(),
        })
    }

    /// Whether this cat should handle `path`
    pub fn can_cat(&self, path: &Path) -> bool {
        self.syntax.handles(path)
    }

    /// Write the whole file to stdout
    pub fn cat(&self, options: &DisplayOptions, path: &Path) -> Result<RunState> {
        self.cat_range(options, path, 0, None)
    }

    /// Write part of a file to stdout
    ///
    /// Lines before `start_line` (1-based) are not shown. `max_lines` caps
    /// the lines *read*, not the lines shown: skipped lines count too.
    pub fn cat_range(
        &self,
        options: &DisplayOptions,
        path: &Path,
        start_line: usize,
        max_lines: Option<usize>,
    ) -> Result<RunState> {
        let reader = open(path)?;
        let mut ctx = RenderContext::stdout(self.theme.default_style())?;
        let state = self.cat_reader(reader, &mut ctx, options, start_line, max_lines)?;
        ctx.finish()?;
        Ok(state)
    }

    /// Render lines from any reader into a context
    ///
    /// The context keeps ownership of terminal colors, so an error here
    /// still leaves them restored once the context is dropped.
    pub fn cat_reader<R: BufRead, W: Write>(
        &self,
        mut reader: R,
        ctx: &mut RenderContext<W>,
        options: &DisplayOptions,
        start_line: usize,
        max_lines: Option<usize>,
    ) -> Result<RunState> {
        let renderer = Renderer::new(options, &self.theme);
        let mut state = RunState::default();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let lines_read = state.line_number;
            state.line_number += 1;

            let line = String::from_utf8_lossy(strip_line_ending(&buf));
            match LineFilter::decide(
                state.line_number,
                &line,
                options,
                start_line,
                lines_read,
                max_lines,
            ) {
                Decision::Stop => {
                    // the line that triggered the stop was never used
                    state.line_number = lines_read;
                    break;
                }
                Decision::Skip => continue,
                Decision::Render => {
                    let highlight = self.syntax.classify(&line);
                    trace!("line {} is {}", state.line_number, highlight.name());
                    renderer.render_line(ctx, state.line_number, &line, &highlight)?;
                    state.rendered += 1;
                }
            }
        }

        debug!(
            "read {} lines, rendered {}",
            state.line_number, state.rendered
        );
        Ok(state)
    }
}

/// Open a file for line reading
fn open(path: &Path) -> Result<BufReader<File>> {
    match File::open(path) {
        Ok(file) => Ok(BufReader::new(file)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(CatError::FileNotFound(path.display().to_string()))
        }
        Err(e) => Err(e.into()),
    }
}

/// Drop a trailing `\n` or `\r\n`
fn strip_line_ending(buf: &[u8]) -> &[u8] {
    let buf = buf.strip_suffix(b"\n").unwrap_or(buf);
    buf.strip_suffix(b"\r").unwrap_or(buf)
}
