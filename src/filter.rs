//! Line filtering
//!
//! Decides, per line, whether the driver renders it, skips it, or stops.

use crate::config::DisplayOptions;

/// What to do with the current line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Do not render, keep reading
    Skip,
    /// Classify and render
    Render,
    /// Stop reading the source
    Stop,
}

/// Pure skip/render/stop predicate
pub struct LineFilter;

impl LineFilter {
    /// Decide what happens to line `line_index` (1-based)
    ///
    /// `lines_read` is how many lines were read before this one. The cap in
    /// `max_lines` applies to lines *read*, skipped ones included, so with
    /// `max_lines = Some(n)` exactly `n` lines are ever considered and line
    /// `n + 1` is the first to see `Stop`. A late `start_line` therefore
    /// eats into the cap.
    pub fn decide(
        line_index: usize,
        raw: &str,
        options: &DisplayOptions,
        start_line: usize,
        lines_read: usize,
        max_lines: Option<usize>,
    ) -> Decision {
        if max_lines.is_some_and(|max| lines_read >= max) {
            return Decision::Stop;
        }

        if line_index < start_line {
            return Decision::Skip;
        }

        if options
            .ignore_lines
            .iter()
            .any(|prefix| starts_with_ignore_case(raw, prefix))
        {
            Decision::Skip
        } else if options.ignore_blank_lines && raw.is_empty() {
            Decision::Skip
        } else if options.ignore_whitespace_lines && raw.trim().is_empty() {
            Decision::Skip
        } else {
            Decision::Render
        }
    }
}

/// Case-insensitive `starts_with`
fn starts_with_ignore_case(line: &str, prefix: &str) -> bool {
    let mut line = line.chars().flat_map(char::to_lowercase);
    prefix
        .chars()
        .flat_map(char::to_lowercase)
        .all(|p| line.next() == Some(p))
}
