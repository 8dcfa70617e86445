//! Highlight rules for batch lines
//!
//! Each rule looks at a whole line and either claims it, producing a
//! [`Highlight`], or passes. Rules are tried in table order and the first
//! claim wins, so a line never carries more than one highlighted span.

use std::ops::Range;

use regex::Regex;

use super::tokens::TokenType;

/// Placeholder written for lines that are empty after trimming
pub const BLANK_PLACEHOLDER: &str = "  ";

/// How a single line is highlighted
///
/// Offsets are byte offsets into the raw line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Highlight {
    /// `[0, split)` is the label, the rest is plain
    Label { split: usize },
    /// `[start, end)` is a comment
    Comment { start: usize },
    /// Delimiter at `start`, name in `name`, closing delimiter at `end - 1`
    VariableRef { start: usize, name: Range<usize>, end: usize },
    /// `%` at `start`, token in `[start + 1, end)`
    PositionalArg { start: usize, end: usize },
    /// Nothing to highlight
    Plain,
    /// Nothing but whitespace
    Blank,
}

/// A run of text sharing one token type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub token: TokenType,
    /// Whether the renderer may word-wrap this segment
    pub wrap: bool,
}

impl<'a> Segment<'a> {
    fn new(text: &'a str, token: TokenType) -> Self {
        Self { text, token, wrap: false }
    }

    fn wrapping(text: &'a str, token: TokenType) -> Self {
        Self { text, token, wrap: true }
    }
}

impl Highlight {
    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Highlight::Label { .. } => "label",
            Highlight::Comment { .. } => "comment",
            Highlight::VariableRef { .. } => "variable",
            Highlight::PositionalArg { .. } => "argument",
            Highlight::Plain => "plain",
            Highlight::Blank => "blank",
        }
    }

    /// Split `line` into ordered segments
    ///
    /// The last segment is always right-trimmed, so joining the segment
    /// texts gives back `line.trim_end()` for everything except `Blank`.
    pub fn segments<'a>(&self, line: &'a str) -> Vec<Segment<'a>> {
        match self {
            Highlight::Label { split } => vec![
                Segment::new(&line[..*split], TokenType::Label),
                Segment::new(line[*split..].trim_end(), TokenType::Default),
            ],
            Highlight::Comment { start } => vec![
                Segment::new(&line[..*start], TokenType::Default),
                Segment::wrapping(line[*start..].trim_end(), TokenType::Comment),
            ],
            Highlight::VariableRef { start, name, end } => vec![
                Segment::new(&line[..*start], TokenType::Default),
                Segment::new(&line[*start..name.start], TokenType::VariableSymbol),
                Segment::new(&line[name.clone()], TokenType::VariableName),
                Segment::new(&line[name.end..*end], TokenType::VariableSymbol),
                Segment::new(line[*end..].trim_end(), TokenType::Default),
            ],
            Highlight::PositionalArg { start, end } => vec![
                Segment::new(&line[..*start], TokenType::Default),
                Segment::new(&line[*start..*start + 1], TokenType::VariableSymbol),
                Segment::new(&line[*start + 1..*end], TokenType::VariableName),
                Segment::new(line[*end..].trim_end(), TokenType::Default),
            ],
            Highlight::Plain => vec![Segment::wrapping(line.trim_end(), TokenType::Default)],
            Highlight::Blank => vec![Segment::new(BLANK_PLACEHOLDER, TokenType::Default)],
        }
    }
}

/// What a rule looks for
pub enum RuleKind {
    /// Trimmed line starts with `:`
    Label,
    /// Raw line contains this exact, case-sensitive text
    Comment(&'static str),
    /// Delimited variable expansion, capture group 1 is the name
    Variable(Regex),
    /// `%`-prefixed argument, capture group 1 is the token
    Argument(Regex),
}

/// A named entry in the rule table
pub struct Rule {
    /// Name for debugging
    pub name: &'static str,
    pub kind: RuleKind,
}

impl Rule {
    /// Create a new rule
    pub fn new(name: &'static str, kind: RuleKind) -> Self {
        Self { name, kind }
    }

    /// Try this rule against a line
    pub fn apply(&self, raw: &str, trimmed: &str) -> Option<Highlight> {
        match &self.kind {
            RuleKind::Label => {
                if !trimmed.starts_with(':') {
                    return None;
                }
                let split = raw.find(' ').unwrap_or_else(|| raw.trim_end().len());
                Some(Highlight::Label { split })
            }
            RuleKind::Comment(marker) => raw
                .find(*marker)
                .map(|start| Highlight::Comment { start }),
            RuleKind::Variable(pattern) => {
                let caps = pattern.captures(raw)?;
                let whole = caps.get(0)?;
                let name = caps.get(1)?;
                Some(Highlight::VariableRef {
                    start: whole.start(),
                    name: name.range(),
                    end: whole.end(),
                })
            }
            RuleKind::Argument(pattern) => {
                let whole = pattern.find(raw)?;
                Some(Highlight::PositionalArg {
                    start: whole.start(),
                    end: whole.end(),
                })
            }
        }
    }
}
