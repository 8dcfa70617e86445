//! Token types and the color theme
//!
//! A batch line is split into at most a handful of segments, each tagged
//! with one of these token types. The theme maps token types to colors.

use super::style::{Color, Style};

/// Semantic token types for batch highlighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    /// Plain text
    Default,
    /// Jump target (`:label`)
    Label,
    /// `rem ` comment through end of line
    Comment,
    /// `%` or `!` delimiter of a variable or argument
    VariableSymbol,
    /// Name between the delimiters
    VariableName,
}

impl TokenType {
    /// Get a human-readable name for this token type
    pub fn name(&self) -> &'static str {
        match self {
            TokenType::Default => "Default",
            TokenType::Label => "Label",
            TokenType::Comment => "Comment",
            TokenType::VariableSymbol => "VariableSymbol",
            TokenType::VariableName => "VariableName",
        }
    }
}

/// Colors used for each token type
///
/// Only the compiled-in default exists today. Everything downstream asks
/// for colors through [`Theme::style_for`], so a theme built from some
/// other source plugs in without touching the classifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub default_fg: Color,
    pub default_bg: Color,
    pub label: Color,
    pub comment: Color,
    pub variable_symbol: Color,
    pub variable_name: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            default_fg: Color::Gray,
            default_bg: Color::Black,
            label: Color::Cyan,
            comment: Color::DarkGreen,
            variable_symbol: Color::DarkCyan,
            variable_name: Color::DarkCyan,
        }
    }
}

impl Theme {
    /// Style for plain text
    pub fn default_style(&self) -> Style {
        Style::new(self.default_fg, self.default_bg)
    }

    /// Style for a token type; highlights keep the default background
    pub fn style_for(&self, token: TokenType) -> Style {
        let fg = match token {
            TokenType::Default => self.default_fg,
            TokenType::Label => self.label,
            TokenType::Comment => self.comment,
            TokenType::VariableSymbol => self.variable_symbol,
            TokenType::VariableName => self.variable_name,
        };
        self.default_style().with_fg(fg)
    }
}
