//! Syntax and styling module
//!
//! This module provides the batch line classifier and the styling it
//! hands to the renderer:
//! - Named colors and styles
//! - Token types and the compiled-in theme
//! - The ordered rule table that classifies each line

mod style;
mod tokens;
mod rules;
mod language;

pub use style::{Color, Style};
pub use tokens::{Theme, TokenType};
pub use rules::{Highlight, Segment, BLANK_PLACEHOLDER};
pub use language::BatchSyntax;
