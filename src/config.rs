//! Display options and configuration file support
//!
//! Loads settings from ~/.batcat.toml (or %USERPROFILE%\.batcat.toml on Windows)
//!
//! Example:
//! ```toml
//! line-numbers = true
//! wrap = true
//! ignore-blank = false
//! ignore-whitespace = true
//! ignore-lines = ["@echo off", "::"]
//! line-number-fg = "DarkGray"
//! line-number-bg = "Black"
//! default-fg = "Gray"
//! default-bg = "Black"
//! ```
//!
//! Command-line flags are applied on top of whatever the file sets.

use std::fs;
use std::path::PathBuf;

use log::{debug, warn};
use toml::{Table, Value};

use crate::error::{CatError, Result};
use crate::syntax::{Color, Style};

/// Options for one cat run; never changed while a file is being written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Whether to show line numbers
    pub show_line_numbers: bool,
    /// Gutter background
    pub line_num_back_color: Color,
    /// Gutter foreground
    pub line_num_fore_color: Color,
    /// Background after the gutter
    pub default_back_color: Color,
    /// Foreground after the gutter
    pub default_fore_color: Color,
    /// Lines starting with any of these (ignoring case) are skipped
    pub ignore_lines: Vec<String>,
    /// Skip zero-length lines
    pub ignore_blank_lines: bool,
    /// Skip lines that are only whitespace
    pub ignore_whitespace_lines: bool,
    /// Word-wrap comments and plain lines to the terminal width
    pub wrap_text: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_line_numbers: false,
            line_num_back_color: Color::Black,
            line_num_fore_color: Color::DarkGray,
            default_back_color: Color::Black,
            default_fore_color: Color::Gray,
            ignore_lines: Vec::new(),
            ignore_blank_lines: false,
            ignore_whitespace_lines: false,
            wrap_text: false,
        }
    }
}

impl DisplayOptions {
    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE")
                .ok()
                .map(|home| PathBuf::from(home).join(".batcat.toml"))
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME")
                .ok()
                .map(|home| PathBuf::from(home).join(".batcat.toml"))
        }
    }

    /// Load options from the config file, falling back to defaults
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        let Ok(contents) = fs::read_to_string(&path) else {
            return Self::default();
        };

        match Self::parse(&contents) {
            Ok(options) => {
                debug!("loaded config from {}", path.display());
                options
            }
            Err(e) => {
                warn!("ignoring {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Parse config file contents on top of the defaults
    pub fn parse(contents: &str) -> Result<Self> {
        let table: Table = contents
            .parse()
            .map_err(|e: toml::de::Error| CatError::Config(e.message().to_string()))?;

        let mut options = Self::default();
        options.apply(&table)?;
        Ok(options)
    }

    /// Apply settings from a parsed config table
    fn apply(&mut self, table: &Table) -> Result<()> {
        for (key, value) in table {
            match key.as_str() {
                "line-numbers" => self.show_line_numbers = bool_value(key, value)?,
                "wrap" => self.wrap_text = bool_value(key, value)?,
                "ignore-blank" => self.ignore_blank_lines = bool_value(key, value)?,
                "ignore-whitespace" => self.ignore_whitespace_lines = bool_value(key, value)?,
                "ignore-lines" => {
                    let Value::Array(items) = value else {
                        return Err(type_error(key, "an array of strings"));
                    };
                    for item in items {
                        let Value::String(prefix) = item else {
                            return Err(type_error(key, "an array of strings"));
                        };
                        self.add_ignore_prefix(prefix);
                    }
                }
                "line-number-fg" => self.line_num_fore_color = color_value(key, value)?,
                "line-number-bg" => self.line_num_back_color = color_value(key, value)?,
                "default-fg" => self.default_fore_color = color_value(key, value)?,
                "default-bg" => self.default_back_color = color_value(key, value)?,
                _ => warn!("unknown config key: {}", key),
            }
        }
        Ok(())
    }

    /// Add a prefix to skip; empty prefixes would hide every line and are dropped
    pub fn add_ignore_prefix(&mut self, prefix: &str) {
        if prefix.is_empty() {
            warn!("ignoring empty ignore-lines prefix");
            return;
        }
        self.ignore_lines.push(prefix.to_string());
    }

    /// Width of the line-number column
    pub fn gutter_width(&self) -> usize {
        if self.show_line_numbers {
            3
        } else {
            0
        }
    }

    /// Style of the line-number column
    pub fn gutter_style(&self) -> Style {
        Style::new(self.line_num_fore_color, self.line_num_back_color)
    }

    /// Style written right after the line-number column
    pub fn content_style(&self) -> Style {
        Style::new(self.default_fore_color, self.default_back_color)
    }
}

fn type_error(key: &str, expected: &str) -> CatError {
    CatError::Config(format!("{} must be {}", key, expected))
}

fn bool_value(key: &str, value: &Value) -> Result<bool> {
    value.as_bool().ok_or_else(|| type_error(key, "true or false"))
}

fn color_value(key: &str, value: &Value) -> Result<Color> {
    let name = value.as_str().ok_or_else(|| type_error(key, "a color name"))?;
    Color::from_name(name)
        .ok_or_else(|| CatError::Config(format!("{}: unknown color '{}'", key, name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config() {
        let contents = r#"
# Comment
line-numbers = true
wrap = true
ignore-whitespace = true
ignore-lines = ["@echo off", "::"]
line-number-fg = "yellow"
default-bg = "DarkBlue"
        "#;

        let options = DisplayOptions::parse(contents).unwrap();
        assert!(options.show_line_numbers);
        assert!(options.wrap_text);
        assert!(options.ignore_whitespace_lines);
        assert!(!options.ignore_blank_lines);
        assert_eq!(options.ignore_lines, vec!["@echo off", "::"]);
        assert_eq!(options.line_num_fore_color, Color::Yellow);
        assert_eq!(options.line_num_back_color, Color::Black);
        assert_eq!(options.default_back_color, Color::DarkBlue);
    }

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(DisplayOptions::parse("").unwrap(), DisplayOptions::default());
    }

    #[test]
    fn test_unknown_key_is_ignored() {
        let options = DisplayOptions::parse("theme = \"solarized\"\nwrap = true").unwrap();
        assert!(options.wrap_text);
    }

    #[test]
    fn test_bad_values_are_errors() {
        assert!(matches!(
            DisplayOptions::parse("wrap = \"yes\""),
            Err(CatError::Config(_))
        ));
        assert!(matches!(
            DisplayOptions::parse("default-fg = \"chartreuse\""),
            Err(CatError::Config(_))
        ));
        assert!(matches!(
            DisplayOptions::parse("ignore-lines = [1, 2]"),
            Err(CatError::Config(_))
        ));
        assert!(matches!(
            DisplayOptions::parse("wrap = "),
            Err(CatError::Config(_))
        ));
    }

    #[test]
    fn test_empty_prefix_dropped() {
        let options = DisplayOptions::parse("ignore-lines = [\"\", \"rem\"]").unwrap();
        assert_eq!(options.ignore_lines, vec!["rem"]);
    }

    #[test]
    fn test_gutter() {
        let mut options = DisplayOptions::default();
        assert_eq!(options.gutter_width(), 0);
        options.show_line_numbers = true;
        assert_eq!(options.gutter_width(), 3);
        assert_eq!(options.gutter_style(), Style::new(Color::DarkGray, Color::Black));
        assert_eq!(options.content_style(), Style::new(Color::Gray, Color::Black));
    }
}
