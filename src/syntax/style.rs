//! Style types for text rendering
//!
//! Colors are the named 16-color console palette. Output never uses raw
//! RGB so the result looks the same on every color-capable terminal.

use crossterm::style::Color as TermColor;

/// Named console colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Color {
    /// Whatever the terminal was using before we touched it
    #[default]
    Reset,
    Black,
    DarkBlue,
    DarkGreen,
    DarkCyan,
    DarkRed,
    DarkMagenta,
    DarkYellow,
    Gray,
    DarkGray,
    Blue,
    Green,
    Cyan,
    Red,
    Magenta,
    Yellow,
    White,
}

impl Color {
    /// Parse a color from its name, ignoring case
    ///
    /// Accepts `grey` spellings as well as `gray`.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase().replace("grey", "gray");
        let color = match name.as_str() {
            "reset" | "default" => Color::Reset,
            "black" => Color::Black,
            "darkblue" => Color::DarkBlue,
            "darkgreen" => Color::DarkGreen,
            "darkcyan" => Color::DarkCyan,
            "darkred" => Color::DarkRed,
            "darkmagenta" => Color::DarkMagenta,
            "darkyellow" => Color::DarkYellow,
            "gray" => Color::Gray,
            "darkgray" => Color::DarkGray,
            "blue" => Color::Blue,
            "green" => Color::Green,
            "cyan" => Color::Cyan,
            "red" => Color::Red,
            "magenta" => Color::Magenta,
            "yellow" => Color::Yellow,
            "white" => Color::White,
            _ => return None,
        };
        Some(color)
    }
}

impl From<Color> for TermColor {
    fn from(color: Color) -> Self {
        match color {
            Color::Reset => TermColor::Reset,
            Color::Black => TermColor::Black,
            Color::DarkBlue => TermColor::DarkBlue,
            Color::DarkGreen => TermColor::DarkGreen,
            Color::DarkCyan => TermColor::DarkCyan,
            Color::DarkRed => TermColor::DarkRed,
            Color::DarkMagenta => TermColor::DarkMagenta,
            Color::DarkYellow => TermColor::DarkYellow,
            Color::Gray => TermColor::Grey,
            Color::DarkGray => TermColor::DarkGrey,
            Color::Blue => TermColor::Blue,
            Color::Green => TermColor::Green,
            Color::Cyan => TermColor::Cyan,
            Color::Red => TermColor::Red,
            Color::Magenta => TermColor::Magenta,
            Color::Yellow => TermColor::Yellow,
            Color::White => TermColor::White,
        }
    }
}

/// Foreground and background pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color
    pub fg: Color,
    /// Background color
    pub bg: Color,
}

impl Style {
    /// Create a style from both colors
    pub fn new(fg: Color, bg: Color) -> Self {
        Self { fg, bg }
    }

    /// Builder: set foreground color
    pub fn with_fg(mut self, color: Color) -> Self {
        self.fg = color;
        self
    }

    /// Builder: set background color
    pub fn with_bg(mut self, color: Color) -> Self {
        self.bg = color;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_default_is_reset() {
        let style = Style::default();
        assert_eq!(style.fg, Color::Reset);
        assert_eq!(style.bg, Color::Reset);
    }

    #[test]
    fn test_style_builders() {
        let style = Style::default().with_fg(Color::Cyan).with_bg(Color::Black);
        assert_eq!(style, Style::new(Color::Cyan, Color::Black));
        assert_ne!(style, Style::default());
    }

    #[test]
    fn test_color_from_name() {
        assert_eq!(Color::from_name("DarkGreen"), Some(Color::DarkGreen));
        assert_eq!(Color::from_name("darkgreen"), Some(Color::DarkGreen));
        assert_eq!(Color::from_name("Grey"), Some(Color::Gray));
        assert_eq!(Color::from_name("DarkGrey"), Some(Color::DarkGray));
        assert_eq!(Color::from_name(" cyan "), Some(Color::Cyan));
        assert_eq!(Color::from_name("chartreuse"), None);
        assert_eq!(Color::from_name(""), None);
    }

    #[test]
    fn test_named_palette_maps_to_terminal_colors() {
        assert_eq!(TermColor::from(Color::Gray), TermColor::Grey);
        assert_eq!(TermColor::from(Color::DarkCyan), TermColor::DarkCyan);
        assert_eq!(TermColor::from(Color::Reset), TermColor::Reset);
    }
}
