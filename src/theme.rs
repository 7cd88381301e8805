//! Colors for CLI output
//!
//! Styling goes through crossterm and is switched off entirely when stdout
//! is not a terminal or `NO_COLOR` is set.

use crossterm::style::{Attribute, Color, Stylize};

use crate::ansi::Category;

#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary text color (used for most content)
    pub text_primary: Color,
    /// Secondary/dimmed text color
    pub text_secondary: Color,
    /// Accent color for highlights and headings
    pub accent: Color,
    pub error: Color,
    pub success: Color,
    /// Whether any escape codes are emitted at all
    pub enabled: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            text_primary: Color::Grey,
            text_secondary: Color::DarkGrey,
            accent: Color::Green,
            error: Color::Red,
            success: Color::Green,
            enabled: true,
        }
    }
}

impl Theme {
    /// Same colors, no escape codes.
    pub fn plain() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    pub fn primary_text(&self, text: &str) -> String {
        self.paint(text, self.text_primary, false)
    }

    pub fn secondary_text(&self, text: &str) -> String {
        self.paint(text, self.text_secondary, false)
    }

    /// Accent color, bold (headings, labels).
    pub fn accent_bold_text(&self, text: &str) -> String {
        self.paint(text, self.accent, true)
    }

    pub fn error_text(&self, text: &str) -> String {
        self.paint(text, self.error, false)
    }

    pub fn success_text(&self, text: &str) -> String {
        self.paint(text, self.success, false)
    }

    /// Text colored by the kind of control sequence it describes.
    pub fn category_text(&self, text: &str, category: Category) -> String {
        self.paint(text, category_color(category), false)
    }

    fn paint(&self, text: &str, color: Color, bold: bool) -> String {
        if !self.enabled {
            return text.to_string();
        }
        let styled = text.with(color);
        if bold {
            styled.attribute(Attribute::Bold).to_string()
        } else {
            styled.to_string()
        }
    }
}

fn category_color(category: Category) -> Color {
    match category {
        Category::Cursor | Category::Scroll | Category::Tab => Color::Cyan,
        Category::Erase | Category::Edit => Color::Yellow,
        Category::Rendition => Color::Magenta,
        Category::Osc => Color::Blue,
        Category::Unknown => Color::Red,
        _ => Color::DarkGrey,
    }
}

/// Theme for stdout: colored only on a terminal without `NO_COLOR`.
pub fn current_theme() -> Theme {
    let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    if no_color || !atty::is(atty::Stream::Stdout) {
        Theme::plain()
    } else {
        Theme::default()
    }
}
