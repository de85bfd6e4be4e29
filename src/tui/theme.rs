//! Colours shared by the selection screen and CLI output.
//!
//! ratatui styles for the screen, ANSI-wrapped strings for plain terminal
//! output. With `NO_COLOR` set the monochrome palette is used and the ANSI
//! helpers return their input untouched.

use ratatui::style::{Color, Modifier, Style};

use crate::render::highlight::TokenClass;

#[derive(Debug, Clone)]
pub struct Theme {
    /// Entry keys, details and preview punctuation
    pub text_primary: Color,
    /// Borders, hints, summaries
    pub text_secondary: Color,
    /// Checked boxes, keybindings, copy indicator
    pub accent: Color,
    pub error: Color,
    pub success: Color,
    pub background: Color,
    pub json_key: Color,
    pub json_string: Color,
    pub json_number: Color,
    /// `true`, `false` and `null`
    pub json_literal: Color,
    /// Emit escape codes from the `*_text` helpers.
    pub ansi: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self::standard()
    }
}

impl Theme {
    /// Gray on the terminal background with green highlights.
    pub fn standard() -> Self {
        Self {
            text_primary: Color::Gray,
            text_secondary: Color::DarkGray,
            accent: Color::Green,
            error: Color::Red,
            success: Color::Green,
            background: Color::Reset,
            json_key: Color::Cyan,
            json_string: Color::Green,
            json_number: Color::Yellow,
            json_literal: Color::Magenta,
            ansi: true,
        }
    }

    /// Every slot set to the terminal default.
    pub fn monochrome() -> Self {
        Self {
            text_primary: Color::Reset,
            text_secondary: Color::Reset,
            accent: Color::Reset,
            error: Color::Reset,
            success: Color::Reset,
            background: Color::Reset,
            json_key: Color::Reset,
            json_string: Color::Reset,
            json_number: Color::Reset,
            json_literal: Color::Reset,
            ansi: false,
        }
    }

    fn fg(color: Color) -> Style {
        Style::default().fg(color)
    }

    pub fn text_style(&self) -> Style {
        Self::fg(self.text_primary)
    }

    pub fn text_secondary_style(&self) -> Style {
        Self::fg(self.text_secondary)
    }

    pub fn accent_style(&self) -> Style {
        Self::fg(self.accent)
    }

    /// Entry headers in the details box.
    pub fn accent_bold_style(&self) -> Style {
        self.accent_style().add_modifier(Modifier::BOLD)
    }

    pub fn error_style(&self) -> Style {
        Self::fg(self.error)
    }

    pub fn success_style(&self) -> Style {
        Self::fg(self.success)
    }

    /// Row under the cursor in the entry list.
    pub fn cursor_style(&self) -> Style {
        Style::default().add_modifier(Modifier::REVERSED)
    }

    /// Colour of one JSON token in the preview.
    pub fn token_style(&self, class: TokenClass) -> Style {
        Self::fg(match class {
            TokenClass::Key => self.json_key,
            TokenClass::String => self.json_string,
            TokenClass::Number => self.json_number,
            TokenClass::Boolean | TokenClass::Null => self.json_literal,
            TokenClass::Plain => self.text_primary,
        })
    }

    fn paint(&self, color: Color, text: &str) -> String {
        if !self.ansi {
            return text.to_string();
        }
        format!("{}{}{}", ansi_code(color), text, ANSI_RESET)
    }

    pub fn accent_text(&self, text: &str) -> String {
        self.paint(self.accent, text)
    }

    pub fn primary_text(&self, text: &str) -> String {
        self.paint(self.text_primary, text)
    }

    pub fn secondary_text(&self, text: &str) -> String {
        self.paint(self.text_secondary, text)
    }

    /// Used for the `error:` prefix in `main`.
    pub fn error_text(&self, text: &str) -> String {
        self.paint(self.error, text)
    }

    pub fn success_text(&self, text: &str) -> String {
        self.paint(self.success, text)
    }
}

const ANSI_RESET: &str = "\x1b[0m";

/// Foreground escape sequence for the 16 named colours.
fn ansi_code(color: Color) -> &'static str {
    match color {
        Color::Black => "\x1b[30m",
        Color::Red => "\x1b[31m",
        Color::Green => "\x1b[32m",
        Color::Yellow => "\x1b[33m",
        Color::Blue => "\x1b[34m",
        Color::Magenta => "\x1b[35m",
        Color::Cyan => "\x1b[36m",
        Color::Gray => "\x1b[37m",
        Color::DarkGray => "\x1b[90m",
        Color::White => "\x1b[97m",
        Color::Reset => ANSI_RESET,
        // neither palette uses RGB or indexed colours
        _ => "",
    }
}

/// Palette for this process: monochrome when `NO_COLOR` is non-empty.
pub fn current_theme() -> Theme {
    match std::env::var_os("NO_COLOR") {
        Some(value) if !value.is_empty() => Theme::monochrome(),
        _ => Theme::standard(),
    }
}
