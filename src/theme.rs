//! Theme configuration for the player and CLI
//!
//! Centralizes all color and style definitions for easy customization.
//! Provides both ratatui styles (for the player) and ANSI escape codes (for CLI).

use ratatui::style::{Color, Modifier, Style};
use tracing::warn;

use crate::config::Config;

/// Theme configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Primary text color (used for most content)
    pub text_primary: Color,
    /// Secondary/dimmed text color
    pub text_secondary: Color,
    /// Accent color for keys, the playhead and the played part of the track
    pub accent: Color,
    /// Background of the active chapter entry and segment
    pub highlight: Color,
    /// Timeline marker color
    pub marker: Color,
    /// Alternating segment colors
    pub segment_even: Color,
    pub segment_odd: Color,
    /// Error/warning color
    pub error: Color,
    /// Success color
    pub success: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::standard()
    }
}

impl Theme {
    /// Default theme - light gray text, green accent, yellow markers.
    /// Uses standard ANSI colors for consistent terminal rendering.
    pub fn standard() -> Self {
        Self {
            text_primary: Color::Gray,
            text_secondary: Color::DarkGray,
            accent: Color::Green,
            highlight: Color::Green,
            marker: Color::Yellow,
            segment_even: Color::Blue,
            segment_odd: Color::Cyan,
            error: Color::Red,
            success: Color::Green,
        }
    }

    /// Classic terminal theme - white text.
    pub fn classic() -> Self {
        Self {
            text_primary: Color::White,
            text_secondary: Color::DarkGray,
            accent: Color::Yellow,
            highlight: Color::Yellow,
            marker: Color::White,
            segment_even: Color::DarkGray,
            segment_odd: Color::Gray,
            error: Color::Red,
            success: Color::Green,
        }
    }

    /// Cyan/blue theme.
    pub fn ocean() -> Self {
        Self {
            text_primary: Color::Cyan,
            text_secondary: Color::DarkGray,
            accent: Color::LightCyan,
            highlight: Color::LightBlue,
            marker: Color::LightYellow,
            segment_even: Color::Blue,
            segment_odd: Color::LightBlue,
            error: Color::Red,
            success: Color::Green,
        }
    }

    /// Look up a theme by its config name.
    pub fn by_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "default" | "standard" => Some(Self::standard()),
            "classic" => Some(Self::classic()),
            "ocean" => Some(Self::ocean()),
            _ => None,
        }
    }

    // Style helpers

    /// Style for primary text content.
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    /// Style for secondary/dimmed text.
    pub fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Style for accented text.
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Style for bold accented text (keybindings, etc).
    pub fn accent_bold_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for the active chapter entry and segment.
    pub fn highlight_style(&self) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(self.highlight)
            .add_modifier(Modifier::BOLD)
    }

    /// Style for a timeline marker.
    pub fn marker_style(&self, active: bool) -> Style {
        if active {
            Style::default()
                .fg(self.highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(self.marker)
        }
    }

    /// Style for an inactive segment.
    pub fn segment_style(&self, index: usize) -> Style {
        let color = if index % 2 == 0 {
            self.segment_even
        } else {
            self.segment_odd
        };
        Style::default().fg(color)
    }

    // ANSI color helpers for CLI output

    /// Format text with the accent color (for CLI output).
    pub fn accent_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.accent), text, ANSI_RESET)
    }

    /// Format text with the primary color (for CLI output).
    pub fn primary_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.text_primary), text, ANSI_RESET)
    }

    /// Format text with the secondary color (for CLI output).
    pub fn secondary_text(&self, text: &str) -> String {
        format!(
            "{}{}{}",
            color_to_ansi(self.text_secondary),
            text,
            ANSI_RESET
        )
    }

    /// Format text with the error color (for CLI output).
    pub fn error_text(&self, text: &str) -> String {
        format!("{}{}{}", color_to_ansi(self.error), text, ANSI_RESET)
    }
}

/// Theme selected in the configuration, or the default for unknown names.
pub fn current_theme(config: &Config) -> Theme {
    Theme::by_name(&config.ui.theme).unwrap_or_else(|| {
        warn!(theme = %config.ui.theme, "unknown theme, using default");
        Theme::default()
    })
}

/// ANSI reset sequence
const ANSI_RESET: &str = "\x1b[0m";

/// Convert a ratatui Color to an ANSI escape code.
fn color_to_ansi(color: Color) -> &'static str {
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
        Color::LightRed => "\x1b[91m",
        Color::LightGreen => "\x1b[92m",
        Color::LightYellow => "\x1b[93m",
        Color::LightBlue => "\x1b[94m",
        Color::LightMagenta => "\x1b[95m",
        Color::LightCyan => "\x1b[96m",
        Color::White => "\x1b[97m",
        Color::Reset => "\x1b[0m",
        // For RGB and indexed colors, fall back to reset (no color)
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn current_theme_follows_config() {
        let mut config = Config::default();
        config.ui.theme = "ocean".to_string();
        assert_eq!(current_theme(&config), Theme::ocean());

        config.ui.theme = "neon".to_string();
        assert_eq!(current_theme(&config), Theme::default());
    }

    #[test]
    fn default_theme_is_standard() {
        let theme = Theme::default();
        assert_eq!(theme.text_primary, Color::Gray);
        assert_eq!(theme.accent, Color::Green);
    }

    #[test]
    fn themes_by_name() {
        assert_eq!(Theme::by_name("default"), Some(Theme::standard()));
        assert_eq!(Theme::by_name("Classic"), Some(Theme::classic()));
        assert_eq!(Theme::by_name(" ocean "), Some(Theme::ocean()));
        assert_eq!(Theme::by_name("neon"), None);
    }

    #[test]
    fn segment_styles_alternate() {
        let theme = Theme::standard();
        assert_eq!(theme.segment_style(0).fg, Some(Color::Blue));
        assert_eq!(theme.segment_style(1).fg, Some(Color::Cyan));
        assert_eq!(theme.segment_style(2).fg, Some(Color::Blue));
    }

    #[test]
    fn active_marker_uses_highlight() {
        let theme = Theme::ocean();
        assert_eq!(theme.marker_style(true).fg, Some(Color::LightBlue));
        assert_eq!(theme.marker_style(false).fg, Some(Color::LightYellow));
    }

    #[test]
    fn ansi_text_helpers_wrap_with_color_codes() {
        let theme = Theme::standard();

        let accent = theme.accent_text("test");
        assert!(accent.starts_with("\x1b[32m")); // Green
        assert!(accent.ends_with("\x1b[0m")); // Reset
        assert!(accent.contains("test"));

        let primary = theme.primary_text("hello");
        assert!(primary.starts_with("\x1b[37m")); // Gray
        assert!(primary.ends_with("\x1b[0m"));
    }

    #[test]
    fn color_to_ansi_maps_standard_colors() {
        assert_eq!(color_to_ansi(Color::Green), "\x1b[32m");
        assert_eq!(color_to_ansi(Color::Red), "\x1b[31m");
        assert_eq!(color_to_ansi(Color::DarkGray), "\x1b[90m");
        assert_eq!(color_to_ansi(Color::Rgb(1, 2, 3)), "");
    }
}
