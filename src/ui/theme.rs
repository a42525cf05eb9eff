//! Theme color definitions for the UI
//!
//! Provides dark and light color palettes that can be switched at runtime.

use crate::config::Theme;
use ratatui::style::Color;

/// Complete color palette for the UI
#[derive(Debug, Clone, Copy)]
pub struct ThemeColors {
    /// Main background
    pub bg: Color,
    /// Primary foreground text
    pub fg: Color,
    /// Dimmed/secondary text
    pub dim: Color,
    /// Accent color (headings, active tab)
    pub accent: Color,
    /// Success / decoder-listening status
    pub ok: Color,
    /// Warning / gated status
    pub warn: Color,
    /// Error / disabled status
    pub err: Color,
    /// Scanning-pulse highlight
    pub pulse: Color,
    /// Notes field background when focused
    pub field_focus: Color,
}

impl ThemeColors {
    /// Create a color palette for the given theme variant
    pub fn from_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self::dark(),
            Theme::Light => Self::light(),
        }
    }

    /// Dark theme - default color scheme
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb(22, 22, 30),
            fg: Color::Rgb(200, 200, 210),
            dim: Color::Rgb(90, 90, 110),
            accent: Color::Rgb(80, 200, 220),
            ok: Color::Rgb(80, 200, 120),
            warn: Color::Rgb(240, 180, 80),
            err: Color::Rgb(240, 90, 100),
            pulse: Color::Rgb(120, 230, 160),
            field_focus: Color::Rgb(40, 40, 55),
        }
    }

    /// Light theme - high contrast for bright terminals
    pub fn light() -> Self {
        Self {
            bg: Color::Rgb(245, 245, 248),
            fg: Color::Rgb(30, 30, 40),
            dim: Color::Rgb(130, 130, 150),
            accent: Color::Rgb(0, 130, 160),
            ok: Color::Rgb(30, 150, 70),
            warn: Color::Rgb(180, 120, 0),
            err: Color::Rgb(200, 50, 60),
            pulse: Color::Rgb(20, 170, 90),
            field_focus: Color::Rgb(225, 225, 235),
        }
    }
}
