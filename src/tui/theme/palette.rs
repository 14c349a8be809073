//! Chrome colors for borders, text and highlights. The canvas keeps its own
//! colors; the chrome stays neutral around it.

use ratatui::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chrome {
    pub bg: Color,
    pub fg: Color,
    pub fg_muted: Color,
    pub accent: Color,
    pub accent_alt: Color,
    pub border: Color,
    pub error: Color,
}

impl Chrome {
    /// Grays on black.
    pub const MONO: Self = Self {
        bg: Color::Rgb(0, 0, 0),
        fg: Color::Rgb(255, 255, 255),
        fg_muted: Color::Rgb(136, 136, 136),
        accent: Color::Rgb(255, 255, 255),
        accent_alt: Color::Rgb(200, 200, 200),
        border: Color::Rgb(64, 64, 64),
        error: Color::Rgb(255, 255, 255),
    };

    /// Dark ink on a light mid-gray, so both black and white pixels read
    /// against the frame.
    pub const PAPER: Self = Self {
        bg: Color::Rgb(214, 210, 200),
        fg: Color::Rgb(32, 30, 28),
        fg_muted: Color::Rgb(96, 92, 86),
        accent: Color::Rgb(24, 64, 140),
        accent_alt: Color::Rgb(120, 60, 20),
        border: Color::Rgb(150, 146, 138),
        error: Color::Rgb(170, 30, 30),
    };
}

impl Default for Chrome {
    fn default() -> Self {
        Self::MONO
    }
}
