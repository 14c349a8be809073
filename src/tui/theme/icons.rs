//! Nerd Font icons for TUI display
//! Requires a Nerd Font to be installed (https://www.nerdfonts.com)

use crate::editor::Mode;

/// Icon set using Nerd Font glyphs
#[derive(Debug, Clone)]
pub struct Icons {
    // Tools
    pub draw: &'static str,
    pub sample: &'static str,
    pub fill: &'static str,

    // Panels
    pub canvas: &'static str,
    pub palette: &'static str,
    pub help: &'static str,

    // Status
    pub success: &'static str,
    pub error: &'static str,
    pub loading: &'static str,
    pub cursor: &'static str,
    pub hold: &'static str,

    // Selection
    pub selected: &'static str,
    pub unselected: &'static str,

    // Swatches
    pub swatch: &'static str,
}

impl Icons {
    /// Nerd Font icon set
    pub const fn nerd() -> Self {
        Self {
            // Tools - nf-fa-*
            draw: "\u{f040}",           // nf-fa-pencil
            sample: "\u{f1fb}",         // nf-fa-eyedropper
            fill: "\u{f576}",           // nf-fa-fill_drip

            // Panels
            canvas: "\u{f00a}",         // nf-fa-th
            palette: "\u{f53f}",        // nf-fa-palette
            help: "\u{f059}",           // nf-fa-question_circle

            // Status
            success: "\u{f00c}",        // nf-fa-check
            error: "\u{f00d}",          // nf-fa-times
            loading: "\u{f110}",        // nf-fa-spinner
            cursor: "\u{f245}",         // nf-fa-mouse_pointer
            hold: "\u{f256}",           // nf-fa-hand_paper_o

            // Selection
            selected: "\u{f054}",       // nf-fa-chevron_right
            unselected: " ",

            swatch: "██",
        }
    }

    pub fn mode(&self, mode: Mode) -> &'static str {
        match mode {
            Mode::Draw => self.draw,
            Mode::Sample => self.sample,
            Mode::Fill => self.fill,
        }
    }
}

impl Default for Icons {
    fn default() -> Self {
        Self::nerd()
    }
}
