//! Chrome theme around the canvas, picked by `[theme] name` in the config

pub mod icons;
pub mod palette;

pub use icons::Icons;
pub use palette::Chrome;

/// Names accepted by `[theme] name`.
pub const NAMES: &[&str] = &["mono", "paper"];

#[derive(Debug, Clone)]
pub struct Theme {
    pub chrome: Chrome,
    pub icons: Icons,
}

impl Theme {
    pub fn new(chrome: Chrome) -> Self {
        Self {
            chrome,
            icons: Icons::nerd(),
        }
    }

    /// Theme for a config name, case-insensitive. `None` for unknown names.
    pub fn from_name(name: &str) -> Option<Self> {
        let chrome = match name.trim().to_ascii_lowercase().as_str() {
            "mono" => Chrome::MONO,
            "paper" => Chrome::PAPER,
            _ => return None,
        };
        Some(Self::new(chrome))
    }

    pub fn border_set(&self) -> ratatui::symbols::border::Set<'static> {
        ratatui::symbols::border::ROUNDED
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(Chrome::MONO)
    }
}
