use super::{CanvasConfig, Config, EditorConfig, ExportConfig, InputConfig, PathsConfig, ThemeConfig};
use crate::editor::Color;
use directories::ProjectDirs;
use std::path::PathBuf;

pub const THEME: &str = "mono";
pub const GRID_SIZE: usize = 24;
pub const CANVAS_EXTENT: u32 = 480;
pub const ACTIVE_COLOR: Color = Color::BLACK;

pub fn data_dir() -> PathBuf {
    ProjectDirs::from("dev", "tinypix", "tinypix")
        .map(|p| p.data_dir().to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join("tinypix"))
}

pub fn defaults() -> Config {
    Config {
        theme: ThemeConfig::default(),
        canvas: CanvasConfig::default(),
        editor: EditorConfig::default(),
        input: InputConfig::default(),
        export: ExportConfig::default(),
        paths: PathsConfig::default(),
    }
}
