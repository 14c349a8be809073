use crate::editor::{grid, Color};
use crate::tui::theme::{Theme, NAMES};
use anyhow::Context;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

pub mod defaults;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: ThemeConfig,
    pub canvas: CanvasConfig,
    pub editor: EditorConfig,
    pub input: InputConfig,
    pub export: ExportConfig,
    pub paths: PathsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Chrome theme: `mono` or `paper`.
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasConfig {
    /// Cells per side, 6..=64.
    pub grid_size: usize,
    /// Canvas side in pixels; one cell is `extent / grid_size` pixels.
    pub extent: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Active color at startup.
    pub active_color: Color,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub mouse: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    pub dir: PathBuf,
    /// Also write a PNG upscaled to the canvas extent.
    pub scaled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub data_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        defaults::defaults()
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: defaults::THEME.to_string(),
        }
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            grid_size: defaults::GRID_SIZE,
            extent: defaults::CANVAS_EXTENT,
        }
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            active_color: defaults::ACTIVE_COLOR,
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self { mouse: true }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            dir: defaults::data_dir().join("exports"),
            scaled: true,
        }
    }
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            data_dir: defaults::data_dir(),
        }
    }
}

impl Config {
    /// Replace out-of-range values with defaults. Call once logging is up.
    pub fn sanitize(&mut self) {
        if Theme::from_name(&self.theme.name).is_none() {
            warn!(
                "config theme.name: unknown theme {:?} (expected one of {}); using {}",
                self.theme.name,
                NAMES.join(", "),
                defaults::THEME
            );
            self.theme.name = defaults::THEME.to_string();
        }
        if let Err(e) = grid::validate_size(self.canvas.grid_size) {
            warn!("config canvas.grid_size: {e}; using {}", defaults::GRID_SIZE);
            self.canvas.grid_size = defaults::GRID_SIZE;
        }
        if self.canvas.extent == 0 {
            warn!("config canvas.extent must be positive; using {}", defaults::CANVAS_EXTENT);
            self.canvas.extent = defaults::CANVAS_EXTENT;
        }
    }
}

pub fn save(cfg: &Config, override_path: Option<&Path>) -> anyhow::Result<()> {
    let path = match override_path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };
    write_config(cfg, &path)
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    let proj = ProjectDirs::from("dev", "tinypix", "tinypix").context("ProjectDirs unavailable")?;
    Ok(proj.config_dir().join("config.toml"))
}

pub fn load(override_path: Option<&Path>) -> anyhow::Result<Config> {
    let path = match override_path {
        Some(p) => p.to_path_buf(),
        None => default_config_path()?,
    };

    if !path.exists() {
        let cfg = defaults::defaults();
        write_config(&cfg, &path).context("write default config")?;
        return Ok(cfg);
    }

    let raw = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let cfg = toml::from_str::<Config>(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

fn write_config(cfg: &Config, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("create dir {}", parent.display()))?;
    }
    let raw = toml::to_string_pretty(cfg).context("serialize config")?;
    fs::write(path, raw).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
