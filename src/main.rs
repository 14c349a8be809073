mod app;
mod config;
mod editor;
mod export;
mod input;
mod tui;

use anyhow::Context;
use clap::{Parser, Subcommand};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "tinypix", version, about = "Pixel-art editor for the terminal")]
struct Cli {
    /// Override config file path.
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    /// Start with this many cells per side (6-64) instead of the configured size.
    #[arg(long)]
    size: Option<usize>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the interactive editor (default).
    Tui,

    /// Inspect or change the config file.
    Config {
        #[command(subcommand)]
        cmd: ConfigCommand,
    },
}

#[derive(Debug, Subcommand)]
enum ConfigCommand {
    /// Print the config file path.
    Path,
    /// Print the current config.
    Show,
    /// Set the default grid size (6-64).
    GridSize { size: usize },
    /// Set the starting active color (hex, e.g. "#ff8800").
    Color { color: String },
    /// Set the chrome theme (mono, paper).
    Theme { name: String },
    /// Set the export directory.
    ExportDir { path: std::path::PathBuf },
    /// Restore every setting to its default.
    Reset,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut cfg = config::load(cli.config.as_deref()).context("load config")?;
    init_logging(&cfg).context("init logging")?;
    cfg.sanitize();

    match cli.command.unwrap_or(Command::Tui) {
        Command::Tui => {
            let mut app = app::App::new(cfg.clone(), cli.size).context("start editor")?;
            let mut terminal = tui::TerminalGuard::enter(cfg.input.mouse).context("init terminal")?;
            app.run(terminal.terminal_mut()).await?;
        }
        Command::Config { cmd } => {
            match cmd {
                ConfigCommand::Path => {
                    let path = match cli.config.clone() {
                        Some(p) => p,
                        None => config::default_config_path().context("default config path")?,
                    };
                    println!("{}", path.display());
                    return Ok(());
                }
                ConfigCommand::Show => {
                    print!("{}", toml::to_string_pretty(&cfg).context("serialize config")?);
                    return Ok(());
                }
                ConfigCommand::GridSize { size } => {
                    editor::grid::validate_size(size)?;
                    cfg.canvas.grid_size = size;
                }
                ConfigCommand::Color { color } => {
                    cfg.editor.active_color = color.parse()?;
                }
                ConfigCommand::Theme { name } => {
                    if tui::theme::Theme::from_name(&name).is_none() {
                        anyhow::bail!(
                            "unknown theme {name:?}; expected one of {}",
                            tui::theme::NAMES.join(", ")
                        );
                    }
                    cfg.theme.name = name.trim().to_ascii_lowercase();
                }
                ConfigCommand::ExportDir { path } => {
                    cfg.export.dir = path;
                }
                ConfigCommand::Reset => {
                    cfg = config::defaults::defaults();
                }
            }
            config::save(&cfg, cli.config.as_deref()).context("save config")?;
            println!("Updated config.");
        }
    }

    Ok(())
}

/// Log to a file in the data dir; the terminal belongs to the editor.
fn init_logging(cfg: &config::Config) -> anyhow::Result<()> {
    let dir = &cfg.paths.data_dir;
    std::fs::create_dir_all(dir).with_context(|| format!("create dir {}", dir.display()))?;
    let path = dir.join("tinypix.log");
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("open {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .init();
    Ok(())
}
