pub mod actions;
pub mod events;
pub mod state;

use crate::config::Config;
use crate::editor::{grid, EditorSession, ToolEffect};
use crate::export;
use crate::input;
use crate::tui::theme::Theme;
use crate::tui::{self, TuiTerminal};
use actions::Action;
use events::{Event, ExportEvent};
use state::{AppState, Screen, Toast};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

pub struct App {
    cfg: Config,
    state: AppState,
}

impl App {
    pub fn new(cfg: Config, grid_size: Option<usize>) -> anyhow::Result<Self> {
        let size = match grid_size {
            Some(n) => {
                grid::validate_size(n)?;
                n
            }
            None => cfg.canvas.grid_size,
        };
        let session = EditorSession::new(size, cfg.canvas.extent, cfg.editor.active_color)?;
        info!(size, extent = cfg.canvas.extent, theme = %cfg.theme.name, "editor session started");

        let mut state = AppState::new(session);
        state.theme = Theme::from_name(&cfg.theme.name).unwrap_or_default();
        Ok(Self { cfg, state })
    }

    pub async fn run(&mut self, terminal: &mut TuiTerminal) -> anyhow::Result<()> {
        let (tx, mut rx) = mpsc::channel::<Event>(256);

        input::spawn_input_task(tx.clone());

        // First draw
        tui::draw(terminal, &mut self.state)?;

        while let Some(ev) = rx.recv().await {
            match ev {
                Event::Input(input_ev) => {
                    if let Some(action) = input::sync_override(&self.state, &input_ev) {
                        self.handle_action(action, &tx);
                    }
                    if let Some(action) = input::map_input_to_action(&self.state, input_ev) {
                        self.handle_action(action, &tx);
                    }
                }
                Event::Export(ev) => self.handle_export(ev),
            }

            if self.state.should_quit {
                break;
            }

            tui::draw(terminal, &mut self.state)?;
        }

        Ok(())
    }

    fn handle_action(&mut self, action: Action, tx: &mpsc::Sender<Event>) {
        debug!(?action, "action");
        match action {
            Action::Export => self.spawn_export(tx),
            other => reduce(&mut self.state, other),
        }
    }

    fn spawn_export(&mut self, tx: &mpsc::Sender<Event>) {
        if self.state.exporting {
            return;
        }
        self.state.exporting = true;
        self.state.status = "Exporting...".to_string();

        let grid = self.state.session.grid().clone();
        let dir = self.cfg.export.dir.clone();
        let scale = self.cfg.export.scaled.then(|| self.state.session.cell_extent());
        let tx = tx.clone();
        tokio::task::spawn_blocking(move || {
            let stem = export::timestamped_stem();
            let ev = match export::export_all(&grid, &dir, &stem, scale) {
                Ok(paths) => ExportEvent::Saved(paths),
                Err(e) => ExportEvent::Failed(format!("{e:#}")),
            };
            let _ = tx.blocking_send(Event::Export(ev));
        });
    }

    fn handle_export(&mut self, ev: ExportEvent) {
        self.state.exporting = false;
        self.state.status.clear();
        match ev {
            ExportEvent::Saved(paths) => {
                info!(
                    png = %paths.png.display(),
                    svg = %paths.svg.display(),
                    scaled = paths.scaled_png.is_some(),
                    "exported"
                );
                self.state.toast = Some(Toast::success(format!("Saved {}", paths.png.display())));
            }
            ExportEvent::Failed(e) => {
                warn!("export failed: {e}");
                self.state.toast = Some(Toast::error(format!("Export failed: {e}")));
            }
        }
    }
}

/// Apply an action to the state. Everything here is synchronous.
pub fn reduce(state: &mut AppState, action: Action) {
    match action {
        Action::Quit => state.should_quit = true,
        Action::SetScreen(screen) => state.screen = screen,
        Action::ToggleHelp => {
            state.screen = match state.screen {
                Screen::Help => Screen::Canvas,
                Screen::Canvas => Screen::Help,
            };
        }

        Action::CycleMode => {
            state.session.cycle_mode();
        }
        Action::BeginOverride => {
            state.session.begin_override();
        }
        Action::EndOverride => {
            state.session.end_override();
        }
        Action::PrimaryAt { x, y } => {
            state.dragging = true;
            state.cursor = (x, y);
            let effect = state.session.primary_action(x, y);
            after_tool(state, effect);
        }
        Action::ContinuousAt { x, y } => {
            state.cursor = (x, y);
            let effect = state.session.continuous_action(x, y);
            after_tool(state, effect);
        }
        Action::ReleasePointer => state.dragging = false,

        Action::CursorMove { dx, dy } => state.move_cursor(dx, dy),
        Action::PrimaryAtCursor => {
            let (x, y) = state.cursor;
            let effect = state.session.primary_action(x, y);
            after_tool(state, effect);
        }
        Action::PaintMove { dx, dy } => {
            state.move_cursor(dx, dy);
            let (x, y) = state.cursor;
            let effect = state.session.continuous_action(x, y);
            after_tool(state, effect);
        }

        Action::ClearGrid => {
            state.session.clear();
            state.toast = Some(Toast::success("Canvas cleared"));
        }
        Action::GrowGrid => resize_by(state, 1),
        Action::ShrinkGrid => resize_by(state, -1),

        Action::PaletteUp => {
            state.palette_selected = state.palette_selected.saturating_sub(1);
        }
        Action::PaletteDown => {
            let last = crate::editor::palette::CAPACITY - 1;
            state.palette_selected = (state.palette_selected + 1).min(last);
        }
        Action::ApplySwatch => {
            let index = state.palette_selected;
            state.session.select_swatch(index);
        }
        Action::ResetPalette => {
            state.session.reset_palette();
            state.palette_selected = 0;
            state.toast = Some(Toast::success("Recent colors reset"));
        }
        Action::SelectSwatch(index) => {
            if state.session.select_swatch(index).is_some() {
                state.palette_selected = index;
            }
        }

        Action::StartHexInput => {
            state.size_input = None;
            state.hex_input = Some(state.session.active_color().to_string());
        }
        Action::StartSizeInput => {
            state.hex_input = None;
            state.size_input = Some(state.grid_size().to_string());
        }
        Action::InputChar(c) => {
            if let Some(buf) = state.hex_input.as_mut()
                && buf.len() < 7
            {
                buf.push(c);
            } else if let Some(buf) = state.size_input.as_mut()
                && buf.len() < 2
            {
                buf.push(c);
            }
        }
        Action::Backspace => {
            if let Some(buf) = state.hex_input.as_mut().or(state.size_input.as_mut()) {
                buf.pop();
            }
        }
        Action::CommitHex => {
            let Some(buf) = state.hex_input.take() else {
                return;
            };
            match buf.parse() {
                Ok(color) => {
                    state.session.set_active_color(color);
                }
                Err(e) => {
                    warn!("rejected hex input: {e}");
                    state.toast = Some(Toast::error(e.to_string()));
                }
            }
        }
        Action::CommitSize => {
            let Some(buf) = state.size_input.take() else {
                return;
            };
            match buf.parse::<usize>() {
                Ok(size) => resize_to(state, size),
                Err(_) => {
                    warn!("rejected size input: {buf:?}");
                    state.toast = Some(Toast::error(format!(
                        "grid size must be a number between {} and {}",
                        grid::SIZE_RANGE.start(),
                        grid::SIZE_RANGE.end()
                    )));
                }
            }
        }
        Action::CancelInput => {
            state.hex_input = None;
            state.size_input = None;
        }

        // Needs the event channel; handled by App.
        Action::Export => {}

        Action::Resize => {}
    }
}

fn after_tool(state: &mut AppState, effect: ToolEffect) {
    if effect.is_noop() {
        return;
    }
    // A sample replaces whatever was typed in the hex field.
    if effect.active_color_changed && state.hex_input.is_some() {
        state.hex_input = Some(state.session.active_color().to_string());
    }
}

fn resize_by(state: &mut AppState, delta: isize) {
    if let Some(size) = state.grid_size().checked_add_signed(delta) {
        resize_to(state, size);
    }
}

/// Resize and clear. Out-of-range sizes only raise an error toast.
fn resize_to(state: &mut AppState, size: usize) {
    match state.session.resize(size) {
        Ok(_) => {
            state.clamp_cursor();
            state.toast = Some(Toast::success(format!("Grid {size}x{size}")));
        }
        Err(e) => state.toast = Some(Toast::error(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::editor::{Color, Mode};

    const RED: Color = Color::rgb(255, 0, 0);

    fn state() -> AppState {
        AppState::new(EditorSession::new(8, 480, RED).unwrap())
    }

    #[test]
    fn test_click_then_drag_paints() {
        let mut s = state();
        reduce(&mut s, Action::PrimaryAt { x: 1, y: 1 });
        assert!(s.dragging);
        reduce(&mut s, Action::ContinuousAt { x: 2, y: 1 });
        reduce(&mut s, Action::ReleasePointer);
        assert!(!s.dragging);

        let grid = s.session.grid();
        assert_eq!(grid.get(1, 1).unwrap(), RED);
        assert_eq!(grid.get(2, 1).unwrap(), RED);
        assert_eq!(s.cursor, (2, 1));
    }

    #[test]
    fn test_keyboard_paint_move() {
        let mut s = state();
        reduce(&mut s, Action::CycleMode);
        reduce(&mut s, Action::PaintMove { dx: 1, dy: 0 });
        reduce(&mut s, Action::PaintMove { dx: 0, dy: 1 });
        assert_eq!(s.cursor, (1, 1));
        assert_eq!(s.session.grid().get(1, 0).unwrap(), RED);
        assert_eq!(s.session.grid().get(1, 1).unwrap(), RED);
        assert_eq!(s.session.grid().get(0, 0).unwrap(), Color::WHITE);
    }

    #[test]
    fn test_fill_at_cursor() {
        let mut s = state();
        reduce(&mut s, Action::CycleMode);
        reduce(&mut s, Action::CycleMode);
        assert_eq!(s.mode(), Mode::Fill);
        reduce(&mut s, Action::PrimaryAtCursor);
        assert!(s.session.grid().iter().all(|(_, _, c)| c == RED));
    }

    #[test]
    fn test_grow_and_shrink_respect_range() {
        let mut s = AppState::new(EditorSession::new(64, 480, RED).unwrap());
        reduce(&mut s, Action::PrimaryAt { x: 0, y: 0 });
        reduce(&mut s, Action::GrowGrid);
        assert_eq!(s.grid_size(), 64);
        assert_eq!(s.session.grid().get(0, 0).unwrap(), RED);

        reduce(&mut s, Action::ShrinkGrid);
        assert_eq!(s.grid_size(), 63);
        assert_eq!(s.session.grid().get(0, 0).unwrap(), Color::WHITE);

        let mut s = AppState::new(EditorSession::new(6, 480, RED).unwrap());
        reduce(&mut s, Action::ShrinkGrid);
        assert_eq!(s.grid_size(), 6);
        assert!(matches!(s.toast.as_ref().map(|t| t.kind), Some(state::ToastKind::Error)));
    }

    #[test]
    fn test_hex_entry_commit_and_reject() {
        let mut s = state();
        reduce(&mut s, Action::StartHexInput);
        assert_eq!(s.hex_input.as_deref(), Some("#ff0000"));

        for _ in 0..6 {
            reduce(&mut s, Action::Backspace);
        }
        for c in "00FF00".chars() {
            reduce(&mut s, Action::InputChar(c));
        }
        reduce(&mut s, Action::InputChar('9'));
        assert_eq!(s.hex_input.as_deref(), Some("#00FF00"));
        reduce(&mut s, Action::CommitHex);
        assert_eq!(s.session.active_color(), Color::rgb(0, 255, 0));
        assert!(!s.is_editing_hex());
        assert!(s.session.palette().is_empty());

        reduce(&mut s, Action::StartHexInput);
        reduce(&mut s, Action::Backspace);
        reduce(&mut s, Action::CommitHex);
        assert_eq!(s.session.active_color(), Color::rgb(0, 255, 0));
        assert!(s.toast.is_some());
    }

    #[test]
    fn test_size_entry_sets_any_valid_size() {
        let mut s = state();
        reduce(&mut s, Action::PrimaryAt { x: 2, y: 2 });

        for (typed, expected_size) in [("5", 8), ("70", 8), ("30", 30)] {
            reduce(&mut s, Action::StartSizeInput);
            assert_eq!(s.size_input.as_deref(), Some("8"));
            reduce(&mut s, Action::Backspace);
            reduce(&mut s, Action::Backspace);
            for c in typed.chars() {
                reduce(&mut s, Action::InputChar(c));
            }
            reduce(&mut s, Action::CommitSize);
            assert!(!s.is_editing_size());
            assert_eq!(s.grid_size(), expected_size, "typed {typed}");
        }
        assert!(s.session.grid().iter().all(|(_, _, c)| c == Color::WHITE));
    }

    #[test]
    fn test_size_entry_rejects_out_of_range_without_change() {
        let mut s = state();
        reduce(&mut s, Action::PrimaryAt { x: 2, y: 2 });

        for typed in ["5", "70", ""] {
            reduce(&mut s, Action::StartSizeInput);
            reduce(&mut s, Action::Backspace);
            for c in typed.chars() {
                reduce(&mut s, Action::InputChar(c));
            }
            reduce(&mut s, Action::CommitSize);
            assert_eq!(s.grid_size(), 8);
            assert_eq!(s.session.grid().get(2, 2).unwrap(), RED);
            assert!(matches!(s.toast.as_ref().map(|t| t.kind), Some(state::ToastKind::Error)));
        }
    }

    #[test]
    fn test_size_entry_caps_length_and_cancels() {
        let mut s = state();
        reduce(&mut s, Action::StartSizeInput);
        assert_eq!(s.size_input.as_deref(), Some("8"));
        for c in "123".chars() {
            reduce(&mut s, Action::InputChar(c));
        }
        assert_eq!(s.size_input.as_deref(), Some("81"));
        reduce(&mut s, Action::CancelInput);
        assert!(!s.is_editing_size());
        assert_eq!(s.grid_size(), 8);
    }

    #[test]
    fn test_theme_comes_from_config() {
        let mut cfg = Config::default();
        cfg.theme.name = "paper".to_string();
        let app = App::new(cfg, Some(12)).unwrap();
        assert_eq!(app.state.theme.chrome, crate::tui::theme::Chrome::PAPER);
        assert_eq!(app.state.grid_size(), 12);
    }

    #[test]
    fn test_sample_refreshes_open_hex_field() {
        let mut s = state();
        reduce(&mut s, Action::StartHexInput);
        reduce(&mut s, Action::BeginOverride);
        reduce(&mut s, Action::PrimaryAt { x: 3, y: 3 });
        assert_eq!(s.hex_input.as_deref(), Some("#ffffff"));
        reduce(&mut s, Action::EndOverride);
        assert_eq!(s.mode(), Mode::Draw);
    }

    #[test]
    fn test_swatch_selection() {
        let mut s = state();
        reduce(&mut s, Action::PrimaryAt { x: 0, y: 0 });
        s.session.set_active_color(Color::BLACK);

        for _ in 0..20 {
            reduce(&mut s, Action::PaletteDown);
        }
        assert_eq!(s.palette_selected, 15);
        reduce(&mut s, Action::ApplySwatch);
        assert_eq!(s.session.active_color(), RED);

        reduce(&mut s, Action::SelectSwatch(2));
        assert_eq!(s.palette_selected, 2);
        assert_eq!(s.session.active_color(), Color::WHITE);
        reduce(&mut s, Action::SelectSwatch(40));
        assert_eq!(s.palette_selected, 2);
    }

    #[test]
    fn test_reset_palette_action() {
        let mut s = state();
        reduce(&mut s, Action::PrimaryAt { x: 0, y: 0 });
        s.palette_selected = 7;
        reduce(&mut s, Action::ResetPalette);
        assert!(s.session.palette().is_empty());
        assert_eq!(s.palette_selected, 0);
    }

    #[test]
    fn test_clear_and_help_toggle() {
        let mut s = state();
        reduce(&mut s, Action::PrimaryAt { x: 4, y: 4 });
        reduce(&mut s, Action::ClearGrid);
        assert_eq!(s.session.grid().get(4, 4).unwrap(), Color::WHITE);

        reduce(&mut s, Action::ToggleHelp);
        assert_eq!(s.screen, Screen::Help);
        reduce(&mut s, Action::ToggleHelp);
        assert_eq!(s.screen, Screen::Canvas);
        reduce(&mut s, Action::Quit);
        assert!(s.should_quit);
    }
}
