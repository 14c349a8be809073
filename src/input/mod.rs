use crate::app::actions::Action;
use crate::app::events::{Event, InputEvent};
use crate::app::state::{AppState, Screen};
use crossterm::event::{
    self, Event as CtEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, ModifierKeyCode,
    MouseButton, MouseEventKind,
};
use tokio::sync::mpsc;

pub fn spawn_input_task(tx: mpsc::Sender<Event>) {
    tokio::task::spawn_blocking(move || {
        loop {
            if event::poll(std::time::Duration::from_millis(250)).unwrap_or(false) {
                match event::read() {
                    Ok(CtEvent::Key(k)) => {
                        // Releases only matter for the override modifier.
                        let wanted = k.kind != KeyEventKind::Release || is_alt_key(&k);
                        if wanted && tx.blocking_send(Event::Input(InputEvent::Key(k))).is_err() {
                            break;
                        }
                    }
                    Ok(CtEvent::Mouse(m)) => {
                        if tx.blocking_send(Event::Input(InputEvent::Mouse(m))).is_err() {
                            break;
                        }
                    }
                    Ok(CtEvent::Resize(_, _)) => {
                        if tx
                            .blocking_send(Event::Input(InputEvent::Resize))
                            .is_err()
                        {
                            break;
                        }
                    }
                    Ok(_) => {}
                    Err(_) => {}
                }
            }
        }
    });
}

fn is_alt_key(k: &KeyEvent) -> bool {
    matches!(
        k.code,
        KeyCode::Modifier(ModifierKeyCode::LeftAlt | ModifierKeyCode::RightAlt)
    )
}

/// Start or stop the sample override from the Alt state carried by mouse
/// events. Terminals rarely report a bare Alt press, so every mouse event
/// re-checks the modifier.
pub fn sync_override(state: &AppState, ev: &InputEvent) -> Option<Action> {
    let InputEvent::Mouse(m) = ev else {
        return None;
    };
    if state.screen != Screen::Canvas {
        return None;
    }
    let alt = m.modifiers.contains(KeyModifiers::ALT);
    match (alt, state.session.is_overridden()) {
        (true, false) => Some(Action::BeginOverride),
        (false, true) => Some(Action::EndOverride),
        _ => None,
    }
}

pub fn map_input_to_action(state: &AppState, ev: InputEvent) -> Option<Action> {
    match ev {
        InputEvent::Resize => Some(Action::Resize),
        InputEvent::Mouse(m) => {
            if state.screen != Screen::Canvas {
                return None;
            }
            match m.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    if let Some(index) = state.hit.swatch_at(m.column, m.row) {
                        return Some(Action::SelectSwatch(index));
                    }
                    let (x, y) = state.hit.canvas?.cell_at(m.column, m.row)?;
                    Some(Action::PrimaryAt { x, y })
                }
                MouseEventKind::Drag(MouseButton::Left) if state.dragging => {
                    let (x, y) = state.hit.canvas?.cell_at(m.column, m.row)?;
                    Some(Action::ContinuousAt { x, y })
                }
                MouseEventKind::Up(MouseButton::Left) => Some(Action::ReleasePointer),
                MouseEventKind::ScrollUp => Some(Action::PaletteUp),
                MouseEventKind::ScrollDown => Some(Action::PaletteDown),
                _ => None,
            }
        }
        InputEvent::Key(k) => {
            if is_alt_key(&k) {
                return match k.kind {
                    KeyEventKind::Release => Some(Action::EndOverride),
                    _ if state.screen == Screen::Canvas => Some(Action::BeginOverride),
                    _ => None,
                };
            }
            let k = normalize_shift(k);
            if state.is_editing_hex() {
                return handle_hex_input(k);
            }
            if state.is_editing_size() {
                return handle_size_input(k);
            }
            match state.screen {
                Screen::Canvas => handle_canvas_screen(k),
                Screen::Help => handle_help_screen(k),
            }
        }
    }
}

/// Terminals with enhanced keyboard reporting may send Shift+3 as `3` + SHIFT
/// instead of `#`. Map the base key to its shifted character (US layout).
fn normalize_shift(mut k: KeyEvent) -> KeyEvent {
    if !k.modifiers.contains(KeyModifiers::SHIFT) {
        return k;
    }
    if let KeyCode::Char(c) = k.code {
        k.code = KeyCode::Char(shifted(c));
    }
    k
}

fn shifted(c: char) -> char {
    match c {
        'a'..='z' => c.to_ascii_uppercase(),
        '1' => '!',
        '2' => '@',
        '3' => '#',
        '4' => '$',
        '5' => '%',
        '6' => '^',
        '7' => '&',
        '8' => '*',
        '9' => '(',
        '0' => ')',
        '-' => '_',
        '=' => '+',
        '[' => '{',
        ']' => '}',
        ';' => ':',
        '\'' => '"',
        ',' => '<',
        '.' => '>',
        '/' => '?',
        '`' => '~',
        '\\' => '|',
        other => other,
    }
}

fn handle_canvas_screen(k: KeyEvent) -> Option<Action> {
    match k.code {
        // Quit
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Esc => Some(Action::Quit),

        // Cursor - vim style, Shift paints along the way
        KeyCode::Up if k.modifiers.contains(KeyModifiers::SHIFT) => {
            Some(Action::PaintMove { dx: 0, dy: -1 })
        }
        KeyCode::Down if k.modifiers.contains(KeyModifiers::SHIFT) => {
            Some(Action::PaintMove { dx: 0, dy: 1 })
        }
        KeyCode::Left if k.modifiers.contains(KeyModifiers::SHIFT) => {
            Some(Action::PaintMove { dx: -1, dy: 0 })
        }
        KeyCode::Right if k.modifiers.contains(KeyModifiers::SHIFT) => {
            Some(Action::PaintMove { dx: 1, dy: 0 })
        }
        KeyCode::Up | KeyCode::Char('k') => Some(Action::CursorMove { dx: 0, dy: -1 }),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::CursorMove { dx: 0, dy: 1 }),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::CursorMove { dx: -1, dy: 0 }),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::CursorMove { dx: 1, dy: 0 }),
        KeyCode::Char('K') => Some(Action::PaintMove { dx: 0, dy: -1 }),
        KeyCode::Char('J') => Some(Action::PaintMove { dx: 0, dy: 1 }),
        KeyCode::Char('H') => Some(Action::PaintMove { dx: -1, dy: 0 }),
        KeyCode::Char('L') => Some(Action::PaintMove { dx: 1, dy: 0 }),

        // Tools
        KeyCode::Char(' ') | KeyCode::Enter => Some(Action::PrimaryAtCursor),
        KeyCode::Tab | KeyCode::Char('m') => Some(Action::CycleMode),

        // Palette
        KeyCode::Char('[') => Some(Action::PaletteUp),
        KeyCode::Char(']') => Some(Action::PaletteDown),
        KeyCode::Char('p') => Some(Action::ApplySwatch),
        KeyCode::Char('#') => Some(Action::StartHexInput),
        KeyCode::Char('R') => Some(Action::ResetPalette),

        // Grid
        KeyCode::Char('c') => Some(Action::ClearGrid),
        KeyCode::Char('s') => Some(Action::StartSizeInput),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(Action::GrowGrid),
        KeyCode::Char('-') | KeyCode::Char('_') => Some(Action::ShrinkGrid),

        KeyCode::Char('e') => Some(Action::Export),
        KeyCode::Char('?') | KeyCode::F(1) => Some(Action::SetScreen(Screen::Help)),

        _ => None,
    }
}

fn handle_help_screen(k: KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Esc | KeyCode::Char('?') | KeyCode::F(1) => Some(Action::ToggleHelp),
        _ => None,
    }
}

fn handle_hex_input(k: KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Esc => Some(Action::CancelInput),
        KeyCode::Enter => Some(Action::CommitHex),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Char(c) if c == '#' || c.is_ascii_hexdigit() => Some(Action::InputChar(c)),
        _ => None,
    }
}

fn handle_size_input(k: KeyEvent) -> Option<Action> {
    match k.code {
        KeyCode::Esc => Some(Action::CancelInput),
        KeyCode::Enter => Some(Action::CommitSize),
        KeyCode::Backspace => Some(Action::Backspace),
        KeyCode::Char(c) if c.is_ascii_digit() => Some(Action::InputChar(c)),
        _ => None,
    }
}
