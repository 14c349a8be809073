//! Root layout widget - orchestrates main layout structure

use crate::app::state::{AppState, Screen};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

use super::{canvas, help, status, swatches};

/// Main layout structure:
/// ┌─────────────────────────────────┬────────────┐
/// │                                 │  Recent    │
/// │            Canvas               │  ██ #ffffff│
/// │                                 │  ██ #ff0000│
/// │                                 │  ...       │
/// ├─────────────────────────────────┴────────────┤
/// │ Tool  ██ #000000  24x24  0,0                 │
/// │ hints / hex entry / toast                    │
/// └──────────────────────────────────────────────┘
pub fn render(frame: &mut Frame, state: &mut AppState) {
    let root = frame.area();
    let theme = &state.theme;
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.chrome.bg)),
        root,
    );

    // Main vertical layout: top area | status bar
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(8),       // Canvas + palette
            Constraint::Length(4),    // Status bar
        ])
        .split(root);

    if state.screen == Screen::Help {
        // Nothing clickable while help is up.
        state.hit.canvas = None;
        state.hit.swatches.clear();
        help::render(frame, state, rows[0]);
        status::render(frame, state, rows[1]);
        return;
    }

    // Top area: canvas | palette column
    let top_cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(20),      // Canvas
            Constraint::Length(18),   // Recent colors
        ])
        .split(rows[0]);

    canvas::render(frame, state, top_cols[0]);
    swatches::render(frame, state, top_cols[1]);
    status::render(frame, state, rows[1]);
}
