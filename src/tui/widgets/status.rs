//! Status bar - tool, active color, grid info, hex entry and toasts

use crate::app::state::{AppState, ToastKind};
use crate::editor::{Mode, SIZE_RANGE};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = &state.theme;
    let icons = &theme.icons;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.chrome.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Add horizontal padding
    let padded = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(1),  // Left padding
            Constraint::Min(1),     // Content
            Constraint::Length(1),  // Right padding
        ])
        .split(inner)[1];

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tool + color + grid
            Constraint::Min(0),    // Hex entry / toast / hints
        ])
        .split(padded);

    let mode = state.mode();
    let active = state.session.active_color();
    let size = state.grid_size();
    let (cx, cy) = state.cursor;

    let mut tool_spans = vec![
        Span::styled(
            format!("{} {}", icons.mode(mode), mode.label()),
            Style::default()
                .fg(theme.chrome.accent)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
    ];
    if state.session.is_overridden() {
        tool_spans.push(Span::styled(
            format!("{} hold ", icons.hold),
            Style::default().fg(theme.chrome.accent_alt),
        ));
    }
    tool_spans.extend([
        Span::styled(icons.swatch, Style::default().fg(active.into())),
        Span::raw(" "),
        Span::styled(active.to_string(), Style::default().fg(theme.chrome.fg)),
        Span::styled(
            format!("   {size}x{size}   {} {cx},{cy}", icons.cursor),
            Style::default().fg(theme.chrome.fg_muted),
        ),
    ]);
    frame.render_widget(Paragraph::new(Line::from(tool_spans)), rows[0]);

    frame.render_widget(Paragraph::new(detail_line(state)), rows[1]);
}

fn detail_line(state: &AppState) -> Line<'static> {
    let theme = &state.theme;
    let icons = &theme.icons;

    if let Some(buf) = &state.hex_input {
        return Line::from(vec![
            Span::styled("Color: ", Style::default().fg(theme.chrome.fg_muted)),
            Span::styled(
                format!("{buf}_"),
                Style::default()
                    .fg(theme.chrome.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "   Enter apply  Esc cancel",
                Style::default().fg(theme.chrome.fg_muted),
            ),
        ]);
    }

    if let Some(buf) = &state.size_input {
        return Line::from(vec![
            Span::styled("Grid size: ", Style::default().fg(theme.chrome.fg_muted)),
            Span::styled(
                format!("{buf}_"),
                Style::default()
                    .fg(theme.chrome.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(
                    "   {}-{}, clears the canvas  Enter apply  Esc cancel",
                    SIZE_RANGE.start(),
                    SIZE_RANGE.end()
                ),
                Style::default().fg(theme.chrome.fg_muted),
            ),
        ]);
    }

    if let Some(toast) = &state.toast {
        let (icon, style) = match toast.kind {
            ToastKind::Success => (icons.success, Style::default().fg(theme.chrome.accent)),
            ToastKind::Error => (
                icons.error,
                Style::default()
                    .fg(theme.chrome.error)
                    .add_modifier(Modifier::BOLD),
            ),
        };
        return Line::from(Span::styled(format!("{icon} {}", toast.message), style));
    }

    if state.exporting {
        return Line::from(Span::styled(
            format!("{} {}", icons.loading, state.status),
            Style::default().fg(theme.chrome.fg_muted),
        ));
    }

    let hint = match state.mode() {
        Mode::Draw => "click to paint, drag to keep painting",
        Mode::Sample => "click to pick a color",
        Mode::Fill => "click to fill the region",
    };
    Line::from(Span::styled(
        format!("{hint}   Tab tool  # color  s size  e export  ? help"),
        Style::default().fg(theme.chrome.fg_muted),
    ))
}
