//! Help screen showing keybindings

use crate::app::state::AppState;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the help screen
pub fn render(frame: &mut Frame, state: &AppState, area: Rect) {
    let theme = &state.theme;
    let icons = &theme.icons;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.chrome.border))
        .title(format!(" {} Keybinds ", icons.help))
        .title_style(Style::default().fg(theme.chrome.accent));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Split into columns
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    // Left column - Tools & Cursor
    let left_content = vec![
        section_header("Tools", theme),
        keybind("Tab / m", "Cycle draw / sample / fill", theme),
        keybind("Click", "Use current tool", theme),
        keybind("Drag", "Paint (any tool)", theme),
        keybind("Alt (hold)", "Sample while held", theme),
        keybind("Space", "Use tool at cursor", theme),
        Line::default(),
        section_header("Cursor", theme),
        keybind("h j k l", "Move cursor", theme),
        keybind("Arrows", "Move cursor", theme),
        keybind("H J K L", "Move and paint", theme),
        keybind("Shift+Arrow", "Move and paint", theme),
    ];

    let left_para = Paragraph::new(left_content).wrap(Wrap { trim: false });
    frame.render_widget(left_para, cols[0]);

    // Right column - Colors & Canvas
    let right_content = vec![
        section_header("Colors", theme),
        keybind("#", "Type a hex color", theme),
        keybind("[ / ]", "Select recent color", theme),
        keybind("p", "Use selected recent color", theme),
        keybind("Click swatch", "Use that color", theme),
        keybind("R", "Reset recent colors", theme),
        Line::default(),
        section_header("Canvas", theme),
        keybind("c", "Clear canvas", theme),
        keybind("s", "Set grid size (clears)", theme),
        keybind("+ / -", "Grow / shrink grid (clears)", theme),
        keybind("e", "Export PNG + SVG", theme),
        Line::default(),
        section_header("General", theme),
        keybind("? / F1", "Toggle this screen", theme),
        keybind("q / Esc", "Quit", theme),
    ];

    let right_para = Paragraph::new(right_content).wrap(Wrap { trim: false });
    frame.render_widget(right_para, cols[1]);
}

fn section_header(title: &str, theme: &crate::tui::theme::Theme) -> Line<'static> {
    Line::from(vec![Span::styled(
        format!("━━ {} ━━", title),
        Style::default()
            .fg(theme.chrome.accent)
            .add_modifier(Modifier::BOLD),
    )])
}

fn keybind(key: &str, desc: &str, theme: &crate::tui::theme::Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled("  ", Style::default()),
        Span::styled(
            format!("{:14}", key),
            Style::default()
                .fg(theme.chrome.accent_alt)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(desc.to_string(), Style::default().fg(theme.chrome.fg)),
    ])
}
