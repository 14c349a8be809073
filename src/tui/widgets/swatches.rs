//! Recent colors column - sixteen swatches, oldest on top

use crate::app::state::AppState;
use crate::editor::palette::CAPACITY;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, state: &mut AppState, area: Rect) {
    let theme = &state.theme;
    let icons = &theme.icons;
    let palette = state.session.palette();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.chrome.border))
        .title(format!(" {} Recent {}/{} ", icons.palette, palette.len(), CAPACITY))
        .title_style(Style::default().fg(theme.chrome.accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let colors = palette.list();
    let active = state.session.active_color();

    let mut lines = Vec::with_capacity(colors.len());
    let mut hit = Vec::with_capacity(colors.len());
    for (i, color) in colors.iter().enumerate() {
        if i as u16 >= inner.height {
            break;
        }
        let is_selected = i == state.palette_selected;

        let prefix = if is_selected { icons.selected } else { icons.unselected };
        let label_style = if *color == active {
            Style::default()
                .fg(theme.chrome.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.chrome.fg_muted)
        };

        lines.push(Line::from(vec![
            Span::styled(prefix, Style::default().fg(theme.chrome.accent)),
            Span::raw(" "),
            Span::styled(icons.swatch, Style::default().fg((*color).into())),
            Span::raw(" "),
            Span::styled(color.to_string(), label_style),
        ]));
        hit.push(Rect {
            x: inner.x,
            y: inner.y + i as u16,
            width: inner.width,
            height: 1,
        });
    }

    frame.render_widget(Paragraph::new(lines), inner);
    state.hit.swatches = hit;
}
