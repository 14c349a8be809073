//! Pixel canvas - every grid cell drawn as a colored block

use crate::app::state::{AppState, CanvasGeometry};
use crate::editor::{Color, Grid};
use ratatui::{
    layout::Rect,
    style::{Color as TermColor, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, state: &mut AppState, area: Rect) {
    let theme = &state.theme;
    let icons = &theme.icons;
    let size = state.grid_size();

    let inner = Block::default().borders(Borders::ALL).inner(area);
    let geo = CanvasGeometry::fit(inner, size);

    let title = if geo.is_clipped(size) {
        format!(" {} Canvas {size}x{size} (clipped, enlarge terminal) ", icons.canvas)
    } else {
        format!(" {} Canvas {size}x{size} ", icons.canvas)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_set(theme.border_set())
        .border_style(Style::default().fg(theme.chrome.border))
        .title(title)
        .title_style(Style::default().fg(theme.chrome.accent));
    frame.render_widget(block, area);

    let lines = canvas_lines(state.session.grid(), &geo, Some(state.cursor));
    frame.render_widget(Paragraph::new(lines), inner);

    state.hit.canvas = Some(geo);
}

/// One `Line` per terminal row covered by the visible cells.
pub fn canvas_lines(grid: &Grid, geo: &CanvasGeometry, cursor: Option<(usize, usize)>) -> Vec<Line<'static>> {
    let (cols, rows) = geo.visible;
    let width = geo.cell_w as usize;
    let mut lines = Vec::with_capacity(rows * geo.cell_h as usize);

    for y in 0..rows {
        let Some(row) = grid.row(y) else { break };
        for _ in 0..geo.cell_h {
            let spans: Vec<Span> = row[..cols]
                .iter()
                .enumerate()
                .map(|(x, &c)| cell_span(c, width, cursor == Some((x, y))))
                .collect();
            lines.push(Line::from(spans));
        }
    }
    lines
}

fn cell_span(color: Color, width: usize, is_cursor: bool) -> Span<'static> {
    let style = Style::default().bg(color.into());
    if !is_cursor {
        return Span::styled(" ".repeat(width), style);
    }

    let marker = if color.brightness() > 0.5 {
        TermColor::Black
    } else {
        TermColor::White
    };
    let text = if width >= 2 {
        format!("[{}]", " ".repeat(width - 2))
    } else {
        "+".to_string()
    };
    Span::styled(text, style.fg(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_lines_cover_visible_cells() {
        let grid = Grid::new(6).unwrap();
        let geo = CanvasGeometry::fit(Rect::new(0, 0, 24, 12), 6);
        assert_eq!((geo.cell_w, geo.cell_h), (4, 2));

        let lines = canvas_lines(&grid, &geo, None);
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[0].spans.len(), 6);
        assert_eq!(text(&lines[0]).len(), 24);
    }

    #[test]
    fn test_cells_carry_their_color() {
        let mut grid = Grid::new(6).unwrap();
        grid.set(2, 1, Color::rgb(10, 20, 30)).unwrap();
        let geo = CanvasGeometry::fit(Rect::new(0, 0, 12, 6), 6);

        let lines = canvas_lines(&grid, &geo, None);
        assert_eq!(lines[1].spans[2].style.bg, Some(TermColor::Rgb(10, 20, 30)));
        assert_eq!(lines[1].spans[1].style.bg, Some(TermColor::Rgb(255, 255, 255)));
    }

    #[test]
    fn test_cursor_marker_contrasts() {
        let mut grid = Grid::new(6).unwrap();
        grid.set(0, 0, Color::BLACK).unwrap();
        let geo = CanvasGeometry::fit(Rect::new(0, 0, 12, 6), 6);

        let lines = canvas_lines(&grid, &geo, Some((0, 0)));
        assert_eq!(lines[0].spans[0].content, "[]");
        assert_eq!(lines[0].spans[0].style.fg, Some(TermColor::White));

        let lines = canvas_lines(&grid, &geo, Some((1, 0)));
        assert_eq!(lines[0].spans[1].style.fg, Some(TermColor::Black));
    }

    #[test]
    fn test_clipped_grid_only_draws_visible_part() {
        let grid = Grid::new(64).unwrap();
        let geo = CanvasGeometry::fit(Rect::new(0, 0, 20, 5), 64);
        let lines = canvas_lines(&grid, &geo, None);
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0].spans.len(), 10);
    }
}
