use crate::editor::{EditorSession, Mode};
use crate::tui::theme::Theme;
use ratatui::layout::Rect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Canvas,
    Help,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub created_at: std::time::Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl Toast {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Success,
            created_at: std::time::Instant::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Error,
            created_at: std::time::Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() > std::time::Duration::from_secs(3)
    }
}

/// Where the canvas was last drawn, in terminal cells.
///
/// One grid cell covers `cell_w x cell_h` terminal cells starting at the
/// origin. `cell_w` is twice `cell_h` so cells look square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CanvasGeometry {
    pub area: Rect,
    pub cell_w: u16,
    pub cell_h: u16,
    /// Grid cells that fit horizontally and vertically.
    pub visible: (usize, usize),
}

impl CanvasGeometry {
    /// Largest square cells for `size x size` grid cells inside `area`, at
    /// least one row tall. Cells that do not fit are clipped.
    pub fn fit(area: Rect, size: usize) -> Self {
        let size_u16 = size.max(1) as u16;
        let extent = area.height.min(area.width / 2);
        let cell_h = (extent / size_u16).max(1);
        let cell_w = cell_h * 2;
        let visible = (
            (area.width / cell_w) as usize,
            (area.height / cell_h) as usize,
        );
        Self {
            area,
            cell_w,
            cell_h,
            visible: (visible.0.min(size), visible.1.min(size)),
        }
    }

    pub fn is_clipped(&self, size: usize) -> bool {
        self.visible.0 < size || self.visible.1 < size
    }

    /// Grid cell under a terminal position, if it is on a drawn cell.
    pub fn cell_at(&self, column: u16, row: u16) -> Option<(usize, usize)> {
        if self.cell_w == 0 || self.cell_h == 0 {
            return None;
        }
        let dx = column.checked_sub(self.area.x)?;
        let dy = row.checked_sub(self.area.y)?;
        let x = (dx / self.cell_w) as usize;
        let y = (dy / self.cell_h) as usize;
        (x < self.visible.0 && y < self.visible.1).then_some((x, y))
    }
}

/// Screen regions recorded during the last draw, for mouse hit-testing.
#[derive(Debug, Clone, Default)]
pub struct HitAreas {
    pub canvas: Option<CanvasGeometry>,
    pub swatches: Vec<Rect>,
}

impl HitAreas {
    pub fn swatch_at(&self, column: u16, row: u16) -> Option<usize> {
        self.swatches.iter().position(|r| {
            column >= r.x && column < r.x + r.width && row >= r.y && row < r.y + r.height
        })
    }
}

pub struct AppState {
    pub should_quit: bool,
    pub screen: Screen,

    pub session: EditorSession,

    // Keyboard cursor on the grid
    pub cursor: (usize, usize),

    // Palette selection for keyboard re-selection
    pub palette_selected: usize,

    // Hex color entry; `Some` while editing
    pub hex_input: Option<String>,

    // Grid size entry; `Some` while editing
    pub size_input: Option<String>,

    pub hit: HitAreas,

    // Mouse button held on the canvas
    pub dragging: bool,

    pub exporting: bool,

    pub toast: Option<Toast>,
    pub status: String,

    pub theme: Theme,
}

impl AppState {
    pub fn new(session: EditorSession) -> Self {
        Self {
            should_quit: false,
            screen: Screen::Canvas,
            session,
            cursor: (0, 0),
            palette_selected: 0,
            hex_input: None,
            size_input: None,
            hit: HitAreas::default(),
            dragging: false,
            exporting: false,
            toast: None,
            status: String::new(),
            theme: Theme::default(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.session.mode()
    }

    pub fn grid_size(&self) -> usize {
        self.session.grid().size()
    }

    pub fn move_cursor(&mut self, dx: isize, dy: isize) {
        let max = self.grid_size().saturating_sub(1) as isize;
        let x = (self.cursor.0 as isize + dx).clamp(0, max);
        let y = (self.cursor.1 as isize + dy).clamp(0, max);
        self.cursor = (x as usize, y as usize);
    }

    /// Keep the cursor inside the grid after a resize.
    pub fn clamp_cursor(&mut self) {
        self.move_cursor(0, 0);
    }

    pub fn is_editing_hex(&self) -> bool {
        self.hex_input.is_some()
    }

    pub fn is_editing_size(&self) -> bool {
        self.size_input.is_some()
    }
}
