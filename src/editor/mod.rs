//! Grid-editing engine: cells, tools, recent colors

pub mod color;
pub mod error;
pub mod grid;
pub mod mode;
pub mod palette;
pub mod tool;

pub use color::Color;
pub use error::EditorError;
pub use grid::{Grid, SIZE_RANGE};
pub use mode::Mode;
pub use palette::Palette;
pub use tool::{ToolController, ToolEffect};

use tracing::{debug, info, warn};

/// Everything one editing session owns.
#[derive(Debug, Clone)]
pub struct EditorSession {
    grid: Grid,
    palette: Palette,
    tools: ToolController,
    canvas_extent: u32,
    cell_extent: u32,
}

impl EditorSession {
    pub fn new(size: usize, canvas_extent: u32, active: Color) -> Result<Self, EditorError> {
        let grid = Grid::new(size)?;
        Ok(Self {
            grid,
            palette: Palette::new(),
            tools: ToolController::new(active),
            canvas_extent,
            cell_extent: grid::cell_extent(canvas_extent, size),
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn mode(&self) -> Mode {
        self.tools.mode()
    }

    pub fn is_overridden(&self) -> bool {
        self.tools.is_overridden()
    }

    pub fn active_color(&self) -> Color {
        self.tools.active_color()
    }

    pub fn cell_extent(&self) -> u32 {
        self.cell_extent
    }

    pub fn primary_action(&mut self, x: usize, y: usize) -> ToolEffect {
        let mode = self.tools.mode();
        let effect = self
            .tools
            .on_primary_action(&mut self.grid, &mut self.palette, x, y)
            .unwrap_or_else(|e| {
                warn!("primary action at ({x}, {y}) failed: {e}");
                ToolEffect::default()
            });
        debug!(?mode, x, y, ?effect, "primary action");
        effect
    }

    pub fn continuous_action(&mut self, x: usize, y: usize) -> ToolEffect {
        let effect = self
            .tools
            .on_continuous_action(&mut self.grid, &mut self.palette, x, y)
            .unwrap_or_else(|e| {
                warn!("continuous action at ({x}, {y}) failed: {e}");
                ToolEffect::default()
            });
        debug!(x, y, ?effect, "continuous action");
        effect
    }

    pub fn set_active_color(&mut self, color: Color) -> bool {
        self.tools.set_active_color(color)
    }

    /// Select a palette swatch as the active color. No palette recording.
    pub fn select_swatch(&mut self, index: usize) -> Option<Color> {
        let color = self.palette.get(index)?;
        self.tools.set_active_color(color);
        Some(color)
    }

    pub fn cycle_mode(&mut self) -> Mode {
        let mode = self.tools.cycle_mode();
        debug!(?mode, "mode cycled");
        mode
    }

    pub fn begin_override(&mut self) -> bool {
        self.tools.begin_override()
    }

    pub fn end_override(&mut self) -> bool {
        self.tools.end_override()
    }

    /// Wipe the canvas at its current size.
    pub fn clear(&mut self) {
        let size = self.grid.size();
        // Current size is always valid.
        if let Err(e) = self.grid.initialize(size) {
            warn!("clear failed: {e}");
            return;
        }
        info!(size, "grid cleared");
    }

    /// Resize and clear. Out-of-range sizes leave the session untouched.
    pub fn resize(&mut self, size: usize) -> Result<u32, EditorError> {
        match self.grid.resize(size, self.canvas_extent) {
            Ok(extent) => {
                self.cell_extent = extent;
                info!(size, cell_extent = extent, "grid resized");
                Ok(extent)
            }
            Err(e) => {
                warn!("resize rejected: {e}");
                Err(e)
            }
        }
    }

    pub fn reset_palette(&mut self) {
        self.palette.initialize();
    }
}
