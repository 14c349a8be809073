use super::color::Color;
use super::error::EditorError;
use super::grid::Grid;
use super::mode::{Mode, ModeCycle};
use super::palette::Palette;

/// What a tool action changed, for the UI to react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ToolEffect {
    pub cells_painted: usize,
    pub palette_changed: bool,
    pub active_color_changed: bool,
}

impl ToolEffect {
    pub fn is_noop(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone)]
pub struct ToolController {
    modes: ModeCycle,
    active: Color,
}

impl ToolController {
    pub fn new(active: Color) -> Self {
        Self {
            modes: ModeCycle::new(),
            active,
        }
    }

    pub fn mode(&self) -> Mode {
        self.modes.current()
    }

    pub fn is_overridden(&self) -> bool {
        self.modes.is_overridden()
    }

    pub fn active_color(&self) -> Color {
        self.active
    }

    /// Click or tap on a cell, dispatched by the current mode.
    pub fn on_primary_action(
        &mut self,
        grid: &mut Grid,
        palette: &mut Palette,
        x: usize,
        y: usize,
    ) -> Result<ToolEffect, EditorError> {
        if !grid.contains(x, y) {
            return Ok(ToolEffect::default());
        }

        match self.modes.current() {
            Mode::Draw => self.paint(grid, palette, x, y),
            Mode::Sample => {
                let color = grid.get(x, y)?;
                let palette_changed = palette.record(color);
                let active_color_changed = self.active != color;
                self.active = color;
                Ok(ToolEffect {
                    cells_painted: 0,
                    palette_changed,
                    active_color_changed,
                })
            }
            Mode::Fill => {
                let target = grid.get(x, y)?;
                let cells_painted = grid.flood_fill(x, y, target, self.active)?;
                Ok(ToolEffect {
                    cells_painted,
                    ..ToolEffect::default()
                })
            }
        }
    }

    /// Drag across a cell. Always paints, whatever the mode.
    pub fn on_continuous_action(
        &mut self,
        grid: &mut Grid,
        palette: &mut Palette,
        x: usize,
        y: usize,
    ) -> Result<ToolEffect, EditorError> {
        if !grid.contains(x, y) {
            return Ok(ToolEffect::default());
        }
        self.paint(grid, palette, x, y)
    }

    /// Color picker or palette swatch. Does not touch the palette.
    pub fn set_active_color(&mut self, color: Color) -> bool {
        let changed = self.active != color;
        self.active = color;
        changed
    }

    pub fn cycle_mode(&mut self) -> Mode {
        self.modes.cycle()
    }

    pub fn begin_override(&mut self) -> bool {
        self.modes.begin_override()
    }

    pub fn end_override(&mut self) -> bool {
        self.modes.end_override()
    }

    fn paint(
        &mut self,
        grid: &mut Grid,
        palette: &mut Palette,
        x: usize,
        y: usize,
    ) -> Result<ToolEffect, EditorError> {
        let cells_painted = usize::from(grid.get(x, y)? != self.active);
        grid.set(x, y, self.active)?;
        Ok(ToolEffect {
            cells_painted,
            palette_changed: palette.record(self.active),
            active_color_changed: false,
        })
    }
}

impl Default for ToolController {
    fn default() -> Self {
        Self::new(Color::BLACK)
    }
}
