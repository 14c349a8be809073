use super::color::Color;
use super::error::EditorError;
use std::ops::RangeInclusive;

pub const SIZE_RANGE: RangeInclusive<usize> = 6..=64;

/// Square grid of cells, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Color>,
}

impl Grid {
    pub fn new(size: usize) -> Result<Self, EditorError> {
        validate_size(size)?;
        Ok(Self {
            size,
            cells: vec![Color::WHITE; size * size],
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.size && y < self.size
    }

    /// Replace the whole grid with a blank one. Previous content is discarded.
    pub fn initialize(&mut self, size: usize) -> Result<(), EditorError> {
        *self = Self::new(size)?;
        Ok(())
    }

    /// Reinitialize at `new_size` and return the renderer's new cell extent.
    pub fn resize(&mut self, new_size: usize, canvas_extent: u32) -> Result<u32, EditorError> {
        self.initialize(new_size)?;
        Ok(cell_extent(canvas_extent, new_size))
    }

    pub fn get(&self, x: usize, y: usize) -> Result<Color, EditorError> {
        self.index(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: usize, y: usize, color: Color) -> Result<(), EditorError> {
        let i = self.index(x, y)?;
        self.cells[i] = color;
        Ok(())
    }

    /// 4-connected fill from `(x, y)` over cells equal to `target`.
    ///
    /// Returns how many cells were repainted. Filling with the target color
    /// itself changes nothing.
    pub fn flood_fill(
        &mut self,
        x: usize,
        y: usize,
        target: Color,
        fill: Color,
    ) -> Result<usize, EditorError> {
        self.index(x, y)?;
        if target == fill {
            return Ok(0);
        }

        let mut painted = 0;
        let mut stack = vec![(x, y)];
        while let Some((cx, cy)) = stack.pop() {
            let i = cy * self.size + cx;
            if self.cells[i] != target {
                continue;
            }
            self.cells[i] = fill;
            painted += 1;

            if cx > 0 {
                stack.push((cx - 1, cy));
            }
            if cx + 1 < self.size {
                stack.push((cx + 1, cy));
            }
            if cy > 0 {
                stack.push((cx, cy - 1));
            }
            if cy + 1 < self.size {
                stack.push((cx, cy + 1));
            }
        }
        Ok(painted)
    }

    /// Cells as `(x, y, color)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Color)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, c)| (i % self.size, i / self.size, *c))
    }

    pub fn row(&self, y: usize) -> Option<&[Color]> {
        if y >= self.size {
            return None;
        }
        let start = y * self.size;
        Some(&self.cells[start..start + self.size])
    }

    fn index(&self, x: usize, y: usize) -> Result<usize, EditorError> {
        if !self.contains(x, y) {
            return Err(EditorError::OutOfBounds {
                x,
                y,
                size: self.size,
            });
        }
        Ok(y * self.size + x)
    }
}

pub fn validate_size(size: usize) -> Result<(), EditorError> {
    if SIZE_RANGE.contains(&size) {
        Ok(())
    } else {
        Err(EditorError::InvalidSize(size))
    }
}

/// Pixels per cell when `size` cells span `canvas_extent`. Never zero.
pub fn cell_extent(canvas_extent: u32, size: usize) -> u32 {
    if size == 0 {
        return canvas_extent.max(1);
    }
    (canvas_extent / size as u32).max(1)
}
