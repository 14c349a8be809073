use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EditorError {
    #[error("cell ({x}, {y}) is outside the {size}x{size} grid")]
    OutOfBounds { x: usize, y: usize, size: usize },
    #[error("grid size {0} is outside the supported range 6..=64")]
    InvalidSize(usize),
    #[error("invalid color {0:?}, expected six hex digits")]
    InvalidColorFormat(String),
}
