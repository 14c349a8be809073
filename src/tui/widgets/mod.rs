pub mod canvas;
pub mod help;
pub mod root;
pub mod status;
pub mod swatches;
