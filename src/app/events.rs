#[derive(Debug, Clone)]
pub enum Event {
    Input(InputEvent),
    Export(ExportEvent),
}

#[derive(Debug, Clone)]
pub enum InputEvent {
    Key(crossterm::event::KeyEvent),
    Mouse(crossterm::event::MouseEvent),
    Resize,
}

#[derive(Debug, Clone)]
pub enum ExportEvent {
    Saved(crate::export::ExportPaths),
    Failed(String),
}
