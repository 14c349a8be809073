use super::state::Screen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    SetScreen(Screen),
    ToggleHelp,

    // Tools
    CycleMode,
    BeginOverride,
    EndOverride,
    PrimaryAt { x: usize, y: usize },
    ContinuousAt { x: usize, y: usize },
    ReleasePointer,

    // Keyboard cursor
    CursorMove { dx: isize, dy: isize },
    PrimaryAtCursor,
    PaintMove { dx: isize, dy: isize },

    // Grid
    ClearGrid,
    GrowGrid,
    ShrinkGrid,

    // Palette
    PaletteUp,
    PaletteDown,
    ApplySwatch,
    ResetPalette,
    SelectSwatch(usize),

    // Hex color entry
    StartHexInput,
    InputChar(char),
    Backspace,
    CommitHex,

    // Grid size entry
    StartSizeInput,
    CommitSize,

    CancelInput,

    Export,

    Resize,
}
