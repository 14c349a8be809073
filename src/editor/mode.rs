#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Draw,
    Sample,
    Fill,
}

impl Mode {
    pub fn next(self) -> Self {
        match self {
            Mode::Draw => Mode::Sample,
            Mode::Sample => Mode::Fill,
            Mode::Fill => Mode::Draw,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Draw => "Draw",
            Mode::Sample => "Sample",
            Mode::Fill => "Fill",
        }
    }
}

/// Current tool mode plus the momentary sample override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModeCycle {
    current: Mode,
    /// Mode to restore when the override ends. `Some` only while overriding.
    saved: Option<Mode>,
}

impl ModeCycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> Mode {
        self.current
    }

    pub fn is_overridden(&self) -> bool {
        self.saved.is_some()
    }

    /// Advance Draw -> Sample -> Fill -> Draw. Ends any active override.
    pub fn cycle(&mut self) -> Mode {
        self.saved = None;
        self.current = self.current.next();
        self.current
    }

    /// Switch to Sample until `end_override`. Returns whether anything changed.
    pub fn begin_override(&mut self) -> bool {
        if self.current == Mode::Sample {
            return false;
        }
        self.saved = Some(self.current);
        self.current = Mode::Sample;
        true
    }

    /// Restore the mode saved by `begin_override`. Without an active override
    /// there is nothing saved, so the current mode stays.
    pub fn end_override(&mut self) -> bool {
        match self.saved.take() {
            Some(previous) => {
                self.current = previous;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_order() {
        let mut modes = ModeCycle::new();
        assert_eq!(modes.current(), Mode::Draw);
        assert_eq!(modes.cycle(), Mode::Sample);
        assert_eq!(modes.cycle(), Mode::Fill);
        assert_eq!(modes.cycle(), Mode::Draw);
    }

    #[test]
    fn test_override_restores_previous_mode() {
        let mut modes = ModeCycle::new();
        modes.cycle();
        modes.cycle();
        assert!(modes.begin_override());
        assert_eq!(modes.current(), Mode::Sample);
        assert!(modes.is_overridden());

        assert!(modes.end_override());
        assert_eq!(modes.current(), Mode::Fill);
        assert!(!modes.is_overridden());
    }

    #[test]
    fn test_repeated_begin_keeps_first_snapshot() {
        let mut modes = ModeCycle::new();
        assert!(modes.begin_override());
        assert!(!modes.begin_override());
        assert!(modes.end_override());
        assert_eq!(modes.current(), Mode::Draw);
    }

    #[test]
    fn test_begin_in_sample_mode_is_ignored() {
        let mut modes = ModeCycle::new();
        modes.cycle();
        assert!(!modes.begin_override());
        assert!(!modes.end_override());
        assert_eq!(modes.current(), Mode::Sample);
    }

    #[test]
    fn test_end_without_begin_is_noop() {
        let mut modes = ModeCycle::new();
        modes.cycle();
        modes.cycle();
        assert!(!modes.end_override());
        assert_eq!(modes.current(), Mode::Fill);
    }

    #[test]
    fn test_cycle_during_override_drops_snapshot() {
        let mut modes = ModeCycle::new();
        modes.begin_override();
        assert_eq!(modes.cycle(), Mode::Fill);
        assert!(!modes.end_override());
        assert_eq!(modes.current(), Mode::Fill);
    }
}
