//! Recently used colors.
//!
//! The palette shows sixteen swatches. A fresh palette is sixteen white
//! placeholders; every newly recorded color pushes the oldest swatch out of
//! the front. Recording a color that is already shown does nothing, it is not
//! moved to the end.

use super::color::Color;

pub const CAPACITY: usize = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    /// Recorded colors, oldest first. Never longer than `CAPACITY`.
    entries: Vec<Color>,
}

impl Palette {
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(CAPACITY + 1),
        }
    }

    /// Back to sixteen white swatches.
    pub fn initialize(&mut self) {
        self.entries.clear();
    }

    /// Record a color from a paint or sample action.
    ///
    /// Returns `true` when the visible list changed.
    pub fn record(&mut self, color: Color) -> bool {
        if self.contains(color) {
            return false;
        }
        self.entries.push(color);
        if self.entries.len() > CAPACITY {
            self.entries.remove(0);
        }
        true
    }

    pub fn contains(&self, color: Color) -> bool {
        self.entries.contains(&color) || (color == Color::WHITE && self.placeholders() > 0)
    }

    /// Exactly `CAPACITY` swatches, oldest first.
    pub fn list(&self) -> Vec<Color> {
        let mut out = vec![Color::WHITE; self.placeholders()];
        out.extend_from_slice(&self.entries);
        out
    }

    pub fn get(&self, index: usize) -> Option<Color> {
        let pad = self.placeholders();
        if index < pad {
            Some(Color::WHITE)
        } else {
            self.entries.get(index - pad).copied()
        }
    }

    /// Colors recorded since the last initialize, oldest first.
    pub fn recorded(&self) -> &[Color] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn placeholders(&self) -> usize {
        CAPACITY - self.entries.len()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn shade(n: u8) -> Color {
        Color::rgb(n, 0, 0)
    }

    #[test]
    fn test_fresh_palette_is_sixteen_whites() {
        let palette = Palette::new();
        assert_eq!(palette.list(), vec![Color::WHITE; CAPACITY]);
        assert!(palette.is_empty());
    }

    #[test]
    fn test_record_appends_and_shifts_placeholders() {
        let mut palette = Palette::new();
        assert!(palette.record(shade(1)));
        assert!(palette.record(shade(2)));

        let list = palette.list();
        assert_eq!(list.len(), CAPACITY);
        assert_eq!(&list[..CAPACITY - 2], &[Color::WHITE; CAPACITY - 2][..]);
        assert_eq!(&list[CAPACITY - 2..], &[shade(1), shade(2)][..]);
    }

    #[test]
    fn test_recording_white_into_fresh_palette_is_noop() {
        let mut palette = Palette::new();
        assert!(!palette.record(Color::WHITE));
        assert!(palette.is_empty());
    }

    #[test]
    fn test_repeat_record_keeps_position() {
        let mut palette = Palette::new();
        palette.record(shade(1));
        palette.record(shade(2));
        palette.record(shade(3));
        let before = palette.list();

        assert!(!palette.record(shade(1)));
        assert_eq!(palette.list(), before);
        assert_eq!(palette.recorded(), &[shade(1), shade(2), shade(3)]);
    }

    #[test]
    fn test_evicts_oldest_at_capacity() {
        let mut palette = Palette::new();
        for n in 0..=CAPACITY as u8 {
            palette.record(shade(n));
        }
        assert_eq!(palette.len(), CAPACITY);
        assert_eq!(palette.get(0), Some(shade(1)));
        assert_eq!(palette.get(CAPACITY - 1), Some(shade(CAPACITY as u8)));
        assert!(!palette.contains(shade(0)));
        assert!(!palette.contains(Color::WHITE));
    }

    #[test]
    fn test_white_is_recordable_once_placeholders_are_gone() {
        let mut palette = Palette::new();
        for n in 0..CAPACITY as u8 {
            palette.record(shade(n));
        }
        assert!(palette.record(Color::WHITE));
        assert_eq!(palette.get(CAPACITY - 1), Some(Color::WHITE));
        assert!(!palette.record(Color::WHITE));
    }

    #[test]
    fn test_get_out_of_range() {
        let palette = Palette::new();
        assert_eq!(palette.get(0), Some(Color::WHITE));
        assert_eq!(palette.get(CAPACITY), None);
    }

    #[test]
    fn test_initialize_resets() {
        let mut palette = Palette::new();
        palette.record(shade(9));
        palette.initialize();
        assert_eq!(palette, Palette::new());
    }

    #[test]
    fn test_invariants_hold_for_random_sequences() {
        let mut rng = StdRng::seed_from_u64(0x5eed);
        for _ in 0..50 {
            let mut palette = Palette::new();
            for _ in 0..200 {
                // Small value space so repeats are common.
                let color = Color::rgb(rng.random_range(0..24), 0, rng.random_range(0..2) * 255);
                let before = palette.list();
                let changed = palette.record(color);

                assert!(palette.len() <= CAPACITY);
                assert_eq!(palette.list().len(), CAPACITY);
                let recorded = palette.recorded();
                for (i, a) in recorded.iter().enumerate() {
                    assert!(!recorded[i + 1..].contains(a), "duplicate {a}");
                }
                if !changed {
                    assert_eq!(palette.list(), before);
                }
                assert!(palette.contains(color));
            }
        }
    }
}
