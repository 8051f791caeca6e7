//! Caret placement after a masked edit.
//!
//! The corrector works purely on the pattern: it never looks at the text
//! being edited, only at where the edit happened and how much was typed.
//! Offsets are in pattern (formatted-text) grapheme coordinates.

use crate::pattern::Pattern;
use crate::unicode::grapheme_count;
use std::ops::Range;

/// Computes where the caret lands after an edit so that it skips over
/// literals instead of jumping with them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CaretPositionCorrector {
    pattern: Pattern,
}

impl CaretPositionCorrector {
    #[must_use]
    pub const fn new(pattern: Pattern) -> Self {
        Self { pattern }
    }

    #[must_use]
    pub const fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Caret offset for replacing `range` with `replacement`.
    ///
    /// An empty replacement is a deletion; anything else is an insertion of
    /// `replacement`'s grapheme count.
    #[must_use]
    pub fn calculate_caret_position_offset(&self, range: Range<usize>, replacement: &str) -> usize {
        if replacement.is_empty() {
            self.offset_for_remove(range.start)
        } else {
            self.offset_for_insert(range.start, grapheme_count(replacement))
        }
    }

    /// Caret offset after deleting at `location`: just past the nearest
    /// placeholder strictly before it, or `0`.
    #[must_use]
    pub fn offset_for_remove(&self, location: usize) -> usize {
        self.pattern
            .placeholder_positions(0..location)
            .last()
            .map_or(0, |index| index + 1)
    }

    /// Caret offset after inserting `replacement_len` graphemes at
    /// `location`: just past the `replacement_len`-th placeholder at or after
    /// `location`, or the pattern end when too few remain.
    #[must_use]
    pub fn offset_for_insert(&self, location: usize, replacement_len: usize) -> usize {
        if replacement_len == 0 {
            return self.offset_for_remove(location);
        }
        self.pattern
            .placeholder_positions(location..self.pattern.len())
            .nth(replacement_len - 1)
            .map_or(self.pattern.len(), |index| index + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corrector(pattern: &str) -> CaretPositionCorrector {
        CaretPositionCorrector::new(Pattern::new(pattern, '#'))
    }

    #[test]
    fn test_remove_skips_back_over_literal() {
        let c = corrector("###-###");
        // Deleting at 5 lands after placeholder 4
        assert_eq!(c.offset_for_remove(5), 5);
        // Deleting at 4 skips the '-' at 3 and lands after placeholder 2
        assert_eq!(c.offset_for_remove(4), 3);
        assert_eq!(c.offset_for_remove(3), 3);
        assert_eq!(c.offset_for_remove(1), 1);
    }

    #[test]
    fn test_remove_at_start() {
        let c = corrector("###-###");
        assert_eq!(c.offset_for_remove(0), 0);
        let c = corrector("(###)");
        assert_eq!(c.offset_for_remove(1), 0);
    }

    #[test]
    fn test_remove_past_pattern_clamps() {
        let c = corrector("###-###");
        assert_eq!(c.offset_for_remove(42), 7);
    }

    #[test]
    fn test_insert_moves_past_literal() {
        let c = corrector("###-###");
        // Typing the third digit
        assert_eq!(c.offset_for_insert(2, 1), 3);
        // Typing at the literal fills slot 4
        assert_eq!(c.offset_for_insert(3, 1), 5);
        // Pasting two digits across the literal
        assert_eq!(c.offset_for_insert(2, 2), 5);
    }

    #[test]
    fn test_insert_snaps_to_end_when_slots_run_out() {
        let c = corrector("###-###");
        assert_eq!(c.offset_for_insert(7, 1), 7);
        assert_eq!(c.offset_for_insert(5, 3), 7);
        assert_eq!(c.offset_for_insert(100, 1), 7);
    }

    #[test]
    fn test_leading_literal_insert() {
        let c = corrector("+7 (###) ###");
        assert_eq!(c.offset_for_insert(0, 1), 5);
    }

    #[test]
    fn test_calculate_dispatches_on_replacement() {
        let c = corrector("###-###");
        assert_eq!(c.calculate_caret_position_offset(4..5, ""), 3);
        assert_eq!(c.calculate_caret_position_offset(3..3, "9"), 5);
        // Grapheme count, not byte length
        assert_eq!(c.calculate_caret_position_offset(0..0, "🇺🇸"), 1);
    }
}
