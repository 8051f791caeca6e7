//! Formatter configuration.

use crate::pattern::DEFAULT_PATTERN_SYMBOL;
use bitflags::bitflags;

bitflags! {
    /// Character classes accepted from user input.
    ///
    /// Replacement text is filtered grapheme by grapheme before it reaches
    /// the pattern; a grapheme passes when its first `char` belongs to one of
    /// the enabled classes.
    #[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
    pub struct InputFilter: u8 {
        /// Unicode decimal and other numeric characters.
        const DIGITS      = 0x01;
        /// Alphabetic characters.
        const LETTERS     = 0x02;
        /// Spaces, tabs and other whitespace.
        const WHITESPACE  = 0x04;
        /// ASCII punctuation.
        const PUNCTUATION = 0x08;
        /// Anything not covered above (emoji, symbols, marks).
        const SYMBOLS     = 0x10;
        /// No filtering.
        const ALL = Self::DIGITS.bits()
            | Self::LETTERS.bits()
            | Self::WHITESPACE.bits()
            | Self::PUNCTUATION.bits()
            | Self::SYMBOLS.bits();
        /// Digits only, the usual choice for phone and card masks.
        const NUMERIC = Self::DIGITS.bits();
        /// Letters and digits.
        const ALPHANUMERIC = Self::DIGITS.bits() | Self::LETTERS.bits();
    }
}

impl Default for InputFilter {
    fn default() -> Self {
        Self::ALL
    }
}

impl InputFilter {
    /// Class of a single character.
    #[must_use]
    pub fn classify(c: char) -> Self {
        if c.is_numeric() {
            Self::DIGITS
        } else if c.is_alphabetic() {
            Self::LETTERS
        } else if c.is_whitespace() {
            Self::WHITESPACE
        } else if c.is_ascii_punctuation() {
            Self::PUNCTUATION
        } else {
            Self::SYMBOLS
        }
    }

    /// Whether a grapheme cluster passes the filter.
    #[must_use]
    pub fn accepts(self, grapheme: &str) -> bool {
        if self.contains(Self::ALL) {
            return true;
        }
        grapheme
            .chars()
            .next()
            .is_some_and(|c| self.intersects(Self::classify(c)))
    }

    /// Keep only the accepted graphemes of `text`.
    #[must_use]
    pub fn apply(self, text: &str) -> String {
        if self.contains(Self::ALL) {
            return text.to_string();
        }
        crate::unicode::graphemes(text)
            .filter(|g| self.accepts(g))
            .collect()
    }
}

/// Formatter configuration options.
///
/// The pattern itself is passed separately; these options tune how it is
/// applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FormatterOptions {
    /// Pattern grapheme that marks a slot for user input.
    pub pattern_symbol: char,
    /// Character classes accepted from edits.
    pub input_filter: InputFilter,
}

impl Default for FormatterOptions {
    fn default() -> Self {
        Self {
            pattern_symbol: DEFAULT_PATTERN_SYMBOL,
            input_filter: InputFilter::ALL,
        }
    }
}

impl FormatterOptions {
    #[must_use]
    pub const fn with_pattern_symbol(mut self, symbol: char) -> Self {
        self.pattern_symbol = symbol;
        self
    }

    #[must_use]
    pub const fn with_input_filter(mut self, filter: InputFilter) -> Self {
        self.input_filter = filter;
        self
    }
}
