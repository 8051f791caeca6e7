//! Pattern formatter: raw text to formatted text and back.
//!
//! # Examples
//!
//! ```
//! use textmask::{PatternFormatter, TextFormatter};
//!
//! let formatter = PatternFormatter::new("### (###) ###-##-##");
//! assert_eq!(formatter.format("1234567890"), "123 (456) 789-0");
//! assert_eq!(formatter.unformat("123 (456) 789-0"), "1234567890");
//! ```

use crate::error::{Error, Result};
use crate::options::FormatterOptions;
use crate::pattern::{Pattern, PatternToken};
use crate::unicode::{graphemes, is_standalone_grapheme};
use std::ops::Range;

/// Converts between raw user input and its formatted display form.
pub trait TextFormatter {
    /// Apply the pattern to raw text.
    fn format(&self, raw: &str) -> String;

    /// Strip pattern literals from formatted text.
    fn unformat(&self, formatted: &str) -> String;

    /// [`format`](Self::format) that propagates absent input.
    fn format_opt(&self, raw: Option<&str>) -> Option<String> {
        raw.map(|raw| self.format(raw))
    }

    /// [`unformat`](Self::unformat) that propagates absent input.
    fn unformat_opt(&self, formatted: Option<&str>) -> Option<String> {
        formatted.map(|formatted| self.unformat(formatted))
    }
}

/// Formatter driven by a literal/placeholder [`Pattern`].
///
/// Stateless between calls: the pattern and options are fixed at
/// construction, so one instance can be shared across threads.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternFormatter {
    pattern: Pattern,
    options: FormatterOptions,
}

impl PatternFormatter {
    /// Create a formatter using the default `#` placeholder.
    #[must_use]
    pub fn new(pattern: &str) -> Self {
        Self::with_options(pattern, FormatterOptions::default())
    }

    /// Create a formatter with a custom placeholder symbol.
    #[must_use]
    pub fn with_symbol(pattern: &str, symbol: char) -> Self {
        Self::with_options(pattern, FormatterOptions::default().with_pattern_symbol(symbol))
    }

    #[must_use]
    pub fn with_options(pattern: &str, options: FormatterOptions) -> Self {
        Self {
            pattern: Pattern::new(pattern, options.pattern_symbol),
            options,
        }
    }

    /// Create a formatter, rejecting placeholder symbols that cannot occupy
    /// a grapheme slot of their own.
    pub fn try_new(pattern: &str, options: FormatterOptions) -> Result<Self> {
        if !is_standalone_grapheme(options.pattern_symbol) {
            return Err(Error::InvalidPatternSymbol(options.pattern_symbol));
        }
        Ok(Self::with_options(pattern, options))
    }

    #[must_use]
    pub const fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    #[must_use]
    pub const fn pattern_symbol(&self) -> char {
        self.pattern.symbol()
    }

    #[must_use]
    pub const fn options(&self) -> FormatterOptions {
        self.options
    }

    #[must_use]
    pub const fn placeholder_count(&self) -> usize {
        self.pattern.placeholder_count()
    }

    /// Whether every placeholder of the pattern is filled in `formatted`.
    #[must_use]
    pub fn is_complete(&self, formatted: &str) -> bool {
        crate::unicode::grapheme_count(&self.unformat(formatted)) >= self.placeholder_count()
    }

    /// Map a range in formatted-text coordinates to raw-text coordinates.
    ///
    /// Literal slots before the range shift its start left; literal slots
    /// inside it shrink its length.
    #[must_use]
    pub fn unformatted_range(&self, range: Range<usize>) -> Range<usize> {
        let length = range.end.saturating_sub(range.start);
        let start = range.start - self.pattern.literal_count(0..range.start);
        let length = length - self.pattern.literal_count(range.start..range.end);
        start..start + length
    }
}

impl TextFormatter for PatternFormatter {
    fn format(&self, raw: &str) -> String {
        let mut formatted = String::with_capacity(raw.len() + self.pattern.as_str().len());
        let mut raw = graphemes(raw).peekable();

        for token in self.pattern.tokens() {
            if raw.peek().is_none() {
                break;
            }
            match token {
                PatternToken::Placeholder => {
                    if let Some(g) = raw.next() {
                        formatted.push_str(g);
                    }
                }
                PatternToken::Literal(literal) => formatted.push_str(literal),
            }
        }
        formatted
    }

    fn unformat(&self, formatted: &str) -> String {
        let tokens = self.pattern.tokens();
        let mut unformatted = String::with_capacity(formatted.len());
        let mut rest = formatted;
        let mut index = 0;

        while !rest.is_empty() {
            let Some(token) = tokens.get(index) else {
                unformatted.push_str(rest);
                break;
            };
            index += 1;

            // Prefix match: the raw grapheme after a literal can fuse with it
            // into one cluster ("a" + U+0301, "\r" + "\n").
            if let PatternToken::Literal(literal) = token {
                if rest.starts_with(literal.as_str()) {
                    rest = &rest[literal.len()..];
                    continue;
                }
            }

            let Some(grapheme) = graphemes(rest).next() else {
                break;
            };
            let mut end = grapheme.len();
            if let Some(PatternToken::Literal(next)) = tokens.get(index) {
                if !rest[end..].starts_with(next.as_str()) {
                    end = fused_literal_start(rest, end, next).unwrap_or(end);
                }
            }
            unformatted.push_str(&rest[..end]);
            rest = &rest[end..];
        }
        unformatted
    }
}

/// Byte offset inside the first grapheme of `rest` (`..end`) where `literal`
/// begins, when the literal fused onto that grapheme (regional indicators
/// pairing up, `"\r"` + `"\n"`).
///
/// Literals are only emitted when more raw text follows, so a literal that
/// ends the text does not count.
fn fused_literal_start(rest: &str, end: usize, literal: &str) -> Option<usize> {
    (1..end)
        .filter(|&k| rest.is_char_boundary(k))
        .find(|&k| rest[k..].starts_with(literal) && rest.len() > k + literal.len())
}
