//! Parsed text patterns.
//!
//! A pattern such as `"### (###) ###-##-##"` is a run of slots: each grapheme
//! is either the placeholder symbol (filled by one user character) or a
//! literal copied into the formatted text.

use crate::unicode::split_graphemes;
use std::fmt;
use std::ops::Range;

/// Placeholder symbol used when none is configured.
pub const DEFAULT_PATTERN_SYMBOL: char = '#';

/// One grapheme of a pattern.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PatternToken {
    /// Slot for a single raw character.
    Placeholder,
    /// Text emitted verbatim.
    Literal(String),
}

impl PatternToken {
    #[must_use]
    pub const fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder)
    }
}

/// Immutable, pre-parsed pattern.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Pattern {
    source: String,
    symbol: char,
    tokens: Vec<PatternToken>,
    placeholders: usize,
}

impl Pattern {
    /// Parse `text` using `symbol` as the placeholder.
    #[must_use]
    pub fn new(text: &str, symbol: char) -> Self {
        let mut buf = [0u8; 4];
        let symbol_str: &str = symbol.encode_utf8(&mut buf);

        let tokens: Vec<PatternToken> = split_graphemes(text)
            .into_iter()
            .map(|g| {
                if g == symbol_str {
                    PatternToken::Placeholder
                } else {
                    PatternToken::Literal(g.to_string())
                }
            })
            .collect();
        let placeholders = tokens.iter().filter(|t| t.is_placeholder()).count();

        Self {
            source: text.to_string(),
            symbol,
            tokens,
            placeholders,
        }
    }

    /// Pattern source text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    #[must_use]
    pub const fn symbol(&self) -> char {
        self.symbol
    }

    /// Length in graphemes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[must_use]
    pub fn tokens(&self) -> &[PatternToken] {
        &self.tokens
    }

    #[must_use]
    pub fn token(&self, index: usize) -> Option<&PatternToken> {
        self.tokens.get(index)
    }

    #[must_use]
    pub fn is_placeholder(&self, index: usize) -> bool {
        self.tokens.get(index).is_some_and(PatternToken::is_placeholder)
    }

    /// Number of fillable slots.
    #[must_use]
    pub const fn placeholder_count(&self) -> usize {
        self.placeholders
    }

    /// Positions of placeholders inside `range`, in ascending order.
    pub fn placeholder_positions(&self, range: Range<usize>) -> impl Iterator<Item = usize> + '_ {
        let range = self.clamp(range);
        let start = range.start;
        self.tokens[range]
            .iter()
            .enumerate()
            .filter(|(_, t)| t.is_placeholder())
            .map(move |(i, _)| start + i)
    }

    /// Number of literal tokens inside `range`.
    #[must_use]
    pub fn literal_count(&self, range: Range<usize>) -> usize {
        let range = self.clamp(range);
        self.tokens[range]
            .iter()
            .filter(|t| !t.is_placeholder())
            .count()
    }

    fn clamp(&self, range: Range<usize>) -> Range<usize> {
        let end = range.end.min(self.tokens.len());
        range.start.min(end)..end
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
