//! Masked input formatting for text fields.
//!
//! A text field reports edits as "replace `range` of the displayed text with
//! `replacement`". [`PatternInputFormatter::format_input`] turns that into the
//! new displayed text plus the caret offset to apply.
//!
//! # Examples
//!
//! ```
//! use textmask::{PatternInputFormatter, TextInputFormatter};
//!
//! let formatter = PatternInputFormatter::new("###-###");
//!
//! // Typing '4' after "123" inserts the literal and skips the caret past it
//! let value = formatter.format_input(Some("123"), 3..3, "4");
//! assert_eq!(value.formatted_text, "123-4");
//! assert_eq!(value.caret_begin_offset, 5);
//!
//! // Backspace over the '4' pulls the caret back before the literal
//! let value = formatter.format_input(Some("123-4"), 4..5, "");
//! assert_eq!(value.formatted_text, "123");
//! assert_eq!(value.caret_begin_offset, 3);
//! ```

use crate::caret::CaretPositionCorrector;
use crate::error::{Error, Result};
use crate::event::{LogLevel, emit_log_with};
use crate::formatter::{PatternFormatter, TextFormatter};
use crate::options::FormatterOptions;
use crate::pattern::Pattern;
use crate::unicode::{
    WidthMethod, grapheme_byte_offset, grapheme_count, prefix_width, width_method,
};
use std::ops::Range;

/// Outcome of one edit: the text to display and where the caret goes.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct FormattedTextValue {
    pub formatted_text: String,
    /// Caret position in graphemes, `0..=grapheme_count(formatted_text)`.
    pub caret_begin_offset: usize,
}

impl FormattedTextValue {
    #[must_use]
    pub const fn new(formatted_text: String, caret_begin_offset: usize) -> Self {
        Self {
            formatted_text,
            caret_begin_offset,
        }
    }

    /// Caret position as a byte index into `formatted_text`.
    #[must_use]
    pub fn caret_byte_offset(&self) -> usize {
        grapheme_byte_offset(&self.formatted_text, self.caret_begin_offset)
    }

    /// Caret position in terminal columns (global width method).
    #[must_use]
    pub fn caret_column(&self) -> usize {
        self.caret_column_with_method(width_method())
    }

    #[must_use]
    pub fn caret_column_with_method(&self, method: WidthMethod) -> usize {
        prefix_width(&self.formatted_text, self.caret_begin_offset, method)
    }
}

/// A [`TextFormatter`] that can also apply edits made in a text field.
pub trait TextInputFormatter: TextFormatter {
    /// Apply an edit expressed in formatted-text grapheme coordinates.
    ///
    /// Absent `current_text` is treated as empty.
    fn format_input(
        &self,
        current_text: Option<&str>,
        range: Range<usize>,
        replacement: &str,
    ) -> FormattedTextValue;
}

/// Input formatter pairing a [`PatternFormatter`] with a
/// [`CaretPositionCorrector`] over the same pattern.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatternInputFormatter {
    formatter: PatternFormatter,
    caret: CaretPositionCorrector,
}

impl PatternInputFormatter {
    /// Create an input formatter using the default `#` placeholder.
    #[must_use]
    pub fn new(pattern: &str) -> Self {
        Self::from_formatter(PatternFormatter::new(pattern))
    }

    #[must_use]
    pub fn with_symbol(pattern: &str, symbol: char) -> Self {
        Self::from_formatter(PatternFormatter::with_symbol(pattern, symbol))
    }

    #[must_use]
    pub fn with_options(pattern: &str, options: FormatterOptions) -> Self {
        Self::from_formatter(PatternFormatter::with_options(pattern, options))
    }

    /// Create an input formatter, validating the placeholder symbol.
    pub fn try_new(pattern: &str, options: FormatterOptions) -> Result<Self> {
        PatternFormatter::try_new(pattern, options).map(Self::from_formatter)
    }

    #[must_use]
    pub fn from_formatter(formatter: PatternFormatter) -> Self {
        let caret = CaretPositionCorrector::new(formatter.pattern().clone());
        Self { formatter, caret }
    }

    #[must_use]
    pub const fn formatter(&self) -> &PatternFormatter {
        &self.formatter
    }

    #[must_use]
    pub const fn caret_corrector(&self) -> &CaretPositionCorrector {
        &self.caret
    }

    #[must_use]
    pub const fn pattern(&self) -> &Pattern {
        self.formatter.pattern()
    }

    /// [`format_input`](TextInputFormatter::format_input) that rejects
    /// ranges outside the current text instead of clamping them.
    pub fn try_format_input(
        &self,
        current_text: Option<&str>,
        range: Range<usize>,
        replacement: &str,
    ) -> Result<FormattedTextValue> {
        if range.start > range.end {
            return Err(Error::InvalidRange {
                start: range.start,
                end: range.end,
            });
        }
        let len = current_text.map_or(0, grapheme_count);
        if range.end > len {
            return Err(Error::RangeOutOfBounds {
                start: range.start,
                end: range.end,
                len,
            });
        }
        Ok(self.format_input(current_text, range, replacement))
    }
}

impl TextFormatter for PatternInputFormatter {
    fn format(&self, raw: &str) -> String {
        self.formatter.format(raw)
    }

    fn unformat(&self, formatted: &str) -> String {
        self.formatter.unformat(formatted)
    }
}

impl TextInputFormatter for PatternInputFormatter {
    fn format_input(
        &self,
        current_text: Option<&str>,
        range: Range<usize>,
        replacement: &str,
    ) -> FormattedTextValue {
        let current_text = current_text.unwrap_or_default();
        let filter = self.formatter.options().input_filter;
        let filtered = filter.apply(replacement);

        // Typed text that filters down to nothing must not act as a deletion.
        if filtered.is_empty() && !replacement.is_empty() {
            emit_log_with(LogLevel::Debug, || {
                format!("input filter {filter:?} rejected {replacement:?} at {range:?}")
            });
            let caret = range.start.min(grapheme_count(current_text));
            return FormattedTextValue::new(current_text.to_string(), caret);
        }
        let replacement = filtered;

        let raw_range = self.formatter.unformatted_range(range.clone());
        let old_raw = self.formatter.unformat(current_text);
        let new_raw = replace_graphemes(&old_raw, raw_range, &replacement);

        let new_raw_len = grapheme_count(&new_raw);
        let slots = self.formatter.placeholder_count();
        if new_raw_len > slots {
            emit_log_with(LogLevel::Debug, || {
                format!(
                    "dropping {} grapheme(s) past the last of {slots} slot(s)",
                    new_raw_len - slots
                )
            });
        }

        let formatted_text = self.formatter.format(&new_raw);
        let formatted_len = grapheme_count(&formatted_text);
        let caret = self
            .caret
            .calculate_caret_position_offset(range, &replacement);
        if caret > formatted_len {
            emit_log_with(LogLevel::Warn, || {
                format!("caret {caret} clamped to text length {formatted_len}")
            });
        }

        FormattedTextValue::new(formatted_text, caret.min(formatted_len))
    }
}

/// Replace the graphemes in `range` of `text`, clamping the range to the text.
fn replace_graphemes(text: &str, range: Range<usize>, replacement: &str) -> String {
    let start = grapheme_byte_offset(text, range.start);
    let end = grapheme_byte_offset(text, range.end.max(range.start));

    let mut out = String::with_capacity(text.len() - (end - start) + replacement.len());
    out.push_str(&text[..start]);
    out.push_str(replacement);
    out.push_str(&text[end..]);
    out
}
