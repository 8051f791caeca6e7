//! Fuzz target for masked edits.
//!
//! Arbitrary patterns, texts and ranges must never panic, and the caret must
//! always stay inside the resulting text.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use textmask::unicode::grapheme_count;
use textmask::{PatternInputFormatter, TextFormatter, TextInputFormatter};

#[derive(Arbitrary, Debug)]
struct Edit<'a> {
    pattern: &'a str,
    symbol: char,
    current: Option<&'a str>,
    start: u8,
    end: u8,
    replacement: &'a str,
}

fuzz_target!(|edit: Edit<'_>| {
    let f = PatternInputFormatter::with_symbol(edit.pattern, edit.symbol);

    let _ = f.format(edit.replacement);
    let _ = f.unformat(edit.current.unwrap_or_default());

    let range = usize::from(edit.start)..usize::from(edit.end);
    let value = f.format_input(edit.current, range.clone(), edit.replacement);
    assert!(value.caret_begin_offset <= grapheme_count(&value.formatted_text));
    assert!(value.caret_byte_offset() <= value.formatted_text.len());

    let _ = f.try_format_input(edit.current, range, edit.replacement);
});
