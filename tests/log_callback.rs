//! Diagnostics routed through the log callback.
//!
//! Kept in its own test binary so no other test swaps the global callback
//! while records are being collected.

use std::sync::{Arc, Mutex};
use textmask::{
    FormatterOptions, InputFilter, LogLevel, PatternInputFormatter, TextInputFormatter,
    clear_log_callback, set_log_callback,
};

#[test]
fn formatter_reports_overflow_rejections_and_clamping() {
    let records: Arc<Mutex<Vec<(LogLevel, String)>>> = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&records);
    set_log_callback(move |level, message| {
        sink.lock().unwrap().push((level, message.to_string()));
    });

    let f = PatternInputFormatter::with_options(
        "###-###",
        FormatterOptions::default().with_input_filter(InputFilter::NUMERIC),
    );

    // A well-formed edit logs nothing
    f.format_input(Some("12"), 2..2, "3");
    assert!(records.lock().unwrap().is_empty());

    // Typing past the last slot
    f.format_input(Some("123-456"), 7..7, "9");
    // Typing a rejected character
    f.format_input(Some("123"), 3..3, "x");
    // Editing far past the end of the text
    f.format_input(Some(""), 5..5, "12");

    clear_log_callback();
    f.format_input(Some("123-456"), 7..7, "9");

    let records = records.lock().unwrap();
    assert_eq!(records.len(), 3, "{records:?}");
    assert_eq!(records[0].0, LogLevel::Debug);
    assert!(records[0].1.contains("past the last of 6 slot(s)"));
    assert_eq!(records[1].0, LogLevel::Debug);
    assert!(records[1].1.contains("rejected \"x\""));
    assert_eq!(records[2].0, LogLevel::Warn);
    assert!(records[2].1.contains("caret 7 clamped to text length 2"));
}
