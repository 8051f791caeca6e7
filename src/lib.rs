//! `textmask` - pattern-masked text input formatting
//!
//! Applies literal/placeholder patterns such as `"### (###) ###-##-##"` to
//! user input, and turns text-field edits into new display text plus a caret
//! offset that skips over the pattern's literals.
//!
//! All offsets count extended grapheme clusters.
//!
//! ```
//! use textmask::{PatternInputFormatter, TextFormatter, TextInputFormatter};
//!
//! let phone = PatternInputFormatter::new("### (###) ###-##-##");
//! assert_eq!(phone.format("1234567890"), "123 (456) 789-0");
//!
//! let value = phone.format_input(Some("123 (456) 789-0"), 15..15, "1");
//! assert_eq!(value.formatted_text, "123 (456) 789-01");
//! assert_eq!(value.caret_begin_offset, 16);
//! ```

// Crate-level lint configuration
#![allow(clippy::module_name_repetitions)] // PatternFormatter in formatter etc
#![allow(clippy::missing_errors_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::must_use_candidate)] // Not every accessor needs it
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer

pub mod caret;
pub mod error;
pub mod event;
pub mod formatter;
pub mod input;
pub mod options;
pub mod pattern;
pub mod sync;
pub mod unicode;

// Re-export core types at crate root
pub use caret::CaretPositionCorrector;
pub use error::{Error, Result};
pub use event::{LogLevel, clear_log_callback, emit_log, set_log_callback};
pub use formatter::{PatternFormatter, TextFormatter};
pub use input::{FormattedTextValue, PatternInputFormatter, TextInputFormatter};
pub use options::{FormatterOptions, InputFilter};
pub use pattern::{DEFAULT_PATTERN_SYMBOL, Pattern, PatternToken};
pub use sync::{Lockable, MutexLock, SpinLock};
pub use unicode::{WidthMethod, set_width_method};
