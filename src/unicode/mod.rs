//! Unicode utilities for grapheme-indexed text and display width.
//!
//! Every offset in this crate counts extended grapheme clusters, so a flag
//! emoji or an `e` with a combining accent fills exactly one pattern slot.

mod grapheme;
mod width;

pub use grapheme::{
    grapheme_byte_offset, grapheme_count, graphemes, is_standalone_grapheme, split_graphemes,
};
pub use width::{
    WidthMethod, display_width, display_width_with_method, prefix_width, set_width_method,
    width_method,
};
