//! Error types for textmask.

use std::fmt;

/// Result type alias for textmask operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the checked entry points.
///
/// The core formatting operations are total and never fail; these errors are
/// only produced by constructors and methods prefixed with `try_`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The placeholder symbol cannot stand alone as a grapheme cluster
    /// (control characters, combining marks, joiners).
    InvalidPatternSymbol(char),
    /// Edit range with `start > end`.
    InvalidRange { start: usize, end: usize },
    /// Edit range extends past the end of the current text.
    RangeOutOfBounds { start: usize, end: usize, len: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPatternSymbol(c) => {
                write!(f, "invalid pattern symbol: {c:?} (U+{:04X})", u32::from(*c))
            }
            Self::InvalidRange { start, end } => {
                write!(f, "invalid range: start {start} is after end {end}")
            }
            Self::RangeOutOfBounds { start, end, len } => {
                write!(f, "range {start}..{end} out of bounds for text of length {len}")
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidPatternSymbol('\u{0301}');
        assert!(err.to_string().contains("U+0301"));

        let err = Error::InvalidRange { start: 4, end: 2 };
        assert!(err.to_string().contains("start 4 is after end 2"));

        let err = Error::RangeOutOfBounds {
            start: 3,
            end: 9,
            len: 5,
        };
        assert!(err.to_string().contains("3..9"));
        assert!(err.to_string().contains("length 5"));
    }

    #[test]
    fn test_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(Error::InvalidRange { start: 1, end: 0 });
        assert!(err.source().is_none());
    }
}
