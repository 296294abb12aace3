//! Codec and textual-form errors.

/// Failure to decode a signal.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ModemError {
    #[error("signal ended unexpectedly at bit {at}")]
    UnexpectedEnd { at: usize },

    #[error("invalid character {found:?} at bit {at}, expected '0' or '1'")]
    InvalidBit { found: char, at: usize },

    #[error("{remaining} trailing bits after signal ending at bit {at}")]
    TrailingBits { at: usize, remaining: usize },
}

/// Failure to read the textual form of a value.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DataParseError {
    #[error("unexpected end of input, expected {expected}")]
    UnexpectedEnd { expected: &'static str },

    #[error("unexpected token `{found}`, expected {expected}")]
    UnexpectedToken {
        found: String,
        expected: &'static str,
    },

    #[error("unexpected `{found}` after a complete value")]
    TrailingInput { found: String },
}
