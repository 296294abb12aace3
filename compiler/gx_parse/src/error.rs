//! Parse errors.

use std::fmt;

/// What went wrong while parsing a line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// The line ended while an expression was still expected.
    UnexpectedEnd { expected: &'static str },
    /// A token that cannot appear here.
    UnexpectedToken {
        found: String,
        expected: &'static str,
    },
    /// Tokens left over after a complete expression.
    TrailingTokens { found: String },
    /// A script line that is not of the form `name = expr`, or whose
    /// left-hand side cannot be a name.
    InvalidBinding { found: String },
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEnd { expected } => {
                write!(f, "unexpected end of line, expected {expected}")
            }
            Self::UnexpectedToken { found, expected } => {
                write!(f, "unexpected `{found}`, expected {expected}")
            }
            Self::TrailingTokens { found } => {
                write!(f, "unexpected `{found}` after a complete expression")
            }
            Self::InvalidBinding { found } => {
                write!(f, "expected `name = expression`, found `{found}`")
            }
        }
    }
}

/// A parse failure, optionally tagged with its 1-based script line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub line: Option<usize>,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind) -> Self {
        ParseError { kind, line: None }
    }

    /// Attach the script line the error occurred on.
    #[must_use]
    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    #[cold]
    pub(crate) fn unexpected_end(expected: &'static str) -> Self {
        Self::new(ParseErrorKind::UnexpectedEnd { expected })
    }

    #[cold]
    pub(crate) fn unexpected_token(found: &str, expected: &'static str) -> Self {
        Self::new(ParseErrorKind::UnexpectedToken {
            found: found.to_string(),
            expected,
        })
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(line) = self.line {
            write!(f, "line {line}: ")?;
        }
        write!(f, "{}", self.kind)
    }
}

impl std::error::Error for ParseError {}
