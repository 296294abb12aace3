//! Error types for evaluation.
//!
//! `EvalErrorKind` is the structured category; factory functions
//! (`unbound_name()`, `division_by_zero()`, ...) are the public way to build
//! an [`EvalError`] and fill in both `kind` and `message`.
//!
//! Every kind is fatal for the expression being forced. The interpreter
//! stays usable afterwards: the failed node's memo cell is reset, the
//! environment is untouched.

use std::fmt;

use gx_ir::Value;
use gx_modem::ModemError;
use gx_parse::ParseError;

use crate::TransportError;

/// Result of forcing a node.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EvalErrorKind {
    // Names
    UnboundName {
        name: String,
    },
    CyclicReference {
        name: Option<String>,
    },

    // Shapes
    TypeMismatch {
        expected: &'static str,
        got: &'static str,
    },
    NotCallable {
        type_name: &'static str,
    },
    MalformedList {
        context: &'static str,
    },

    // Arithmetic
    DivisionByZero,
    /// `pwr2` of a negative exponent or of one above 65536.
    ExponentOutOfRange {
        exponent: String,
    },
    CoordinateOutOfRange {
        coordinate: String,
    },

    // Collaborators
    Modem {
        message: String,
    },
    Transport {
        message: String,
    },
    Parse {
        message: String,
    },
}

impl fmt::Display for EvalErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnboundName { name } => write!(f, "unbound name: {name}"),
            Self::CyclicReference { name: Some(name) } => {
                write!(f, "cyclic reference: `{name}` depends on itself")
            }
            Self::CyclicReference { name: None } => {
                write!(f, "cyclic reference: expression depends on itself")
            }

            Self::TypeMismatch { expected, got } => {
                write!(f, "type mismatch: expected {expected}, got {got}")
            }
            Self::NotCallable { type_name } => write!(f, "{type_name} is not callable"),
            Self::MalformedList { context } => {
                write!(f, "malformed list passed to {context}")
            }

            Self::DivisionByZero => write!(f, "division by zero"),
            Self::ExponentOutOfRange { exponent } => {
                write!(f, "pwr2 exponent {exponent} out of range")
            }
            Self::CoordinateOutOfRange { coordinate } => {
                write!(f, "coordinate {coordinate} does not fit the screen")
            }

            Self::Modem { message } => write!(f, "malformed signal: {message}"),
            Self::Transport { message } => write!(f, "transport failure: {message}"),
            Self::Parse { message } => write!(f, "parse error: {message}"),
        }
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    /// Structured error category.
    pub kind: EvalErrorKind,
    /// Human-readable message; equals `kind.to_string()`.
    pub message: String,
    /// Context collected while the error propagated outward.
    pub notes: Vec<String>,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        Self {
            kind,
            message,
            notes: Vec::new(),
        }
    }

    /// Attach a context note.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)?;
        for note in &self.notes {
            write!(f, "\n  note: {note}")?;
        }
        Ok(())
    }
}

impl std::error::Error for EvalError {}

// Factory functions

#[cold]
pub fn unbound_name(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnboundName {
        name: name.to_string(),
    })
}

#[cold]
pub fn cyclic_reference(name: Option<&str>) -> EvalError {
    EvalError::from_kind(EvalErrorKind::CyclicReference {
        name: name.map(str::to_string),
    })
}

#[cold]
pub fn type_mismatch(expected: &'static str, got: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        expected,
        got: got.type_name(),
    })
}

#[cold]
pub fn not_callable(value: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotCallable {
        type_name: value.type_name(),
    })
}

#[cold]
pub fn malformed_list(context: &'static str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::MalformedList { context })
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn exponent_out_of_range(exponent: &impl fmt::Display) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ExponentOutOfRange {
        exponent: exponent.to_string(),
    })
}

#[cold]
pub fn coordinate_out_of_range(coordinate: &impl fmt::Display) -> EvalError {
    EvalError::from_kind(EvalErrorKind::CoordinateOutOfRange {
        coordinate: coordinate.to_string(),
    })
}

#[cold]
pub fn modem(err: &ModemError) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Modem {
        message: err.to_string(),
    })
}

#[cold]
pub fn transport(err: &TransportError) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Transport {
        message: err.to_string(),
    })
}

#[cold]
pub fn parse(err: &ParseError) -> EvalError {
    EvalError::from_kind(EvalErrorKind::Parse {
        message: err.to_string(),
    })
}

#[cfg(test)]
mod tests;
