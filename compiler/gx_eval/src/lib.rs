//! Galaxy Eval - the lazy evaluator.
//!
//! An [`Interpreter`] owns everything one evaluation session needs: the
//! expression graph, the name environment, the screen buffer and a
//! [`Transport`] for `send`. Nothing is shared between instances.
//!
//! ```text
//! source ──parse──▶ Graph ──force──▶ Value ──reify──▶ Data ──modulate──▶ bits
//!                                                                    │
//!                                  Value ◀──value_from_data── Data ◀─┘ (send reply)
//! ```
//!
//! Forcing is call-by-need: every node's memo cell is written at most once,
//! so combinators that duplicate an argument expression never duplicate the
//! work of evaluating it.

mod environment;
mod errors;
mod interpreter;
mod screen;
mod transport;

pub use environment::Environment;
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use interpreter::{EvalStats, InteractOutcome, Interpreter, InterpreterBuilder};
pub use screen::Screen;
pub use transport::{NoTransport, ScriptedTransport, Transport, TransportError};
