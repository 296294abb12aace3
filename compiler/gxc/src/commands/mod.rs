//! Command implementations for the `gx` binary.
//!
//! Each command takes its input and output streams explicitly so the
//! integration tests can drive it with in-memory buffers.

mod eval;
mod interact;
mod modem;
mod run;

pub use eval::eval_expr;
pub use interact::{interact_loop, parse_click};
pub use modem::{demodulate_text, modulate_text, send_text};
pub use run::repl;

use std::path::Path;

use gx_eval::{EvalError, Interpreter, Transport, TransportError};
use gx_modem::{DataParseError, ModemError};

use crate::ConfigError;

/// Anything a command can fail with.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("cannot read `{path}`: {source}")]
    ReadScript {
        path: String,
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Eval(#[from] EvalError),

    #[error("invalid data: {0}")]
    Data(#[from] DataParseError),

    #[error("invalid signal: {0}")]
    Modem(#[from] ModemError),

    #[error("transport failure: {0}")]
    Transport(#[from] TransportError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Read a script file and bind every line of it in a fresh interpreter.
pub fn load_interpreter(
    path: &str,
    transport: Box<dyn Transport>,
) -> Result<Interpreter, CommandError> {
    let source = read_file(path)?;
    let mut interp = Interpreter::builder()
        .source_len(source.len())
        .transport(transport)
        .build();
    interp.load_script(&source)?;
    Ok(interp)
}

fn read_file(path: &str) -> Result<String, CommandError> {
    std::fs::read_to_string(Path::new(path)).map_err(|source| CommandError::ReadScript {
        path: path.to_string(),
        source,
    })
}
