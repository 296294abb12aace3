//! The `run` command: a REPL over a loaded script.

use std::io::{self, Write};

use gx_eval::Interpreter;

use crate::LineInput;

/// Read lines until end of input.
///
/// A `name = expr` line binds; any other line is forced and printed,
/// followed by whatever it drew. Errors are printed and the session goes
/// on with the environment intact.
pub fn repl(interp: &mut Interpreter, input: &LineInput, out: &mut impl Write) -> io::Result<()> {
    while let Some(line) = input.next_line()? {
        if line.trim().is_empty() {
            continue;
        }
        interp.screen_mut().clear();
        let shown = interp
            .execute_line(&line)
            .and_then(|value| value.map(|v| interp.display(v)).transpose());
        match shown {
            Ok(Some(text)) => writeln!(out, "{text}")?,
            Ok(None) => {}
            Err(err) => writeln!(out, "error: {err}")?,
        }
        if !interp.screen().is_empty() {
            write!(out, "{}", interp.screen().render_ascii())?;
        }
        out.flush()?;
    }
    Ok(())
}
