//! The `interact` command: drive a protocol with clicks from input.

use std::io::Write;

use gx_modem::Data;
use tracing::debug;

use super::CommandError;
use crate::LineInput;
use gx_eval::Interpreter;

/// Run `protocol` from state `nil` and vector `( 0 , 0 )`.
///
/// After each interaction the new state and the rendered pictures are
/// printed, then a click `x y` is read as the next vector. Ends at end of
/// input; returns the number of interactions run.
pub fn interact_loop(
    interp: &mut Interpreter,
    protocol: &str,
    input: &LineInput,
    out: &mut impl Write,
) -> Result<usize, CommandError> {
    let protocol = interp.resolve(protocol)?;
    let mut state = interp.data_node(&Data::Nil);
    let mut vector = interp.data_node(&Data::vector(0, 0));
    let mut rounds = 0;

    loop {
        interp.screen_mut().clear();
        let outcome = interp.interact(protocol, state, vector)?;
        rounds += 1;
        state = outcome.state;
        debug!(rounds, round_trips = outcome.round_trips, "interaction rendered");

        writeln!(out, "state: {}", interp.display_node(state)?)?;
        write!(out, "{}", interp.screen().render_ascii())?;

        let Some((x, y)) = read_click(input, out)? else {
            return Ok(rounds);
        };
        vector = interp.data_node(&Data::vector(x, y));
    }
}

/// Prompt until a valid click or end of input.
fn read_click(input: &LineInput, out: &mut impl Write) -> Result<Option<(i64, i64)>, CommandError> {
    loop {
        write!(out, "click> ")?;
        out.flush()?;
        let Some(line) = input.next_line()? else {
            writeln!(out)?;
            return Ok(None);
        };
        match parse_click(&line) {
            Some(click) => return Ok(Some(click)),
            None => writeln!(out, "expected `x y`, got `{}`", line.trim())?,
        }
    }
}

/// Parse `x y` or `x, y`.
pub fn parse_click(line: &str) -> Option<(i64, i64)> {
    let mut parts = line
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty());
    let x = parts.next()?.parse().ok()?;
    let y = parts.next()?.parse().ok()?;
    parts.next().is_none().then_some((x, y))
}
