//! The `mod`, `dem` and `send` commands.

use gx_eval::Transport;
use gx_modem::{demodulate, modulate, Data};

use super::CommandError;

/// Textual data to its signal.
pub fn modulate_text(text: &str) -> Result<String, CommandError> {
    let data: Data = text.parse()?;
    Ok(modulate(&data))
}

/// A signal to its textual data form.
pub fn demodulate_text(bits: &str) -> Result<String, CommandError> {
    Ok(demodulate(bits)?.to_string())
}

/// One round trip of textual data; returns the decoded reply.
pub fn send_text(transport: &mut dyn Transport, text: &str) -> Result<String, CommandError> {
    let request = modulate_text(text)?;
    let reply = transport.round_trip(&request)?;
    demodulate_text(&reply)
}
