//! Transport boundary for `send`.
//!
//! The evaluator hands a modulated request to a [`Transport`] and expects a
//! modulated reply back. Real network and console transports live in the
//! command-line driver; this crate only ships the null transport and a
//! scripted one for tests and offline runs.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// A synchronous request/response channel carrying bit-strings.
pub trait Transport {
    /// Send `request` and block until the reply arrives.
    fn round_trip(&mut self, request: &str) -> Result<String, TransportError>;
}

/// Failure of a round trip.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("no transport is configured")]
    Unavailable,

    #[error("server answered with HTTP status {status}")]
    Http { status: u16 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("request failed: {0}")]
    Request(String),
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn round_trip(&mut self, request: &str) -> Result<String, TransportError> {
        (**self).round_trip(request)
    }
}

/// Rejects every request.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoTransport;

impl Transport for NoTransport {
    fn round_trip(&mut self, _request: &str) -> Result<String, TransportError> {
        Err(TransportError::Unavailable)
    }
}

#[derive(Debug, Default)]
struct Script {
    replies: VecDeque<String>,
    requests: Vec<String>,
}

/// Replays canned replies in order and records every request.
///
/// Clones share one script, so a test can keep a handle after giving the
/// transport to an interpreter.
#[derive(Clone, Debug, Default)]
pub struct ScriptedTransport {
    script: Rc<RefCell<Script>>,
}

impl ScriptedTransport {
    pub fn new<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ScriptedTransport {
            script: Rc::new(RefCell::new(Script {
                replies: replies.into_iter().map(Into::into).collect(),
                requests: Vec::new(),
            })),
        }
    }

    /// Requests received so far, oldest first.
    pub fn requests(&self) -> Vec<String> {
        self.script.borrow().requests.clone()
    }

    /// Replies not consumed yet.
    pub fn remaining(&self) -> usize {
        self.script.borrow().replies.len()
    }
}

impl Transport for ScriptedTransport {
    fn round_trip(&mut self, request: &str) -> Result<String, TransportError> {
        let mut script = self.script.borrow_mut();
        script.requests.push(request.to_string());
        script
            .replies
            .pop_front()
            .ok_or_else(|| TransportError::Request("scripted replies exhausted".to_string()))
    }
}

#[cfg(test)]
mod tests;
