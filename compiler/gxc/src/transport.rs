//! Transports that carry `send` requests outside the process.

use std::io::Write;

use gx_eval::{NoTransport, Transport, TransportError};
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::debug;

use crate::{Config, LineInput, TransportKind};

/// Build the transport `config` asks for.
pub fn from_config(config: &Config, input: &LineInput) -> Result<Box<dyn Transport>, TransportError> {
    Ok(match config.transport {
        TransportKind::Http => Box::new(HttpTransport::new(config)?),
        TransportKind::Console => Box::new(ConsoleTransport::new(input.clone(), std::io::stderr())),
        TransportKind::None => Box::new(NoTransport),
    })
}

/// POSTs each request as a plain-text body and returns the response body.
pub struct HttpTransport {
    client: Client,
    url: String,
}

impl HttpTransport {
    pub fn new(config: &Config) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| TransportError::Request(e.to_string()))?;
        Ok(Self {
            client,
            url: config.send_url(),
        })
    }
}

impl Transport for HttpTransport {
    fn round_trip(&mut self, request: &str) -> Result<String, TransportError> {
        debug!(bits = request.len(), "POST /aliens/send");
        let response = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "text/plain")
            .body(request.to_string())
            .send()
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Http {
                status: status.as_u16(),
            });
        }
        let body = response
            .text()
            .map_err(|e| TransportError::Request(e.to_string()))?;
        Ok(body.trim().to_string())
    }
}

/// Relays requests through a human: prints the request, reads the reply.
pub struct ConsoleTransport<W> {
    input: LineInput,
    prompt: W,
}

impl<W: Write> ConsoleTransport<W> {
    pub fn new(input: LineInput, prompt: W) -> Self {
        Self { input, prompt }
    }
}

impl<W: Write> Transport for ConsoleTransport<W> {
    fn round_trip(&mut self, request: &str) -> Result<String, TransportError> {
        writeln!(self.prompt, "send> {request}")?;
        write!(self.prompt, "recv< ")?;
        self.prompt.flush()?;
        loop {
            match self.input.next_line()? {
                Some(line) if line.trim().is_empty() => {}
                Some(line) => return Ok(line.trim().to_string()),
                None => {
                    return Err(TransportError::Io(std::io::Error::new(
                        std::io::ErrorKind::UnexpectedEof,
                        "input ended while waiting for a reply",
                    )))
                }
            }
        }
    }
}
