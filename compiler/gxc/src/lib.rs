//! Galaxy command-line driver.
//!
//! Everything that touches the outside world lives here: reading scripts,
//! the REPL and interaction loops over stdin, the HTTP and console
//! transports, configuration and tracing setup. The evaluator crates never
//! see a socket or a terminal.

pub mod commands;
pub mod config;
pub mod input;
pub mod transport;

pub use config::{Config, ConfigError, TransportKind};
pub use input::LineInput;
pub use transport::{ConsoleTransport, HttpTransport};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing subscriber for debug output.
///
/// Call this once at startup. Respects the `RUST_LOG` environment variable:
/// - `RUST_LOG=gx_eval=debug` - interaction steps and round trips
/// - `RUST_LOG=gx_parse=trace` - every parsed line
///
/// Does nothing if `RUST_LOG` is not set. Logs go to stderr so they never
/// mix with rendered output.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_level(true),
                )
                .with(filter)
                .init();
        }
    });
}
