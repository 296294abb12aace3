//! Driver configuration from flags and environment variables.
//!
//! | Flag | Variable | Default |
//! |---|---|---|
//! | `--endpoint=<url>` | `GALAXY_ENDPOINT` | `https://icfpc2020-api.testkontur.ru` |
//! | `--api-key=<key>` | `GALAXY_API_KEY` | none |
//! | `--transport=http\|console\|none` | | `http` |
//! | `--protocol=<name>` | | `galaxy` |
//! | `--timeout=<secs>` | | `30` |
//!
//! Flags win over variables.

use std::time::Duration;

pub const DEFAULT_ENDPOINT: &str = "https://icfpc2020-api.testkontur.ru";
pub const DEFAULT_PROTOCOL: &str = "galaxy";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Which transport backs `send`.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum TransportKind {
    /// POST to the configured endpoint.
    #[default]
    Http,
    /// Print requests, read replies from stdin.
    Console,
    /// Every `send` fails.
    None,
}

impl TransportKind {
    fn parse(value: &str) -> Option<Self> {
        match value {
            "http" => Some(TransportKind::Http),
            "console" => Some(TransportKind::Console),
            "none" => Some(TransportKind::None),
            _ => None,
        }
    }
}

/// Invalid command-line configuration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown option `{0}`")]
    UnknownFlag(String),

    #[error("invalid value `{value}` for `--{flag}`")]
    InvalidValue { flag: &'static str, value: String },
}

/// Resolved driver settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub endpoint: String,
    pub api_key: Option<String>,
    pub transport: TransportKind,
    pub protocol: String,
    pub timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            api_key: None,
            transport: TransportKind::default(),
            protocol: DEFAULT_PROTOCOL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Split `args` into settings and positional arguments, reading the
    /// process environment for defaults.
    pub fn from_args(args: &[String]) -> Result<(Config, Vec<String>), ConfigError> {
        Self::parse(args, |key| std::env::var(key).ok())
    }

    /// Like `from_args`, with an explicit environment lookup.
    pub fn parse(
        args: &[String],
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<(Config, Vec<String>), ConfigError> {
        let mut config = Config::default();
        if let Some(endpoint) = env("GALAXY_ENDPOINT").filter(|v| !v.is_empty()) {
            config.endpoint = endpoint;
        }
        config.api_key = env("GALAXY_API_KEY").filter(|v| !v.is_empty());

        let mut positional = Vec::new();
        for arg in args {
            if arg.starts_with("--") {
                config.apply_flag(arg)?;
            } else {
                positional.push(arg.clone());
            }
        }
        Ok((config, positional))
    }

    fn apply_flag(&mut self, arg: &str) -> Result<(), ConfigError> {
        let (flag, value) = arg
            .strip_prefix("--")
            .and_then(|rest| rest.split_once('='))
            .ok_or_else(|| ConfigError::UnknownFlag(arg.to_string()))?;

        match flag {
            "endpoint" => self.endpoint = value.trim_end_matches('/').to_string(),
            "api-key" => self.api_key = Some(value.to_string()).filter(|v| !v.is_empty()),
            "transport" => {
                self.transport = TransportKind::parse(value).ok_or_else(|| {
                    ConfigError::InvalidValue {
                        flag: "transport",
                        value: value.to_string(),
                    }
                })?;
            }
            "protocol" => self.protocol = value.to_string(),
            "timeout" => {
                let secs = value
                    .parse::<u64>()
                    .ok()
                    .filter(|&s| s > 0)
                    .ok_or_else(|| ConfigError::InvalidValue {
                        flag: "timeout",
                        value: value.to_string(),
                    })?;
                self.timeout = Duration::from_secs(secs);
            }
            _ => return Err(ConfigError::UnknownFlag(arg.to_string())),
        }
        Ok(())
    }

    /// Where `send` posts its requests.
    pub fn send_url(&self) -> String {
        let base = self.endpoint.trim_end_matches('/');
        match &self.api_key {
            Some(key) => format!("{base}/aliens/send?apiKey={key}"),
            None => format!("{base}/aliens/send"),
        }
    }
}
