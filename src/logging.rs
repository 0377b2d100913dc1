//! Tracing subscriber setup for the `jdl-json` binary
//!
//! Library code only emits `tracing` events (through
//! [`TracingLogger`](crate::logger::TracingLogger)); installing a subscriber is
//! the binary's job. Everything is written to stderr so the JSON documents
//! printed on stdout stay machine-readable.
//!
//! Environment variables:
//! - `RUST_LOG` - full filter directives, wins over `JDL_LOG_LEVEL`
//! - `JDL_LOG_LEVEL` - trace/debug/info/warn/error (default: info)
//! - `JDL_LOG_FORMAT` - compact/pretty/json (default: compact)
//! - `JDL_LOG_LOCATION` - include file:line (default: false)
//! - `JDL_LOG_ASYNC` - buffered non-blocking writer (default: false)
//! - `JDL_LOG_TARGET_FILTER` - extra comma-separated directives

use anyhow::{Context, Result};
use std::env;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

/// Output format of log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// One line per event
    Compact,
    Pretty,
    Json,
}

impl LogFormat {
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "pretty" => LogFormat::Pretty,
            "json" => LogFormat::Json,
            _ => LogFormat::Compact,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// Log level: trace/debug/info/warn/error
    pub log_level: String,
    pub format: LogFormat,
    /// Buffer log lines on a background thread
    pub async_logging: bool,
    /// Extra filter directives (comma-separated)
    pub target_filter: Option<String>,
    /// Include file:line location
    pub include_location: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            format: LogFormat::Compact,
            async_logging: false,
            target_filter: None,
            include_location: false,
        }
    }
}

impl LogConfig {
    /// Parse configuration from environment variables with defaults
    pub fn from_env() -> Self {
        let flag = |name: &str| env::var(name).ok().and_then(|s| s.parse().ok()).unwrap_or(false);
        Self {
            log_level: env::var("JDL_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            format: LogFormat::parse(&env::var("JDL_LOG_FORMAT").unwrap_or_default()),
            async_logging: flag("JDL_LOG_ASYNC"),
            target_filter: env::var("JDL_LOG_TARGET_FILTER").ok(),
            include_location: flag("JDL_LOG_LOCATION"),
        }
    }
}

fn parse_level(raw: &str) -> Level {
    match raw.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

/// Build the filter: `RUST_LOG` if set, else the configured level, plus
/// any extra target directives
fn build_filter(config: &LogConfig) -> EnvFilter {
    let level = parse_level(&config.log_level);
    let mut env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    if let Some(target_filter) = &config.target_filter {
        for filter in target_filter.split(',').map(str::trim).filter(|f| !f.is_empty()) {
            match filter.parse() {
                Ok(directive) => env_filter = env_filter.add_directive(directive),
                Err(_) => eprintln!("Warning: Invalid log filter directive: {}", filter),
            }
        }
    }
    env_filter
}

fn fmt_layer<W>(config: &LogConfig, writer: W) -> Box<dyn Layer<Registry> + Send + Sync>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_target(true)
        .with_file(config.include_location)
        .with_line_number(config.include_location);
    match config.format {
        LogFormat::Compact => layer.compact().boxed(),
        LogFormat::Pretty => layer.pretty().boxed(),
        LogFormat::Json => layer.json().with_current_span(true).boxed(),
    }
}

/// Install the global subscriber.
///
/// With async logging a [`WorkerGuard`] is returned; keep it alive until the
/// program exits or buffered lines are lost.
pub fn init_logging(config: &LogConfig) -> Result<Option<WorkerGuard>> {
    let env_filter = build_filter(config);

    if config.async_logging {
        let (non_blocking, guard) = tracing_appender::non_blocking(std::io::stderr());
        tracing_subscriber::registry()
            .with(fmt_layer(config, non_blocking).with_filter(env_filter))
            .try_init()
            .context("Failed to initialize async logging")?;
        Ok(Some(guard))
    } else {
        tracing_subscriber::registry()
            .with(fmt_layer(config, std::io::stderr).with_filter(env_filter))
            .try_init()
            .context("Failed to initialize logging")?;
        Ok(None)
    }
}
