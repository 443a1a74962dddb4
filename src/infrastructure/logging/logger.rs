use super::config::{LogConfig, LogFormat};
use anyhow::{Context, Result};
use std::io;
use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, Registry};

/// Logger implementation using tracing
///
/// Logs go to stderr so command output on stdout stays machine readable.
pub struct LoggerImpl;

impl LoggerImpl {
    /// Install the global subscriber for the given configuration
    ///
    /// `RUST_LOG` directives take precedence over the configured level.
    ///
    /// # Errors
    /// Returns an error if the level is invalid or a global subscriber is
    /// already installed
    pub fn init(config: &LogConfig) -> Result<Self> {
        let env_filter = build_filter(config)?;

        let layer = build_layer(config.format, env_filter, io::stderr);

        tracing_subscriber::registry()
            .with(layer)
            .try_init()
            .context("Failed to install tracing subscriber")?;

        tracing::debug!(level = %config.level, format = ?config.format, "logger initialized");
        Ok(Self)
    }
}

fn build_layer<W>(format: LogFormat, filter: EnvFilter, writer: W) -> Box<dyn Layer<Registry> + Send + Sync>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    match format {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_writer(writer)
            .with_current_span(true)
            .with_target(true)
            .with_filter(filter)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer()
            .pretty()
            .with_writer(writer)
            .with_target(true)
            .with_filter(filter)
            .boxed(),
    }
}

fn build_filter(config: &LogConfig) -> Result<EnvFilter> {
    let default_level = parse_log_level(&config.level)?;
    Ok(EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy())
}

/// Parse log level string to Level
fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => anyhow::bail!("Invalid log level: {level}"),
    }
}
