//! Logging System
//!
//! Structured logging setup using the `tracing` crate. Provides
//! configurable log levels, output formats, and destinations for embedders
//! of the mapping engine.

use crate::error::SchemaError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, text (default: text)
    #[serde(default = "default_format")]
    pub format: String,

    /// Output destination: stdout, file
    #[serde(default = "default_output")]
    pub output: String,

    /// Log file path (if output is "file")
    #[serde(default = "default_log_file")]
    pub file: PathBuf,

    /// Enable colored output (text format, stdout only)
    #[serde(default = "default_true")]
    pub color: bool,

    /// Module-specific log levels
    #[serde(default)]
    pub modules: HashMap<String, String>,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_output() -> String {
    "stdout".to_string()
}

fn default_log_file() -> PathBuf {
    PathBuf::from("weft.log")
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_format(),
            output: default_output(),
            file: default_log_file(),
            color: default_true(),
            modules: HashMap::new(),
        }
    }
}

/// Initialize the logging system
///
/// Priority order (highest to lowest):
/// 1. Environment variables (WEFT_LOG, WEFT_LOG_FORMAT, WEFT_LOG_OUTPUT)
/// 2. Configuration
/// 3. Defaults
pub fn init_logging(config: Option<&LoggingConfig>) -> Result<(), SchemaError> {
    let filter = build_env_filter(config)?;
    let format = determine_format(config)?;
    let output = determine_output(config)?;

    let base_subscriber = Registry::default().with(filter);
    let use_color = config.map(|c| c.color).unwrap_or(true);

    let get_file_writer = || -> Result<std::fs::File, SchemaError> {
        let log_file = config
            .map(|c| c.file.clone())
            .unwrap_or_else(default_log_file);

        if let Some(parent) = log_file.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        Ok(std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)?)
    };

    if format == "json" {
        if output == "file" {
            let file_writer = std::sync::Arc::new(get_file_writer()?);
            base_subscriber
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_timer(ChronoUtc::rfc_3339())
                        .with_writer(file_writer),
                )
                .init();
        } else {
            base_subscriber
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_timer(ChronoUtc::rfc_3339())
                        .with_writer(std::io::stdout),
                )
                .init();
        }
    } else if output == "file" {
        let file_writer = std::sync::Arc::new(get_file_writer()?);
        base_subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(false)
                    .with_writer(file_writer),
            )
            .init();
    } else {
        base_subscriber
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(use_color)
                    .with_writer(std::io::stdout),
            )
            .init();
    }

    Ok(())
}

/// Build environment filter from config or environment variables
fn build_env_filter(config: Option<&LoggingConfig>) -> Result<EnvFilter, SchemaError> {
    if let Ok(filter) = EnvFilter::try_from_env("WEFT_LOG") {
        return Ok(filter);
    }

    let level = config.map(|c| c.level.as_str()).unwrap_or("info");

    if level == "off" {
        return Ok(EnvFilter::new("off"));
    }

    let mut filter = EnvFilter::new(level);

    if let Some(config) = config {
        for (module, module_level) in &config.modules {
            let directive = format!("{}={}", module, module_level);
            filter = filter.add_directive(
                directive
                    .parse()
                    .map_err(|e| SchemaError::Config(format!("invalid log directive: {}", e)))?,
            );
        }
    }

    if let Ok(modules_str) = std::env::var("WEFT_LOG_MODULES") {
        for module_spec in modules_str.split(',') {
            let parts: Vec<&str> = module_spec.split('=').collect();
            if parts.len() == 2 {
                let directive = format!("{}={}", parts[0].trim(), parts[1].trim());
                filter = filter.add_directive(directive.parse().map_err(|e| {
                    SchemaError::Config(format!("invalid log directive from env: {}", e))
                })?);
            }
        }
    }

    Ok(filter)
}

/// Determine output format from config or environment
fn determine_format(config: Option<&LoggingConfig>) -> Result<String, SchemaError> {
    if let Ok(format) = std::env::var("WEFT_LOG_FORMAT") {
        if format == "json" || format == "text" {
            return Ok(format);
        }
    }

    let format = config.map(|c| c.format.as_str()).unwrap_or("text");

    if format != "json" && format != "text" {
        return Err(SchemaError::Config(format!(
            "invalid log format: {} (must be 'json' or 'text')",
            format
        )));
    }

    Ok(format.to_string())
}

/// Determine output destination from config or environment
fn determine_output(config: Option<&LoggingConfig>) -> Result<String, SchemaError> {
    if let Ok(output) = std::env::var("WEFT_LOG_OUTPUT") {
        return parse_output_destination(&output);
    }

    let output = config.map(|c| c.output.as_str()).unwrap_or("stdout");
    parse_output_destination(output)
}

fn parse_output_destination(output: &str) -> Result<String, SchemaError> {
    match output {
        "stdout" | "file" => Ok(output.to_string()),
        _ => Err(SchemaError::Config(format!(
            "invalid log output: {} (must be 'stdout' or 'file')",
            output
        ))),
    }
}
