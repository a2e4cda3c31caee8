//! Probe configuration loaded from the environment.
//!
//! `.env` is loaded by the binary before `AppConfig::from_env` runs, so a
//! project-local file can set any of the `PREFPROBE_*` variables.

use std::env;
use std::fmt;
use std::str::FromStr;
use validator::Validate;

use crate::error::AppError;
use crate::logging::{LogFormat, DEFAULT_LOG_FILTER};
use crate::preference::Vocabulary;

pub const ENV_VOCABULARY: &str = "PREFPROBE_VOCABULARY";
pub const ENV_MODE: &str = "PREFPROBE_MODE";
pub const ENV_OUTPUT: &str = "PREFPROBE_OUTPUT";
pub const ENV_LOG: &str = "PREFPROBE_LOG";
pub const ENV_LOG_FORMAT: &str = "PREFPROBE_LOG_FORMAT";
pub const ENV_MAX_INPUT_CHARS: &str = "PREFPROBE_MAX_INPUT_CHARS";

const DEFAULT_MAX_INPUT_CHARS: usize = 10_000;

/// What the probe computes per input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProbeMode {
    /// Full classification with the decision policy
    #[default]
    Classify,
    /// Presence-based strength report
    Strength,
}

impl FromStr for ProbeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "classify" => Ok(ProbeMode::Classify),
            "strength" => Ok(ProbeMode::Strength),
            other => Err(format!("unknown mode '{}'", other)),
        }
    }
}

impl fmt::Display for ProbeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeMode::Classify => write!(f, "classify"),
            ProbeMode::Strength => write!(f, "strength"),
        }
    }
}

/// How probe results are printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One JSON object per line
    #[default]
    Json,
    /// One human-readable line
    Pretty,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "pretty" => Ok(OutputFormat::Pretty),
            other => Err(format!("unknown output format '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Validate)]
pub struct AppConfig {
    pub vocabulary: Vocabulary,
    pub mode: ProbeMode,
    pub output: OutputFormat,
    pub log_format: LogFormat,
    pub log_filter: String,
    /// Longer inputs are truncated on a char boundary
    #[validate(range(min = 1, max = 1_000_000))]
    pub max_input_chars: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            vocabulary: Vocabulary::default(),
            mode: ProbeMode::default(),
            output: OutputFormat::default(),
            log_format: LogFormat::default(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            max_input_chars: DEFAULT_MAX_INPUT_CHARS,
        }
    }
}

impl AppConfig {
    /// Build the configuration from `PREFPROBE_*` variables
    pub fn from_env() -> Result<Self, AppError> {
        let defaults = Self::default();

        let log_filter = env::var(ENV_LOG)
            .or_else(|_| env::var("RUST_LOG"))
            .unwrap_or(defaults.log_filter);

        let max_input_chars = match env::var(ENV_MAX_INPUT_CHARS) {
            Ok(raw) => raw.trim().parse::<usize>().map_err(|e| {
                AppError::Config(format!("{} must be a positive integer: {}", ENV_MAX_INPUT_CHARS, e))
            })?,
            Err(_) => defaults.max_input_chars,
        };

        let config = Self {
            vocabulary: parse_var(ENV_VOCABULARY, defaults.vocabulary)?,
            mode: parse_var(ENV_MODE, defaults.mode)?,
            output: parse_var(ENV_OUTPUT, defaults.output)?,
            log_format: parse_var(ENV_LOG_FORMAT, defaults.log_format)?,
            log_filter,
            max_input_chars,
        };

        config.validate()?;
        Ok(config)
    }
}

fn parse_var<T>(name: &str, default: T) -> Result<T, AppError>
where
    T: FromStr<Err = String>,
{
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .map_err(|e| AppError::Config(format!("{}: {}", name, e))),
        Err(_) => Ok(default),
    }
}
