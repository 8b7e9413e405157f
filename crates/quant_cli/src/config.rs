//! Analytics configuration management
//!
//! Handles loading configuration from a TOML file, environment variables, and CLI arguments.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use quant_core::types::error::ensure_positive;
use quant_core::AnalyticsError;
use quant_signals::{MomentumOscillator, TrendStop, DEFAULT_ACCEL_MAX, DEFAULT_ACCEL_STEP, DEFAULT_PERIOD};
use serde::Deserialize;
use thiserror::Error;

/// Config file picked up from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "quant.toml";

/// Default volatility-index horizon in days.
pub const DEFAULT_HORIZON_DAYS: f64 = 30.0;

const ENV_LOG_LEVEL: &str = "QUANT_LOG_LEVEL";
const ENV_RSI_PERIOD: &str = "QUANT_RSI_PERIOD";
const ENV_SAR_ACCEL_STEP: &str = "QUANT_SAR_ACCEL_STEP";
const ENV_SAR_ACCEL_MAX: &str = "QUANT_SAR_ACCEL_MAX";
const ENV_HORIZON_DAYS: &str = "QUANT_HORIZON_DAYS";
const ENV_SEED: &str = "QUANT_SEED";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    #[error("Environment variable {key} has invalid value '{value}'")]
    EnvError { key: &'static str, value: String },

    #[error("Configuration file error: {0}")]
    FileError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] AnalyticsError),
}

/// Log levels supported by the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Analytics configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    /// Log level
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
    /// Momentum oscillator lookback
    pub rsi_period: usize,
    /// Trend-stop acceleration increment
    pub sar_accel_step: f64,
    /// Trend-stop acceleration cap
    pub sar_accel_max: f64,
    /// Volatility-index horizon in days
    pub horizon_days: f64,
    /// Seed for simulations; drawn from entropy when absent
    pub seed: Option<u64>,
}

fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            log_level: LogLevel::Info,
            rsi_period: DEFAULT_PERIOD,
            sar_accel_step: DEFAULT_ACCEL_STEP,
            sar_accel_max: DEFAULT_ACCEL_MAX,
            horizon_days: DEFAULT_HORIZON_DAYS,
            seed: None,
        }
    }
}

impl AnalyticsConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::FileError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: AnalyticsConfig = toml::from_str(content)
            .map_err(|e| ConfigError::FileError(format!("Failed to parse TOML: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Override fields with the variables `lookup` returns
    ///
    /// Only variables that are present are applied.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }
        if let Some(period) = lookup(ENV_RSI_PERIOD) {
            self.rsi_period = parse_env(ENV_RSI_PERIOD, &period)?;
        }
        if let Some(step) = lookup(ENV_SAR_ACCEL_STEP) {
            self.sar_accel_step = parse_env(ENV_SAR_ACCEL_STEP, &step)?;
        }
        if let Some(max) = lookup(ENV_SAR_ACCEL_MAX) {
            self.sar_accel_max = parse_env(ENV_SAR_ACCEL_MAX, &max)?;
        }
        if let Some(horizon) = lookup(ENV_HORIZON_DAYS) {
            self.horizon_days = parse_env(ENV_HORIZON_DAYS, &horizon)?;
        }
        if let Some(seed) = lookup(ENV_SEED) {
            self.seed = Some(parse_env(ENV_SEED, &seed)?);
        }
        Ok(())
    }

    /// Validate the configuration
    ///
    /// Applies the same constraints the analytics routines enforce.
    pub fn validate(&self) -> Result<(), ConfigError> {
        MomentumOscillator::new(self.rsi_period)?;
        TrendStop::new(self.sar_accel_step, self.sar_accel_max)?;
        ensure_positive("horizon_days", self.horizon_days)?;
        Ok(())
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliOverrides) {
        if let Some(level) = cli.log_level {
            self.log_level = level;
        }
        if let Some(period) = cli.rsi_period {
            self.rsi_period = period;
        }
        if let Some(step) = cli.sar_accel_step {
            self.sar_accel_step = step;
        }
        if let Some(max) = cli.sar_accel_max {
            self.sar_accel_max = max;
        }
        if let Some(horizon) = cli.horizon_days {
            self.horizon_days = horizon;
        }
        if cli.seed.is_some() {
            self.seed = cli.seed;
        }
    }

    /// Trend-stop parameters
    pub fn trend_stop(&self) -> Result<TrendStop, ConfigError> {
        Ok(TrendStop::new(self.sar_accel_step, self.sar_accel_max)?)
    }
}

fn parse_env<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::EnvError {
        key,
        value: value.to_string(),
    })
}

/// Values given on the command line
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Log level override (`--verbose` maps to debug)
    pub log_level: Option<LogLevel>,
    /// Oscillator period override
    pub rsi_period: Option<usize>,
    /// Acceleration increment override
    pub sar_accel_step: Option<f64>,
    /// Acceleration cap override
    pub sar_accel_max: Option<f64>,
    /// Horizon override
    pub horizon_days: Option<f64>,
    /// Seed override
    pub seed: Option<u64>,
}

/// Build configuration from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file (`--config`, or `quant.toml` if present)
/// 4. Default values
pub fn build_config(cli: &CliOverrides) -> Result<AnalyticsConfig, ConfigError> {
    build_config_with(cli, |key| std::env::var(key).ok())
}

/// [`build_config`] with an explicit environment lookup
pub fn build_config_with<F>(cli: &CliOverrides, lookup: F) -> Result<AnalyticsConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match &cli.config_file {
        Some(path) => AnalyticsConfig::from_file(path)?,
        None => {
            let default_path = Path::new(DEFAULT_CONFIG_FILE);
            if default_path.exists() {
                AnalyticsConfig::from_file(default_path)?
            } else {
                AnalyticsConfig::default()
            }
        }
    };

    config.apply_env(lookup)?;
    config.merge_with_cli(cli);

    // Final validation
    config.validate()?;

    Ok(config)
}
