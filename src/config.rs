use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::models::FactorWeights;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

/// Point caps per scoring factor; defaults implement the documented
/// 20/15/20/10/10/10/15 breakdown summing to 100.
#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_income_weight")]
    pub income: f64,
    #[serde(default = "default_budget_weight")]
    pub budget: f64,
    #[serde(default = "default_duration_weight")]
    pub duration: f64,
    #[serde(default = "default_safety_weight")]
    pub safety: f64,
    #[serde(default = "default_distance_weight")]
    pub distance: f64,
    #[serde(default = "default_start_date_weight")]
    pub start_date: f64,
    #[serde(default = "default_preferences_weight")]
    pub preferences: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            income: default_income_weight(),
            budget: default_budget_weight(),
            duration: default_duration_weight(),
            safety: default_safety_weight(),
            distance: default_distance_weight(),
            start_date: default_start_date_weight(),
            preferences: default_preferences_weight(),
        }
    }
}

impl From<WeightsConfig> for FactorWeights {
    fn from(cfg: WeightsConfig) -> Self {
        Self {
            income: cfg.income,
            budget: cfg.budget,
            duration: cfg.duration,
            safety: cfg.safety,
            distance: cfg.distance,
            start_date: cfg.start_date,
            preferences: cfg.preferences,
        }
    }
}

fn default_income_weight() -> f64 { 20.0 }
fn default_budget_weight() -> f64 { 15.0 }
fn default_duration_weight() -> f64 { 20.0 }
fn default_safety_weight() -> f64 { 10.0 }
fn default_distance_weight() -> f64 { 10.0 }
fn default_start_date_weight() -> f64 { 10.0 }
fn default_preferences_weight() -> f64 { 15.0 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with RELO_)
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with RELO_)
            // e.g., RELO_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("RELO")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("RELO")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
