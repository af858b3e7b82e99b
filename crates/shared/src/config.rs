//! Application configuration management.

use serde::Deserialize;

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "CONVERTLY";

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration.
    pub log: LogConfig,
    /// Output configuration.
    pub output: OutputConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `tracing` filter directive, used when `RUST_LOG` is unset.
    pub filter: String,
    /// Log line format.
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "convertly=info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

/// Log line format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable output.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

/// Output configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Print JSON instead of plain text by default.
    pub json: bool,
}

impl AppConfig {
    /// Loads configuration from config files and the environment.
    ///
    /// Sources, lowest priority first: `config/default.toml`,
    /// `config/{RUN_MODE}.toml` and `CONVERTLY__*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());
        Self::load_from("config", &run_mode)
    }

    /// Loads configuration from files in `dir` for the given run mode.
    ///
    /// # Errors
    ///
    /// Returns an error if a present source cannot be parsed.
    pub fn load_from(dir: &str, run_mode: &str) -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(&format!("{dir}/default")).required(false))
            .add_source(config::File::with_name(&format!("{dir}/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
