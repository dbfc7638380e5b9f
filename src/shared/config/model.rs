use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub fetch: FetchConfig,
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
    #[serde(default = "default_stdout_level")]
    pub stdout_level: String,
    #[serde(default = "default_file_level")]
    pub file_level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_dir: default_log_dir(),
            stdout_level: default_stdout_level(),
            file_level: default_file_level(),
        }
    }
}

fn default_log_dir() -> String {
    "logs".to_string()
}

fn default_stdout_level() -> String {
    "info".to_string()
}

fn default_file_level() -> String {
    "info".to_string()
}

#[derive(Debug, Default, Deserialize)]
pub struct FetchConfig {
    /// Bounds `await_raw`/`await_row` when set and non-zero; explicit
    /// timeout variants always take precedence.
    #[serde(default)]
    pub default_timeout_ms: Option<u64>,
}

/// Settings come from an optional TOML file named by `ROWLINK_CONFIG`
/// (default `rowlink`); every field has a usable default, so a missing
/// file is fine for library consumers.
pub fn load_settings() -> Result<Settings, config::ConfigError> {
    let config_path = env::var("ROWLINK_CONFIG").unwrap_or_else(|_| "rowlink".to_string());
    load_settings_from(&config_path)
}

pub fn load_settings_from(path: &str) -> Result<Settings, config::ConfigError> {
    let settings: Settings = config::Config::builder()
        .add_source(config::File::with_name(path).required(false))
        .build()?
        .try_deserialize()?;

    Ok(settings)
}
