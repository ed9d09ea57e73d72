use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default location of the optional runtime config file.
pub const DEFAULT_CONFIG_PATH: &str = "config/config.toml";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Settings {
    /// Layer the optional config file under `AION_MIND_*` environment
    /// overrides (`AION_MIND_LOGGING_LEVEL` reaches `logging.level`). A
    /// missing file falls back to the built-in defaults.
    pub fn load(path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path).required(false))
            .add_source(config::Environment::with_prefix("AION_MIND").separator("_"))
            .build()?;

        settings.try_deserialize()
    }
}
