use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;
use strum::{Display, EnumString};

use crate::ValidationSettings;

/// Settings for embedding the timecard core. Every key is optional.
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Settings {
    #[serde(default)]
    pub validation: ValidationSettings,
}

impl Settings {
    pub fn from_yaml_str(yaml: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(yaml, config::FileFormat::Yaml))
            .build()?
            .try_deserialize::<Settings>()
    }
}

/// Reads settings from `./config`, see [`read_config_from`].
pub fn read_config() -> Result<Settings, config::ConfigError> {
    let base_path = std::env::current_dir()
        .map_err(|e| config::ConfigError::Message(format!("no current directory: {e}")))?;

    read_config_from(&base_path.join("config"))
}

/// Layers `base.yaml`, `{APP_ENVIRONMENT}.yaml` and `TIMECARD_`-prefixed environment
/// variables (e.g. `TIMECARD_VALIDATION__MAX_HOURS=12`). Missing files are skipped.
pub fn read_config_from(config_directory: &Path) -> Result<Settings, config::ConfigError> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_str(
        std::env::var("APP_ENVIRONMENT")
            .unwrap_or_else(|_| "local".into())
            .as_str(),
    )
    .map_err(|e| config::ConfigError::Message(format!("failed to parse APP_ENVIRONMENT: {e}")))?;
    let environment_filename = format!("{}.yaml", environment);

    tracing::debug!(%environment, directory = %config_directory.display(), "reading timecard config");

    let settings = config::Config::builder()
        .add_source(config::File::from(config_directory.join("base.yaml")).required(false))
        .add_source(
            config::File::from(config_directory.join(environment_filename)).required(false),
        )
        .add_source(
            config::Environment::with_prefix("TIMECARD")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}

#[derive(Display, Debug, EnumString, PartialEq)]
pub enum Environment {
    #[strum(ascii_case_insensitive, serialize = "local")]
    Local,
    #[strum(ascii_case_insensitive, serialize = "production")]
    Production,
}
