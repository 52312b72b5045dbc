use std::path::PathBuf;

use config::{Config, Environment, File, FileFormat};
use secrecy::Secret;
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub admin: AdminSettings,
    pub storage: StorageSettings,
}

#[derive(Deserialize)]
pub struct ApplicationSettings {
    pub host: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
}

#[derive(Deserialize)]
pub struct AdminSettings {
    pub token: Option<Secret<String>>,
}

#[derive(Deserialize)]
pub struct StorageSettings {
    pub contacts_path: PathBuf,
}

/// Fallback admin credential used when no token is configured.
/// Startup logs a warning whenever this is in effect.
pub const INSECURE_DEFAULT_ADMIN_TOKEN: &str = "change-me";

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    let settings = Config::builder()
        .add_source(File::new("configuration.yaml", FileFormat::Yaml))
        .add_source(
            Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("_"),
        )
        .build()?;

    settings.try_deserialize::<Settings>()
}
