use std::{env, path::PathBuf};

use super::schema::Settings;

impl Settings {
    /// Struct defaults, then the config file if any, then `TUNESORT__*`.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        let mut builder = ::config::Config::builder();
        if let Some(path) = resolve_config_path() {
            builder = builder.add_source(::config::File::from(path).required(false));
        }

        builder
            .add_source(
                ::config::Environment::with_prefix("TUNESORT")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.scan.max_depth == Some(0) {
            return Err("scan.max_depth must be >= 1".to_string());
        }
        Ok(())
    }
}

/// `TUNESORT_CONFIG_PATH` wins over the XDG location.
pub fn resolve_config_path() -> Option<PathBuf> {
    if let Some(p) = env::var_os("TUNESORT_CONFIG_PATH") {
        return Some(PathBuf::from(p));
    }
    default_config_path()
}

pub fn default_config_path() -> Option<PathBuf> {
    env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))
        .map(|d| d.join("tunesort").join("config.toml"))
}
