use std::{
    env,
    ffi::OsString,
    path::{Path, PathBuf},
};

use tracing_subscriber::EnvFilter;

use super::schema::Settings;

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "CUELIST_CONFIG_PATH";

/// Prefix of per-key overrides, e.g. `CUELIST__UI__STATUS_HISTORY`.
const ENV_PREFIX: &str = "CUELIST";

impl Settings {
    /// Load settings from the resolved config file (if any) and the environment.
    pub fn load() -> Result<Self, ::config::ConfigError> {
        Self::load_from(resolve_config_path().as_deref())
    }

    /// Load settings from `path` (missing file is fine) with environment
    /// overrides on top and struct defaults underneath.
    pub fn load_from(path: Option<&Path>) -> Result<Self, ::config::ConfigError> {
        let mut builder = ::config::Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(::config::File::from(path).required(false));
        }
        builder = builder.add_source(
            ::config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Reject values the playlist front-end cannot run with.
    pub fn validate(&self) -> Result<(), String> {
        if self.ui.status_history == 0 {
            return Err("ui.status_history must be >= 1".to_string());
        }
        if self
            .upload
            .extensions
            .iter()
            .all(|e| e.trim().trim_start_matches('.').is_empty())
        {
            return Err("upload.extensions must name at least one extension".to_string());
        }
        if self.upload.max_bytes == Some(0) {
            return Err("upload.max_bytes must be > 0 (omit it to disable the limit)".to_string());
        }
        if let Err(e) = EnvFilter::try_new(&self.log.level) {
            return Err(format!("log.level {:?} is not a valid filter: {e}", self.log.level));
        }
        Ok(())
    }
}

/// The config file to read: `CUELIST_CONFIG_PATH` if set, else the XDG default.
pub fn resolve_config_path() -> Option<PathBuf> {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .or_else(default_config_path)
}

/// `cuelist/config.toml` under `$XDG_CONFIG_HOME`, or under `~/.config`.
pub fn default_config_path() -> Option<PathBuf> {
    config_file_under(env::var_os("XDG_CONFIG_HOME"), env::var_os("HOME"))
}

pub(super) fn config_file_under(xdg: Option<OsString>, home: Option<OsString>) -> Option<PathBuf> {
    xdg.map(PathBuf::from)
        .or_else(|| home.map(|h| PathBuf::from(h).join(".config")))
        .map(|d| d.join("cuelist").join("config.toml"))
}
