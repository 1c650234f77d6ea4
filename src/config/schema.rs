use std::path::PathBuf;

use serde::Deserialize;

/// Top-level settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/cuelist/config.toml` or `~/.config/cuelist/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `CUELIST__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub ui: UiSettings,
    pub upload: UploadSettings,
    pub log: LogSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,

    /// Start the new current track automatically after next/previous.
    pub autoplay_on_navigation: bool,

    /// How many notifications the status history keeps.
    pub status_history: usize,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " ~ Upload your favorite songs and manage your playlist ~ ".to_string(),
            autoplay_on_navigation: true,
            status_history: 32,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UploadSettings {
    /// File extensions accepted as audio (case-insensitive, without dot).
    pub extensions: Vec<String>,
    /// Largest file accepted, in bytes. `None` disables the check.
    pub max_bytes: Option<u64>,
}

impl Default for UploadSettings {
    fn default() -> Self {
        Self {
            extensions: vec!["mp3".into(), "wav".into()],
            max_bytes: Some(200 * 1024 * 1024),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LogSettings {
    /// Write logs to this file. Logging is off when unset, since the
    /// terminal belongs to the UI.
    pub file: Option<PathBuf>,
    /// `EnvFilter` directive, e.g. "info" or "cuelist=debug".
    /// `RUST_LOG` takes precedence.
    pub level: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            file: None,
            level: "info".to_string(),
        }
    }
}
