use cuelist::config::{ConfigError, Settings};

/// Settings to start with, plus warnings for the status line about anything
/// that fell back to defaults.
pub struct Startup {
    pub settings: Settings,
    pub notices: Vec<String>,
}

pub fn load_settings() -> Startup {
    settle(Settings::load())
}

// A bad config never blocks startup; it is replaced by defaults and reported.
fn settle(loaded: Result<Settings, ConfigError>) -> Startup {
    let (settings, notice) = match loaded {
        Ok(s) => match s.validate() {
            Ok(()) => (s, None),
            Err(msg) => (
                Settings::default(),
                Some(format!("Invalid config, using defaults: {msg}")),
            ),
        },
        Err(e) => (
            Settings::default(),
            Some(format!("Could not load config, using defaults: {e}")),
        ),
    };
    Startup {
        settings,
        notices: notice.into_iter().collect(),
    }
}
