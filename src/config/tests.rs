use super::load::config_file_under;
use super::schema::*;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, OnceLock};

// `Settings::load_from` reads `CUELIST__*` variables, so tests touching the
// environment take this lock.
static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

fn env_lock() -> MutexGuard<'static, ()> {
    ENV_LOCK
        .get_or_init(|| Mutex::new(()))
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn write_config(dir: &Path, body: &str) -> PathBuf {
    let path = dir.join("config.toml");
    std::fs::write(&path, body).unwrap();
    path
}

#[test]
fn config_file_prefers_xdg_then_home() {
    assert_eq!(
        config_file_under(Some("/xdg".into()), Some("/home/u".into())),
        Some(PathBuf::from("/xdg/cuelist/config.toml"))
    );
    assert_eq!(
        config_file_under(None, Some("/home/u".into())),
        Some(PathBuf::from("/home/u/.config/cuelist/config.toml"))
    );
    assert_eq!(config_file_under(None, None), None);
}

#[test]
fn load_reads_ui_upload_and_log_sections() {
    let _lock = env_lock();
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(
        dir.path(),
        r#"
[ui]
header_text = "hello"
autoplay_on_navigation = false
status_history = 4

[upload]
extensions = ["flac", "ogg"]
max_bytes = 1024

[log]
file = "/tmp/cuelist.log"
level = "cuelist=debug"
"#,
    );

    let s = Settings::load_from(Some(&path)).unwrap();
    assert_eq!(s.ui.header_text, "hello");
    assert!(!s.ui.autoplay_on_navigation);
    assert_eq!(s.ui.status_history, 4);
    assert_eq!(s.upload.extensions, vec!["flac".to_string(), "ogg".to_string()]);
    assert_eq!(s.upload.max_bytes, Some(1024));
    assert_eq!(s.log.file.as_deref(), Some(Path::new("/tmp/cuelist.log")));
    assert_eq!(s.log.level, "cuelist=debug");
    assert!(s.validate().is_ok());
}

#[test]
fn load_without_file_uses_upload_defaults() {
    let _lock = env_lock();
    let dir = tempfile::tempdir().unwrap();

    let s = Settings::load_from(Some(&dir.path().join("absent.toml"))).unwrap();
    assert!(s.ui.autoplay_on_navigation);
    assert_eq!(s.upload.extensions, vec!["mp3".to_string(), "wav".to_string()]);
    assert_eq!(s.upload.max_bytes, Some(200 * 1024 * 1024));
    assert!(s.log.file.is_none());
}

#[test]
fn env_override_beats_file() {
    let _lock = env_lock();
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(dir.path(), "[ui]\nstatus_history = 10\n");

    let key = "CUELIST__UI__STATUS_HISTORY";
    let old = std::env::var_os(key);
    unsafe {
        std::env::set_var(key, "3");
    }
    let loaded = Settings::load_from(Some(&path));
    unsafe {
        match old {
            Some(v) => std::env::set_var(key, v),
            None => std::env::remove_var(key),
        }
    }

    assert_eq!(loaded.unwrap().ui.status_history, 3);
}

#[test]
fn load_rejects_malformed_upload_section() {
    let _lock = env_lock();
    let dir = tempfile::tempdir().unwrap();
    let path = write_config(dir.path(), "[upload]\nmax_bytes = \"lots\"\n");

    assert!(Settings::load_from(Some(&path)).is_err());
}

#[test]
fn validate_checks_history_extensions_limit_and_level() {
    assert!(Settings::default().validate().is_ok());

    let mut s = Settings::default();
    s.ui.status_history = 0;
    assert!(s.validate().unwrap_err().contains("status_history"));

    let mut s = Settings::default();
    s.upload.extensions = vec![" . ".into(), "".into()];
    assert!(s.validate().unwrap_err().contains("extensions"));

    let mut s = Settings::default();
    s.upload.max_bytes = Some(0);
    assert!(s.validate().unwrap_err().contains("max_bytes"));
    s.upload.max_bytes = None;
    assert!(s.validate().is_ok());

    let mut s = Settings::default();
    s.log.level = "cuelist=notalevel".into();
    assert!(s.validate().unwrap_err().contains("log.level"));
}
