use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use tracing::warn;

pub const SETTINGS_FILE: &str = "catalog.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub fixtures_dir: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fixtures_dir: None,
            log_filter: "info".into(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileSettings {
    fixtures_dir: Option<PathBuf>,
    log_filter: Option<String>,
}

/// Defaults, then `catalog.toml` in the working directory, then `APP__*` variables.
pub fn load_settings() -> Settings {
    load_settings_from(Path::new(SETTINGS_FILE), |key| std::env::var(key).ok())
}

pub fn load_settings_from(path: &Path, env: impl Fn(&str) -> Option<String>) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        match toml::from_str::<FileSettings>(&raw) {
            Ok(file_cfg) => {
                if let Some(dir) = file_cfg.fixtures_dir {
                    settings.fixtures_dir = Some(dir);
                }
                if let Some(filter) = file_cfg.log_filter {
                    settings.log_filter = filter;
                }
            }
            Err(err) => warn!(path = %path.display(), %err, "ignoring unreadable settings file"),
        }
    }

    if let Some(v) = env("APP__FIXTURES_DIR").filter(|v| !v.trim().is_empty()) {
        settings.fixtures_dir = Some(PathBuf::from(v));
    }
    if let Some(v) = env("APP__LOG_FILTER").filter(|v| !v.trim().is_empty()) {
        settings.log_filter = v;
    }

    settings
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn falls_back_to_defaults_without_file_or_env() {
        let dir = tempfile::tempdir().expect("tempdir");
        let settings = load_settings_from(&dir.path().join(SETTINGS_FILE), no_env);
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn reads_settings_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, "fixtures_dir = \"./data\"\nlog_filter = \"debug\"\n").expect("write");

        let settings = load_settings_from(&path, no_env);
        assert_eq!(settings.fixtures_dir, Some(PathBuf::from("./data")));
        assert_eq!(settings.log_filter, "debug");
    }

    #[test]
    fn env_overrides_file() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, "log_filter = \"debug\"\n").expect("write");
        let env = HashMap::from([
            ("APP__LOG_FILTER", "warn".to_string()),
            ("APP__FIXTURES_DIR", "/srv/fixtures".to_string()),
        ]);

        let settings = load_settings_from(&path, |key| env.get(key).cloned());
        assert_eq!(settings.log_filter, "warn");
        assert_eq!(settings.fixtures_dir, Some(PathBuf::from("/srv/fixtures")));
    }

    #[test]
    fn malformed_file_is_ignored() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join(SETTINGS_FILE);
        fs::write(&path, "log_filter = [").expect("write");

        assert_eq!(load_settings_from(&path, no_env), Settings::default());
    }
}
