use std::{fs, path::Path, path::PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = "evidex.toml";
const APP_DIR_NAME: &str = "evidex";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fixture directory; embedded demo case when unset
    pub fixture_dir: Option<PathBuf>,
    /// trace | debug | info | warn | error
    pub log_level: String,
    /// Absolute log directory; platform data dir when unset
    pub log_dir: Option<PathBuf>,
    pub report_title: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fixture_dir: None,
            log_level: evidex_core::default_log_level().to_string(),
            log_dir: None,
            report_title: evidex_core::DEFAULT_REPORT_TITLE.to_string(),
        }
    }
}

impl Settings {
    /// Loads settings from `explicit`, or `./evidex.toml` when present.
    ///
    /// A missing default file yields defaults; a missing explicit file is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let path = PathBuf::from(CONFIG_FILE_NAME);
                if !path.exists() {
                    return Ok(Self::default());
                }
                path
            }
        };

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let value: Self = toml::from_str(&content)
            .with_context(|| format!("Invalid config TOML at {}", path.display()))?;
        Ok(value)
    }

    /// Resolves the log directory, falling back to the platform data dir.
    pub fn resolved_log_dir(&self) -> Result<PathBuf> {
        if let Some(dir) = &self.log_dir {
            return Ok(dir.clone());
        }
        let base = dirs::data_local_dir().context("Cannot resolve local data directory")?;
        Ok(base.join(APP_DIR_NAME).join("logs"))
    }
}

#[cfg(test)]
mod tests {
    use super::Settings;
    use std::fs;

    #[test]
    fn partial_file_keeps_defaults_for_missing_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("evidex.toml");
        fs::write(&path, "report_title = \"CASE 0312\"\n").unwrap();

        let settings = Settings::load(Some(path.as_path())).unwrap();
        assert_eq!(settings.report_title, "CASE 0312");
        assert_eq!(settings.fixture_dir, None);
        assert_eq!(settings.log_level, Settings::default().log_level);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Settings::load(Some(dir.path().join("absent.toml").as_path())).unwrap_err();
        assert!(err.to_string().contains("Failed to read config"));
    }

    #[test]
    fn explicit_log_dir_wins() {
        let settings = Settings {
            log_dir: Some("/var/log/evidex".into()),
            ..Settings::default()
        };
        assert_eq!(
            settings.resolved_log_dir().unwrap(),
            std::path::PathBuf::from("/var/log/evidex")
        );
    }
}
