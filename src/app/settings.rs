use anyhow::Context;
use bon::Builder;
use serde::{Deserialize, Serialize};
use std::fs::{create_dir_all, OpenOptions};
use std::io::Read;
use std::path::{Path, PathBuf};
use swipenav::navigation::{Configuration, UnpopConfiguration};

pub const DEFAULT_ANIMATION_MILLIS: u64 = 350;
const SETTINGS_FILE: &str = "settings.json";

fn default_transitions() -> Configuration {
    Configuration {
        unpop: Some(UnpopConfiguration::default()),
    }
}

#[derive(Builder, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    #[builder(default = default_transitions())]
    pub transitions: Configuration,
    #[builder(default = DEFAULT_ANIMATION_MILLIS)]
    pub animation_millis: u64,
    #[builder(default = "info".to_string())]
    pub log_level: String,
    pub log_directory: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings::builder().build()
    }
}

impl Settings {
    pub fn config_dir() -> Option<PathBuf> {
        home::home_dir().map(|home| home.join(".config").join("swipenav"))
    }

    pub fn default_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join(SETTINGS_FILE))
    }

    pub fn log_directory(&self) -> PathBuf {
        self.log_directory
            .clone()
            .or_else(|| Self::config_dir().map(|dir| dir.join("logs")))
            .unwrap_or_else(|| PathBuf::from("logs"))
    }

    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Settings> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Settings::default());
        }
        let mut file = OpenOptions::new()
            .read(true)
            .open(path)
            .context("Failed to open settings file")?;
        let mut content = String::new();
        file.read_to_string(&mut content)
            .context("Failed to read settings file")?;
        if content.trim().is_empty() {
            Ok(Settings::default())
        } else {
            serde_json::from_str(&content).context("Failed to parse settings")
        }
    }

    // writes the defaults on first run so they can be edited
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> anyhow::Result<Settings> {
        let path = path.as_ref();
        if path.exists() {
            return Self::load(path);
        }
        let settings = Settings::default();
        settings.store(path)?;
        Ok(settings)
    }

    pub fn store<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            create_dir_all(parent).context("Failed to create parent directories")?;
        }
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)
            .context("Failed to open settings file")?;
        serde_json::to_writer_pretty(file, self).context("Failed to write settings")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Settings, DEFAULT_ANIMATION_MILLIS};
    use std::io::Write;
    use std::path::Path;
    use swipenav::navigation::Configuration;
    use tempfile::NamedTempFile;

    fn settings_file(json: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let settings = Settings::load(Path::new("/does/not/exist")).unwrap();
        assert_eq!(Settings::default(), settings);
        assert!(settings.transitions.is_unpop_enabled());
    }

    #[test]
    fn test_empty_file_yields_defaults() {
        let file = settings_file("");
        assert_eq!(Settings::default(), Settings::load(file.path()).unwrap());
    }

    #[test]
    fn test_partial_file_keeps_remaining_defaults() {
        let file = settings_file("{\"transitions\": {}, \"log_level\": \"debug\"}");
        let settings = Settings::load(file.path()).unwrap();
        assert_eq!(Configuration::default(), settings.transitions);
        assert_eq!("debug", settings.log_level);
        assert_eq!(DEFAULT_ANIMATION_MILLIS, settings.animation_millis);
    }

    #[test]
    fn test_zero_unpop_depth_is_an_error() {
        let file = settings_file("{\"transitions\": {\"unpop\": {\"max_depth\": 0}}}");
        assert!(Settings::load(file.path()).is_err());
    }

    #[test]
    fn test_store_and_load() {
        let file = NamedTempFile::new().unwrap();
        let settings = Settings::builder()
            .transitions(Configuration::with_unpop(3).unwrap())
            .animation_millis(100)
            .build();
        settings.store(file.path()).unwrap();
        assert_eq!(settings, Settings::load(file.path()).unwrap());
    }

    #[test]
    fn test_first_run_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("swipenav").join("settings.json");
        assert_eq!(Settings::default(), Settings::load_or_create(&path).unwrap());
        assert!(path.exists());
        assert_eq!(Settings::default(), Settings::load(&path).unwrap());
    }

    #[test]
    fn test_existing_file_is_not_overwritten() {
        let file = settings_file("{\"animation_millis\": 20}");
        let settings = Settings::load_or_create(file.path()).unwrap();
        assert_eq!(20, settings.animation_millis);
        assert_eq!(20, Settings::load(file.path()).unwrap().animation_millis);
    }
}
