use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::domain::StatsScope;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Simulated sign-in delay.
    pub login_delay_ms: u64,

    /// Event poll timeout; also drives animations.
    pub tick_rate_ms: u64,

    pub sidebar_collapsed: bool,

    pub stats_scope: StatsScope,

    pub currency_symbol: String,

    pub export_dir: Option<PathBuf>,

    pub log_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            login_delay_ms: 1500,
            tick_rate_ms: 200,
            sidebar_collapsed: false,
            stats_scope: StatsScope::default(),
            currency_symbol: "₱".to_string(),
            export_dir: None,
            log_dir: None,
        }
    }
}

impl Config {
    pub fn export_dir(&self) -> PathBuf {
        self.export_dir
            .clone()
            .or_else(|| data_dir().map(|dir| dir.join("exports")))
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn log_dir(&self) -> PathBuf {
        self.log_dir
            .clone()
            .or_else(|| data_dir().map(|dir| dir.join("logs")))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Load the config from `explicit`, or from the first default location.
///
/// A missing file is not an error.
pub fn load(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    let Some(path) = explicit.map(Path::to_path_buf).or_else(config_path) else {
        return Ok(Config::default());
    };
    match load_from(&path) {
        Err(ConfigError::Read { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
            Ok(Config::default())
        }
        other => other,
    }
}

pub fn load_from(path: &Path) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str::<Config>(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn config_path() -> Option<PathBuf> {
    if let Some(path) = std::env::var_os("OPSBOARD_CONFIG").map(PathBuf::from) {
        return Some(path);
    }
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from) {
        return Some(xdg.join("opsboard").join("config.toml"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".config").join("opsboard").join("config.toml"));
    }

    directories::ProjectDirs::from("io", "opsboard", "opsboard")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

pub fn data_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_DATA_HOME").map(PathBuf::from) {
        return Some(xdg.join("opsboard"));
    }
    if let Some(home) = std::env::var_os("HOME").map(PathBuf::from) {
        return Some(home.join(".local").join("share").join("opsboard"));
    }
    directories::ProjectDirs::from("io", "opsboard", "opsboard")
        .map(|dirs| dirs.data_dir().to_path_buf())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_file_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "login_delay_ms = 10\nstats_scope = \"all\"").unwrap();

        let config = load_from(file.path()).unwrap();
        assert_eq!(config.login_delay_ms, 10);
        assert_eq!(config.stats_scope, StatsScope::All);
        assert_eq!(config.tick_rate_ms, 200);
        assert_eq!(config.currency_symbol, "₱");
    }

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = load(Some(&dir.path().join("absent.toml"))).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "stats_scope = \"sometimes\"").unwrap();
        let err = load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_explicit_export_dir_wins() {
        let config = Config {
            export_dir: Some(PathBuf::from("/tmp/out")),
            ..Default::default()
        };
        assert_eq!(config.export_dir(), PathBuf::from("/tmp/out"));
    }
}
