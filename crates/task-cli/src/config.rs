//! Configuration loading
//!
//! `TrackerConfig` is read from TOML. Lookup order: explicit `--config`
//! path, then `~/.task-tracker/config.toml`, then defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use task_core::TransitionPolicy;
use thiserror::Error;

pub const CONFIG_DIR_NAME: &str = ".task-tracker";
pub const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TrackerConfig {
    pub transition_policy: TransitionPolicy,
    pub debug: bool,
    /// Print each tool call before its result
    pub echo_calls: bool,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            transition_policy: TransitionPolicy::Permissive,
            debug: false,
            echo_calls: true,
        }
    }
}

impl TrackerConfig {
    pub fn from_toml_str(content: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content, path)
    }

    /// The file `load` reads: the explicit path, else the default location
    /// when it exists.
    pub fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
        match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => default_config_path().filter(|path| path.is_file()),
        }
    }

    /// An explicit path must exist; the default location is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match Self::resolve_path(explicit) {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_permissive() {
        let config = TrackerConfig::default();
        assert_eq!(config.transition_policy, TransitionPolicy::Permissive);
        assert!(!config.debug);
        assert!(config.echo_calls);
    }

    #[test]
    fn partial_file_keeps_defaults() {
        let config =
            TrackerConfig::from_toml_str("transition_policy = \"strict\"\n", Path::new("x.toml"))
                .unwrap();
        assert_eq!(config.transition_policy, TransitionPolicy::Strict);
        assert!(config.echo_calls);
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "debug = true\necho_calls = false").unwrap();

        let config = TrackerConfig::load(Some(file.path())).unwrap();
        assert!(config.debug);
        assert!(!config.echo_calls);
        assert_eq!(config.transition_policy, TransitionPolicy::Permissive);
    }

    #[test]
    fn unknown_policy_is_a_parse_error() {
        let err = TrackerConfig::from_toml_str("transition_policy = \"loose\"", Path::new("c.toml"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn explicit_path_is_resolved_even_when_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        assert_eq!(TrackerConfig::resolve_path(Some(&path)), Some(path));
    }

    #[test]
    fn missing_explicit_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = TrackerConfig::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
