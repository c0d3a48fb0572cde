use crate::game::Settings;
use log::LevelFilter;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Program configuration read from a configuration file
#[derive(Clone, Deserialize, Debug, Default, Eq, PartialEq)]
pub(crate) struct Config {
    /// Parameters for new games
    #[serde(default)]
    pub(crate) game: Settings,

    /// Where & how much to log
    #[serde(default)]
    pub(crate) log: LogConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("wrapsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read a TOML file with optional `[game]` and `[log]` tables.  Keys left
    /// out of either table keep their defaults.  A missing file gives the
    /// default `Config` when `allow_missing` is true.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or is not valid TOML for a
    /// `Config`.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }
}

#[derive(Clone, Deserialize, Debug, Eq, PartialEq)]
#[serde(default)]
pub(crate) struct LogConfig {
    /// File to write log messages to.  Nothing is logged if this is unset.
    pub(crate) file: Option<PathBuf>,

    /// Minimum level of messages to log
    pub(crate) level: LevelFilter,
}

impl Default for LogConfig {
    fn default() -> LogConfig {
        LogConfig {
            file: None,
            level: LevelFilter::Info,
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[test]
    fn load_full() {
        let tmpdir = tempdir().expect("should be able to create a temporary directory");
        let path = tmpdir.path().join("config.toml");
        fs_err::write(
            &path,
            concat!(
                "[game]\n",
                "rows = 20\n",
                "cols = 25\n",
                "lives = 5\n",
                "flowers = 4\n",
                "snake-length = 6\n",
                "\n",
                "[log]\n",
                "file = \"/tmp/wrapsnake.log\"\n",
                "level = \"debug\"\n",
            ),
        )
        .expect("should be able to write the config file");
        let cfg = Config::load(&path, false).expect("config should load");
        assert_eq!(
            cfg,
            Config {
                game: Settings {
                    rows: 20,
                    cols: 25,
                    lives: 5,
                    flowers: 4,
                    snake_length: 6,
                },
                log: LogConfig {
                    file: Some(PathBuf::from("/tmp/wrapsnake.log")),
                    level: LevelFilter::Debug,
                },
            }
        );
    }

    #[test]
    fn load_partial() {
        let tmpdir = tempdir().expect("should be able to create a temporary directory");
        let path = tmpdir.path().join("config.toml");
        fs_err::write(&path, "[game]\nlives = 1\n").expect("should be able to write the config file");
        let cfg = Config::load(&path, false).expect("config should load");
        assert_eq!(
            cfg,
            Config {
                game: Settings {
                    lives: 1,
                    ..Settings::default()
                },
                log: LogConfig::default(),
            }
        );
    }

    #[test]
    fn load_empty() {
        let tmpdir = tempdir().expect("should be able to create a temporary directory");
        let path = tmpdir.path().join("config.toml");
        fs_err::write(&path, "").expect("should be able to write the config file");
        assert_eq!(
            Config::load(&path, false).expect("config should load"),
            Config::default()
        );
    }

    #[test]
    fn load_missing_allowed() {
        let tmpdir = tempdir().expect("should be able to create a temporary directory");
        let path = tmpdir.path().join("nonexistent.toml");
        assert_eq!(
            Config::load(&path, true).expect("missing config should be allowed"),
            Config::default()
        );
    }

    #[test]
    fn load_missing_not_allowed() {
        let tmpdir = tempdir().expect("should be able to create a temporary directory");
        let path = tmpdir.path().join("nonexistent.toml");
        let r = Config::load(&path, false);
        assert!(matches!(r, Err(ConfigError::Read(_))), "got {r:?}");
    }

    #[test]
    fn load_invalid() {
        let tmpdir = tempdir().expect("should be able to create a temporary directory");
        let path = tmpdir.path().join("config.toml");
        fs_err::write(&path, "[game]\nrows = \"many\"\n")
            .expect("should be able to write the config file");
        let r = Config::load(&path, false);
        assert!(matches!(r, Err(ConfigError::Parse(_))), "got {r:?}");
    }

    #[test]
    fn load_log_table_only() {
        let tmpdir = tempdir().expect("should be able to create a temporary directory");
        let path = tmpdir.path().join("config.toml");
        fs_err::write(&path, "[log]\nlevel = \"warn\"\n")
            .expect("should be able to write the config file");
        let cfg = Config::load(&path, false).expect("config should load");
        assert_eq!(cfg.game, Settings::default());
        assert_eq!(cfg.log.file, None);
        assert_eq!(cfg.log.level, LevelFilter::Warn);
    }

    #[test]
    fn default_log_level_is_info() {
        assert_eq!(Config::default().log.level, LevelFilter::Info);
        assert_eq!(Config::default().log.file, None);
    }
}
