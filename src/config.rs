use std::path::PathBuf;
use thiserror::Error;

/// File name used under the home directory when no path is given.
pub const DEFAULT_DB_FILE: &str = "people.db";

/// Environment variable consulted for the database path (read by clap).
pub const ENV_DB_PATH: &str = "PEOPLE_DB";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not find home directory; pass --db or set PEOPLE_DB")]
    NoHomeDir,
}

/// Settings resolved once at startup and passed down to every command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub db_path: PathBuf,
}

impl Config {
    /// Use the explicit path if given, otherwise `~/people.db`.
    pub fn resolve(db_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        Self::resolve_with_home(db_path, dirs::home_dir())
    }

    fn resolve_with_home(
        db_path: Option<PathBuf>,
        home: Option<PathBuf>,
    ) -> Result<Self, ConfigError> {
        let db_path = match db_path {
            Some(path) => path,
            None => home.ok_or(ConfigError::NoHomeDir)?.join(DEFAULT_DB_FILE),
        };
        Ok(Self { db_path })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path_wins() {
        let config = Config::resolve_with_home(
            Some(PathBuf::from("/tmp/custom.db")),
            Some(PathBuf::from("/home/user")),
        )
        .unwrap();
        assert_eq!(config.db_path, PathBuf::from("/tmp/custom.db"));
    }

    #[test]
    fn test_defaults_to_home() {
        let config = Config::resolve_with_home(None, Some(PathBuf::from("/home/user"))).unwrap();
        assert_eq!(config.db_path, PathBuf::from("/home/user/people.db"));
    }

    #[test]
    fn test_explicit_path_without_home() {
        let config = Config::resolve_with_home(Some(PathBuf::from("x.db")), None).unwrap();
        assert_eq!(config.db_path, PathBuf::from("x.db"));
    }

    #[test]
    fn test_no_home_is_error() {
        let err = Config::resolve_with_home(None, None).unwrap_err();
        assert!(matches!(err, ConfigError::NoHomeDir));
        assert!(err.to_string().contains("PEOPLE_DB"));
    }
}
