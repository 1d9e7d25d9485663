//! Configuration for seeding runs.

use std::env;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::catalog::PRODUCT_COUNT;

/// File name of the database, resolved against the working directory.
pub const DEFAULT_DB_FILE: &str = "local.db";

/// Configuration for a seeding run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// SQLite database file, created if missing.
    pub database_path: PathBuf,

    /// Number of products to generate.
    pub product_count: usize,

    /// Rows per multi-row insert statement.
    pub batch_size: usize,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from(DEFAULT_DB_FILE),
            product_count: PRODUCT_COUNT,
            batch_size: 50,
        }
    }
}

impl SeedConfig {
    /// Configuration for `local.db` inside `dir`.
    pub fn in_dir(dir: &Path) -> Self {
        Self::default().with_database_path(dir.join(DEFAULT_DB_FILE))
    }

    /// Configuration for `local.db` in the current working directory.
    pub fn from_current_dir() -> io::Result<Self> {
        Ok(Self::in_dir(&env::current_dir()?))
    }

    /// Sets the database file.
    pub fn with_database_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.database_path = path.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SeedConfig::default();
        assert_eq!(config.database_path, Path::new("local.db"));
        assert_eq!(config.product_count, 1184);
        assert_eq!(config.batch_size, 50);
    }

    #[test]
    fn test_in_dir() {
        let config = SeedConfig::in_dir(Path::new("/tmp/market"));
        assert_eq!(config.database_path, Path::new("/tmp/market/local.db"));
    }

    #[test]
    fn test_from_current_dir() {
        let config = SeedConfig::from_current_dir().unwrap();
        let expected = env::current_dir().unwrap().join("local.db");
        assert_eq!(config.database_path, expected);
        assert!(config.database_path.is_absolute());
    }

    #[test]
    fn test_config_deserialize() {
        let config: SeedConfig = serde_json::from_str(
            r#"{"database_path":"/srv/seed/local.db","product_count":10,"batch_size":5}"#,
        )
        .unwrap();

        assert_eq!(config.database_path, Path::new("/srv/seed/local.db"));
        assert_eq!(config.product_count, 10);
        assert_eq!(config.batch_size, 5);
    }
}
