//! Store configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `CANTEEN_DATA_DIR` - Directory holding the data file (default: ./storage)

use std::path::PathBuf;

/// Name of the JSON document inside the data directory.
pub const DATA_FILE_NAME: &str = "app-data.json";

/// Store configuration.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory holding the data file. Created on first open if missing.
    pub data_dir: PathBuf,
}

impl StoreConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    /// Infallible - every variable has a default.
    #[must_use]
    pub fn from_env() -> Self {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = std::env::var("CANTEEN_DATA_DIR")
            .map_or_else(|_| PathBuf::from("./storage"), PathBuf::from);

        Self { data_dir }
    }

    /// Full path of the backing data file.
    #[must_use]
    pub fn data_file(&self) -> PathBuf {
        self.data_dir.join(DATA_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_file_joins_directory() {
        let config = StoreConfig {
            data_dir: PathBuf::from("/tmp/canteen"),
        };
        assert_eq!(config.data_file(), PathBuf::from("/tmp/canteen/app-data.json"));
    }
}
