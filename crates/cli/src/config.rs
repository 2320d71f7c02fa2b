//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `BASKET_DATA_DIR` - Directory holding the durable cart store
//!   (default: `.basket`)

use std::path::PathBuf;

/// Default store directory, relative to the working directory.
const DEFAULT_DATA_DIR: &str = ".basket";

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Directory holding the durable cart store.
    pub data_dir: PathBuf,
}

impl CliConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from a `.env` file if present.
    #[must_use]
    pub fn from_env() -> Self {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir =
            std::env::var("BASKET_DATA_DIR").unwrap_or_else(|_| DEFAULT_DATA_DIR.to_owned());

        Self {
            data_dir: PathBuf::from(data_dir),
        }
    }
}
