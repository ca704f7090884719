//! # Configuration
//!
//! Session configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`MERCAT_*`)
//! 2. Defaults (this file)
//!
//! Configuration is read-only after initialization.

use std::path::PathBuf;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use mercat_core::MAX_CART_SCANS;

/// Session configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Store name printed on the welcome banner and every receipt.
    pub store_name: String,

    /// Directory receipt artifacts are written to.
    pub receipt_dir: PathBuf,

    /// Cart capacity in scans.
    pub capacity: u32,
}

impl Default for Config {
    /// Returns the default configuration.
    ///
    /// ## Default Values
    /// - Store: "SAPAMERCAT"
    /// - Receipts: `<platform data dir>/receipts` (e.g.
    ///   `~/.local/share/mercat/receipts` on Linux)
    /// - Capacity: 10 scans
    fn default() -> Self {
        Config {
            store_name: "SAPAMERCAT".to_string(),
            receipt_dir: default_receipt_dir(),
            capacity: MAX_CART_SCANS,
        }
    }
}

impl Config {
    /// Creates a Config from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `MERCAT_STORE_NAME`: Override store name
    /// - `MERCAT_RECEIPT_DIR`: Override receipt directory
    /// - `MERCAT_CART_CAPACITY`: Override cart capacity (whole number)
    pub fn from_env() -> Self {
        let mut config = Config::default();

        if let Ok(store_name) = std::env::var("MERCAT_STORE_NAME") {
            config.store_name = store_name;
        }

        if let Ok(receipt_dir) = std::env::var("MERCAT_RECEIPT_DIR") {
            config.receipt_dir = PathBuf::from(receipt_dir);
        }

        if let Ok(capacity_str) = std::env::var("MERCAT_CART_CAPACITY") {
            if let Ok(capacity) = capacity_str.parse::<u32>() {
                config.capacity = capacity;
            }
        }

        config
    }
}

/// Platform-specific receipt directory.
///
/// - **macOS**: `~/Library/Application Support/com.sapamercat.mercat/receipts`
/// - **Windows**: `%APPDATA%\sapamercat\mercat\data\receipts`
/// - **Linux**: `~/.local/share/mercat/receipts`
///
/// Falls back to `./receipts` when no home directory can be determined.
fn default_receipt_dir() -> PathBuf {
    ProjectDirs::from("com", "sapamercat", "mercat")
        .map(|dirs| dirs.data_dir().join("receipts"))
        .unwrap_or_else(|| PathBuf::from("receipts"))
}
