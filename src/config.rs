//! Node configuration
//!
//! Network selection (address version bytes) and the data directory.
//! Loaded from JSON; every field has a default.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use crate::constants::{
    CLIENT_NAME, COINBASE_MATURITY, COINBASE_MATURITY_TEST_NETWORK, DEFAULT_MEDIAN_WINDOW,
};

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Median window must be at least 1")]
    InvalidMedianWindow,
}

/// Which chain the node follows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    #[default]
    Main,
    Test,
}

impl Network {
    /// Version byte of pay-to-pubkey-hash addresses
    pub const fn pubkey_hash_version(self) -> u8 {
        match self {
            Network::Main => 71,
            Network::Test => 111,
        }
    }

    /// Version byte of pay-to-script-hash addresses
    pub const fn script_hash_version(self) -> u8 {
        match self {
            Network::Main => 8,
            Network::Test => 196,
        }
    }

    /// Directory name under the platform data location
    /// Blocks before a coinbase output can be spent
    pub fn coinbase_maturity(self) -> u32 {
        match self {
            Network::Main => COINBASE_MATURITY,
            Network::Test => COINBASE_MATURITY_TEST_NETWORK,
        }
    }

    pub fn data_dir_name(self) -> String {
        match self {
            Network::Main => CLIENT_NAME.to_string(),
            Network::Test => format!("{}TestNet", CLIENT_NAME),
        }
    }
}

/// Node configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub network: Network,
    /// Overrides the platform data directory
    pub data_dir: Option<PathBuf>,
    /// Number of peer clock samples kept by the time consensus
    pub median_window: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            network: Network::Main,
            data_dir: None,
            median_window: DEFAULT_MEDIAN_WINDOW,
        }
    }
}

impl Config {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.check()?;
        Ok(config)
    }

    /// Load a JSON config file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    fn check(&self) -> Result<(), ConfigError> {
        if self.median_window == 0 {
            return Err(ConfigError::InvalidMedianWindow);
        }
        Ok(())
    }

    /// Where the block store lives
    pub fn data_path(&self) -> PathBuf {
        match &self.data_dir {
            Some(dir) => dir.clone(),
            None => default_data_path(self.network),
        }
    }
}

/// Platform data directory for `network`
///
/// `%APPDATA%\<name>` on Windows, `~/Library/Application Support/<name>` on
/// macOS, `~/.<name>/data` elsewhere.
pub fn default_data_path(network: Network) -> PathBuf {
    let name = network.data_dir_name();

    if cfg!(any(target_os = "windows", target_os = "macos")) {
        if let Some(base) = dirs::data_dir() {
            return base.join(name);
        }
    }

    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    home.join(format!(".{}", name)).join("data")
}
