//! Store configuration for skillrank
//!
//! Configuration is stored in `.skillrank/config.toml`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::colony::ColonyConfig;
use crate::error::{Result, SkillrankError};

/// Current store format version
pub const STORE_FORMAT_VERSION: u32 = 1;

/// Number of recommendations shown when not configured
pub const DEFAULT_LIMIT: usize = 5;

/// Corpus file looked up when not configured
pub const DEFAULT_CORPUS: &str = "coursera-courses.csv";

/// Store configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store format version for compatibility checking
    #[serde(default = "default_version")]
    pub version: u32,

    /// Corpus file; relative paths resolve against the store's parent directory
    #[serde(default = "default_corpus")]
    pub corpus: PathBuf,

    /// Recommendations shown per query
    #[serde(default = "default_limit")]
    pub limit: usize,

    /// Colony parameters used for every recommendation
    #[serde(default)]
    pub colony: ColonyConfig,
}

fn default_version() -> u32 {
    STORE_FORMAT_VERSION
}

fn default_corpus() -> PathBuf {
    PathBuf::from(DEFAULT_CORPUS)
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            version: STORE_FORMAT_VERSION,
            corpus: default_corpus(),
            limit: DEFAULT_LIMIT,
            colony: ColonyConfig::default(),
        }
    }
}

impl StoreConfig {
    /// Load configuration from a file, validating the colony section
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| SkillrankError::io_operation("read config", path.display(), e))?;
        let config: StoreConfig = toml::from_str(&content)?;

        if config.version > STORE_FORMAT_VERSION {
            return Err(SkillrankError::invalid_value(
                "store version",
                format!(
                    "{} (this build supports up to {})",
                    config.version, STORE_FORMAT_VERSION
                ),
            ));
        }
        config.colony.validate()?;

        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| SkillrankError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)
            .map_err(|e| SkillrankError::io_operation("write config", path.display(), e))?;
        Ok(())
    }
}
