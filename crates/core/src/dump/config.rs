use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::analysis::{ClassifierKind, BLOCK_SIZE, MAX_BLOCK_SIZE};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read scan config at {path}: {source}")]
    Read { path: PathBuf, source: std::io::Error },

    #[error("Failed to parse scan config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse scan config YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unsupported scan config format '{0}'; expected json, yaml or yml")]
    UnsupportedFormat(String),

    #[error("Block size must be greater than zero")]
    ZeroBlockSize,

    #[error("Block size {size} exceeds the maximum of {max} bytes")]
    BlockSizeTooLarge { size: usize, max: usize },
}

/// Tunables for a scan. Every field has a default, so an empty config file
/// is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Read unit in bytes.
    pub block_size: usize,
    pub classifier: ClassifierKind,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self { block_size: BLOCK_SIZE, classifier: ClassifierKind::default() }
    }
}

impl ScanConfig {
    pub fn with_block_size(mut self, block_size: usize) -> Self {
        self.block_size = block_size;
        self
    }

    pub fn with_classifier(mut self, classifier: ClassifierKind) -> Self {
        self.classifier = classifier;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.checked_block_size().map(|_| ())
    }

    /// The block size, if it lies within `1..=MAX_BLOCK_SIZE`.
    pub fn checked_block_size(&self) -> Result<NonZeroUsize, ConfigError> {
        if self.block_size > MAX_BLOCK_SIZE {
            return Err(ConfigError::BlockSizeTooLarge {
                size: self.block_size,
                max: MAX_BLOCK_SIZE,
            });
        }
        NonZeroUsize::new(self.block_size).ok_or(ConfigError::ZeroBlockSize)
    }

    /// Load a config from JSON (`.json`) or YAML (`.yaml`/`.yml`).
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default().to_ascii_lowercase();
        if !matches!(ext.as_str(), "json" | "yaml" | "yml") {
            return Err(ConfigError::UnsupportedFormat(ext));
        }

        let body = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        let config: ScanConfig =
            if ext == "json" { serde_json::from_str(&body)? } else { serde_yaml::from_str(&body)? };
        config.validate()?;
        Ok(config)
    }
}
