use std::path::Path;

use anyhow::{Context, Result};
use zeroscan_core::analysis::ClassifierKind;
use zeroscan_core::dump::ScanConfig;

/// Build the effective scan config: file values (if any), then CLI overrides.
pub fn load_scan_config(
    config_path: Option<&Path>,
    block_size: Option<usize>,
    strict: bool,
) -> Result<ScanConfig> {
    let mut config = match config_path {
        Some(path) => ScanConfig::load(path)
            .with_context(|| format!("Failed to load scan config from {}", path.display()))?,
        None => ScanConfig::default(),
    };

    if let Some(size) = block_size {
        config = config.with_block_size(size);
    }
    if strict {
        config = config.with_classifier(ClassifierKind::Strict);
    }

    config.validate().context("Invalid scan configuration")?;
    Ok(config)
}
