//! Block classification and region segmentation.
//!
//! The pipeline is split so each stage can be exercised on its own:
//! - [`classify`]: decides whether a single block is blank
//! - [`BlockReader`]: lazily reads and classifies fixed-size blocks
//! - [`RegionAccumulator`]: merges consecutive blocks into maximal regions

use thiserror::Error;

use crate::dump::{ConfigError, NameError};

pub mod blocks;
pub mod classify;
pub mod segmenter;

pub use blocks::{BlockReader, ClassifiedBlock};
pub use classify::{is_effectively_zero, is_strictly_zero, ClassifierKind, ARTIFACT_PATTERN};
pub use segmenter::{segment, segment_blocks, RegionAccumulator};

/// Fixed read unit for dump analysis.
pub const BLOCK_SIZE: usize = 65536;

/// Largest block size a [`ScanConfig`](crate::dump::ScanConfig) accepts (64 MiB).
pub const MAX_BLOCK_SIZE: usize = 64 * 1024 * 1024;

/// Error type for analyzing a dump.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The file name carries no usable base address.
    #[error(transparent)]
    Name(#[from] NameError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// `base + offset` does not fit in 64 bits.
    #[error("Address overflow: base {base:#x} + offset {offset:#x} exceeds the address space")]
    AddressOverflow { base: u64, offset: u64 },
}
