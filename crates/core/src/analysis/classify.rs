//! Block classification predicates.

use serde::{Deserialize, Serialize};

use crate::model::Classification;

/// Non-zero byte sequence some dump sources leave behind in erased memory.
///
/// A block whose non-zero bytes are nothing but repetitions of this pattern
/// still counts as blank.
pub const ARTIFACT_PATTERN: [u8; 2] = [0x11, 0x01];

/// Which predicate decides whether a block is blank.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassifierKind {
    /// Zero bytes plus the tolerated `0x11 0x01` artifact.
    #[default]
    Tolerant,
    /// Every byte must be `0x00`.
    Strict,
}

impl ClassifierKind {
    pub fn classify(self, block: &[u8]) -> Classification {
        let zero = match self {
            ClassifierKind::Tolerant => is_effectively_zero(block),
            ClassifierKind::Strict => is_strictly_zero(block),
        };
        if zero {
            Classification::Zero
        } else {
            Classification::NonZero
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ClassifierKind::Tolerant => "tolerant",
            ClassifierKind::Strict => "strict",
        }
    }
}

/// True if every byte of `block` is zero.
pub fn is_strictly_zero(block: &[u8]) -> bool {
    block.iter().all(|&b| b == 0)
}

/// True if `block` is all zero, or if its non-zero bytes, read in order with
/// the zeros stripped out, form a whole number of [`ARTIFACT_PATTERN`]
/// repetitions. Where the zero bytes sit does not matter.
pub fn is_effectively_zero(block: &[u8]) -> bool {
    let mut seen = 0usize;
    for &byte in block.iter().filter(|&&b| b != 0) {
        if byte != ARTIFACT_PATTERN[seen % ARTIFACT_PATTERN.len()] {
            return false;
        }
        seen += 1;
    }
    seen % ARTIFACT_PATTERN.len() == 0
}
