//! Core data model for dump analysis: classifications, address ranges and
//! the per-file region map produced by the segmenter.

use serde::{Deserialize, Serialize};

/// Classification of a block or region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// Blank memory (all zero, or only the tolerated artifact pattern).
    Zero,
    /// Anything else.
    NonZero,
}

impl Classification {
    pub fn as_str(self) -> &'static str {
        match self {
            Classification::Zero => "zero",
            Classification::NonZero => "non_zero",
        }
    }
}

/// Half-open range of absolute addresses, `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AddressRange {
    pub start: u64,
    pub end: u64,
}

impl AddressRange {
    pub const fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> u64 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl From<(u64, u64)> for AddressRange {
    fn from((start, end): (u64, u64)) -> Self {
        Self::new(start, end)
    }
}

/// An address range tagged with its classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub range: AddressRange,
    pub classification: Classification,
}

/// Zeroed and non-zero regions of one dump, each list in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionMap {
    pub zero: Vec<AddressRange>,
    pub non_zero: Vec<AddressRange>,
}

impl RegionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.zero.is_empty() && self.non_zero.is_empty()
    }

    /// Append a closed region to the list matching its classification.
    pub fn push(&mut self, classification: Classification, range: AddressRange) {
        match classification {
            Classification::Zero => self.zero.push(range),
            Classification::NonZero => self.non_zero.push(range),
        }
    }

    /// Both lists merged into a single sequence ordered by start address.
    pub fn merged(&self) -> Vec<Region> {
        let mut regions: Vec<Region> = self
            .zero
            .iter()
            .map(|&range| Region { range, classification: Classification::Zero })
            .chain(
                self.non_zero
                    .iter()
                    .map(|&range| Region { range, classification: Classification::NonZero }),
            )
            .collect();
        regions.sort_by_key(|r| r.range.start);
        regions
    }

    /// Total number of bytes classified as zero.
    pub fn zero_bytes(&self) -> u64 {
        self.zero.iter().map(AddressRange::len).sum()
    }

    /// Total number of bytes classified as non-zero.
    pub fn non_zero_bytes(&self) -> u64 {
        self.non_zero.iter().map(AddressRange::len).sum()
    }
}
