//! Run-length merge of classified blocks into address regions.

use std::io::{self, Read};

use log::debug;

use crate::analysis::{BlockReader, ClassifiedBlock, ScanError};
use crate::dump::ScanConfig;
use crate::model::{AddressRange, Classification, RegionMap};

/// Builds a [`RegionMap`] from blocks fed in file order.
///
/// At most one region is open at a time; it is closed when a block with a
/// different classification arrives or when [`finish`](Self::finish) is
/// called.
#[derive(Debug)]
pub struct RegionAccumulator {
    base_address: u64,
    open: Option<(u64, Classification)>,
    end: u64,
    regions: RegionMap,
}

impl RegionAccumulator {
    pub fn new(base_address: u64) -> Self {
        Self { base_address, open: None, end: base_address, regions: RegionMap::new() }
    }

    /// Feed the next block. Blocks must be contiguous and in file order.
    pub fn push(&mut self, block: &ClassifiedBlock) -> Result<(), ScanError> {
        let (base, offset) = (self.base_address, block.offset);
        let overflow = move || ScanError::AddressOverflow { base, offset };
        let start = base.checked_add(offset).ok_or_else(overflow)?;
        let end = start.checked_add(block.len as u64).ok_or_else(overflow)?;

        match self.open {
            None => self.open = Some((start, block.classification)),
            Some((open_start, classification)) if classification != block.classification => {
                self.close(open_start, start, classification);
                self.open = Some((start, block.classification));
            }
            Some(_) => {}
        }

        self.end = end;
        Ok(())
    }

    /// Close the open region, if any, and return the result.
    pub fn finish(mut self) -> RegionMap {
        if let Some((open_start, classification)) = self.open.take() {
            self.close(open_start, self.end, classification);
        }
        self.regions
    }

    fn close(&mut self, start: u64, end: u64, classification: Classification) {
        debug!("{} region {:#010x} - {:#010x}", classification.as_str(), start, end);
        self.regions.push(classification, AddressRange::new(start, end));
    }
}

/// Merge an already-classified block sequence into regions.
pub fn segment_blocks<I>(blocks: I, base_address: u64) -> Result<RegionMap, ScanError>
where
    I: IntoIterator<Item = io::Result<ClassifiedBlock>>,
{
    let mut acc = RegionAccumulator::new(base_address);
    for block in blocks {
        acc.push(&block?)?;
    }
    Ok(acc.finish())
}

/// Stream `reader` once and segment it into zeroed and non-zero regions,
/// with addresses starting at `base_address`.
pub fn segment<R: Read>(
    reader: R,
    base_address: u64,
    config: &ScanConfig,
) -> Result<RegionMap, ScanError> {
    let block_size = config.checked_block_size()?;
    let blocks = BlockReader::new(reader, block_size, config.classifier);
    segment_blocks(blocks, base_address)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(offset: u64, len: usize, classification: Classification) -> io::Result<ClassifiedBlock> {
        Ok(ClassifiedBlock { offset, len, classification })
    }

    #[test]
    fn alternating_blocks_close_regions_at_boundaries() {
        let blocks = vec![
            block(0, 4, Classification::Zero),
            block(4, 4, Classification::NonZero),
            block(8, 4, Classification::NonZero),
            block(12, 2, Classification::Zero),
        ];
        let map = segment_blocks(blocks, 0x1000).expect("segment");
        assert_eq!(map.zero, vec![AddressRange::new(0x1000, 0x1004), AddressRange::new(0x100c, 0x100e)]);
        assert_eq!(map.non_zero, vec![AddressRange::new(0x1004, 0x100c)]);
    }

    #[test]
    fn no_blocks_means_no_regions() {
        let map = segment_blocks(Vec::<io::Result<ClassifiedBlock>>::new(), 0x40).expect("segment");
        assert!(map.is_empty());
    }

    #[test]
    fn io_error_is_propagated() {
        let blocks = vec![
            block(0, 4, Classification::Zero),
            Err(io::Error::new(io::ErrorKind::Other, "disk gone")),
        ];
        let err = segment_blocks(blocks, 0).unwrap_err();
        assert!(matches!(err, ScanError::Io(_)));
    }

    #[test]
    fn end_past_address_space_is_rejected() {
        let blocks = vec![block(0, 4, Classification::Zero)];
        let err = segment_blocks(blocks, u64::MAX - 1).unwrap_err();
        assert!(matches!(err, ScanError::AddressOverflow { .. }));
    }
}
