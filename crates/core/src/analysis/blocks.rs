//! Lazy sequence of classified blocks read from a byte stream.

use std::io::{self, ErrorKind, Read};
use std::num::NonZeroUsize;

use log::trace;

use crate::analysis::ClassifierKind;
use crate::model::Classification;

/// One block read from the stream. The bytes themselves are not kept.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassifiedBlock {
    /// Offset of the first byte from the start of the stream.
    pub offset: u64,
    /// Number of bytes in the block; only the last block may be shorter than
    /// the block size.
    pub len: usize,
    pub classification: Classification,
}

/// Reads `reader` in fixed-size blocks and classifies each one.
///
/// Yields `Err` at most once; iteration stops after an I/O error.
pub struct BlockReader<R> {
    reader: R,
    buf: Vec<u8>,
    classifier: ClassifierKind,
    offset: u64,
    done: bool,
}

impl<R: Read> BlockReader<R> {
    pub fn new(reader: R, block_size: NonZeroUsize, classifier: ClassifierKind) -> Self {
        Self { reader, buf: vec![0; block_size.get()], classifier, offset: 0, done: false }
    }

    /// Bytes consumed so far.
    pub fn offset(&self) -> u64 {
        self.offset
    }
}

/// Fill `buf` from `reader`, stopping early only at end of stream.
fn read_block(reader: &mut impl Read, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

impl<R: Read> Iterator for BlockReader<R> {
    type Item = io::Result<ClassifiedBlock>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let len = match read_block(&mut self.reader, &mut self.buf) {
            Ok(0) => {
                self.done = true;
                return None;
            }
            Ok(n) => n,
            Err(e) => {
                self.done = true;
                return Some(Err(e));
            }
        };

        let block = ClassifiedBlock {
            offset: self.offset,
            len,
            classification: self.classifier.classify(&self.buf[..len]),
        };
        trace!("block at {:#x} ({} bytes): {:?}", block.offset, len, block.classification);

        self.offset += len as u64;
        Some(Ok(block))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn four() -> NonZeroUsize {
        NonZeroUsize::new(4).unwrap()
    }

    /// Reader that hands out at most one byte per call.
    struct Trickle<'a>(&'a [u8]);

    impl Read for Trickle<'_> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.0.is_empty() || buf.is_empty() {
                return Ok(0);
            }
            buf[0] = self.0[0];
            self.0 = &self.0[1..];
            Ok(1)
        }
    }

    #[test]
    fn yields_short_final_block() {
        let data = [0u8, 0, 0, 0, 7, 0];
        let reader = BlockReader::new(Cursor::new(&data[..]), four(), ClassifierKind::Tolerant);
        let blocks: Vec<_> = reader.collect::<io::Result<_>>()
            .expect("read blocks");
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0], ClassifiedBlock { offset: 0, len: 4, classification: Classification::Zero });
        assert_eq!(
            blocks[1],
            ClassifiedBlock { offset: 4, len: 2, classification: Classification::NonZero }
        );
    }

    #[test]
    fn short_reads_do_not_split_blocks() {
        let data = [0u8, 0, 0x11, 0x01, 0x11, 0, 0, 0];
        let reader = BlockReader::new(Trickle(&data), four(), ClassifierKind::Tolerant);
        let blocks: Vec<_> = reader.collect::<io::Result<_>>()
            .expect("read blocks");
        let lens: Vec<usize> = blocks.iter().map(|b| b.len).collect();
        assert_eq!(lens, vec![4, 4]);
        assert_eq!(blocks[0].classification, Classification::Zero);
        assert_eq!(blocks[1].classification, Classification::NonZero);
    }

    #[test]
    fn empty_stream_yields_nothing() {
        let mut reader =
            BlockReader::new(Cursor::new(Vec::new()), four(), ClassifierKind::Strict);
        assert!(reader.next().is_none());
        assert_eq!(reader.offset(), 0);
    }
}
