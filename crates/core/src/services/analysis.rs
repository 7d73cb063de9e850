use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use log::info;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::analysis::{segment, ClassifierKind, ScanError};
use crate::dump::{DumpName, ScanConfig};
use crate::model::RegionMap;

/// Result of analyzing one dump file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DumpAnalysis {
    pub file_name: String,
    pub base_address: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captured_at: Option<NaiveDateTime>,
    pub size_bytes: u64,
    /// Hex SHA-256 of the dump contents.
    pub sha256: String,
    pub classifier: ClassifierKind,
    pub regions: RegionMap,
}

impl DumpAnalysis {
    /// First address past the end of the dump.
    pub fn end_address(&self) -> u64 {
        self.base_address.saturating_add(self.size_bytes)
    }
}

/// Reader adapter that hashes and counts everything read through it.
pub struct HashingReader<R> {
    inner: R,
    hasher: Sha256,
    bytes: u64,
}

impl<R: Read> HashingReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, hasher: Sha256::new(), bytes: 0 }
    }

    /// Hex digest and total byte count of everything read so far.
    pub fn finish(self) -> (String, u64) {
        (format!("{:x}", self.hasher.finalize()), self.bytes)
    }
}

impl<R: Read> Read for HashingReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.hasher.update(&buf[..n]);
        self.bytes += n as u64;
        Ok(n)
    }
}

/// Analyze a dump from any reader. `file_name` supplies the base address.
///
/// The name is parsed before anything is read, so a malformed name never
/// consumes the reader.
pub fn analyze_reader<R: Read>(
    file_name: &str,
    reader: R,
    config: &ScanConfig,
) -> Result<DumpAnalysis, ScanError> {
    let name = DumpName::parse(file_name)?;
    analyze_named(file_name, name, reader, config)
}

/// Analyze the dump at `path` in a single streaming pass.
///
/// A malformed file name is reported before the file is opened.
pub fn analyze_dump(path: &Path, config: &ScanConfig) -> Result<DumpAnalysis, ScanError> {
    let file_name = dump_file_name(path);
    let name = DumpName::parse(&file_name)?;

    let file = File::open(path)?;
    analyze_named(&file_name, name, BufReader::new(file), config)
}

fn analyze_named<R: Read>(
    file_name: &str,
    name: DumpName,
    reader: R,
    config: &ScanConfig,
) -> Result<DumpAnalysis, ScanError> {
    let mut hashing = HashingReader::new(reader);
    let regions = segment(&mut hashing, name.base_address, config)?;
    let (sha256, size_bytes) = hashing.finish();

    info!(
        "{}: {} bytes, {} zeroed / {} non-zero regions",
        file_name,
        size_bytes,
        regions.zero.len(),
        regions.non_zero.len()
    );

    Ok(DumpAnalysis {
        file_name: file_name.to_string(),
        base_address: name.base_address,
        captured_at: name.captured_at,
        size_bytes,
        sha256,
        classifier: config.classifier,
        regions,
    })
}

/// File name component of `path`, lossily converted; the whole path when
/// there is no final component.
pub fn dump_file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

/// Regular files directly inside `dir` whose names end in `.csv`, sorted by
/// file name.
pub fn discover_dumps(dir: &Path) -> io::Result<Vec<PathBuf>> {
    let suffix = format!(".{}", crate::dump::DUMP_EXTENSION);
    let mut dumps = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        let matches = path.file_name().is_some_and(|n| n.to_string_lossy().ends_with(&suffix));
        if matches && path.is_file() {
            dumps.push(path);
        }
    }
    dumps.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(dumps)
}
