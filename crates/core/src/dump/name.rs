use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Extension every dump file carries.
pub const DUMP_EXTENSION: &str = "csv";

static ADDRESS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"0x([0-9a-fA-F]+)\.csv$").expect("valid address regex"));

/// Capture stamp written by the dumper: `YYYY_MM_DD_HH_MM_0x...`.
static CAPTURE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d{4})_(\d{2})_(\d{2})_(\d{2})_(\d{2})_0x").expect("valid capture regex")
});

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NameError {
    #[error("Could not parse start address from filename: {0}")]
    MissingAddress(String),

    #[error("Start address in filename {name} does not fit in 64 bits: 0x{digits}")]
    AddressOutOfRange { name: String, digits: String },
}

/// Extract the base address from a dump file name such as `dump_0x1A000000.csv`.
pub fn parse_base_address(file_name: &str) -> Result<u64, NameError> {
    let digits = ADDRESS_RE
        .captures(file_name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
        .ok_or_else(|| NameError::MissingAddress(file_name.to_string()))?;

    u64::from_str_radix(digits, 16).map_err(|_| NameError::AddressOutOfRange {
        name: file_name.to_string(),
        digits: digits.to_string(),
    })
}

/// Everything a dump's file name tells us about it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DumpName {
    pub base_address: u64,
    /// Present only for names following the dumper's timestamped scheme.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captured_at: Option<NaiveDateTime>,
}

impl DumpName {
    pub fn parse(file_name: &str) -> Result<Self, NameError> {
        let base_address = parse_base_address(file_name)?;
        Ok(Self { base_address, captured_at: parse_capture_time(file_name) })
    }
}

/// Capture time from the name prefix; `None` when absent or not a real date.
fn parse_capture_time(file_name: &str) -> Option<NaiveDateTime> {
    let caps = CAPTURE_RE.captures(file_name)?;
    let field = |i: usize| caps.get(i).and_then(|m| m.as_str().parse::<u32>().ok());

    let year = i32::try_from(field(1)?).ok()?;
    NaiveDate::from_ymd_opt(year, field(2)?, field(3)?)?.and_hms_opt(field(4)?, field(5)?, 0)
}
