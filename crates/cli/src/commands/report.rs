use std::fmt::Write;

use serde::Serialize;
use zeroscan_core::model::AddressRange;
use zeroscan_core::services::DumpAnalysis;

/// A dump that could not be analyzed during a batch run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedDump {
    pub file: String,
    pub error: String,
}

/// Everything a batch run produced, in file order.
#[derive(Debug, Default, Serialize)]
pub struct BatchReport {
    pub dumps: Vec<DumpAnalysis>,
    pub skipped: Vec<SkippedDump>,
}

/// Format a range as `0x00001000 - 0x00002000`.
pub fn format_range(range: &AddressRange) -> String {
    format!("0x{:08x} - 0x{:08x}", range.start, range.end)
}

/// Header printed before a dump is analyzed.
pub fn render_header(file_name: &str) -> String {
    format!("Analyzing {file_name}\n")
}

/// Both region sections for one dump, followed by the closing rule.
pub fn render_regions(analysis: &DumpAnalysis) -> String {
    let mut out = String::new();

    out.push_str("=== Zeroed Memory Regions ===\n");
    for range in &analysis.regions.zero {
        let _ = writeln!(out, "{}", format_range(range));
    }

    out.push_str("\n=== Non-Zero Memory Regions ===\n");
    for range in &analysis.regions.non_zero {
        let _ = writeln!(out, "{}", format_range(range));
    }

    out.push_str("\n===========================\n");
    out
}

pub fn render_skip(skipped: &SkippedDump) -> String {
    format!("Skipping {}: {}", skipped.file, skipped.error)
}
