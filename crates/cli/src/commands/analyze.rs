use std::path::Path;

use anyhow::{anyhow, Context, Result};
use log::{debug, warn};
use zeroscan_core::dump::ScanConfig;
use zeroscan_core::services::{analyze_dump, discover_dumps};

use crate::commands::{render_header, render_regions, render_skip, BatchReport, SkippedDump};
use crate::file_display_name;

/// Analyze a single dump. Any failure, including a malformed name, is fatal.
pub fn analyze_file_command(path: &str, config: &ScanConfig, json: bool) -> Result<()> {
    let path = Path::new(path);
    let name = file_display_name(path);

    if !json {
        println!("{}", render_header(&name));
    }

    let analysis =
        analyze_dump(path, config).with_context(|| format!("Failed to analyze {name}"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&analysis)?);
    } else {
        println!("{}", render_regions(&analysis));
    }

    Ok(())
}

/// Analyze every `.csv` dump in `dir`, in name order.
///
/// A dump that fails is reported and skipped; the rest of the batch still
/// runs. Returns what was analyzed and what was skipped.
pub fn analyze_dir_command(dir: &str, config: &ScanConfig, json: bool) -> Result<BatchReport> {
    let dir_path = Path::new(dir);
    if !dir_path.is_dir() {
        return Err(anyhow!("{dir} is not a valid directory."));
    }

    let dumps = discover_dumps(dir_path)
        .with_context(|| format!("Failed to list dumps in {}", dir_path.display()))?;

    let mut report = BatchReport::default();
    if dumps.is_empty() {
        if json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            println!("No CSV files found in the directory.");
        }
        return Ok(report);
    }
    debug!("found {} dump(s) in {}", dumps.len(), dir_path.display());

    for path in &dumps {
        let name = file_display_name(path);
        if !json {
            println!("{}", render_header(&name));
        }

        match analyze_dump(path, config) {
            Ok(analysis) => {
                if !json {
                    println!("{}", render_regions(&analysis));
                }
                report.dumps.push(analysis);
            }
            Err(err) => {
                warn!("skipping {name}: {err}");
                let skipped = SkippedDump { file: name, error: err.to_string() };
                if !json {
                    println!("{}", render_skip(&skipped));
                }
                report.skipped.push(skipped);
            }
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(report)
}
