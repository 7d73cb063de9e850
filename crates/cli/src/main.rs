use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use zeroscan::commands::{
    analyze_dir_command, analyze_file_command, load_scan_config, parse_name_command,
};
use zeroscan::LogLevel;

/// Find zeroed and data-bearing regions in raw RAM dumps.
///
/// Dumps are files named `<anything>0x<base address>.csv`. The CLI is a thin
/// wrapper around `zeroscan-core`, which does the actual analysis.
#[derive(Parser, Debug)]
#[command(name = "zeroscan", version, about = "RAM dump region analyzer", long_about = None)]
#[command(arg_required_else_help = true)]
struct Cli {
    /// Logging verbosity; overrides `RUST_LOG`. Without either, only warnings
    /// and errors are logged (to stderr).
    #[arg(short, long, value_enum, global = true)]
    verbose: Option<LogLevel>,

    /// Scan config file (.json, .yaml or .yml).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Require every byte of a blank block to be zero (no artifact tolerance).
    #[arg(long, global = true, default_value_t = false)]
    strict: bool,

    /// Override the block size in bytes.
    #[arg(long, global = true)]
    block_size: Option<usize>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze every `.csv` dump in a directory, skipping files that fail.
    AnalyzeDir {
        /// Directory with dump files.
        dir: String,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Analyze a single dump file.
    AnalyzeFile {
        /// Path to the dump.
        path: String,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Show the base address (and capture time, if any) encoded in a dump name.
    ParseName {
        /// Dump file name, e.g. `2024_05_01_12_30_0x0000000000100000.csv`.
        name: String,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logger = env_logger::Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = cli.verbose {
        logger.filter_level(level.into());
    }
    logger.format(|buf, record| writeln!(buf, "{}: {}", record.level(), record.args())).init();

    match cli.command {
        Command::AnalyzeDir { dir, json } => {
            let config = load_scan_config(cli.config.as_deref(), cli.block_size, cli.strict)?;
            analyze_dir_command(&dir, &config, json)?;
        }
        Command::AnalyzeFile { path, json } => {
            let config = load_scan_config(cli.config.as_deref(), cli.block_size, cli.strict)?;
            analyze_file_command(&path, &config, json)?;
        }
        Command::ParseName { name, json } => {
            parse_name_command(&name, json)?;
        }
    }

    Ok(())
}
