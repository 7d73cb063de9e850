//! Dump file conventions: naming scheme and scan configuration.

pub mod config;
pub mod name;

pub use config::{ConfigError, ScanConfig};
pub use name::{parse_base_address, DumpName, NameError, DUMP_EXTENSION};
