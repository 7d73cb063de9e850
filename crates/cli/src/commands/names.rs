use anyhow::{Context, Result};
use zeroscan_core::dump::DumpName;

/// Decode and print what a dump file name says about its contents.
pub fn parse_name_command(file_name: &str, json: bool) -> Result<DumpName> {
    let name = DumpName::parse(file_name).context("Invalid dump file name")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&name)?);
    } else {
        println!("Base address: 0x{:08x}", name.base_address);
        match name.captured_at {
            Some(ts) => println!("Captured at:  {}", ts.format("%Y-%m-%d %H:%M")),
            None => println!("Captured at:  (unknown)"),
        }
    }

    Ok(name)
}
