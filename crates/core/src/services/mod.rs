pub mod analysis;

pub use analysis::{
    analyze_dump, analyze_reader, discover_dumps, dump_file_name, DumpAnalysis, HashingReader,
};
