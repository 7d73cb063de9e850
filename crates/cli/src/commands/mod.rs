pub mod analyze;
pub mod names;
pub mod report;
pub mod util;

pub use analyze::*;
pub use names::*;
pub use report::*;
pub use util::*;
