//! zeroscan-core
//!
//! Core library for validating raw RAM dumps. A dump is read once in
//! fixed-size blocks; every block is classified as blank or data-bearing and
//! consecutive blocks of the same kind are merged into address regions.
//!
//! The CLI is a thin frontend over this crate.

pub mod analysis;
pub mod dump;
pub mod model;
pub mod services;

/// Returns the library version as encoded at compile time.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
