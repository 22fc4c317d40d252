//! Reading the input directory.

/// Document listing and reading.
pub mod loader;
