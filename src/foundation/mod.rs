//! Shared primitives and the crate error type.

/// Frame indices, canvas size and colors.
pub mod core;
/// Error taxonomy.
pub mod error;
