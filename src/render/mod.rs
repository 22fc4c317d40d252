//! Turning documents into frames.

/// Color sequence to raster.
pub mod frame;
/// Directory of documents to a sink.
pub mod pipeline;
