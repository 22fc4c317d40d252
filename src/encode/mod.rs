//! Encoding sinks.
//!
//! Sinks consume rendered frames in document order and are driven by
//! [`crate::render_animation`].

/// Looping GIF output via `image`.
pub mod gif;
/// Generic frame sink trait and built-in sinks.
pub mod sink;
