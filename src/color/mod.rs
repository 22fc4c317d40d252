//! Characters to colors.

/// Character-to-color mapping.
pub mod mapper;
/// Built-in palettes.
pub mod palette;
