//! battlegif turns a directory of character-grid text files into a looping GIF.
//!
//! Each file is one frame. Every character selects a color from a fixed palette by its
//! codepoint (`'A'` is index 0), and the colors fill a fixed-size frame row by row. Frames play
//! in file-name order and the animation loops forever.
//!
//! The crate also carries the grid battle simulator whose output those files usually are:
//!
//! - [`run_simulation`] writes one document per round of a battle
//! - [`render_animation`] streams a directory of documents into a [`FrameSink`]
//! - [`render_to_gif`] does the same into a [`GifSink`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Characters to palette colors.
pub mod color;
/// Run configuration and JSON loading.
pub mod config;
/// Encoding sinks.
pub mod encode;
/// Input directory reading.
pub mod input;
/// Frame rasterization and the render pipeline.
pub mod render;
/// Grid battle simulator.
pub mod simulate;

pub use crate::foundation::core::{Canvas, FrameIndex, Rgb8};
pub use crate::foundation::error::{BattleGifError, BattleGifResult};

pub use crate::color::mapper::{ColorSequence, map_char, map_document};
pub use crate::color::palette::{Palette, PaletteKind};
pub use crate::config::{RenderConfig, SimulateConfig};
pub use crate::encode::gif::{GifSink, GifSinkOpts};
pub use crate::encode::sink::{FrameSink, InMemorySink, SinkConfig};
pub use crate::input::loader::{InputDocument, list_documents, load_documents, read_document};
pub use crate::render::frame::{Fill, FrameRgb, build_frame};
pub use crate::render::pipeline::{RenderStats, render_animation, render_to_gif};
pub use crate::simulate::battle::SelectionAlgorithm;
pub use crate::simulate::fighter::FighterKind;
pub use crate::simulate::{SimulationStats, run_simulation};
