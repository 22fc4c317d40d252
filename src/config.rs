//! Run configuration.
//!
//! Defaults reproduce the fixed behavior of the tool: read `battle/`, write `result.gif`, 512x512
//! frames, Pokemon palette. A JSON file may override any subset of fields; the CLI applies its
//! flags on top of that.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::color::palette::PaletteKind;
use crate::encode::gif::{GifSinkOpts, SPEED_RANGE};
use crate::foundation::core::Canvas;
use crate::foundation::error::{BattleGifError, BattleGifResult};
use crate::simulate::battle::SelectionAlgorithm;
use crate::simulate::fighter::FighterKind;

/// Directory documents are read from and written to by default.
pub const DEFAULT_INPUT_DIR: &str = "battle";
/// Default animation path.
pub const DEFAULT_OUTPUT: &str = "result.gif";

/// Settings for turning a directory of documents into an animation.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Directory whose files become frames, in name order.
    pub input_dir: PathBuf,
    /// Animation output path; replaced if it exists.
    pub output: PathBuf,
    /// Palette characters are looked up in.
    pub palette: PaletteKind,
    /// Frame size.
    pub canvas: Canvas,
    /// Frame display time in milliseconds (0 = unset).
    pub frame_delay_ms: u32,
    /// GIF quantizer speed, 1 (best) to 30.
    pub speed: i32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from(DEFAULT_INPUT_DIR),
            output: PathBuf::from(DEFAULT_OUTPUT),
            palette: PaletteKind::default(),
            canvas: Canvas::default(),
            frame_delay_ms: 0,
            speed: 1,
        }
    }
}

impl RenderConfig {
    /// Load from a JSON file. Missing fields keep their defaults.
    pub fn from_path(path: impl AsRef<Path>) -> BattleGifResult<Self> {
        read_json(path.as_ref())
    }

    /// Parse from a JSON string.
    pub fn from_json_str(s: &str) -> BattleGifResult<Self> {
        serde_json::from_str(s).map_err(|e| BattleGifError::serde(e.to_string()))
    }

    /// Check value ranges.
    pub fn validate(&self) -> BattleGifResult<()> {
        self.canvas.validate_within(1, u32::from(u16::MAX))?;
        if !SPEED_RANGE.contains(&self.speed) {
            return Err(BattleGifError::validation(format!(
                "speed must be within {}..={}, got {}",
                SPEED_RANGE.start(),
                SPEED_RANGE.end(),
                self.speed
            )));
        }
        Ok(())
    }

    /// Options for the GIF sink writing [`RenderConfig::output`].
    pub fn gif_opts(&self) -> GifSinkOpts {
        GifSinkOpts {
            out_path: self.output.clone(),
            speed: self.speed,
            frame_delay_ms: self.frame_delay_ms,
        }
    }
}

/// Settings for a battle simulation run.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimulateConfig {
    /// Fighter family populating the grid.
    pub fighter: FighterKind,
    /// Grid size; one cell per pixel of the rendered frame.
    pub canvas: Canvas,
    /// Rounds to simulate. One document is written for the initial grid plus one per round.
    pub rounds: u32,
    /// How attackers choose among their neighbours.
    pub selection: SelectionAlgorithm,
    /// Allow fighters to attack their own type.
    pub fight_own: bool,
    /// RNG seed.
    pub seed: u64,
    /// Directory documents are written to.
    pub output_dir: PathBuf,
}

impl Default for SimulateConfig {
    fn default() -> Self {
        Self {
            fighter: FighterKind::default(),
            canvas: Canvas::default(),
            rounds: 100,
            selection: SelectionAlgorithm::default(),
            fight_own: false,
            seed: 1,
            output_dir: PathBuf::from(DEFAULT_INPUT_DIR),
        }
    }
}

impl SimulateConfig {
    /// Load from a JSON file. Missing fields keep their defaults.
    pub fn from_path(path: impl AsRef<Path>) -> BattleGifResult<Self> {
        read_json(path.as_ref())
    }

    /// Parse from a JSON string.
    pub fn from_json_str(s: &str) -> BattleGifResult<Self> {
        serde_json::from_str(s).map_err(|e| BattleGifError::serde(e.to_string()))
    }

    /// Check value ranges.
    pub fn validate(&self) -> BattleGifResult<()> {
        self.canvas.validate_within(32, 8192)?;
        if self.rounds == 0 {
            return Err(BattleGifError::validation("rounds must be at least 1"));
        }
        Ok(())
    }

    /// Render settings that turn this simulation's output into an animation.
    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            input_dir: self.output_dir.clone(),
            palette: self.fighter.palette(),
            canvas: self.canvas,
            ..RenderConfig::default()
        }
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> BattleGifResult<T> {
    let f = File::open(path).map_err(|e| {
        BattleGifError::validation(format!("open config JSON '{}': {e}", path.display()))
    })?;
    serde_json::from_reader(BufReader::new(f)).map_err(|e| {
        BattleGifError::serde(format!("parse config JSON '{}': {e}", path.display()))
    })
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
