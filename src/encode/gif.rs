use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::encode::sink::{FrameSink, SinkConfig, check_frame};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{BattleGifError, BattleGifResult};
use crate::render::frame::FrameRgb;

/// Quantizer speed range accepted by the GIF encoder (1 is slowest and best).
pub const SPEED_RANGE: std::ops::RangeInclusive<i32> = 1..=30;

/// Options for [`GifSink`] output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GifSinkOpts {
    /// Output GIF file path. An existing file is replaced.
    pub out_path: PathBuf,
    /// Palette quantizer speed, see [`SPEED_RANGE`]. Frames with at most 256 distinct colors
    /// get an exact palette regardless.
    pub speed: i32,
    /// Display time of each frame in milliseconds. 0 leaves the delay unset.
    pub frame_delay_ms: u32,
}

impl GifSinkOpts {
    /// Create options for writing a GIF to `out_path` with the best compression settings.
    pub fn new(out_path: impl Into<PathBuf>) -> Self {
        Self {
            out_path: out_path.into(),
            speed: 1,
            frame_delay_ms: 0,
        }
    }

    /// Check option ranges.
    pub fn validate(&self) -> BattleGifResult<()> {
        if !SPEED_RANGE.contains(&self.speed) {
            return Err(BattleGifError::validation(format!(
                "gif speed must be within {}..={}, got {}",
                SPEED_RANGE.start(),
                SPEED_RANGE.end(),
                self.speed
            )));
        }
        if self.out_path.file_name().is_none() {
            return Err(BattleGifError::validation(format!(
                "gif output path '{}' has no file name",
                self.out_path.display()
            )));
        }
        Ok(())
    }
}

/// Create the parent directory of `path` if it has one.
pub fn ensure_parent_dir(path: &Path) -> BattleGifResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        use anyhow::Context as _;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Sibling path the animation is written to before it is renamed into place.
pub fn partial_path(out_path: &Path) -> PathBuf {
    let mut name = out_path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".partial");
    out_path.with_file_name(name)
}

struct TempFileGuard(Option<PathBuf>);

impl Drop for TempFileGuard {
    fn drop(&mut self) {
        if let Some(path) = self.0.take() {
            let _ = std::fs::remove_file(path);
        }
    }
}

/// Sink that encodes frames into a looping GIF animation.
///
/// The first pushed frame is the base image and sets the logical screen size; the loop count is
/// infinite. Frames go to a `.partial` sibling of the output path which only replaces the output
/// in [`FrameSink::end`]; a sink dropped earlier removes it again.
pub struct GifSink {
    opts: GifSinkOpts,

    encoder: Option<::gif::Encoder<BufWriter<File>>>,
    partial: TempFileGuard,

    cfg: Option<SinkConfig>,
    last_idx: Option<FrameIndex>,
    frames_written: u64,
}

impl GifSink {
    /// Create a new sink writing to `opts.out_path`.
    pub fn new(opts: GifSinkOpts) -> Self {
        Self {
            opts,
            encoder: None,
            partial: TempFileGuard(None),
            cfg: None,
            last_idx: None,
            frames_written: 0,
        }
    }

    /// Frames encoded so far.
    pub fn frames_written(&self) -> u64 {
        self.frames_written
    }
}

impl FrameSink for GifSink {
    fn begin(&mut self, cfg: SinkConfig) -> BattleGifResult<()> {
        self.opts.validate()?;
        cfg.canvas.validate_within(1, u32::from(u16::MAX))?;
        let (width, height) = screen_size(&cfg)?;

        ensure_parent_dir(&self.opts.out_path)?;
        let partial = partial_path(&self.opts.out_path);
        let file = File::create(&partial).map_err(|e| {
            BattleGifError::encode(format!("create '{}': {e}", partial.display()))
        })?;
        self.partial.0 = Some(partial);

        // No global palette: every frame carries its own.
        let mut encoder = ::gif::Encoder::new(BufWriter::new(file), width, height, &[])
            .map_err(|e| BattleGifError::encode(format!("write gif header: {e}")))?;
        encoder
            .set_repeat(::gif::Repeat::Infinite)
            .map_err(|e| BattleGifError::encode(format!("set gif loop count: {e}")))?;

        tracing::debug!(
            out = %self.opts.out_path.display(),
            width,
            height,
            frames = cfg.frame_count,
            speed = self.opts.speed,
            "gif sink started"
        );

        self.encoder = Some(encoder);
        self.cfg = Some(cfg);
        self.last_idx = None;
        self.frames_written = 0;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRgb) -> BattleGifResult<()> {
        let cfg = self
            .cfg
            .as_ref()
            .ok_or_else(|| BattleGifError::encode("gif sink not started"))?;
        check_frame(cfg, self.last_idx, idx, frame)?;
        let (width, height) = screen_size(cfg)?;

        let Some(encoder) = self.encoder.as_mut() else {
            return Err(BattleGifError::encode("gif sink is already finalized"));
        };

        let mut rgba = frame
            .to_rgba_image()
            .ok_or_else(|| BattleGifError::validation("frame buffer does not match its size"))?
            .into_raw();
        let mut out = ::gif::Frame::from_rgba_speed(width, height, &mut rgba, self.opts.speed);
        out.delay = delay_centis(self.opts.frame_delay_ms);
        encoder
            .write_frame(&out)
            .map_err(|e| BattleGifError::encode(format!("encode frame {}: {e}", idx.0)))?;

        self.last_idx = Some(idx);
        self.frames_written += 1;
        Ok(())
    }

    fn end(&mut self) -> BattleGifResult<()> {
        if self.frames_written == 0 {
            return Err(BattleGifError::validation(
                "a gif animation needs at least one frame",
            ));
        }
        let encoder = self
            .encoder
            .take()
            .ok_or_else(|| BattleGifError::encode("gif sink not started"))?;

        let file = finish(encoder)?;
        file.sync_all().map_err(|e| {
            BattleGifError::encode(format!("flush '{}': {e}", self.opts.out_path.display()))
        })?;

        let Some(partial) = self.partial.0.take() else {
            return Err(BattleGifError::encode("gif sink not started"));
        };
        if let Err(e) = std::fs::rename(&partial, &self.opts.out_path) {
            self.partial.0 = Some(partial);
            return Err(BattleGifError::encode(format!(
                "move animation into '{}': {e}",
                self.opts.out_path.display()
            )));
        }
        Ok(())
    }
}

fn screen_size(cfg: &SinkConfig) -> BattleGifResult<(u16, u16)> {
    let side = |v: u32| {
        u16::try_from(v)
            .map_err(|_| BattleGifError::validation(format!("gif side {v} exceeds {}", u16::MAX)))
    };
    Ok((side(cfg.canvas.width)?, side(cfg.canvas.height)?))
}

/// GIF delays are in hundredths of a second.
fn delay_centis(ms: u32) -> u16 {
    u16::try_from(ms.div_ceil(10)).unwrap_or(u16::MAX)
}

/// Write the trailer and flush everything to `W`, surfacing errors a drop would swallow.
fn finish<W: Write>(encoder: ::gif::Encoder<BufWriter<W>>) -> BattleGifResult<W> {
    let buffered = encoder
        .into_inner()
        .map_err(|e| BattleGifError::encode(format!("write gif trailer: {e}")))?;
    buffered
        .into_inner()
        .map_err(|e| BattleGifError::encode(format!("flush gif: {}", e.error())))
}

#[cfg(test)]
#[path = "../../tests/unit/encode/gif.rs"]
mod tests;
