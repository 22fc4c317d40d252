use crate::foundation::core::{Canvas, FrameIndex};
use crate::foundation::error::{BattleGifError, BattleGifResult};
use crate::render::frame::FrameRgb;

/// Configuration provided to a [`FrameSink`] at the start of a render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SinkConfig {
    /// Size every pushed frame must have.
    pub canvas: Canvas,
    /// Number of frames that will be pushed.
    pub frame_count: u64,
}

/// Sink contract for consuming rendered frames in document order.
///
/// Ordering contract: `push_frame` is called in strictly increasing `FrameIndex` order, starting
/// at 0. `end` is only called after every frame was pushed; a sink that is dropped without `end`
/// must not leave a finished output behind.
pub trait FrameSink {
    /// Called once before any frames are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> BattleGifResult<()>;
    /// Push one frame.
    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRgb) -> BattleGifResult<()>;
    /// Called once after the last frame is pushed.
    fn end(&mut self) -> BattleGifResult<()>;
}

/// Shared frame checks for sinks.
pub(crate) fn check_frame(
    cfg: &SinkConfig,
    last: Option<FrameIndex>,
    idx: FrameIndex,
    frame: &FrameRgb,
) -> BattleGifResult<()> {
    if let Some(last) = last
        && idx.0 <= last.0
    {
        return Err(BattleGifError::validation(format!(
            "frames must be pushed in increasing order (got {} after {})",
            idx.0, last.0
        )));
    }
    if frame.canvas() != cfg.canvas {
        return Err(BattleGifError::validation(format!(
            "frame size mismatch: got {}x{}, expected {}x{}",
            frame.width, frame.height, cfg.canvas.width, cfg.canvas.height
        )));
    }
    if frame.data.len() != cfg.canvas.pixel_count() * 3 {
        return Err(BattleGifError::validation(
            "frame.data size mismatch with width*height*3",
        ));
    }
    Ok(())
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    frames: Vec<(FrameIndex, FrameRgb)>,
    ended: bool,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the sink configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg.clone()
    }

    /// Borrow the captured frames.
    pub fn frames(&self) -> &[(FrameIndex, FrameRgb)] {
        &self.frames
    }

    /// Whether `end` was called.
    pub fn is_ended(&self) -> bool {
        self.ended
    }
}

impl FrameSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> BattleGifResult<()> {
        self.cfg = Some(cfg);
        self.frames.clear();
        self.ended = false;
        Ok(())
    }

    fn push_frame(&mut self, idx: FrameIndex, frame: &FrameRgb) -> BattleGifResult<()> {
        let cfg = self
            .cfg
            .as_ref()
            .ok_or_else(|| BattleGifError::encode("in-memory sink not started"))?;
        check_frame(cfg, self.frames.last().map(|(i, _)| *i), idx, frame)?;
        self.frames.push((idx, frame.clone()));
        Ok(())
    }

    fn end(&mut self) -> BattleGifResult<()> {
        self.ended = true;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/sink.rs"]
mod tests;
