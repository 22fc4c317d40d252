use crate::color::mapper::map_document;
use crate::color::palette::Palette;
use crate::config::RenderConfig;
use crate::encode::gif::GifSink;
use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{BattleGifError, BattleGifResult};
use crate::input::loader::{list_documents, read_document};
use crate::render::frame::{Fill, build_frame};

/// Counters collected while rendering an animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderStats {
    /// Frames handed to the sink.
    pub frames: u64,
    /// Frames whose document had fewer characters than pixels.
    pub underfilled: u64,
    /// Frames whose document had more characters than pixels.
    pub truncated: u64,
}

/// Render every document of `cfg.input_dir` into `sink`, one frame per document, in name order.
///
/// Fails before the sink is started when the directory holds no documents. Any input, palette
/// or encode error aborts the run; the sink is then dropped without [`FrameSink::end`].
#[tracing::instrument(skip(cfg, sink), fields(input = %cfg.input_dir.display()))]
pub fn render_animation(
    cfg: &RenderConfig,
    sink: &mut dyn FrameSink,
) -> BattleGifResult<RenderStats> {
    cfg.validate()?;

    let paths = list_documents(&cfg.input_dir)?;
    if paths.is_empty() {
        return Err(BattleGifError::validation(format!(
            "no input documents in '{}'; at least one frame is required",
            cfg.input_dir.display()
        )));
    }

    let palette = Palette::builtin(cfg.palette);
    sink.begin(SinkConfig {
        canvas: cfg.canvas,
        frame_count: paths.len() as u64,
    })?;

    let mut stats = RenderStats::default();
    for (i, path) in paths.iter().enumerate() {
        let doc = read_document(path)?;
        let colors = map_document(&doc.lines, &palette)?;
        tracing::debug!(doc = %path.display(), colors = colors.len(), "mapped document");
        let (frame, fill) = build_frame(&colors, cfg.canvas);
        match fill {
            Fill::Exact => {}
            Fill::Underfilled { written } => {
                stats.underfilled += 1;
                tracing::warn!(
                    doc = %path.display(),
                    written,
                    pixels = cfg.canvas.pixel_count(),
                    "document underfills the frame; rest stays black"
                );
            }
            Fill::Truncated { dropped } => {
                stats.truncated += 1;
                tracing::warn!(
                    doc = %path.display(),
                    dropped,
                    "document overflows the frame; extra characters dropped"
                );
            }
        }
        sink.push_frame(FrameIndex(i as u64), &frame)?;
        stats.frames += 1;
    }

    sink.end()?;
    tracing::debug!(frames = stats.frames, "animation rendered");
    Ok(stats)
}

/// Render `cfg.input_dir` to a looping GIF at `cfg.output`.
pub fn render_to_gif(cfg: &RenderConfig) -> BattleGifResult<RenderStats> {
    let mut sink = GifSink::new(cfg.gif_opts());
    let stats = render_animation(cfg, &mut sink)?;
    tracing::info!(
        frames = stats.frames,
        out = %cfg.output.display(),
        "wrote animation"
    );
    Ok(stats)
}

#[cfg(test)]
#[path = "../../tests/unit/render/pipeline.rs"]
mod tests;
