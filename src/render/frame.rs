use crate::color::mapper::ColorSequence;
use crate::foundation::core::{Canvas, Rgb8};

/// A rendered frame as RGB8 pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRgb {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGB8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
}

impl FrameRgb {
    /// An all-black frame of the given size.
    pub fn blank(canvas: Canvas) -> Self {
        Self {
            width: canvas.width,
            height: canvas.height,
            data: vec![0u8; canvas.pixel_count() * 3],
        }
    }

    /// Frame dimensions.
    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    /// Pixel at `(x, y)`, or `None` outside the frame.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 3;
        Some(Rgb8::new(self.data[i], self.data[i + 1], self.data[i + 2]))
    }

    /// Copy into an opaque RGBA8 image for encoders that need alpha.
    pub fn to_rgba_image(&self) -> Option<image::RgbaImage> {
        let mut rgba = Vec::with_capacity(self.data.len() / 3 * 4);
        for px in self.data.chunks_exact(3) {
            rgba.extend_from_slice(&[px[0], px[1], px[2], 255]);
        }
        image::RgbaImage::from_raw(self.width, self.height, rgba)
    }
}

/// How a color sequence fit into its frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fill {
    /// Exactly one color per pixel.
    Exact,
    /// The sequence ran out; the remaining pixels stay black.
    Underfilled {
        /// Pixels that received a color.
        written: usize,
    },
    /// The raster filled up; the remaining colors were dropped.
    Truncated {
        /// Colors that did not fit.
        dropped: usize,
    },
}

/// Pack `seq` row-major into a `canvas`-sized frame.
///
/// The frame always has exactly the canvas dimensions. Filling stops at whichever runs out first,
/// the raster or the sequence.
pub fn build_frame(seq: &ColorSequence, canvas: Canvas) -> (FrameRgb, Fill) {
    let mut frame = FrameRgb::blank(canvas);
    let capacity = canvas.pixel_count();

    for (dst, c) in frame.data.chunks_exact_mut(3).zip(seq.as_slice()) {
        dst.copy_from_slice(&c.to_array());
    }

    let fill = match seq.len().cmp(&capacity) {
        std::cmp::Ordering::Equal => Fill::Exact,
        std::cmp::Ordering::Less => Fill::Underfilled { written: seq.len() },
        std::cmp::Ordering::Greater => Fill::Truncated {
            dropped: seq.len() - capacity,
        },
    };
    (frame, fill)
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
