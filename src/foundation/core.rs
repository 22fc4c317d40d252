use crate::foundation::error::{BattleGifError, BattleGifResult};

/// Zero-based position of a frame in the animation (and of a document in the input order).
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

/// Raster dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Side length of the default square canvas.
    pub const DEFAULT_SIDE: u32 = 512;

    /// Build a square canvas.
    pub fn square(side: u32) -> Self {
        Self {
            width: side,
            height: side,
        }
    }

    /// Number of pixels in the raster.
    pub fn pixel_count(self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Fail unless both sides are within `min..=max`.
    pub fn validate_within(self, min: u32, max: u32) -> BattleGifResult<()> {
        for (name, side) in [("width", self.width), ("height", self.height)] {
            if !(min..=max).contains(&side) {
                return Err(BattleGifError::validation(format!(
                    "canvas {name} must be between {min} and {max}, got {side}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::square(Self::DEFAULT_SIDE)
    }
}

/// Straight (opaque) RGB8 color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Build a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Black, the value of pixels no color was written to.
    pub const fn black() -> Self {
        Self::new(0, 0, 0)
    }

    /// Channels as an array, the layout `image` uses.
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl From<[u8; 3]> for Rgb8 {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Rgb8> for image::Rgb<u8> {
    fn from(c: Rgb8) -> Self {
        image::Rgb(c.to_array())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
