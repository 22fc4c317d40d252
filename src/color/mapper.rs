use crate::color::palette::Palette;
use crate::foundation::core::Rgb8;
use crate::foundation::error::{BattleGifError, BattleGifResult};

/// Codepoint mapped to palette index 0 (`'A'`).
pub const INDEX_BASE: u32 = 'A' as u32;

/// Colors derived from one document, in reading order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColorSequence(Vec<Rgb8>);

impl ColorSequence {
    /// Wrap an already mapped list of colors.
    pub fn new(colors: Vec<Rgb8>) -> Self {
        Self(colors)
    }

    /// Number of colors.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no character of the document produced a color.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the colors.
    pub fn as_slice(&self) -> &[Rgb8] {
        &self.0
    }
}

/// Palette index selected by `ch`, or `None` when the codepoint is below `'A'`.
pub fn palette_index(ch: char) -> Option<u32> {
    (ch as u32).checked_sub(INDEX_BASE)
}

/// Map one character.
///
/// Characters below `'A'` yield `Ok(None)` and contribute nothing. Characters past the end of
/// the palette are an error; the caller fills in the position via [`map_document`].
pub fn map_char(ch: char, palette: &Palette) -> BattleGifResult<Option<Rgb8>> {
    map_char_at(ch, palette, 0, 0)
}

fn map_char_at(
    ch: char,
    palette: &Palette,
    line: usize,
    column: usize,
) -> BattleGifResult<Option<Rgb8>> {
    let Some(index) = palette_index(ch) else {
        return Ok(None);
    };
    palette
        .get(index as usize)
        .map(Some)
        .ok_or(BattleGifError::Palette {
            ch,
            index,
            len: palette.len(),
            line,
            column,
        })
}

/// Map every character of `lines` (in line order, left to right) to a color.
pub fn map_document<S: AsRef<str>>(
    lines: &[S],
    palette: &Palette,
) -> BattleGifResult<ColorSequence> {
    let capacity = lines.iter().map(|l| l.as_ref().len()).sum();
    let mut out = Vec::with_capacity(capacity);
    for (line_idx, line) in lines.iter().enumerate() {
        for (col_idx, ch) in line.as_ref().chars().enumerate() {
            if let Some(color) = map_char_at(ch, palette, line_idx + 1, col_idx + 1)? {
                out.push(color);
            }
        }
    }
    Ok(ColorSequence(out))
}

#[cfg(test)]
#[path = "../../tests/unit/color/mapper.rs"]
mod tests;
