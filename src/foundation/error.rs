/// Convenience result type used across battlegif.
pub type BattleGifResult<T> = Result<T, BattleGifError>;

/// Top-level error taxonomy. Every variant is fatal for the run that produced it.
#[derive(thiserror::Error, Debug)]
pub enum BattleGifError {
    /// Invalid configuration or pipeline input (empty directory, size mismatch).
    #[error("validation error: {0}")]
    Validation(String),

    /// The input directory or one of its documents could not be read.
    #[error("input error: {0}")]
    Input(String),

    /// A character mapped past the end of the palette.
    #[error(
        "palette error: character {ch:?} at line {line}, column {column} maps to index {index}, \
         but the palette only has {len} colors"
    )]
    Palette {
        /// Offending character.
        ch: char,
        /// Computed palette index (`codepoint - 65`).
        index: u32,
        /// Length of the palette in use.
        len: usize,
        /// 1-based line number within the document.
        line: usize,
        /// 1-based character column within the line.
        column: usize,
    },

    /// Errors while encoding or writing the animation.
    #[error("encode error: {0}")]
    Encode(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BattleGifError {
    /// Build a [`BattleGifError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BattleGifError::Input`] value.
    pub fn input(msg: impl Into<String>) -> Self {
        Self::Input(msg.into())
    }

    /// Build a [`BattleGifError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`BattleGifError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
