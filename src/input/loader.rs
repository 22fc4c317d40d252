use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::foundation::error::{BattleGifError, BattleGifResult};

/// One input text file, read in full.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputDocument {
    /// Where the document was read from.
    pub path: PathBuf,
    /// Lines with their trailing newline removed.
    pub lines: Vec<String>,
}

/// List every entry of `dir`, sorted ascending by file name.
///
/// Names are compared as raw bytes, which is codepoint order for UTF-8 names. Nothing is
/// filtered out: an entry that turns out not to be a readable text file fails later in
/// [`read_document`].
pub fn list_documents(dir: &Path) -> BattleGifResult<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|e| {
        BattleGifError::input(format!("read input directory '{}': {e}", dir.display()))
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| {
            BattleGifError::input(format!("list input directory '{}': {e}", dir.display()))
        })?;
        paths.push(entry.path());
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

/// Read one document.
pub fn read_document(path: &Path) -> BattleGifResult<InputDocument> {
    if !path.is_file() {
        return Err(BattleGifError::input(format!(
            "'{}' is not a regular file",
            path.display()
        )));
    }
    let f = File::open(path)
        .map_err(|e| BattleGifError::input(format!("open '{}': {e}", path.display())))?;

    let lines = BufReader::new(f)
        .lines()
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| BattleGifError::input(format!("read '{}': {e}", path.display())))?;

    Ok(InputDocument {
        path: path.to_path_buf(),
        lines,
    })
}

/// List and read every document of `dir`, in name order.
pub fn load_documents(dir: &Path) -> BattleGifResult<Vec<InputDocument>> {
    list_documents(dir)?
        .iter()
        .map(|p| read_document(p))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/input/loader.rs"]
mod tests;
