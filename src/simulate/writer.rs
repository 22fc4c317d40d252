use std::fs::File;
use std::io::{BufWriter, Write as _};
use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::BattleGifResult;
use crate::simulate::fighter::{Fighter, FighterType};
use crate::simulate::grid::Grid2D;

/// File name of document `index` in a run of `total` documents.
///
/// Zero padded to at least five digits so that name order is document order.
pub fn document_name(index: u64, total: u64) -> String {
    let digits = total.saturating_sub(1).max(1).ilog10() as usize + 1;
    format!("{index:0width$}.txt", width = digits.max(5))
}

/// Write `grid` as text: one line per row, one letter per cell.
pub fn write_document<K: FighterType>(
    grid: &Grid2D<Fighter<K>>,
    path: &Path,
) -> BattleGifResult<()> {
    let f = File::create(path).with_context(|| format!("create document '{}'", path.display()))?;
    let mut w = BufWriter::new(f);

    let (width, _) = grid.size();
    let mut line = String::with_capacity(width + 1);
    for row in grid.rows() {
        line.clear();
        line.extend(row.iter().map(Fighter::<K>::letter));
        line.push('\n');
        w.write_all(line.as_bytes())
            .with_context(|| format!("write document '{}'", path.display()))?;
    }
    w.flush()
        .with_context(|| format!("flush document '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/simulate/writer.rs"]
mod tests;
