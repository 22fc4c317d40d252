/// `(x, y)` cell coordinate.
pub type Location = (usize, usize);

/// Row-major 2D storage.
#[derive(Clone, Debug)]
pub struct Grid2D<T> {
    cells: Vec<T>,
    width: usize,
    height: usize,
}

impl<T> Grid2D<T> {
    /// Fill a `width x height` grid by calling `make` once per cell, row by row.
    pub fn new_with(width: usize, height: usize, make: impl FnMut() -> T) -> Self {
        let cells = std::iter::repeat_with(make).take(width * height).collect();
        Self {
            cells,
            width,
            height,
        }
    }

    fn offset(&self, (x, y): Location) -> Option<usize> {
        (x < self.width && y < self.height).then_some(y * self.width + x)
    }

    /// Cell at `loc`, `None` outside the grid.
    pub fn get(&self, loc: Location) -> Option<&T> {
        self.cells.get(self.offset(loc)?)
    }

    /// Two distinct cells borrowed mutably at once.
    ///
    /// Returns `None` when either location is outside the grid or both name the same cell.
    pub fn get_pair_mut(&mut self, a: Location, b: Location) -> Option<(&mut T, &mut T)> {
        let (ia, ib) = (self.offset(a)?, self.offset(b)?);
        match ia.cmp(&ib) {
            std::cmp::Ordering::Less => {
                let (lo, hi) = self.cells.split_at_mut(ib);
                Some((&mut lo[ia], &mut hi[0]))
            }
            std::cmp::Ordering::Greater => {
                let (lo, hi) = self.cells.split_at_mut(ia);
                Some((&mut hi[0], &mut lo[ib]))
            }
            std::cmp::Ordering::Equal => None,
        }
    }

    /// `(width, height)`.
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Number of cells.
    pub fn count(&self) -> usize {
        self.cells.len()
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> std::slice::Chunks<'_, T> {
        self.cells.chunks(self.width.max(1))
    }

    /// All cells in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.cells.iter()
    }
}

/// The four wrapping neighbours of `(x, y)`: up, right, down, left.
pub fn neighbours((x, y): Location, (w, h): (usize, usize)) -> [Location; 4] {
    [
        (x, (y + h - 1) % h),
        ((x + 1) % w, y),
        (x, (y + 1) % h),
        ((x + w - 1) % w, y),
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/simulate/grid.rs"]
mod tests;
