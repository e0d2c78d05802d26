use crate::{Cost, Error, Pos, Result};
use std::ops::Index;

/// An immutable `(m+1) x (n+1)` dynamic-programming matrix.
///
/// `table[i][j]` is the value for the first `i` source elements and the first
/// `j` target elements.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct CostTable {
    rows: usize,
    cols: usize,
    cells: Vec<Cost>,
}

impl CostTable {
    /// Wrap `rows * cols` row-major cells.
    pub fn from_flat(rows: usize, cols: usize, cells: Vec<Cost>) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::EmptyTable);
        }
        if cells.len() != rows * cols {
            return Err(Error::RaggedTable {
                row: cells.len() / cols,
                expected: cols,
                found: cells.len() % cols,
            });
        }
        Ok(Self { rows, cols, cells })
    }

    /// Fill a `rows x cols` table row by row.
    ///
    /// `fill(i, prev, row)` computes row `i` from row `i-1` (`None` for the
    /// first row) and the cells of row `i` it has already written.
    pub fn fill_rows(
        rows: usize,
        cols: usize,
        mut fill: impl FnMut(usize, Option<&[Cost]>, &mut [Cost]),
    ) -> Self {
        assert!(rows > 0 && cols > 0, "a cost table has at least one cell");
        let mut cells = vec![0; rows * cols];
        fill(0, None, &mut cells[..cols]);
        for i in 1..rows {
            let (done, rest) = cells.split_at_mut(i * cols);
            fill(i, Some(&done[(i - 1) * cols..]), &mut rest[..cols]);
        }
        Self { rows, cols, cells }
    }

    /// Build a table from caller-supplied rows, e.g. one computed elsewhere.
    pub fn from_rows(rows: Vec<Vec<Cost>>) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        let n_rows = rows.len();
        let mut cells = Vec::with_capacity(n_rows * cols);
        for (row, r) in rows.into_iter().enumerate() {
            if r.len() != cols {
                return Err(Error::RaggedTable {
                    row,
                    expected: cols,
                    found: r.len(),
                });
            }
            cells.extend(r);
        }
        Self::from_flat(n_rows, cols, cells)
    }

    /// Length of the source.
    pub fn m(&self) -> usize {
        self.rows - 1
    }

    /// Length of the target.
    pub fn n(&self) -> usize {
        self.cols - 1
    }

    pub fn dims(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn get(&self, Pos(i, j): Pos) -> Option<Cost> {
        (i < self.rows && j < self.cols).then(|| self.cells[i * self.cols + j])
    }

    /// The value for the full source and target.
    pub fn last(&self) -> Cost {
        self.cells[self.cells.len() - 1]
    }

    pub fn row(&self, i: usize) -> &[Cost] {
        &self.cells[i * self.cols..(i + 1) * self.cols]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cost]> + '_ {
        self.cells.chunks(self.cols)
    }

    pub fn to_rows(&self) -> Vec<Vec<Cost>> {
        self.iter_rows().map(<[Cost]>::to_vec).collect()
    }

    /// Check that the table fits sequences of length `m` and `n`.
    pub fn check_dims(&self, m: usize, n: usize) -> Result<()> {
        if (self.rows, self.cols) != (m + 1, n + 1) {
            return Err(Error::DimensionMismatch {
                table_rows: self.rows,
                table_cols: self.cols,
                rows: m + 1,
                cols: n + 1,
            });
        }
        Ok(())
    }

    /// Copy of the table with one extra row and column holding `sentinel`.
    pub fn padded(&self, sentinel: Cost) -> CostTable {
        let cols = self.cols + 1;
        let mut cells = Vec::with_capacity((self.rows + 1) * cols);
        for row in self.iter_rows() {
            cells.extend_from_slice(row);
            cells.push(sentinel);
        }
        cells.extend(std::iter::repeat(sentinel).take(cols));
        CostTable {
            rows: self.rows + 1,
            cols,
            cells,
        }
    }
}

impl Index<usize> for CostTable {
    type Output = [Cost];

    fn index(&self, i: usize) -> &[Cost] {
        self.row(i)
    }
}

impl Index<Pos> for CostTable {
    type Output = Cost;

    fn index(&self, Pos(i, j): Pos) -> &Cost {
        &self.cells[i * self.cols + j]
    }
}
