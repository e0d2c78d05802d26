//! Longest common subsequence: a table of subsequence lengths and a backward
//! trace that only keeps or drops single elements.

use diffvis_types::{Cost, CostTable, EditHistory, EditOp, Error, Pos, Result};
use log::debug;
use std::cmp::max;

/// `table[i][j]` is the length of the LCS of `a[..i]` and `b[..j]`.
pub fn build<T: PartialEq>(a: &[T], b: &[T]) -> CostTable {
    debug!("Building {}x{} LCS table", a.len() + 1, b.len() + 1);
    CostTable::fill_rows(a.len() + 1, b.len() + 1, |i, prev, next| {
        let Some(prev) = prev else {
            return;
        };
        let ca = &a[i - 1];
        for (j0, cb) in b.iter().enumerate() {
            let j = j0 + 1;
            next[j] = if *ca == *cb {
                prev[j0] + 1
            } else {
                max(prev[j], next[j0])
            };
        }
    })
}

/// Backtrack from `(m, n)` to `(0, 0)`.
///
/// Equal elements are always matched. Otherwise the trace moves towards the
/// larger of the cell above (delete) and the cell to the left (insert),
/// preferring the insertion on ties.
pub fn trace<T: PartialEq>(table: &CostTable, a: &[T], b: &[T]) -> Result<EditHistory> {
    table.check_dims(a.len(), b.len())?;
    let inconsistent = |i: usize, j: usize| Error::NoConsistentAlignment {
        pos: Pos(i, j),
        cost: table[i][j],
    };

    let mut ops = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (a.len(), b.len());
    while i > 0 && j > 0 {
        let cur: Cost = table[i][j];
        if a[i - 1] == b[j - 1] {
            if cur != table[i - 1][j - 1] + 1 {
                return Err(inconsistent(i, j));
            }
            ops.push(EditOp::Match);
            i -= 1;
            j -= 1;
            continue;
        }
        let (up, left) = (table[i - 1][j], table[i][j - 1]);
        if cur != max(up, left) {
            return Err(inconsistent(i, j));
        }
        if up > left {
            ops.push(EditOp::Delete);
            i -= 1;
        } else {
            ops.push(EditOp::Insert);
            j -= 1;
        }
    }
    if table[i][j] != 0 {
        return Err(inconsistent(i, j));
    }
    ops.extend(std::iter::repeat(EditOp::Delete).take(i));
    ops.extend(std::iter::repeat(EditOp::Insert).take(j));
    ops.reverse();
    Ok(EditHistory::new(ops))
}
