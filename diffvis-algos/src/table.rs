//! Needleman-Wunsch cost table for the edit-distance model.

use diffvis_types::{Cost, CostModel, CostTable};
use log::debug;
use std::cmp::min;

/// Build the `(m+1) x (n+1)` edit-distance table of `a` and `b`.
///
/// Row 0 holds cumulative insertion costs and column 0 cumulative deletion
/// costs. Every other cell is the minimum over a vertical (delete), horizontal
/// (insert) or diagonal (match/replace) step into it.
pub fn build<T: PartialEq>(a: &[T], b: &[T], cm: &CostModel) -> CostTable {
    debug!("Building {}x{} edit-distance table", a.len() + 1, b.len() + 1);
    CostTable::fill_rows(a.len() + 1, b.len() + 1, |i, prev, next| {
        let Some(prev) = prev else {
            for (j, cell) in next.iter_mut().enumerate() {
                *cell = j as Cost * cm.ins;
            }
            return;
        };
        // Change from 1-based to 0-based indexing.
        let ca = &a[i - 1];
        next[0] = i as Cost * cm.del;
        for (j0, cb) in b.iter().enumerate() {
            let j = j0 + 1;
            let diagonal = prev[j0] + if *ca == *cb { cm.matched } else { cm.sub };
            next[j] = min(diagonal, min(prev[j] + cm.del, next[j0] + cm.ins));
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit(a: &str, b: &str) -> CostTable {
        build(a.as_bytes(), b.as_bytes(), &CostModel::unit())
    }

    #[test]
    fn empty_inputs() {
        assert_eq!(unit("", "").to_rows(), vec![vec![0]]);
        assert_eq!(unit("abc", "").to_rows(), vec![vec![0], vec![1], vec![2], vec![3]]);
        assert_eq!(unit("", "abc").to_rows(), vec![vec![0, 1, 2, 3]]);
    }

    #[test]
    fn kitten_sitting() {
        let t = unit("kitten", "sitting");
        assert_eq!(t.dims(), (7, 8));
        assert_eq!(t.last(), 3);
        assert_eq!(t[0][0], 0);
        for i in 0..=6 {
            assert_eq!(t[i][0], i as Cost);
        }
        for j in 0..=7 {
            assert_eq!(t[0][j], j as Cost);
        }
    }

    #[test]
    fn small_table() {
        // Source "aa" down the rows, target "a" across.
        assert_eq!(unit("aa", "a").to_rows(), vec![vec![0, 1], vec![1, 0], vec![2, 1]]);
    }

    #[test]
    fn replacement_cost() {
        let cm = CostModel::new(3).unwrap();
        // A replacement costs more than a deletion plus an insertion.
        assert_eq!(build(b"a", b"b", &cm).last(), 2);
        assert_eq!(build(b"ab", b"ba", &cm).last(), 2);
        let cm = CostModel::new(2).unwrap();
        assert_eq!(build(b"abc", b"xbz", &cm).to_rows()[3], vec![3, 4, 3, 4]);
    }
}
