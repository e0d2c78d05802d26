//! Forward path tracing over an edit-distance cost table.
//!
//! Instead of the usual backtrack from `(m, n)`, the search walks forward from
//! `(0, 0)` and, at each cell, determines which step the optimal path takes to
//! leave it. The table is padded with one extra row and column of [`SENTINEL`]
//! so that looking one step past either edge needs no special case.
//!
//! Preference order at every cell is diagonal, then vertical (delete), then
//! horizontal (insert). This order fixes which of the equally cheap
//! alignments is returned.

use diffvis_types::{Cost, CostModel, CostTable, EditHistory, EditOp, Error, Pos, Result};
use log::{debug, trace as log_trace, warn};

/// Padding value, larger than any real cost.
pub const SENTINEL: Cost = Cost::MAX;

/// The resolved state of a cell.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum Visit {
    Unseen,
    /// No optimal path continues from this cell.
    Dead,
    /// The cell is `(m, n)`.
    End,
    /// The optimal path leaves this cell with the given operation.
    Step(EditOp),
}

/// State of a single trace. The memo is tied to one table and dropped with it.
struct ForwardSearch<'a> {
    table: CostTable,
    cm: &'a CostModel,
    m: usize,
    n: usize,
    memo: Vec<Visit>,
    /// The dead cell with the largest `i+j`, for error reporting.
    furthest_dead: Option<Pos>,
}

/// Recover one minimum-cost edit history from `table`.
///
/// Fails with [`Error::NoConsistentAlignment`] when `table` is not a valid
/// edit-distance table under `cm`.
pub fn trace(table: &CostTable, cm: &CostModel) -> Result<EditHistory> {
    debug!("Tracing {}x{} cost table", table.m() + 1, table.n() + 1);
    ForwardSearch::new(table, cm).run()
}

impl<'a> ForwardSearch<'a> {
    fn new(table: &CostTable, cm: &'a CostModel) -> Self {
        let (m, n) = (table.m(), table.n());
        Self {
            table: table.padded(SENTINEL),
            cm,
            m,
            n,
            memo: vec![Visit::Unseen; (m + 1) * (n + 1)],
            furthest_dead: None,
        }
    }

    fn memo(&self, Pos(i, j): Pos) -> Visit {
        self.memo[i * (self.n + 1) + j]
    }

    fn set(&mut self, pos @ Pos(i, j): Pos, visit: Visit) {
        if visit == Visit::Dead {
            log_trace!("Dead end at {pos}");
            if self.furthest_dead.map_or(true, |Pos(x, y)| i + j > x + y) {
                self.furthest_dead = Some(pos);
            }
        }
        self.memo[i * (self.n + 1) + j] = visit;
    }

    /// Checks that do not depend on the neighbours' results.
    fn enter(&self, Pos(i, j): Pos) -> Option<Visit> {
        let t = &self.table;
        let c = t[i][j];
        // Costs never decrease along a forward step of an optimal path.
        if t[i][j + 1] < c || t[i + 1][j] < c || t[i + 1][j + 1] < c {
            return Some(Visit::Dead);
        }
        if i == self.m && j == self.n {
            return Some(Visit::End);
        }
        None
    }

    /// The `k`th candidate step out of `(i, j)`, if it is allowed at all.
    fn branch(&self, Pos(i, j): Pos, k: u8) -> Option<(EditOp, Pos)> {
        let t = &self.table;
        let c = t[i][j];
        match k {
            0 => {
                let d = t[i + 1][j + 1];
                if d == SENTINEL {
                    return None;
                }
                let delta = d.saturating_sub(c);
                let op = if delta == self.cm.matched {
                    EditOp::Match
                } else if delta == self.cm.sub {
                    EditOp::Replace
                } else {
                    return None;
                };
                Some((op, Pos(i + 1, j + 1)))
            }
            1 => {
                let d = t[i + 1][j];
                (d != SENTINEL && d > c && d.saturating_sub(c) == self.cm.del)
                    .then_some((EditOp::Delete, Pos(i + 1, j)))
            }
            2 => {
                let d = t[i][j + 1];
                (d != SENTINEL && d > c && d.saturating_sub(c) == self.cm.ins)
                    .then_some((EditOp::Insert, Pos(i, j + 1)))
            }
            _ => None,
        }
    }

    /// Depth-first search from `(0, 0)` with an explicit stack.
    ///
    /// Each frame holds a cell and the index of the branch it is currently
    /// trying. A frame is popped once its cell is resolved.
    fn resolve(&mut self) {
        let mut stack = vec![(Pos(0, 0), 0u8)];
        while let Some(top) = stack.last_mut() {
            let (pos, k) = *top;
            if k == 0 {
                if let Some(visit) = self.enter(pos) {
                    self.set(pos, visit);
                    stack.pop();
                    continue;
                }
            }
            if k > 2 {
                self.set(pos, Visit::Dead);
                stack.pop();
                continue;
            }
            let Some((op, next)) = self.branch(pos, k) else {
                top.1 += 1;
                continue;
            };
            match self.memo(next) {
                Visit::Unseen => stack.push((next, 0)),
                Visit::Dead => top.1 += 1,
                Visit::End | Visit::Step(_) => {
                    self.set(pos, Visit::Step(op));
                    stack.pop();
                }
            }
        }
    }

    fn run(mut self) -> Result<EditHistory> {
        self.resolve();
        let mut ops = Vec::with_capacity(self.m + self.n);
        let mut pos = Pos(0, 0);
        loop {
            match self.memo(pos) {
                Visit::End => break,
                Visit::Step(op) => {
                    ops.push(op);
                    pos = Pos(
                        pos.0 + op.advances_source() as usize,
                        pos.1 + op.advances_target() as usize,
                    );
                }
                Visit::Dead | Visit::Unseen => {
                    let pos = self.furthest_dead.unwrap_or(pos);
                    let cost = self.table[pos];
                    warn!("No consistent alignment: search failed at {pos} (cost {cost})");
                    return Err(Error::NoConsistentAlignment { pos, cost });
                }
            }
        }
        Ok(EditHistory::new(ops))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::build;
    use EditOp::*;

    fn unit_trace(a: &str, b: &str) -> EditHistory {
        let t = build(a.as_bytes(), b.as_bytes(), &CostModel::unit());
        trace(&t, &CostModel::unit()).unwrap()
    }

    #[test]
    fn kitten_sitting() {
        assert_eq!(
            unit_trace("kitten", "sitting").ops(),
            &[Replace, Match, Match, Match, Replace, Match, Insert]
        );
    }

    #[test]
    fn degenerate() {
        assert!(unit_trace("", "").is_empty());
        assert_eq!(unit_trace("abc", "").ops(), &[Delete, Delete, Delete]);
        assert_eq!(unit_trace("", "abc").ops(), &[Insert, Insert, Insert]);
    }

    #[test]
    fn diagonal_preferred() {
        assert_eq!(unit_trace("aa", "a").ops(), &[Match, Delete]);
        assert_eq!(unit_trace("ab", "ba").ops(), &[Replace, Replace]);
        assert_eq!(unit_trace("flaw", "lawn").ops(), &[Delete, Match, Match, Match, Insert]);
        assert_eq!(
            unit_trace("sunday", "saturday").ops(),
            &[Match, Insert, Insert, Match, Replace, Match, Match, Match]
        );
        assert_eq!(
            unit_trace("GATTACA", "GCATGCU").ops(),
            &[Match, Insert, Match, Match, Replace, Delete, Match, Replace]
        );
    }

    #[test]
    fn deep_search_does_not_overflow() {
        let a = "ab".repeat(2_000);
        let b = "ba".repeat(2_000);
        let h = unit_trace(&a, &b);
        assert!(h.verify(a.len(), b.len()).is_ok());
        assert_eq!(h.cost(&CostModel::unit()), 2);
    }

    #[test]
    fn inconsistent_table() {
        // (1, 1) claims cost 5, but its neighbours are cheaper.
        let t = CostTable::from_rows(vec![vec![0, 1], vec![1, 5]]).unwrap();
        let err = trace(&t, &CostModel::unit()).unwrap_err();
        assert!(matches!(err, Error::NoConsistentAlignment { .. }), "{err}");
    }

    #[test]
    fn inconsistent_table_reports_position() {
        let t = CostTable::from_rows(vec![vec![0, 1, 2], vec![1, 0, 1], vec![2, 1, 7]]).unwrap();
        assert_eq!(
            trace(&t, &CostModel::unit()),
            Err(Error::NoConsistentAlignment {
                pos: Pos(2, 1),
                cost: 1
            })
        );
    }

    #[test]
    fn replacement_cost() {
        let cm = CostModel::new(2).unwrap();
        let t = build(b"abc", b"abd", &cm);
        assert_eq!(trace(&t, &cm).unwrap().ops(), &[Match, Match, Replace]);
        let t = build(b"abc", b"ab", &cm);
        assert_eq!(trace(&t, &cm).unwrap().ops(), &[Match, Match, Delete]);
        // Replacing is dearer than deleting and inserting.
        let cm = CostModel::new(3).unwrap();
        let t = build(b"a", b"b", &cm);
        assert_eq!(trace(&t, &cm).unwrap().ops(), &[Delete, Insert]);
    }
}
