use crate::{Cost, CostModel, Error, Result};
use derive_more::AddAssign;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::{fmt, slice};

/// A single edit operation turning the source into the target.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EditOp {
    Match,
    Replace,
    /// Consume one source element.
    Delete,
    /// Consume one target element.
    Insert,
}

impl EditOp {
    pub fn name(&self) -> &'static str {
        match self {
            EditOp::Match => "match",
            EditOp::Replace => "replace",
            EditOp::Delete => "delete",
            EditOp::Insert => "insert",
        }
    }

    /// Run-length character, in the style of CIGAR strings.
    pub fn to_char(&self) -> char {
        match self {
            EditOp::Match => 'M',
            EditOp::Replace => 'X',
            EditOp::Delete => 'D',
            EditOp::Insert => 'I',
        }
    }

    pub fn advances_source(&self) -> bool {
        !matches!(self, EditOp::Insert)
    }

    pub fn advances_target(&self) -> bool {
        !matches!(self, EditOp::Delete)
    }
}

impl fmt::Display for EditOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Number of operations of each kind in a history.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, AddAssign, Serialize, Deserialize)]
pub struct OpCounts {
    pub matches: usize,
    pub replaces: usize,
    pub deletes: usize,
    pub inserts: usize,
}

impl OpCounts {
    pub fn of(op: EditOp) -> Self {
        let mut c = Self::default();
        match op {
            EditOp::Match => c.matches = 1,
            EditOp::Replace => c.replaces = 1,
            EditOp::Delete => c.deletes = 1,
            EditOp::Insert => c.inserts = 1,
        }
        c
    }

    /// The number of non-match operations.
    pub fn edits(&self) -> usize {
        self.replaces + self.deletes + self.inserts
    }

    /// Length of the source consumed by the history.
    pub fn source_len(&self) -> usize {
        self.matches + self.replaces + self.deletes
    }

    /// Length of the target consumed by the history.
    pub fn target_len(&self) -> usize {
        self.matches + self.replaces + self.inserts
    }
}

/// An ordered list of edit operations realizing one alignment.
#[derive(Clone, Default, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EditHistory {
    ops: Vec<EditOp>,
}

impl EditHistory {
    pub fn new(ops: Vec<EditOp>) -> Self {
        Self { ops }
    }

    pub fn ops(&self) -> &[EditOp] {
        &self.ops
    }

    pub fn iter(&self) -> slice::Iter<'_, EditOp> {
        self.ops.iter()
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn counts(&self) -> OpCounts {
        let mut counts = OpCounts::default();
        for &op in &self.ops {
            counts += OpCounts::of(op);
        }
        counts
    }

    /// Total cost of the history under the given cost model.
    pub fn cost(&self, cm: &CostModel) -> Cost {
        self.ops.iter().map(|&op| cm.cost(op)).sum()
    }

    /// Check that the history consumes exactly `m` source and `n` target elements.
    pub fn verify(&self, m: usize, n: usize) -> Result<()> {
        let (mut i, mut j) = (0, 0);
        for (step, op) in self.ops.iter().enumerate() {
            i += op.advances_source() as usize;
            j += op.advances_target() as usize;
            if i > m || j > n {
                return Err(Error::HistoryMismatch { step });
            }
        }
        if (i, j) != (m, n) {
            return Err(Error::HistoryMismatch {
                step: self.ops.len(),
            });
        }
        Ok(())
    }

    /// Replay the history on `source`, taking inserted and replacing elements
    /// from `target`, and return the resulting sequence.
    ///
    /// A `match` on two unequal elements is an error.
    pub fn apply<T: Clone + PartialEq>(&self, source: &[T], target: &[T]) -> Result<Vec<T>> {
        self.verify(source.len(), target.len())?;
        let mut out = Vec::with_capacity(target.len());
        let (mut i, mut j) = (0, 0);
        for (step, op) in self.ops.iter().enumerate() {
            match op {
                EditOp::Match => {
                    if source[i] != target[j] {
                        return Err(Error::HistoryMismatch { step });
                    }
                    out.push(source[i].clone());
                }
                EditOp::Replace | EditOp::Insert => out.push(target[j].clone()),
                EditOp::Delete => {}
            }
            i += op.advances_source() as usize;
            j += op.advances_target() as usize;
        }
        Ok(out)
    }

    /// Run-length encoding like `1X3M1X1M1I`.
    pub fn cigar(&self) -> String {
        self.ops
            .iter()
            .dedup_with_count()
            .map(|(cnt, op)| format!("{cnt}{}", op.to_char()))
            .collect()
    }
}

impl fmt::Display for EditHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ops.iter().join(" "))
    }
}

impl FromIterator<EditOp> for EditHistory {
    fn from_iter<I: IntoIterator<Item = EditOp>>(iter: I) -> Self {
        Self {
            ops: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a EditHistory {
    type Item = &'a EditOp;
    type IntoIter = slice::Iter<'a, EditOp>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}

impl From<Vec<EditOp>> for EditHistory {
    fn from(ops: Vec<EditOp>) -> Self {
        Self { ops }
    }
}
