use crate::{lcs, table, trace};
use diffvis_types::{Cost, CostModel, CostTable, EditHistory, Error, Result};
use serde::{Deserialize, Serialize};
use std::{cmp::max, fmt, str::FromStr};

/// The two alignment models.
///
/// Both expose the same `build`/`trace`/`measure` contract, so callers do not
/// need to know which one is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Model {
    /// Levenshtein distance under the given costs. Lower is more similar.
    EditDistance(CostModel),
    /// Length of the longest common subsequence. Higher is more similar.
    LongestCommonSubsequence,
}

use Model::*;

impl Default for Model {
    fn default() -> Self {
        EditDistance(CostModel::unit())
    }
}

impl Model {
    pub const NAMES: [&'static str; 2] = ["edit-distance", "longest-common-subsequence"];

    pub fn name(&self) -> &'static str {
        match self {
            EditDistance(_) => Self::NAMES[0],
            LongestCommonSubsequence => Self::NAMES[1],
        }
    }

    /// Replace the cost model. The LCS model has no costs and is unchanged.
    pub fn with_costs(self, cm: CostModel) -> Self {
        match self {
            EditDistance(_) => EditDistance(cm),
            LongestCommonSubsequence => LongestCommonSubsequence,
        }
    }

    /// Whether larger values mean more similar sequences.
    pub fn is_similarity(&self) -> bool {
        matches!(self, LongestCommonSubsequence)
    }

    pub fn build<T: PartialEq>(&self, a: &[T], b: &[T]) -> CostTable {
        match self {
            EditDistance(cm) => table::build(a, b, cm),
            LongestCommonSubsequence => lcs::build(a, b),
        }
    }

    /// Recover one optimal edit history from a table built for `a` and `b`.
    pub fn trace<T: PartialEq>(&self, table: &CostTable, a: &[T], b: &[T]) -> Result<EditHistory> {
        match self {
            EditDistance(cm) => {
                table.check_dims(a.len(), b.len())?;
                trace::trace(table, cm)
            }
            LongestCommonSubsequence => lcs::trace(table, a, b),
        }
    }

    /// The distance (or LCS length) of `a` and `b`.
    ///
    /// `table` is reused when given and built otherwise. With `normalize`, the
    /// value is scaled into `[0, 1]`: LCS lengths and unit edit distances are
    /// divided by the length of the longer sequence. Two empty sequences
    /// always measure 0.
    pub fn measure<T: PartialEq>(
        &self,
        a: &[T],
        b: &[T],
        table: Option<&CostTable>,
        normalize: bool,
    ) -> Result<f64> {
        if a.is_empty() && b.is_empty() {
            return Ok(0.);
        }
        let value = match table {
            Some(table) => {
                table.check_dims(a.len(), b.len())?;
                table.last()
            }
            None => self.build(a, b).last(),
        };
        Ok(self.score(value, a.len(), b.len(), normalize))
    }

    /// `value` as a float. Normalizing divides it by the largest value the
    /// model can reach for an `m` and an `n` element sequence, so the result
    /// lies in `[0, 1]`.
    pub(crate) fn score(&self, value: Cost, m: usize, n: usize, normalize: bool) -> f64 {
        let bound = match self {
            EditDistance(cm) => cm.max_cost(m, n),
            LongestCommonSubsequence => max(m, n) as Cost,
        };
        if normalize && bound > 0 {
            value as f64 / bound as f64
        } else {
            value as f64
        }
    }
}

impl FromStr for Model {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().replace('_', "-").as_str() {
            "edit-distance" | "levenshtein" => Ok(Model::default()),
            "longest-common-subsequence" | "lcs" => Ok(LongestCommonSubsequence),
            _ => Err(Error::UnknownModel(s.to_string())),
        }
    }
}

impl fmt::Display for Model {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
