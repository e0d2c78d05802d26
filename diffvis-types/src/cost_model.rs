//! The `CostModel` used by the edit-distance model.

use crate::{Cost, EditOp, Error, Result};
use serde::{Deserialize, Serialize};
use std::cmp::min;

/// Costs of the four edit operations.
///
/// A vertical step in the cost table consumes a source element and is a
/// deletion; a horizontal step consumes a target element and is an insertion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CostModel {
    /// Cost of aligning two equal elements.
    pub matched: Cost,
    /// Cost of consuming one target element.
    pub ins: Cost,
    /// Cost of consuming one source element.
    pub del: Cost,
    /// Cost of aligning two different elements.
    pub sub: Cost,
}

impl Default for CostModel {
    fn default() -> Self {
        Self::unit()
    }
}

impl CostModel {
    /// Unit indels and the given replacement cost.
    ///
    /// Only the replacement cost is configurable: the forward path tracer
    /// needs every indel to change the cost by exactly one.
    pub fn new(sub: Cost) -> Result<Self> {
        if sub < 1 {
            return Err(Error::InvalidCostModel { sub });
        }
        Ok(Self { sub, ..Self::unit() })
    }

    /// Levenshtein distance: match=0, everything else 1.
    pub const fn unit() -> Self {
        Self {
            matched: 0,
            ins: 1,
            del: 1,
            sub: 1,
        }
    }

    pub fn is_unit(&self) -> bool {
        *self == Self::unit()
    }

    /// Upper bound on the distance between an `m` and an `n` element sequence:
    /// pair up `min(m, n)` elements as cheaply as possible without matching,
    /// then delete or insert the rest. Equals `max(m, n)` for unit costs.
    pub fn max_cost(&self, m: usize, n: usize) -> Cost {
        let k = min(m, n);
        let per_pair = min(self.sub, self.ins + self.del);
        k as Cost * per_pair + (m - k) as Cost * self.del + (n - k) as Cost * self.ins
    }

    pub fn cost(&self, op: EditOp) -> Cost {
        match op {
            EditOp::Match => self.matched,
            EditOp::Replace => self.sub,
            EditOp::Delete => self.del,
            EditOp::Insert => self.ins,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_is_default() {
        assert_eq!(CostModel::default(), CostModel::unit());
        assert!(CostModel::unit().is_unit());
        assert_eq!(CostModel::unit().cost(EditOp::Match), 0);
        assert_eq!(CostModel::unit().cost(EditOp::Insert), 1);
    }

    #[test]
    fn replacement_cost() {
        assert_eq!(CostModel::new(0), Err(Error::InvalidCostModel { sub: 0 }));
        let cm = CostModel::new(2).unwrap();
        assert!(!cm.is_unit());
        assert_eq!(cm.cost(EditOp::Replace), 2);
        assert_eq!(cm.cost(EditOp::Delete), 1);
        assert_eq!(CostModel::new(1), Ok(CostModel::unit()));
    }

    #[test]
    fn max_cost() {
        let unit = CostModel::unit();
        assert_eq!(unit.max_cost(0, 0), 0);
        assert_eq!(unit.max_cost(3, 7), 7);
        assert_eq!(unit.max_cost(4, 1), 4);
        // Two indels are cheaper than one replacement of cost 3.
        let cm = CostModel::new(3).unwrap();
        assert_eq!(cm.max_cost(1, 1), 2);
        assert_eq!(cm.max_cost(2, 5), 7);
        assert_eq!(CostModel::new(2).unwrap().max_cost(3, 3), 6);
    }
}
