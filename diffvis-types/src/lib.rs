//! Types shared by the diffvis crates: the cost model, edit operations,
//! edit histories and cost tables.

mod cost_model;
mod edit;
mod error;
mod table;

pub use cost_model::CostModel;
pub use edit::{EditHistory, EditOp, OpCounts};
pub use error::{Error, Result};
pub use table::CostTable;

use serde::{Deserialize, Serialize};
use std::fmt;

/// The type of costs, distances and LCS lengths.
pub type Cost = i32;

/// A position `(i, j)` in a cost table: `i` indexes the source, `j` the target.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pos(pub usize, pub usize);

impl fmt::Debug for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
