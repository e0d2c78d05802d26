use crate::{Cost, Pos};

/// Everything that can go wrong in a single alignment request.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("unknown alignment model {0:?}; expected `edit-distance` or `longest-common-subsequence`")]
    UnknownModel(String),
    #[error("unknown output mode {0:?}; expected `console`, `html` or `html-table`")]
    UnknownMode(String),
    #[error("invalid color {0:?}")]
    UnknownColor(String),
    #[error("invalid replacement cost {sub}; it must be at least 1")]
    InvalidCostModel { sub: Cost },
    /// The cost table is not a valid DP table; `pos` is the furthest cell the
    /// search reached before every branch was exhausted.
    #[error("no consistent alignment found: search failed at {pos} with cost {cost}")]
    NoConsistentAlignment { pos: Pos, cost: Cost },
    #[error("cost table row {row} has {found} columns, expected {expected}")]
    RaggedTable {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("cost table has no cells")]
    EmptyTable,
    #[error("cost table is {table_rows}x{table_cols}, but the sequences need {rows}x{cols}")]
    DimensionMismatch {
        table_rows: usize,
        table_cols: usize,
        rows: usize,
        cols: usize,
    },
    /// The edit history does not fit the source/target lengths.
    #[error("edit history does not match the sequences at step {step}")]
    HistoryMismatch { step: usize },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
