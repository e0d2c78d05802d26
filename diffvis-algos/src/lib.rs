//! The alignment engine: cost tables, path tracing, templates and reports.

pub mod alignment;
pub mod cli;
pub mod lcs;
pub mod model;
pub mod report;
pub mod table;
pub mod template;
pub mod trace;


pub use alignment::Alignment;
pub use model::Model;
pub use report::{format_cost_table, format_edit_history};
pub use template::{extract, Template};
