//! Plain-text dumps of a cost table and an edit history.

use diffvis_types::{CostTable, EditHistory, Result};
use itertools::Itertools;
use std::{fmt::Display, iter};

/// Render `table` as a bordered grid.
///
/// The target runs along the header row and the source down the first
/// column. Every column is as wide as the widest number or element, plus two.
pub fn format_cost_table<T: Display>(source: &[T], target: &[T], table: &CostTable) -> Result<String> {
    table.check_dims(source.len(), target.len())?;
    let source = source.iter().map(|x| x.to_string()).collect_vec();
    let target = target.iter().map(|x| x.to_string()).collect_vec();

    let elem_width = source.iter().chain(&target).map(|x| x.chars().count());
    let cost_width = table.iter_rows().flatten().map(|c| c.to_string().len());
    let w = elem_width.chain(cost_width).max().unwrap_or(0) + 2;
    let line = "-".repeat((w + 1) * (target.len() + 2) + 1);

    let mut lines = vec!["Cost Table".to_string(), line.clone()];
    lines.push(grid_row(w, "", iter::once(String::new()).chain(target)));
    lines.push(line.clone());
    for (i, costs) in table.iter_rows().enumerate() {
        let label = if i == 0 { "" } else { source[i - 1].as_str() };
        lines.push(grid_row(w, label, costs.iter().map(|c| c.to_string())));
        lines.push(line.clone());
    }
    Ok(lines.join("\n"))
}

fn grid_row(w: usize, label: &str, cells: impl Iterator<Item = String>) -> String {
    format!("|{label:>w$}|{}", cells.map(|c| format!("{c:>w$}|")).join(""))
}

/// `Edit History` followed by one tab-indented operation per line.
pub fn format_edit_history(history: &EditHistory) -> String {
    format!("Edit History\n\t{}", history.iter().join("\n\t"))
}
