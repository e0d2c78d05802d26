//! The common skeleton of two aligned sequences.

use diffvis_types::{EditHistory, EditOp, Result};

/// Shared elements in order, with every maximal run of non-matching
/// operations replaced by a single placeholder.
pub type Template<T> = Vec<T>;

/// Walk `history` along `source` and `target` and build their template.
///
/// When the sequences have nothing in common the template would be a lone
/// placeholder; it is returned as a single empty (`T::default()`) element
/// instead.
pub fn extract<T: Clone + Default>(
    source: &[T],
    target: &[T],
    history: &EditHistory,
    placeholder: T,
) -> Result<Template<T>> {
    history.verify(source.len(), target.len())?;

    let mut template = Vec::new();
    let mut in_gap = false;
    let mut i = 0;
    for &op in history {
        if op == EditOp::Match {
            template.push(source[i].clone());
            in_gap = false;
        } else if !in_gap {
            template.push(placeholder.clone());
            in_gap = true;
        }
        i += op.advances_source() as usize;
    }

    if template.len() == 1 && in_gap {
        template = vec![T::default()];
    }
    Ok(template)
}
