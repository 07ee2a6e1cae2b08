use crate::table::CompareMode;

/// Direction of a column sort.
///
/// [`SortOrder::Unsorted`] is an explicit "do nothing" state so callers can
/// parameterize sort direction without branching.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
    Unsorted,
}

// Stable comparator-driven reordering of the given rows by one column.
// Missing cells compare as the empty string. Descending only swaps the
// comparator's operands.
pub(crate) fn sort_rows(
    rows: &mut [Vec<Option<String>>],
    column: usize,
    order: SortOrder,
    compare: CompareMode,
) {
    if matches!(order, SortOrder::Unsorted) {
        return;
    }

    rows.sort_by(|a, b| {
        let left = cell_key(a, column);
        let right = cell_key(b, column);

        match order {
            SortOrder::Descending => compare.cmp(right, left),
            _ => compare.cmp(left, right),
        }
    });
}

fn cell_key(row: &[Option<String>], column: usize) -> &str {
    row.get(column).and_then(|cell| cell.as_deref()).unwrap_or("")
}
