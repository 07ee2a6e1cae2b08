use std::cmp::Ordering;

use crate::sort::{sort_rows, SortOrder};
use crate::tokenizer::split_into_cells;

/// How header lookups and sort comparisons treat string case.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CompareMode {
    /// Exact codepoint comparison.
    #[default]
    Ordinal,
    /// Case-insensitive comparison.
    IgnoreCase,
}

impl CompareMode {
    pub(crate) fn cmp(self, a: &str, b: &str) -> Ordering {
        match self {
            Self::Ordinal => a.cmp(b),
            Self::IgnoreCase => a.to_lowercase().cmp(&b.to_lowercase()),
        }
    }

    pub(crate) fn eq(self, a: &str, b: &str) -> bool {
        self.cmp(a, b) == Ordering::Equal
    }
}

/// A fixed-shape grid of optional string cells plus dialect state.
///
/// The shape (`width` columns by `len()` rows) is fixed at construction:
/// out-of-range reads return `None` and out-of-range writes are silently
/// ignored, so ragged or sparse source data can never mutate the grid shape.
///
/// When the heading flag is enabled, row 0 provides column names for
/// name-based addressing and is excluded from sorting. Names are resolved
/// against row 0 at call time, so mutating the header row changes future
/// lookups.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    width: usize,
    heading: bool,
    compare: CompareMode,
    rows: Vec<Vec<Option<String>>>,
}

impl Table {
    /// Create a table of the given shape with every cell unset.
    pub fn with_shape(width: usize, length: usize) -> Self {
        Self {
            width,
            heading: false,
            compare: CompareMode::Ordinal,
            rows: (0..length).map(|_| vec![None; width]).collect(),
        }
    }

    /// Create a table from an ordered collection of rows of varying length.
    ///
    /// The width becomes the maximum row length seen; shorter rows are padded
    /// with unset trailing cells, which is an invariant of the grid rather
    /// than an error.
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = Vec<Option<String>>>,
    {
        let mut rows: Vec<Vec<Option<String>>> = rows.into_iter().collect();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);

        for row in rows.iter_mut() {
            row.resize(width, None);
        }

        Self {
            width,
            heading: false,
            compare: CompareMode::Ordinal,
            rows,
        }
    }

    /// Create a table by tokenizing each given line with
    /// [`split_into_cells`](crate::split_into_cells).
    ///
    /// Lines tokenizing to zero cells (empty or whitespace-only) are skipped.
    pub fn from_lines<'a, I>(lines: I, separator: char) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self::from_rows(
            lines
                .into_iter()
                .map(|line| {
                    split_into_cells(line, separator)
                        .into_iter()
                        .map(Some)
                        .collect::<Vec<_>>()
                })
                .filter(|cells| !cells.is_empty()),
        )
    }

    /// Indicate whether row 0 must be understood as a header.
    ///
    /// Will default to `false`.
    pub fn heading(&mut self, yes: bool) -> &mut Self {
        self.heading = yes;
        self
    }

    /// Set the comparison mode used by header lookups and sorting.
    ///
    /// Will default to [`CompareMode::Ordinal`].
    pub fn compare_mode(&mut self, mode: CompareMode) -> &mut Self {
        self.compare = mode;
        self
    }

    pub fn has_heading(&self) -> bool {
        self.heading
    }

    /// Declared number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows, header row included.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no columns or no rows.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.rows.is_empty()
    }

    /// Read the cell at `(column, row)`.
    ///
    /// Returns `None` for an unset cell as well as for an out-of-range
    /// position.
    pub fn get(&self, column: usize, row: usize) -> Option<&str> {
        self.rows.get(row)?.get(column)?.as_deref()
    }

    /// Write the cell at `(column, row)`, silently ignoring out-of-range
    /// positions.
    pub fn set(&mut self, column: usize, row: usize, value: impl Into<String>) {
        if let Some(cell) = self.cell_mut(column, row) {
            *cell = Some(value.into());
        }
    }

    /// Reset the cell at `(column, row)` to the unset state, silently
    /// ignoring out-of-range positions.
    pub fn unset(&mut self, column: usize, row: usize) {
        if let Some(cell) = self.cell_mut(column, row) {
            *cell = None;
        }
    }

    fn cell_mut(&mut self, column: usize, row: usize) -> Option<&mut Option<String>> {
        self.rows.get_mut(row)?.get_mut(column)
    }

    /// Resolve a header name to a column index by scanning row 0, first match
    /// winning.
    ///
    /// Returns `None` when the heading flag is disabled, when the table is
    /// empty, or when no cell of row 0 matches under the table's
    /// [`CompareMode`].
    pub fn column_index(&self, name: &str) -> Option<usize> {
        if !self.heading || self.is_empty() {
            return None;
        }

        self.rows[0].iter().position(|cell| {
            cell.as_deref()
                .is_some_and(|value| self.compare.eq(value, name))
        })
    }

    /// Read a cell by header name, `row` restarting at 0 for the first data
    /// row. An unresolved name behaves as out-of-range.
    pub fn get_named(&self, name: &str, row: usize) -> Option<&str> {
        let column = self.column_index(name)?;
        let row = row.checked_add(1)?;

        self.get(column, row)
    }

    /// Write a cell by header name, `row` restarting at 0 for the first data
    /// row. An unresolved name behaves as out-of-range.
    pub fn set_named(&mut self, name: &str, row: usize, value: impl Into<String>) {
        if let (Some(column), Some(row)) = (self.column_index(name), row.checked_add(1)) {
            self.set(column, row, value);
        }
    }

    /// Stable in-place sort of the rows by the given column.
    ///
    /// An out-of-range column or the [`SortOrder::Unsorted`] order is a
    /// silent no-op. With the heading flag enabled, row 0 never participates
    /// in the reordering.
    pub fn sort_by_column(&mut self, column: usize, order: SortOrder) {
        if column >= self.width {
            return;
        }

        let body = if self.heading && !self.rows.is_empty() {
            &mut self.rows[1..]
        } else {
            &mut self.rows[..]
        };

        sort_rows(body, column, order, self.compare);
    }

    /// Stable in-place sort of the rows by the column named in row 0.
    ///
    /// An unresolved header name is a silent no-op.
    pub fn sort_by_header(&mut self, name: &str, order: SortOrder) {
        if let Some(column) = self.column_index(name) {
            self.sort_by_column(column, order);
        }
    }

    pub(crate) fn rows(&self) -> &[Vec<Option<String>>] {
        &self.rows
    }
}
