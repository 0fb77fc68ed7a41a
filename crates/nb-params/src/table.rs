//! Table blocks from tabular data.

use nb_renderer::{Block, RichText, TableBlock, TableRow};

use crate::error::ParamsError;

/// Column names plus rows of stringified cell values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableData {
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TableData {
    /// Create table data, checking every row against the column count.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self, ParamsError> {
        if let Some((row, cells)) = rows
            .iter()
            .enumerate()
            .find(|(_, cells)| cells.len() != columns.len())
        {
            return Err(ParamsError::RowWidth {
                row,
                expected: columns.len(),
                actual: cells.len(),
            });
        }
        Ok(Self { columns, rows })
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }
}

fn row<S: AsRef<str>>(cells: &[S]) -> TableRow {
    TableRow {
        cells: cells
            .iter()
            .map(|cell| vec![RichText::plain(cell.as_ref())])
            .collect(),
    }
}

/// One table block holding the header row (if enabled) and the first
/// `include_rows` data rows.
///
/// Remaining rows can be appended to the created table with [`table_rows`].
#[must_use]
pub fn table_block(
    data: &TableData,
    include_rows: usize,
    has_row_header: bool,
    has_column_header: bool,
) -> Block {
    let mut children = Vec::new();
    if has_column_header {
        children.push(row(&data.columns));
    }
    let included = &data.rows[..include_rows.min(data.rows.len())];
    children.extend(table_rows(included));

    Block::Table(TableBlock {
        table_width: data.columns.len(),
        has_column_header,
        has_row_header,
        children,
    })
}

/// Table row blocks for a slice of data rows.
#[must_use]
pub fn table_rows(rows: &[Vec<String>]) -> Vec<TableRow> {
    rows.iter().map(|cells| row(cells)).collect()
}

/// Prefix every column except the first with its zero-padded index.
///
/// Database properties are shown in name order, so the prefix keeps the
/// input column order: `["k", "a", "b"]` becomes `["k", "0-a", "1-b"]`.
#[must_use]
pub fn prefix_columns(columns: &[String]) -> Vec<String> {
    let width = columns.len().saturating_sub(1) / 10 + 1;
    let mut prefixed = Vec::with_capacity(columns.len());
    let mut columns = columns.iter();
    if let Some(first) = columns.next() {
        prefixed.push(first.clone());
    }
    prefixed.extend(
        columns
            .enumerate()
            .map(|(idx, name)| format!("{idx:0width$}-{name}")),
    );
    prefixed
}
