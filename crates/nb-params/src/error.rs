//! Error types for parameter building.

use nb_renderer::RenderError;

/// Error while assembling request parameters.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ParamsError {
    /// Markdown content failed to render.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// Response value is neither a results array nor an object.
    #[error("unexpected response type: {0}")]
    UnexpectedResponse(&'static str),

    /// Row has no value for a requested column.
    #[error("row has no value for column '{0}'")]
    MissingColumn(String),

    /// Table row width differs from the column count.
    #[error("row {row} has {actual} cells, expected {expected}")]
    RowWidth {
        /// Zero-based row index.
        row: usize,
        /// Number of columns.
        expected: usize,
        /// Number of cells in the row.
        actual: usize,
    },
}
