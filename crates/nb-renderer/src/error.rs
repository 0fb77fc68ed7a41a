//! Error types for block rendering.

/// Fatal rendering error. No partial result is produced.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum RenderError {
    /// Syntax node with no block mapping (including headings deeper than 3).
    #[error("unsupported node kind: {0}")]
    UnsupportedNodeKind(String),

    /// List item whose content does not resolve to exactly one block.
    #[error("list item must render to exactly one block, got {blocks}")]
    MalformedListItem {
        /// Number of blocks the item produced.
        blocks: usize,
    },

    /// Render output that is neither a block nor a one-level sequence.
    #[error("format error: {0}")]
    Format(String),
}
