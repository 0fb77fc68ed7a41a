//! Top-level flattening of rendered nodes.

use serde::Serialize;

use crate::block::{Block, RichText};
use crate::error::RenderError;
use crate::renderer::{BlockRenderer, RenderResult};

/// Output of rendering one syntax node.
///
/// Lists (and image-only paragraphs) yield a sequence; everything else yields
/// a single block.
#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    Block(Block),
    Sequence(Vec<Rendered>),
}

/// Flatten rendered nodes exactly one level into an ordered block list.
///
/// A sequence nested inside a sequence is a [`RenderError::Format`].
pub fn flatten(items: Vec<Rendered>) -> Result<Vec<Block>, RenderError> {
    let mut blocks = Vec::with_capacity(items.len());
    for (index, item) in items.into_iter().enumerate() {
        match item {
            Rendered::Block(block) => blocks.push(block),
            Rendered::Sequence(entries) => {
                for entry in entries {
                    match entry {
                        Rendered::Block(block) => blocks.push(block),
                        Rendered::Sequence(_) => {
                            return Err(RenderError::Format(format!(
                                "entry {index} nests sequences more than one level deep"
                            )));
                        }
                    }
                }
            }
        }
    }
    Ok(blocks)
}

/// Single-line text for titles: the first block's spans, or the raw input.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LineText {
    RichText(Vec<RichText>),
    Raw(String),
}

impl LineText {
    /// Pick the first block's rich text, falling back to `raw` when no spans exist.
    #[must_use]
    pub fn from_blocks(blocks: &[Block], raw: &str) -> Self {
        match blocks.first().and_then(Block::rich_text) {
            Some(spans) if !spans.is_empty() => Self::RichText(spans.to_vec()),
            _ => Self::Raw(raw.to_owned()),
        }
    }

    /// Concatenated text content.
    #[must_use]
    pub fn plain_text(&self) -> String {
        match self {
            Self::RichText(spans) => spans.iter().map(RichText::content).collect(),
            Self::Raw(raw) => raw.clone(),
        }
    }
}

/// Render markdown with the default renderer.
pub fn render(markdown: &str) -> Result<RenderResult, RenderError> {
    BlockRenderer::new().render_markdown(markdown)
}

/// Render markdown into single-line title text with the default renderer.
pub fn render_line(markdown: &str) -> Result<LineText, RenderError> {
    BlockRenderer::new().render_line(markdown)
}
