//! Markdown to structured content blocks.
//!
//! This crate turns markdown text into the flat, ordered block sequence a
//! block-based page API accepts: paragraphs, headings, quotes, list items,
//! code, dividers, images, tables, and directive-driven callouts, to-dos and
//! toggles.
//!
//! # Architecture
//!
//! Rendering happens in two steps:
//! - [`MarkdownParser`] builds a closed syntax tree ([`Node`], [`Inline`]) on
//!   top of `pulldown-cmark`, recovering blank lines and link reference
//!   definitions as explicit nodes.
//! - [`BlockRenderer`] maps the tree to [`Block`] values. Lists expand into
//!   sibling blocks and are flattened exactly one level.
//!
//! Paragraph post-processing runs in order: directives (`!!callout`,
//! `!!todo`, `!!toggle`) retype the block, and inline `<span style=...>`
//! markers color the spans of blocks that are still paragraphs.
//!
//! # Example
//!
//! ```
//! use nb_renderer::BlockRenderer;
//!
//! let result = BlockRenderer::new()
//!     .render_markdown("# Hello\n\n**Bold** text")
//!     .unwrap();
//! assert_eq!(result.blocks.len(), 3);
//! ```

pub mod ast;
mod block;
pub mod directive;
mod error;
mod flatten;
mod language;
mod parser;
mod renderer;
pub mod style;
mod util;

pub use ast::{Inline, Node};
pub use block::{
    Annotations, Block, BlockType, CalloutBlock, CodeBlock, Color, Icon, ImageBlock, Link,
    QuoteBlock, RichText, TableBlock, TableRow, TextBlock, TextContent, ToDoBlock, ToggleBlock,
};
pub use error::RenderError;
pub use flatten::{LineText, Rendered, flatten, render, render_line};
pub use language::{HTML, PLAIN_TEXT, resolve_language};
pub use parser::MarkdownParser;
pub use renderer::{BlockRenderer, RenderContext, RenderResult};
