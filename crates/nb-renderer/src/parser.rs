//! Markdown parser producing the closed [`Node`] tree.
//!
//! Wraps pulldown-cmark's offset iterator. pulldown-cmark reports neither
//! blank lines nor link reference definitions as events, so both are recovered
//! from source positions: a run of blank lines between sibling blocks of the
//! document or of a quote becomes one [`Node::BlankLine`], and document-level
//! reference definitions become [`Node::LinkReference`] at their position.

use std::ops::Range;

use pulldown_cmark::{CodeBlockKind, Event, LinkType, OffsetIter, Options, Parser, Tag};

use crate::ast::{CodeBlock, CodeKind, Inline, ListItem, Node, Table, TableCell};
use crate::error::RenderError;
use crate::util::{heading_level_to_num, is_blank_line};

type Spanned = (Node, Range<usize>);

/// Markdown to syntax tree parser.
#[derive(Clone, Copy, Debug)]
pub struct MarkdownParser {
    gfm: bool,
}

impl MarkdownParser {
    /// Create a new parser with GFM enabled by default.
    #[must_use]
    pub fn new() -> Self {
        Self { gfm: true }
    }

    /// Enable or disable GitHub Flavored Markdown features.
    ///
    /// GFM is enabled by default. When enabled, the parser supports:
    /// - Tables
    /// - Strikethrough (`~~text~~`)
    /// - Task lists (`- [ ] item`)
    #[must_use]
    pub fn with_gfm(mut self, enabled: bool) -> Self {
        self.gfm = enabled;
        self
    }

    /// Get parser options based on GFM configuration.
    #[must_use]
    pub fn parser_options(&self) -> Options {
        if self.gfm {
            Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS
        } else {
            Options::empty()
        }
    }

    /// Parse markdown text into top-level block nodes.
    pub fn parse(&self, markdown: &str) -> Result<Vec<Node>, RenderError> {
        let parser = Parser::new_ext(markdown, self.parser_options());
        let definitions: Vec<Spanned> = parser
            .reference_definitions()
            .iter()
            .map(|(label, def)| {
                let node = Node::LinkReference {
                    label: label.to_owned(),
                    dest: def.dest.to_string(),
                };
                (node, def.span.clone())
            })
            .collect();

        let mut builder = TreeBuilder {
            lines: LineIndex::new(markdown),
            events: parser.into_offset_iter(),
            task: None,
        };
        let mut blocks = builder.blocks()?;
        merge_definitions(&mut blocks, definitions);

        let last_line = builder.lines.len().checked_sub(1);
        Ok(builder.lines.with_blank_lines(blocks, 0, last_line))
    }
}

impl Default for MarkdownParser {
    fn default() -> Self {
        Self::new()
    }
}

/// Insert reference definitions that sit between top-level blocks.
fn merge_definitions(blocks: &mut Vec<Spanned>, definitions: Vec<Spanned>) {
    let outside: Vec<Spanned> = definitions
        .into_iter()
        .filter(|(_, span)| {
            !blocks
                .iter()
                .any(|(_, range)| range.start <= span.start && span.end <= range.end)
        })
        .collect();
    if outside.is_empty() {
        return;
    }
    blocks.extend(outside);
    blocks.sort_by_key(|(_, range)| range.start);
}

fn unsupported(event: &Event<'_>) -> RenderError {
    RenderError::UnsupportedNodeKind(format!("{event:?}"))
}

fn is_inline_tag(tag: &Tag<'_>) -> bool {
    matches!(
        tag,
        Tag::Emphasis
            | Tag::Strong
            | Tag::Strikethrough
            | Tag::Link { .. }
            | Tag::Image { .. }
            | Tag::Superscript
            | Tag::Subscript
    )
}

/// Join adjacent text runs; pulldown-cmark splits them at escapes and delimiters.
fn merge_text(inlines: Vec<Inline>) -> Vec<Inline> {
    let mut merged: Vec<Inline> = Vec::with_capacity(inlines.len());
    for inline in inlines {
        if let (Some(Inline::Text(prev)), Inline::Text(next)) = (merged.last_mut(), &inline) {
            prev.push_str(next);
        } else {
            merged.push(inline);
        }
    }
    merged
}

struct TreeBuilder<'a> {
    lines: LineIndex<'a>,
    events: OffsetIter<'a>,
    /// Task marker seen but not yet claimed by its list item.
    task: Option<bool>,
}

impl<'a> TreeBuilder<'a> {
    /// Read sibling blocks until the enclosing end tag or end of input.
    fn blocks(&mut self) -> Result<Vec<Spanned>, RenderError> {
        let mut blocks = Vec::new();
        while let Some((event, range)) = self.events.next() {
            match event {
                Event::End(_) => break,
                Event::Rule => blocks.push((Node::ThematicBreak, range)),
                Event::Start(tag) => {
                    let node = self.block(tag, &range)?;
                    blocks.push((node, range));
                }
                other => return Err(unsupported(&other)),
            }
        }
        Ok(blocks)
    }

    fn block(&mut self, tag: Tag<'a>, range: &Range<usize>) -> Result<Node, RenderError> {
        let node = match tag {
            Tag::Paragraph => Node::Paragraph(self.inlines()?),
            Tag::Heading { level, .. } => Node::Heading {
                level: heading_level_to_num(level),
                children: self.inlines()?,
            },
            Tag::BlockQuote(_) => {
                let children = self.blocks()?;
                let first = self.lines.line_of(range.start);
                let last = self.lines.last_line_of(range);
                Node::Quote(self.lines.with_blank_lines(children, first, Some(last)))
            }
            Tag::CodeBlock(kind) => {
                let (kind, info) = match kind {
                    CodeBlockKind::Fenced(info) => {
                        let info = Some(info.trim().to_owned()).filter(|i| !i.is_empty());
                        (CodeKind::Fenced, info)
                    }
                    CodeBlockKind::Indented => (CodeKind::Indented, None),
                };
                Node::CodeBlock(CodeBlock {
                    kind,
                    info,
                    literal: self.literal()?,
                })
            }
            Tag::HtmlBlock => Node::HtmlBlock(self.literal()?),
            Tag::List(start) => Node::List {
                ordered: start.is_some(),
                items: self.items()?,
            },
            Tag::Table(_) => Node::Table(self.table()?),
            other => return Err(RenderError::UnsupportedNodeKind(format!("{other:?}"))),
        };
        Ok(node)
    }

    /// Raw content of code and HTML blocks.
    fn literal(&mut self) -> Result<String, RenderError> {
        let mut literal = String::new();
        for (event, _) in self.events.by_ref() {
            match event {
                Event::End(_) => break,
                Event::Text(text) | Event::Html(text) => literal.push_str(&text),
                other => return Err(unsupported(&other)),
            }
        }
        Ok(literal)
    }

    fn items(&mut self) -> Result<Vec<ListItem>, RenderError> {
        let mut items = Vec::new();
        while let Some((event, _)) = self.events.next() {
            match event {
                Event::Start(Tag::Item) => items.push(self.item()?),
                Event::End(_) => break,
                other => return Err(unsupported(&other)),
            }
        }
        Ok(items)
    }

    /// Tight items carry inline content directly; it is wrapped in a paragraph.
    fn item(&mut self) -> Result<ListItem, RenderError> {
        let mut checked = None;
        let mut children = Vec::new();
        let mut pending = Vec::new();

        while let Some((event, range)) = self.events.next() {
            match event {
                Event::End(_) => break,
                Event::Rule => {
                    flush_paragraph(&mut pending, &mut children);
                    children.push(Node::ThematicBreak);
                }
                Event::Start(tag) if !is_inline_tag(&tag) => {
                    flush_paragraph(&mut pending, &mut children);
                    let node = self.block(tag, &range)?;
                    children.push(node);
                }
                other => pending.extend(self.inline(other)?),
            }
            if checked.is_none() {
                checked = self.task.take();
            }
        }
        flush_paragraph(&mut pending, &mut children);

        Ok(ListItem { checked, children })
    }

    fn table(&mut self) -> Result<Table, RenderError> {
        let mut table = Table::default();
        while let Some((event, _)) = self.events.next() {
            match event {
                Event::Start(Tag::TableHead) => table.header = self.cells()?,
                Event::Start(Tag::TableRow) => {
                    let row = self.cells()?;
                    table.rows.push(row);
                }
                Event::End(_) => break,
                other => return Err(unsupported(&other)),
            }
        }
        Ok(table)
    }

    fn cells(&mut self) -> Result<Vec<TableCell>, RenderError> {
        let mut cells = Vec::new();
        while let Some((event, _)) = self.events.next() {
            match event {
                Event::Start(Tag::TableCell) => cells.push(self.inlines()?),
                Event::End(_) => break,
                other => return Err(unsupported(&other)),
            }
        }
        Ok(cells)
    }

    /// Read inline children until the enclosing end tag.
    fn inlines(&mut self) -> Result<Vec<Inline>, RenderError> {
        let mut inlines = Vec::new();
        while let Some((event, _)) = self.events.next() {
            if matches!(event, Event::End(_)) {
                break;
            }
            inlines.extend(self.inline(event)?);
        }
        Ok(merge_text(inlines))
    }

    fn inline(&mut self, event: Event<'a>) -> Result<Option<Inline>, RenderError> {
        let inline = match event {
            Event::Text(text) => Inline::Text(text.into_string()),
            Event::Code(code) => Inline::Code(code.into_string()),
            Event::InlineHtml(html) | Event::Html(html) => Inline::Html(html.into_string()),
            Event::SoftBreak | Event::HardBreak => Inline::LineBreak,
            Event::TaskListMarker(checked) => {
                self.task = Some(checked);
                return Ok(None);
            }
            Event::Start(Tag::Emphasis) => Inline::Emphasis(self.inlines()?),
            Event::Start(Tag::Strong) => Inline::Strong(self.inlines()?),
            Event::Start(Tag::Strikethrough) => Inline::Strikethrough(self.inlines()?),
            Event::Start(Tag::Link {
                link_type: LinkType::Autolink | LinkType::Email,
                dest_url,
                ..
            }) => {
                // Link text repeats the destination.
                self.inlines()?;
                Inline::AutoLink {
                    dest: dest_url.into_string(),
                }
            }
            Event::Start(Tag::Link { dest_url, .. }) => Inline::Link {
                dest: dest_url.into_string(),
                children: self.inlines()?,
            },
            Event::Start(Tag::Image { dest_url, .. }) => Inline::Image {
                dest: dest_url.into_string(),
                alt: self.inlines()?,
            },
            other => return Err(unsupported(&other)),
        };
        Ok(Some(inline))
    }
}

fn flush_paragraph(pending: &mut Vec<Inline>, children: &mut Vec<Node>) {
    if !pending.is_empty() {
        children.push(Node::Paragraph(merge_text(std::mem::take(pending))));
    }
}

/// Line lookup over the source text.
struct LineIndex<'a> {
    source: &'a str,
    starts: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    fn new(source: &'a str) -> Self {
        let mut starts = Vec::new();
        if !source.is_empty() {
            starts.push(0);
            starts.extend(
                source
                    .match_indices('\n')
                    .map(|(i, _)| i + 1)
                    .filter(|&i| i < source.len()),
            );
        }
        Self { source, starts }
    }

    fn len(&self) -> usize {
        self.starts.len()
    }

    fn line_of(&self, offset: usize) -> usize {
        self.starts
            .partition_point(|&start| start <= offset)
            .saturating_sub(1)
    }

    fn last_line_of(&self, range: &Range<usize>) -> usize {
        self.line_of(range.end.saturating_sub(1).max(range.start))
    }

    /// Last line of `range` that is not blank.
    fn content_last_line(&self, range: &Range<usize>) -> usize {
        let first = self.line_of(range.start);
        let mut last = self.last_line_of(range);
        while last > first && is_blank_line(self.line(last)) {
            last -= 1;
        }
        last
    }

    fn line(&self, index: usize) -> &'a str {
        let start = self.starts[index];
        let end = self
            .starts
            .get(index + 1)
            .copied()
            .unwrap_or(self.source.len());
        &self.source[start..end]
    }

    fn any_blank(&self, from: usize, to: usize) -> bool {
        (from..to.min(self.len())).any(|index| is_blank_line(self.line(index)))
    }

    /// Place a [`Node::BlankLine`] wherever blank lines separate the blocks
    /// between `first_line` and `last_line` (inclusive).
    fn with_blank_lines(
        &self,
        blocks: Vec<Spanned>,
        first_line: usize,
        last_line: Option<usize>,
    ) -> Vec<Node> {
        let mut nodes = Vec::with_capacity(blocks.len());
        let mut next = first_line;
        for (node, range) in blocks {
            if self.any_blank(next, self.line_of(range.start)) {
                nodes.push(Node::BlankLine);
            }
            // List ranges run over their trailing blank lines.
            let end = if matches!(node, Node::List { .. }) {
                self.content_last_line(&range)
            } else {
                self.last_line_of(&range)
            };
            nodes.push(node);
            next = next.max(end + 1);
        }
        if let Some(last) = last_line
            && self.any_blank(next, last + 1)
        {
            nodes.push(Node::BlankLine);
        }
        nodes
    }
}
