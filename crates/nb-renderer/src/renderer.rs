//! Syntax tree to block renderer.

use crate::ast::{self, Inline, ListItem, Node};
use crate::block::{
    Annotations, Block, BlockType, CodeBlock, ImageBlock, QuoteBlock, RichText, TableBlock,
    TableRow, TextBlock, ToDoBlock,
};
use crate::directive::Directive;
use crate::error::RenderError;
use crate::flatten::{LineText, Rendered, flatten};
use crate::language::{HTML, resolve_language};
use crate::parser::MarkdownParser;
use crate::style::apply_colors;

/// Result of rendering markdown.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RenderResult {
    /// Ordered, flat block sequence.
    pub blocks: Vec<Block>,
    /// Non-fatal diagnostics (e.g., dropped nested blocks).
    pub warnings: Vec<String>,
}

/// Diagnostics collected during one render call.
#[derive(Debug, Default)]
pub struct RenderContext {
    warnings: Vec<String>,
}

impl RenderContext {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn into_warnings(self) -> Vec<String> {
        self.warnings
    }

    fn dropped(&mut self, parent: BlockType, blocks: &[Block]) {
        let types: Vec<&str> = blocks.iter().map(|b| b.block_type().as_str()).collect();
        tracing::warn!(parent = %parent, dropped = ?types, "Dropping nested blocks");
        self.warnings.push(format!(
            "{parent} cannot hold nested blocks, dropped [{}]",
            types.join(", ")
        ));
    }
}

/// Inline rendering output: a text span or a block met in inline position.
#[derive(Debug)]
enum Entry {
    Span(RichText),
    Block(Block),
}

/// Annotations and link inherited from enclosing inline nodes.
#[derive(Clone, Copy, Default)]
struct InlineStyle<'a> {
    annotations: Annotations,
    url: Option<&'a str>,
}

impl<'a> InlineStyle<'a> {
    fn with(mut self, apply: impl FnOnce(&mut Annotations)) -> Self {
        apply(&mut self.annotations);
        self
    }

    fn span(self, content: &str) -> Entry {
        Entry::Span(RichText::styled(content, self.annotations, self.url))
    }
}

fn inline_entries<'a>(inlines: &'a [Inline], style: InlineStyle<'a>, out: &mut Vec<Entry>) {
    for inline in inlines {
        match inline {
            Inline::Text(text) => out.push(style.span(text)),
            Inline::Emphasis(children) => {
                inline_entries(children, style.with(|a| a.italic = true), out);
            }
            Inline::Strong(children) => {
                inline_entries(children, style.with(|a| a.bold = true), out);
            }
            Inline::Strikethrough(children) => {
                inline_entries(children, style.with(|a| a.strikethrough = true), out);
            }
            Inline::Code(code) | Inline::Html(code) => {
                out.push(style.with(|a| a.code = true).span(code));
            }
            Inline::Link { dest, children } => {
                let linked = InlineStyle {
                    url: Some(dest.as_str()),
                    ..style
                };
                if children.is_empty() {
                    out.push(linked.span(""));
                } else {
                    inline_entries(children, linked, out);
                }
            }
            Inline::AutoLink { dest } => out.push(
                InlineStyle {
                    url: Some(dest.as_str()),
                    ..style
                }
                .span(dest.as_str()),
            ),
            Inline::Image { dest, .. } => out.push(Entry::Block(Block::Image(ImageBlock::external(
                dest.as_str(),
            )))),
            Inline::LineBreak => out.push(Entry::Span(RichText::plain("\n"))),
        }
    }
}

fn entries(inlines: &[Inline]) -> Vec<Entry> {
    let mut out = Vec::new();
    inline_entries(inlines, InlineStyle::default(), &mut out);
    out
}

/// Pull nested paragraph spans up into the rich text and collect other nested
/// blocks. Only quotes keep nested blocks; elsewhere they are dropped.
fn settle(
    parent: BlockType,
    entries: Vec<Entry>,
    ctx: &mut RenderContext,
) -> (Vec<RichText>, Vec<Block>) {
    let mut rich_text = Vec::new();
    let mut nested = Vec::new();
    for entry in entries {
        match entry {
            Entry::Span(span) => rich_text.push(span),
            Entry::Block(Block::Paragraph(paragraph)) => rich_text.extend(paragraph.rich_text),
            Entry::Block(block) => nested.push(block),
        }
    }
    if !nested.is_empty() && parent != BlockType::Quote {
        ctx.dropped(parent, &nested);
        nested.clear();
    }
    (rich_text, nested)
}

fn paragraph(inlines: &[Inline], ctx: &mut RenderContext) -> Rendered {
    let entries = entries(inlines);

    // A paragraph holding nothing but images becomes the images themselves.
    let image_only = entries.iter().any(|e| matches!(e, Entry::Block(_)))
        && entries.iter().all(|e| match e {
            Entry::Block(_) => true,
            Entry::Span(span) => span.content().trim().is_empty(),
        });
    if image_only {
        let mut images: Vec<Rendered> = entries
            .into_iter()
            .filter_map(|e| match e {
                Entry::Block(block) => Some(Rendered::Block(block)),
                Entry::Span(_) => None,
            })
            .collect();
        return match images.len() {
            1 => images.remove(0),
            _ => Rendered::Sequence(images),
        };
    }

    let (rich_text, _) = settle(BlockType::Paragraph, entries, ctx);
    if let Some(directive) = Directive::detect(&rich_text) {
        tracing::debug!(kind = ?directive.kind, "Retyping paragraph from directive");
        return Rendered::Block(directive.into_block(rich_text.into_iter().skip(2).collect()));
    }
    Rendered::Block(Block::paragraph(apply_colors(rich_text)))
}

fn table_block(table: &ast::Table, ctx: &mut RenderContext) -> TableBlock {
    let mut row = |cells: &[ast::TableCell]| TableRow {
        cells: cells
            .iter()
            .map(|cell| settle(BlockType::Table, entries(cell), ctx).0)
            .collect(),
    };
    let mut children = vec![row(&table.header)];
    children.extend(table.rows.iter().map(|cells| row(cells)));

    TableBlock {
        table_width: table.header.len(),
        has_column_header: true,
        has_row_header: true,
        children,
    }
}

/// Renders markdown syntax trees into content blocks.
///
/// The renderer holds configuration only; all per-call state lives in a
/// [`RenderContext`] or on the stack, so one renderer can be shared freely.
#[derive(Clone, Copy, Debug, Default)]
pub struct BlockRenderer {
    parser: MarkdownParser,
}

impl BlockRenderer {
    /// Create a new renderer with GFM enabled by default.
    #[must_use]
    pub fn new() -> Self {
        Self {
            parser: MarkdownParser::new(),
        }
    }

    /// Enable or disable GitHub Flavored Markdown features.
    #[must_use]
    pub fn with_gfm(mut self, enabled: bool) -> Self {
        self.parser = self.parser.with_gfm(enabled);
        self
    }

    /// Parse and render markdown text into a flat block sequence.
    pub fn render_markdown(&self, markdown: &str) -> Result<RenderResult, RenderError> {
        let nodes = self.parser.parse(markdown)?;
        self.render_nodes(&nodes)
    }

    /// Render markdown into single-line title text.
    ///
    /// Uses the first block's spans; falls back to the raw input when there
    /// are none.
    pub fn render_line(&self, markdown: &str) -> Result<LineText, RenderError> {
        let result = self.render_markdown(markdown)?;
        Ok(LineText::from_blocks(&result.blocks, markdown))
    }

    /// Render already parsed top-level nodes.
    pub fn render_nodes(&self, nodes: &[Node]) -> Result<RenderResult, RenderError> {
        let mut ctx = RenderContext::new();
        let rendered = nodes
            .iter()
            .map(|node| self.render_node(node, &mut ctx))
            .collect::<Result<Vec<_>, _>>()?;
        let blocks = flatten(rendered)?;
        tracing::debug!(
            blocks = blocks.len(),
            warnings = ctx.warnings.len(),
            "Rendered markdown"
        );
        Ok(RenderResult {
            blocks,
            warnings: ctx.into_warnings(),
        })
    }

    /// Render one syntax node.
    pub fn render_node(
        &self,
        node: &Node,
        ctx: &mut RenderContext,
    ) -> Result<Rendered, RenderError> {
        let block = match node {
            Node::Paragraph(inlines) => return Ok(paragraph(inlines, ctx)),
            Node::Heading { level, children } => {
                let block_type = match level {
                    1 => BlockType::Heading1,
                    2 => BlockType::Heading2,
                    3 => BlockType::Heading3,
                    _ => {
                        return Err(RenderError::UnsupportedNodeKind(format!(
                            "heading level {level}"
                        )));
                    }
                };
                let (rich_text, _) = settle(block_type, entries(children), ctx);
                let body = TextBlock { rich_text };
                match block_type {
                    BlockType::Heading1 => Block::Heading1(body),
                    BlockType::Heading2 => Block::Heading2(body),
                    _ => Block::Heading3(body),
                }
            }
            Node::Quote(children) => {
                let mut nested = Vec::new();
                for child in children {
                    let blocks = flatten(vec![self.render_node(child, ctx)?])?;
                    nested.extend(blocks.into_iter().map(Entry::Block));
                }
                let (rich_text, children) = settle(BlockType::Quote, nested, ctx);
                Block::Quote(QuoteBlock {
                    rich_text,
                    children,
                })
            }
            Node::List { ordered, items } => {
                let mut blocks = Vec::with_capacity(items.len());
                for item in items {
                    blocks.push(Rendered::Block(self.list_item(item, *ordered, ctx)?));
                }
                return Ok(Rendered::Sequence(blocks));
            }
            Node::CodeBlock(code) => Block::Code(CodeBlock {
                rich_text: vec![RichText::plain(code.literal.as_str())],
                language: resolve_language(code.language()),
            }),
            Node::HtmlBlock(html) => Block::Code(CodeBlock {
                rich_text: vec![RichText::plain(html.as_str())],
                language: HTML.to_owned(),
            }),
            Node::ThematicBreak => Block::Divider,
            Node::BlankLine | Node::LinkReference { .. } => {
                Block::paragraph(vec![RichText::plain("")])
            }
            Node::Table(table) => Block::Table(table_block(table, ctx)),
        };
        Ok(Rendered::Block(block))
    }

    fn list_item(
        &self,
        item: &ListItem,
        ordered: bool,
        ctx: &mut RenderContext,
    ) -> Result<Block, RenderError> {
        let mut blocks = Vec::new();
        for child in &item.children {
            blocks.extend(flatten(vec![self.render_node(child, ctx)?])?);
        }
        let [block] = <[Block; 1]>::try_from(blocks)
            .map_err(|blocks| RenderError::MalformedListItem {
                blocks: blocks.len(),
            })?;

        let item_type = match (item.checked, ordered) {
            (Some(_), _) => BlockType::ToDo,
            (None, true) => BlockType::NumberedListItem,
            (None, false) => BlockType::BulletedListItem,
        };
        match &block {
            Block::Quote(quote) if !quote.children.is_empty() => {
                ctx.dropped(item_type, &quote.children);
            }
            Block::Divider | Block::Image(_) | Block::Table(_) => {
                ctx.dropped(item_type, std::slice::from_ref(&block));
            }
            _ => {}
        }

        let rich_text = block.into_rich_text();
        Ok(match item.checked {
            Some(checked) => Block::ToDo(ToDoBlock {
                rich_text,
                checked,
                icon: None,
                color: None,
            }),
            None if ordered => Block::NumberedListItem(TextBlock { rich_text }),
            None => Block::BulletedListItem(TextBlock { rich_text }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};

    fn render(markdown: &str) -> RenderResult {
        BlockRenderer::new().render_markdown(markdown).unwrap()
    }

    fn render_json(markdown: &str) -> Value {
        serde_json::to_value(render(markdown).blocks).unwrap()
    }

    fn types(markdown: &str) -> Vec<&'static str> {
        render(markdown)
            .blocks
            .iter()
            .map(|b| b.block_type().as_str())
            .collect()
    }

    #[test]
    fn test_italic() {
        assert_eq!(
            render_json("_italic_"),
            json!([{
                "type": "paragraph",
                "paragraph": {
                    "rich_text": [{
                        "text": {"content": "italic"},
                        "annotations": {"italic": true}
                    }]
                }
            }])
        );
    }

    #[test]
    fn test_bold_strikethrough_code() {
        let annotation = |markdown: &str| render_json(markdown)[0]["paragraph"]["rich_text"].clone();
        assert_eq!(
            annotation("**bold**"),
            json!([{"text": {"content": "bold"}, "annotations": {"bold": true}}])
        );
        assert_eq!(
            annotation("~~cross~~"),
            json!([{"text": {"content": "cross"}, "annotations": {"strikethrough": true}}])
        );
        assert_eq!(
            annotation("`code here`"),
            json!([{"text": {"content": "code here"}, "annotations": {"code": true}}])
        );
    }

    #[test]
    fn test_nested_inline_annotations_combine() {
        let rich_text = render_json("**bold _both_**")[0]["paragraph"]["rich_text"].clone();
        assert_eq!(
            rich_text,
            json!([
                {"text": {"content": "bold "}, "annotations": {"bold": true}},
                {"text": {"content": "both"}, "annotations": {"bold": true, "italic": true}}
            ])
        );
    }

    #[test]
    fn test_link() {
        assert_eq!(
            render_json("[title text](http://website.com)"),
            json!([{
                "type": "paragraph",
                "paragraph": {
                    "rich_text": [{
                        "text": {"content": "title text", "link": {"url": "http://website.com"}}
                    }]
                }
            }])
        );
    }

    #[test]
    fn test_autolink() {
        let rich_text = render_json("<https://a.io>")[0]["paragraph"]["rich_text"].clone();
        assert_eq!(
            rich_text,
            json!([{"text": {"content": "https://a.io", "link": {"url": "https://a.io"}}}])
        );
    }

    #[test]
    fn test_heading_and_blank_lines() {
        let result = render("# h1 text\nfirst line\n\n\nmore text");
        assert_eq!(
            result
                .blocks
                .iter()
                .map(|b| b.block_type().as_str())
                .collect::<Vec<_>>(),
            vec!["heading_1", "paragraph", "paragraph", "paragraph"]
        );
        let contents: Vec<&str> = result
            .blocks
            .iter()
            .map(|b| b.rich_text().unwrap()[0].content())
            .collect();
        assert_eq!(contents, vec!["h1 text", "first line", "", "more text"]);
    }

    #[test]
    fn test_heading_levels() {
        assert_eq!(types("## two\n### three"), vec!["heading_2", "heading_3"]);
        assert_eq!(types("Setext\n======"), vec!["heading_1"]);
    }

    #[test]
    fn test_heading_too_deep() {
        let err = BlockRenderer::new()
            .render_markdown("#### too deep")
            .unwrap_err();
        assert!(
            matches!(err, RenderError::UnsupportedNodeKind(_)),
            "got {err:?}"
        );
    }

    #[test]
    fn test_divider() {
        assert_eq!(render_json("---"), json!([{"type": "divider", "divider": {}}]));
    }

    #[test]
    fn test_simple_quote() {
        assert_eq!(
            render_json("> first line"),
            json!([{
                "type": "quote",
                "quote": {"rich_text": [{"text": {"content": "first line"}}]}
            }])
        );
    }

    #[test]
    fn test_nested_quote() {
        assert_eq!(
            render_json("> first line\n>\n>> inner quote\n"),
            json!([{
                "type": "quote",
                "quote": {
                    "rich_text": [
                        {"text": {"content": "first line"}},
                        {"text": {"content": ""}}
                    ],
                    "children": [{
                        "type": "quote",
                        "quote": {"rich_text": [{"text": {"content": "inner quote"}}]}
                    }]
                }
            }])
        );
    }

    #[test]
    fn test_quote_keeps_list_as_children() {
        let result = render("> intro\n> - a\n> - b");
        let Block::Quote(quote) = &result.blocks[0] else {
            panic!("expected quote, got {:?}", result.blocks);
        };
        assert_eq!(quote.rich_text, vec![RichText::plain("intro")]);
        assert_eq!(quote.children.len(), 2);
        assert_eq!(quote.children[0].block_type(), BlockType::BulletedListItem);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_colors() {
        assert_eq!(
            render_json("color <span style='color:blue'>blue text</span>,"),
            json!([{
                "type": "paragraph",
                "paragraph": {
                    "rich_text": [
                        {"text": {"content": "color "}},
                        {"text": {"content": "blue text"}, "annotations": {"color": "blue"}},
                        {"text": {"content": ","}}
                    ]
                }
            }])
        );
    }

    #[test]
    fn test_nested_colors() {
        let markdown = "color <span style='color:yellow'>nested \
                        <span style='background-color:green'>text</span> example</span>.";
        assert_eq!(
            render_json(markdown)[0]["paragraph"]["rich_text"],
            json!([
                {"text": {"content": "color "}},
                {"text": {"content": "nested "}, "annotations": {"color": "yellow"}},
                {"text": {"content": "text"}, "annotations": {"color": "green_background"}},
                {"text": {"content": " example"}, "annotations": {"color": "yellow"}},
                {"text": {"content": "."}}
            ])
        );
    }

    #[test]
    fn test_unsupported_color_uses_blue() {
        let rich_text =
            render_json("Unsupported color will <span style='color:aqua'>use blue</span>.")[0]
                ["paragraph"]["rich_text"]
                .clone();
        assert_eq!(
            rich_text[1],
            json!({"text": {"content": "use blue"}, "annotations": {"color": "blue"}})
        );
    }

    #[test]
    fn test_colors_only_apply_to_paragraphs() {
        let rich_text =
            render_json("## <span style='color:red'>head</span>")[0]["heading_2"]["rich_text"]
                .clone();
        assert_eq!(rich_text.as_array().unwrap().len(), 3);
        assert_eq!(rich_text[1], json!({"text": {"content": "head"}}));
    }

    #[test]
    fn test_callout_directive() {
        assert_eq!(
            render_json("!!callout emoji='X'\ntext abcde\n"),
            json!([{
                "type": "callout",
                "callout": {
                    "rich_text": [{"text": {"content": "text abcde"}}],
                    "icon": {"emoji": "'X'"}
                }
            }])
        );
    }

    #[test]
    fn test_todo_and_toggle_directives() {
        assert_eq!(
            render_json("!!todo checked=yes color=red\nbuy milk")[0],
            json!({
                "type": "to_do",
                "to_do": {
                    "rich_text": [{"text": {"content": "buy milk"}}],
                    "checked": true,
                    "color": "red"
                }
            })
        );
        assert_eq!(types("!!toggle\nmore"), vec!["toggle"]);
    }

    #[test]
    fn test_unknown_directive_stays_paragraph() {
        let result = render("!!banner\ntext");
        assert_eq!(result.blocks[0].block_type(), BlockType::Paragraph);
        assert_eq!(result.blocks[0].rich_text().unwrap().len(), 3);
    }

    #[test]
    fn test_bulleted_list() {
        assert_eq!(
            render_json("- item 1\n- item 2"),
            json!([
                {
                    "type": "bulleted_list_item",
                    "bulleted_list_item": {"rich_text": [{"text": {"content": "item 1"}}]}
                },
                {
                    "type": "bulleted_list_item",
                    "bulleted_list_item": {"rich_text": [{"text": {"content": "item 2"}}]}
                }
            ])
        );
    }

    #[test]
    fn test_numbered_list() {
        assert_eq!(
            types("1. one\n2. two\n3. three"),
            vec!["numbered_list_item"; 3]
        );
    }

    #[test]
    fn test_task_list_renders_to_do() {
        assert_eq!(
            render_json("- [x] done\n- [ ] open"),
            json!([
                {"type": "to_do", "to_do": {"rich_text": [{"text": {"content": "done"}}], "checked": true}},
                {"type": "to_do", "to_do": {"rich_text": [{"text": {"content": "open"}}], "checked": false}}
            ])
        );
    }

    #[test]
    fn test_list_item_with_sublist_is_malformed() {
        let err = BlockRenderer::new()
            .render_markdown("- a\n  - b")
            .unwrap_err();
        assert_eq!(err, RenderError::MalformedListItem { blocks: 2 });
    }

    #[test]
    fn test_empty_list_item_is_malformed() {
        let err = BlockRenderer::new().render_markdown("-\n").unwrap_err();
        assert_eq!(err, RenderError::MalformedListItem { blocks: 0 });
    }

    #[test]
    fn test_fenced_code_default_language() {
        assert_eq!(
            render_json("```\ntest 123\n```"),
            json!([{
                "type": "code",
                "code": {
                    "rich_text": [{"text": {"content": "test 123\n"}}],
                    "language": "plain text"
                }
            }])
        );
    }

    #[test]
    fn test_indented_code_after_blank_line() {
        assert_eq!(
            render_json("\n    test 123\n"),
            json!([
                {"type": "paragraph", "paragraph": {"rich_text": [{"text": {"content": ""}}]}},
                {
                    "type": "code",
                    "code": {
                        "rich_text": [{"text": {"content": "test 123\n"}}],
                        "language": "plain text"
                    }
                }
            ])
        );
    }

    #[test]
    fn test_code_language_matching() {
        let language = |markdown: &str| render_json(markdown)[0]["code"]["language"].clone();
        assert_eq!(language("```Python\nx = 1\n```"), json!("python"));
        assert_eq!(language("```js\nlet x;\n```"), json!("javascript"));
        assert_eq!(language("```klingon\nqapla\n```"), json!("plain text"));
    }

    #[test]
    fn test_html_block_is_html_code() {
        let value = render_json("<div>\nhi\n</div>\n");
        assert_eq!(value[0]["code"]["language"], json!("html"));
        assert_eq!(
            value[0]["code"]["rich_text"][0]["text"]["content"],
            json!("<div>\nhi\n</div>\n")
        );
    }

    #[test]
    fn test_link_reference_renders_empty_paragraph() {
        let result = render("[foo]: http://x.com\n\nsee [foo]");
        let empty = Block::paragraph(vec![RichText::plain("")]);
        assert_eq!(result.blocks.len(), 3);
        assert_eq!(result.blocks[0], empty);
        assert_eq!(result.blocks[1], empty);
        assert_eq!(
            result.blocks[2].rich_text().unwrap()[1].url(),
            Some("http://x.com")
        );
    }

    #[test]
    fn test_image_only_paragraph() {
        assert_eq!(
            render_json("![alt](http://x.com/a.png)"),
            json!([{"type": "image", "image": {"type": "external", "external": "http://x.com/a.png"}}])
        );
        assert_eq!(types("![a](1.png) ![b](2.png)"), vec!["image", "image"]);
    }

    #[test]
    fn test_image_in_text_is_dropped_with_warning() {
        let result = render("look ![a](1.png) here");
        assert_eq!(result.blocks.len(), 1);
        assert_eq!(result.blocks[0].rich_text().unwrap().len(), 2);
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("paragraph"));
        assert!(result.warnings[0].contains("image"));
    }

    #[test]
    fn test_quote_in_list_item_drops_children() {
        let result = render("- > a\n  >\n  >> b");
        assert_eq!(result.blocks.len(), 1);
        assert_eq!(
            result.blocks[0].block_type(),
            BlockType::BulletedListItem
        );
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("quote"));
    }

    #[test]
    fn test_block_only_list_items_warn() {
        for (markdown, dropped) in [("- ![a](1.png)", "image"), ("- ***", "divider")] {
            let result = render(markdown);
            assert_eq!(
                serde_json::to_value(&result.blocks).unwrap(),
                json!([{"type": "bulleted_list_item", "bulleted_list_item": {"rich_text": []}}]),
                "{markdown}"
            );
            assert_eq!(
                result.warnings,
                vec![format!(
                    "bulleted_list_item cannot hold nested blocks, dropped [{dropped}]"
                )]
            );
        }
    }

    #[test]
    fn test_blank_lines_after_list_render_empty_paragraph() {
        assert_eq!(
            types("- a\n- b\n\n\ntext"),
            vec![
                "bulleted_list_item",
                "bulleted_list_item",
                "paragraph",
                "paragraph"
            ]
        );
        assert_eq!(
            render_json("- a\n\n\ntext")[1],
            json!({"type": "paragraph", "paragraph": {"rich_text": [{"text": {"content": ""}}]}})
        );
    }

    #[test]
    fn test_table() {
        assert_eq!(
            render_json("| A | B |\n|---|---|\n| 1 | **2** |"),
            json!([{
                "type": "table",
                "table": {
                    "table_width": 2,
                    "has_column_header": true,
                    "has_row_header": true,
                    "children": [
                        {"type": "table_row", "table_row": {"cells": [
                            [{"text": {"content": "A"}}],
                            [{"text": {"content": "B"}}]
                        ]}},
                        {"type": "table_row", "table_row": {"cells": [
                            [{"text": {"content": "1"}}],
                            [{"text": {"content": "2"}, "annotations": {"bold": true}}]
                        ]}}
                    ]
                }
            }])
        );
    }

    #[test]
    fn test_output_is_flat() {
        let result = render("# t\n> q\n\n- a\n- b\n---\n1. x\n2. y\n***\ntext");
        assert_eq!(
            result
                .blocks
                .iter()
                .map(|b| b.block_type().as_str())
                .collect::<Vec<_>>(),
            vec![
                "heading_1",
                "quote",
                "paragraph",
                "bulleted_list_item",
                "bulleted_list_item",
                "divider",
                "numbered_list_item",
                "numbered_list_item",
                "divider",
                "paragraph",
            ]
        );
    }

    #[test]
    fn test_deterministic() {
        let markdown = "# a\n\n> b\n>> c\n\n- d\n\n<span style='color:red'>e</span> f";
        assert_eq!(render(markdown), render(markdown));
    }

    #[test]
    fn test_render_nodes_from_custom_tree() {
        let nodes = vec![
            Node::Heading {
                level: 2,
                children: vec![Inline::Text("x".to_owned())],
            },
            Node::ThematicBreak,
        ];
        let result = BlockRenderer::new().render_nodes(&nodes).unwrap();
        assert_eq!(
            result.blocks,
            vec![
                Block::Heading2(TextBlock {
                    rich_text: vec![RichText::plain("x")]
                }),
                Block::Divider,
            ]
        );
    }
}
