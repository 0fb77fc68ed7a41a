//! Closed markdown syntax tree consumed by the block renderer.

/// Block-level syntax node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// ATX or setext heading, level 1-6.
    Heading { level: u8, children: Vec<Inline> },
    Paragraph(Vec<Inline>),
    Quote(Vec<Node>),
    List { ordered: bool, items: Vec<ListItem> },
    CodeBlock(CodeBlock),
    HtmlBlock(String),
    ThematicBreak,
    /// One or more consecutive blank lines.
    BlankLine,
    /// Link reference definition (`[label]: dest`).
    LinkReference { label: String, dest: String },
    Table(Table),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListItem {
    /// Task marker state, `None` for regular items.
    pub checked: Option<bool>,
    pub children: Vec<Node>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeKind {
    Fenced,
    Indented,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeBlock {
    pub kind: CodeKind,
    /// Fence info string, without the fence.
    pub info: Option<String>,
    pub literal: String,
}

impl CodeBlock {
    /// First word of the info string.
    #[must_use]
    pub fn language(&self) -> Option<&str> {
        self.info.as_deref().and_then(|info| info.split_whitespace().next())
    }
}

/// Cell content of a table.
pub type TableCell = Vec<Inline>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub header: Vec<TableCell>,
    pub rows: Vec<Vec<TableCell>>,
}

/// Inline syntax node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Emphasis(Vec<Inline>),
    Strong(Vec<Inline>),
    Strikethrough(Vec<Inline>),
    Code(String),
    Html(String),
    Link { dest: String, children: Vec<Inline> },
    AutoLink { dest: String },
    Image { dest: String, alt: Vec<Inline> },
    LineBreak,
}
