//! Block data model.
//!
//! Every type here serializes to the target content API's block schema:
//! a block is `{"type": "<name>", "<name>": {...}}` and a rich text span is
//! `{"text": {"content": ..., "link": {"url": ...}}, "annotations": {...}}`
//! with only the annotations that are actually set.

use std::collections::BTreeMap;
use std::fmt;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

/// Block type names accepted by the target schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockType {
    Paragraph,
    Heading1,
    Heading2,
    Heading3,
    Quote,
    BulletedListItem,
    NumberedListItem,
    Code,
    Divider,
    Image,
    Callout,
    ToDo,
    Toggle,
    Table,
}

impl BlockType {
    /// Schema name of the block type.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Paragraph => "paragraph",
            Self::Heading1 => "heading_1",
            Self::Heading2 => "heading_2",
            Self::Heading3 => "heading_3",
            Self::Quote => "quote",
            Self::BulletedListItem => "bulleted_list_item",
            Self::NumberedListItem => "numbered_list_item",
            Self::Code => "code",
            Self::Divider => "divider",
            Self::Image => "image",
            Self::Callout => "callout",
            Self::ToDo => "to_do",
            Self::Toggle => "toggle",
            Self::Table => "table",
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inline color names.
///
/// Nine foreground colors and their nine `_background` counterparts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    Gray,
    Brown,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    Pink,
    Red,
    GrayBackground,
    BrownBackground,
    OrangeBackground,
    YellowBackground,
    GreenBackground,
    BlueBackground,
    PurpleBackground,
    PinkBackground,
    RedBackground,
}

impl Color {
    /// Look up a foreground color by name, optionally as its background variant.
    #[must_use]
    pub fn from_name(name: &str, background: bool) -> Option<Self> {
        let (fg, bg) = match name {
            "gray" => (Self::Gray, Self::GrayBackground),
            "brown" => (Self::Brown, Self::BrownBackground),
            "orange" => (Self::Orange, Self::OrangeBackground),
            "yellow" => (Self::Yellow, Self::YellowBackground),
            "green" => (Self::Green, Self::GreenBackground),
            "blue" => (Self::Blue, Self::BlueBackground),
            "purple" => (Self::Purple, Self::PurpleBackground),
            "pink" => (Self::Pink, Self::PinkBackground),
            "red" => (Self::Red, Self::RedBackground),
            _ => return None,
        };
        Some(if background { bg } else { fg })
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Style annotations of a rich text span.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Annotations {
    #[serde(skip_serializing_if = "is_false")]
    pub bold: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub italic: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub strikethrough: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub underline: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub code: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl Annotations {
    /// True when no flag and no color is set.
    #[must_use]
    pub fn is_plain(&self) -> bool {
        *self == Self::default()
    }
}

/// Hyperlink target of a span.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub url: String,
}

/// Text payload of a span.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TextContent {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,
}

/// One inline run of text with optional annotations and link.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RichText {
    pub text: TextContent,
    #[serde(skip_serializing_if = "Annotations::is_plain")]
    pub annotations: Annotations,
}

impl RichText {
    /// Span with content only.
    #[must_use]
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            text: TextContent {
                content: content.into(),
                link: None,
            },
            annotations: Annotations::default(),
        }
    }

    /// Span with the given annotations and optional link.
    #[must_use]
    pub fn styled(content: impl Into<String>, annotations: Annotations, url: Option<&str>) -> Self {
        Self {
            text: TextContent {
                content: content.into(),
                link: url.map(|url| Link {
                    url: url.to_owned(),
                }),
            },
            annotations,
        }
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.text.content
    }

    #[must_use]
    pub fn url(&self) -> Option<&str> {
        self.text.link.as_ref().map(|link| link.url.as_str())
    }
}

/// Body shared by the text-only variants.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TextBlock {
    pub rich_text: Vec<RichText>,
}

/// Quote body; the only variant carrying nested child blocks.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QuoteBlock {
    pub rich_text: Vec<RichText>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Block>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeBlock {
    pub rich_text: Vec<RichText>,
    pub language: String,
}

/// External image reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageBlock {
    #[serde(rename = "type")]
    pub source: &'static str,
    pub external: String,
}

impl ImageBlock {
    #[must_use]
    pub fn external(url: impl Into<String>) -> Self {
        Self {
            source: "external",
            external: url.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Icon {
    pub emoji: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CalloutBlock {
    pub rich_text: Vec<RichText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ToDoBlock {
    pub rich_text: Vec<RichText>,
    pub checked: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ToggleBlock {
    pub rich_text: Vec<RichText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// One table row: a list of cells, each a rich text sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableRow {
    pub cells: Vec<Vec<RichText>>,
}

impl Serialize for TableRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        struct Body<'a> {
            cells: &'a [Vec<RichText>],
        }

        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("type", "table_row")?;
        map.serialize_entry("table_row", &Body { cells: &self.cells })?;
        map.end()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TableBlock {
    pub table_width: usize,
    pub has_column_header: bool,
    pub has_row_header: bool,
    pub children: Vec<TableRow>,
}

/// A schema-conformant content block.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Paragraph(TextBlock),
    Heading1(TextBlock),
    Heading2(TextBlock),
    Heading3(TextBlock),
    Quote(QuoteBlock),
    BulletedListItem(TextBlock),
    NumberedListItem(TextBlock),
    Code(CodeBlock),
    Divider,
    Image(ImageBlock),
    Callout(CalloutBlock),
    ToDo(ToDoBlock),
    Toggle(ToggleBlock),
    Table(TableBlock),
}

impl Block {
    /// Paragraph holding the given spans.
    #[must_use]
    pub fn paragraph(rich_text: Vec<RichText>) -> Self {
        Self::Paragraph(TextBlock { rich_text })
    }

    #[must_use]
    pub fn block_type(&self) -> BlockType {
        match self {
            Self::Paragraph(_) => BlockType::Paragraph,
            Self::Heading1(_) => BlockType::Heading1,
            Self::Heading2(_) => BlockType::Heading2,
            Self::Heading3(_) => BlockType::Heading3,
            Self::Quote(_) => BlockType::Quote,
            Self::BulletedListItem(_) => BlockType::BulletedListItem,
            Self::NumberedListItem(_) => BlockType::NumberedListItem,
            Self::Code(_) => BlockType::Code,
            Self::Divider => BlockType::Divider,
            Self::Image(_) => BlockType::Image,
            Self::Callout(_) => BlockType::Callout,
            Self::ToDo(_) => BlockType::ToDo,
            Self::Toggle(_) => BlockType::Toggle,
            Self::Table(_) => BlockType::Table,
        }
    }

    /// Rich text of the block, `None` for variants without text.
    #[must_use]
    pub fn rich_text(&self) -> Option<&[RichText]> {
        match self {
            Self::Paragraph(b)
            | Self::Heading1(b)
            | Self::Heading2(b)
            | Self::Heading3(b)
            | Self::BulletedListItem(b)
            | Self::NumberedListItem(b) => Some(&b.rich_text),
            Self::Quote(b) => Some(&b.rich_text),
            Self::Code(b) => Some(&b.rich_text),
            Self::Callout(b) => Some(&b.rich_text),
            Self::ToDo(b) => Some(&b.rich_text),
            Self::Toggle(b) => Some(&b.rich_text),
            Self::Divider | Self::Image(_) | Self::Table(_) => None,
        }
    }

    /// Consume the block, keeping only its rich text.
    #[must_use]
    pub fn into_rich_text(self) -> Vec<RichText> {
        match self {
            Self::Paragraph(b)
            | Self::Heading1(b)
            | Self::Heading2(b)
            | Self::Heading3(b)
            | Self::BulletedListItem(b)
            | Self::NumberedListItem(b) => b.rich_text,
            Self::Quote(b) => b.rich_text,
            Self::Code(b) => b.rich_text,
            Self::Callout(b) => b.rich_text,
            Self::ToDo(b) => b.rich_text,
            Self::Toggle(b) => b.rich_text,
            Self::Divider | Self::Image(_) | Self::Table(_) => Vec::new(),
        }
    }
}

impl Serialize for Block {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let name = self.block_type().as_str();
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("type", name)?;
        match self {
            Self::Paragraph(b)
            | Self::Heading1(b)
            | Self::Heading2(b)
            | Self::Heading3(b)
            | Self::BulletedListItem(b)
            | Self::NumberedListItem(b) => map.serialize_entry(name, b)?,
            Self::Quote(b) => map.serialize_entry(name, b)?,
            Self::Code(b) => map.serialize_entry(name, b)?,
            Self::Divider => map.serialize_entry(name, &BTreeMap::<&str, ()>::new())?,
            Self::Image(b) => map.serialize_entry(name, b)?,
            Self::Callout(b) => map.serialize_entry(name, b)?,
            Self::ToDo(b) => map.serialize_entry(name, b)?,
            Self::Toggle(b) => map.serialize_entry(name, b)?,
            Self::Table(b) => map.serialize_entry(name, b)?,
        }
        map.end()
    }
}
