//! Paragraph directives.
//!
//! A paragraph whose first line is `!!name key=value ...` followed by a line
//! break is retyped into a callout, to-do, or toggle block:
//!
//! ```text
//! !!callout emoji=💡 color=gray_background
//! Remember to run the migrations first.
//! ```
//!
//! Arguments are split on whitespace and on the first `=`; values are kept
//! verbatim, quotes included.

use std::collections::HashMap;

use crate::block::{Block, CalloutBlock, Icon, RichText, ToDoBlock, ToggleBlock};

/// Prefix marking a directive line.
pub const SIGIL: &str = "!!";

/// Block variants a directive can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveKind {
    Callout,
    ToDo,
    Toggle,
}

impl DirectiveKind {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "callout" => Some(Self::Callout),
            "todo" | "to_do" => Some(Self::ToDo),
            "toggle" => Some(Self::Toggle),
            _ => None,
        }
    }
}

/// Parsed directive line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Directive {
    pub kind: DirectiveKind,
    pub args: HashMap<String, String>,
}

impl Directive {
    /// Parse a directive line, sigil included.
    ///
    /// Returns `None` when the sigil is missing or the name is unknown.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let mut words = line.strip_prefix(SIGIL)?.split_whitespace();
        let kind = DirectiveKind::from_name(words.next()?)?;
        let args = words
            .filter_map(|word| word.split_once('='))
            .map(|(key, value)| (key.trim().to_owned(), value.trim().to_owned()))
            .collect();
        Some(Self { kind, args })
    }

    /// Detect a directive at the head of a paragraph's spans.
    ///
    /// The first span must carry the directive line and the second must be
    /// exactly a line break.
    #[must_use]
    pub fn detect(spans: &[RichText]) -> Option<Self> {
        match spans {
            [first, second, ..] if second.content() == "\n" => Self::parse(first.content()),
            _ => None,
        }
    }

    /// Non-empty argument value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.args
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Build the retyped block around the remaining spans.
    #[must_use]
    pub fn into_block(self, rich_text: Vec<RichText>) -> Block {
        let color = self.get("color").map(str::to_owned);
        let icon = self.get("emoji").map(|emoji| Icon {
            emoji: emoji.to_owned(),
        });
        match self.kind {
            DirectiveKind::Callout => Block::Callout(CalloutBlock {
                rich_text,
                icon,
                color,
            }),
            DirectiveKind::ToDo => Block::ToDo(ToDoBlock {
                rich_text,
                checked: self.get("checked").is_some_and(is_truthy),
                icon,
                color,
            }),
            DirectiveKind::Toggle => Block::Toggle(ToggleBlock {
                rich_text,
                icon,
                color,
            }),
        }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "true" | "yes" | "x" | "1"
    )
}
