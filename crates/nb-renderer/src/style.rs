//! Inline color markers.
//!
//! Colors are written as raw inline HTML around text:
//! `<span style='color:red'>text</span>` or
//! `<span style="background-color: green">text</span>`. The markers arrive as
//! code-flagged spans. Only a `span` tag with a `style` attribute whose first
//! declaration is `color` or `background-color` is recognized.

use crate::block::{Color, RichText};

/// Decoded style marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleMarker {
    /// Opening `<span style=...>` with its color.
    Open(Color),
    /// Closing `</span>`.
    Close,
}

/// Decode an inline HTML fragment into a style marker.
///
/// Returns `None` for any fragment that is not a recognized marker.
/// An unrecognized color name falls back to blue.
#[must_use]
pub fn decode_style(code: &str) -> Option<StyleMarker> {
    let code = code.to_lowercase();
    let tag = code.trim().trim_matches(|c: char| c == '<' || c == '>').trim();
    if tag == "/span" {
        return Some(StyleMarker::Close);
    }
    let attrs = tag.strip_prefix("span")?;
    if !attrs.starts_with(char::is_whitespace) {
        return None;
    }

    let style = attribute(attrs, "style")?;
    let declaration = style.split(';').next()?;
    let (property, name) = declaration.split_once(':')?;
    let background = match property.trim() {
        "color" => false,
        "background-color" => true,
        _ => return None,
    };
    let color = Color::from_name(name.trim(), background)
        .unwrap_or(if background { Color::BlueBackground } else { Color::Blue });
    Some(StyleMarker::Open(color))
}

#[derive(Debug, PartialEq, Eq)]
enum Token<'a> {
    Word(&'a str),
    Equals,
}

/// Split attribute text into words, quoted values, and `=` signs.
fn tokenize(input: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut rest = input.trim_start();
    while let Some(c) = rest.chars().next() {
        if c == '=' {
            tokens.push(Token::Equals);
            rest = &rest[1..];
        } else if c == '"' || c == '\'' {
            let body = &rest[1..];
            let end = body.find(c).unwrap_or(body.len());
            tokens.push(Token::Word(&body[..end]));
            rest = body.get(end + 1..).unwrap_or("");
        } else {
            let end = rest
                .find(|ch: char| ch.is_whitespace() || ch == '=')
                .unwrap_or(rest.len());
            tokens.push(Token::Word(&rest[..end]));
            rest = &rest[end..];
        }
        rest = rest.trim_start();
    }
    tokens
}

/// Value of `name=value`, tolerating whitespace around `=`.
fn attribute<'a>(attrs: &'a str, name: &str) -> Option<&'a str> {
    let tokens = tokenize(attrs);
    tokens.windows(3).find_map(|window| match window {
        [Token::Word(key), Token::Equals, Token::Word(value)] if *key == name => Some(*value),
        _ => None,
    })
}

/// Per-call stack of open colors. The most recently opened color wins.
#[derive(Debug, Default)]
pub struct ColorStack(Vec<Color>);

impl ColorStack {
    pub fn push(&mut self, color: Color) {
        self.0.push(color);
    }

    pub fn pop(&mut self) -> Option<Color> {
        self.0.pop()
    }

    #[must_use]
    pub fn top(&self) -> Option<Color> {
        self.0.last().copied()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Apply color markers to a span sequence.
///
/// Matched markers are removed; every other span is colored with the top of
/// the stack. A closing marker with nothing open passes through unchanged.
#[must_use]
pub fn apply_colors(spans: Vec<RichText>) -> Vec<RichText> {
    let mut stack = ColorStack::default();
    let mut output = Vec::with_capacity(spans.len());

    for mut span in spans {
        if span.annotations.code {
            match decode_style(span.content()) {
                Some(StyleMarker::Open(color)) => {
                    stack.push(color);
                    continue;
                }
                Some(StyleMarker::Close) if !stack.is_empty() => {
                    stack.pop();
                    continue;
                }
                _ => {}
            }
        }
        if let Some(color) = stack.top() {
            span.annotations.color = Some(color);
        }
        output.push(span);
    }

    output
}
