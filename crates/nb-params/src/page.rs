//! Page create, update, and append payloads.

use nb_renderer::{Block, BlockRenderer, Icon, LineText};
use serde::Serialize;

use crate::error::ParamsError;

/// Parent reference of a page or database.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Parent {
    PageId { page_id: String },
    DatabaseId { database_id: String },
}

impl Parent {
    #[must_use]
    pub fn page(page_id: impl Into<String>) -> Self {
        Self::PageId {
            page_id: page_id.into(),
        }
    }

    #[must_use]
    pub fn database(database_id: impl Into<String>) -> Self {
        Self::DatabaseId {
            database_id: database_id.into(),
        }
    }
}

/// Page properties. Pages under a page parent only carry a title.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageProperties {
    pub title: LineText,
}

/// Payload for creating a page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreatePage {
    pub parent: Parent,
    pub properties: PageProperties,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Block>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    /// Render diagnostics for the page content.
    #[serde(skip)]
    pub warnings: Vec<String>,
}

/// Payload for updating a page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UpdatePage {
    pub properties: PageProperties,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<Icon>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
}

/// Payload for appending block children.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppendChildren {
    pub children: Vec<Block>,
    #[serde(skip)]
    pub warnings: Vec<String>,
}

/// Options for [`ParamsBuilder::create_page`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PageOptions<'a> {
    /// Markdown page content.
    pub text: Option<&'a str>,
    pub emoji: Option<&'a str>,
}

pub(crate) fn icon(emoji: Option<&str>) -> Option<Icon> {
    emoji.filter(|emoji| !emoji.is_empty()).map(|emoji| Icon {
        emoji: emoji.to_owned(),
    })
}

/// Builds request payloads, rendering markdown with the configured renderer.
#[derive(Debug, Clone, Copy, Default)]
pub struct ParamsBuilder {
    renderer: BlockRenderer,
}

impl ParamsBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a specific renderer (e.g. with GFM disabled).
    #[must_use]
    pub fn with_renderer(mut self, renderer: BlockRenderer) -> Self {
        self.renderer = renderer;
        self
    }

    /// Title rich text from single-line markdown.
    pub fn title(&self, title: &str) -> Result<LineText, ParamsError> {
        Ok(self.renderer.render_line(title)?)
    }

    /// Payload for a new page under `parent_page_id`.
    ///
    /// Empty `text` or `emoji` values are treated as absent.
    pub fn create_page(
        &self,
        parent_page_id: &str,
        title: &str,
        options: PageOptions<'_>,
    ) -> Result<CreatePage, ParamsError> {
        let (children, warnings) = match options.text.filter(|text| !text.is_empty()) {
            Some(text) => {
                let result = self.renderer.render_markdown(text)?;
                (Some(result.blocks), result.warnings)
            }
            None => (None, Vec::new()),
        };
        tracing::debug!(
            parent = parent_page_id,
            blocks = children.as_ref().map_or(0, Vec::len),
            "Built create page payload"
        );
        Ok(CreatePage {
            parent: Parent::page(parent_page_id),
            properties: PageProperties {
                title: self.title(title)?,
            },
            children,
            icon: icon(options.emoji),
            warnings,
        })
    }

    /// Payload for renaming a page, optionally changing its icon or archive flag.
    pub fn update_page(
        &self,
        title: &str,
        emoji: Option<&str>,
        archived: Option<bool>,
    ) -> Result<UpdatePage, ParamsError> {
        Ok(UpdatePage {
            properties: PageProperties {
                title: self.title(title)?,
            },
            icon: icon(emoji),
            archived,
        })
    }

    /// Payload for appending markdown content to a block.
    pub fn append_markdown(&self, text: &str) -> Result<AppendChildren, ParamsError> {
        let result = self.renderer.render_markdown(text)?;
        Ok(AppendChildren {
            children: result.blocks,
            warnings: result.warnings,
        })
    }
}
