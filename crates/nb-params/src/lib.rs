//! Request parameter builders for block-based page APIs.
//!
//! Builds the JSON payloads for page creation and updates, appending
//! markdown content, table blocks from tabular data, and database
//! creation. Markdown is rendered with [`nb_renderer::BlockRenderer`].
//!
//! # Example
//!
//! ```
//! use nb_params::{PageOptions, ParamsBuilder};
//!
//! let params = ParamsBuilder::new()
//!     .create_page(
//!         "7458781ba20644e0b85045209554ff3d",
//!         "Release notes",
//!         PageOptions {
//!             text: Some("# 1.0\n\n- first release"),
//!             emoji: Some("🚀"),
//!         },
//!     )
//!     .unwrap();
//! let body = serde_json::to_string(&params).unwrap();
//! assert!(body.contains("heading_1"));
//! ```

mod child;
mod database;
mod error;
mod page;
mod table;

pub use child::find_child;
pub use database::{CreateDatabase, CreateDatabaseRow, Properties, RICH_TEXT, TITLE};
pub use error::ParamsError;
pub use page::{AppendChildren, CreatePage, PageOptions, PageProperties, ParamsBuilder, Parent, UpdatePage};
pub use table::{TableData, prefix_columns, table_block, table_rows};
