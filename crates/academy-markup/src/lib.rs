//! Inline markup and heading extraction for Academy documents.
//!
//! This crate provides the text-level half of the documentation core:
//! - [`parse`]: turns the restricted inline dialect (`**bold**`,
//!   `[label](href)`, `%caption%`) into typed [`InlineNode`]s
//! - [`render_inline`]: renders nodes through a pluggable [`InlineBackend`]
//! - [`extract_headings`] / [`HeadingExtractor`]: builds table-of-contents
//!   entries with slugs matching the in-page anchor ids
//! - [`parse_task_item`]: recognises `[ ]` / `[x]` task lines
//!
//! # Example
//!
//! ```
//! use academy_markup::{InlineNode, parse};
//!
//! let nodes = parse("a**b**c");
//! assert_eq!(
//!     nodes,
//!     vec![
//!         InlineNode::text("a"),
//!         InlineNode::bold("b"),
//!         InlineNode::text("c"),
//!     ]
//! );
//! ```

mod backend;
mod headings;
mod html;
mod inline;
mod placeholders;
mod slug;
mod task;

pub use backend::{InlineBackend, render_inline, render_task_item};
pub use headings::{Heading, HeadingExtractor, extract_headings};
pub use html::{HtmlBackend, escape_html};
pub use inline::{InlineNode, parse};
pub use placeholders::Placeholders;
pub use slug::{capitalize, sanitize_slug, slugify};
pub use task::{TaskItem, parse_task_item};
