//! SQLite scroll layer feeding the Vigil issue search index.
//!
//! Scrolls the `issues` table (joined with `rules` and `components`) and
//! flattens each row into one [`document::IssueDoc`] for the downstream
//! search index. Memory stays bounded: rows are pulled one at a time
//! through a forward-only cursor and never materialized as a set.

pub mod connection;
pub mod document;
pub mod migrations;
pub mod query;
pub mod scroller;
pub mod security;
pub mod transform;

pub use document::IssueDoc;
pub use query::IssueQuery;
pub use scroller::{IssueCursor, IssueScroller};
