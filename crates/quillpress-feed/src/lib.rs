//! Markdown post discovery and RSS feed construction.
//!
//! This crate reads a directory of markdown blog posts, extracts their YAML
//! frontmatter, and assembles an RSS 2.0 channel ready to be served or
//! written to disk.

pub mod channel;
pub mod frontmatter;
pub mod post;

pub use channel::{build_feed, FeedError, FeedMeta};
pub use frontmatter::Frontmatter;
pub use post::{scan_posts, Post, PostError};
