//! HTTP server exposing the RSS feed for a markdown blog.
//!
//! Serves the feed at a fixed path, rebuilding it from the posts directory
//! on every request.

pub mod server;

pub use server::{FeedServer, FeedServerConfig, ServerError};
