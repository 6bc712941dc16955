//! RSS 2.0 channel construction.

use rss::validation::Validate;
use rss::{ChannelBuilder, GuidBuilder, ItemBuilder};

use crate::post::Post;

/// Feed-level metadata. Built fresh for every feed; holds no state across
/// invocations.
#[derive(Debug, Clone)]
pub struct FeedMeta {
    /// Feed title
    pub title: String,

    /// Feed description
    pub description: String,

    /// Site origin used to resolve absolute item links
    pub site: String,

    /// Channel language code
    pub language: String,
}

impl FeedMeta {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        site: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            site: site.into(),
            language: "en".to_string(),
        }
    }
}

/// Errors that can occur when building a feed.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    #[error("RSS validation failed: {0}")]
    Validation(String),
}

/// Build an RSS 2.0 document from feed metadata and posts.
///
/// Serialization (escaping, element ordering, date formatting) is the `rss`
/// crate's contract; this function only assembles the channel and validates
/// it before rendering.
pub fn build_feed(meta: &FeedMeta, posts: &[Post]) -> Result<String, FeedError> {
    let items: Vec<_> = posts.iter().map(|post| post_to_item(post, meta)).collect();

    let channel = ChannelBuilder::default()
        .title(&meta.title)
        .link(&meta.site)
        .description(&meta.description)
        .language(meta.language.clone())
        .generator("quillpress".to_string())
        .items(items)
        .build();

    channel
        .validate()
        .map_err(|e| FeedError::Validation(e.to_string()))?;

    Ok(channel.to_string())
}

fn post_to_item(post: &Post, meta: &FeedMeta) -> rss::Item {
    let link = post_link(post, meta);

    ItemBuilder::default()
        .title(post.title.clone())
        .link(Some(link.clone()))
        .guid(GuidBuilder::default().permalink(true).value(link).build())
        .description(post.summary().to_string())
        .pub_date(post.date.to_rfc2822())
        .build()
}

/// Absolute link for a post: site origin plus `/posts/{slug}/`.
fn post_link(post: &Post, meta: &FeedMeta) -> String {
    let base = meta.site.trim_end_matches('/');
    format!("{}/posts/{}/", base, post.slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn make_meta() -> FeedMeta {
        FeedMeta::new(
            "DevOps Engineering Blog",
            "Notes on Docker, Kubernetes, and CI/CD.",
            "https://example.com/",
        )
    }

    fn make_post(title: &str, slug: &str) -> Post {
        Post {
            title: title.to_string(),
            description: Some(format!("About {title}")),
            date: Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap(),
            slug: slug.to_string(),
            body_html: "<p>Body</p>".to_string(),
        }
    }

    #[test]
    fn empty_feed_has_metadata_and_no_items() {
        let xml = build_feed(&make_meta(), &[]).unwrap();

        assert!(xml.contains("<title>DevOps Engineering Blog</title>"));
        assert!(xml.contains("<description>Notes on Docker, Kubernetes, and CI/CD.</description>"));
        assert!(xml.contains("<language>en</language>"));
        assert!(!xml.contains("<item>"));
    }

    #[test]
    fn one_item_per_post() {
        let posts = vec![
            make_post("First", "first"),
            make_post("Second", "second"),
            make_post("Third", "third"),
        ];

        let xml = build_feed(&make_meta(), &posts).unwrap();

        assert_eq!(xml.matches("<item>").count(), 3);
        assert!(xml.contains("<title>First</title>"));
        assert!(xml.contains("<title>Second</title>"));
        assert!(xml.contains("<title>Third</title>"));
    }

    #[test]
    fn item_links_are_absolute() {
        let posts = vec![make_post("First", "first")];

        let xml = build_feed(&make_meta(), &posts).unwrap();

        assert!(xml.contains("<link>https://example.com/posts/first/</link>"));
    }

    #[test]
    fn build_is_idempotent() {
        let posts = vec![make_post("First", "first"), make_post("Second", "second")];
        let meta = make_meta();

        let first = build_feed(&meta, &posts).unwrap();
        let second = build_feed(&meta, &posts).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn pub_date_is_rfc2822() {
        let posts = vec![make_post("First", "first")];

        let xml = build_feed(&make_meta(), &posts).unwrap();

        assert!(xml.contains("<pubDate>Wed, 1 May 2024 08:00:00 +0000</pubDate>"));
    }

    #[test]
    fn link_handles_trailing_slash() {
        let post = make_post("First", "first");

        let with_slash = FeedMeta::new("t", "d", "https://example.com/");
        let without = FeedMeta::new("t", "d", "https://example.com");

        assert_eq!(
            post_link(&post, &with_slash),
            "https://example.com/posts/first/"
        );
        assert_eq!(
            post_link(&post, &without),
            "https://example.com/posts/first/"
        );
    }
}
