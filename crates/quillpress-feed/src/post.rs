//! Post discovery and parsing.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use walkdir::WalkDir;

use crate::frontmatter::{extract_frontmatter, FrontmatterError};

/// A blog post ready to become a feed item.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    /// Post title
    pub title: String,

    /// Summary for the feed item description
    pub description: Option<String>,

    /// Publication date
    pub date: DateTime<Utc>,

    /// Link segment, from frontmatter or the file stem
    pub slug: String,

    /// Post body rendered to HTML
    pub body_html: String,
}

impl Post {
    /// Description for the feed item: the frontmatter summary if present,
    /// otherwise the rendered body.
    pub fn summary(&self) -> &str {
        self.description.as_deref().unwrap_or(&self.body_html)
    }
}

/// Errors that can occur while discovering posts.
#[derive(Debug, thiserror::Error)]
pub enum PostError {
    #[error("Posts directory not found: {}", .0.display())]
    DirNotFound(PathBuf),

    #[error("Failed to read {path}: {message}")]
    ReadError { path: String, message: String },

    #[error("{path}: no frontmatter block")]
    MissingFrontmatter { path: String },

    #[error("{path}: {source}")]
    Frontmatter {
        path: String,
        source: FrontmatterError,
    },

    #[error("{path}: unrecognized date '{date}' (expected RFC 3339 or YYYY-MM-DD)")]
    InvalidDate { path: String, date: String },
}

/// Discover all posts under a directory.
///
/// Walks the directory recursively for `.md` and `.mdx` files, parses each
/// one, and returns the posts sorted newest-first. Drafts are skipped. Any
/// unparseable post fails the whole scan; there are no partial results.
pub fn scan_posts(dir: &Path) -> Result<Vec<Post>, PostError> {
    if !dir.is_dir() {
        return Err(PostError::DirNotFound(dir.to_path_buf()));
    }

    let mut posts = Vec::new();

    for entry in WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if ext != "md" && ext != "mdx" {
            continue;
        }

        let content = fs::read_to_string(path).map_err(|e| PostError::ReadError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        if let Some(post) = parse_post(path, &content)? {
            posts.push(post);
        }
    }

    // Newest first; slug as tiebreaker so repeated scans order identically
    posts.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.slug.cmp(&b.slug)));

    tracing::debug!("Discovered {} posts in {}", posts.len(), dir.display());

    Ok(posts)
}

/// Parse a single post. Returns `None` for drafts.
fn parse_post(path: &Path, content: &str) -> Result<Option<Post>, PostError> {
    let (frontmatter, body) =
        extract_frontmatter(content).map_err(|e| PostError::Frontmatter {
            path: path.display().to_string(),
            source: e,
        })?;

    let Some(fm) = frontmatter else {
        return Err(PostError::MissingFrontmatter {
            path: path.display().to_string(),
        });
    };

    if fm.draft {
        return Ok(None);
    }

    let date = parse_date(&fm.date).ok_or_else(|| PostError::InvalidDate {
        path: path.display().to_string(),
        date: fm.date.clone(),
    })?;

    let slug = fm.slug.unwrap_or_else(|| {
        let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("post");
        slugify(stem)
    });

    Ok(Some(Post {
        title: fm.title,
        description: fm.description,
        date,
        slug,
        body_html: render_markdown(body),
    }))
}

/// Parse a frontmatter date: full RFC 3339, or a bare calendar date at
/// midnight UTC.
fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()?;
    Some(Utc.from_utc_datetime(&date.and_hms_opt(0, 0, 0)?))
}

/// Render post markdown to HTML.
fn render_markdown(content: &str) -> String {
    use pulldown_cmark::{html, Options, Parser};

    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
    let parser = Parser::new_ext(content, options);

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);

    html_output
}

/// Convert a file stem to a URL-safe slug.
fn slugify(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c
            } else if c.is_whitespace() || c == '-' || c == '_' {
                '-'
            } else {
                '\0'
            }
        })
        .filter(|c| *c != '\0')
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}
