//! Frontmatter extraction and parsing.

use serde::Deserialize;

/// Parsed frontmatter from a markdown post.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Frontmatter {
    /// Post title (required)
    pub title: String,

    /// Short summary used as the feed item description
    #[serde(default)]
    pub description: Option<String>,

    /// Publication date, RFC 3339 or YYYY-MM-DD
    #[serde(alias = "pubDate")]
    pub date: String,

    /// Custom slug override
    #[serde(default)]
    pub slug: Option<String>,

    /// Drafts are excluded from the feed
    #[serde(default)]
    pub draft: bool,
}

/// Extract frontmatter from markdown content.
///
/// Returns the parsed frontmatter and the remaining content after the
/// frontmatter block.
pub fn extract_frontmatter(source: &str) -> Result<(Option<Frontmatter>, &str), FrontmatterError> {
    let trimmed = source.trim_start();

    if !trimmed.starts_with("---") {
        return Ok((None, source));
    }

    // Find the closing ---
    let after_open = &trimmed[3..];
    let Some(close_pos) = after_open.find("\n---") else {
        return Err(FrontmatterError::Unclosed);
    };

    let yaml_content = &after_open[..close_pos].trim();
    let remaining = &after_open[close_pos + 4..];

    let frontmatter: Frontmatter = serde_yaml::from_str(yaml_content)
        .map_err(|e| FrontmatterError::InvalidYaml(e.to_string()))?;

    Ok((Some(frontmatter), remaining.trim_start()))
}

/// Errors that can occur when parsing frontmatter.
#[derive(Debug, thiserror::Error)]
pub enum FrontmatterError {
    #[error("Unclosed frontmatter block - missing closing ---")]
    Unclosed,

    #[error("Invalid YAML in frontmatter: {0}")]
    InvalidYaml(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn extracts_valid_frontmatter() {
        let source = r#"---
title: Getting Started with Docker
description: First steps with containers
date: 2024-03-01
---

# Docker Basics
"#;

        let (fm, content) = extract_frontmatter(source).unwrap();
        let fm = fm.unwrap();

        assert_eq!(fm.title, "Getting Started with Docker");
        assert_eq!(
            fm.description,
            Some("First steps with containers".to_string())
        );
        assert_eq!(fm.date, "2024-03-01");
        assert!(!fm.draft);
        assert!(content.starts_with("# Docker Basics"));
    }

    #[test]
    fn accepts_pub_date_alias() {
        let source = "---\ntitle: Post\npubDate: 2024-01-02\n---\nBody\n";

        let (fm, _) = extract_frontmatter(source).unwrap();

        assert_eq!(fm.unwrap().date, "2024-01-02");
    }

    #[test]
    fn handles_no_frontmatter() {
        let source = "# Just Markdown\n\nNo frontmatter here.";

        let (fm, content) = extract_frontmatter(source).unwrap();

        assert!(fm.is_none());
        assert_eq!(content, source);
    }

    #[test]
    fn errors_on_unclosed_frontmatter() {
        let source = "---\ntitle: Test\ndate: 2024-01-01\n# No closing";

        let result = extract_frontmatter(source);

        assert!(matches!(result, Err(FrontmatterError::Unclosed)));
    }

    #[test]
    fn errors_on_invalid_yaml() {
        let source = "---\ntitle: [invalid yaml\n---\n";

        let result = extract_frontmatter(source);

        assert!(matches!(result, Err(FrontmatterError::InvalidYaml(_))));
    }

    #[test]
    fn errors_on_missing_date() {
        let source = "---\ntitle: No Date\n---\nBody\n";

        let result = extract_frontmatter(source);

        assert!(matches!(result, Err(FrontmatterError::InvalidYaml(_))));
    }
}
