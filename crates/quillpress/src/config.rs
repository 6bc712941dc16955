//! feed.toml configuration loading.

use std::fs;
use std::path::Path;

use anyhow::Result;
use serde::Deserialize;

/// Configuration file structure (feed.toml).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub posts: PostsConfig,
    #[serde(default)]
    pub build: BuildSettings,
}

#[derive(Debug, Deserialize)]
pub struct SiteConfig {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Canonical site origin for absolute item links
    pub url: Option<String>,
    #[serde(default = "default_language")]
    pub language: String,
}

#[derive(Debug, Deserialize)]
pub struct PostsConfig {
    #[serde(default = "default_posts_dir")]
    pub dir: String,
}

#[derive(Debug, Deserialize)]
pub struct BuildSettings {
    #[serde(default = "default_output")]
    pub output: String,
    #[serde(default = "default_feed_path")]
    pub path: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            description: String::new(),
            url: None,
            language: default_language(),
        }
    }
}

impl Default for PostsConfig {
    fn default() -> Self {
        Self {
            dir: default_posts_dir(),
        }
    }
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            output: default_output(),
            path: default_feed_path(),
        }
    }
}

fn default_title() -> String {
    "Blog".to_string()
}
fn default_language() -> String {
    "en".to_string()
}
fn default_posts_dir() -> String {
    "posts".to_string()
}
fn default_output() -> String {
    "dist".to_string()
}
fn default_feed_path() -> String {
    "rss.xml".to_string()
}

/// Load configuration from feed.toml if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if path.exists() {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", path.display(), e))?;
        let config: ConfigFile = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", path.display(), e))?;
        tracing::info!("Loaded config from {}", path.display());
        return Ok(config);
    }
    Ok(ConfigFile::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let tmp = TempDir::new().unwrap();

        let config = load_config(&tmp.path().join("feed.toml")).unwrap();

        assert_eq!(config.site.title, "Blog");
        assert_eq!(config.site.language, "en");
        assert_eq!(config.posts.dir, "posts");
        assert_eq!(config.build.output, "dist");
        assert_eq!(config.build.path, "rss.xml");
    }

    #[test]
    fn parses_full_config() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("feed.toml");
        fs::write(
            &path,
            r#"
[site]
title = "DevOps Engineering Blog"
description = "Notes on modern DevOps tools."
url = "https://blog.example.com"
language = "en"

[posts]
dir = "content/posts"

[build]
output = "public"
path = "feeds/rss.xml"
"#,
        )
        .unwrap();

        let config = load_config(&path).unwrap();

        assert_eq!(config.site.title, "DevOps Engineering Blog");
        assert_eq!(config.site.url.as_deref(), Some("https://blog.example.com"));
        assert_eq!(config.posts.dir, "content/posts");
        assert_eq!(config.build.path, "feeds/rss.xml");
    }

    #[test]
    fn malformed_config_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("feed.toml");
        fs::write(&path, "[site\ntitle = ").unwrap();

        assert!(load_config(&path).is_err());
    }
}
