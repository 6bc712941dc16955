//! Static feed build command.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use quillpress_feed::{build_feed, scan_posts, FeedMeta};

use crate::config::load_config;

/// Run the build command.
pub async fn run(config_path: &Path, output: Option<PathBuf>) -> Result<()> {
    let file_config = load_config(config_path)?;

    let Some(site) = file_config.site.url else {
        anyhow::bail!("site.url must be set in feed.toml to build a static feed");
    };

    let posts_dir = PathBuf::from(&file_config.posts.dir);
    let posts = scan_posts(&posts_dir)?;

    let meta = FeedMeta {
        title: file_config.site.title,
        description: file_config.site.description,
        site,
        language: file_config.site.language,
    };

    let xml = build_feed(&meta, &posts)?;

    let output_dir = output.unwrap_or_else(|| PathBuf::from(&file_config.build.output));
    let feed_path = output_dir.join(&file_config.build.path);

    if let Some(parent) = feed_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(&feed_path, &xml)
        .with_context(|| format!("Failed to write {}", feed_path.display()))?;

    tracing::info!("Wrote {} items to {}", posts.len(), feed_path.display());

    Ok(())
}
