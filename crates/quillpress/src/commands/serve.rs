//! Feed server command.

use std::path::{Path, PathBuf};

use anyhow::Result;
use quillpress_server::{FeedServer, FeedServerConfig};

use crate::config::load_config;

/// Run the serve command.
pub async fn run(config_path: &Path, port: u16, host: String) -> Result<()> {
    let file_config = load_config(config_path)?;

    let config = FeedServerConfig {
        posts_dir: PathBuf::from(&file_config.posts.dir),
        port,
        host,
        title: file_config.site.title,
        description: file_config.site.description,
        site: file_config.site.url,
        language: file_config.site.language,
    };

    FeedServer::new(config).start().await?;

    Ok(())
}
