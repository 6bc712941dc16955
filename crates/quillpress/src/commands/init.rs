//! Initialize a feed in a project.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Run the init command.
pub async fn run(yes: bool) -> Result<()> {
    tracing::info!("Initializing quillpress...");

    let posts_dir = Path::new("posts");

    // Check if posts already exists
    if posts_dir.exists() {
        if !yes {
            tracing::warn!("posts/ directory already exists. Use --yes to overwrite.");
            return Ok(());
        }
    } else {
        fs::create_dir_all(posts_dir).context("Failed to create posts directory")?;
    }

    // Create default config
    let config_path = Path::new("feed.toml");
    if !config_path.exists() || yes {
        fs::write(config_path, DEFAULT_CONFIG).context("Failed to write feed.toml")?;
        tracing::info!("Created feed.toml");
    }

    // Create sample post
    let sample_path = posts_dir.join("hello-world.md");
    if !sample_path.exists() || yes {
        fs::write(&sample_path, DEFAULT_POST).context("Failed to write hello-world.md")?;
        tracing::info!("Created posts/hello-world.md");
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'quillpress serve' to preview the feed at /rss.xml.");

    Ok(())
}

const DEFAULT_CONFIG: &str = r#"# Quillpress Configuration

[site]
# Feed title
title = "My Blog"

# Feed description
description = "Notes and articles from my blog."

# Canonical site origin, used for absolute item links
# url = "https://example.com"

# Channel language code
language = "en"

[posts]
# Directory containing markdown posts
dir = "posts"

[build]
# Output directory for 'quillpress build'
output = "dist"

# Feed file path inside the output directory
path = "rss.xml"
"#;

const DEFAULT_POST: &str = r#"---
title: Hello World
description: The first post on this blog.
date: 2024-01-01
---

# Hello World

Welcome to your new blog. Every markdown file in `posts/` with a
`title` and a `date` in its frontmatter becomes one feed item.

## Frontmatter

```yaml
---
title: Post Title
description: Shown as the item description.
date: 2024-01-01
slug: custom-link-segment   # optional
draft: true                 # optional, hides the post
---
```

## Publishing

Serve the feed locally:

```bash
quillpress serve
```

Or write a static `rss.xml`:

```bash
quillpress build
```
"#;
