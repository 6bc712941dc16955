//! Feed server implementation.

use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::services::ServeDir;

use quillpress_feed::{build_feed, scan_posts, FeedError, FeedMeta, PostError};

/// Configuration for the feed server.
#[derive(Debug, Clone)]
pub struct FeedServerConfig {
    /// Directory containing markdown posts
    pub posts_dir: PathBuf,

    /// Port to listen on
    pub port: u16,

    /// Host to bind to
    pub host: String,

    /// Feed title
    pub title: String,

    /// Feed description
    pub description: String,

    /// Canonical site origin. When unset, the request's Host header is used
    /// to resolve absolute item links.
    pub site: Option<String>,

    /// Channel language code
    pub language: String,
}

impl Default for FeedServerConfig {
    fn default() -> Self {
        Self {
            posts_dir: PathBuf::from("posts"),
            port: 7777,
            host: "127.0.0.1".to_string(),
            title: "Blog".to_string(),
            description: String::new(),
            site: None,
            language: "en".to_string(),
        }
    }
}

/// Errors that can occur with the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to bind to {0}: {1}")]
    BindError(String, String),
}

/// Errors behind a failed feed response.
#[derive(Debug, thiserror::Error)]
enum FeedResponseError {
    #[error(transparent)]
    Posts(#[from] PostError),

    #[error(transparent)]
    Feed(#[from] FeedError),
}

/// Feed server.
pub struct FeedServer {
    config: FeedServerConfig,
}

impl FeedServer {
    /// Create a new feed server.
    pub fn new(config: FeedServerConfig) -> Self {
        Self { config }
    }

    /// Start the feed server.
    pub async fn start(self) -> Result<(), ServerError> {
        let addr = format!("{}:{}", self.config.host, self.config.port);
        let listener = bind(&addr).await?;

        let posts_dir = self.config.posts_dir.clone();
        let state = Arc::new(self.config);

        let app = Router::new()
            .route("/rss.xml", get(feed_handler))
            .nest_service("/posts", ServeDir::new(&posts_dir))
            .with_state(state);

        tracing::info!("Serving feed at http://{}/rss.xml", addr);

        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        Ok(())
    }
}

/// Bind the listener. The address may be a hostname; it is resolved at
/// bind time.
async fn bind(addr: &str) -> Result<tokio::net::TcpListener, ServerError> {
    tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| ServerError::BindError(addr.to_string(), e.to_string()))
}

/// Handler for the feed route.
///
/// Rebuilds the feed from the posts directory on every request; there is no
/// caching, so the handler is idempotent for an unchanged directory.
async fn feed_handler(State(config): State<Arc<FeedServerConfig>>, headers: HeaderMap) -> Response {
    let site = resolve_site(&config, &headers);

    match render_feed(&config, &site) {
        Ok(xml) => (
            [(header::CONTENT_TYPE, "application/rss+xml; charset=utf-8")],
            xml,
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to build feed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Build the feed XML for one request.
fn render_feed(config: &FeedServerConfig, site: &str) -> Result<String, FeedResponseError> {
    let posts = scan_posts(&config.posts_dir)?;

    let meta = FeedMeta {
        title: config.title.clone(),
        description: config.description.clone(),
        site: site.to_string(),
        language: config.language.clone(),
    };

    Ok(build_feed(&meta, &posts)?)
}

/// Resolve the site origin for a request: the configured canonical URL if
/// set, else the Host header, else the bind address.
fn resolve_site(config: &FeedServerConfig, headers: &HeaderMap) -> String {
    if let Some(site) = &config.site {
        return site.clone();
    }

    headers
        .get(header::HOST)
        .and_then(|h| h.to_str().ok())
        .map(|host| format!("http://{}", host))
        .unwrap_or_else(|| format!("http://{}:{}", config.host, config.port))
}
