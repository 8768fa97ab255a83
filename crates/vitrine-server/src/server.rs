//! Site server implementation.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use vitrine_content::ContentSnapshot;

use crate::log::{SubmissionLog, TracingLog};
use crate::routes;
use crate::store::{ContactStore, SqliteContactStore};

/// Configuration for the site server.
#[derive(Debug, Clone)]
pub struct SiteServerConfig {
    /// Host to bind to
    pub host: String,

    /// Port to listen on
    pub port: u16,

    /// Directory of static site files served as fallback
    pub site_dir: PathBuf,

    /// Connection string for the contact store; None disables persistence
    pub contact_db: Option<PathBuf>,

    /// Open browser on start
    pub open: bool,
}

impl Default for SiteServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 4000,
            site_dir: PathBuf::from("site"),
            contact_db: None,
            open: false,
        }
    }
}

/// Errors that can occur with the server.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid address {0}: {1}")]
    InvalidAddress(String, String),

    #[error("Failed to bind to {0}: {1}")]
    BindError(SocketAddr, String),
}

/// Shared server state. Built once at startup, never mutated afterwards.
pub struct AppState {
    pub content: ContentSnapshot,
    pub store: Option<Arc<dyn ContactStore>>,
    pub log: Arc<dyn SubmissionLog>,
}

/// Site server.
pub struct SiteServer {
    config: SiteServerConfig,
}

impl SiteServer {
    /// Create a new site server.
    pub fn new(config: SiteServerConfig) -> Self {
        Self { config }
    }

    /// Start the site server.
    pub async fn start(self) -> Result<(), ServerError> {
        let raw_addr = format!("{}:{}", self.config.host, self.config.port);
        let addr: SocketAddr = raw_addr
            .parse()
            .map_err(|e: std::net::AddrParseError| {
                ServerError::InvalidAddress(raw_addr, e.to_string())
            })?;

        let store = open_store(self.config.contact_db.as_deref());

        let state = Arc::new(AppState {
            content: ContentSnapshot::seed(),
            store,
            log: Arc::new(TracingLog),
        });

        let app = router(state, &self.config.site_dir);

        tracing::info!("Serving site at http://{}", addr);

        if self.config.open {
            let url = format!("http://{}", addr);
            let _ = open::that(&url);
        }

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::BindError(addr, e.to_string()))?;

        Ok(())
    }
}

/// Build the application router: JSON API plus static fallback, CORS open.
pub fn router(state: Arc<AppState>, site_dir: &Path) -> Router {
    Router::new()
        .route("/api/services", get(routes::services))
        .route("/api/founder", get(routes::founder))
        .route("/api/projects", get(routes::projects))
        .route("/api/contact", post(routes::contact))
        .fallback_service(ServeDir::new(site_dir))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Open the contact store, degrading to log-only mode when it is missing or
/// broken. A broken persistence backend is never fatal to the process.
fn open_store(path: Option<&Path>) -> Option<Arc<dyn ContactStore>> {
    match path {
        Some(path) => match SqliteContactStore::open(path) {
            Ok(store) => {
                tracing::info!("Contact store ready at {}", path.display());
                Some(Arc::new(store))
            }
            Err(err) => {
                tracing::warn!("Contact store unavailable, continuing without persistence: {err}");
                None
            }
        },
        None => {
            tracing::warn!("No contact database configured; submissions will be logged only");
            None
        }
    }
}
