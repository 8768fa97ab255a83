//! Optional persistence for contact submissions.
//!
//! The store is configured once at startup from a connection string; when it
//! is absent or broken the server degrades to log-only mode. Persisted
//! records keep only name, email, message and a server-assigned timestamp.

use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use rusqlite::{params, Connection};

use vitrine_content::ContactSubmission;

/// A contact submission as it is persisted.
///
/// Phone and subject are accepted by the endpoint and written to the
/// operational log, but deliberately not persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredContact {
    pub name: String,
    pub email: String,
    pub message: String,
    /// Server-assigned RFC 3339 timestamp.
    pub created_at: String,
}

impl StoredContact {
    pub fn from_submission(submission: &ContactSubmission) -> Self {
        Self {
            name: submission.name.clone(),
            email: submission.email.clone(),
            message: submission.message.clone(),
            created_at: Utc::now().to_rfc3339(),
        }
    }
}

/// Errors from the persistence backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to open contact store: {0}")]
    Open(#[source] rusqlite::Error),

    #[error("failed to save contact: {0}")]
    Save(#[source] rusqlite::Error),

    #[error("contact store unavailable: {0}")]
    Unavailable(String),
}

/// Document store for contact submissions.
#[async_trait]
pub trait ContactStore: Send + Sync {
    async fn save(&self, contact: StoredContact) -> Result<(), StoreError>;
}

/// SQLite-backed contact store.
pub struct SqliteContactStore {
    conn: Arc<Mutex<Connection>>,
}

impl SqliteContactStore {
    const SCHEMA: &'static str = "
        CREATE TABLE IF NOT EXISTS contacts (
            id INTEGER PRIMARY KEY,
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            message TEXT NOT NULL,
            created_at TEXT NOT NULL
        );
    ";

    /// Open (or create) the store at the given path.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path).map_err(StoreError::Open)?;
        conn.execute_batch(Self::SCHEMA).map_err(StoreError::Open)?;

        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }
}

#[async_trait]
impl ContactStore for SqliteContactStore {
    async fn save(&self, contact: StoredContact) -> Result<(), StoreError> {
        let conn = Arc::clone(&self.conn);

        tokio::task::spawn_blocking(move || {
            let conn = conn.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
            conn.execute(
                "INSERT INTO contacts (name, email, message, created_at)
                 VALUES (?1, ?2, ?3, ?4)",
                params![
                    contact.name,
                    contact.email,
                    contact.message,
                    contact.created_at
                ],
            )
            .map(|_| ())
            .map_err(StoreError::Save)
        })
        .await
        .map_err(|err| StoreError::Unavailable(err.to_string()))?
    }
}
