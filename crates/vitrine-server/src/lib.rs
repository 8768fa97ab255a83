//! API and static file server for the vitrine site.
//!
//! Serves the three content record sets as JSON, accepts contact submissions
//! (optionally persisting them to a local document store), and serves the
//! static site directory as a fallback.

pub mod log;
pub mod routes;
pub mod server;
pub mod store;

pub use log::{SubmissionLog, TracingLog};
pub use server::{AppState, ServerError, SiteServer, SiteServerConfig};
pub use store::{ContactStore, SqliteContactStore, StoreError, StoredContact};
