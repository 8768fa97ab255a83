//! API route handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use vitrine_content::{ContactResponse, ContactSubmission, FounderRecord, ProjectRecord, ServiceRecord};

use crate::server::AppState;
use crate::store::StoredContact;

pub const MISSING_FIELDS_ERROR: &str = "Missing required fields: name, email, subject, message";

const RECEIVED_SAVED: &str = "Thank you! We received your message.";
const RECEIVED_SAVE_FAILED: &str = "Thank you! We received your message (it could not be saved).";
const RECEIVED_NOT_SAVED: &str = "Thank you! We received your message (received, not saved).";

pub async fn services(State(state): State<Arc<AppState>>) -> Json<Vec<ServiceRecord>> {
    Json(state.content.services().to_vec())
}

pub async fn founder(State(state): State<Arc<AppState>>) -> Json<FounderRecord> {
    Json(state.content.founder().clone())
}

pub async fn projects(State(state): State<Arc<AppState>>) -> Json<Vec<ProjectRecord>> {
    Json(state.content.projects().to_vec())
}

/// Incoming contact body before required-field checks.
#[derive(Debug, Default, Deserialize)]
pub struct ContactPayload {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    subject: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

impl ContactPayload {
    /// Promote to a submission when every required field is present and
    /// non-empty. Phone stays optional and defaults to absent.
    fn into_submission(self) -> Option<ContactSubmission> {
        Some(ContactSubmission {
            name: non_empty(self.name)?,
            email: non_empty(self.email)?,
            phone: self.phone.filter(|p| !p.is_empty()),
            subject: non_empty(self.subject)?,
            message: non_empty(self.message)?,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Handle a contact submission.
///
/// Valid submissions always hit the operational log exactly once. A
/// configured store is written to before responding, but its failure never
/// fails the request; only the response message distinguishes the outcome.
pub async fn contact(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<ContactPayload>,
) -> (StatusCode, Json<ContactResponse>) {
    let Some(submission) = payload.into_submission() else {
        return (
            StatusCode::BAD_REQUEST,
            Json(ContactResponse::failure(MISSING_FIELDS_ERROR)),
        );
    };

    state.log.record(&submission);

    let message = match &state.store {
        Some(store) => {
            let record = StoredContact::from_submission(&submission);
            match store.save(record).await {
                Ok(()) => {
                    tracing::debug!("contact saved");
                    RECEIVED_SAVED
                }
                Err(err) => {
                    tracing::error!("contact save failed: {err}");
                    RECEIVED_SAVE_FAILED
                }
            }
        }
        None => RECEIVED_NOT_SAVED,
    };

    (StatusCode::OK, Json(ContactResponse::success(message)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use tempfile::tempdir;

    use crate::log::SubmissionLog;
    use crate::store::{ContactStore, SqliteContactStore, StoreError};
    use vitrine_content::ContentSnapshot;

    #[derive(Default)]
    struct CountingLog {
        calls: AtomicUsize,
    }

    impl SubmissionLog for CountingLog {
        fn record(&self, _submission: &ContactSubmission) {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    struct FailingStore {
        calls: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl ContactStore for FailingStore {
        async fn save(&self, _contact: StoredContact) -> Result<(), StoreError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(StoreError::Unavailable("backend down".to_string()))
        }
    }

    fn state_with(
        store: Option<Arc<dyn ContactStore>>,
        log: Arc<CountingLog>,
    ) -> Arc<AppState> {
        Arc::new(AppState {
            content: ContentSnapshot::seed(),
            store,
            log,
        })
    }

    fn valid_payload() -> ContactPayload {
        ContactPayload {
            name: Some("A".to_string()),
            email: Some("a@b.com".to_string()),
            phone: None,
            subject: Some("S".to_string()),
            message: Some("hello there".to_string()),
        }
    }

    #[tokio::test]
    async fn valid_submission_without_store_reports_not_saved() {
        let log = Arc::new(CountingLog::default());
        let state = state_with(None, Arc::clone(&log));

        let (status, Json(body)) = contact(State(state), Json(valid_payload())).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.ok);
        assert!(body.message.unwrap().contains("not saved"));
        assert_eq!(log.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn missing_message_is_rejected_before_log_or_store() {
        let log = Arc::new(CountingLog::default());
        let failing = Arc::new(FailingStore {
            calls: AtomicUsize::new(0),
        });
        let state = state_with(Some(Arc::clone(&failing) as _), Arc::clone(&log));

        let payload = ContactPayload {
            message: None,
            ..valid_payload()
        };
        let (status, Json(body)) = contact(State(state), Json(payload)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(!body.ok);
        assert_eq!(body.error.as_deref(), Some(MISSING_FIELDS_ERROR));
        assert_eq!(log.calls.load(Ordering::SeqCst), 0);
        assert_eq!(failing.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn empty_required_field_counts_as_missing() {
        let log = Arc::new(CountingLog::default());
        let state = state_with(None, Arc::clone(&log));

        let payload = ContactPayload {
            name: Some(String::new()),
            ..valid_payload()
        };
        let (status, Json(body)) = contact(State(state), Json(payload)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(!body.ok);
        assert_eq!(log.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn store_failure_is_swallowed_but_named_in_the_message() {
        let log = Arc::new(CountingLog::default());
        let failing = Arc::new(FailingStore {
            calls: AtomicUsize::new(0),
        });
        let state = state_with(Some(Arc::clone(&failing) as _), Arc::clone(&log));

        let (status, Json(body)) = contact(State(state), Json(valid_payload())).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.ok);
        assert!(body.message.unwrap().contains("could not be saved"));
        assert_eq!(log.calls.load(Ordering::SeqCst), 1);
        assert_eq!(failing.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn configured_store_persists_the_trimmed_record() {
        let temp = tempdir().unwrap();
        let db_path = temp.path().join("contacts.db");
        let store = Arc::new(SqliteContactStore::open(&db_path).unwrap());
        let log = Arc::new(CountingLog::default());
        let state = state_with(Some(store as _), Arc::clone(&log));

        let payload = ContactPayload {
            phone: Some("555-0100".to_string()),
            ..valid_payload()
        };
        let (status, Json(body)) = contact(State(state), Json(payload)).await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.ok);
        assert_eq!(body.message.as_deref(), Some(RECEIVED_SAVED));

        let conn = rusqlite::Connection::open(&db_path).unwrap();
        let (name, message): (String, String) = conn
            .query_row("SELECT name, message FROM contacts", [], |row| {
                Ok((row.get(0)?, row.get(1)?))
            })
            .unwrap();
        assert_eq!(name, "A");
        assert_eq!(message, "hello there");
    }

    #[tokio::test]
    async fn read_endpoints_serve_the_seed_snapshot() {
        let log = Arc::new(CountingLog::default());
        let state = state_with(None, log);

        let Json(services) = services(State(Arc::clone(&state))).await;
        assert_eq!(services.len(), state.content.services().len());

        let Json(founder) = founder(State(Arc::clone(&state))).await;
        assert_eq!(&founder, state.content.founder());

        let Json(projects) = projects(State(state)).await;
        assert_eq!(projects.len(), 4);
    }
}
