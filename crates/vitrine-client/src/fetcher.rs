//! Remote content overrides.
//!
//! At page initialization the client asks the backend for fresh copies of the
//! three record sets. Each request is independently fault-isolated: a failed
//! or malformed response leaves that set's local data untouched and never
//! blocks the other sets. There are no retries and no timeout beyond the
//! transport default.

use reqwest::Client;
use serde::de::DeserializeOwned;

use vitrine_content::{ContentSnapshot, FounderPatch, ProjectRecord, ServiceRecord};

/// Why a single override request was rejected.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected status: {0}")]
    Status(reqwest::StatusCode),
}

/// Fetch overrides for all three record sets concurrently and fold the
/// accepted ones into a new snapshot.
///
/// Acceptance is all-or-nothing per set: services and projects must arrive as
/// non-empty arrays and then replace the local set wholesale; the founder
/// must carry a non-empty name and is applied as a key-wise overlay.
pub async fn fetch_overrides(
    client: &Client,
    base_url: &str,
    local: &ContentSnapshot,
) -> ContentSnapshot {
    let (services, founder, projects) = tokio::join!(
        fetch_services(client, base_url),
        fetch_founder(client, base_url),
        fetch_projects(client, base_url),
    );

    let mut snapshot = local.clone();
    if let Some(services) = services {
        snapshot = snapshot.with_services(services);
    }
    if let Some(patch) = founder {
        snapshot = snapshot.with_founder_patch(patch);
    }
    if let Some(projects) = projects {
        snapshot = snapshot.with_projects(projects);
    }
    snapshot
}

async fn fetch_services(client: &Client, base_url: &str) -> Option<Vec<ServiceRecord>> {
    match get_json::<Vec<ServiceRecord>>(client, base_url, "/api/services").await {
        Ok(services) if !services.is_empty() => Some(services),
        Ok(_) => {
            tracing::warn!("services override rejected: empty record set");
            None
        }
        Err(err) => {
            tracing::warn!("services override unavailable, keeping local data: {err}");
            None
        }
    }
}

async fn fetch_founder(client: &Client, base_url: &str) -> Option<FounderPatch> {
    match get_json::<FounderPatch>(client, base_url, "/api/founder").await {
        Ok(patch) if patch.has_name() => Some(patch),
        Ok(_) => {
            tracing::warn!("founder override rejected: missing name");
            None
        }
        Err(err) => {
            tracing::warn!("founder override unavailable, keeping local data: {err}");
            None
        }
    }
}

async fn fetch_projects(client: &Client, base_url: &str) -> Option<Vec<ProjectRecord>> {
    match get_json::<Vec<ProjectRecord>>(client, base_url, "/api/projects").await {
        Ok(projects) if !projects.is_empty() => Some(projects),
        Ok(_) => {
            tracing::warn!("projects override rejected: empty record set");
            None
        }
        Err(err) => {
            tracing::warn!("projects override unavailable, keeping local data: {err}");
            None
        }
    }
}

async fn get_json<T: DeserializeOwned>(
    client: &Client,
    base_url: &str,
    path: &str,
) -> Result<T, FetchError> {
    let url = format!("{}{}", base_url.trim_end_matches('/'), path);
    let response = client.get(&url).send().await?;

    if !response.status().is_success() {
        return Err(FetchError::Status(response.status()));
    }

    Ok(response.json().await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn remote_services() -> serde_json::Value {
        serde_json::json!([
            { "title": "Consulting", "description": "Architecture reviews.", "icon": "🧭" }
        ])
    }

    fn remote_projects() -> serde_json::Value {
        serde_json::json!([
            {
                "id": 9,
                "title": "Inventory Dashboard",
                "description": "Live stock reporting.",
                "image": "images/p9.jpg",
                "category": "Web Development"
            }
        ])
    }

    #[tokio::test]
    async fn valid_overrides_replace_every_set() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/services");
            then.status(200).json_body(remote_services());
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/founder");
            then.status(200)
                .json_body(serde_json::json!({ "name": "Robin Vance", "bio": "New bio." }));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/projects");
            then.status(200).json_body(remote_projects());
        });

        let local = ContentSnapshot::seed();
        let client = Client::new();
        let snapshot = fetch_overrides(&client, &server.base_url(), &local).await;

        assert_eq!(snapshot.services().len(), 1);
        assert_eq!(snapshot.services()[0].title, "Consulting");
        assert_eq!(snapshot.projects().len(), 1);
        assert_eq!(snapshot.projects()[0].id, 9);
        // Founder overlay: patched fields replaced, the rest kept.
        assert_eq!(snapshot.founder().name, "Robin Vance");
        assert_eq!(snapshot.founder().bio, "New bio.");
        assert_eq!(snapshot.founder().contact, local.founder().contact);
        assert_eq!(snapshot.version(), 3);
        // Old service entries are gone entirely.
        assert!(!snapshot
            .services()
            .iter()
            .any(|s| s.title == local.services()[0].title));
    }

    #[tokio::test]
    async fn empty_sets_and_nameless_founder_are_rejected() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/services");
            then.status(200).json_body(serde_json::json!([]));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/founder");
            then.status(200)
                .json_body(serde_json::json!({ "bio": "No name here." }));
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/projects");
            then.status(200).json_body(serde_json::json!([]));
        });

        let local = ContentSnapshot::seed();
        let client = Client::new();
        let snapshot = fetch_overrides(&client, &server.base_url(), &local).await;

        assert_eq!(snapshot, local);
        assert_eq!(snapshot.version(), 0);
    }

    #[tokio::test]
    async fn one_failing_set_does_not_block_the_others() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/api/services");
            then.status(500);
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/founder");
            then.status(200).body("not json at all");
        });
        server.mock(|when, then| {
            when.method(GET).path("/api/projects");
            then.status(200).json_body(remote_projects());
        });

        let local = ContentSnapshot::seed();
        let client = Client::new();
        let snapshot = fetch_overrides(&client, &server.base_url(), &local).await;

        assert_eq!(snapshot.services(), local.services());
        assert_eq!(snapshot.founder(), local.founder());
        assert_eq!(snapshot.projects().len(), 1);
        assert_eq!(snapshot.version(), 1);
    }

    #[tokio::test]
    async fn unreachable_backend_keeps_local_data() {
        let local = ContentSnapshot::seed();
        let client = Client::new();

        // Nothing listens here.
        let snapshot = fetch_overrides(&client, "http://127.0.0.1:1", &local).await;

        assert_eq!(snapshot, local);
    }
}
