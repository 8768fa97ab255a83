//! Static site build command.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Datelike;

use vitrine_client::fetch_overrides;
use vitrine_content::ContentSnapshot;
use vitrine_render::{
    paint, MemorySurface, PageContext, PageRole, RenderOptions, TemplateEngine,
};

use crate::config;

/// The index page shows a teaser of the portfolio, not the full grid.
const INDEX_PROJECT_LIMIT: usize = 2;

/// Run the build command.
pub async fn run(
    config_path: &Path,
    output: Option<PathBuf>,
    api_url: Option<String>,
) -> Result<()> {
    let config = config::load(config_path)?;
    let output = output.unwrap_or_else(|| PathBuf::from(&config.site.output));

    // Start from the local seed, then let a configured backend override it.
    let mut snapshot = ContentSnapshot::seed();
    if let Some(base_url) = api_url.or(config.api.base_url) {
        tracing::info!("Fetching content overrides from {}", base_url);
        let client = reqwest::Client::new();
        snapshot = fetch_overrides(&client, &base_url, &snapshot).await;
        tracing::info!("Content snapshot at version {}", snapshot.version());
    }

    let engine = TemplateEngine::new();
    let index = render_index(&engine, &snapshot, &config.site.title)?;

    fs::create_dir_all(&output)
        .with_context(|| format!("Failed to create {}", output.display()))?;
    let index_path = output.join("index.html");
    fs::write(&index_path, index)
        .with_context(|| format!("Failed to write {}", index_path.display()))?;

    tracing::info!("Wrote {}", index_path.display());

    Ok(())
}

/// Render every fragment into the page surface, then compose the index page.
fn render_index(
    engine: &TemplateEngine,
    snapshot: &ContentSnapshot,
    site_title: &str,
) -> Result<String> {
    let roles = [PageRole::Services, PageRole::Founder, PageRole::Projects];
    let options = RenderOptions {
        project_limit: Some(INDEX_PROJECT_LIMIT),
    };

    let mut surface = MemorySurface::with_roles(&roles);
    for role in roles {
        let fragment = engine
            .render_fragment(role, snapshot, &options)
            .map_err(|e| anyhow::anyhow!("Failed to render fragment: {}", e))?;
        paint(&mut surface, role, &fragment);
    }

    let page = PageContext {
        site_title: site_title.to_string(),
        year: chrono::Utc::now().year(),
        services_html: surface.content(PageRole::Services).unwrap_or("").to_string(),
        founder_html: surface.content(PageRole::Founder).unwrap_or("").to_string(),
        projects_html: surface.content(PageRole::Projects).unwrap_or("").to_string(),
    };

    engine
        .render_page(&page)
        .map_err(|e| anyhow::anyhow!("Failed to render page: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_contains_every_section() {
        let engine = TemplateEngine::new();
        let snapshot = ContentSnapshot::seed();

        let html = render_index(&engine, &snapshot, "Vitrine Studio").unwrap();

        assert!(html.contains("<title>Vitrine Studio</title>"));
        assert_eq!(
            html.matches("<article class=\"card\">").count(),
            snapshot.services().len()
        );
        // Teaser limit applies on the index page.
        assert_eq!(
            html.matches("<div class=\"proj\">").count(),
            INDEX_PROJECT_LIMIT
        );
        assert!(html.contains(&snapshot.founder().name));
    }

    #[tokio::test]
    async fn build_writes_the_index_page() {
        let temp = tempfile::tempdir().unwrap();
        let output = temp.path().join("dist");

        run(
            Path::new("no-such-site.toml"),
            Some(output.clone()),
            None,
        )
        .await
        .unwrap();

        let html = fs::read_to_string(output.join("index.html")).unwrap();
        assert!(html.contains("Vitrine Studio"));
    }
}
