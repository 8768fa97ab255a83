//! Pure mapping from record sets to view models.

use vitrine_content::{FounderRecord, ProjectRecord, ServiceRecord};

/// The page container a fragment is rendered for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageRole {
    Services,
    Founder,
    Projects,
}

/// Caller-supplied rendering options.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Render only the first N projects; all when absent.
    pub project_limit: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ServiceCard {
    pub icon: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct SocialLink {
    pub platform: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct FounderView {
    pub name: String,
    pub father_name: String,
    pub title: String,
    pub bio: String,
    pub expertise: Vec<String>,
    pub image: String,
    pub contact: String,
    pub social: Vec<SocialLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ProjectCard {
    pub category: String,
    pub title: String,
    pub description: String,
    pub image: String,
}

/// One card per service record, in set order.
pub fn service_cards(services: &[ServiceRecord]) -> Vec<ServiceCard> {
    services
        .iter()
        .map(|s| ServiceCard {
            icon: s.icon.clone(),
            title: s.title.clone(),
            description: s.description.clone(),
        })
        .collect()
}

pub fn founder_view(founder: &FounderRecord) -> FounderView {
    FounderView {
        name: founder.name.clone(),
        father_name: founder.father_name.clone(),
        title: founder.title.clone(),
        bio: founder.bio.clone(),
        expertise: founder.expertise.clone(),
        image: founder.image.clone(),
        contact: founder.contact.clone(),
        social: founder
            .social
            .iter()
            .map(|(platform, url)| SocialLink {
                platform: platform.clone(),
                url: url.clone(),
            })
            .collect(),
    }
}

/// One card per project record, in set order, truncated to `limit` when given.
pub fn project_cards(projects: &[ProjectRecord], limit: Option<usize>) -> Vec<ProjectCard> {
    let take = limit.unwrap_or(projects.len());
    projects
        .iter()
        .take(take)
        .map(|p| ProjectCard {
            category: p.category.clone(),
            title: p.title.clone(),
            description: p.description.clone(),
            image: p.image.clone(),
        })
        .collect()
}
