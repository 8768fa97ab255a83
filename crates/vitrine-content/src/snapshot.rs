//! Immutable, versioned view of the three content sets.

use crate::records::{FounderPatch, FounderRecord, ProjectRecord, ServiceRecord};
use crate::seed;

/// An immutable snapshot of the content store.
///
/// Overrides never mutate a snapshot in place; accepting an override
/// produces a new snapshot with the version bumped. Each record set is
/// independently overridable.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentSnapshot {
    version: u64,
    services: Vec<ServiceRecord>,
    founder: FounderRecord,
    projects: Vec<ProjectRecord>,
}

impl ContentSnapshot {
    /// The static seed content defined at process start.
    pub fn seed() -> Self {
        Self {
            version: 0,
            services: seed::services(),
            founder: seed::founder(),
            projects: seed::projects(),
        }
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn services(&self) -> &[ServiceRecord] {
        &self.services
    }

    pub fn founder(&self) -> &FounderRecord {
        &self.founder
    }

    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    /// Replace the services set wholesale.
    pub fn with_services(&self, services: Vec<ServiceRecord>) -> Self {
        Self {
            version: self.version + 1,
            services,
            founder: self.founder.clone(),
            projects: self.projects.clone(),
        }
    }

    /// Overlay a founder patch onto the current founder record.
    pub fn with_founder_patch(&self, patch: FounderPatch) -> Self {
        Self {
            version: self.version + 1,
            services: self.services.clone(),
            founder: patch.apply(&self.founder),
            projects: self.projects.clone(),
        }
    }

    /// Replace the projects set wholesale.
    pub fn with_projects(&self, projects: Vec<ProjectRecord>) -> Self {
        Self {
            version: self.version + 1,
            services: self.services.clone(),
            founder: self.founder.clone(),
            projects,
        }
    }
}
