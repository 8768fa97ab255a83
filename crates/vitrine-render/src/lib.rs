//! Rendering for the vitrine site.
//!
//! Rendering is split in two: a pure mapping from record sets to view models
//! (testable without any display environment), and a template engine that
//! turns view models into HTML fragments. A thin [`Surface`] adapter writes
//! fragments into page containers, replacing prior content.

pub mod surface;
pub mod templates;
pub mod view;

pub use surface::{paint, MemorySurface, Surface};
pub use templates::{PageContext, TemplateEngine};
pub use view::{
    founder_view, project_cards, service_cards, FounderView, PageRole, ProjectCard,
    RenderOptions, ServiceCard, SocialLink,
};
