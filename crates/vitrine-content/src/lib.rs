//! Domain records and content snapshots for the vitrine site.
//!
//! The content store is a set of in-memory records (services, founder,
//! projects) defined at startup. A remote backend may replace whole record
//! sets once during page initialization; replacements always produce a new
//! immutable snapshot rather than mutating shared state.

pub mod contact;
pub mod records;
pub mod seed;
pub mod snapshot;

pub use contact::{ContactResponse, ContactSubmission};
pub use records::{FounderPatch, FounderRecord, ProjectRecord, ServiceRecord};
pub use snapshot::ContentSnapshot;
