//! Record types for the three content sets.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A service offered by the studio. Order within a set is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRecord {
    pub title: String,
    pub description: String,
    /// Short glyph or label shown with the card.
    pub icon: String,
}

/// The founder bio. Singleton record, no identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FounderRecord {
    pub name: String,
    #[serde(rename = "fatherName")]
    pub father_name: String,
    pub title: String,
    pub bio: String,
    pub expertise: Vec<String>,
    /// Asset path for the portrait image.
    pub image: String,
    /// Contact email address.
    pub contact: String,
    /// Platform name to URL.
    #[serde(default)]
    pub social: BTreeMap<String, String>,
}

/// A portfolio project. `id` is unique within the set but has no
/// referential use beyond identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub image: String,
    pub category: String,
}

/// Key-wise overlay for the founder record.
///
/// Unlike services and projects, a founder override does not replace the
/// record wholesale: incoming fields overwrite same-named local fields and
/// every other local field persists.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FounderPatch {
    pub name: Option<String>,
    #[serde(rename = "fatherName")]
    pub father_name: Option<String>,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub expertise: Option<Vec<String>>,
    pub image: Option<String>,
    pub contact: Option<String>,
    pub social: Option<BTreeMap<String, String>>,
}

impl FounderPatch {
    /// A patch is acceptable only when it carries a non-empty name.
    pub fn has_name(&self) -> bool {
        self.name.as_deref().is_some_and(|n| !n.is_empty())
    }

    /// Overlay this patch onto a base record.
    pub fn apply(self, base: &FounderRecord) -> FounderRecord {
        FounderRecord {
            name: self.name.unwrap_or_else(|| base.name.clone()),
            father_name: self.father_name.unwrap_or_else(|| base.father_name.clone()),
            title: self.title.unwrap_or_else(|| base.title.clone()),
            bio: self.bio.unwrap_or_else(|| base.bio.clone()),
            expertise: self.expertise.unwrap_or_else(|| base.expertise.clone()),
            image: self.image.unwrap_or_else(|| base.image.clone()),
            contact: self.contact.unwrap_or_else(|| base.contact.clone()),
            social: self.social.unwrap_or_else(|| base.social.clone()),
        }
    }
}
