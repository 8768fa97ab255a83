//! Thin adapter writing rendered fragments into page containers.

use std::collections::HashMap;

use crate::view::PageRole;

/// A display surface with one optional container slot per page role.
///
/// Page-dependent containers are expected to be missing on unrelated pages,
/// so an absent slot is not an error.
pub trait Surface {
    fn slot(&mut self, role: PageRole) -> Option<&mut String>;
}

/// Write a fragment into the container for `role`, replacing whatever was
/// displayed before (never appending). Returns false, silently, when the
/// surface has no container for that role.
pub fn paint<S: Surface + ?Sized>(surface: &mut S, role: PageRole, fragment: &str) -> bool {
    match surface.slot(role) {
        Some(slot) => {
            slot.clear();
            slot.push_str(fragment);
            true
        }
        None => false,
    }
}

/// In-memory surface holding a slot per configured page role.
#[derive(Debug, Default)]
pub struct MemorySurface {
    slots: HashMap<PageRole, String>,
}

impl MemorySurface {
    /// A surface with empty containers for the given roles.
    pub fn with_roles(roles: &[PageRole]) -> Self {
        Self {
            slots: roles.iter().map(|role| (*role, String::new())).collect(),
        }
    }

    pub fn content(&self, role: PageRole) -> Option<&str> {
        self.slots.get(&role).map(String::as_str)
    }
}

impl Surface for MemorySurface {
    fn slot(&mut self, role: PageRole) -> Option<&mut String> {
        self.slots.get_mut(&role)
    }
}
