// ABOUTME: Defines GrantLookup - the immutable resource name to grant set map
// ABOUTME: an entity builds once from its permission list.

use std::collections::HashMap;

use crate::grant::{Action, GrantSet, GrantType};
use crate::permission::Permission;

/// Resource name to grant set, with at most one entry per name.
///
/// When the input repeats a resource name the later permission wins, but it
/// keeps the position where that name was first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GrantLookup {
    permissions: Vec<Permission>,
    index: HashMap<String, usize>,
}

impl GrantLookup {
    /// Build a lookup from permissions in construction order.
    pub fn new(permissions: impl IntoIterator<Item = Permission>) -> Self {
        let mut lookup = Self::default();
        for permission in permissions {
            let existing = lookup.index.get(permission.name()).copied();
            match existing {
                Some(slot) => {
                    tracing::debug!(
                        resource = permission.name(),
                        "later permission overrides earlier one"
                    );
                    lookup.permissions[slot] = permission;
                }
                None => {
                    lookup
                        .index
                        .insert(permission.name().to_string(), lookup.permissions.len());
                    lookup.permissions.push(permission);
                }
            }
        }
        lookup
    }

    /// Grant set for a resource name.
    pub fn get(&self, resource: &str) -> Option<&GrantSet> {
        self.index
            .get(resource)
            .map(|&slot| self.permissions[slot].grants())
    }

    /// Grant for one action on a resource name.
    pub fn grant(&self, resource: &str, action: Action) -> Option<GrantType> {
        self.get(resource).map(|grants| grants.grant(action))
    }

    /// The deduplicated permissions, in first-seen order.
    pub fn permissions(&self) -> &[Permission] {
        &self.permissions
    }

    pub fn len(&self) -> usize {
        self.permissions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.permissions.is_empty()
    }
}
