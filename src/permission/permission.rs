// ABOUTME: Defines Permission - a grant set bound to a named resource type.
// ABOUTME: Serializes to four "<resource>.<action>.<grant>" scope strings.

use serde::{Deserialize, Serialize};

use super::ScopeString;
use crate::grant::GrantSet;

/// A grant set for one named resource type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Permission {
    name: String,
    grants: GrantSet,
}

impl Permission {
    /// Create a permission. The resource name is trimmed.
    ///
    /// The trimmed name must be non-empty and contain no `.`, otherwise its
    /// scope strings cannot be parsed back.
    pub fn new(name: impl AsRef<str>, grants: GrantSet) -> Self {
        let name = name.as_ref().trim();
        debug_assert!(
            !name.is_empty() && !name.contains('.'),
            "resource name {name:?} must be non-empty and dot-free"
        );
        Self {
            name: name.to_string(),
            grants,
        }
    }

    /// Every action on any instance.
    pub fn all(name: impl AsRef<str>) -> Self {
        Self::new(name, GrantSet::all())
    }

    /// No actions.
    pub fn none(name: impl AsRef<str>) -> Self {
        Self::new(name, GrantSet::none())
    }

    /// Only the owner may act on the resource.
    pub fn private(name: impl AsRef<str>) -> Self {
        Self::new(name, GrantSet::private())
    }

    /// Anyone may read; only the owner may create, update, or delete.
    pub fn protected(name: impl AsRef<str>) -> Self {
        Self::new(name, GrantSet::protected())
    }

    /// Everything except delete.
    pub fn public(name: impl AsRef<str>) -> Self {
        Self::new(name, GrantSet::public())
    }

    /// Read only.
    pub fn read_only(name: impl AsRef<str>) -> Self {
        Self::new(name, GrantSet::read_only())
    }

    /// Name of the resource type this permission applies to.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grants(&self) -> &GrantSet {
        &self.grants
    }

    /// Scope strings for this permission, one per action in
    /// `create, read, update, delete` order.
    pub fn scope_strings(&self) -> impl Iterator<Item = ScopeString> + '_ {
        self.grants
            .iter()
            .map(move |(action, grant)| ScopeString::new(&self.name, action, grant))
    }

    /// The canonical text encoding, e.g. `"accounts.create.own"`.
    pub fn to_permissions_list(&self) -> Vec<String> {
        self.scope_strings().map(|s| s.to_string()).collect()
    }
}

impl std::fmt::Display for Permission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, scope) in self.scope_strings().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", scope)?;
        }
        Ok(())
    }
}
