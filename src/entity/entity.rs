// ABOUTME: Defines permissible entities - Collectives (groups) and Actors
// ABOUTME: (individuals) sharing one tagged representation and lookup.

use super::{GrantLookup, PermissionsBlacklist, PermissionsWhitelist};
use crate::permission::Permission;
use crate::scope::Scope;

/// Which kind of entity is acting.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntityKind {
    /// A named group with no individual identity. Never owns anything.
    Collective,
    /// An individual; `id` is the ownership key.
    Actor { id: String },
}

/// Read-only view of the acting entity handed to `when` predicates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntitySnapshot<'a> {
    pub name: &'a str,
    pub scope: &'a str,
    /// The actor's id, or `""` for a collective.
    pub identifier: &'a str,
}

/// An entity that can be checked against resources.
///
/// Immutable once built. The grant lookup is owned by the entity and has no
/// mutation API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissibleEntity {
    name: String,
    scope: String,
    kind: EntityKind,
    grants: GrantLookup,
}

impl PermissibleEntity {
    /// Create an entity in the global scope.
    pub fn new(
        name: impl Into<String>,
        kind: EntityKind,
        permissions: impl IntoIterator<Item = Permission>,
    ) -> Self {
        Self {
            name: name.into(),
            scope: Scope::GLOBAL.to_string(),
            kind,
            grants: GrantLookup::new(permissions),
        }
    }

    /// Move this entity into a scope.
    pub fn in_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = scope.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    pub fn kind(&self) -> &EntityKind {
        &self.kind
    }

    /// Ownership key: the actor's id, or `""` for a collective.
    pub fn identifier(&self) -> &str {
        match &self.kind {
            EntityKind::Collective => "",
            EntityKind::Actor { id } => id,
        }
    }

    pub fn grants(&self) -> &GrantLookup {
        &self.grants
    }

    /// Permissions after duplicate resource names were resolved.
    pub fn permissions(&self) -> &[Permission] {
        self.grants.permissions()
    }

    /// Scope strings for every permission, in permission order.
    pub fn permissions_list(&self) -> Vec<String> {
        self.permissions()
            .iter()
            .flat_map(Permission::to_permissions_list)
            .collect()
    }

    pub fn snapshot(&self) -> EntitySnapshot<'_> {
        EntitySnapshot {
            name: &self.name,
            scope: &self.scope,
            identifier: self.identifier(),
        }
    }

    /// Permit-seeking checks.
    pub fn can(&self) -> PermissionsWhitelist<'_> {
        PermissionsWhitelist::new(self)
    }

    /// Deny-seeking checks.
    pub fn cannot(&self) -> PermissionsBlacklist<'_> {
        PermissionsBlacklist::new(self)
    }
}

/// A named group of entities sharing one permission set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collective {
    entity: PermissibleEntity,
}

impl Collective {
    /// Create a collective in the global scope.
    pub fn new(name: impl Into<String>, permissions: impl IntoIterator<Item = Permission>) -> Self {
        Self {
            entity: PermissibleEntity::new(name, EntityKind::Collective, permissions),
        }
    }

    /// Move this collective into a scope.
    pub fn in_scope(self, scope: impl Into<String>) -> Self {
        Self {
            entity: self.entity.in_scope(scope),
        }
    }

    /// Derive a collective from `base`.
    ///
    /// The base's permissions come first and `overrides` after them, so an
    /// override for the same resource replaces the inherited one. Without a
    /// `scope` the base's scope is kept.
    pub fn inherit_from(
        base: &Collective,
        name: impl Into<String>,
        overrides: impl IntoIterator<Item = Permission>,
        scope: Option<&str>,
    ) -> Self {
        let permissions = base.permissions().iter().cloned().chain(overrides);
        Self::new(name, permissions).in_scope(scope.unwrap_or(base.scope()))
    }
}

/// An individually identified entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    entity: PermissibleEntity,
}

impl Actor {
    /// Create an actor in the global scope.
    pub fn new(
        name: impl Into<String>,
        id: impl Into<String>,
        permissions: impl IntoIterator<Item = Permission>,
    ) -> Self {
        Self {
            entity: PermissibleEntity::new(name, EntityKind::Actor { id: id.into() }, permissions),
        }
    }

    /// Move this actor into a scope.
    pub fn in_scope(self, scope: impl Into<String>) -> Self {
        Self {
            entity: self.entity.in_scope(scope),
        }
    }

    /// An individual member of `collective`, with its name, scope, and permissions.
    pub fn derived_from(collective: &Collective, id: impl Into<String>) -> Self {
        Self::new(collective.name(), id, collective.permissions().to_vec())
            .in_scope(collective.scope())
    }

    pub fn id(&self) -> &str {
        self.entity.identifier()
    }
}

macro_rules! delegate_to_entity {
    ($ty:ty) => {
        impl $ty {
            pub fn name(&self) -> &str {
                self.entity.name()
            }

            pub fn scope(&self) -> &str {
                self.entity.scope()
            }

            pub fn permissions(&self) -> &[Permission] {
                self.entity.permissions()
            }

            pub fn permissions_list(&self) -> Vec<String> {
                self.entity.permissions_list()
            }

            pub fn snapshot(&self) -> EntitySnapshot<'_> {
                self.entity.snapshot()
            }

            pub fn can(&self) -> PermissionsWhitelist<'_> {
                self.entity.can()
            }

            pub fn cannot(&self) -> PermissionsBlacklist<'_> {
                self.entity.cannot()
            }

            pub fn as_entity(&self) -> &PermissibleEntity {
                &self.entity
            }
        }

        impl AsRef<PermissibleEntity> for $ty {
            fn as_ref(&self) -> &PermissibleEntity {
                &self.entity
            }
        }

        impl From<$ty> for PermissibleEntity {
            fn from(value: $ty) -> Self {
                value.entity
            }
        }
    };
}

delegate_to_entity!(Collective);
delegate_to_entity!(Actor);
