// ABOUTME: Defines the whitelist ("can") and blacklist ("cannot") views over
// ABOUTME: an entity's grants, plus the single own/any eligibility table.

use super::{EntityKind, EntitySnapshot, PermissibleEntity};
use crate::grant::{Action, GrantType};
use crate::resource::Resource;
use crate::scope::{scope_matches, scope_mismatch};

/// Extra condition supplied by the caller for a single check.
///
/// Called exactly once per check, after the base rule is computed. It should
/// not block, and callers must not rely on when it runs relative to other
/// checks.
pub type Condition<'w> = &'w dyn Fn(&EntitySnapshot<'_>, Action, &Resource) -> bool;

/// Default condition for the permit path.
pub fn always(_: &EntitySnapshot<'_>, _: Action, _: &Resource) -> bool {
    true
}

/// Default condition for the deny path.
pub fn never(_: &EntitySnapshot<'_>, _: Action, _: &Resource) -> bool {
    false
}

/// Whether a grant lets this kind of entity act on the resource.
///
/// | grant  | Collective | Actor                          |
/// |--------|------------|--------------------------------|
/// | `none` | no         | no                             |
/// | `own`  | no         | only on instances it owns      |
/// | `any`  | yes        | yes                            |
pub fn eligible(kind: &EntityKind, grant: GrantType, resource: &Resource) -> bool {
    match (grant, kind) {
        (GrantType::None, _) => false,
        (GrantType::Any, _) => true,
        (GrantType::Own, EntityKind::Collective) => false,
        (GrantType::Own, EntityKind::Actor { id }) => resource.is_owned_by(id),
    }
}

/// Per-action checks against one entity's grants.
///
/// The plain methods apply [`PermissionsList::DEFAULT_WHEN`]; the `_when`
/// variants take the caller's condition instead.
pub trait PermissionsList {
    /// Condition used when the caller does not pass one.
    const DEFAULT_WHEN: fn(&EntitySnapshot<'_>, Action, &Resource) -> bool;

    /// Evaluate one action against a resource.
    fn check(&self, action: Action, resource: &Resource, when: Condition<'_>) -> bool;

    fn create(&self, resource: &Resource) -> bool {
        self.check(Action::Create, resource, &Self::DEFAULT_WHEN)
    }

    fn read(&self, resource: &Resource) -> bool {
        self.check(Action::Read, resource, &Self::DEFAULT_WHEN)
    }

    fn update(&self, resource: &Resource) -> bool {
        self.check(Action::Update, resource, &Self::DEFAULT_WHEN)
    }

    fn delete(&self, resource: &Resource) -> bool {
        self.check(Action::Delete, resource, &Self::DEFAULT_WHEN)
    }

    fn create_when<F>(&self, resource: &Resource, when: F) -> bool
    where
        F: Fn(&EntitySnapshot<'_>, Action, &Resource) -> bool,
    {
        self.check(Action::Create, resource, &when)
    }

    fn read_when<F>(&self, resource: &Resource, when: F) -> bool
    where
        F: Fn(&EntitySnapshot<'_>, Action, &Resource) -> bool,
    {
        self.check(Action::Read, resource, &when)
    }

    fn update_when<F>(&self, resource: &Resource, when: F) -> bool
    where
        F: Fn(&EntitySnapshot<'_>, Action, &Resource) -> bool,
    {
        self.check(Action::Update, resource, &when)
    }

    fn delete_when<F>(&self, resource: &Resource, when: F) -> bool
    where
        F: Fn(&EntitySnapshot<'_>, Action, &Resource) -> bool,
    {
        self.check(Action::Delete, resource, &when)
    }
}

/// Permit-seeking view: true only when grant, scope, and condition all allow.
#[derive(Debug, Clone, Copy)]
pub struct PermissionsWhitelist<'e> {
    entity: &'e PermissibleEntity,
}

impl<'e> PermissionsWhitelist<'e> {
    pub fn new(entity: &'e PermissibleEntity) -> Self {
        Self { entity }
    }
}

impl PermissionsList for PermissionsWhitelist<'_> {
    const DEFAULT_WHEN: fn(&EntitySnapshot<'_>, Action, &Resource) -> bool = always;

    fn check(&self, action: Action, resource: &Resource, when: Condition<'_>) -> bool {
        let entity = self.entity;
        let granted = entity
            .grants()
            .grant(resource.name(), action)
            .is_some_and(|grant| eligible(entity.kind(), grant, resource));
        let in_scope = scope_matches(entity.scope(), resource.scope());
        let condition = when(&entity.snapshot(), action, resource);

        let permitted = granted && in_scope && condition;
        tracing::trace!(
            subject = entity.name(),
            %action,
            resource = resource.name(),
            granted,
            in_scope,
            condition,
            permitted,
            "whitelist check"
        );
        permitted
    }
}

/// Deny-seeking view: true when grant or scope restricts, or the condition denies.
///
/// With default conditions this is the exact complement of
/// [`PermissionsWhitelist`]. A caller condition can force a denial but never
/// lift one.
#[derive(Debug, Clone, Copy)]
pub struct PermissionsBlacklist<'e> {
    entity: &'e PermissibleEntity,
}

impl<'e> PermissionsBlacklist<'e> {
    pub fn new(entity: &'e PermissibleEntity) -> Self {
        Self { entity }
    }
}

impl PermissionsList for PermissionsBlacklist<'_> {
    const DEFAULT_WHEN: fn(&EntitySnapshot<'_>, Action, &Resource) -> bool = never;

    fn check(&self, action: Action, resource: &Resource, when: Condition<'_>) -> bool {
        let entity = self.entity;
        let restricted = match entity.grants().grant(resource.name(), action) {
            None => true,
            Some(grant) => !eligible(entity.kind(), grant, resource),
        };
        let out_of_scope = scope_mismatch(entity.scope(), resource.scope());
        let condition = when(&entity.snapshot(), action, resource);

        let denied = restricted || out_of_scope || condition;
        tracing::trace!(
            subject = entity.name(),
            %action,
            resource = resource.name(),
            restricted,
            out_of_scope,
            condition,
            denied,
            "blacklist check"
        );
        denied
    }
}
