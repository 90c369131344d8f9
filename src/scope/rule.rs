// ABOUTME: Defines scope names and the wildcard-vs-named matching rule.
// ABOUTME: Every permission check runs one of these two predicates.

/// Scope name helpers.
///
/// A scope is a plain string. [`Scope::GLOBAL`] matches every resource scope;
/// any other value, including [`Scope::NONE`], matches only itself.
pub struct Scope;

impl Scope {
    /// The universal scope.
    pub const GLOBAL: &'static str = "*";

    /// The empty scope. Matches only resources that are also unscoped.
    pub const NONE: &'static str = "";

    /// Normalize a named scope.
    pub fn named(name: &str) -> String {
        name.trim().to_string()
    }

    /// Whether a scope is the global wildcard.
    pub fn is_global(scope: &str) -> bool {
        scope == Self::GLOBAL
    }
}

/// Permit-path rule: the entity's scope covers the resource's scope.
pub fn scope_matches(entity_scope: &str, resource_scope: &str) -> bool {
    Scope::is_global(entity_scope) || entity_scope == resource_scope
}

/// Deny-path rule: the entity's scope affirmatively excludes the resource.
///
/// An empty entity scope is not a wildcard, so it denies every resource
/// scope except the empty one.
pub fn scope_mismatch(entity_scope: &str, resource_scope: &str) -> bool {
    !Scope::is_global(entity_scope) && entity_scope != resource_scope
}
