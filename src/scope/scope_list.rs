// ABOUTME: Defines ScopeList - an allow/reject list of scope names.
// ABOUTME: Supports the "*" aggregate for all/only/except style lists.

use serde::{Deserialize, Serialize};

use super::Scope;

/// A list of allowed and rejected scopes.
///
/// An explicit entry always overrides the aggregate: a scope is allowed when
/// it is listed as allowed, or when everything is allowed and it is not
/// listed as rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeList {
    allowed: Vec<String>,
    rejected: Vec<String>,
}

impl ScopeList {
    /// Create a list from explicit allowed and rejected scopes.
    pub fn new<A, R>(allowed: A, rejected: R) -> Self
    where
        A: IntoIterator,
        A::Item: AsRef<str>,
        R: IntoIterator,
        R::Item: AsRef<str>,
    {
        let mut list = Self {
            allowed: Vec::new(),
            rejected: Vec::new(),
        };
        for scope in allowed {
            push_unique(&mut list.allowed, Scope::named(scope.as_ref()));
        }
        for scope in rejected {
            push_unique(&mut list.rejected, Scope::named(scope.as_ref()));
        }
        list
    }

    /// Allow every scope.
    pub fn all() -> Self {
        Self::new([Scope::GLOBAL], std::iter::empty::<&str>())
    }

    /// Allow only the listed scopes.
    pub fn only<I>(scopes: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self::new(scopes, [Scope::GLOBAL])
    }

    /// Allow every scope except the listed ones.
    pub fn except<I>(scopes: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        Self::new([Scope::GLOBAL], scopes)
    }

    /// The allowed scopes, including `*` when everything is allowed.
    pub fn allowed_scopes(&self) -> &[String] {
        &self.allowed
    }

    /// The rejected scopes, including `*` when everything else is rejected.
    pub fn rejected_scopes(&self) -> &[String] {
        &self.rejected
    }

    /// Allow a scope, removing any rejection of it.
    pub fn allow(&mut self, scope: &str) {
        let scope = Scope::named(scope);
        self.rejected.retain(|s| *s != scope);
        if !self.allows_aggregate() {
            push_unique(&mut self.allowed, scope);
        }
    }

    /// Reject a scope, removing any explicit allowance of it.
    pub fn reject(&mut self, scope: &str) {
        let scope = Scope::named(scope);
        self.allowed.retain(|s| *s != scope);
        if self.allows_aggregate() {
            push_unique(&mut self.rejected, scope);
        }
    }

    /// Whether the list allows a scope.
    pub fn allows(&self, scope: &str) -> bool {
        let scope = scope.trim();
        self.allowed.iter().any(|s| s == scope)
            || (self.allows_aggregate() && !self.rejected.iter().any(|s| s == scope))
    }

    /// Whether the list rejects a scope.
    pub fn rejects(&self, scope: &str) -> bool {
        !self.allows(scope)
    }

    fn allows_aggregate(&self) -> bool {
        self.allowed.iter().any(|s| Scope::is_global(s))
    }
}

impl Default for ScopeList {
    fn default() -> Self {
        Self::all()
    }
}

fn push_unique(list: &mut Vec<String>, scope: String) {
    if !list.contains(&scope) {
        list.push(scope);
    }
}
