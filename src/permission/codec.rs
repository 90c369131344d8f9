// ABOUTME: Policy text codec - parses "<resource>.<action>.<grant>" scope
// ABOUTME: strings and groups them back into Permission values.

use std::collections::HashMap;
use std::str::FromStr;

use super::Permission;
use crate::error::CodecError;
use crate::grant::{Action, GrantSet, GrantType};

/// One decoded `resource.action.grant` triple.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScopeString {
    pub resource: String,
    pub action: Action,
    pub grant: GrantType,
}

impl ScopeString {
    pub fn new(resource: impl Into<String>, action: Action, grant: GrantType) -> Self {
        Self {
            resource: resource.into(),
            action,
            grant,
        }
    }
}

impl FromStr for ScopeString {
    type Err = CodecError;

    fn from_str(scope: &str) -> Result<Self, Self::Err> {
        let segments: Vec<&str> = scope.split('.').collect();
        let [resource, action, grant] = segments[..] else {
            return Err(CodecError::invalid(scope, "expected resource.action.grant"));
        };

        let resource = resource.trim();
        if resource.is_empty() {
            return Err(CodecError::invalid(scope, "empty resource name"));
        }
        let action =
            Action::parse(action).ok_or_else(|| CodecError::invalid(scope, "unknown action"))?;
        let grant =
            GrantType::parse(grant).ok_or_else(|| CodecError::invalid(scope, "unknown grant type"))?;

        Ok(Self::new(resource, action, grant))
    }
}

impl std::fmt::Display for ScopeString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.resource, self.action, self.grant)
    }
}

/// Rebuild permissions from a list of scope strings.
///
/// Strings are grouped by resource. Actions a resource never mentions
/// default to `none`; if an action is mentioned twice the later string wins.
/// Output follows the order in which resources are first seen.
///
/// Fails on the first string that is not a valid scope string.
pub fn parse_permissions_list<S: AsRef<str>>(
    scope_strings: &[S],
) -> Result<Vec<Permission>, CodecError> {
    let mut order: Vec<(String, GrantSet)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for raw in scope_strings {
        let scope: ScopeString = raw.as_ref().parse().inspect_err(|e| {
            tracing::warn!(error = %e, "rejected scope string");
        })?;

        let slot = *index.entry(scope.resource.clone()).or_insert_with(|| {
            order.push((scope.resource.clone(), GrantSet::none()));
            order.len() - 1
        });
        let grants = &mut order[slot].1;
        *grants = grants.with(scope.action, scope.grant);
    }

    Ok(order
        .into_iter()
        .map(|(resource, grants)| Permission::new(resource, grants))
        .collect())
}
