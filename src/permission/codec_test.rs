// ABOUTME: Tests for the scope-string codec - parsing, grouping, and errors.
// ABOUTME: Malformed strings must fail with InvalidScopeString.

use super::*;
use crate::error::CodecError;
use crate::grant::{Action, GrantSet, GrantType};

#[test]
fn test_parse_scope_string() {
    let scope: ScopeString = "accounts.update.own".parse().unwrap();
    assert_eq!(
        scope,
        ScopeString::new("accounts", Action::Update, GrantType::Own)
    );
    assert_eq!(scope.to_string(), "accounts.update.own");
}

#[test]
fn test_round_trip_presets() {
    for permission in [
        Permission::all("accounts"),
        Permission::none("accounts"),
        Permission::private("accounts"),
        Permission::protected("accounts"),
        Permission::public("accounts"),
        Permission::read_only("accounts"),
    ] {
        let parsed = parse_permissions_list(&permission.to_permissions_list()).unwrap();
        assert_eq!(parsed, vec![permission]);
    }
}

#[test]
fn test_groups_by_resource_in_first_seen_order() {
    let parsed = parse_permissions_list(&[
        "posts.read.any",
        "accounts.create.any",
        "posts.delete.own",
    ])
    .unwrap();

    assert_eq!(parsed.len(), 2);
    assert_eq!(parsed[0].name(), "posts");
    assert_eq!(parsed[1].name(), "accounts");
    assert_eq!(
        *parsed[0].grants(),
        GrantSet::new(GrantType::None, GrantType::Any, GrantType::None, GrantType::Own)
    );
}

#[test]
fn test_missing_actions_default_to_none() {
    let parsed = parse_permissions_list(&["accounts.read.any"]).unwrap();
    assert_eq!(parsed, vec![Permission::read_only("accounts")]);
}

#[test]
fn test_later_string_wins_for_same_action() {
    let parsed = parse_permissions_list(&["accounts.read.any", "accounts.read.own"]).unwrap();
    assert_eq!(parsed[0].grants().read, GrantType::Own);
}

#[test]
fn test_empty_input() {
    let parsed = parse_permissions_list::<&str>(&[]).unwrap();
    assert!(parsed.is_empty());
}

#[test]
fn test_wrong_segment_count() {
    for bad in ["accounts.read", "accounts.read.any.extra", "accounts", ""] {
        let err = parse_permissions_list(&[bad]).unwrap_err();
        assert!(matches!(err, CodecError::InvalidScopeString { .. }));
        assert_eq!(err.scope(), bad);
    }
}

#[test]
fn test_unknown_tokens() {
    let err = parse_permissions_list(&["accounts.destroy.any"]).unwrap_err();
    assert!(matches!(
        err,
        CodecError::InvalidScopeString { reason: "unknown action", .. }
    ));

    let err = parse_permissions_list(&["accounts.read.all"]).unwrap_err();
    assert!(matches!(
        err,
        CodecError::InvalidScopeString { reason: "unknown grant type", .. }
    ));
}

#[test]
fn test_empty_resource() {
    let err = parse_permissions_list(&[".read.any"]).unwrap_err();
    assert_eq!(err.scope(), ".read.any");
}

#[test]
fn test_error_names_offending_string() {
    let err = parse_permissions_list(&["accounts.read.any", "posts.read.maybe"]).unwrap_err();
    assert_eq!(err.scope(), "posts.read.maybe");
    assert!(err.to_string().contains("posts.read.maybe"));
}

#[test]
fn test_padded_resource_groups_with_plain_resource() {
    let parsed = parse_permissions_list(&[" accounts.read.any", "accounts.create.any"]).unwrap();
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0].name(), "accounts");
    assert_eq!(parsed[0].grants().read, GrantType::Any);

    let scope: ScopeString = "  posts .read.any".parse().unwrap();
    assert_eq!(scope.resource, "posts");
}
