// ABOUTME: Tests for Resource - constructors, ownership, and serialization.
// ABOUTME: Collections must never satisfy an ownership check.

use super::*;
use crate::entity::Actor;
use crate::permission::Permission;

#[test]
fn test_collection_defaults_to_global_scope() {
    let accounts = Resource::collection("accounts");
    assert_eq!(accounts.name(), "accounts");
    assert_eq!(accounts.scope(), "*");
    assert_eq!(accounts.id(), None);
    assert_eq!(accounts.owner(), None);
    assert!(!accounts.is_instance());
}

#[test]
fn test_instance() {
    let account = Resource::instance("accounts", "abcde", "bob").in_scope("tenant-a");
    assert_eq!(account.name(), "accounts");
    assert_eq!(account.scope(), "tenant-a");
    assert_eq!(account.id(), Some("abcde"));
    assert_eq!(account.owner(), Some("bob"));
    assert!(account.is_instance());
}

#[test]
fn test_instance_of_copies_collection() {
    let accounts = Resource::collection("accounts").in_scope("tenant-a");
    let billy = Actor::new("admins", "billy", vec![Permission::all("accounts")]);

    let account = accounts.instance_of("12345", &billy);
    assert_eq!(
        account,
        Resource::Instance(ResourceInstance {
            name: "accounts".into(),
            scope: "tenant-a".into(),
            id: "12345".into(),
            owner: "billy".into(),
        })
    );
}

#[test]
fn test_only_instances_are_owned() {
    let accounts = Resource::collection("accounts");
    let account = Resource::instance("accounts", "abcde", "bob");

    assert!(account.is_owned_by("bob"));
    assert!(!account.is_owned_by("billy"));
    assert!(!accounts.is_owned_by("bob"));
    assert!(!accounts.is_owned_by(""));
}

#[test]
fn test_serialization_is_tagged() {
    let account = Resource::instance("accounts", "abcde", "bob");
    let json = serde_json::to_value(&account).unwrap();
    assert_eq!(json["kind"], "instance");
    assert_eq!(json["owner"], "bob");

    let parsed: Resource =
        serde_json::from_str(r#"{"kind":"collection","name":"posts","scope":"*"}"#).unwrap();
    assert_eq!(parsed, Resource::collection("posts"));
}
