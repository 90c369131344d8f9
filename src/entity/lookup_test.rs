// ABOUTME: Tests for GrantLookup - lookup by name and last-write-wins dedup.
// ABOUTME: Overridden entries keep their first-seen position.

use super::*;
use crate::grant::{Action, GrantSet, GrantType};
use crate::permission::Permission;

#[test]
fn test_lookup_by_name() {
    let lookup = GrantLookup::new(vec![
        Permission::protected("accounts"),
        Permission::read_only("posts"),
    ]);

    assert_eq!(lookup.len(), 2);
    assert_eq!(lookup.get("accounts"), Some(&GrantSet::protected()));
    assert_eq!(lookup.grant("posts", Action::Read), Some(GrantType::Any));
    assert_eq!(lookup.grant("posts", Action::Delete), Some(GrantType::None));
    assert_eq!(lookup.get("comments"), None);
    assert_eq!(lookup.grant("comments", Action::Read), None);
}

#[test]
fn test_last_write_wins_in_first_seen_position() {
    let lookup = GrantLookup::new(vec![
        Permission::protected("accounts"),
        Permission::protected("posts"),
        Permission::all("accounts"),
    ]);

    assert_eq!(lookup.len(), 2);
    assert_eq!(lookup.get("accounts"), Some(&GrantSet::all()));
    assert_eq!(
        lookup.permissions(),
        &[Permission::all("accounts"), Permission::protected("posts")]
    );
}

#[test]
fn test_empty() {
    let lookup = GrantLookup::new(Vec::new());
    assert!(lookup.is_empty());
    assert_eq!(lookup, GrantLookup::default());
}
