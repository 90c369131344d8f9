// ABOUTME: Tests for grant types - tokens, presets, and per-action lookup.
// ABOUTME: Verifies the action-to-field mapping stays consistent.

use super::*;

#[test]
fn test_grant_type_tokens() {
    for grant in [GrantType::None, GrantType::Own, GrantType::Any] {
        assert_eq!(GrantType::parse(grant.as_str()), Some(grant));
    }
    assert_eq!(GrantType::parse("ANY"), None);
    assert_eq!(GrantType::parse("all"), None);
    assert_eq!(GrantType::default(), GrantType::None);
}

#[test]
fn test_action_tokens() {
    assert_eq!(Action::parse("create"), Some(Action::Create));
    assert_eq!(Action::parse("read"), Some(Action::Read));
    assert_eq!(Action::parse("update"), Some(Action::Update));
    assert_eq!(Action::parse("delete"), Some(Action::Delete));
    assert_eq!(Action::parse("destroy"), None);
    assert_eq!(Action::parse("view"), None);
    assert_eq!(Action::Delete.to_string(), "delete");
}

#[test]
fn test_grant_type_serialization() {
    assert_eq!(serde_json::to_string(&GrantType::Own).unwrap(), "\"own\"");
    assert_eq!(
        serde_json::from_str::<Action>("\"update\"").unwrap(),
        Action::Update
    );
}

#[test]
fn test_presets() {
    use GrantType::{Any, None, Own};

    assert_eq!(GrantSet::all(), GrantSet::new(Any, Any, Any, Any));
    assert_eq!(GrantSet::none(), GrantSet::new(None, None, None, None));
    assert_eq!(GrantSet::private(), GrantSet::new(Own, Own, Own, Own));
    assert_eq!(GrantSet::protected(), GrantSet::new(Own, Any, Own, Own));
    assert_eq!(GrantSet::public(), GrantSet::new(Any, Any, Any, None));
    assert_eq!(GrantSet::read_only(), GrantSet::new(None, Any, None, None));
    assert_eq!(GrantSet::default(), GrantSet::none());
}

#[test]
fn test_each_field_maps_to_its_own_action() {
    use GrantType::{Any, None, Own};

    // Distinct delete value catches a delete slot wired to another field.
    let set = GrantSet::new(Any, None, Own, Any);
    assert_eq!(set.grant(Action::Create), Any);
    assert_eq!(set.grant(Action::Read), None);
    assert_eq!(set.grant(Action::Update), Own);
    assert_eq!(set.grant(Action::Delete), Any);

    let set = GrantSet::new(None, Any, None, Own);
    assert_eq!(set.delete, Own);
    assert_eq!(set.grant(Action::Delete), Own);
}

#[test]
fn test_with_replaces_one_action() {
    let set = GrantSet::none().with(Action::Update, GrantType::Own);
    assert_eq!(set.update, GrantType::Own);
    assert_eq!(set.create, GrantType::None);
    assert_eq!(set.read, GrantType::None);
    assert_eq!(set.delete, GrantType::None);
}

#[test]
fn test_iter_follows_serialization_order() {
    let pairs: Vec<_> = GrantSet::protected().iter().collect();
    assert_eq!(
        pairs,
        vec![
            (Action::Create, GrantType::Own),
            (Action::Read, GrantType::Any),
            (Action::Update, GrantType::Own),
            (Action::Delete, GrantType::Own),
        ]
    );
}
