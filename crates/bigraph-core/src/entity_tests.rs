//! Tests for the Entity tagged variant.

use crate::entity::Entity;

#[test]
fn test_entity_node_accessors() {
    let entity: Entity<&str, &str> = Entity::Node("A");
    assert!(entity.is_node());
    assert!(!entity.is_transition());
    assert_eq!(entity.as_node(), Some(&"A"));
    assert_eq!(entity.as_transition(), None);
}

#[test]
fn test_entity_transition_accessors() {
    let entity: Entity<&str, &str> = Entity::Transition("A-B");
    assert!(entity.is_transition());
    assert!(!entity.is_node());
    assert_eq!(entity.as_transition(), Some(&"A-B"));
    assert_eq!(entity.as_node(), None);
}

#[test]
fn test_entity_into_node() {
    let entity: Entity<String, String> = Entity::Node("A".to_string());
    assert_eq!(entity.into_node(), Some("A".to_string()));

    let entity: Entity<String, String> = Entity::Transition("A-B".to_string());
    assert_eq!(entity.into_node(), None);
}

#[test]
fn test_entity_into_transition() {
    let entity: Entity<String, String> = Entity::Transition("A-B".to_string());
    assert_eq!(entity.into_transition(), Some("A-B".to_string()));

    let entity: Entity<String, String> = Entity::Node("A".to_string());
    assert_eq!(entity.into_transition(), None);
}

#[test]
fn test_entity_equality_is_tag_and_value() {
    // Same payload under different tags never compares equal.
    let node: Entity<&str, &str> = Entity::Node("X");
    let transition: Entity<&str, &str> = Entity::Transition("X");
    assert_ne!(node, transition);
    assert_eq!(node, Entity::Node("X"));
}
