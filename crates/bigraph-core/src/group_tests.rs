//! Tests for group selection semantics.

use crate::entity::Entity;
use crate::group::Group;
use crate::relation::Relation;

fn sample_group() -> Group<&'static str, &'static str> {
    let entities = vec![
        Entity::Node("A"),
        Entity::Node("B"),
        Entity::Transition("A-B"),
        // Duplicates are not forbidden.
        Entity::Node("A"),
    ];
    let relations = vec![
        Relation::new(Entity::Node("A"), Entity::Transition("A-B")),
        Relation::new(Entity::Node("B"), Entity::Transition("A-B")),
    ];
    Group::new(entities, relations)
}

#[test]
fn test_select_entities_preserves_order_and_duplicates() {
    let group = sample_group();
    let nodes = group.select_entities(Entity::is_node);
    assert_eq!(
        nodes,
        vec![&Entity::Node("A"), &Entity::Node("B"), &Entity::Node("A")]
    );
}

#[test]
fn test_select_entities_empty_result() {
    let group = sample_group();
    let selected = group.select_entities(|entity| entity.as_node() == Some(&"Z"));
    assert!(selected.is_empty());
}

#[test]
fn test_select_relations_preserves_order() {
    let group = sample_group();
    let all = group.select_relations(|_| true);
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].first(), &Entity::Node("A"));
    assert_eq!(all[1].first(), &Entity::Node("B"));
}

#[test]
fn test_select_entity_relations() {
    let group = sample_group();
    let relations = group.select_entity_relations(&Entity::Node("A"));
    assert_eq!(relations.len(), 1);
    assert!(relations[0].contains(&Entity::Transition("A-B")));

    let relations = group.select_entity_relations(&Entity::Transition("A-B"));
    assert_eq!(relations.len(), 2);
}

#[test]
fn test_relation_endpoints_evaluated_structurally() {
    // A relation may reference entities absent from the entity sequence;
    // endpoint matching never checks group membership.
    let group = Group::new(
        vec![Entity::Node("A")],
        vec![Relation::new(
            Entity::Node("X"),
            Entity::Transition("X-Y"),
        )],
    );
    let relations = group.select_entity_relations(&Entity::Node("X"));
    assert_eq!(relations.len(), 1);
}

#[test]
fn test_group_json_round_trip() {
    let group: Group<String, String> = Group::new(
        vec![
            Entity::Node("A".to_string()),
            Entity::Transition("A-B".to_string()),
        ],
        vec![Relation::new(
            Entity::Node("A".to_string()),
            Entity::Transition("A-B".to_string()),
        )],
    );
    let json = serde_json::to_string(&group).expect("serializes");
    let restored: Group<String, String> = serde_json::from_str(&json).expect("deserializes");
    assert_eq!(restored, group);
}

#[test]
fn test_immutable_selection_returns_new_sequences() {
    let group = sample_group();
    let before = group.entities().len();
    let _ = group.select_entities(|_| false);
    assert_eq!(group.entities().len(), before);
    assert_eq!(group.relations().len(), 2);
}
