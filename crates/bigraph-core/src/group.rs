//! Groups: immutable entity/relation collections with filter selection.

use serde::{Deserialize, Serialize};

use crate::entity::Entity;
use crate::relation::Relation;

/// An ordered sequence of entities plus an ordered sequence of relations.
///
/// A group is immutable after construction; every selection operation
/// returns a fresh sequence, preserves the original relative order, and
/// never deduplicates. Relation endpoints are evaluated structurally — a
/// relation may reference entities absent from the group's entity sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group<N, T> {
    entities: Vec<Entity<N, T>>,
    relations: Vec<Relation<N, T>>,
}

impl<N, T> Group<N, T> {
    /// Creates a group from entity and relation sequences.
    #[must_use]
    pub fn new(entities: Vec<Entity<N, T>>, relations: Vec<Relation<N, T>>) -> Self {
        Self {
            entities,
            relations,
        }
    }

    /// Returns all entities, in construction order.
    #[must_use]
    pub fn entities(&self) -> &[Entity<N, T>] {
        &self.entities
    }

    /// Returns all relations, in construction order.
    #[must_use]
    pub fn relations(&self) -> &[Relation<N, T>] {
        &self.relations
    }

    /// Returns the entities satisfying `selector`, in original order.
    #[must_use]
    pub fn select_entities<P>(&self, selector: P) -> Vec<&Entity<N, T>>
    where
        P: Fn(&Entity<N, T>) -> bool,
    {
        self.entities
            .iter()
            .filter(|entity| selector(entity))
            .collect()
    }

    /// Returns the relations satisfying `selector`, in original order.
    #[must_use]
    pub fn select_relations<P>(&self, selector: P) -> Vec<&Relation<N, T>>
    where
        P: Fn(&Relation<N, T>) -> bool,
    {
        self.relations
            .iter()
            .filter(|relation| selector(relation))
            .collect()
    }
}

impl<N: PartialEq, T: PartialEq> Group<N, T> {
    /// Returns every relation with `entity` as an endpoint.
    #[must_use]
    pub fn select_entity_relations(&self, entity: &Entity<N, T>) -> Vec<&Relation<N, T>> {
        self.select_relations(|relation| relation.contains(entity))
    }
}
