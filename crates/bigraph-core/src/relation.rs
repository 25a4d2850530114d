//! Relations: the atomic connectivity fact of the model.
//!
//! A relation is an unordered pair of entities. Construction order is
//! retained for display and typed access, but matching predicates may be
//! applied in either orientation (`verify_unordered`) — relation endpoint
//! order carries no adjacency semantics.

use serde::{Deserialize, Serialize};

use crate::entity::Entity;

/// An unordered pair of entities.
///
/// All operations are pure reads; a relation is immutable once built.
///
/// # Example
///
/// ```rust
/// use bigraph_core::{Entity, Relation};
///
/// let relation: Relation<&str, &str> =
///     Relation::new(Entity::Node("A"), Entity::Transition("A-B"));
/// assert!(relation.contains(&Entity::Node("A")));
/// assert!(relation.contains(&Entity::Transition("A-B")));
/// assert!(!relation.contains(&Entity::Node("B")));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relation<N, T> {
    first: Entity<N, T>,
    second: Entity<N, T>,
}

impl<N, T> Relation<N, T> {
    /// Creates a relation between two entities, retaining construction
    /// order for display and typed access.
    #[must_use]
    pub fn new(first: Entity<N, T>, second: Entity<N, T>) -> Self {
        Self { first, second }
    }

    /// Returns the first endpoint, in construction order.
    #[must_use]
    pub fn first(&self) -> &Entity<N, T> {
        &self.first
    }

    /// Returns the second endpoint, in construction order.
    #[must_use]
    pub fn second(&self) -> &Entity<N, T> {
        &self.second
    }

    /// Returns the first endpoint satisfying `selector`, checking the
    /// first endpoint before the second. If both satisfy it, the first
    /// endpoint wins.
    #[must_use]
    pub fn select<P>(&self, selector: P) -> Option<&Entity<N, T>>
    where
        P: Fn(&Entity<N, T>) -> bool,
    {
        if selector(&self.first) {
            return Some(&self.first);
        }
        if selector(&self.second) {
            return Some(&self.second);
        }
        None
    }

    /// Same as [`select`](Self::select), but checks the second endpoint
    /// before the first.
    #[must_use]
    pub fn select_inverted<P>(&self, selector: P) -> Option<&Entity<N, T>>
    where
        P: Fn(&Entity<N, T>) -> bool,
    {
        if selector(&self.second) {
            return Some(&self.second);
        }
        if selector(&self.first) {
            return Some(&self.first);
        }
        None
    }

    /// Directional, ordered match: true iff `first_predicate` accepts the
    /// first endpoint and `second_predicate` accepts the second.
    #[must_use]
    pub fn verify<P1, P2>(&self, first_predicate: P1, second_predicate: P2) -> bool
    where
        P1: Fn(&Entity<N, T>) -> bool,
        P2: Fn(&Entity<N, T>) -> bool,
    {
        first_predicate(&self.first) && second_predicate(&self.second)
    }

    /// [`verify`](Self::verify) with the endpoints swapped.
    #[must_use]
    pub fn verify_inverted<P1, P2>(&self, first_predicate: P1, second_predicate: P2) -> bool
    where
        P1: Fn(&Entity<N, T>) -> bool,
        P2: Fn(&Entity<N, T>) -> bool,
    {
        first_predicate(&self.second) && second_predicate(&self.first)
    }

    /// Accepts either endpoint ordering: true iff `verify` or
    /// `verify_inverted` holds. This is the matching predicate the
    /// traversal engine uses, since endpoint order is not directional for
    /// adjacency purposes.
    #[must_use]
    pub fn verify_unordered<P1, P2>(&self, first_predicate: P1, second_predicate: P2) -> bool
    where
        P1: Fn(&Entity<N, T>) -> bool,
        P2: Fn(&Entity<N, T>) -> bool,
    {
        self.verify(&first_predicate, &second_predicate)
            || self.verify_inverted(&first_predicate, &second_predicate)
    }
}

impl<N: PartialEq, T: PartialEq> Relation<N, T> {
    /// Returns true iff `entity` equals either endpoint.
    #[must_use]
    pub fn contains(&self, entity: &Entity<N, T>) -> bool {
        self.first == *entity || self.second == *entity
    }

    /// Returns true iff either endpoint is a node equal to `node`.
    #[must_use]
    pub fn contains_node(&self, node: &N) -> bool {
        self.first.as_node() == Some(node) || self.second.as_node() == Some(node)
    }

    /// Returns true iff either endpoint is a transition equal to
    /// `transition`.
    #[must_use]
    pub fn contains_transition(&self, transition: &T) -> bool {
        self.first.as_transition() == Some(transition)
            || self.second.as_transition() == Some(transition)
    }
}
