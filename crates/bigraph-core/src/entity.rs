//! The entity model: the closed node/transition partition.
//!
//! Every value a graph holds is either a node or a transition. The
//! distinction is a compile-time tag, not a runtime capability check, so
//! endpoint extraction is recoverable (`Option`) instead of a cast.

use serde::{Deserialize, Serialize};

/// A graph entity: either a node or a transition.
///
/// `N` and `T` are the caller's node and transition payload types. Identity
/// is plain value equality on the payload; the library never inspects
/// payloads beyond `==`.
///
/// # Example
///
/// ```rust
/// use bigraph_core::Entity;
///
/// let entity: Entity<&str, &str> = Entity::Node("A");
/// assert!(entity.is_node());
/// assert_eq!(entity.as_node(), Some(&"A"));
/// assert_eq!(entity.as_transition(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Entity<N, T> {
    /// A graph vertex.
    Node(N),
    /// An edge-carrier; a logical node-to-node edge is realized as two
    /// relations sharing one transition.
    Transition(T),
}

impl<N, T> Entity<N, T> {
    /// Returns true if this entity is a node.
    #[must_use]
    pub fn is_node(&self) -> bool {
        matches!(self, Entity::Node(_))
    }

    /// Returns true if this entity is a transition.
    #[must_use]
    pub fn is_transition(&self) -> bool {
        matches!(self, Entity::Transition(_))
    }

    /// Returns the node payload, if this entity is a node.
    #[must_use]
    pub fn as_node(&self) -> Option<&N> {
        match self {
            Entity::Node(node) => Some(node),
            Entity::Transition(_) => None,
        }
    }

    /// Returns the transition payload, if this entity is a transition.
    #[must_use]
    pub fn as_transition(&self) -> Option<&T> {
        match self {
            Entity::Node(_) => None,
            Entity::Transition(transition) => Some(transition),
        }
    }

    /// Consumes the entity, returning the node payload if it is a node.
    #[must_use]
    pub fn into_node(self) -> Option<N> {
        match self {
            Entity::Node(node) => Some(node),
            Entity::Transition(_) => None,
        }
    }

    /// Consumes the entity, returning the transition payload if it is a
    /// transition.
    #[must_use]
    pub fn into_transition(self) -> Option<T> {
        match self {
            Entity::Node(_) => None,
            Entity::Transition(transition) => Some(transition),
        }
    }
}
