//! Depth-bounded, selector-filtered bipartite traversal.
//!
//! The engine has no access to any graph type: relation lookups arrive as
//! caller-supplied pure functions, so a [`Graph`](crate::Graph) and a
//! [`CacheMap`](crate::CacheMap)-backed lookup are equally valid
//! collaborators. One depth unit is one full node→transition→node hop.
//!
//! # Example
//!
//! ```rust
//! use bigraph_core::{Graph, Relation, TraversalConfig};
//!
//! let nodes = vec!["A", "B", "C", "D"];
//! let transitions = vec!["A-B", "A-C", "B-C", "C-D"];
//! let relations: Vec<Relation<&str, &str>> =
//!     [("A", "B", "A-B"), ("A", "C", "A-C"), ("B", "C", "B-C"), ("C", "D", "C-D")]
//!         .into_iter()
//!         .flat_map(|(first, second, transition)| {
//!             Graph::create_transition(&first, &second, &transition)
//!         })
//!         .collect();
//! let graph = Graph::new(nodes, transitions, relations);
//!
//! let adjacent = graph.adjacent_nodes(&"C", &TraversalConfig::default());
//! assert_eq!(adjacent, vec!["A", "B", "D"]);
//! ```

use tracing::trace;

use crate::config::{TraversalConfig, DEPTH_MIN, DEPTH_MIN_BOUND};
use crate::entity::Entity;
use crate::relation::Relation;

/// A caller-supplied filter over entities.
pub type EntitySelector<'a, N, T> = Box<dyn Fn(&Entity<N, T>) -> bool + 'a>;

/// A caller-supplied pure lookup from an entity to its incident relations.
pub type RelationsProvider<'a, N, T> = Box<dyn Fn(&Entity<N, T>) -> Vec<Relation<N, T>> + 'a>;

/// Configuration for one hop of traversal: a relation lookup plus source
/// and target selectors. A pure, stateless value.
pub struct RelationExplorer<'a, N, T> {
    relations_of: RelationsProvider<'a, N, T>,
    source_selector: EntitySelector<'a, N, T>,
    target_selector: EntitySelector<'a, N, T>,
}

impl<'a, N, T> RelationExplorer<'a, N, T> {
    /// Creates an explorer from a relation lookup and a source/target
    /// selector pair.
    pub fn new<R, S, G>(relations_of: R, source_selector: S, target_selector: G) -> Self
    where
        R: Fn(&Entity<N, T>) -> Vec<Relation<N, T>> + 'a,
        S: Fn(&Entity<N, T>) -> bool + 'a,
        G: Fn(&Entity<N, T>) -> bool + 'a,
    {
        Self {
            relations_of: Box::new(relations_of),
            source_selector: Box::new(source_selector),
            target_selector: Box::new(target_selector),
        }
    }
}

/// Generic frontier expansion from a starting entity.
///
/// Explorers are applied in sequence within the same depth iteration, each
/// consuming the frontier the previous one produced, so the explorer list
/// defines what one depth unit means. Per iteration and explorer the
/// frontier is replaced by: every relation incident to a frontier entity,
/// kept when its endpoints match the explorer's source/target selectors in
/// either order, reduced to the endpoint satisfying the target selector
/// (first-endpoint priority), deduplicated preserving discovery order.
///
/// A `depth` below [`DEPTH_MIN`](crate::config::DEPTH_MIN) yields an empty
/// result, and the starting entity is never part of the result — adjacency
/// means entities beyond the start, never the start itself. Malformed input
/// degrades to an empty result; traversal is total.
#[must_use]
pub fn adjacent_entities<N, T>(
    start: &Entity<N, T>,
    depth: usize,
    explorers: &[RelationExplorer<'_, N, T>],
) -> Vec<Entity<N, T>>
where
    N: Clone + PartialEq,
    T: Clone + PartialEq,
{
    if depth < DEPTH_MIN {
        return Vec::new();
    }
    let mut remaining = depth;
    let mut frontier = vec![start.clone()];
    while remaining > DEPTH_MIN_BOUND && !frontier.is_empty() {
        for explorer in explorers {
            let mut next: Vec<Entity<N, T>> = Vec::new();
            for entity in &frontier {
                for relation in (explorer.relations_of)(entity) {
                    if !relation
                        .verify_unordered(&explorer.source_selector, &explorer.target_selector)
                    {
                        continue;
                    }
                    if let Some(found) = relation.select(&explorer.target_selector) {
                        if !next.contains(found) {
                            next.push(found.clone());
                        }
                    }
                }
            }
            frontier = next;
        }
        remaining -= 1;
        trace!(remaining, frontier = frontier.len(), "frontier expanded");
    }
    // The start re-enters the frontier through its own incident relations;
    // it stays during expansion (reachability through it must survive) and
    // is dropped from the final result only.
    frontier.retain(|entity| entity != start);
    frontier
}

/// Nodes reachable from `start` within the configured number of full
/// node→transition→node hops, excluding `start` itself.
///
/// Builds two explorers — node relations with (node selector → transition
/// selector), then transition relations with (transition selector → node
/// selector) — so each depth unit crosses one transition, matching the
/// bipartite structure.
#[must_use]
pub fn adjacent_nodes<N, T, NR, TR>(
    start: &N,
    config: &TraversalConfig<'_, N, T>,
    node_relations_of: NR,
    transition_relations_of: TR,
) -> Vec<N>
where
    N: Clone + PartialEq,
    T: Clone + PartialEq,
    NR: Fn(&N) -> Vec<Relation<N, T>>,
    TR: Fn(&T) -> Vec<Relation<N, T>>,
{
    let node_matches = |entity: &Entity<N, T>| match entity {
        Entity::Node(node) => (config.node_selector)(node),
        Entity::Transition(_) => false,
    };
    let transition_matches = |entity: &Entity<N, T>| match entity {
        Entity::Node(_) => false,
        Entity::Transition(transition) => (config.transition_selector)(transition),
    };
    let node_relations = |entity: &Entity<N, T>| match entity {
        Entity::Node(node) => node_relations_of(node),
        Entity::Transition(_) => Vec::new(),
    };
    let transition_relations = |entity: &Entity<N, T>| match entity {
        Entity::Node(_) => Vec::new(),
        Entity::Transition(transition) => transition_relations_of(transition),
    };
    let explorers = [
        RelationExplorer::new(node_relations, node_matches, transition_matches),
        RelationExplorer::new(transition_relations, transition_matches, node_matches),
    ];
    adjacent_entities(&Entity::Node(start.clone()), config.depth, &explorers)
        .into_iter()
        .filter_map(Entity::into_node)
        .collect()
}

/// Same as [`adjacent_nodes`], with an explicit filter dropping any node
/// equal to `start`.
///
/// The filter is defensive: cyclic relation chains can route back to the
/// start within the depth budget, and the result must never report the
/// start as its own neighbour.
#[must_use]
pub fn neighbour_nodes<N, T, NR, TR>(
    start: &N,
    config: &TraversalConfig<'_, N, T>,
    node_relations_of: NR,
    transition_relations_of: TR,
) -> Vec<N>
where
    N: Clone + PartialEq,
    T: Clone + PartialEq,
    NR: Fn(&N) -> Vec<Relation<N, T>>,
    TR: Fn(&T) -> Vec<Relation<N, T>>,
{
    let mut nodes = adjacent_nodes(start, config, node_relations_of, transition_relations_of);
    nodes.retain(|node| node != start);
    nodes
}
