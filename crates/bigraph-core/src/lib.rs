//! # bigraph Core
//!
//! Generic in-memory graph modeling and traversal.
//!
//! A graph holds two disjoint entity kinds — nodes and transitions —
//! connected only through symmetric pairwise [`Relation`]s. The graph is
//! logically bipartite: a node-to-node edge is realized as two relations
//! sharing one transition ([`Graph::create_transition`]). Traversal is
//! depth-bounded and selector-filtered, with one depth unit meaning one
//! full node→transition→node hop, and memoizing caches avoid recomputing
//! relation lookups and traversal results.
//!
//! ## Quick Start
//!
//! ```rust
//! use bigraph_core::{CacheMap, Graph, Relation, TraversalConfig};
//!
//! // Nodes {A, B, C, D}; logical edges A-B, A-C, B-C, C-D.
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
//! // All direct neighbours of C.
//! let adjacent = graph.adjacent_nodes(&"C", &TraversalConfig::default());
//! assert_eq!(adjacent, vec!["A", "B", "D"]);
//!
//! // The same lookup routed through a memoizing cache.
//! let cache: CacheMap<&str, Vec<&str>> =
//!     CacheMap::new(|start: &&str| graph.neighbour_nodes(start, &TraversalConfig::default()));
//! assert_eq!(cache.get(&"C"), vec!["A", "B", "D"]);
//! assert_eq!(cache.get(&"C"), vec!["A", "B", "D"]);
//! assert_eq!(cache.len(), 1);
//! ```
//!
//! The entire crate is single-threaded and synchronous: all operations are
//! in-memory, CPU-bound, and total — traversal cost is bounded purely by
//! the `depth` parameter, and malformed traversal input degrades to an
//! empty result, never an error.

#![warn(missing_docs)]
// Clippy lints configured in workspace Cargo.toml [workspace.lints.clippy]

pub mod cache;
#[cfg(test)]
mod cache_tests;
pub mod config;
#[cfg(test)]
mod config_tests;
pub mod entity;
#[cfg(test)]
mod entity_tests;
pub mod graph;
pub mod group;
#[cfg(test)]
mod group_tests;
pub mod relation;
pub mod traversal;

pub use cache::{CacheMap, CacheValue};
pub use config::{NodeSelector, TransitionSelector, TraversalConfig};
pub use entity::Entity;
pub use graph::{Graph, StrictGraph};
pub use group::Group;
pub use relation::Relation;
pub use traversal::{
    adjacent_entities, adjacent_nodes, neighbour_nodes, EntitySelector, RelationExplorer,
    RelationsProvider,
};
