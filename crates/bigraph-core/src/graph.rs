//! Graphs: groups whose entities partition into nodes and transitions.
//!
//! A well-formed graph is logically bipartite: every relation connects one
//! node to one transition, and a node-to-node edge is two relations sharing
//! a transition (see [`Graph::create_transition`]). That is a design
//! convention, not a checked constraint — the base graph never validates
//! it.

use serde::Serialize;

use crate::config::TraversalConfig;
use crate::entity::Entity;
use crate::group::Group;
use crate::relation::Relation;
use crate::traversal;

/// A group specialized so entities split into a nodes sequence and a
/// transitions sequence. Immutable after construction.
///
/// # Example
///
/// ```rust
/// use bigraph_core::{Graph, Relation};
///
/// let transition = "A-B";
/// let relations: Vec<Relation<&str, &str>> =
///     Graph::create_transition(&"A", &"B", &transition).into();
/// let graph = Graph::new(vec!["A", "B"], vec![transition], relations);
///
/// assert!(graph.relations().iter().all(|r| r.contains_transition(&transition)));
/// assert_eq!(graph.select_node_relations(&"A").len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Graph<N, T> {
    nodes: Vec<N>,
    transitions: Vec<T>,
    group: Group<N, T>,
}

impl<N, T> Graph<N, T>
where
    N: Clone + PartialEq,
    T: Clone + PartialEq,
{
    /// Creates a graph from node, transition, and relation sequences. The
    /// underlying group's entity sequence is the nodes followed by the
    /// transitions, in the given order.
    #[must_use]
    pub fn new(nodes: Vec<N>, transitions: Vec<T>, relations: Vec<Relation<N, T>>) -> Self {
        let entities = nodes
            .iter()
            .cloned()
            .map(Entity::Node)
            .chain(transitions.iter().cloned().map(Entity::Transition))
            .collect();
        Self {
            nodes,
            transitions,
            group: Group::new(entities, relations),
        }
    }

    /// Returns all nodes, in construction order.
    #[must_use]
    pub fn nodes(&self) -> &[N] {
        &self.nodes
    }

    /// Returns all transitions, in construction order.
    #[must_use]
    pub fn transitions(&self) -> &[T] {
        &self.transitions
    }

    /// Returns all relations, in construction order.
    #[must_use]
    pub fn relations(&self) -> &[Relation<N, T>] {
        self.group.relations()
    }

    /// Returns the underlying group view (nodes then transitions).
    #[must_use]
    pub fn group(&self) -> &Group<N, T> {
        &self.group
    }

    /// Returns the nodes satisfying `selector`, in original order.
    #[must_use]
    pub fn select_nodes<P>(&self, selector: P) -> Vec<&N>
    where
        P: Fn(&N) -> bool,
    {
        self.nodes.iter().filter(|node| selector(node)).collect()
    }

    /// Returns the transitions satisfying `selector`, in original order.
    #[must_use]
    pub fn select_transitions<P>(&self, selector: P) -> Vec<&T>
    where
        P: Fn(&T) -> bool,
    {
        self.transitions
            .iter()
            .filter(|transition| selector(transition))
            .collect()
    }

    /// Returns every relation with `node` as an endpoint.
    #[must_use]
    pub fn select_node_relations(&self, node: &N) -> Vec<&Relation<N, T>> {
        self.group
            .select_relations(|relation| relation.contains_node(node))
    }

    /// Returns every relation with `transition` as an endpoint.
    #[must_use]
    pub fn select_transition_relations(&self, transition: &T) -> Vec<&Relation<N, T>> {
        self.group
            .select_relations(|relation| relation.contains_transition(transition))
    }

    /// The canonical logical-edge constructor: returns the two relations
    /// `(first_node, transition)` and `(second_node, transition)` realizing
    /// one node-to-node edge through an explicit transition.
    #[must_use]
    pub fn create_transition(first_node: &N, second_node: &N, transition: &T) -> [Relation<N, T>; 2] {
        [
            Relation::new(
                Entity::Node(first_node.clone()),
                Entity::Transition(transition.clone()),
            ),
            Relation::new(
                Entity::Node(second_node.clone()),
                Entity::Transition(transition.clone()),
            ),
        ]
    }

    /// Runs [`traversal::adjacent_nodes`] with this graph's own relation
    /// lookups.
    #[must_use]
    pub fn adjacent_nodes(&self, start: &N, config: &TraversalConfig<'_, N, T>) -> Vec<N> {
        traversal::adjacent_nodes(
            start,
            config,
            |node| self.select_node_relations(node).into_iter().cloned().collect(),
            |transition| {
                self.select_transition_relations(transition)
                    .into_iter()
                    .cloned()
                    .collect()
            },
        )
    }

    /// Runs [`traversal::neighbour_nodes`] with this graph's own relation
    /// lookups.
    #[must_use]
    pub fn neighbour_nodes(&self, start: &N, config: &TraversalConfig<'_, N, T>) -> Vec<N> {
        traversal::neighbour_nodes(
            start,
            config,
            |node| self.select_node_relations(node).into_iter().cloned().collect(),
            |transition| {
                self.select_transition_relations(transition)
                    .into_iter()
                    .cloned()
                    .collect()
            },
        )
    }
}

/// A graph bundling fixed default node/transition selectors, so "the" nodes
/// and transitions can be retrieved without repeating the selector at each
/// call site. No structural invariant beyond [`Graph`]'s.
pub struct StrictGraph<'a, N, T> {
    graph: Graph<N, T>,
    node_selector: Box<dyn Fn(&N) -> bool + 'a>,
    transition_selector: Box<dyn Fn(&T) -> bool + 'a>,
}

impl<'a, N, T> StrictGraph<'a, N, T>
where
    N: Clone + PartialEq,
    T: Clone + PartialEq,
{
    /// Wraps a graph with accept-all default selectors.
    #[must_use]
    pub fn new(graph: Graph<N, T>) -> Self {
        Self {
            graph,
            node_selector: Box::new(|_| true),
            transition_selector: Box::new(|_| true),
        }
    }

    /// Wraps a graph with the given bundled selectors.
    #[must_use]
    pub fn with_selectors<PN, PT>(
        graph: Graph<N, T>,
        node_selector: PN,
        transition_selector: PT,
    ) -> Self
    where
        PN: Fn(&N) -> bool + 'a,
        PT: Fn(&T) -> bool + 'a,
    {
        Self {
            graph,
            node_selector: Box::new(node_selector),
            transition_selector: Box::new(transition_selector),
        }
    }

    /// Returns the wrapped graph.
    #[must_use]
    pub fn graph(&self) -> &Graph<N, T> {
        &self.graph
    }

    /// Returns the nodes accepted by the bundled node selector.
    #[must_use]
    pub fn select_nodes(&self) -> Vec<&N> {
        self.graph.select_nodes(&self.node_selector)
    }

    /// Returns the transitions accepted by the bundled transition selector.
    #[must_use]
    pub fn select_transitions(&self) -> Vec<&T> {
        self.graph.select_transitions(&self.transition_selector)
    }
}
