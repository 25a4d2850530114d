//! The named sample domain: nodes and transitions identified by name.
//!
//! Transition labels encode the logical edge they realize, as
//! `"<first>-<second>"`. Malformed labels and labels referencing unknown
//! nodes are rejected-input errors, surfaced to the caller — never
//! silently skipped.

use serde::Serialize;
use thiserror::Error;

use bigraph_core::{Graph, Relation, StrictGraph};

/// Separator between the two node names inside a transition label.
pub const TRANSITION_DELIMITER: char = '-';

/// Smallest supported named-node set.
pub const NODE_SET_MIN: usize = 1;

/// Largest supported named-node set: single letters A through Y.
pub const NODE_SET_MAX: usize = 25;

/// Errors for invalid sample-graph construction input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SampleError {
    /// Requested named-node set size outside the supported range.
    #[error("node set size must be {NODE_SET_MIN} <= size <= {NODE_SET_MAX}, provided {0}")]
    InvalidSize(usize),
    /// Transition label not of the form `<first>-<second>`.
    #[error("malformed transition label: {0:?}")]
    MalformedLabel(String),
    /// Transition label referencing a node absent from the node set.
    #[error("transition label references unknown node: {0:?}")]
    UnknownNode(String),
    /// Lookup of a node that must exist.
    #[error("no node named {0:?}")]
    NodeNotFound(String),
}

/// A graph vertex identified by name. Serializes as the bare name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NamedNode {
    name: String,
}

impl NamedNode {
    /// Creates a node with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the node name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// An edge-carrier identified by the `"<first>-<second>"` label of the
/// logical edge it realizes. Serializes as the bare label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct NamedTransition {
    name: String,
}

impl NamedTransition {
    /// Creates a transition with the given label.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the transition label.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Builds the named-node set "A", "B", … of the given size.
pub fn named_nodes(size: usize) -> Result<Vec<NamedNode>, SampleError> {
    if !(NODE_SET_MIN..=NODE_SET_MAX).contains(&size) {
        return Err(SampleError::InvalidSize(size));
    }
    Ok(('A'..='Y')
        .take(size)
        .map(|letter| NamedNode::new(letter.to_string()))
        .collect())
}

/// Formats a transition label for the edge between two node names.
#[must_use]
pub fn transition_label(first: &str, second: &str) -> String {
    format!("{first}{TRANSITION_DELIMITER}{second}")
}

/// Builds a strict graph over `size` named nodes, with one logical edge
/// per `"<first>-<second>"` transition label.
pub fn build_graph(
    size: usize,
    labels: &[String],
) -> Result<StrictGraph<'static, NamedNode, NamedTransition>, SampleError> {
    let nodes = named_nodes(size)?;
    let transitions: Vec<NamedTransition> = labels
        .iter()
        .map(|label| NamedTransition::new(label.clone()))
        .collect();

    let mut relations: Vec<Relation<NamedNode, NamedTransition>> = Vec::new();
    for transition in &transitions {
        let (first, second) = split_label(transition.name())?;
        let first_node = resolve_endpoint(&nodes, first)?;
        let second_node = resolve_endpoint(&nodes, second)?;
        relations.extend(Graph::create_transition(first_node, second_node, transition));
    }

    Ok(StrictGraph::new(Graph::new(nodes, transitions, relations)))
}

/// The sample graph of the original demonstration: nodes {A, B, C, D},
/// logical edges A-B, A-C, B-C, C-D.
pub fn build_default_graph(
    size: usize,
) -> Result<StrictGraph<'static, NamedNode, NamedTransition>, SampleError> {
    let labels = vec![
        transition_label("A", "B"),
        transition_label("A", "C"),
        transition_label("B", "C"),
        transition_label("C", "D"),
    ];
    build_graph(size, &labels)
}

/// Finds the node with the given name, which must exist.
pub fn node_by_name<'a>(nodes: &'a [NamedNode], name: &str) -> Result<&'a NamedNode, SampleError> {
    nodes
        .iter()
        .find(|node| node.name() == name)
        .ok_or_else(|| SampleError::NodeNotFound(name.to_string()))
}

fn resolve_endpoint<'a>(nodes: &'a [NamedNode], name: &str) -> Result<&'a NamedNode, SampleError> {
    nodes
        .iter()
        .find(|node| node.name() == name)
        .ok_or_else(|| SampleError::UnknownNode(name.to_string()))
}

fn split_label(label: &str) -> Result<(&str, &str), SampleError> {
    match label.split_once(TRANSITION_DELIMITER) {
        Some((first, second)) if !first.is_empty() && !second.is_empty() => Ok((first, second)),
        _ => Err(SampleError::MalformedLabel(label.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_nodes_within_range() {
        let nodes = named_nodes(4).unwrap();
        let names: Vec<&str> = nodes.iter().map(NamedNode::name).collect();
        assert_eq!(names, vec!["A", "B", "C", "D"]);
    }

    #[test]
    fn test_named_nodes_size_out_of_range() {
        assert_eq!(named_nodes(0), Err(SampleError::InvalidSize(0)));
        assert_eq!(named_nodes(26), Err(SampleError::InvalidSize(26)));
        assert!(named_nodes(25).is_ok());
    }

    #[test]
    fn test_build_default_graph() {
        let strict = build_default_graph(4).unwrap();
        assert_eq!(strict.select_nodes().len(), 4);
        assert_eq!(strict.select_transitions().len(), 4);
        // Two relations per logical edge.
        assert_eq!(strict.graph().relations().len(), 8);
    }

    #[test]
    fn test_malformed_label_is_an_error() {
        let labels = vec!["AB".to_string()];
        assert_eq!(
            build_graph(2, &labels).err(),
            Some(SampleError::MalformedLabel("AB".to_string()))
        );
        let labels = vec!["A-".to_string()];
        assert_eq!(
            build_graph(2, &labels).err(),
            Some(SampleError::MalformedLabel("A-".to_string()))
        );
    }

    #[test]
    fn test_unknown_node_is_an_error() {
        let labels = vec![transition_label("A", "Z")];
        assert_eq!(
            build_graph(2, &labels).err(),
            Some(SampleError::UnknownNode("Z".to_string()))
        );
    }

    #[test]
    fn test_names_serialize_as_bare_strings() {
        let node = NamedNode::new("A");
        assert_eq!(serde_json::to_string(&node).unwrap(), "\"A\"");
        let transition = NamedTransition::new(transition_label("A", "B"));
        assert_eq!(serde_json::to_string(&transition).unwrap(), "\"A-B\"");
    }

    #[test]
    fn test_node_by_name() {
        let nodes = named_nodes(3).unwrap();
        assert_eq!(node_by_name(&nodes, "B").unwrap().name(), "B");
        assert_eq!(
            node_by_name(&nodes, "Q").err(),
            Some(SampleError::NodeNotFound("Q".to_string()))
        );
    }
}
