//! Demonstration program for the bigraph library.
//!
//! Builds the named sample graph (nodes {A, B, C, D}, logical edges A-B,
//! A-C, B-C, C-D), prints its nodes, transitions, relations, adjacent
//! nodes, and neighbour nodes, then repeats the neighbour lookup through
//! memoizing caches. Takes no command-line arguments: any argument is a
//! usage error with a non-zero exit.

mod config;
mod sample;

use anyhow::{bail, Context, Result};
use tracing_subscriber::EnvFilter;

use bigraph_core::{neighbour_nodes, CacheMap, Relation, StrictGraph, TraversalConfig};

use crate::config::DemoConfig;
use crate::sample::{NamedNode, NamedTransition};

type SampleGraph = StrictGraph<'static, NamedNode, NamedTransition>;
type SampleRelation = Relation<NamedNode, NamedTransition>;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if !args.is_empty() {
        bail!("expected no arguments, got: {}", args.join(" "));
    }

    let demo = config::load().context("failed to load demo configuration")?;
    tracing::debug!(?demo, "configuration loaded");
    let strict = sample::build_default_graph(demo.node_count)?;
    let start = sample::node_by_name(strict.graph().nodes(), &demo.start)?.clone();

    print_graph_report(&strict, &start, demo.depth);
    print_cache_demo(&strict, &start, &demo)?;
    Ok(())
}

fn render_relation(relation: &SampleRelation) -> String {
    let first = relation
        .first()
        .as_node()
        .map_or("?", NamedNode::name);
    let second = relation
        .second()
        .as_transition()
        .map_or("?", NamedTransition::name);
    format!("{first} <-> {second}")
}

fn print_graph_report(strict: &SampleGraph, start: &NamedNode, depth: usize) {
    println!("# Nodes :");
    for node in strict.select_nodes() {
        println!("{}", node.name());
    }
    println!("# Transitions :");
    for transition in strict.select_transitions() {
        println!("{}", transition.name());
    }
    println!("# Relations :");
    for relation in strict.graph().relations() {
        println!("{}", render_relation(relation));
    }
    println!("# Adjacent nodes :");
    for node in strict.graph().adjacent_nodes(start, &TraversalConfig::new(depth)) {
        println!("{}", node.name());
    }
    println!("# Neighbour nodes :");
    for node in strict.graph().neighbour_nodes(start, &TraversalConfig::new(depth)) {
        println!("{}", node.name());
    }
}

/// Repeats the neighbour lookup with the relation lookups and the
/// traversal result routed through memoizing caches: repeated lookups hit
/// the stored entries instead of re-traversing.
fn print_cache_demo(strict: &SampleGraph, start: &NamedNode, demo: &DemoConfig) -> Result<()> {
    let graph = strict.graph();
    let node_relations: CacheMap<'_, NamedNode, Vec<SampleRelation>> =
        CacheMap::new(|node: &NamedNode| {
            graph
                .select_node_relations(node)
                .into_iter()
                .cloned()
                .collect()
        });
    let transition_relations: CacheMap<'_, NamedTransition, Vec<SampleRelation>> =
        CacheMap::new(|transition: &NamedTransition| {
            graph
                .select_transition_relations(transition)
                .into_iter()
                .cloned()
                .collect()
        });
    let depth = demo.depth;
    let neighbours: CacheMap<'_, NamedNode, Vec<NamedNode>> = CacheMap::new(|start: &NamedNode| {
        let config = TraversalConfig::new(depth)
            .with_node_selector(|node: &NamedNode| node.name().len() == 1);
        neighbour_nodes(
            start,
            &config,
            |node| node_relations.get(node),
            |transition| transition_relations.get(transition),
        )
    });

    println!("# Neighbour nodes using cache :");
    let _ = neighbours.get(start);
    let resolved = neighbours.get(start);
    println!("{}", serde_json::to_string(&resolved)?);

    println!("# Relations cache :");
    for (node, relations) in node_relations.entries() {
        let rendered: Vec<String> = relations.iter().map(render_relation).collect();
        println!("{} : {rendered:?}", node.name());
    }
    Ok(())
}
