//! Tests for the per-call traversal configuration.

use crate::config::{TraversalConfig, DEPTH_DEFAULT, DEPTH_MIN, DEPTH_MIN_BOUND};

#[test]
fn test_default_depth_and_selectors() {
    let config: TraversalConfig<&str, &str> = TraversalConfig::default();
    assert_eq!(config.depth, DEPTH_DEFAULT);
    assert!((config.node_selector)(&"anything"));
    assert!((config.transition_selector)(&"anything"));
}

#[test]
fn test_depth_constants() {
    assert_eq!(DEPTH_MIN, 1);
    assert_eq!(DEPTH_MIN_BOUND, 0);
    assert_eq!(DEPTH_DEFAULT, 1);
}

#[test]
fn test_builder_methods() {
    let config: TraversalConfig<&str, &str> = TraversalConfig::new(3)
        .with_node_selector(|node: &&str| node.len() == 1)
        .with_transition_selector(|transition: &&str| transition.contains('-'));
    assert_eq!(config.depth, 3);
    assert!((config.node_selector)(&"A"));
    assert!(!(config.node_selector)(&"AB"));
    assert!((config.transition_selector)(&"A-B"));
    assert!(!(config.transition_selector)(&"AB"));

    let config = config.with_depth(5);
    assert_eq!(config.depth, 5);
}

#[test]
fn test_debug_reports_depth_only() {
    let config: TraversalConfig<&str, &str> = TraversalConfig::new(2);
    let printed = format!("{config:?}");
    assert!(printed.contains("depth: 2"));
}
