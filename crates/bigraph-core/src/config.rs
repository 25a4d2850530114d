//! Per-call traversal configuration.
//!
//! There is no process-wide default state: callers that want "library
//! defaults" pass [`TraversalConfig::default`], a value owned by the
//! application, to each traversal call.

use std::fmt;

/// Depths below this threshold yield an empty traversal result.
pub const DEPTH_MIN: usize = 1;

/// The frontier loop runs while the remaining depth stays strictly above
/// this bound.
pub const DEPTH_MIN_BOUND: usize = 0;

/// Default traversal depth: one full node→transition→node hop.
pub const DEPTH_DEFAULT: usize = 1;

/// A caller-supplied filter over node payloads.
pub type NodeSelector<'a, N> = Box<dyn Fn(&N) -> bool + 'a>;

/// A caller-supplied filter over transition payloads.
pub type TransitionSelector<'a, T> = Box<dyn Fn(&T) -> bool + 'a>;

/// Configuration for one traversal call.
///
/// The node/transition partition itself is a compile-time distinction;
/// these selectors only narrow which nodes and transitions participate in
/// the traversal. Defaults accept everything.
///
/// # Example
///
/// ```rust
/// use bigraph_core::TraversalConfig;
///
/// let config: TraversalConfig<&str, &str> = TraversalConfig::new(2)
///     .with_node_selector(|node: &&str| node.len() == 1);
/// assert_eq!(config.depth, 2);
/// ```
pub struct TraversalConfig<'a, N, T> {
    /// Number of full node-to-node logical hops the traversal may take.
    pub depth: usize,
    /// Filter deciding which nodes participate.
    pub node_selector: NodeSelector<'a, N>,
    /// Filter deciding which transitions participate.
    pub transition_selector: TransitionSelector<'a, T>,
}

impl<N, T> Default for TraversalConfig<'_, N, T> {
    fn default() -> Self {
        Self {
            depth: DEPTH_DEFAULT,
            node_selector: Box::new(|_| true),
            transition_selector: Box::new(|_| true),
        }
    }
}

impl<'a, N, T> TraversalConfig<'a, N, T> {
    /// Creates a config with the given depth and accept-all selectors.
    #[must_use]
    pub fn new(depth: usize) -> Self {
        Self {
            depth,
            ..Self::default()
        }
    }

    /// Sets the traversal depth (builder pattern).
    #[must_use]
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    /// Sets the node filter (builder pattern).
    #[must_use]
    pub fn with_node_selector<P>(mut self, selector: P) -> Self
    where
        P: Fn(&N) -> bool + 'a,
    {
        self.node_selector = Box::new(selector);
        self
    }

    /// Sets the transition filter (builder pattern).
    #[must_use]
    pub fn with_transition_selector<P>(mut self, selector: P) -> Self
    where
        P: Fn(&T) -> bool + 'a,
    {
        self.transition_selector = Box::new(selector);
        self
    }
}

impl<N, T> fmt::Debug for TraversalConfig<'_, N, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TraversalConfig")
            .field("depth", &self.depth)
            .finish_non_exhaustive()
    }
}
