//! Application-owned demonstration defaults.
//!
//! The library itself has no global configuration; the demo's defaults
//! (traversal depth, start node, node-set size) belong to the application
//! and load from, in increasing precedence: built-in defaults, an optional
//! `bigraph.toml`, and `BIGRAPH_*` environment variables.

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

/// Configuration file read from the working directory, when present.
pub const CONFIG_FILE: &str = "bigraph.toml";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "BIGRAPH_";

/// Demonstration defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Traversal depth for the adjacency/neighbour printouts.
    pub depth: usize,
    /// Name of the start node.
    pub start: String,
    /// Size of the named-node set.
    pub node_count: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            depth: 1,
            start: "C".to_string(),
            node_count: 4,
        }
    }
}

/// Loads the demo configuration from defaults, file, and environment.
pub fn load() -> Result<DemoConfig, figment::Error> {
    Figment::from(Serialized::defaults(DemoConfig::default()))
        .merge(Toml::file(CONFIG_FILE))
        .merge(Env::prefixed(ENV_PREFIX))
        .extract()
}
