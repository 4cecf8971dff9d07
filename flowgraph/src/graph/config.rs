//! Declarative graph config: nodes, edges, conditional routing rules.
//!
//! The config names things; behavior comes from the handler/router registries
//! at compile time. Load from JSON with `from_str`/`from_file`, then hand to
//! `FlowGraph`. Structural validation happens in `compile`.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::graph::compile_error::CompileError;

/// Config token for graph termination. Accepted in path-map keys and values
/// and as a static edge target; normalized at compile time into
/// [`Next::End`](super::Next) / [`Route::End`](super::Route), never compared
/// at run time.
pub const END: &str = "__end__";

/// Top-level declarative graph definition.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Name of the starting node. Must be declared in `nodes`.
    #[serde(default)]
    pub entry_point: String,

    /// Node declarations; names are unique within a graph.
    #[serde(default)]
    pub nodes: Vec<NodeConfig>,

    /// Unconditional transitions, evaluated only when the source has no
    /// conditional edge.
    #[serde(default)]
    pub edges: Vec<EdgeConfig>,

    /// Conditional transitions: a router picks a route key, the path map
    /// translates it to a target node or termination.
    #[serde(default)]
    pub conditional_edges: Vec<ConditionalEdgeConfig>,

    /// Config for the built-in `route_by_state` field router.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_router: Option<StateRouterConfig>,
}

/// One node: a unique name, a handler reference resolved against the
/// registry/fallback at compile time, and optional tool ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeConfig {
    pub name: String,
    pub handler: String,
    #[serde(default)]
    pub tools: Vec<String>,
}

/// Static edge: unconditional source → target transition. The target may be
/// the `"__end__"` token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EdgeConfig {
    pub source: String,
    pub target: String,
}

/// Conditional edge: a router reference plus a path map from route key to
/// target node name. `"__end__"` is accepted in both key and value position.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConditionalEdgeConfig {
    pub source: String,
    pub router: String,
    #[serde(default)]
    pub path_map: HashMap<String, String>,
}

/// Config section for the built-in field router: route on `state[field]`,
/// substituting `default` when the field is absent or empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StateRouterConfig {
    #[serde(default = "default_field")]
    pub field: String,
    #[serde(default = "default_route")]
    pub default: String,
    #[serde(default)]
    pub map: HashMap<String, String>,
}

fn default_field() -> String {
    "chat_state".to_string()
}

fn default_route() -> String {
    "greeting".to_string()
}

impl Default for StateRouterConfig {
    fn default() -> Self {
        Self {
            field: default_field(),
            default: default_route(),
            map: HashMap::new(),
        }
    }
}

impl GraphConfig {
    /// Parses a graph config from a JSON string.
    pub fn from_str(raw: &str) -> Result<Self, CompileError> {
        serde_json::from_str(raw)
            .map_err(|e| CompileError::InvalidConfig(format!("config parse failed: {}", e)))
    }

    /// Reads and parses a graph config from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CompileError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            CompileError::InvalidConfig(format!("config file '{}': {}", path.display(), e))
        })?;
        Self::from_str(&raw)
    }

    /// Looks up a node declaration by name.
    pub fn node(&self, name: &str) -> Option<&NodeConfig> {
        self.nodes.iter().find(|n| n.name == name)
    }
}
