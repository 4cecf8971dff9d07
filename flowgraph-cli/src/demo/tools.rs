//! Demo tools: the uppercase transformer the process node uses.

use std::sync::Arc;

use flowgraph::{Tool, ToolRegistry};

/// Uppercases its input. Registered under `"uppercase"` so the process node's
/// tool declaration resolves via `get_node_tools`.
pub struct UppercaseTool;

impl UppercaseTool {
    pub fn apply(&self, input: &str) -> String {
        input.to_uppercase()
    }
}

impl Tool for UppercaseTool {
    fn name(&self) -> &str {
        "uppercase"
    }

    fn description(&self) -> Option<&str> {
        Some("Uppercase the given text")
    }
}

/// Registry with every demo tool registered.
pub fn demo_tool_registry() -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    registry.register(Arc::new(UppercaseTool));
    registry
}
