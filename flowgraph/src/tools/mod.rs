//! Tool registry: opaque tool objects resolved per node.
//!
//! The engine never calls tools itself; nodes declare tool ids in the config
//! and `CompiledFlow::get_node_tools` resolves them lazily against the
//! registry.

mod registry;
mod r#trait;

pub use r#trait::Tool;
pub use registry::ToolRegistry;
