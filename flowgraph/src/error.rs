//! Run-time execution error types.
//!
//! Used by node handlers, edge routers and `CompiledFlow::invoke`. Compile-time
//! failures have their own type, `graph::CompileError`.

use thiserror::Error;

/// Error raised while executing a compiled graph.
///
/// Configuration defects are caught at compile time; anything surfacing here
/// either happened inside a handler/router or indicates a wiring bug between
/// graphs (adapters, tool ids). The partially mutated state of the aborted run
/// stays with the caller for inspection.
#[derive(Debug, Error)]
pub enum ExecutionError {
    /// A handler or router failed with a message.
    #[error("execution failed: {0}")]
    ExecutionFailed(String),

    /// No handler bound for the current node. Defensive: compilation already
    /// rejects unresolvable handlers, so hitting this means the compile-time
    /// check was bypassed.
    #[error("no handler bound for node '{0}'")]
    MissingHandler(String),

    /// Node name not present in the compiled graph (introspection lookups).
    #[error("unknown node '{0}'")]
    UnknownNode(String),

    /// Tool id declared by a node but absent from the tool registry. Raised
    /// lazily, when the node's tools are actually requested.
    #[error("tool '{0}' is not registered")]
    UnknownTool(String),

    /// An adapted handler/router did not find its sub-state in the enclosing
    /// state's metadata. Signals a wiring defect between graphs, not a
    /// legitimate empty state.
    #[error("sub-state '{key}' missing from metadata")]
    AdapterStateMissing { key: String },
}
