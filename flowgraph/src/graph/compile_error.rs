//! Graph compilation error.
//!
//! Returned by `FlowGraph::compile` when the declarative config is malformed
//! or a named handler/router cannot be resolved. Compile-time failures are
//! never deferred to run time: a graph that compiles has a handler for every
//! node and a router for every conditional edge.

use std::fmt;

/// Error when compiling a declarative graph config.
#[derive(Debug)]
pub enum CompileError {
    /// Malformed or incomplete config: missing entry point, duplicate node
    /// name, edge referencing an undeclared node, unreadable config file.
    InvalidConfig(String),

    /// A node's handler name resolved via neither the registry nor the
    /// fallback source.
    MissingHandler { node: String, handler: String },

    /// A conditional edge's router name resolved via neither the registry,
    /// the fallback source, nor the built-in field router.
    MissingRouter { source: String, router: String },
}

impl fmt::Display for CompileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompileError::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            CompileError::MissingHandler { node, handler } => write!(
                f,
                "node '{node}' references unresolvable handler '{handler}'"
            ),
            CompileError::MissingRouter { source, router } => write!(
                f,
                "conditional edge from '{source}' references unresolvable router '{router}'"
            ),
        }
    }
}

impl std::error::Error for CompileError {}
