//! Streaming types for graph runs.
//!
//! Selects and carries events emitted while a compiled graph runs. Used by
//! `CompiledFlow::stream`.

use std::fmt::Debug;

/// Stream mode selector: which kinds of events to emit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StreamMode {
    /// Emit the full state after each node completes.
    Values,
    /// Emit incremental updates with node name and state.
    Updates,
}

/// Event emitted while running a graph.
#[derive(Clone, Debug)]
pub enum StreamEvent<S>
where
    S: Clone + Send + Sync + Debug + 'static,
{
    /// Full state snapshot after a node finished.
    Values(S),
    /// Incremental update: the node that ran and the state after it.
    Updates { node: String, state: S },
}
