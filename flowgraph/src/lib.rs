//! # flowgraph
//!
//! A declarative, configuration-driven engine for small finite-state workflow
//! graphs. A JSON config names nodes, static edges and conditional routing
//! rules; handlers and routers are plugged in by name; `compile` turns the
//! pair into an immutable state machine that threads one shared state value
//! through named steps until termination.
//!
//! ## Design
//!
//! - **Single state type per graph**: one value flows through every node,
//!   value-in/value-out: a handler receives the current state and returns the
//!   next one, and the engine rebinds to the return value.
//! - **Two-tier resolution**: behavior is looked up in an explicit registry
//!   first, then on an optional [`HandlerSource`] fallback object; absence in
//!   both fails at compile time, never at run time.
//! - **Termination as a marker, not a string**: the config token `"__end__"`
//!   is normalized during compilation into [`Next::End`] / [`Route::End`].
//! - **Tolerant routing, strict wiring**: an unknown route value ends the run
//!   gracefully; a missing handler, router, sub-state or tool is an error.
//!
//! ## Main Modules
//!
//! - [`graph`]: [`GraphConfig`], [`FlowGraph`], [`CompiledFlow`], the built-in
//!   field router and the resolution types.
//! - [`state`]: [`AgentState`] shared container and the [`FieldAccess`] trait.
//! - [`adapter`]: bridge handlers/routers between a local state shape and the
//!   enclosing [`AgentState`].
//! - [`memory`]: optional checkpointing collaborator ([`Checkpointer`],
//!   [`MemorySaver`]).
//! - [`tools`]: opaque [`Tool`] objects resolved per node.
//! - [`stream`]: event types for [`CompiledFlow::stream`].
//!
//! ## Quick Start
//!
//! ```rust
//! use flowgraph::{handler_fn, FieldAccess, FlowGraph, GraphConfig};
//!
//! #[derive(Debug, Clone, Default)]
//! struct State {
//!     count: i32,
//! }
//!
//! impl FieldAccess for State {
//!     fn field(&self, _name: &str) -> Option<String> {
//!         None
//!     }
//! }
//!
//! # #[tokio::main]
//! # async fn main() {
//! let config = GraphConfig::from_str(
//!     r#"{"entry_point": "bump", "nodes": [{"name": "bump", "handler": "bump"}]}"#,
//! )
//! .unwrap();
//!
//! let compiled = FlowGraph::new(config)
//!     .with_handler(
//!         "bump",
//!         handler_fn(|mut state: State| async move {
//!             state.count += 1;
//!             Ok(state)
//!         }),
//!     )
//!     .compile()
//!     .unwrap();
//!
//! let out = compiled.invoke(State::default(), None).await.unwrap();
//! assert_eq!(out.count, 1);
//! # }
//! ```

pub mod adapter;
pub mod error;
pub mod graph;
pub mod memory;
pub mod state;
pub mod stream;
pub mod tools;

pub use adapter::{adapt_handler, adapt_router, unwrap_state, wrap_state};
pub use error::ExecutionError;
pub use graph::{
    handler_fn, route_by_state, router_fn, CompileError, CompiledFlow, ConditionalEdgeConfig,
    EdgeConfig, EdgeRouter, FlowGraph, GraphConfig, HandlerFuture, HandlerSource, Next,
    NodeConfig, NodeHandler, NodeMiddleware, Route, RunContext, StateRouterConfig, END,
    ROUTE_BY_STATE,
};
pub use memory::{
    Checkpoint, CheckpointError, CheckpointListItem, CheckpointMetadata, CheckpointSource,
    Checkpointer, MemorySaver, RunConfig,
};
pub use state::{AgentState, FieldAccess, Message};
pub use stream::{StreamEvent, StreamMode};
pub use tools::{Tool, ToolRegistry};
