//! Workflow graphs: declarative config in, runnable state machine out.
//!
//! Build a [`FlowGraph`] over a [`GraphConfig`], attach handler/router
//! registries (and optionally a fallback source, tools, a checkpointer,
//! middleware), then `compile` and `invoke`.

mod compile_error;
mod compiled;
mod config;
mod field_router;
mod flow_graph;
mod next;
mod node_middleware;
mod resolve;
mod route;
mod run_context;

pub use compile_error::CompileError;
pub use compiled::CompiledFlow;
pub use config::{
    ConditionalEdgeConfig, EdgeConfig, GraphConfig, NodeConfig, StateRouterConfig, END,
};
pub use field_router::{route_by_state, ROUTE_BY_STATE};
pub use flow_graph::FlowGraph;
pub use next::Next;
pub use node_middleware::NodeMiddleware;
pub use resolve::{handler_fn, router_fn, EdgeRouter, HandlerFuture, HandlerSource, NodeHandler};
pub use route::Route;
pub use run_context::RunContext;
