//! Per-node instrumentation hook wrapping each handler invocation.

use async_trait::async_trait;

use crate::error::ExecutionError;
use crate::graph::resolve::HandlerFuture;

/// Wraps every handler call of a run: observe or alter state before/after,
/// time the step, log enter/exit. Attached with `FlowGraph::with_middleware`;
/// absent by default, in which case handlers run bare.
#[async_trait]
pub trait NodeMiddleware<S>: Send + Sync
where
    S: Send + 'static,
{
    /// Called once per step with the node name, the state going in, and the
    /// wrapped handler. Implementations must call `inner` exactly once (or
    /// short-circuit with an error) and return its result.
    async fn around_run(
        &self,
        node_name: &str,
        state: S,
        inner: Box<dyn FnOnce(S) -> HandlerFuture<S> + Send>,
    ) -> Result<S, ExecutionError>;
}
