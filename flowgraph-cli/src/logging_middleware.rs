//! Logging middleware that prints node enter/exit around each handler call.

use async_trait::async_trait;

use flowgraph::{AgentState, ExecutionError, HandlerFuture, NodeMiddleware};

/// Prints node enter/exit to stderr so normal output (assistant responses)
/// can be redirected separately.
pub struct LoggingMiddleware;

#[async_trait]
impl NodeMiddleware<AgentState> for LoggingMiddleware {
    async fn around_run(
        &self,
        node_name: &str,
        state: AgentState,
        inner: Box<dyn FnOnce(AgentState) -> HandlerFuture<AgentState> + Send>,
    ) -> Result<AgentState, ExecutionError> {
        eprintln!("[node] enter node={}", node_name);
        let result = inner(state).await;
        match &result {
            Ok(_) => eprintln!("[node] exit node={}", node_name),
            Err(e) => eprintln!("[node] exit node={} error={}", node_name, e),
        }
        result
    }
}
