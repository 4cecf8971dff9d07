//! Build the demo workflow graph and drive it from the console.
//!
//! The graph carries `AgentState`; the conversation nodes are authored
//! against `ConversationState` and composed in through the state-shape
//! adapters. Each console round starts a fresh wrapped state, invokes the
//! graph, and prints the unwrapped response.

use std::collections::HashMap;
use std::io::{self, BufRead, Write};
use std::path::Path;
use std::sync::Arc;

use flowgraph::{
    adapt_handler, adapt_router, unwrap_state, wrap_state, AgentState, CompiledFlow, FlowGraph,
    GraphConfig, NodeHandler,
};

use crate::demo::{
    demo_handlers, demo_tool_registry, route_by_step, ConversationState, UppercaseTool,
    CONVERSATION_KEY,
};
use crate::logging_middleware::LoggingMiddleware;

/// Error type used by the CLI layer.
pub type Error = Box<dyn std::error::Error + Send + Sync>;

/// Compiles the demo graph from an already-parsed config.
///
/// With `verbose`, node enter/exit is logged to stderr via
/// [`LoggingMiddleware`].
pub fn demo_graph_from_config(
    config: GraphConfig,
    verbose: bool,
) -> Result<CompiledFlow<AgentState>, Error> {
    let tool = Arc::new(UppercaseTool);
    let adapted: HashMap<String, NodeHandler<AgentState>> = demo_handlers(tool)
        .into_iter()
        .map(|(name, handler)| (name, adapt_handler(CONVERSATION_KEY, handler)))
        .collect();

    let mut graph = FlowGraph::new(config)
        .with_handlers(adapted)
        .with_router(
            "route_by_step",
            adapt_router(CONVERSATION_KEY, route_by_step()),
        )
        .with_tools(demo_tool_registry());
    if verbose {
        graph = graph.with_middleware(Arc::new(LoggingMiddleware));
    }
    Ok(graph.compile()?)
}

/// Loads the config file and compiles the demo graph.
pub fn build_demo_graph(
    config_path: impl AsRef<Path>,
    verbose: bool,
) -> Result<CompiledFlow<AgentState>, Error> {
    let config_path = config_path.as_ref();
    tracing::debug!(config = %config_path.display(), "compiling demo graph");
    let config = GraphConfig::from_file(config_path)?;
    demo_graph_from_config(config, verbose)
}

/// Console chat loop: one graph run per round until the user types
/// `exit`/`quit` at the input node.
pub async fn run_console(config_path: impl AsRef<Path>, verbose: bool) -> Result<(), Error> {
    let graph = build_demo_graph(config_path, verbose)?;

    loop {
        wait_for_enter()?;

        let initial = wrap_state(CONVERSATION_KEY, &ConversationState::at_start())?;
        let result = graph.invoke(initial, None).await?;
        let conversation: ConversationState = unwrap_state(CONVERSATION_KEY, &result)?;

        println!("\nAssistant-> {}", conversation.response);

        if matches!(
            conversation.user_input.to_lowercase().as_str(),
            "exit" | "quit"
        ) {
            println!("Exiting chat.");
            return Ok(());
        }
    }
}

fn wait_for_enter() -> Result<(), Error> {
    print!("------Press enter to start------");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(())
}
