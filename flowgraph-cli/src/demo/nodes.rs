//! Conversation demo nodes, authored against [`ConversationState`].
//!
//! Each handler is a step of the console workflow: prompt, read a line,
//! uppercase it, format the result. The `input` node blocks on stdin, a
//! per-step suspension; the run makes progress one node at a time.

use std::collections::HashMap;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

use flowgraph::{handler_fn, router_fn, EdgeRouter, ExecutionError, NodeHandler, Route};

use super::state::ConversationState;
use super::tools::UppercaseTool;

/// Pass-through entry node; routing happens on its outgoing edge.
pub fn router_handler() -> NodeHandler<ConversationState> {
    handler_fn(|state: ConversationState| async move { Ok(state) })
}

pub fn init_handler() -> NodeHandler<ConversationState> {
    handler_fn(|mut state: ConversationState| async move {
        state.response = "Please provide some input.".to_string();
        state.step = "input".to_string();
        Ok(state)
    })
}

/// Reads one line from stdin into `user_input`.
pub fn input_handler() -> NodeHandler<ConversationState> {
    handler_fn(|mut state: ConversationState| async move {
        let line = tokio::task::spawn_blocking(|| {
            print!("\nUser: ");
            io::stdout().flush()?;
            let mut buf = String::new();
            io::stdin().lock().read_line(&mut buf)?;
            Ok::<String, io::Error>(buf)
        })
        .await
        .map_err(|e| ExecutionError::ExecutionFailed(format!("input task failed: {}", e)))?
        .map_err(|e| ExecutionError::ExecutionFailed(format!("failed to read input: {}", e)))?;

        state.user_input = line.trim_end().to_string();
        state.step = "process".to_string();
        Ok(state)
    })
}

/// Uppercases the input via the tool; empty input steps to the error node.
pub fn process_handler(tool: Arc<UppercaseTool>) -> NodeHandler<ConversationState> {
    handler_fn(move |mut state: ConversationState| {
        let tool = Arc::clone(&tool);
        async move {
            if state.user_input.is_empty() {
                state.step = "error".to_string();
                return Ok(state);
            }
            state.response = tool.apply(&state.user_input);
            state.step = "result".to_string();
            Ok(state)
        }
    })
}

pub fn result_handler() -> NodeHandler<ConversationState> {
    handler_fn(|mut state: ConversationState| async move {
        state.response = format!("Final result: {}", state.response);
        Ok(state)
    })
}

pub fn error_handler() -> NodeHandler<ConversationState> {
    handler_fn(|mut state: ConversationState| async move {
        state.response = "Error: No input provided.".to_string();
        Ok(state)
    })
}

/// Routes by the step field; the path maps translate the step to a node.
pub fn route_by_step() -> EdgeRouter<ConversationState> {
    router_fn(|state: &ConversationState| Ok(Route::Key(state.step.clone())))
}

/// All demo handlers keyed by the names the config references.
pub fn demo_handlers(tool: Arc<UppercaseTool>) -> HashMap<String, NodeHandler<ConversationState>> {
    let mut handlers: HashMap<String, NodeHandler<ConversationState>> = HashMap::new();
    handlers.insert("router".into(), router_handler());
    handlers.insert("init".into(), init_handler());
    handlers.insert("input".into(), input_handler());
    handlers.insert("process".into(), process_handler(tool));
    handlers.insert("result".into(), result_handler());
    handlers.insert("error".into(), error_handler());
    handlers
}
