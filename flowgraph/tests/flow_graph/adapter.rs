//! Driving a whole graph through state-shape adapters: the conversation
//! workflow authored against ConvState, carried inside AgentState metadata.

use std::collections::HashMap;

use flowgraph::{
    adapt_handler, adapt_router, unwrap_state, wrap_state, AgentState, ExecutionError, FlowGraph,
    GraphConfig, NodeHandler,
};

use crate::common::{demo_handlers, route_by_step, ConvState, DEMO_CONFIG};

const CONVERSATION_KEY: &str = "conversation";

/// Demo graph over AgentState: every ConvState handler and the step router
/// wrapped by the adapters.
fn adapted_demo_graph(input_value: &str) -> flowgraph::CompiledFlow<AgentState> {
    let config = GraphConfig::from_str(DEMO_CONFIG).unwrap();
    let adapted: HashMap<String, NodeHandler<AgentState>> = demo_handlers(input_value)
        .into_iter()
        .map(|(name, handler)| (name, adapt_handler(CONVERSATION_KEY, handler)))
        .collect();
    FlowGraph::new(config)
        .with_handlers(adapted)
        .with_router(
            "route_by_step",
            adapt_router(CONVERSATION_KEY, route_by_step()),
        )
        .compile()
        .unwrap()
}

/// **Scenario**: The wrapped workflow produces the same final sub-state as
/// the unwrapped one, and the enclosing fields stay untouched.
#[tokio::test]
async fn adapted_graph_runs_to_result() {
    let compiled = adapted_demo_graph("abc");

    let mut enclosing = wrap_state(CONVERSATION_KEY, &ConvState::at_start()).unwrap();
    enclosing.conversation_id = Some("c-1".into());

    let out = compiled.invoke(enclosing, None).await.unwrap();
    let conv: ConvState = unwrap_state(CONVERSATION_KEY, &out).unwrap();
    assert_eq!(conv.response, "Final result: ABC");
    assert_eq!(out.conversation_id.as_deref(), Some("c-1"));
}

/// **Scenario**: The error path works through the adapters too.
#[tokio::test]
async fn adapted_graph_runs_to_error() {
    let compiled = adapted_demo_graph("");
    let enclosing = wrap_state(CONVERSATION_KEY, &ConvState::at_start()).unwrap();
    let out = compiled.invoke(enclosing, None).await.unwrap();
    let conv: ConvState = unwrap_state(CONVERSATION_KEY, &out).unwrap();
    assert_eq!(conv.response, "Error: No input provided.");
}

/// **Scenario**: Running the adapted graph on a state without the sub-state
/// aborts immediately with AdapterStateMissing; the partial state is handed
/// back for inspection.
#[tokio::test]
async fn missing_sub_state_aborts_run() {
    let compiled = adapted_demo_graph("abc");
    let (error, partial) = compiled
        .invoke_with_partial(AgentState::new(), None)
        .await
        .unwrap_err();
    match error {
        ExecutionError::AdapterStateMissing { key } => assert_eq!(key, CONVERSATION_KEY),
        other => panic!("expected AdapterStateMissing, got {:?}", other),
    }
    assert!(partial.metadata.is_empty());
}
