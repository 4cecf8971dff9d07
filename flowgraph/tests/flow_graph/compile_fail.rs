//! Compile-time resolution: two-tier lookup order and hard failures.

use std::collections::HashMap;
use std::sync::Arc;

use flowgraph::{
    handler_fn, CompileError, FlowGraph, GraphConfig, HandlerSource, NodeHandler,
};

use crate::common::{demo_graph, ConvState};

/// Fallback object exposing one handler, `tagged`, that marks the state.
struct TaggedSource;

impl HandlerSource<ConvState> for TaggedSource {
    fn handler(&self, name: &str) -> Option<NodeHandler<ConvState>> {
        (name == "tagged").then(|| {
            handler_fn(|mut state: ConvState| async move {
                state.response = "from fallback".to_string();
                Ok(state)
            })
        })
    }
}

fn single_node_config(handler: &str) -> GraphConfig {
    GraphConfig::from_str(&format!(
        r#"{{"entry_point": "only", "nodes": [{{"name": "only", "handler": "{}"}}]}}"#,
        handler
    ))
    .unwrap()
}

/// **Scenario**: A handler name resolving via neither the registry nor the
/// fallback object fails with MissingHandler at compile time, not at run time.
#[tokio::test]
async fn missing_handler_fails_at_compile_time() {
    let graph = FlowGraph::new(single_node_config("missing"))
        .with_fallback(Arc::new(TaggedSource));
    match graph.compile() {
        Err(CompileError::MissingHandler { node, handler }) => {
            assert_eq!(node, "only");
            assert_eq!(handler, "missing");
        }
        other => panic!("expected MissingHandler, got {:?}", other.err()),
    }
}

/// **Scenario**: A handler absent from the registry resolves via the fallback
/// object and actually runs.
#[tokio::test]
async fn fallback_handler_resolves_and_runs() {
    let compiled = FlowGraph::new(single_node_config("tagged"))
        .with_fallback(Arc::new(TaggedSource))
        .compile()
        .unwrap();
    let out = compiled.invoke(ConvState::default(), None).await.unwrap();
    assert_eq!(out.response, "from fallback");
}

/// **Scenario**: The explicit registry wins over the fallback object for the
/// same name.
#[tokio::test]
async fn registry_takes_precedence_over_fallback() {
    let mut handlers: HashMap<String, NodeHandler<ConvState>> = HashMap::new();
    handlers.insert(
        "tagged".into(),
        handler_fn(|mut state: ConvState| async move {
            state.response = "from registry".to_string();
            Ok(state)
        }),
    );
    let compiled = FlowGraph::new(single_node_config("tagged"))
        .with_handlers(handlers)
        .with_fallback(Arc::new(TaggedSource))
        .compile()
        .unwrap();
    let out = compiled.invoke(ConvState::default(), None).await.unwrap();
    assert_eq!(out.response, "from registry");
}

/// **Scenario**: The full demo config compiles with all handlers and the
/// step router registered.
#[tokio::test]
async fn demo_config_compiles() {
    assert!(demo_graph("abc").compile().is_ok());
}

/// **Scenario**: The demo config without its router registered fails with
/// MissingRouter naming the source node.
#[tokio::test]
async fn demo_config_without_router_fails() {
    let config = GraphConfig::from_str(crate::common::DEMO_CONFIG).unwrap();
    let graph = FlowGraph::new(config).with_handlers(crate::common::demo_handlers(""));
    match graph.compile() {
        Err(CompileError::MissingRouter { router, .. }) => {
            assert_eq!(router, "route_by_step");
        }
        other => panic!("expected MissingRouter, got {:?}", other.err()),
    }
}
