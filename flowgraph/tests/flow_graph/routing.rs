//! Path-map normalization and the built-in field router, end to end.

use flowgraph::{
    handler_fn, router_fn, AgentState, FlowGraph, GraphConfig, Route,
};

use crate::common::ConvState;

fn two_node_config(path_map: &str) -> GraphConfig {
    GraphConfig::from_str(&format!(
        r#"{{"entry_point": "a",
            "nodes": [{{"name": "a", "handler": "a"}}, {{"name": "b", "handler": "b"}}],
            "conditional_edges": [{{"source": "a", "router": "script", "path_map": {}}}]}}"#,
        path_map
    ))
    .unwrap()
}

fn mark(name: &'static str) -> flowgraph::NodeHandler<ConvState> {
    handler_fn(move |mut state: ConvState| async move {
        state.response.push_str(name);
        Ok(state)
    })
}

async fn run_scripted(path_map: &str, route: Route) -> ConvState {
    let compiled = FlowGraph::new(two_node_config(path_map))
        .with_handler("a", mark("a"))
        .with_handler("b", mark("b"))
        .with_router("script", router_fn(move |_: &ConvState| Ok(route.clone())))
        .compile()
        .unwrap();
    compiled.invoke(ConvState::default(), None).await.unwrap()
}

/// **Scenario**: A path map with key "__end__" is normalized: a router
/// answering the termination key routes through that entry.
#[tokio::test]
async fn end_key_in_path_map_terminates() {
    let out = run_scripted(r#"{"__end__": "__end__"}"#, Route::End).await;
    assert_eq!(out.response, "a");
}

/// **Scenario**: A path map value "__end__" terminates the run for its key.
#[tokio::test]
async fn end_value_in_path_map_terminates() {
    let out = run_scripted(r#"{"done": "__end__", "more": "b"}"#, Route::Key("done".into())).await;
    assert_eq!(out.response, "a");
}

/// **Scenario**: The same path map routes a mapped key to its node.
#[tokio::test]
async fn mapped_key_routes_to_node() {
    let out = run_scripted(r#"{"done": "__end__", "more": "b"}"#, Route::Key("more".into())).await;
    assert_eq!(out.response, "ab");
}

/// **Scenario**: A key "__end__" may map to a real node; a router answering
/// the termination key then continues there.
#[tokio::test]
async fn end_key_may_map_to_node() {
    let out = run_scripted(r#"{"__end__": "b"}"#, Route::End).await;
    assert_eq!(out.response, "ab");
}

fn state_router_graph(map: &str, default: &str) -> flowgraph::CompiledFlow<AgentState> {
    let config = GraphConfig::from_str(&format!(
        r#"{{"entry_point": "router",
            "nodes": [{{"name": "router", "handler": "identity"}},
                      {{"name": "greet", "handler": "greet"}}],
            "conditional_edges": [{{"source": "router", "router": "route_by_state",
                                    "path_map": {{"greeting": "greet"}}}}],
            "state_router": {{"field": "chat_state", "default": "{}", "map": {}}}}}"#,
        default, map
    ))
    .unwrap();
    FlowGraph::new(config)
        .with_handler("identity", handler_fn(|s: AgentState| async move { Ok(s) }))
        .with_handler(
            "greet",
            handler_fn(|mut s: AgentState| async move {
                s.chat_state = Some("done".into());
                s.push_message("assistant", "hello");
                Ok(s)
            }),
        )
        .compile()
        .unwrap()
}

/// **Scenario**: The built-in field router routes a mapped chat_state value
/// to its node through the path map.
#[tokio::test]
async fn field_router_routes_mapped_value() {
    let compiled = state_router_graph(r#"{"greeting": "greeting"}"#, "greeting");
    let state = AgentState {
        chat_state: Some("greeting".into()),
        ..Default::default()
    };
    let out = compiled.invoke(state, None).await.unwrap();
    assert_eq!(out.messages.len(), 1);
}

/// **Scenario**: Matching is case-insensitive on the state value.
#[tokio::test]
async fn field_router_is_case_insensitive() {
    let compiled = state_router_graph(r#"{"greeting": "greeting"}"#, "greeting");
    let state = AgentState {
        chat_state: Some("GREETING".into()),
        ..Default::default()
    };
    let out = compiled.invoke(state, None).await.unwrap();
    assert_eq!(out.messages.len(), 1);
}

/// **Scenario**: An unmapped chat_state value terminates after the router
/// node regardless of the configured default.
#[tokio::test]
async fn field_router_unknown_value_terminates() {
    let compiled = state_router_graph(r#"{"greeting": "greeting"}"#, "greeting");
    let state = AgentState {
        chat_state: Some("elsewhere".into()),
        ..Default::default()
    };
    let out = compiled.invoke(state, None).await.unwrap();
    assert!(out.messages.is_empty());
}

/// **Scenario**: A missing chat_state substitutes the default, which routes
/// normally when mapped.
#[tokio::test]
async fn field_router_default_applies_when_missing() {
    let compiled = state_router_graph(r#"{"greeting": "greeting"}"#, "greeting");
    let out = compiled.invoke(AgentState::new(), None).await.unwrap();
    assert_eq!(out.messages.len(), 1);
}

/// **Scenario**: An unmapped default is no safe route; a missing field then
/// terminates the run.
#[tokio::test]
async fn field_router_unmapped_default_terminates() {
    let compiled = state_router_graph(r#"{"greeting": "greeting"}"#, "offline");
    let out = compiled.invoke(AgentState::new(), None).await.unwrap();
    assert!(out.messages.is_empty());
}
