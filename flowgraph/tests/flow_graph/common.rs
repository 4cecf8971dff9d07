//! Shared fixtures: a small conversation workflow (init → input → process →
//! result/error) driven by a step field, with a scriptable input node.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use flowgraph::{
    handler_fn, router_fn, EdgeRouter, FieldAccess, FlowGraph, GraphConfig, NodeHandler, Route,
};

/// Local conversation state the demo nodes are authored against.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConvState {
    pub step: String,
    pub user_input: String,
    pub response: String,
}

impl ConvState {
    pub fn at_start() -> Self {
        Self {
            step: "start".to_string(),
            ..Default::default()
        }
    }
}

impl FieldAccess for ConvState {
    fn field(&self, name: &str) -> Option<String> {
        match name {
            "step" => Some(self.step.clone()),
            "user_input" => Some(self.user_input.clone()),
            "response" => Some(self.response.clone()),
            _ => None,
        }
    }
}

/// Demo graph config: every node routes by the step field; `result` and
/// `error` have no outgoing transition and end the run.
pub const DEMO_CONFIG: &str = r#"{
    "entry_point": "router",
    "nodes": [
        {"name": "router", "handler": "router"},
        {"name": "init", "handler": "init"},
        {"name": "input", "handler": "input"},
        {"name": "process", "handler": "process", "tools": ["uppercase"]},
        {"name": "result", "handler": "result"},
        {"name": "error", "handler": "error"}
    ],
    "conditional_edges": [
        {"source": "router", "router": "route_by_step",
         "path_map": {"start": "init", "input": "input", "process": "process",
                      "result": "__end__", "error": "error"}},
        {"source": "init", "router": "route_by_step", "path_map": {"input": "input"}},
        {"source": "input", "router": "route_by_step", "path_map": {"process": "process"}},
        {"source": "process", "router": "route_by_step",
         "path_map": {"result": "result", "error": "error"}}
    ]
}"#;

/// Router answering the step field as the route key.
pub fn route_by_step() -> EdgeRouter<ConvState> {
    router_fn(|state: &ConvState| Ok(Route::Key(state.step.clone())))
}

/// Demo handlers with the input node scripted to produce `input_value`.
pub fn demo_handlers(input_value: &str) -> HashMap<String, NodeHandler<ConvState>> {
    let input_value = input_value.to_string();
    let mut handlers: HashMap<String, NodeHandler<ConvState>> = HashMap::new();
    handlers.insert(
        "router".into(),
        handler_fn(|state: ConvState| async move { Ok(state) }),
    );
    handlers.insert(
        "init".into(),
        handler_fn(|mut state: ConvState| async move {
            state.response = "Please provide some input.".to_string();
            state.step = "input".to_string();
            Ok(state)
        }),
    );
    handlers.insert(
        "input".into(),
        handler_fn(move |mut state: ConvState| {
            let value = input_value.clone();
            async move {
                state.user_input = value;
                state.step = "process".to_string();
                Ok(state)
            }
        }),
    );
    handlers.insert(
        "process".into(),
        handler_fn(|mut state: ConvState| async move {
            if state.user_input.is_empty() {
                state.step = "error".to_string();
                return Ok(state);
            }
            state.response = state.user_input.to_uppercase();
            state.step = "result".to_string();
            Ok(state)
        }),
    );
    handlers.insert(
        "result".into(),
        handler_fn(|mut state: ConvState| async move {
            state.response = format!("Final result: {}", state.response);
            Ok(state)
        }),
    );
    handlers.insert(
        "error".into(),
        handler_fn(|mut state: ConvState| async move {
            state.response = "Error: No input provided.".to_string();
            Ok(state)
        }),
    );
    handlers
}

/// Builder for the demo graph with the input node scripted.
pub fn demo_graph(input_value: &str) -> FlowGraph<ConvState> {
    let config = GraphConfig::from_str(DEMO_CONFIG).expect("demo config parses");
    FlowGraph::new(config)
        .with_handlers(demo_handlers(input_value))
        .with_router("route_by_step", route_by_step())
}
