//! Shared run state: the single container threaded through every node.
//!
//! One state value flows through the graph, value-in/value-out: each handler
//! receives the current state and returns the next one, and the engine rebinds
//! its working state to the return value. The container is the sole channel of
//! information between nodes.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One message record in the conversation history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
}

impl Message {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }
}

/// Shared state carried through a graph run. All fields are optional/partial;
/// callers create it once per run with initial defaults and discard it after
/// termination.
///
/// `metadata` is a free-form mapping; state-shape adapters use it to nest
/// sub-states under a named key (see [`crate::adapter`]).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Ordered conversation history.
    #[serde(default)]
    pub messages: Vec<Message>,
    /// Free-form per-step data keyed by field name.
    #[serde(default)]
    pub step_data: HashMap<String, Value>,
    /// Explicit override of the next node, when a handler wants to steer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_node: Option<String>,
    /// Coarse classification of where the conversation is ("step").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chat_state: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    /// Nested metadata; carries adapter-wrapped sub-states.
    #[serde(default)]
    pub metadata: HashMap<String, Value>,
}

impl AgentState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message to the history.
    pub fn push_message(&mut self, role: impl Into<String>, content: impl Into<String>) {
        self.messages.push(Message::new(role, content));
    }
}

/// Read access to named scalar fields of a state type.
///
/// The generic field router routes on `state.field(name)`; any state driven
/// through `FlowGraph::compile` provides it. Missing and non-scalar fields
/// both answer `None`.
pub trait FieldAccess {
    fn field(&self, name: &str) -> Option<String>;
}

impl FieldAccess for AgentState {
    fn field(&self, name: &str) -> Option<String> {
        match name {
            "conversation_id" => self.conversation_id.clone(),
            "user_id" => self.user_id.clone(),
            "next_node" => self.next_node.clone(),
            "chat_state" => self.chat_state.clone(),
            "language" => self.language.clone(),
            _ => self
                .step_data
                .get(name)
                .and_then(Value::as_str)
                .map(str::to_string),
        }
    }
}
