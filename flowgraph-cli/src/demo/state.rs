//! Local state shape of the conversation demo.

use serde::{Deserialize, Serialize};

use flowgraph::FieldAccess;

/// Metadata key the conversation sub-state lives under when the demo graph
/// carries `AgentState`.
pub const CONVERSATION_KEY: &str = "conversation";

/// Conversation demo state: a step marker plus the last input and response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConversationState {
    pub step: String,
    pub user_input: String,
    pub response: String,
}

impl ConversationState {
    /// Fresh state at the start step, as each console round begins.
    pub fn at_start() -> Self {
        Self {
            step: "start".to_string(),
            ..Default::default()
        }
    }
}

impl FieldAccess for ConversationState {
    fn field(&self, name: &str) -> Option<String> {
        match name {
            "step" => Some(self.step.clone()),
            "user_input" => Some(self.user_input.clone()),
            "response" => Some(self.response.clone()),
            _ => None,
        }
    }
}
