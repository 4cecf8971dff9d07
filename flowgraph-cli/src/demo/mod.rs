//! Conversation demo: state shape, node handlers and tools for the console
//! workflow driven by `demo_graph.json`.

mod nodes;
mod state;
mod tools;

pub use nodes::{
    demo_handlers, error_handler, init_handler, input_handler, process_handler, result_handler,
    route_by_step, router_handler,
};
pub use state::{ConversationState, CONVERSATION_KEY};
pub use tools::{demo_tool_registry, UppercaseTool};
