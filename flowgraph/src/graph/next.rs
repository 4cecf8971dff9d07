//! Resolved transition targets.

use crate::graph::config::END;

/// Where execution goes after a node: a named node, or end of run.
///
/// The termination marker is a dedicated variant, never the raw `"__end__"`
/// string; configs are normalized into it at compile time so no string
/// comparison happens while running.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Next {
    /// Run the node with this name next.
    Node(String),
    /// Stop and return the current state as final.
    End,
}

impl Next {
    /// Normalizes a raw config token: the literal `"__end__"` becomes the
    /// marker, everything else is a node name.
    pub fn from_token(token: &str) -> Self {
        if token == END {
            Next::End
        } else {
            Next::Node(token.to_string())
        }
    }
}
