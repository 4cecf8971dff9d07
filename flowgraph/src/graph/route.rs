//! Route keys returned by edge routers.

use crate::graph::config::END;

/// What a router answers: a logical route key to look up in the path map, or
/// the termination marker directly.
///
/// Distinct from [`Next`](super::Next): a route key is the first stage of the
/// two-stage indirection (state value → route key → node name); the path map
/// performs the second stage.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    /// Logical route key; resolved through the conditional edge's path map.
    Key(String),
    /// End of run.
    End,
}

impl Route {
    /// Normalizes a raw config token: the literal `"__end__"` becomes the
    /// marker, everything else stays a key.
    pub fn from_token(token: &str) -> Self {
        if token == END {
            Route::End
        } else {
            Route::Key(token.to_string())
        }
    }
}
