//! Handler/router callable types and the two-tier resolution fallback.
//!
//! Behavior is pluggable two ways: an explicit registry map (composition
//! without subclassing) or a [`HandlerSource`] fallback object (bound-method
//! style). The compiler checks the registry first, the fallback second; the
//! first hit wins, absence in both is a compile-time failure.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use crate::error::ExecutionError;
use crate::graph::route::Route;

/// Boxed future returned by node handlers.
pub type HandlerFuture<S> = Pin<Box<dyn Future<Output = Result<S, ExecutionError>> + Send>>;

/// A node's behavior: consume the current state, produce the next one.
pub type NodeHandler<S> = Arc<dyn Fn(S) -> HandlerFuture<S> + Send + Sync>;

/// A conditional edge's behavior: inspect the state, answer a route key.
/// Routers never mutate state.
pub type EdgeRouter<S> = Arc<dyn Fn(&S) -> Result<Route, ExecutionError> + Send + Sync>;

/// Lifts an async closure into a [`NodeHandler`].
pub fn handler_fn<S, F, Fut>(f: F) -> NodeHandler<S>
where
    F: Fn(S) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<S, ExecutionError>> + Send + 'static,
{
    Arc::new(move |state| Box::pin(f(state)))
}

/// Lifts a plain closure into an [`EdgeRouter`].
pub fn router_fn<S, F>(f: F) -> EdgeRouter<S>
where
    F: Fn(&S) -> Result<Route, ExecutionError> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Last-resort source of named handlers and routers, consulted only when the
/// explicit registry lacks an entry.
///
/// Implement on a struct whose "methods" are the behaviors: answer `Some` for
/// the names you provide. Both lookups default to not-found so an implementor
/// can supply only one side.
pub trait HandlerSource<S>: Send + Sync {
    fn handler(&self, _name: &str) -> Option<NodeHandler<S>> {
        None
    }

    fn router(&self, _name: &str) -> Option<EdgeRouter<S>> {
        None
    }
}
