//! Built-in generic field router: route by a field of the shared state.
//!
//! Available to every compiled graph under the reserved name
//! `"route_by_state"`; an explicit registry or fallback entry with that name
//! takes precedence. Configured by the `state_router` config section.

use crate::graph::config::{StateRouterConfig, END};
use crate::graph::resolve::{router_fn, EdgeRouter};
use crate::graph::route::Route;
use crate::state::FieldAccess;

/// Reserved router name resolved to the built-in field router.
pub const ROUTE_BY_STATE: &str = "route_by_state";

/// Builds the field router for a config section.
///
/// Reads `state.field(cfg.field)`, substituting `cfg.default` when the field
/// is absent or empty, and lowercases the result. A value that is not a key of
/// `cfg.map` (including the substituted default itself), or that equals the
/// termination token, routes to end of run rather than erroring: an unmapped
/// value means "no further transition defined", not a defect.
///
/// On a hit the route key is the normalized value itself, not the mapped
/// target: the conditional edge's path map performs the key → node-name
/// translation, so several state values can share one destination.
pub fn route_by_state<S>(cfg: StateRouterConfig) -> EdgeRouter<S>
where
    S: FieldAccess + Send + Sync + 'static,
{
    router_fn(move |state: &S| {
        let value = state
            .field(&cfg.field)
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| cfg.default.clone())
            .to_lowercase();

        if value == END || !cfg.map.contains_key(&value) {
            return Ok(Route::End);
        }
        Ok(Route::Key(value))
    })
}
