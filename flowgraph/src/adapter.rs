//! State-shape adapters: run handlers authored against a local state shape
//! inside a graph that carries [`AgentState`].
//!
//! A sub-state lives as JSON under a named key of the enclosing state's
//! `metadata` map. Adapted handlers extract it, run the inner handler, and
//! write the result back to the same key; adapted routers extract it and
//! answer the inner route key without touching the enclosing state. An absent
//! sub-state is a wiring bug between graphs and fails immediately; no default
//! is ever synthesized.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

use crate::error::ExecutionError;
use crate::graph::{EdgeRouter, NodeHandler};
use crate::state::AgentState;

fn decode_sub_state<T: DeserializeOwned>(
    state: &AgentState,
    key: &str,
) -> Result<T, ExecutionError> {
    let raw = state
        .metadata
        .get(key)
        .ok_or_else(|| ExecutionError::AdapterStateMissing { key: key.to_string() })?;
    serde_json::from_value(raw.clone()).map_err(|e| {
        ExecutionError::ExecutionFailed(format!("sub-state '{}' failed to decode: {}", key, e))
    })
}

/// Wraps a handler over sub-state `T` into a handler over [`AgentState`].
///
/// The returned enclosing state is unchanged except for `metadata[key]`,
/// which holds the sub-state the inner handler returned.
pub fn adapt_handler<T>(key: impl Into<String>, inner: NodeHandler<T>) -> NodeHandler<AgentState>
where
    T: Serialize + DeserializeOwned + Send + 'static,
{
    let key = key.into();
    Arc::new(move |mut state: AgentState| {
        let key = key.clone();
        let inner = Arc::clone(&inner);
        Box::pin(async move {
            let sub: T = decode_sub_state(&state, &key)?;
            let updated = inner(sub).await?;
            let encoded = serde_json::to_value(&updated).map_err(|e| {
                ExecutionError::ExecutionFailed(format!(
                    "sub-state '{}' failed to encode: {}",
                    key, e
                ))
            })?;
            state.metadata.insert(key, encoded);
            Ok(state)
        })
    })
}

/// Wraps a router over sub-state `T` into a router over [`AgentState`].
///
/// The enclosing state is read, never mutated; the inner route key is
/// returned directly.
pub fn adapt_router<T>(key: impl Into<String>, inner: EdgeRouter<T>) -> EdgeRouter<AgentState>
where
    T: DeserializeOwned + Send + Sync + 'static,
{
    let key = key.into();
    Arc::new(move |state: &AgentState| {
        let sub: T = decode_sub_state(state, &key)?;
        inner(&sub)
    })
}

/// Builds an enclosing state carrying `inner` as the sub-state under `key`.
pub fn wrap_state<T: Serialize>(
    key: impl Into<String>,
    inner: &T,
) -> Result<AgentState, ExecutionError> {
    let key = key.into();
    let encoded = serde_json::to_value(inner).map_err(|e| {
        ExecutionError::ExecutionFailed(format!("sub-state '{}' failed to encode: {}", key, e))
    })?;
    let mut state = AgentState::new();
    state.metadata.insert(key, encoded);
    Ok(state)
}

/// Extracts the sub-state under `key` from an enclosing state. Fails with
/// [`ExecutionError::AdapterStateMissing`] when absent.
pub fn unwrap_state<T: DeserializeOwned>(
    key: &str,
    state: &AgentState,
) -> Result<T, ExecutionError> {
    decode_sub_state(state, key)
}
