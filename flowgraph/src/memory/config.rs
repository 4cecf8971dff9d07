//! Per-invoke run config: thread identity and namespace for checkpoints.

/// Config for a single invoke. Pass `None` to `CompiledFlow::invoke` to run
/// without persistence even when a checkpointer is attached.
#[derive(Debug, Clone, Default)]
pub struct RunConfig {
    /// Identifies the conversation/thread. Required for checkpoint saves.
    pub thread_id: Option<String>,
    /// Namespace separating checkpoint families (e.g. nested graphs). Empty
    /// by default.
    pub checkpoint_ns: String,
    /// Optional user identity, available to collaborators that key on it.
    pub user_id: Option<String>,
}

impl RunConfig {
    /// Config for a thread, empty namespace.
    pub fn for_thread(thread_id: impl Into<String>) -> Self {
        Self {
            thread_id: Some(thread_id.into()),
            ..Default::default()
        }
    }
}
