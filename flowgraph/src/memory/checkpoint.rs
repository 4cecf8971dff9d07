//! Checkpoint snapshot types.

use std::time::SystemTime;

/// Metadata for one checkpoint.
#[derive(Debug, Clone)]
pub struct CheckpointMetadata {
    pub source: CheckpointSource,
    pub step: u64,
    pub created_at: Option<SystemTime>,
}

/// What produced the checkpoint.
#[derive(Debug, Clone)]
pub enum CheckpointSource {
    /// Initial state handed to a run.
    Input,
    /// Saved at the end of a completed run.
    Update,
}

/// One checkpoint: a state snapshot keyed by (thread_id, checkpoint_ns).
#[derive(Debug, Clone)]
pub struct Checkpoint<S> {
    pub id: String,
    pub ts: String,
    pub state: S,
    pub metadata: CheckpointMetadata,
}

/// Item returned by `Checkpointer::list` for history inspection.
#[derive(Debug, Clone)]
pub struct CheckpointListItem {
    pub checkpoint_id: String,
    pub metadata: CheckpointMetadata,
}

impl<S> Checkpoint<S> {
    /// Builds a checkpoint from the current state, stamped with the current
    /// time.
    pub fn from_state(state: S, source: CheckpointSource, step: u64) -> Self {
        let now = SystemTime::now();
        let ts = format!(
            "{}",
            now.duration_since(SystemTime::UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or(0)
        );
        let id = format!("{}-{}", ts, step);
        Self {
            id,
            ts,
            state,
            metadata: CheckpointMetadata {
                source,
                step,
                created_at: Some(now),
            },
        }
    }
}
