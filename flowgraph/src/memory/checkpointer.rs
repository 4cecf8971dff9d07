//! Checkpointer trait and errors.

use async_trait::async_trait;
use thiserror::Error;

use super::checkpoint::{Checkpoint, CheckpointListItem};
use super::config::RunConfig;

/// Error from a checkpointer operation.
#[derive(Debug, Error)]
pub enum CheckpointError {
    /// The run config carried no thread id to key the checkpoint by.
    #[error("run config has no thread_id")]
    MissingThreadId,

    /// Backend-specific failure.
    #[error("checkpoint storage failed: {0}")]
    Storage(String),
}

/// Persistence collaborator for run state. Opaque to the engine: the storage
/// format is the implementation's business, the engine only calls `put` with
/// the final state of a run.
#[async_trait]
pub trait Checkpointer<S>: Send + Sync {
    /// Saves a checkpoint for `config.thread_id`.
    async fn put(
        &self,
        config: &RunConfig,
        checkpoint: &Checkpoint<S>,
    ) -> Result<(), CheckpointError>;

    /// Loads the latest checkpoint for `config.thread_id`, if any.
    async fn get_tuple(&self, config: &RunConfig) -> Result<Option<Checkpoint<S>>, CheckpointError>;

    /// Lists saved checkpoints for `config.thread_id`, oldest first.
    async fn list(&self, config: &RunConfig) -> Result<Vec<CheckpointListItem>, CheckpointError>;
}
