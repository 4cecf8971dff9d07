//! In-memory checkpointer for dev and tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use super::checkpoint::{Checkpoint, CheckpointListItem};
use super::checkpointer::{CheckpointError, Checkpointer};
use super::config::RunConfig;

/// Keeps checkpoints in a process-local map keyed by (thread_id,
/// checkpoint_ns). Nothing survives the process; use it for tests and
/// prototyping.
#[derive(Default)]
pub struct MemorySaver<S> {
    threads: Mutex<HashMap<(String, String), Vec<Checkpoint<S>>>>,
}

impl<S> MemorySaver<S> {
    pub fn new() -> Self {
        Self {
            threads: Mutex::new(HashMap::new()),
        }
    }

    fn key(config: &RunConfig) -> Result<(String, String), CheckpointError> {
        let thread_id = config
            .thread_id
            .clone()
            .ok_or(CheckpointError::MissingThreadId)?;
        Ok((thread_id, config.checkpoint_ns.clone()))
    }
}

#[async_trait]
impl<S> Checkpointer<S> for MemorySaver<S>
where
    S: Clone + Send + Sync + 'static,
{
    async fn put(
        &self,
        config: &RunConfig,
        checkpoint: &Checkpoint<S>,
    ) -> Result<(), CheckpointError> {
        let key = Self::key(config)?;
        let mut threads = self
            .threads
            .lock()
            .map_err(|e| CheckpointError::Storage(e.to_string()))?;
        threads.entry(key).or_default().push(checkpoint.clone());
        Ok(())
    }

    async fn get_tuple(
        &self,
        config: &RunConfig,
    ) -> Result<Option<Checkpoint<S>>, CheckpointError> {
        let key = Self::key(config)?;
        let threads = self
            .threads
            .lock()
            .map_err(|e| CheckpointError::Storage(e.to_string()))?;
        Ok(threads.get(&key).and_then(|v| v.last().cloned()))
    }

    async fn list(&self, config: &RunConfig) -> Result<Vec<CheckpointListItem>, CheckpointError> {
        let key = Self::key(config)?;
        let threads = self
            .threads
            .lock()
            .map_err(|e| CheckpointError::Storage(e.to_string()))?;
        Ok(threads
            .get(&key)
            .map(|v| {
                v.iter()
                    .map(|cp| CheckpointListItem {
                        checkpoint_id: cp.id.clone(),
                        metadata: cp.metadata.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default())
    }
}
