//! Checkpointing: optional, injectable persistence of run state.
//!
//! A [`Checkpointer`] is attached with `FlowGraph::with_checkpointer`; when
//! the invoke [`RunConfig`] carries a `thread_id`, the final state of the run
//! is saved under it. The core defines only the trait and an in-memory
//! implementation for dev/tests; durable backends are the caller's business.

mod checkpoint;
mod checkpointer;
mod config;
mod memory_saver;

pub use checkpoint::{Checkpoint, CheckpointListItem, CheckpointMetadata, CheckpointSource};
pub use checkpointer::{CheckpointError, Checkpointer};
pub use config::RunConfig;
pub use memory_saver::MemorySaver;
