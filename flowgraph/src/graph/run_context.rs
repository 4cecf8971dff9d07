//! Run context threaded through the streaming run loop.

use std::collections::HashSet;
use std::fmt::Debug;

use tokio::sync::mpsc;

use crate::memory::RunConfig;
use crate::stream::{StreamEvent, StreamMode};

/// Context of one streaming run: the invoke config plus the event sender and
/// the modes selected by the caller.
#[derive(Clone)]
pub struct RunContext<S>
where
    S: Clone + Send + Sync + Debug + 'static,
{
    /// Config for the current run (thread id, namespace, user id).
    pub config: RunConfig,
    /// Sender for streamed events; a dropped receiver just stops emission.
    pub stream_tx: Option<mpsc::Sender<StreamEvent<S>>>,
    /// Enabled stream modes.
    pub stream_mode: HashSet<StreamMode>,
}
