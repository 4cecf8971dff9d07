//! Compiled workflow graph: immutable, supports invoke and stream.
//!
//! Built by `FlowGraph::compile`. Holds the entry point, node handlers,
//! static and conditional transitions (termination tokens already normalized),
//! the tool registry and optional checkpointer/middleware. Immutable after
//! compilation; clone it freely to run concurrent invocations over distinct
//! states.

use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::sync::Arc;

use tokio::sync::mpsc;
use tokio_stream::wrappers::ReceiverStream;
use tracing::debug;

use crate::error::ExecutionError;
use crate::memory::{Checkpoint, CheckpointSource, Checkpointer, RunConfig};
use crate::stream::{StreamEvent, StreamMode};
use crate::tools::{Tool, ToolRegistry};

use super::config::NodeConfig;
use super::next::Next;
use super::node_middleware::NodeMiddleware;
use super::resolve::{EdgeRouter, NodeHandler};
use super::run_context::RunContext;

/// One compiled conditional edge: the resolved router plus its normalized
/// path map.
#[derive(Clone)]
pub(super) struct ConditionalEdge<S> {
    pub(super) router: EdgeRouter<S>,
    pub(super) path_map: HashMap<super::route::Route, Next>,
}

/// Executable graph produced by `FlowGraph::compile`.
///
/// Each step invokes the current node's handler, rebinds the working state to
/// its return value, then resolves the next node: the conditional router when
/// one is bound (taking precedence over any static edge at the same source),
/// else the static edge, else end of run. The engine imposes no step bound:
/// a cyclic config with no terminating condition runs indefinitely;
/// configuration correctness is the caller's responsibility.
#[derive(Clone)]
pub struct CompiledFlow<S> {
    pub(super) entry: String,
    pub(super) nodes: HashMap<String, NodeHandler<S>>,
    pub(super) node_configs: HashMap<String, NodeConfig>,
    pub(super) static_edges: HashMap<String, Next>,
    pub(super) conditional_edges: HashMap<String, ConditionalEdge<S>>,
    pub(super) tools: ToolRegistry,
    pub(super) checkpointer: Option<Arc<dyn Checkpointer<S>>>,
    pub(super) middleware: Option<Arc<dyn NodeMiddleware<S>>>,
}

impl<S> CompiledFlow<S>
where
    S: Clone + Send + Sync + Debug + 'static,
{
    /// Shared run loop behind invoke() and stream(): steps through nodes
    /// until a termination transition resolves.
    async fn run_loop_inner(
        &self,
        state: &mut S,
        config: &Option<RunConfig>,
        current: &mut String,
        run_ctx: Option<&RunContext<S>>,
    ) -> Result<(), ExecutionError> {
        let mut step: u64 = 0;
        loop {
            let handler = self
                .nodes
                .get(current.as_str())
                .cloned()
                .ok_or_else(|| ExecutionError::MissingHandler(current.clone()))?;
            debug!(node = %current, step, "executing node");

            let current_state = state.clone();
            let new_state = if let Some(middleware) = &self.middleware {
                let node_name = current.clone();
                middleware
                    .around_run(&node_name, current_state, Box::new(move |s| handler(s)))
                    .await?
            } else {
                handler(current_state).await?
            };
            *state = new_state;
            step += 1;

            if let Some(ctx) = run_ctx {
                if let Some(tx) = &ctx.stream_tx {
                    if ctx.stream_mode.contains(&StreamMode::Values) {
                        let _ = tx.send(StreamEvent::Values(state.clone())).await;
                    }
                    if ctx.stream_mode.contains(&StreamMode::Updates) {
                        let _ = tx
                            .send(StreamEvent::Updates {
                                node: current.clone(),
                                state: state.clone(),
                            })
                            .await;
                    }
                }
            }

            match self.next_for(current, state)? {
                Next::End => {
                    if let (Some(cp), Some(cfg)) = (&self.checkpointer, config) {
                        if cfg.thread_id.is_some() {
                            let checkpoint =
                                Checkpoint::from_state(state.clone(), CheckpointSource::Update, step);
                            let _ = cp.put(cfg, &checkpoint).await;
                        }
                    }
                    debug!(node = %current, step, "run complete");
                    return Ok(());
                }
                Next::Node(name) => *current = name,
            }
        }
    }

    /// Resolves the transition out of a node. Conditional routing takes
    /// precedence over a static edge at the same source; a route key absent
    /// from the path map, and a node with no outgoing transition at all, both
    /// resolve to end of run rather than an error.
    fn next_for(&self, node: &str, state: &S) -> Result<Next, ExecutionError> {
        if let Some(edge) = self.conditional_edges.get(node) {
            let route = (edge.router)(state)?;
            return Ok(match edge.path_map.get(&route) {
                Some(next) => next.clone(),
                None => {
                    debug!(node, ?route, "route key not in path map; ending run");
                    Next::End
                }
            });
        }
        if let Some(next) = self.static_edges.get(node) {
            return Ok(next.clone());
        }
        Ok(Next::End)
    }

    /// Runs the graph from its entry point with the given initial state and
    /// returns the final state.
    ///
    /// When `config` carries a `thread_id` and the graph was compiled with a
    /// checkpointer, the final state is saved before returning. Pass `None`
    /// for no persistence.
    pub async fn invoke(&self, state: S, config: Option<RunConfig>) -> Result<S, ExecutionError> {
        self.invoke_with_partial(state, config)
            .await
            .map_err(|(error, _)| error)
    }

    /// Like [`invoke`](Self::invoke), but on failure hands back the state as
    /// it was when the run aborted, paired with the error. Mutations applied
    /// by completed steps stay inspectable; there is no rollback.
    pub async fn invoke_with_partial(
        &self,
        state: S,
        config: Option<RunConfig>,
    ) -> Result<S, (ExecutionError, S)> {
        let mut state = state;
        let mut current = self.entry.clone();
        debug!(entry = %current, "starting run");
        match self
            .run_loop_inner(&mut state, &config, &mut current, None)
            .await
        {
            Ok(()) => Ok(state),
            Err(error) => Err((error, state)),
        }
    }

    /// Streams graph execution, emitting the selected event kinds through a
    /// channel-backed stream while the run proceeds on a spawned task.
    pub fn stream(
        &self,
        state: S,
        config: Option<RunConfig>,
        stream_mode: impl Into<HashSet<StreamMode>>,
    ) -> ReceiverStream<StreamEvent<S>> {
        let (tx, rx) = mpsc::channel(128);
        let graph = self.clone();
        let mode_set: HashSet<StreamMode> = stream_mode.into();

        tokio::spawn(async move {
            let mut state = state;
            let mut current = graph.entry.clone();
            let run_ctx = RunContext {
                config: config.clone().unwrap_or_default(),
                stream_tx: Some(tx),
                stream_mode: mode_set,
            };
            let _ = graph
                .run_loop_inner(&mut state, &config, &mut current, Some(&run_ctx))
                .await;
        });

        ReceiverStream::new(rx)
    }

    /// Name of the node a run starts from.
    pub fn entry_point(&self) -> &str {
        &self.entry
    }

    /// Declaration of a node as it appeared in the config.
    pub fn get_node_config(&self, name: &str) -> Result<&NodeConfig, ExecutionError> {
        self.node_configs
            .get(name)
            .ok_or_else(|| ExecutionError::UnknownNode(name.to_string()))
    }

    /// Resolves the tools a node declares against the tool registry. Lazy:
    /// an unregistered id only errors when the node's tools are requested.
    pub fn get_node_tools(&self, name: &str) -> Result<Vec<Arc<dyn Tool>>, ExecutionError> {
        let node = self.get_node_config(name)?;
        node.tools
            .iter()
            .map(|id| {
                self.tools
                    .get(id)
                    .ok_or_else(|| ExecutionError::UnknownTool(id.clone()))
            })
            .collect()
    }
}
