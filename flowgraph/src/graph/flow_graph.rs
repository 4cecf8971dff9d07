//! Declarative graph builder: config plus registries in, compiled graph out.
//!
//! `FlowGraph` pairs a [`GraphConfig`] with the collaborators that give it
//! behavior: handler/router registries, an optional fallback source, tools,
//! an optional checkpointer and middleware. `compile` validates the config,
//! resolves every name, normalizes termination tokens and produces an
//! immutable [`CompiledFlow`]. Compilation is pure: the same config and
//! registries always yield an equivalent graph.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tracing::warn;

use crate::memory::Checkpointer;
use crate::state::FieldAccess;
use crate::tools::ToolRegistry;

use super::compile_error::CompileError;
use super::compiled::{CompiledFlow, ConditionalEdge};
use super::config::{GraphConfig, NodeConfig, END};
use super::field_router::{route_by_state, ROUTE_BY_STATE};
use super::next::Next;
use super::node_middleware::NodeMiddleware;
use super::resolve::{EdgeRouter, HandlerSource, NodeHandler};
use super::route::Route;

/// Builder for a compiled workflow graph.
pub struct FlowGraph<S> {
    config: GraphConfig,
    handlers: HashMap<String, NodeHandler<S>>,
    routers: HashMap<String, EdgeRouter<S>>,
    fallback: Option<Arc<dyn HandlerSource<S>>>,
    tools: ToolRegistry,
    checkpointer: Option<Arc<dyn Checkpointer<S>>>,
    middleware: Option<Arc<dyn NodeMiddleware<S>>>,
}

impl<S> FlowGraph<S>
where
    S: Clone + Send + Sync + FieldAccess + 'static,
{
    /// Starts a builder over a parsed config, with empty registries.
    pub fn new(config: GraphConfig) -> Self {
        Self {
            config,
            handlers: HashMap::new(),
            routers: HashMap::new(),
            fallback: None,
            tools: ToolRegistry::new(),
            checkpointer: None,
            middleware: None,
        }
    }

    /// Registers a handler under a name.
    pub fn with_handler(mut self, name: impl Into<String>, handler: NodeHandler<S>) -> Self {
        self.handlers.insert(name.into(), handler);
        self
    }

    /// Merges a whole handler registry. Existing entries with the same name
    /// are replaced.
    pub fn with_handlers(mut self, handlers: HashMap<String, NodeHandler<S>>) -> Self {
        self.handlers.extend(handlers);
        self
    }

    /// Registers a router under a name.
    pub fn with_router(mut self, name: impl Into<String>, router: EdgeRouter<S>) -> Self {
        self.routers.insert(name.into(), router);
        self
    }

    /// Merges a whole router registry.
    pub fn with_routers(mut self, routers: HashMap<String, EdgeRouter<S>>) -> Self {
        self.routers.extend(routers);
        self
    }

    /// Attaches the fallback source consulted when a name is absent from the
    /// registries.
    pub fn with_fallback(mut self, fallback: Arc<dyn HandlerSource<S>>) -> Self {
        self.fallback = Some(fallback);
        self
    }

    /// Attaches the tool registry resolved by `get_node_tools`.
    pub fn with_tools(mut self, tools: ToolRegistry) -> Self {
        self.tools = tools;
        self
    }

    /// Attaches a checkpointer; final state is saved when the invoke config
    /// carries a thread id.
    pub fn with_checkpointer(mut self, checkpointer: Arc<dyn Checkpointer<S>>) -> Self {
        self.checkpointer = Some(checkpointer);
        self
    }

    /// Attaches node middleware wrapping every handler invocation.
    pub fn with_middleware(mut self, middleware: Arc<dyn NodeMiddleware<S>>) -> Self {
        self.middleware = Some(middleware);
        self
    }

    /// Validates the config, resolves handlers and routers, and builds the
    /// executable graph.
    ///
    /// All configuration defects surface here, never at run time: an
    /// unresolvable name is [`CompileError::MissingHandler`]/[`MissingRouter`],
    /// anything structurally wrong is [`CompileError::InvalidConfig`] naming
    /// the offending node or field.
    ///
    /// [`MissingRouter`]: CompileError::MissingRouter
    pub fn compile(self) -> Result<CompiledFlow<S>, CompileError> {
        self.validate()?;

        let mut nodes: HashMap<String, NodeHandler<S>> = HashMap::new();
        let mut node_configs: HashMap<String, NodeConfig> = HashMap::new();
        for node in &self.config.nodes {
            nodes.insert(node.name.clone(), self.resolve_handler(node)?);
            node_configs.insert(node.name.clone(), node.clone());
        }

        // Static edges, in declaration order: last write wins per source.
        let mut static_edges: HashMap<String, Next> = HashMap::new();
        for edge in &self.config.edges {
            let next = Next::from_token(&edge.target);
            if static_edges.insert(edge.source.clone(), next).is_some() {
                warn!(
                    source = %edge.source,
                    "duplicate static edge source; keeping the last declaration"
                );
            }
        }

        let mut conditional_edges: HashMap<String, ConditionalEdge<S>> = HashMap::new();
        for conditional in &self.config.conditional_edges {
            let router = self.resolve_router(&conditional.source, &conditional.router)?;

            // Normalize the "__end__" token in both key and value position,
            // so a router may answer either a logical route name or the
            // termination key directly.
            let path_map: HashMap<Route, Next> = conditional
                .path_map
                .iter()
                .map(|(key, target)| (Route::from_token(key), Next::from_token(target)))
                .collect();

            let edge = ConditionalEdge { router, path_map };
            if conditional_edges
                .insert(conditional.source.clone(), edge)
                .is_some()
            {
                warn!(
                    source = %conditional.source,
                    "duplicate conditional edge source; keeping the last declaration"
                );
            }
        }

        Ok(CompiledFlow {
            entry: self.config.entry_point.clone(),
            nodes,
            node_configs,
            static_edges,
            conditional_edges,
            tools: self.tools,
            checkpointer: self.checkpointer,
            middleware: self.middleware,
        })
    }

    fn validate(&self) -> Result<(), CompileError> {
        let config = &self.config;
        if config.entry_point.is_empty() {
            return Err(CompileError::InvalidConfig(
                "missing entry point".to_string(),
            ));
        }

        let mut declared: HashSet<&str> = HashSet::new();
        for node in &config.nodes {
            if node.handler.is_empty() {
                return Err(CompileError::InvalidConfig(format!(
                    "node '{}' is missing a handler reference",
                    node.name
                )));
            }
            if !declared.insert(node.name.as_str()) {
                return Err(CompileError::InvalidConfig(format!(
                    "duplicate node name '{}'",
                    node.name
                )));
            }
        }

        if !declared.contains(config.entry_point.as_str()) {
            return Err(CompileError::InvalidConfig(format!(
                "entry point '{}' is not a declared node",
                config.entry_point
            )));
        }

        for edge in &config.edges {
            if !declared.contains(edge.source.as_str()) {
                return Err(CompileError::InvalidConfig(format!(
                    "edge source '{}' is not a declared node",
                    edge.source
                )));
            }
            if edge.target != END && !declared.contains(edge.target.as_str()) {
                return Err(CompileError::InvalidConfig(format!(
                    "edge target '{}' is not a declared node",
                    edge.target
                )));
            }
        }

        for conditional in &config.conditional_edges {
            if !declared.contains(conditional.source.as_str()) {
                return Err(CompileError::InvalidConfig(format!(
                    "conditional edge source '{}' is not a declared node",
                    conditional.source
                )));
            }
            for target in conditional.path_map.values() {
                if target != END && !declared.contains(target.as_str()) {
                    return Err(CompileError::InvalidConfig(format!(
                        "path map target '{}' from '{}' is not a declared node",
                        target, conditional.source
                    )));
                }
            }
        }

        Ok(())
    }

    /// Two-tier handler resolution: explicit registry first, fallback source
    /// second. Absence in both is a hard compile failure.
    fn resolve_handler(&self, node: &NodeConfig) -> Result<NodeHandler<S>, CompileError> {
        if let Some(handler) = self.handlers.get(&node.handler) {
            return Ok(handler.clone());
        }
        if let Some(fallback) = &self.fallback {
            if let Some(handler) = fallback.handler(&node.handler) {
                return Ok(handler);
            }
        }
        Err(CompileError::MissingHandler {
            node: node.name.clone(),
            handler: node.handler.clone(),
        })
    }

    /// Router resolution: registry, fallback source, then the built-in field
    /// router under its reserved name.
    fn resolve_router(&self, source: &str, name: &str) -> Result<EdgeRouter<S>, CompileError> {
        if let Some(router) = self.routers.get(name) {
            return Ok(router.clone());
        }
        if let Some(fallback) = &self.fallback {
            if let Some(router) = fallback.router(name) {
                return Ok(router);
            }
        }
        if name == ROUTE_BY_STATE {
            let cfg = self.config.state_router.clone().unwrap_or_default();
            return Ok(route_by_state(cfg));
        }
        Err(CompileError::MissingRouter {
            source: source.to_string(),
            router: name.to_string(),
        })
    }
}
