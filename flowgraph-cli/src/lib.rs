//! flowgraph-cli library: the conversation demo workflow behind the binary.
//!
//! Loads a JSON graph config, registers the demo handlers/routers/tools, and
//! runs the compiled graph from a console loop. Reusable pieces for other
//! drivers:
//!
//! ```rust,no_run,ignore
//! let graph = flowgraph_cli::build_demo_graph("demo_graph.json", false)?;
//! ```

pub mod demo;
mod logging_middleware;
mod run;

pub use logging_middleware::LoggingMiddleware;
pub use run::{build_demo_graph, demo_graph_from_config, run_console, Error};

#[cfg(test)]
mod tests;
