//! Demo workflow binary: compile the configured graph and run the console
//! chat loop until the user exits.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use flowgraph_cli::run_console;

#[derive(Parser, Debug)]
#[command(name = "flowgraph")]
#[command(about = "Run the conversation demo workflow from a JSON graph config")]
struct Args {
    /// Path to the graph config file.
    #[arg(short, long, value_name = "FILE", default_value = "demo_graph.json")]
    config: PathBuf,

    /// Log node enter/exit to stderr.
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                EnvFilter::new(if args.verbose { "debug" } else { "warn" })
            }),
        )
        .with_target(false)
        .init();

    if let Err(e) = run_console(&args.config, args.verbose).await {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
