use std::process;

use clap::Parser;
use schema_prune::{document, prune};
use tracing::{error, info};

#[derive(Parser)]
#[command(author, version, about = "Prunes generated required fields from an app JSON Schema")]
struct Args {
    /// Path to the generated JSON Schema document
    #[arg(long, default_value = "app-json-schema.json", env = "SCHEMA_PRUNE_INPUT")]
    input: String,

    /// Path the pruned schema is written to
    #[arg(long, default_value = "schema.json", env = "SCHEMA_PRUNE_OUTPUT")]
    output: String,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    info!("Loading schema from: {}", args.input);

    let mut doc = match document::load(&args.input).await {
        Ok(doc) => doc,
        Err(e) => {
            error!("Failed to load schema: {}", e);
            process::exit(1);
        }
    };

    let removed = match prune::apply(&mut doc) {
        Ok(removed) => removed,
        Err(e) => {
            error!("Failed to prune schema: {}", e);
            process::exit(1);
        }
    };

    info!("Removed {} required entries", removed);

    if let Err(e) = document::write(&args.output, &doc).await {
        error!("Failed to write schema: {}", e);
        process::exit(1);
    }

    info!("Wrote pruned schema to: {}", args.output);
}
