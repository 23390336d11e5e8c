//! hierarchical CLI - syllabus hierarchy lookup service
//!
//! Entry point for the `hierarchical` binary:
//! - `serve`: run the HTTP API backed by Postgres
//!
//! A `.env` file in the working directory is loaded before arguments are
//! parsed, so every `env =` fallback can come from it.

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "hierarchical",
    author,
    version,
    about = "Syllabus lookup service with parent relations"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run HTTP API server (GET /v1/syllabuses/{id})
    Serve(commands::serve::ServeArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
    }
    Ok(())
}
