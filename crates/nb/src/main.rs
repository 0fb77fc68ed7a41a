//! nb CLI - markdown to block payloads.
//!
//! Provides commands for:
//! - `render`: Print the block sequence for a markdown file
//! - `line`: Print title rich text for one line of markdown
//! - `page`: Print a create-page payload
//! - `append`: Print an append-children payload

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{AppendArgs, LineArgs, PageArgs, RenderArgs};
use output::Output;

/// nb - Markdown to structured content blocks.
#[derive(Parser)]
#[command(name = "nb", version, about)]
struct Cli {
    /// Enable info logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a markdown file to blocks.
    Render(RenderArgs),
    /// Render one line of markdown to title rich text.
    Line(LineArgs),
    /// Build a create-page payload from a markdown file.
    Page(PageArgs),
    /// Build an append-children payload from a markdown file.
    Append(AppendArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render(args) => args.execute(&output),
        Commands::Line(args) => args.execute(&output),
        Commands::Page(args) => args.execute(&output),
        Commands::Append(args) => args.execute(&output),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
