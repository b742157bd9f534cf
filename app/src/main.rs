#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use clap::{Parser, Subcommand};
use command::{CommandStrategy, ConvertStrategy, SummaryInput, SummaryStrategy, VersionStrategy};
use tracing::Level;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

mod command;

#[derive(Parser)]
#[command(name = "xr-safety")]
#[command(about = "ALN shard safety checker and converter", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert an ALN shard from stdin into an annotated Rust module
    Convert,
    /// Summarize the safety rules of an ALN shard file
    Summary {
        /// Path to the shard file
        file: String,
    },
    /// Show version
    Version,
}

fn main() -> anyhow::Result<()> {
    // Reports go to stdout; logs stay on stderr.
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert => ConvertStrategy.execute(()),
        Commands::Summary { file } => SummaryStrategy.execute(SummaryInput { file }),
        Commands::Version => VersionStrategy.execute(()),
    }
}
