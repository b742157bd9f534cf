//! Summary command: computed safety verdict for a shard file.

use std::io::Write as _;

use tracing::{info, warn};
use xrsafety_report::{ALN_STARTER, write_file_summary};

/// Input parameters for the Summary command strategy.
#[derive(Debug, Clone)]
pub struct SummaryInput {
    /// Path to the shard file to summarize.
    pub file: String,
}

/// Strategy for executing the Summary command.
///
/// An unreadable file is not a failure: the command prints a starter shard
/// to copy from and exits cleanly.
#[derive(Debug, Clone, Copy)]
pub struct SummaryStrategy;

impl super::CommandStrategy for SummaryStrategy {
    type Input = SummaryInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();

        match std::fs::read_to_string(&input.file) {
            Ok(aln) => {
                info!("Summarizing shard: {}", input.file);
                write_file_summary(&mut out, &input.file, &aln)?;
            }
            Err(err) => {
                warn!("Cannot read {}: {err}", input.file);
                writeln!(out, "Could not read file. Here's a template ALN to create:")?;
                writeln!(out, "{ALN_STARTER}")?;
            }
        }

        Ok(())
    }
}
