//! Convert command: stdin ALN shard to the three-layer report.

use std::io::Read as _;

use tracing::info;
use xrsafety_report::convert_shard;

/// Strategy for executing the Convert command.
///
/// Reads the whole shard from standard input before any extraction runs
/// (no streaming, no partial reads), then writes the report to standard
/// output. The returned module text is dropped here; it exists for callers
/// embedding the converter as a library.
#[derive(Debug, Clone, Copy)]
pub struct ConvertStrategy;

impl super::CommandStrategy for ConvertStrategy {
    type Input = ();

    fn execute(&self, (): Self::Input) -> anyhow::Result<()> {
        let mut aln = String::new();
        std::io::stdin().read_to_string(&mut aln)?;

        info!("Read {} bytes of ALN input", aln.len());

        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        let _module = convert_shard(&aln, &mut out)?;

        Ok(())
    }
}
