//! File safety summary: computed eligibility plus blocked reasons.

use std::io::{self, Write};

use xrsafety_core::{calculate_eligibility, check_quantum_roaming};
use xrsafety_extract::fields;

/// Write the safety summary for one shard.
///
/// Fields missing from the shard fall back to the monitor defaults: zero
/// sleep token and risk, full stability, waking stage, passive mode.
///
/// # Errors
/// Returns an error only if the sink rejects a write.
pub fn write_file_summary<W: Write>(out: &mut W, filename: &str, aln: &str) -> io::Result<()> {
    let sleeptoken = fields::scan_f32(aln, "sleeptoken").unwrap_or(0.0);
    let psychriskscore = fields::scan_f32(aln, "psychriskscore").unwrap_or(0.0);
    let enstasisscore = fields::scan_f32(aln, "enstasisscore").unwrap_or(1.0);
    let sleepstage = fields::scan_str(aln, "sleepstage").unwrap_or_else(|| "wake".to_string());
    let dreammode = fields::scan_str(aln, "dreammode").unwrap_or_else(|| "passive".to_string());

    let e = calculate_eligibility(sleeptoken, psychriskscore, enstasisscore);
    let decision = check_quantum_roaming(
        &sleepstage,
        sleeptoken,
        psychriskscore,
        enstasisscore,
        &dreammode,
    );

    writeln!(out, "=== XR SAFETY SUMMARY ===")?;
    writeln!(out, "File: {filename}")?;
    writeln!(out, "Sleep stage: {sleepstage}")?;
    writeln!(out, "Dream mode: {dreammode}")?;
    writeln!(out, "Risk score: {psychriskscore:.2}")?;
    writeln!(out, "Eligibility E: {e:.2}")?;
    writeln!(out, "Quantum roaming allowed: {}", decision.verdict())?;

    if !decision.allowed {
        writeln!(out)?;
        writeln!(out, "⚠️  BLOCKED REASONS:")?;
        for reason in &decision.reasons {
            writeln!(out, "- {reason}")?;
        }
    }

    Ok(())
}
