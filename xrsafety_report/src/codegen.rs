//! Constant code artifacts emitted by the reports.
//!
//! `GENERATED_MODULE` is emitted as-is on every convert run. Extracted rule
//! values are NOT substituted into it; the formula and thresholds in the
//! module text are literal constants that happen to match the built-in rule
//! patterns. The emitted bytes are identical regardless of input.

/// The Rust module emitted in layer 2 of the convert report.
pub const GENERATED_MODULE: &str = r#"// AUTO-GENERATED from your ALN shard
// Neurorights preserved: mentalprivacy, cognitiveliberty, nopunitivexr

#[derive(Debug, Clone)]
pub struct SubjectState {
    pub sleepstage: SleepStage,
    pub sleeptoken: f32,      // S
    pub psychriskscore: f32,  // R
    pub enstasisscore: f32,   // Es
    pub dreammode: DreamMode,
}

pub enum SleepStage { Wake, N1, N2, N3, REM }
pub enum DreamMode { Passive, Active, QuantumConsciousness }

impl SubjectState {
    /// Calculate eligibility: E = S × (1 - R) × Es
    pub fn calculate_eligibility(&self) -> f32 {
        let s = self.sleeptoken.clamp(0.0, 1.0);
        let r = self.psychriskscore.clamp(0.0, 1.0);
        let es = self.enstasisscore.clamp(0.0, 1.0);
        s * (1.0 - r) * es
    }

    /// Check if quantum roaming is allowed
    pub fn is_quantum_roaming_allowed(&self) -> bool {
        let e = self.calculate_eligibility();
        let e_min = 0.5;      // From your ALN
        let r_max = 0.35;     // From your ALN

        // Guard 1: Sleep stage must be N2 or N3
        let valid_stage = matches!(self.sleepstage, SleepStage::N2 | SleepStage::N3);

        // Guard 2: Eligibility threshold
        let meets_eligibility = e >= e_min;

        // Guard 3: Psychrisk ceiling
        let below_risk_limit = self.psychriskscore <= r_max;

        valid_stage && meets_eligibility && below_risk_limit
    }
}

// Unit tests with your examples
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_safe_n2_allows_roaming() {
        let state = SubjectState {
            sleepstage: SleepStage::N2,
            sleeptoken: 0.8,
            psychriskscore: 0.2,
            enstasisscore: 0.9,
            dreammode: DreamMode::QuantumConsciousness,
        };
        assert!(state.is_quantum_roaming_allowed());
    }
}
"#;

/// Starter shard printed when the summary target cannot be read.
pub const ALN_STARTER: &str = r"// starter ALN shard for quantum-roaming checks
subject = anonymous
sleeptoken = 0.8
psychriskscore = 0.2
enstasisscore = 0.9
sleepstage = N2
dreammode = quantum_consciousness

eligibilityE = sleeptoken * (1.0 - psychriskscore) * enstasisscore
quantum_roaming_allowed = (sleepstage in N2, N3) AND eligibilityE >= 0.5 AND psychriskscore <= 0.35
";
