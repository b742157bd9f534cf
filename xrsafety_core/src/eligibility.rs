//! Safety eligibility math: E = S × (1 − R) × Es with roaming guards.

/// Minimum eligibility score required for quantum roaming.
pub const E_MIN: f32 = 0.5;

/// Maximum psych risk score tolerated for quantum roaming.
pub const R_MAX: f32 = 0.35;

/// Calculate eligibility from sleep token S, risk R, and enstasis Es.
///
/// Each factor is clamped to [0, 1] before the product is taken, so the
/// result is always in [0, 1].
#[must_use]
pub fn calculate_eligibility(s: f32, r: f32, es: f32) -> f32 {
    let clamped_s = s.clamp(0.0, 1.0);
    let clamped_r = r.clamp(0.0, 1.0);
    let clamped_es = es.clamp(0.0, 1.0);

    clamped_s * (1.0 - clamped_r) * clamped_es
}

/// Outcome of evaluating the quantum-roaming guards.
///
/// `reasons` holds one entry per failed guard, in guard order, so a denial
/// can be explained to the subject without re-running the checks.
#[derive(Debug, Clone, PartialEq)]
pub struct RoamingDecision {
    pub allowed: bool,
    pub reasons: Vec<String>,
}

impl RoamingDecision {
    /// "YES" / "NO" form used by the summary report.
    #[must_use]
    pub const fn verdict(&self) -> &str {
        if self.allowed { "YES" } else { "NO" }
    }
}

/// Evaluate all guards for quantum roaming.
///
/// Guards, in order: sleep stage in {N2, N3}, eligibility E ≥ [`E_MIN`],
/// risk R ≤ [`R_MAX`], dream mode `quantum_consciousness`. The stage and
/// mode are compared against their exact ALN tokens.
#[must_use]
pub fn check_quantum_roaming(
    sleep_stage: &str,
    s: f32,
    r: f32,
    es: f32,
    dream_mode: &str,
) -> RoamingDecision {
    let mut reasons = Vec::new();

    let valid_stage = matches!(sleep_stage, "N2" | "N3");
    if !valid_stage {
        reasons.push(format!("Sleep stage {sleep_stage} not in N2,N3"));
    }

    let e = calculate_eligibility(s, r, es);
    let meets_eligibility = e >= E_MIN;
    if !meets_eligibility {
        reasons.push(format!("Eligibility E={e:.2} < {E_MIN}"));
    }

    let below_risk_limit = r <= R_MAX;
    if !below_risk_limit {
        reasons.push(format!("Risk R={r:.2} > {R_MAX}"));
    }

    let correct_mode = dream_mode == "quantum_consciousness";
    if !correct_mode {
        reasons.push(format!("Dream mode {dream_mode} not quantum_consciousness"));
    }

    RoamingDecision {
        allowed: valid_stage && meets_eligibility && below_risk_limit && correct_mode,
        reasons,
    }
}

/// Output complexity chosen for the subject's current cognitive load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputComplexity {
    Detailed,
    Standard,
    Simplified,
}

/// Pick an output complexity from the cognitive load band.
///
/// Accessibility score A = 1 − clamp(band); detailed output requires
/// A ≥ 0.7, standard output A ≥ 0.4, anything lower gets simplified
/// explanations.
#[must_use]
pub fn adjust_for_cognitive_load(cognitive_load_band: f32) -> OutputComplexity {
    let accessibility_score = 1.0 - cognitive_load_band.clamp(0.0, 1.0);

    match accessibility_score {
        a if a >= 0.7 => OutputComplexity::Detailed,
        a if a >= 0.4 => OutputComplexity::Standard,
        _ => OutputComplexity::Simplified,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eligibility_example_values() {
        // S=0.8, R=0.2, Es=0.9 → E = 0.8 × 0.8 × 0.9 = 0.576
        let e = calculate_eligibility(0.8, 0.2, 0.9);
        assert!((e - 0.576).abs() < 1e-6);
    }

    #[test]
    fn test_eligibility_clamps_factors() {
        // Out-of-range factors are clamped before multiplying.
        let e = calculate_eligibility(1.5, -0.3, 2.0);
        assert!((e - 1.0).abs() < 1e-6);

        let zero = calculate_eligibility(-1.0, 0.0, 1.0);
        assert!(zero.abs() < 1e-6);
    }

    #[test]
    fn test_roaming_allowed_in_n2() {
        let decision = check_quantum_roaming("N2", 0.8, 0.2, 0.9, "quantum_consciousness");
        assert!(decision.allowed);
        assert!(decision.reasons.is_empty());
        assert_eq!(decision.verdict(), "YES");
    }

    #[test]
    fn test_roaming_blocked_in_wake() {
        let decision = check_quantum_roaming("wake", 0.8, 0.2, 0.9, "quantum_consciousness");
        assert!(!decision.allowed);
        assert_eq!(decision.reasons, vec!["Sleep stage wake not in N2,N3"]);
    }

    #[test]
    fn test_roaming_collects_every_failed_guard() {
        let decision = check_quantum_roaming("REM", 0.1, 0.9, 0.2, "passive");
        assert!(!decision.allowed);
        assert_eq!(decision.reasons.len(), 4);
        assert!(decision.reasons[0].contains("not in N2,N3"));
        assert!(decision.reasons[1].contains("Eligibility"));
        assert!(decision.reasons[2].contains("Risk"));
        assert!(decision.reasons[3].contains("Dream mode"));
    }

    #[test]
    fn test_risk_ceiling_is_inclusive() {
        let decision = check_quantum_roaming("N3", 1.0, 0.35, 1.0, "quantum_consciousness");
        assert!(decision.allowed);

        let blocked = check_quantum_roaming("N3", 1.0, 0.36, 1.0, "quantum_consciousness");
        assert!(!blocked.allowed);
    }

    #[test]
    fn test_cognitive_load_bands() {
        assert_eq!(adjust_for_cognitive_load(0.0), OutputComplexity::Detailed);
        assert_eq!(adjust_for_cognitive_load(0.25), OutputComplexity::Detailed);
        assert_eq!(adjust_for_cognitive_load(0.5), OutputComplexity::Standard);
        assert_eq!(adjust_for_cognitive_load(0.9), OutputComplexity::Simplified);
        // Bands clamp out-of-range input instead of panicking.
        assert_eq!(adjust_for_cognitive_load(-2.0), OutputComplexity::Detailed);
        assert_eq!(adjust_for_cognitive_load(5.0), OutputComplexity::Simplified);
    }
}
