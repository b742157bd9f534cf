//! Configurable extraction patterns for ALN rules.
//!
//! Pattern definitions are plain serializable data so a custom set can be
//! loaded from configuration; the built-in set recognizes exactly the two
//! rule shapes the converter understands.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Error type for pattern building.
#[derive(Debug, Error)]
pub enum PatternError {
    /// The regex pattern is invalid.
    #[error("invalid regex: {0}")]
    Regex(String),

    /// The rule kind is invalid.
    #[error("unknown rule kind: {0}")]
    Kind(String),
}

impl From<regex::Error> for PatternError {
    fn from(err: regex::Error) -> Self {
        Self::Regex(err.to_string())
    }
}

/// The rule shape a pattern recognizes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RuleKind {
    /// The eligibility formula E = S × (1 − R) × Es.
    EligibilityFormula,
    /// The guard clause naming the sleep stages that permit roaming.
    RoamingGuard,
}

impl RuleKind {
    /// Returns the string representation of this kind.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::EligibilityFormula => "eligibility_formula",
            Self::RoamingGuard => "roaming_guard",
        }
    }
}

impl FromStr for RuleKind {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "eligibility_formula" => Ok(Self::EligibilityFormula),
            "roaming_guard" => Ok(Self::RoamingGuard),
            _ => Err("unknown rule kind"),
        }
    }
}

/// Definition of a single extraction pattern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatternDef {
    /// Unique identifier for this pattern.
    pub id: String,

    /// Human-readable name.
    pub name: String,

    /// Regex pattern to match text. Matching is case-sensitive; only
    /// whitespace flexibility belongs in the pattern itself.
    pub pattern: String,

    /// The kind of rule this pattern recognizes.
    pub kind: String,

    /// Summary-line template (supports $1, $2... for capture groups).
    pub summary: String,
}

impl PatternDef {
    /// Compile into a [`RulePattern`].
    ///
    /// # Errors
    /// Returns an error if the regex is invalid or the kind is unknown.
    pub fn build(&self) -> Result<RulePattern, PatternError> {
        let regex = Regex::new(&self.pattern)?;
        let kind =
            RuleKind::from_str(&self.kind).map_err(|_| PatternError::Kind(self.kind.clone()))?;

        Ok(RulePattern {
            name: self.name.clone(),
            kind,
            regex,
            summary: self.summary.clone(),
        })
    }
}

/// A compiled pattern ready to apply to shard text.
#[derive(Debug, Clone)]
pub struct RulePattern {
    pub name: String,
    pub kind: RuleKind,
    pub regex: Regex,
    pub summary: String,
}

/// Built-in pattern set: the two rule shapes the converter recognizes.
///
/// The roaming-guard capture is non-greedy up to the first literal `) AND`.
/// The stop token is matched case-sensitively; `) and` does not terminate
/// the stage list.
#[must_use]
pub fn default_patterns() -> Vec<PatternDef> {
    vec![
        PatternDef {
            id: "eligibility_formula".to_string(),
            name: "eligibility_formula".to_string(),
            pattern:
                r"eligibilityE\s*=\s*sleeptoken\s*\*\s*\(1\.0\s*-\s*psychriskscore\)\s*\*\s*enstasisscore"
                    .to_string(),
            kind: "eligibility_formula".to_string(),
            summary: "Safety score E = Sleeptoken × (1 - Risk) × Stability".to_string(),
        },
        PatternDef {
            id: "roaming_guard_stages".to_string(),
            name: "roaming_guard".to_string(),
            pattern: r"quantum_roaming_allowed\s*=\s*\(sleepstage in (.*?)\) AND".to_string(),
            kind: "roaming_guard".to_string(),
            summary: "Quantum roaming allowed only in sleep stages: $1".to_string(),
        },
    ]
}
