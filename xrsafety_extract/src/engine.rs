//! Extraction engine for ALN shard rules.
//!
//! The engine applies every configured pattern to the full shard text and
//! collects a summary line per match. Patterns are independent: a pattern
//! that fails to match contributes nothing and never blocks the others.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::patterns::{self, PatternDef, PatternError, RuleKind, RulePattern};

/// Configuration for the extraction engine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Extraction patterns to apply, in order.
    pub patterns: Vec<PatternDef>,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            patterns: patterns::default_patterns(),
        }
    }
}

/// A rule recognized in shard text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleMatch {
    /// Which rule shape matched.
    pub kind: RuleKind,

    /// Expanded summary line for the plain-English report.
    pub summary: String,

    /// First capture group, verbatim, when the pattern has one.
    pub capture: Option<String>,
}

/// Pattern-based extraction over a whole ALN shard.
pub struct ExtractionEngine {
    /// Compiled patterns, in configuration order.
    patterns: Vec<RulePattern>,
}

impl ExtractionEngine {
    /// Create a new extraction engine from configuration.
    ///
    /// # Errors
    /// Returns an error if pattern compilation fails.
    pub fn new(config: &ExtractionConfig) -> Result<Self, PatternError> {
        let patterns = config
            .patterns
            .iter()
            .map(PatternDef::build)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { patterns })
    }

    /// Create an extraction engine with the built-in pattern set.
    ///
    /// # Errors
    /// Returns an error if built-in pattern compilation fails.
    pub fn with_defaults() -> Result<Self, PatternError> {
        Self::new(&ExtractionConfig::default())
    }

    /// Apply every pattern to the text, in definition order.
    ///
    /// Every pattern is attempted unconditionally. A non-match is silent:
    /// no placeholder entry, no error.
    #[must_use]
    pub fn extract(&self, text: &str) -> Vec<RuleMatch> {
        let mut matches = Vec::new();

        for pattern in &self.patterns {
            if let Some(found) = Self::apply_pattern(pattern, text) {
                matches.push(found);
            }
        }

        debug!(
            "Matched {} of {} rule patterns",
            matches.len(),
            self.patterns.len()
        );

        matches
    }

    /// Apply a single pattern to text.
    fn apply_pattern(pattern: &RulePattern, text: &str) -> Option<RuleMatch> {
        let caps = pattern.regex.captures(text)?;

        // Captures stay verbatim: the stage list is display text, not data.
        let capture = caps.get(1).map(|m| m.as_str().to_string());

        Some(RuleMatch {
            kind: pattern.kind,
            summary: Self::expand_template(&pattern.summary, &caps),
            capture,
        })
    }

    /// Expand a summary template with capture groups.
    fn expand_template(template: &str, caps: &regex::Captures) -> String {
        let mut result = template.to_string();

        // Expand $1, $2, etc. up to $9
        for i in 1..=9 {
            let placeholder = format!("${i}");
            if let Some(matched) = caps.get(i) {
                result = result.replace(&placeholder, matched.as_str());
            }
        }

        result
    }
}
