//! Subject state as reported by the sleep monitor.
//!
//! `SubjectState` mirrors the record consumed by the roaming guard: the
//! current sleep stage, the three eligibility factors, and the dream mode.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

use crate::eligibility::{self, RoamingDecision};

/// Error type for unrecognized stage or mode tokens.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The sleep-stage token is not one of Wake/N1/N2/N3/REM.
    #[error("unknown sleep stage: {0}")]
    SleepStage(String),

    /// The dream-mode token is not passive/active/quantum_consciousness.
    #[error("unknown dream mode: {0}")]
    DreamMode(String),
}

/// Sleep stage reported by the monitor.
///
/// Only N2 and N3 count as deep stages for the roaming guard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum SleepStage {
    #[default]
    Wake = 0,
    N1 = 1,
    N2 = 2,
    N3 = 3,
    #[serde(rename = "REM")]
    Rem = 4,
}

impl SleepStage {
    /// Returns the stage token used in ALN shards.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::Wake => "Wake",
            Self::N1 => "N1",
            Self::N2 => "N2",
            Self::N3 => "N3",
            Self::Rem => "REM",
        }
    }

    /// Whether this is one of the deep stages accepted by the guard.
    #[must_use]
    pub const fn is_deep(&self) -> bool {
        matches!(self, Self::N2 | Self::N3)
    }
}

impl FromStr for SleepStage {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "wake" => Ok(Self::Wake),
            "n1" => Ok(Self::N1),
            "n2" => Ok(Self::N2),
            "n3" => Ok(Self::N3),
            "rem" => Ok(Self::Rem),
            _ => Err(ParseError::SleepStage(s.to_string())),
        }
    }
}

/// Dream mode requested for the session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum DreamMode {
    #[default]
    Passive = 0,
    Active = 1,
    QuantumConsciousness = 2,
}

impl DreamMode {
    /// Returns the mode token used in ALN shards.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::Passive => "passive",
            Self::Active => "active",
            Self::QuantumConsciousness => "quantum_consciousness",
        }
    }
}

impl FromStr for DreamMode {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "passive" => Ok(Self::Passive),
            "active" => Ok(Self::Active),
            "quantum_consciousness" => Ok(Self::QuantumConsciousness),
            _ => Err(ParseError::DreamMode(s.to_string())),
        }
    }
}

/// Snapshot of a monitored subject.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectState {
    pub sleepstage: SleepStage,
    /// Sleep token S, expected in [0, 1].
    pub sleeptoken: f32,
    /// Psych risk score R, expected in [0, 1].
    pub psychriskscore: f32,
    /// Enstasis (stability) score Es, expected in [0, 1].
    pub enstasisscore: f32,
    pub dreammode: DreamMode,
}

impl SubjectState {
    /// Eligibility E = S × (1 − R) × Es, factors clamped to [0, 1].
    #[must_use]
    pub fn eligibility(&self) -> f32 {
        eligibility::calculate_eligibility(self.sleeptoken, self.psychriskscore, self.enstasisscore)
    }

    /// Evaluate all roaming guards for this snapshot.
    #[must_use]
    pub fn roaming_decision(&self) -> RoamingDecision {
        eligibility::check_quantum_roaming(
            self.sleepstage.as_str(),
            self.sleeptoken,
            self.psychriskscore,
            self.enstasisscore,
            self.dreammode.as_str(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_stage_round_trip() {
        for stage in [
            SleepStage::Wake,
            SleepStage::N1,
            SleepStage::N2,
            SleepStage::N3,
            SleepStage::Rem,
        ] {
            let parsed = SleepStage::from_str(stage.as_str()).expect("token should parse");
            assert_eq!(parsed, stage);
        }
    }

    #[test]
    fn test_stage_parse_is_case_insensitive() {
        assert_eq!(SleepStage::from_str("n2"), Ok(SleepStage::N2));
        assert_eq!(SleepStage::from_str("REM"), Ok(SleepStage::Rem));
        assert_eq!(SleepStage::from_str("wake"), Ok(SleepStage::Wake));
    }

    #[test]
    fn test_unknown_stage_is_error() {
        let err = SleepStage::from_str("N4");
        assert_eq!(err, Err(ParseError::SleepStage("N4".to_string())));
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_dream_mode_tokens() {
        let mode = DreamMode::from_str("quantum_consciousness").expect("token should parse");
        assert_eq!(mode, DreamMode::QuantumConsciousness);
        assert_eq!(mode.as_str(), "quantum_consciousness");
    }

    #[test]
    fn test_deep_stages() {
        assert!(SleepStage::N2.is_deep());
        assert!(SleepStage::N3.is_deep());
        assert!(!SleepStage::Rem.is_deep());
        assert!(!SleepStage::Wake.is_deep());
    }

    #[test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    fn test_state_serialization() {
        let state = SubjectState {
            sleepstage: SleepStage::N2,
            sleeptoken: 0.8,
            psychriskscore: 0.2,
            enstasisscore: 0.9,
            dreammode: DreamMode::QuantumConsciousness,
        };

        let json = serde_json::to_string(&state).expect("state should serialize");
        assert!(json.contains("\"N2\""));
        assert!(json.contains("\"quantum_consciousness\""));

        let back: SubjectState = serde_json::from_str(&json).expect("valid JSON should deserialize");
        assert_eq!(back.sleepstage, SleepStage::N2);
    }
}
