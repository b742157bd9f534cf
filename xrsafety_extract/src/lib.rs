#![warn(
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

//! Pattern-based rule extraction from ALN shard text.
//!
//! ALN shards are free-form text; this crate recognizes the two fixed rule
//! shapes the converter understands (the eligibility formula and the
//! quantum-roaming guard clause) plus simple `key = value` field
//! assignments. There is no grammar: extraction is regex matching, and a
//! pattern that does not match is a normal outcome, not an error.

pub mod engine;
pub mod fields;
pub mod patterns;

pub use engine::{ExtractionConfig, ExtractionEngine, RuleMatch};
pub use patterns::{PatternDef, PatternError, RuleKind, RulePattern};
