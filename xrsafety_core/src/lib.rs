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

//! Core domain types and safety math for the XR sleep monitor.
//!
//! The eligibility score E = S × (1 − R) × Es and the quantum-roaming
//! guard conditions live here, independent of how rule text is parsed
//! or how reports are rendered.

mod eligibility;
mod state;

pub use eligibility::{
    E_MIN, OutputComplexity, R_MAX, RoamingDecision, adjust_for_cognitive_load,
    calculate_eligibility, check_quantum_roaming,
};
pub use state::{DreamMode, ParseError, SleepStage, SubjectState};
