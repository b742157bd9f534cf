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

//! Report rendering for the XR safety CLI.
//!
//! Two reports exist: the three-layer convert report (plain-English rule
//! summary, generated Rust module, reasoning) and the file safety summary
//! with computed eligibility and blocked reasons. Both write to any
//! [`std::io::Write`] sink and are deterministic for a given input.

pub mod codegen;
pub mod convert;
pub mod summary;

pub use codegen::{ALN_STARTER, GENERATED_MODULE};
pub use convert::{convert_shard, write_convert_report};
pub use summary::write_file_summary;
