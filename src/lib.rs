//! `closeout` - daily branch closing reports for retail.
//!
//! A manager's entered figures for one branch-day (sales, payments, cash,
//! expenses, credit, inventory, staffing) are reduced by a pure derivation
//! engine to reconciliation totals and variance classifications, rendered as
//! a printable report, exportable to a file, and optionally summarized by an
//! external AI narrative generator.

// Deny the most critical lints that could lead to bugs or security issues
#![deny(
    // Security and correctness
    unsafe_code,
    unsafe_op_in_unsafe_fn,

    // Code quality - things that are almost always bugs
    unreachable_code,
    unreachable_patterns,
    unused_must_use,

    // Documentation - broken links are bugs
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
)]
// Warn on things that should be fixed but aren't necessarily bugs
#![warn(
    missing_docs,
    clippy::all,
    clippy::pedantic,

    // Correctness
    clippy::dbg_macro,
    clippy::exit,
    clippy::expect_used,
    clippy::float_cmp,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,

    // Future compatibility
    future_incompatible,
    rust_2018_idioms,
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,  // Common pattern in Rust
    clippy::missing_errors_doc,       // Will add gradually
    clippy::missing_panics_doc,       // Will add gradually
)]

/// Configuration: environment variables and reference-data lists
pub mod config;
/// Core business logic - derivation engine, update functions, staffing sync
pub mod core;
/// Unified error types and result handling
pub mod errors;
/// Report export to file
pub mod export;
/// The `DailyReport` data model
pub mod model;
/// Plain-text rendering and currency formatting
pub mod render;
/// The report editing session (current value + figures + undo/redo)
pub mod session;
/// AI narrative summary collaborator
pub mod summary;

#[cfg(test)]
pub mod test_utils;
