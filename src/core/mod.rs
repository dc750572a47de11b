//! Core business logic - framework-agnostic derivation and editing operations.
//!
//! Everything in here is a pure function over [`crate::model`] values: the
//! derivation engine that reduces a report to its reconciliation figures, the
//! typed update functions that produce edited report values, and the staffing
//! count/name synchronization helper.

pub mod derive;
pub mod staffing;
pub mod update;
