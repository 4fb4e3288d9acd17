//! Domain layer containing the numerical engine and its types.
//!
//! # Module Organization
//!
//! - `ahp` - Pairwise-comparison matrices and weight derivation
//!   (classical, fuzzy and PPF variants)
//!
//! Everything here is pure computation: no I/O, no async, no shared
//! mutable state.

pub mod ahp;
