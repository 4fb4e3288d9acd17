//! AHP Engine - pairwise-comparison weighting service.
//!
//! Derives criteria weights and Saaty consistency ratios from fixed
//! judgment matrices in three variants: classical AHP (three derivation
//! modes), fuzzy AHP over triangular fuzzy numbers (Buckley), and
//! PPF-AHP over Pythagorean preference pairs. The numerical core lives
//! in [`domain::ahp`] as pure functions; [`adapters::http`] exposes it
//! over a small REST surface.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
