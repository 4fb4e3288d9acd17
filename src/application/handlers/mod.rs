//! Application handlers.
//!
//! Query handlers that orchestrate the weight engine over the fixed
//! datasets. Derivations are synchronous: they are pure CPU-bound
//! matrix arithmetic with nothing to await.

pub mod weights;
