//! # Inference Module — The Forward-Chaining Recommendation Engine
//!
//! This module contains the **inference procedure** of the expert
//! system: a single pure function that maps a visitor's answer triple
//! to a destination recommendation by scanning the rule table.
//!
//! ## Shape of the Procedure
//!
//! ```text
//! (purpose?, time?, duration?)
//!        │
//!        ├── any field unset ──────────────→ fallback, no rule
//!        │
//!        └── scan rules #1..#10 in order
//!               ├── first full match ──────→ rule.destination, rule
//!               └── no match ──────────────→ fallback, no rule
//! ```
//!
//! There is no state machine, no learning, and no partial-match
//! ranking — one shot, first match wins, deterministic by construction.
//!
//! See [`InferenceEngine`] for the contract details.

/// Sub-module with the engine implementation and its input/outcome types.
pub mod engine;

/// Re-exports for access via `crate::inference::InferenceEngine`.
pub use engine::{ConsultationInput, InferenceEngine, Outcome};
