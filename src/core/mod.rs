//! # Core Module — The Knowledge Base and Its Vocabulary
//!
//! This module groups the **fundamental types** of the expert system.
//! Everything the engine reasons about is expressed with these types:
//!
//! - [`Purpose`], [`VisitTime`], [`VisitDuration`] — the three closed
//!   category axes a visitor answers (codes `G01`..`G05`, `I01`..`I03`,
//!   `J01`..`J03`)
//! - [`DestinationId`] — the conclusion vocabulary (`H01`..`H05`)
//! - [`Rule`] — one immutable condition→conclusion entry
//! - [`KnowledgeBase`] — the ordered ten-rule table plus the fixed
//!   fallback conclusion
//!
//! The whole module is constant data: the axes are closed at compile
//! time, the rule table is a literal, and nothing here is ever mutated
//! after process start. Human-readable labels for each code live on the
//! axis enums (`label()`), used by the presentation layer only — the
//! engine matches on the codes, never on labels.

/// Sub-module with the category-code enums and their parsing.
pub mod codes;

/// Sub-module with the [`Rule`] record.
pub mod rule;

/// Sub-module with the [`KnowledgeBase`] — the compiled-in rule table.
pub mod knowledge_base;

// Re-exports for convenience — allows `crate::core::Purpose` directly.
pub use codes::{DestinationId, Purpose, UnknownCode, VisitDuration, VisitTime};
pub use knowledge_base::KnowledgeBase;
pub use rule::Rule;
