//! # Web Application State
//!
//! Shared state passed to every Axum handler.
//!
//! ## Locking Discipline
//!
//! ```text
//! ┌──────────────────────────────┐
//! │ AppState                     │
//! │  ├── kb: Arc<KnowledgeBase>  │  immutable → no lock
//! │  └── history: Arc<RwLock<…>> │  mutable   → parking_lot::RwLock
//! └──────────────────────────────┘
//! ```
//!
//! The knowledge base is a compiled-in constant, so it is shared
//! without a lock — any number of concurrent inferences may read it.
//! Only the consultation history mutates at runtime; handlers take the
//! write lock for a single mutation and drop it before persisting.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::core::KnowledgeBase;
use crate::history::History;

/// Shared state of the Axum application.
#[derive(Clone)]
pub struct AppState {
    /// The compiled-in rule table and fallback. Immutable, lock-free.
    pub kb: Arc<KnowledgeBase>,
    /// Consultation history, guarded by `RwLock`.
    pub history: Arc<RwLock<History>>,
}
