#![allow(dead_code)]
#![allow(rustdoc::broken_intra_doc_links, rustdoc::invalid_html_tags)]
//! # Wisata Gamelan — Tourism Expert System
//!
//! **Main entry point** of the Gamelan tourism recommendation system:
//! a rule-based expert system that maps three visitor preferences
//! (tujuan, waktu, durasi) to one of five destinations around the
//! Kraton of Yogyakarta, served as a small hypermedia web application.
//!
//! ## Startup Flow
//!
//! ```text
//! main()
//!   ├── Configure tracing/logging (RUST_LOG, default info)
//!   ├── Build the compiled-in KnowledgeBase
//!   ├── Verify rule-set exclusivity (refuse to boot on duplicates)
//!   ├── Load consultation history from disk (or start empty)
//!   ├── Assemble AppState and Router
//!   └── Serve on http://localhost:3000
//! ```
//!
//! Unlike systems with a learned model, there is no second startup
//! phase: the knowledge base is a compiled-in constant, so the server
//! is fully ready the moment the port is bound.
//!
//! ## Usage
//!
//! ```bash
//! # Run with default logs (info)
//! cargo run
//!
//! # Run with detailed logs
//! RUST_LOG=debug cargo run
//!
//! # The site is served at http://localhost:3000
//! ```

// Application modules — one per architectural layer:

/// `core` module — category codes, rules, and the knowledge base.
mod core;

/// `inference` module — the forward-chaining recommendation engine.
mod inference;

/// `catalog` module — the compiled-in destination catalog.
mod catalog;

/// `history` module — consultation records, filters, CSV export.
mod history;

/// `persistence` module — history save/load as JSON on disk.
mod persistence;

/// `stats` module — read-only aggregates over the history.
mod stats;

/// `web` module — axum server, handlers, and maud templates.
mod web;

use std::sync::Arc;

use anyhow::{bail, Result};
use parking_lot::RwLock;
use tracing_subscriber::EnvFilter;

use crate::core::KnowledgeBase;
use crate::history::History;
use crate::web::state::AppState;

/// Async entry point of the expert system server.
///
/// # Errors
///
/// Returns an error if:
/// - the rule table violates the exclusivity invariant (two rules with
///   the same condition triple)
/// - binding port 3000 fails
/// - the axum server fails while running
#[tokio::main]
async fn main() -> Result<()> {
    // Logging/tracing setup. RUST_LOG overrides the level, e.g.
    // RUST_LOG=debug cargo run
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("🎶 Wisata Gamelan — Starting...");

    // The knowledge base is a compiled-in constant: construction cannot
    // fail, but the exclusivity invariant is checked once here so a
    // future rule edit that introduces a duplicate refuses to boot.
    let kb = KnowledgeBase::new();
    if let Some((a, b)) = kb.duplicate_rules() {
        bail!(
            "rule table violates exclusivity: rules #{} and #{} share a condition triple",
            a.id,
            b.id
        );
    }
    tracing::info!(rules = kb.len(), fallback = %kb.fallback(), "knowledge base ready");

    // Load the consultation history from disk (data/riwayat.json).
    // A missing or corrupt file starts an empty history — past records
    // are a convenience, never a boot requirement.
    let history = match persistence::load_history() {
        Ok(loaded) => {
            tracing::info!(records = loaded.len(), "history loaded from disk");
            Arc::new(RwLock::new(loaded))
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to load history from disk, starting empty");
            Arc::new(RwLock::new(History::new()))
        }
    };

    // Shared state for all handlers. The KB needs no lock — immutable.
    let state = AppState {
        kb: Arc::new(kb),
        history,
    };

    let app = web::create_router(state);

    let addr = "0.0.0.0:3000";
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("🚀 Server running at http://localhost:3000");

    axum::serve(listener, app).await?;

    Ok(())
}
