//! # Web Module — The Visitor-Facing Site
//!
//! This module organizes the whole web layer of the application, built
//! with **Axum** + **HTMX** + **Maud**.
//!
//! ## Web Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ Browser (HTMX + Leaflet map)                            │
//! ├─────────────────────────────────────────────────────────┤
//! │ Axum Router (this module)                               │
//! │  ├── GET  /                    → beranda (landing)      │
//! │  ├── GET  /konsultasi          → consultation form      │
//! │  ├── POST /konsultasi          → HTMX result fragment   │
//! │  ├── GET  /koleksi             → destination collection │
//! │  ├── GET  /peta                → Leaflet map page       │
//! │  ├── GET  /peta/data           → JSON: map markers      │
//! │  ├── GET  /riwayat             → history (filterable)   │
//! │  ├── GET  /riwayat/export      → CSV download           │
//! │  ├── POST /riwayat/hapus/{id}  → HTMX list fragment     │
//! │  └── POST /riwayat/reset       → HTMX list fragment     │
//! ├─────────────────────────────────────────────────────────┤
//! │ Static assets (tower_http::ServeDir → /assets/)         │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Submodules
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`state`] | Shared state (`AppState`) |
//! | [`handlers`] | Axum handlers for each route |
//! | [`templates`] | Maud templates (server-side HTML) |

pub mod handlers;
pub mod state;
pub mod templates;

use axum::routing::{get, post};
use axum::Router;
use tower_http::services::ServeDir;

use state::AppState;

/// Builds the Axum router with all application routes.
///
/// ## Registered Routes
///
/// - **HTML pages**: `/`, `/konsultasi`, `/koleksi`, `/peta`, `/riwayat`
/// - **HTMX fragments**: POST `/konsultasi`, POST `/riwayat/hapus/{id}`,
///   POST `/riwayat/reset`
/// - **Data**: `/peta/data` (JSON markers), `/riwayat/export` (CSV)
/// - **Static**: `/assets/*` → `assets/` directory
///
/// The `AppState` is shared with every handler via Axum's
/// `State<AppState>` extractor.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // ── HTML pages ────────────────────────────────────────
        .route("/", get(handlers::beranda))
        .route("/konsultasi", get(handlers::konsultasi))
        .route("/koleksi", get(handlers::koleksi))
        .route("/peta", get(handlers::peta))
        .route("/riwayat", get(handlers::riwayat))
        // ── Consultation submit (HTMX fragment) ───────────────
        .route("/konsultasi", post(handlers::submit_konsultasi))
        // ── Data endpoints ────────────────────────────────────
        .route("/peta/data", get(handlers::peta_data))
        .route("/riwayat/export", get(handlers::export_riwayat))
        // ── History mutations (HTMX fragments) ───────────────
        .route("/riwayat/hapus/{id}", post(handlers::hapus_riwayat))
        .route("/riwayat/reset", post(handlers::reset_riwayat))
        // ── Static files ──────────────────────────────────────
        .nest_service("/assets", ServeDir::new("assets"))
        .with_state(state)
}
