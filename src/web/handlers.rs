//! # HTTP Handlers — The Application Endpoints
//!
//! Each public function in this module is an Axum handler, mapped to a
//! route in [`super::create_router()`]. Pages are rendered server-side
//! with Maud; the consultation submit and the history mutations follow
//! the **HTMX fragment** pattern — they return HTML fragments (not full
//! pages) that HTMX swaps into the DOM.
//!
//! ## Response Pattern
//!
//! | Handler | Method | Returns | Use |
//! |---------|--------|---------|-----|
//! | `beranda` | GET | full HTML | landing page with stats |
//! | `konsultasi` | GET | full HTML | consultation form |
//! | `submit_konsultasi` | POST | HTMX fragment | result card |
//! | `koleksi` | GET | full HTML | destination collection |
//! | `peta` | GET | full HTML | Leaflet map page |
//! | `peta_data` | GET | JSON | map markers |
//! | `riwayat` | GET | full HTML | history list (filterable) |
//! | `export_riwayat` | GET | CSV download | filtered export |
//! | `hapus_riwayat` | POST | HTMX fragment | updated list |
//! | `reset_riwayat` | POST | HTMX fragment | empty list |
//!
//! ## Degradation, Not Errors
//!
//! The consultation submit never rejects input: missing or unknown
//! codes enter the engine as unset fields and resolve into the fallback
//! recommendation, exactly like the engine contract. The only handler
//! that validates anything is the history delete, which checks that the
//! path segment is a UUID before touching the store.

use std::time::Instant;

use axum::extract::{Path, Query, State};
use axum::http::header;
use axum::response::Html;
use axum::Json;
use chrono::{NaiveDate, Utc};
use maud::html;
use uuid::Uuid;

use super::state::AppState;
use super::templates;
use crate::catalog;
use crate::history::{self, RecordInputs, RecordResult};
use crate::inference::{ConsultationInput, InferenceEngine};
use crate::stats;

/// Converts Maud markup into Axum's `Html<String>` response.
fn markup_to_html(m: maud::Markup) -> Html<String> {
    Html(m.into_string())
}

// ─── Pages ───────────────────────────────────────────────────────

/// GET `/` — Beranda, the landing page.
///
/// Renders the hero, the cultural stat cards and, when consultations
/// exist, a strip with history aggregates from [`stats::collect`].
pub async fn beranda(State(state): State<AppState>) -> Html<String> {
    let summary = stats::collect(&state.history.read());
    markup_to_html(templates::beranda_page(&summary))
}

/// GET `/konsultasi` — The expert-system consultation form.
///
/// Three option groups (Tujuan, Waktu, Durasi) rendered from the axis
/// enums' `ALL` lists, submitting via HTMX to POST `/konsultasi`.
pub async fn konsultasi() -> Html<String> {
    markup_to_html(templates::konsultasi_page())
}

/// GET `/koleksi` — The destination collection.
pub async fn koleksi() -> Html<String> {
    markup_to_html(templates::koleksi_page())
}

/// GET `/peta` — The location map (Leaflet + OpenStreetMap).
pub async fn peta() -> Html<String> {
    markup_to_html(templates::peta_page())
}

// ─── Consultation ────────────────────────────────────────────────

/// Form fields of the consultation submit.
///
/// All fields default to empty — a missing radio group must degrade to
/// the fallback recommendation, not to a 422.
#[derive(serde::Deserialize)]
pub struct KonsultasiForm {
    /// Tujuan Kunjungan code (`G01`..`G05`) or empty.
    #[serde(default)]
    pub tujuan: String,
    /// Waktu Kunjungan code (`I01`..`I03`) or empty.
    #[serde(default)]
    pub waktu: String,
    /// Durasi Kunjungan code (`J01`..`J03`) or empty.
    #[serde(default)]
    pub durasi: String,
}

/// POST `/konsultasi` — Runs one inference and returns the result card.
///
/// ## Flow
///
/// ```text
/// 1. Parse the three codes (unknown/empty → unset field)
/// 2. InferenceEngine::infer → destination + optional rule
/// 3. Resolve the destination through the catalog
/// 4. Append a history record, persist to disk
/// 5. Render the result card fragment (cites "Aturan #n" on a match)
/// ```
///
/// HTMX swaps the returned fragment into `#hasil-konsultasi`.
pub async fn submit_konsultasi(
    State(state): State<AppState>,
    axum::Form(form): axum::Form<KonsultasiForm>,
) -> Html<String> {
    let input = ConsultationInput::from_codes(
        form.tujuan.trim(),
        form.waktu.trim(),
        form.durasi.trim(),
    );

    let t0 = Instant::now();
    let outcome = InferenceEngine::infer(&state.kb, &input);
    let destination = catalog::get(outcome.destination);

    tracing::info!(
        destination = %outcome.destination,
        rule = ?outcome.rule_id(),
        complete = input.is_complete(),
        elapsed_us = t0.elapsed().as_micros() as u64,
        "consultation inferred"
    );

    // Record the consultation, then persist outside the write lock.
    state.history.write().add(
        RecordInputs::from_input(&input),
        RecordResult::from_destination(destination),
    );
    if let Err(e) = crate::persistence::save_history(&state.history) {
        tracing::error!(error = %e, "failed to save history after consultation");
    }

    markup_to_html(templates::result_card(destination, outcome.rule_id()))
}

// ─── Map data ────────────────────────────────────────────────────

/// One marker on the Peta page's Leaflet map.
#[derive(serde::Serialize)]
pub struct MapMarker {
    /// Destination identifier (`H01`..`H05`).
    pub id: String,
    /// Destination name for the popup.
    pub name: String,
    /// WGS84 latitude.
    pub lat: f64,
    /// WGS84 longitude.
    pub lng: f64,
}

/// GET `/peta/data` — Marker data for the map renderer.
///
/// The frontend script fetches this once on page load and places one
/// marker per catalog entry.
pub async fn peta_data() -> Json<Vec<MapMarker>> {
    let markers = catalog::DESTINATIONS
        .iter()
        .map(|d| MapMarker {
            id: d.id.code().to_string(),
            name: d.name.to_string(),
            lat: d.lat,
            lng: d.lng,
        })
        .collect();
    Json(markers)
}

// ─── History ─────────────────────────────────────────────────────

/// Query parameters of the Riwayat page and the CSV export.
///
/// `dari`/`sampai` are `YYYY-MM-DD` strings from `<input type="date">`;
/// unparseable values are ignored rather than rejected.
#[derive(serde::Deserialize, Default)]
pub struct RiwayatFilter {
    /// Exact destination name, or empty/absent for all.
    #[serde(default)]
    pub destinasi: String,
    /// Start date (inclusive, WIB).
    #[serde(default)]
    pub dari: String,
    /// End date (inclusive, WIB).
    #[serde(default)]
    pub sampai: String,
}

impl RiwayatFilter {
    fn destination(&self) -> Option<&str> {
        match self.destinasi.trim() {
            "" => None,
            name => Some(name),
        }
    }

    fn from_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.dari.trim(), "%Y-%m-%d").ok()
    }

    fn to_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.sampai.trim(), "%Y-%m-%d").ok()
    }
}

/// GET `/riwayat` — Consultation history, filterable by destination and
/// date range.
pub async fn riwayat(
    State(state): State<AppState>,
    Query(filter): Query<RiwayatFilter>,
) -> Html<String> {
    let history = state.history.read();
    let filtered = history.filtered(filter.destination(), filter.from_date(), filter.to_date());
    markup_to_html(templates::riwayat_page(
        &filtered,
        history.len(),
        &history.unique_destinations(),
        filter.destination(),
        filter.dari.trim(),
        filter.sampai.trim(),
    ))
}

/// GET `/riwayat/export` — CSV download of the (filtered) history.
///
/// Applies the same filters as the Riwayat page so the export matches
/// what the visitor sees. The filename carries the export date.
pub async fn export_riwayat(
    State(state): State<AppState>,
    Query(filter): Query<RiwayatFilter>,
) -> ([(header::HeaderName, String); 2], String) {
    let history = state.history.read();
    let filtered = history.filtered(filter.destination(), filter.from_date(), filter.to_date());
    let csv = history::export_csv(&filtered);
    tracing::info!(records = filtered.len(), "history exported as CSV");

    let filename = format!(
        "riwayat-konsultasi-{}.csv",
        Utc::now().format("%Y-%m-%d")
    );
    (
        [
            (
                header::CONTENT_TYPE,
                "text/csv; charset=utf-8".to_string(),
            ),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        csv,
    )
}

/// POST `/riwayat/hapus/{id}` — Deletes one record, returns the
/// refreshed (unfiltered) list fragment.
pub async fn hapus_riwayat(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Html<String> {
    // Validate the UUID before touching the store.
    let uuid = match Uuid::parse_str(&id) {
        Ok(u) => u,
        Err(_) => {
            return markup_to_html(html! {
                div class="notice error" { "ID riwayat tidak valid" }
            });
        }
    };

    let removed = state.history.write().remove(uuid);
    if removed {
        if let Err(e) = crate::persistence::save_history(&state.history) {
            tracing::error!(error = %e, "failed to save history after delete");
        }
        tracing::info!(id = %uuid, "history record deleted");
    }

    let history = state.history.read();
    let records: Vec<_> = history.records().iter().collect();
    markup_to_html(templates::riwayat_list(&records, history.len()))
}

/// POST `/riwayat/reset` — Clears the whole history, returns the empty
/// list fragment. The button carries `hx-confirm`, so the browser asks
/// before this fires.
pub async fn reset_riwayat(State(state): State<AppState>) -> Html<String> {
    state.history.write().clear();
    if let Err(e) = crate::persistence::save_history(&state.history) {
        tracing::error!(error = %e, "failed to save history after reset");
    }
    tracing::info!("history cleared by user");

    markup_to_html(templates::riwayat_list(&[], 0))
}
