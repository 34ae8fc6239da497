//! # Maud Templates — Server-Side HTML Rendering
//!
//! HTML templates compiled at build time with the
//! [`maud`](https://maud.lambda.xyz/) macro. Maud compiles templates
//! straight into Rust code, so rendering is a string write with no
//! runtime template engine.
//!
//! ## Philosophy: HTMX + Maud = Hypermedia-Driven
//!
//! Instead of an SPA, the site follows the **hypermedia-driven**
//! pattern: the server returns HTML (full pages or fragments), HTMX
//! swaps fragments into the DOM, and the only page-level JavaScript is
//! the Leaflet map setup on the Peta page.
//!
//! ## Available Templates
//!
//! | Function | Kind | Description |
//! |----------|------|-------------|
//! | [`beranda_page()`] | full page | hero + stats + how-it-works |
//! | [`konsultasi_page()`] | full page | three option groups |
//! | [`result_card()`] | HTMX fragment | recommendation result |
//! | [`koleksi_page()`] | full page | destination collection |
//! | [`peta_page()`] | full page | Leaflet map |
//! | [`riwayat_page()`] | full page | filterable history |
//! | [`riwayat_list()`] | HTMX fragment | history list (swap target) |

use maud::{html, Markup, PreEscaped, DOCTYPE};

use crate::catalog::{self, Destination, DESTINATIONS, KRATON_CENTER};
use crate::core::{Purpose, VisitDuration, VisitTime};
use crate::history::{format_timestamp, ConsultationRecord};
use crate::stats::HistoryStats;

/// Navigation entries: (path, label). The active entry is highlighted.
const NAV_LINKS: [(&str, &str); 5] = [
    ("/", "Beranda"),
    ("/konsultasi", "Konsultasi"),
    ("/koleksi", "Koleksi"),
    ("/peta", "Peta"),
    ("/riwayat", "Riwayat"),
];

/// Shared page chrome: `<head>`, nav bar, footer.
///
/// `active` is the path of the current page; `extra_head` lets a page
/// pull in extra stylesheets/scripts (the Peta page adds Leaflet).
fn page_shell(title: &str, active: &str, extra_head: Markup, body: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="id" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) " — Wisata Gamelan Yogyakarta" }
                link rel="stylesheet" href="/assets/style.css";
                script src="https://unpkg.com/htmx.org@2.0.4" {}
                (extra_head)
            }
            body {
                nav class="nav-bar" {
                    a href="/" class="nav-brand" {
                        span class="nav-brand-icon" { "WG" }
                        span class="nav-brand-text" { "Wisata " em { "Gamelan" } }
                    }
                    div class="nav-links" {
                        @for (path, label) in NAV_LINKS {
                            a href=(path)
                                class=(if path == active { "nav-link active" } else { "nav-link" }) {
                                (label)
                            }
                        }
                    }
                }

                main class="page" { (body) }

                footer class="footer" {
                    p { "Sistem Pakar Rekomendasi Wisata Gamelan — Keraton Yogyakarta" }
                }
            }
        }
    }
}

// ─── Beranda ─────────────────────────────────────────────────────

/// Landing page: hero, cultural stat cards, how-it-works steps and —
/// once consultations exist — a strip of history aggregates.
pub fn beranda_page(stats: &HistoryStats) -> Markup {
    page_shell(
        "Beranda",
        "/",
        html! {},
        html! {
            section class="hero" {
                div class="hero-badge" { "✦ Sistem Pakar Wisata Budaya" }
                h1 class="hero-title" {
                    "Temukan Harmoni " span class="accent" { "Gamelan" }
                }
                p class="hero-subtitle" {
                    "Eksplorasi keindahan dan filosofi Gamelan Yogyakarta melalui "
                    "sistem pakar interaktif. Dapatkan rekomendasi destinasi wisata "
                    "yang sesuai dengan preferensi Anda."
                }
                a href="/konsultasi" class="btn btn-hero" { "Mulai Konsultasi →" }
            }

            section class="section" {
                h2 class="section-title" { "Warisan Budaya Nusantara" }
                p class="section-subtitle" {
                    "Gamelan adalah warisan budaya Indonesia yang diakui dunia"
                }
                div class="stat-grid" {
                    div class="stat-card" {
                        span class="stat-value" { "500+" }
                        span class="stat-label" { "Instrumen Gamelan" }
                    }
                    div class="stat-card" {
                        span class="stat-value" { "15+" }
                        span class="stat-label" { "Jenis Gamelan" }
                    }
                    div class="stat-card" {
                        span class="stat-value" { "100+" }
                        span class="stat-label" { "Tahun Sejarah" }
                    }
                }
            }

            @if stats.consultations > 0 {
                section class="section activity-strip" {
                    h2 class="section-title" { "Aktivitas Konsultasi" }
                    div class="stat-grid" {
                        div class="stat-card" {
                            span class="stat-value" { (stats.consultations) }
                            span class="stat-label" { "Konsultasi Tercatat" }
                        }
                        div class="stat-card" {
                            span class="stat-value" { (stats.distinct_destinations) }
                            span class="stat-label" { "Destinasi Direkomendasikan" }
                        }
                        @if let Some((name, count)) = &stats.top_destination {
                            div class="stat-card" {
                                span class="stat-value" { (count) "×" }
                                span class="stat-label" { "Terpopuler: " (name) }
                            }
                        }
                    }
                }
            }

            section class="section" {
                h2 class="section-title" { "Bagaimana Sistem Bekerja" }
                p class="section-subtitle" {
                    "Tiga langkah mudah untuk menemukan destinasi gamelan yang sempurna"
                }
                div class="step-grid" {
                    div class="step-card" {
                        div class="step-number" { "01" }
                        h3 { "Pilih Tujuan" }
                        p { "Tentukan apa yang ingin Anda alami — menonton, belajar, atau dokumentasi" }
                    }
                    div class="step-card" {
                        div class="step-number" { "02" }
                        h3 { "Atur Waktu" }
                        p { "Pilih waktu kunjungan dan durasi yang sesuai dengan jadwal Anda" }
                    }
                    div class="step-card" {
                        div class="step-number" { "03" }
                        h3 { "Dapatkan Rekomendasi" }
                        p { "Sistem pakar akan menganalisis dan memberikan rekomendasi terbaik" }
                    }
                }
            }
        },
    )
}

// ─── Konsultasi ──────────────────────────────────────────────────

/// One selectable option card (radio input + code badge + label).
fn option_card(name: &str, code: &str, label: &str) -> Markup {
    html! {
        label class="option-card" {
            input type="radio" name=(name) value=(code) required;
            span class="option-code" { (code) }
            span class="option-label" { (label) }
        }
    }
}

/// The consultation form: three option groups posting via HTMX.
///
/// The result card is swapped into `#hasil-konsultasi`; the radios are
/// `required`, so a browser will not submit an incomplete form — but
/// the server degrades to the fallback recommendation anyway if one
/// arrives (direct POST, scripted client).
pub fn konsultasi_page() -> Markup {
    page_shell(
        "Konsultasi",
        "/konsultasi",
        html! {},
        html! {
            div class="page-header" {
                h1 { "Konsultasi Wisata Gamelan" }
                p {
                    "Jawab beberapa pertanyaan berikut untuk mendapatkan rekomendasi "
                    "destinasi wisata gamelan yang sesuai dengan preferensi Anda."
                }
            }

            form class="consultation-form"
                hx-post="/konsultasi"
                hx-target="#hasil-konsultasi"
                hx-swap="innerHTML show:#hasil-konsultasi:top" {

                fieldset class="question-card" {
                    legend {
                        span class="question-title" { "Tujuan Kunjungan" }
                        span class="question-hint" { "Apa yang ingin Anda lakukan atau alami?" }
                    }
                    div class="option-grid two-col" {
                        @for purpose in Purpose::ALL {
                            (option_card("tujuan", purpose.code(), purpose.label()))
                        }
                    }
                }

                fieldset class="question-card" {
                    legend {
                        span class="question-title" { "Waktu Kunjungan" }
                        span class="question-hint" { "Kapan Anda berencana untuk berkunjung?" }
                    }
                    div class="option-grid three-col" {
                        @for time in VisitTime::ALL {
                            (option_card("waktu", time.code(), time.label()))
                        }
                    }
                }

                fieldset class="question-card" {
                    legend {
                        span class="question-title" { "Durasi Kunjungan" }
                        span class="question-hint" { "Berapa lama waktu yang Anda sediakan?" }
                    }
                    div class="option-grid three-col" {
                        @for duration in VisitDuration::ALL {
                            (option_card("durasi", duration.code(), duration.label()))
                        }
                    }
                }

                div class="submit-row" {
                    button type="submit" class="btn btn-hero" { "🔍 Mulai Konsultasi" }
                }
            }

            div id="hasil-konsultasi" {}
        },
    )
}

/// The recommendation result, swapped in by HTMX after a submit.
///
/// Cites "Aturan #n" when a rule matched; shows the fallback notice
/// when none did (incomplete input or no applicable rule — the two are
/// indistinguishable by design).
pub fn result_card(dest: &Destination, rule_id: Option<u32>) -> Markup {
    html! {
        div class="result-card" {
            div class="result-ornament" { "✦ Rekomendasi Ditemukan ✦" }
            div class="result-header" style=(format!("background-image: url('{}')", dest.image)) {
                div class="result-header-overlay" {
                    span class="dest-badge" { (dest.id.code()) }
                    h2 { (dest.name) }
                }
            }
            div class="result-body" {
                p class="result-description" { (dest.description) }

                div class="history-note" {
                    h3 { "📜 Nilai Sejarah" }
                    p { "\"" (dest.history) "\"" }
                }

                div class="info-grid" {
                    div class="info-item" {
                        span class="info-label" { "Lokasi" }
                        span class="info-value" { "Keraton Yogyakarta" }
                    }
                    div class="info-item" {
                        span class="info-label" { "Jam Operasional" }
                        span class="info-value" { (dest.hours) }
                    }
                    div class="info-item" {
                        span class="info-label" { "Harga Tiket" }
                        span class="info-value" { (dest.price) }
                    }
                }

                @if let Some(id) = rule_id {
                    div class="rule-note" {
                        "Rekomendasi berdasarkan "
                        strong { "Aturan #" (id) }
                        " dalam basis pengetahuan"
                    }
                } @else {
                    div class="rule-note fallback" {
                        "Tidak ada aturan yang cocok persis dengan pilihan Anda — "
                        "menampilkan rekomendasi umum"
                    }
                }

                div class="result-actions" {
                    a href="/konsultasi" class="btn btn-outline" { "↺ Ulangi Konsultasi" }
                    a href="/peta" class="btn btn-outline" { "📍 Lihat di Peta" }
                    a href="https://wa.me/6288225691061" target="_blank" class="btn btn-whatsapp" {
                        "💬 Tanya Admin via WhatsApp"
                    }
                }
            }
        }
    }
}

// ─── Koleksi ─────────────────────────────────────────────────────

/// The destination collection: one card per catalog entry.
pub fn koleksi_page() -> Markup {
    page_shell(
        "Koleksi",
        "/koleksi",
        html! {},
        html! {
            div class="page-header" {
                h1 { "Koleksi Wisata Gamelan" }
                p { "Lima destinasi wisata gamelan di lingkungan Keraton Yogyakarta" }
            }

            div class="collection-grid" {
                @for dest in &DESTINATIONS {
                    div class="collection-card" {
                        div class="collection-image"
                            style=(format!("background-image: url('{}')", dest.image)) {
                            span class="dest-badge" { (dest.id.code()) }
                        }
                        div class="collection-body" {
                            h3 { (dest.name) }
                            p { (dest.description) }
                            div class="collection-meta" {
                                span { "🕐 " (dest.hours) }
                                span { "🎫 " (dest.price) }
                            }
                        }
                    }
                }
            }
        },
    )
}

// ─── Peta ────────────────────────────────────────────────────────

/// The location map: Leaflet over OpenStreetMap tiles, one marker per
/// destination, fed by GET `/peta/data`.
pub fn peta_page() -> Markup {
    let (lat, lng) = KRATON_CENTER;
    page_shell(
        "Peta",
        "/peta",
        html! {
            link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css";
            script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js" {}
        },
        html! {
            div class="page-header" {
                h1 { "Lokasi Wisata Gamelan" }
                p {
                    "Temukan lokasi 5 destinasi wisata gamelan di sekitar "
                    "Keraton Yogyakarta"
                }
            }

            div id="peta-map" class="map-container" {}

            (PreEscaped(format!(r#"<script>
document.addEventListener('DOMContentLoaded', function() {{
  var map = L.map('peta-map').setView([{lat}, {lng}], 16);
  L.tileLayer('https://{{s}}.tile.openstreetmap.org/{{z}}/{{x}}/{{y}}.png', {{
    attribution: '&copy; <a href="https://www.openstreetmap.org/copyright">OpenStreetMap</a> contributors'
  }}).addTo(map);

  fetch('/peta/data')
    .then(function(r) {{ return r.json(); }})
    .then(function(markers) {{
      markers.forEach(function(m) {{
        var gmaps = 'https://www.google.com/maps/search/?api=1&query=' + m.lat + ',' + m.lng;
        L.marker([m.lat, m.lng]).addTo(map).bindPopup(
          '<span class="dest-badge">' + m.id + '</span>' +
          '<h3>' + m.name + '</h3>' +
          '<a href="' + gmaps + '" target="_blank">Buka di Google Maps →</a>'
        );
      }});
    }});
}});
</script>"#)))
        },
    )
}

// ─── Riwayat ─────────────────────────────────────────────────────

/// The history page: filter bar, actions and the record list.
///
/// `records` is the filtered view; `total` is the unfiltered count for
/// the "Menampilkan X dari Y" summary. Filters round-trip as query
/// parameters so the CSV export can apply the same view.
pub fn riwayat_page(
    records: &[&ConsultationRecord],
    total: usize,
    destinations: &[&str],
    selected_destination: Option<&str>,
    dari: &str,
    sampai: &str,
) -> Markup {
    // Destination names contain spaces and '&', so the query value is
    // percent-encoded; dates are plain YYYY-MM-DD.
    let export_href = format!(
        "/riwayat/export?destinasi={}&dari={}&sampai={}",
        urlencoding::encode(selected_destination.unwrap_or("")),
        dari,
        sampai
    );
    page_shell(
        "Riwayat",
        "/riwayat",
        html! {},
        html! {
            div class="page-header" {
                h1 { "Riwayat Konsultasi" }
                p { "Lihat kembali hasil konsultasi Anda sebelumnya" }
            }

            @if total > 0 {
                div class="actions-bar" {
                    form class="filter-form" method="get" action="/riwayat" {
                        select name="destinasi" {
                            option value="" selected[selected_destination.is_none()] {
                                "Semua Destinasi"
                            }
                            @for name in destinations {
                                option value=(name)
                                    selected[selected_destination == Some(*name)] {
                                    (name)
                                }
                            }
                        }
                        input type="date" name="dari" value=(dari);
                        input type="date" name="sampai" value=(sampai);
                        button type="submit" class="btn btn-outline" { "Filter" }
                        a href="/riwayat" class="btn btn-ghost" { "Reset" }
                    }
                    a href=(export_href) class="btn btn-outline" { "⬇ Export CSV" }
                    button class="btn btn-danger"
                        hx-post="/riwayat/reset"
                        hx-target="#riwayat-list"
                        hx-swap="outerHTML"
                        hx-confirm="Apakah Anda yakin ingin menghapus semua riwayat konsultasi? Tindakan ini tidak dapat dibatalkan." {
                        "🗑 Hapus Semua"
                    }
                }
            }

            (riwayat_list(records, total))
        },
    )
}

/// The history record list — the HTMX swap target for deletes/resets.
///
/// Rendered inside the Riwayat page and returned standalone by the
/// mutation handlers (which always render the unfiltered list).
pub fn riwayat_list(records: &[&ConsultationRecord], total: usize) -> Markup {
    html! {
        div id="riwayat-list" {
            @if records.is_empty() {
                div class="empty-state" {
                    div class="empty-icon" { "🗂" }
                    @if total == 0 {
                        h3 { "Belum Ada Riwayat Konsultasi" }
                        p { "Mulai konsultasi untuk mendapatkan rekomendasi destinasi wisata gamelan" }
                        a href="/konsultasi" class="btn btn-hero" { "Mulai Konsultasi →" }
                    } @else {
                        h3 { "Tidak Ada Hasil" }
                        p { "Tidak ditemukan riwayat dengan filter yang dipilih" }
                        a href="/riwayat" class="btn btn-outline" { "Reset Filter" }
                    }
                }
            } @else {
                @for record in records {
                    div class="record-card" {
                        div class="record-header" {
                            div {
                                h3 { (record.result.name) }
                                span class="record-time" { (format_timestamp(record.timestamp)) }
                            }
                            div class="record-actions" {
                                span class="dest-badge" { (record.result.id) }
                                button class="btn-delete"
                                    hx-post=(format!("/riwayat/hapus/{}", record.id))
                                    hx-target="#riwayat-list"
                                    hx-swap="outerHTML"
                                    hx-confirm=(format!(
                                        "Apakah Anda yakin ingin menghapus riwayat konsultasi \"{}\"?",
                                        record.result.name
                                    )) {
                                    "✕"
                                }
                            }
                        }
                        div class="record-inputs" {
                            @if !record.inputs.purpose_label.is_empty() {
                                span class="pill" { (record.inputs.purpose_label) }
                            }
                            @if !record.inputs.time_label.is_empty() {
                                span class="pill" { (record.inputs.time_label) }
                            }
                            @if !record.inputs.duration_label.is_empty() {
                                span class="pill" { (record.inputs.duration_label) }
                            }
                        }
                        @if let Some(dest) = catalog::find_by_code(&record.result.id) {
                            div class="record-detail" {
                                span { "🕐 " (dest.hours) }
                                span { "🎫 " (dest.price) }
                            }
                        }
                    }
                }
                div class="list-summary" {
                    "Menampilkan " (records.len()) " dari " (total) " riwayat konsultasi"
                }
            }
        }
    }
}
