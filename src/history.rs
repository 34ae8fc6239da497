//! # History — Past Consultations
//!
//! In-memory container for completed consultations, persisted to disk
//! by [`persistence`](crate::persistence) and rendered on the Riwayat
//! page. A record stores what the visitor answered (codes *and* labels,
//! so old records stay readable even if labels change) and what the
//! system recommended.
//!
//! ## Policies
//!
//! - **Newest first**: records are prepended, so index 0 is the most
//!   recent consultation.
//! - **Bounded**: only the [`MAX_RECORDS`] most recent records are
//!   kept, to stop the history file from growing without limit.
//! - **Fallback consultations are recorded too** — a record with no
//!   matching rule still names a destination (the fallback), and that
//!   is what gets stored.
//!
//! ## Display Formatting
//!
//! Timestamps are stored in UTC and formatted for display in WIB
//! (UTC+7, the destinations' timezone) with Indonesian day and month
//! names, matching the rest of the interface.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, Timelike, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::catalog::Destination;
use crate::inference::ConsultationInput;

/// Maximum number of records kept; older records are dropped on add.
pub const MAX_RECORDS: usize = 50;

/// The visitor's answers as recorded: code + label per axis.
///
/// Unset fields are stored as empty strings — the record mirrors what
/// the engine saw, including incomplete input that fell back.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordInputs {
    /// Tujuan Kunjungan code (`G01`..`G05`, or empty if unset).
    pub purpose: String,
    /// Label for the purpose code, for display.
    pub purpose_label: String,
    /// Waktu Kunjungan code (`I01`..`I03`, or empty if unset).
    pub time: String,
    /// Label for the time code.
    pub time_label: String,
    /// Durasi Kunjungan code (`J01`..`J03`, or empty if unset).
    pub duration: String,
    /// Label for the duration code.
    pub duration_label: String,
}

impl RecordInputs {
    /// Captures a consultation input as code/label strings.
    pub fn from_input(input: &ConsultationInput) -> Self {
        Self {
            purpose: input.purpose.map(|p| p.code()).unwrap_or("").to_string(),
            purpose_label: input.purpose.map(|p| p.label()).unwrap_or("").to_string(),
            time: input.time.map(|t| t.code()).unwrap_or("").to_string(),
            time_label: input.time.map(|t| t.label()).unwrap_or("").to_string(),
            duration: input.duration.map(|d| d.code()).unwrap_or("").to_string(),
            duration_label: input.duration.map(|d| d.label()).unwrap_or("").to_string(),
        }
    }
}

/// The recommendation as recorded: destination id + name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordResult {
    /// Destination identifier (`H01`..`H05`).
    pub id: String,
    /// Destination name at the time of the consultation.
    pub name: String,
}

impl RecordResult {
    /// Captures a resolved catalog entry.
    pub fn from_destination(dest: &Destination) -> Self {
        Self {
            id: dest.id.code().to_string(),
            name: dest.name.to_string(),
        }
    }
}

/// One completed consultation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsultationRecord {
    /// Record identifier (UUID v4).
    pub id: Uuid,
    /// When the consultation happened (UTC).
    pub timestamp: DateTime<Utc>,
    /// What the visitor answered.
    pub inputs: RecordInputs,
    /// What the system recommended.
    pub result: RecordResult,
}

/// Consultation history, newest first, capped at [`MAX_RECORDS`].
///
/// In the server it is shared as `Arc<RwLock<History>>`; handlers take
/// the lock only for the duration of a read or a single mutation.
#[derive(Serialize, Deserialize, Default)]
pub struct History {
    /// Records in reverse chronological order (index 0 = most recent).
    pub records: Vec<ConsultationRecord>,
}

impl History {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Appends a new record at the front and trims to [`MAX_RECORDS`].
    ///
    /// Returns a reference to the record just stored.
    pub fn add(&mut self, inputs: RecordInputs, result: RecordResult) -> &ConsultationRecord {
        let record = ConsultationRecord {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            inputs,
            result,
        };
        tracing::debug!(id = %record.id, destination = %record.result.id, "history: record stored");
        self.records.insert(0, record);
        self.records.truncate(MAX_RECORDS);
        &self.records[0]
    }

    /// Deletes a single record by id. Returns whether a record was removed.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        self.records.len() < before
    }

    /// Removes all records.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// All records, newest first.
    pub fn records(&self) -> &[ConsultationRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Distinct destination names in first-seen (i.e. most recent) order.
    ///
    /// Feeds the destination filter dropdown on the Riwayat page.
    pub fn unique_destinations(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for record in &self.records {
            if !names.contains(&record.result.name.as_str()) {
                names.push(&record.result.name);
            }
        }
        names
    }

    /// Records matching the Riwayat page filters: an exact destination
    /// name and/or an inclusive date range (dates in WIB).
    pub fn filtered(
        &self,
        destination: Option<&str>,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Vec<&ConsultationRecord> {
        self.records
            .iter()
            .filter(|r| {
                if let Some(name) = destination {
                    if r.result.name != name {
                        return false;
                    }
                }
                let date = r.timestamp.with_timezone(&wib()).date_naive();
                if let Some(from) = from {
                    if date < from {
                        return false;
                    }
                }
                if let Some(to) = to {
                    if date > to {
                        return false;
                    }
                }
                true
            })
            .collect()
    }
}

// ─── Display formatting (WIB, Indonesian names) ──────────────────

/// WIB (Waktu Indonesia Barat), UTC+7 — the destinations' timezone.
fn wib() -> FixedOffset {
    FixedOffset::east_opt(7 * 3600).expect("WIB offset is valid")
}

const DAYS_ID: [&str; 7] = [
    "Senin", "Selasa", "Rabu", "Kamis", "Jumat", "Sabtu", "Minggu",
];

const MONTHS_ID: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];

/// Full Indonesian timestamp for display, e.g.
/// `"Jumat, 7 Agustus 2026 14.30 WIB"`.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    let local = ts.with_timezone(&wib());
    format!(
        "{}, {} {} {} {:02}.{:02} WIB",
        DAYS_ID[local.weekday().num_days_from_monday() as usize],
        local.day(),
        MONTHS_ID[local.month0() as usize],
        local.year(),
        local.hour(),
        local.minute(),
    )
}

/// Date-only Indonesian format, e.g. `"7 Agustus 2026"`.
pub fn format_date(ts: DateTime<Utc>) -> String {
    let local = ts.with_timezone(&wib());
    format!(
        "{} {} {}",
        local.day(),
        MONTHS_ID[local.month0() as usize],
        local.year(),
    )
}

// ─── CSV export ──────────────────────────────────────────────────

/// CSV column headers, in the order the original export used.
const CSV_HEADERS: [&str; 7] = [
    "Tanggal",
    "Waktu",
    "Tujuan",
    "Waktu Kunjungan",
    "Durasi",
    "Hasil Rekomendasi",
    "Kode Hasil",
];

/// Quotes one CSV cell, doubling any embedded quotes.
fn csv_cell(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

/// Renders records as CSV for the Riwayat export download.
///
/// Dates and times are rendered in WIB (`dd/mm/yyyy` and `HH.MM.SS`,
/// the id-ID conventions). Takes the already-filtered record list so
/// the export matches what the page shows.
pub fn export_csv(records: &[&ConsultationRecord]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(CSV_HEADERS.join(","));
    for record in records {
        let local = record.timestamp.with_timezone(&wib());
        let row = [
            format!("{:02}/{:02}/{}", local.day(), local.month(), local.year()),
            format!(
                "{:02}.{:02}.{:02}",
                local.hour(),
                local.minute(),
                local.second()
            ),
            record.inputs.purpose_label.clone(),
            record.inputs.time_label.clone(),
            record.inputs.duration_label.clone(),
            record.result.name.clone(),
            record.result.id.clone(),
        ];
        lines.push(
            row.iter()
                .map(|cell| csv_cell(cell))
                .collect::<Vec<_>>()
                .join(","),
        );
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::core::DestinationId;
    use crate::inference::ConsultationInput;

    fn sample_inputs() -> RecordInputs {
        RecordInputs::from_input(&ConsultationInput::from_codes("G01", "I01", "J02"))
    }

    fn sample_result(id: DestinationId) -> RecordResult {
        RecordResult::from_destination(catalog::get(id))
    }

    #[test]
    fn add_prepends_newest_first() {
        let mut history = History::new();
        history.add(sample_inputs(), sample_result(DestinationId::H01));
        history.add(sample_inputs(), sample_result(DestinationId::H03));
        assert_eq!(history.len(), 2);
        assert_eq!(history.records()[0].result.id, "H03");
        assert_eq!(history.records()[1].result.id, "H01");
    }

    #[test]
    fn add_caps_at_max_records() {
        let mut history = History::new();
        for _ in 0..MAX_RECORDS + 5 {
            history.add(sample_inputs(), sample_result(DestinationId::H01));
        }
        assert_eq!(history.len(), MAX_RECORDS);
    }

    #[test]
    fn remove_by_id() {
        let mut history = History::new();
        history.add(sample_inputs(), sample_result(DestinationId::H01));
        let id = history.records()[0].id;
        assert!(history.remove(id));
        assert!(history.is_empty());
        assert!(!history.remove(id)); // already gone
    }

    #[test]
    fn clear_removes_everything() {
        let mut history = History::new();
        history.add(sample_inputs(), sample_result(DestinationId::H01));
        history.add(sample_inputs(), sample_result(DestinationId::H02));
        history.clear();
        assert!(history.is_empty());
    }

    #[test]
    fn unset_fields_are_recorded_as_empty_strings() {
        let input = ConsultationInput::from_codes("", "I01", "J02");
        let inputs = RecordInputs::from_input(&input);
        assert_eq!(inputs.purpose, "");
        assert_eq!(inputs.purpose_label, "");
        assert_eq!(inputs.time, "I01");
        assert_eq!(inputs.time_label, "Pagi");
    }

    #[test]
    fn unique_destinations_preserves_first_seen_order() {
        let mut history = History::new();
        history.add(sample_inputs(), sample_result(DestinationId::H01));
        history.add(sample_inputs(), sample_result(DestinationId::H05));
        history.add(sample_inputs(), sample_result(DestinationId::H01));
        let unique = history.unique_destinations();
        assert_eq!(unique.len(), 2);
        // newest first: the H01 added last is at index 0
        assert_eq!(unique[0], catalog::get(DestinationId::H01).name);
        assert_eq!(unique[1], catalog::get(DestinationId::H05).name);
    }

    #[test]
    fn filter_by_destination_name() {
        let mut history = History::new();
        history.add(sample_inputs(), sample_result(DestinationId::H01));
        history.add(sample_inputs(), sample_result(DestinationId::H04));
        let name = catalog::get(DestinationId::H04).name;
        let filtered = history.filtered(Some(name), None, None);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].result.name, name);
    }

    #[test]
    fn filter_by_date_range() {
        let mut history = History::new();
        history.add(sample_inputs(), sample_result(DestinationId::H01));
        let today = Utc::now().with_timezone(&wib()).date_naive();
        assert_eq!(history.filtered(None, Some(today), Some(today)).len(), 1);
        let tomorrow = today.succ_opt().unwrap();
        assert!(history.filtered(None, Some(tomorrow), None).is_empty());
        let yesterday = today.pred_opt().unwrap();
        assert!(history.filtered(None, None, Some(yesterday)).is_empty());
    }

    #[test]
    fn csv_has_headers_and_quoted_cells() {
        let mut history = History::new();
        history.add(sample_inputs(), sample_result(DestinationId::H05));
        let refs: Vec<&ConsultationRecord> = history.records().iter().collect();
        let csv = export_csv(&refs);
        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Tanggal,Waktu,Tujuan,Waktu Kunjungan,Durasi,Hasil Rekomendasi,Kode Hasil"
        );
        let row = lines.next().unwrap();
        assert!(row.contains("\"Menonton Pertunjukan\""));
        assert!(row.contains("\"Tempat Perawatan & Konservasi\""));
        assert!(row.ends_with("\"H05\""));
        assert!(lines.next().is_none());
    }

    #[test]
    fn csv_escapes_embedded_quotes() {
        assert_eq!(csv_cell("plain"), "\"plain\"");
        assert_eq!(csv_cell("a \"quoted\" word"), "\"a \"\"quoted\"\" word\"");
    }

    #[test]
    fn indonesian_timestamp_formatting() {
        // 2026-08-07 03:30 UTC = 10:30 WIB, a Friday (Jumat).
        let ts = DateTime::parse_from_rfc3339("2026-08-07T03:30:00Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(format_timestamp(ts), "Jumat, 7 Agustus 2026 10.30 WIB");
        assert_eq!(format_date(ts), "7 Agustus 2026");
    }
}
