//! # Category Codes — The Closed Vocabulary of the Expert System
//!
//! Every question the system asks the visitor is answered with a short
//! fixed-format code, one per category axis:
//!
//! | Axis | Codes | Question |
//! |------|-------|----------|
//! | [`Purpose`] | `G01`..`G05` | Tujuan Kunjungan — what do you want to experience? |
//! | [`VisitTime`] | `I01`..`I03` | Waktu Kunjungan — when do you plan to visit? |
//! | [`VisitDuration`] | `J01`..`J03` | Durasi Kunjungan — how long will you stay? |
//! | [`DestinationId`] | `H01`..`H05` | conclusion — which destination to recommend |
//!
//! Each axis is **closed**: the set of values is known at compile time
//! and nothing else is a valid input. The enums below are the single
//! source of truth for the codes, their Indonesian display labels, and
//! the option lists rendered on the consultation form.
//!
//! ## Parsing Policy
//!
//! All four enums implement [`FromStr`]. Parsing an empty or unknown
//! code fails with [`UnknownCode`] — callers at the web boundary map
//! that failure to the "unset" input state rather than an HTTP error,
//! because the engine resolves incomplete input into the fallback
//! recommendation instead of rejecting it (see
//! [`InferenceEngine`](crate::inference::InferenceEngine)).

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error returned when a string is not one of an axis's fixed codes.
///
/// Raised only at the string boundary (form fields, history records
/// read back from disk). The inference layer never sees it — a field
/// that fails to parse enters the engine as unset.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category code: {0:?}")]
pub struct UnknownCode(pub String);

// ─── Purpose (G01..G05) ──────────────────────────────────────────

/// Tujuan Kunjungan — what the visitor wants to experience.
///
/// Five options, codes `G01` through `G05`. The variant order is the
/// presentation order on the consultation form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Purpose {
    /// `G01` — Menonton Pertunjukan (watch a gamelan performance)
    WatchPerformance,
    /// `G02` — Belajar Bermain Gamelan (learn to play)
    LearnToPlay,
    /// `G03` — Mempelajari Sejarah Gamelan (study gamelan history)
    StudyHistory,
    /// `G04` — Melihat Proses Pembuatan Gamelan (see instruments being made)
    SeeCrafting,
    /// `G05` — Dokumentasi Kegiatan (documentation work)
    Documentation,
}

impl Purpose {
    /// All options in form presentation order.
    pub const ALL: [Purpose; 5] = [
        Purpose::WatchPerformance,
        Purpose::LearnToPlay,
        Purpose::StudyHistory,
        Purpose::SeeCrafting,
        Purpose::Documentation,
    ];

    /// The fixed category code, e.g. `"G01"`.
    pub fn code(&self) -> &'static str {
        match self {
            Purpose::WatchPerformance => "G01",
            Purpose::LearnToPlay => "G02",
            Purpose::StudyHistory => "G03",
            Purpose::SeeCrafting => "G04",
            Purpose::Documentation => "G05",
        }
    }

    /// Indonesian display label, used on the form and in history records.
    pub fn label(&self) -> &'static str {
        match self {
            Purpose::WatchPerformance => "Menonton Pertunjukan",
            Purpose::LearnToPlay => "Belajar Bermain Gamelan",
            Purpose::StudyHistory => "Mempelajari Sejarah Gamelan",
            Purpose::SeeCrafting => "Melihat Proses Pembuatan Gamelan",
            Purpose::Documentation => "Dokumentasi Kegiatan",
        }
    }
}

impl FromStr for Purpose {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.code() == s)
            .ok_or_else(|| UnknownCode(s.to_string()))
    }
}

impl fmt::Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ─── VisitTime (I01..I03) ────────────────────────────────────────

/// Waktu Kunjungan — the time of day of the planned visit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisitTime {
    /// `I01` — Pagi (morning)
    Morning,
    /// `I02` — Siang (midday/afternoon)
    Afternoon,
    /// `I03` — Malam (evening)
    Evening,
}

impl VisitTime {
    /// All options in form presentation order.
    pub const ALL: [VisitTime; 3] = [
        VisitTime::Morning,
        VisitTime::Afternoon,
        VisitTime::Evening,
    ];

    /// The fixed category code, e.g. `"I01"`.
    pub fn code(&self) -> &'static str {
        match self {
            VisitTime::Morning => "I01",
            VisitTime::Afternoon => "I02",
            VisitTime::Evening => "I03",
        }
    }

    /// Indonesian display label.
    pub fn label(&self) -> &'static str {
        match self {
            VisitTime::Morning => "Pagi",
            VisitTime::Afternoon => "Siang",
            VisitTime::Evening => "Malam",
        }
    }
}

impl FromStr for VisitTime {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.code() == s)
            .ok_or_else(|| UnknownCode(s.to_string()))
    }
}

impl fmt::Display for VisitTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ─── VisitDuration (J01..J03) ────────────────────────────────────

/// Durasi Kunjungan — how long the visitor plans to stay.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VisitDuration {
    /// `J01` — Singkat (1-2 Jam)
    Short,
    /// `J02` — Sedang (2-3 Jam)
    Medium,
    /// `J03` — Lama (4+ Jam)
    Long,
}

impl VisitDuration {
    /// All options in form presentation order.
    pub const ALL: [VisitDuration; 3] = [
        VisitDuration::Short,
        VisitDuration::Medium,
        VisitDuration::Long,
    ];

    /// The fixed category code, e.g. `"J01"`.
    pub fn code(&self) -> &'static str {
        match self {
            VisitDuration::Short => "J01",
            VisitDuration::Medium => "J02",
            VisitDuration::Long => "J03",
        }
    }

    /// Indonesian display label.
    pub fn label(&self) -> &'static str {
        match self {
            VisitDuration::Short => "Singkat (1-2 Jam)",
            VisitDuration::Medium => "Sedang (2-3 Jam)",
            VisitDuration::Long => "Lama (4+ Jam)",
        }
    }
}

impl FromStr for VisitDuration {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.code() == s)
            .ok_or_else(|| UnknownCode(s.to_string()))
    }
}

impl fmt::Display for VisitDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// ─── DestinationId (H01..H05) ────────────────────────────────────

/// Identifier of a destination in the tourism catalog.
///
/// The engine treats these as **opaque conclusions** — it produces and
/// consumes identifiers but never looks at catalog content. Resolving
/// an identifier to name, description, hours, price and coordinates is
/// the job of [`catalog`](crate::catalog). The variants keep the raw
/// `H`-codes as names because the codes *are* the domain vocabulary;
/// the human-readable names live in the catalog, not here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DestinationId {
    /// Pagelaran Gamelan Bangsal Sri Menganti
    H01,
    /// Museum Keraton Yogyakarta
    H02,
    /// Latihan Gamelan Abdi Dalem
    H03,
    /// Sanggar Belajar Gamelan
    H04,
    /// Tempat Perawatan & Konservasi
    H05,
}

impl DestinationId {
    /// All catalog identifiers in code order.
    pub const ALL: [DestinationId; 5] = [
        DestinationId::H01,
        DestinationId::H02,
        DestinationId::H03,
        DestinationId::H04,
        DestinationId::H05,
    ];

    /// The fixed identifier code, e.g. `"H01"`.
    pub fn code(&self) -> &'static str {
        match self {
            DestinationId::H01 => "H01",
            DestinationId::H02 => "H02",
            DestinationId::H03 => "H03",
            DestinationId::H04 => "H04",
            DestinationId::H05 => "H05",
        }
    }
}

impl FromStr for DestinationId {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.code() == s)
            .ok_or_else(|| UnknownCode(s.to_string()))
    }
}

impl fmt::Display for DestinationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_codes() {
        assert_eq!("G01".parse::<Purpose>(), Ok(Purpose::WatchPerformance));
        assert_eq!("I03".parse::<VisitTime>(), Ok(VisitTime::Evening));
        assert_eq!("J02".parse::<VisitDuration>(), Ok(VisitDuration::Medium));
        assert_eq!("H05".parse::<DestinationId>(), Ok(DestinationId::H05));
    }

    #[test]
    fn parse_rejects_empty_and_unknown() {
        assert!("".parse::<Purpose>().is_err());
        assert!("G99".parse::<Purpose>().is_err());
        assert!("g01".parse::<Purpose>().is_err()); // codes are case-sensitive
        assert!("I04".parse::<VisitTime>().is_err());
        assert!("H06".parse::<DestinationId>().is_err());
    }

    #[test]
    fn code_display_matches_parse() {
        for p in Purpose::ALL {
            assert_eq!(p.to_string().parse::<Purpose>(), Ok(p));
        }
        for d in DestinationId::ALL {
            assert_eq!(d.to_string().parse::<DestinationId>(), Ok(d));
        }
    }

    #[test]
    fn labels_are_the_original_indonesian_strings() {
        assert_eq!(Purpose::WatchPerformance.label(), "Menonton Pertunjukan");
        assert_eq!(VisitTime::Morning.label(), "Pagi");
        assert_eq!(VisitDuration::Long.label(), "Lama (4+ Jam)");
    }

    #[test]
    fn axis_sizes_are_closed() {
        assert_eq!(Purpose::ALL.len(), 5);
        assert_eq!(VisitTime::ALL.len(), 3);
        assert_eq!(VisitDuration::ALL.len(), 3);
        assert_eq!(DestinationId::ALL.len(), 5);
    }
}
