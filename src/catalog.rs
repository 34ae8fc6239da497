//! # Catalog — The Five Tourism Destinations
//!
//! Compiled-in catalog of the destinations the expert system can
//! recommend, all located around the Kraton of Yogyakarta. The engine
//! only ever produces a [`DestinationId`]; resolving that identifier to
//! display data (name, description, operating hours, ticket price,
//! coordinates, historical note) happens here, in the presentation
//! layer's collaborator — never inside the inference procedure.
//!
//! ## Lookup Channels
//!
//! | Function | Input | Failure mode |
//! |----------|-------|--------------|
//! | [`get()`] | [`DestinationId`] | none — the id space is closed |
//! | [`find_by_code()`] | raw string | `None` for unrecognized codes |
//!
//! `find_by_code` exists for identifiers that re-enter the system as
//! strings, e.g. destination codes read back from persisted history
//! records — those are data, not types, and may be stale or corrupt.

use crate::core::DestinationId;

/// One destination in the tourism catalog.
///
/// All fields are `'static` literals; the catalog is fixed at compile
/// time just like the rule table.
#[derive(Clone, Copy, Debug)]
pub struct Destination {
    /// Identifier, `H01`..`H05`.
    pub id: DestinationId,
    /// Display name.
    pub name: &'static str,
    /// Short description shown on cards and result pages.
    pub description: &'static str,
    /// Operating hours, as displayed (WIB).
    pub hours: &'static str,
    /// Ticket price, as displayed.
    pub price: &'static str,
    /// Path of the destination photo under `assets/`.
    pub image: &'static str,
    /// Historical note shown in the "Nilai Sejarah" section.
    pub history: &'static str,
    /// WGS84 latitude.
    pub lat: f64,
    /// WGS84 longitude.
    pub lng: f64,
}

/// The fixed destination catalog, in identifier order.
pub static DESTINATIONS: [Destination; 5] = [
    Destination {
        id: DestinationId::H01,
        name: "Pagelaran Gamelan Bangsal Sri Menganti",
        description: "Menikmati pertunjukan gamelan autentik di lingkungan keraton yang \
            sakral. Tempat ini menawarkan pengalaman mendalam mendengarkan alunan gamelan \
            yang dimainkan oleh abdi dalem dengan latar belakang arsitektur keraton yang \
            megah.",
        hours: "09.00 - 11.00 WIB",
        price: "Rp 15.000",
        image: "/assets/images/dest-h01.jpg",
        history: "Dibangun pada tahun 1757 oleh Sri Sultan Hamengku Buwono I. Tempat ini \
            menjadi saksi bisu berbagai upacara kenegaraan dan pertunjukan gamelan sakral \
            untuk menyambut tamu kehormatan kerajaan.",
        lat: -7.8042,
        lng: 110.3644,
    },
    Destination {
        id: DestinationId::H02,
        name: "Museum Keraton Yogyakarta",
        description: "Menyimpan koleksi gamelan bersejarah dan artefak budaya Jawa yang \
            tak ternilai harganya. Museum ini memamerkan berbagai jenis gamelan kuno, \
            termasuk gamelan pusaka keraton yang berusia ratusan tahun.",
        hours: "08.30 - 14.00 WIB",
        price: "Rp 15.000",
        image: "/assets/images/dest-h02.jpg",
        history: "Menyimpan koleksi pribadi Sri Sultan Hamengku Buwono IX. Gamelan di \
            sini bukan sekadar alat musik, melainkan pusaka yang memiliki nama dan gelar \
            kehormatan tersendiri, dirawat turun-temurun selama ratusan tahun.",
        lat: -7.8055,
        lng: 110.363,
    },
    Destination {
        id: DestinationId::H03,
        name: "Latihan Gamelan Abdi Dalem",
        description: "Melihat langsung aktivitas abdi dalem berlatih gamelan dalam \
            suasana yang autentik. Pengunjung dapat menyaksikan proses latihan dan \
            interaksi antar pemain gamelan secara langsung.",
        hours: "Jadwal Tentatif (Biasanya Malam)",
        price: "Gratis (dengan izin khusus)",
        image: "/assets/images/dest-h03.jpg",
        history: "Merupakan tradisi hidup yang diteruskan oleh para Abdi Dalem. Latihan \
            ini adalah bentuk pelestarian 'rasa' dan etika Jawa yang diajarkan melalui \
            harmoni nada gamelan yang lembut.",
        lat: -7.806,
        lng: 110.365,
    },
    Destination {
        id: DestinationId::H04,
        name: "Sanggar Belajar Gamelan",
        description: "Tempat khusus untuk belajar teknis bermain gamelan dan melihat \
            proses pembuatan instrumen tradisional. Sanggar ini menyediakan program \
            pembelajaran dari dasar hingga mahir.",
        hours: "08.00 - 16.00 WIB",
        price: "Rp 50.000 - Rp 100.000",
        image: "/assets/images/dest-h04.jpg",
        history: "Pusat regenerasi budaya di mana empu (ahli) gamelan menurunkan ilmu \
            pembuatan gong dan bonang yang rumit, menggabungkan teknik metalurgi kuno \
            dengan ritual spiritual.",
        lat: -7.8075,
        lng: 110.3625,
    },
    Destination {
        id: DestinationId::H05,
        name: "Tempat Perawatan & Konservasi",
        description: "Area konservasi dan dokumentasi perawatan instrumen gamelan kuno. \
            Di sini pengunjung dapat mempelajari teknik tradisional merawat dan \
            melestarikan gamelan bersejarah.",
        hours: "08.00 - 12.00 WIB",
        price: "Rp 25.000",
        image: "/assets/images/dest-h05.jpg",
        history: "Lokasi dilaksanakannya ritual Jamasan (pembersihan) pusaka. Setiap \
            instrumen diperlakukan layaknya manusia, dimandikan dengan air bunga setahun \
            sekali pada bulan Suro untuk menjaga aura spiritualnya.",
        lat: -7.805,
        lng: 110.366,
    },
];

/// Map center for the Peta page — the Kraton complex.
pub const KRATON_CENTER: (f64, f64) = (-7.80528, 110.3642);

/// Resolves an identifier to its catalog entry.
///
/// Total: every value of the closed [`DestinationId`] space has exactly
/// one entry in [`DESTINATIONS`].
pub fn get(id: DestinationId) -> &'static Destination {
    &DESTINATIONS[id as usize]
}

/// Resolves a raw code string (e.g. from a persisted history record) to
/// its catalog entry, or `None` for an unrecognized code.
pub fn find_by_code(code: &str) -> Option<&'static Destination> {
    code.parse::<DestinationId>().ok().map(get)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::KnowledgeBase;

    #[test]
    fn catalog_is_in_identifier_order() {
        // `get` indexes by discriminant, so the table order is load-bearing.
        for (i, dest) in DESTINATIONS.iter().enumerate() {
            assert_eq!(dest.id as usize, i);
            assert_eq!(get(dest.id).id, dest.id);
        }
    }

    #[test]
    fn every_rule_conclusion_resolves() {
        let kb = KnowledgeBase::new();
        for rule in kb.rules() {
            let dest = get(rule.destination);
            assert!(!dest.name.is_empty());
        }
        assert_eq!(get(kb.fallback()).name, "Museum Keraton Yogyakarta");
    }

    #[test]
    fn find_by_code_rejects_unknown() {
        assert_eq!(find_by_code("H03").map(|d| d.id), Some(DestinationId::H03));
        assert!(find_by_code("H99").is_none());
        assert!(find_by_code("").is_none());
    }
}
