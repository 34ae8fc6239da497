//! # Stats — Read-Only Aggregates Over the History
//!
//! Small summary figures rendered on the Beranda and Riwayat pages:
//! how many consultations have been run, how many distinct destinations
//! were recommended, and which destination comes up most often. Pure
//! computation over `&History` — no I/O, no shared state of its own.

use crate::history::History;

/// Summary of the consultation history for the stat cards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryStats {
    /// Total recorded consultations.
    pub consultations: usize,
    /// Number of distinct destinations recommended.
    pub distinct_destinations: usize,
    /// Most-recommended destination name and its count, if any.
    pub top_destination: Option<(String, usize)>,
}

/// Computes the summary in one pass over the records.
///
/// Ties on the top destination resolve to the destination seen first
/// in the newest-first record order, which keeps the figure stable
/// between renders.
pub fn collect(history: &History) -> HistoryStats {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for record in history.records() {
        match counts.iter_mut().find(|(name, _)| *name == record.result.name) {
            Some((_, n)) => *n += 1,
            None => counts.push((&record.result.name, 1)),
        }
    }

    // max_by_key would keep the *last* maximum on ties; scan keeps the first.
    let mut top: Option<(&str, usize)> = None;
    for &(name, n) in &counts {
        if top.map_or(true, |(_, best)| n > best) {
            top = Some((name, n));
        }
    }
    let top_destination = top.map(|(name, n)| (name.to_string(), n));

    HistoryStats {
        consultations: history.len(),
        distinct_destinations: counts.len(),
        top_destination,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crate::core::DestinationId;
    use crate::history::{RecordInputs, RecordResult};
    use crate::inference::ConsultationInput;

    fn add(history: &mut History, id: DestinationId) {
        history.add(
            RecordInputs::from_input(&ConsultationInput::from_codes("G01", "I01", "J02")),
            RecordResult::from_destination(catalog::get(id)),
        );
    }

    #[test]
    fn empty_history_has_empty_stats() {
        let stats = collect(&History::new());
        assert_eq!(stats.consultations, 0);
        assert_eq!(stats.distinct_destinations, 0);
        assert_eq!(stats.top_destination, None);
    }

    #[test]
    fn counts_and_top_destination() {
        let mut history = History::new();
        add(&mut history, DestinationId::H01);
        add(&mut history, DestinationId::H03);
        add(&mut history, DestinationId::H03);
        add(&mut history, DestinationId::H05);

        let stats = collect(&history);
        assert_eq!(stats.consultations, 4);
        assert_eq!(stats.distinct_destinations, 3);
        assert_eq!(
            stats.top_destination,
            Some((catalog::get(DestinationId::H03).name.to_string(), 2))
        );
    }

    #[test]
    fn tie_resolves_to_first_seen_in_newest_first_order() {
        let mut history = History::new();
        add(&mut history, DestinationId::H01); // older
        add(&mut history, DestinationId::H02); // newest, seen first
        let stats = collect(&history);
        assert_eq!(
            stats.top_destination,
            Some((catalog::get(DestinationId::H02).name.to_string(), 1))
        );
    }
}
