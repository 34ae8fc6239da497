//! # KnowledgeBase — The Compiled-In Rule Table
//!
//! The [`KnowledgeBase`] is the heart of the expert system: the closed,
//! ordered set of condition→conclusion rules plus the single fallback
//! conclusion. Unlike a learned or user-editable knowledge base, this
//! one is a **process-wide immutable constant** — all data is literal,
//! construction cannot fail, and no operation mutates it. That is also
//! why the web layer shares it behind a plain `Arc` with no lock.
//!
//! ## The Rule Table
//!
//! ```text
//! #1  IF G01 AND I01 AND J02 THEN H01      #6  IF G03 AND I02 AND J03 THEN H03
//! #2  IF G01 AND I02 AND J01 THEN H01      #7  IF G04 AND I01 AND J03 THEN H04
//! #3  IF G02 AND I01 AND J02 THEN H02      #8  IF G04 AND I02 AND J02 THEN H04
//! #4  IF G02 AND I02 AND J03 THEN H02      #9  IF G05 AND I01 AND J01 THEN H05
//! #5  IF G03 AND I03 AND J02 THEN H03      #10 IF G05 AND I03 AND J02 THEN H05
//! ```
//!
//! Fallback conclusion: `H02` (Museum Keraton Yogyakarta) — returned
//! whenever no rule applies or the input is incomplete.
//!
//! ## Exclusivity Invariant
//!
//! The rule set must not contain two rules with identical condition
//! triples. The domain author constructs the table that way; the engine
//! does not verify it per call. [`duplicate_rules()`](KnowledgeBase::duplicate_rules)
//! is a one-time startup check wired into `main` so a future edit that
//! breaks the invariant refuses to boot instead of silently depending
//! on scan order.

use super::codes::{DestinationId, Purpose, VisitDuration, VisitTime};
use super::rule::Rule;

/// The fixed rule table. Ordinal ids are 1-based and stable.
static RULES: [Rule; 10] = [
    Rule {
        id: 1,
        purpose: Purpose::WatchPerformance,
        time: VisitTime::Morning,
        duration: VisitDuration::Medium,
        destination: DestinationId::H01,
    },
    Rule {
        id: 2,
        purpose: Purpose::WatchPerformance,
        time: VisitTime::Afternoon,
        duration: VisitDuration::Short,
        destination: DestinationId::H01,
    },
    Rule {
        id: 3,
        purpose: Purpose::LearnToPlay,
        time: VisitTime::Morning,
        duration: VisitDuration::Medium,
        destination: DestinationId::H02,
    },
    Rule {
        id: 4,
        purpose: Purpose::LearnToPlay,
        time: VisitTime::Afternoon,
        duration: VisitDuration::Long,
        destination: DestinationId::H02,
    },
    Rule {
        id: 5,
        purpose: Purpose::StudyHistory,
        time: VisitTime::Evening,
        duration: VisitDuration::Medium,
        destination: DestinationId::H03,
    },
    Rule {
        id: 6,
        purpose: Purpose::StudyHistory,
        time: VisitTime::Afternoon,
        duration: VisitDuration::Long,
        destination: DestinationId::H03,
    },
    Rule {
        id: 7,
        purpose: Purpose::SeeCrafting,
        time: VisitTime::Morning,
        duration: VisitDuration::Long,
        destination: DestinationId::H04,
    },
    Rule {
        id: 8,
        purpose: Purpose::SeeCrafting,
        time: VisitTime::Afternoon,
        duration: VisitDuration::Medium,
        destination: DestinationId::H04,
    },
    Rule {
        id: 9,
        purpose: Purpose::Documentation,
        time: VisitTime::Morning,
        duration: VisitDuration::Short,
        destination: DestinationId::H05,
    },
    Rule {
        id: 10,
        purpose: Purpose::Documentation,
        time: VisitTime::Evening,
        duration: VisitDuration::Medium,
        destination: DestinationId::H05,
    },
];

/// Destination returned when no rule applies or input is incomplete.
const FALLBACK: DestinationId = DestinationId::H02;

/// The closed, ordered rule set plus the fixed fallback conclusion.
///
/// All data is `'static`; the struct is a cheap handle over compiled-in
/// constants. In the server it is shared as `Arc<KnowledgeBase>` — no
/// lock, because nothing ever mutates it.
pub struct KnowledgeBase {
    rules: &'static [Rule],
    fallback: DestinationId,
}

impl KnowledgeBase {
    /// Builds the knowledge base over the compiled-in table.
    ///
    /// Cannot fail — all data is literal and fixed.
    pub fn new() -> Self {
        Self {
            rules: &RULES,
            fallback: FALLBACK,
        }
    }

    /// The rules in ascending identifier order.
    ///
    /// The order is the scan order of the inference procedure, so it is
    /// part of the behavioral contract, not an implementation detail.
    pub fn rules(&self) -> &'static [Rule] {
        self.rules
    }

    /// The fixed fallback destination.
    pub fn fallback(&self) -> DestinationId {
        self.fallback
    }

    /// Looks up a rule by its ordinal identifier.
    pub fn rule(&self, id: u32) -> Option<&'static Rule> {
        self.rules.iter().find(|r| r.id == id)
    }

    /// Number of rules in the table.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// One-time exclusivity check: returns the first pair of rules that
    /// share an identical condition triple, or `None` if the table is
    /// well-formed. Called once at startup; the engine itself never
    /// re-checks this.
    pub fn duplicate_rules(&self) -> Option<(&'static Rule, &'static Rule)> {
        for (i, a) in self.rules.iter().enumerate() {
            for b in &self.rules[i + 1..] {
                if a.condition() == b.condition() {
                    return Some((a, b));
                }
            }
        }
        None
    }
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_rules_with_sequential_ids() {
        let kb = KnowledgeBase::new();
        assert_eq!(kb.len(), 10);
        for (i, rule) in kb.rules().iter().enumerate() {
            assert_eq!(rule.id, i as u32 + 1);
        }
    }

    #[test]
    fn no_two_rules_share_a_condition_triple() {
        assert!(KnowledgeBase::new().duplicate_rules().is_none());
    }

    #[test]
    fn fallback_is_h02() {
        assert_eq!(KnowledgeBase::new().fallback(), DestinationId::H02);
    }

    #[test]
    fn rule_lookup_by_id() {
        let kb = KnowledgeBase::new();
        let rule = kb.rule(7).expect("rule 7 exists");
        assert_eq!(rule.purpose, Purpose::SeeCrafting);
        assert_eq!(rule.destination, DestinationId::H04);
        assert!(kb.rule(0).is_none());
        assert!(kb.rule(11).is_none());
    }

    #[test]
    fn every_conclusion_is_a_catalog_identifier() {
        let kb = KnowledgeBase::new();
        for rule in kb.rules() {
            assert!(DestinationId::ALL.contains(&rule.destination));
        }
    }
}
