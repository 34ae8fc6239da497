//! # Inference Engine — Deterministic Rule Matching
//!
//! Implementation of the forward-chaining inference procedure over the
//! compiled-in [`KnowledgeBase`]. The engine is a stateless struct with
//! one associated function — it receives the knowledge base and the
//! visitor's input by reference and returns an [`Outcome`], holding no
//! state between invocations.
//!
//! ## Contract
//!
//! - **Fast reject**: if any of the three input fields is unset, the
//!   fallback outcome is returned immediately, without scanning the
//!   rule list. This is not an error — incomplete input *degrades* to
//!   the fallback recommendation.
//! - **First match wins**: rules are scanned in ascending identifier
//!   order and the first rule whose three condition fields equal the
//!   input wins. The table is built so that at most one rule can match
//!   any triple; the defined scan order makes behavior deterministic
//!   even if that invariant were ever broken by a rule edit.
//! - **Fallback**: a completed scan with no match returns the fallback
//!   destination with no rule identifier. Callers cannot distinguish
//!   "input incomplete" from "no rule exists for this combination" —
//!   both collapse into the same outcome on purpose.
//! - **Purity**: no side effects, no allocation of shared state. The
//!   procedure may be invoked from any number of concurrent callers
//!   without coordination because the knowledge base is immutable.

use crate::core::{DestinationId, KnowledgeBase, Purpose, Rule, VisitDuration, VisitTime};

/// A visitor's answer triple, one optional field per category axis.
///
/// `None` means the field is unset — either never answered or answered
/// with a string that is not one of the axis's codes. Both enter the
/// engine the same way and trigger the fast-reject fallback path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConsultationInput {
    /// Tujuan Kunjungan (`G01`..`G05`), if set.
    pub purpose: Option<Purpose>,
    /// Waktu Kunjungan (`I01`..`I03`), if set.
    pub time: Option<VisitTime>,
    /// Durasi Kunjungan (`J01`..`J03`), if set.
    pub duration: Option<VisitDuration>,
}

impl ConsultationInput {
    /// Builds an input triple from raw code strings, e.g. form fields.
    ///
    /// Each field parses independently; an empty or unknown code simply
    /// leaves that field unset. Malformed input is never an error here,
    /// it is incomplete input, and the engine resolves it into the
    /// fallback.
    pub fn from_codes(purpose: &str, time: &str, duration: &str) -> Self {
        Self {
            purpose: purpose.parse().ok(),
            time: time.parse().ok(),
            duration: duration.parse().ok(),
        }
    }

    /// True when all three fields are set.
    pub fn is_complete(&self) -> bool {
        self.purpose.is_some() && self.time.is_some() && self.duration.is_some()
    }
}

/// Result of one inference: a destination plus the rule that chose it.
///
/// `matched_rule` is `None` on the fallback path — incomplete input or
/// no applicable rule. The result card uses it to cite "Aturan #n" when
/// present and a fallback notice when absent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Outcome {
    /// The recommended destination identifier.
    pub destination: DestinationId,
    /// The rule that produced the recommendation, if any matched.
    pub matched_rule: Option<&'static Rule>,
}

impl Outcome {
    /// The ordinal id of the matched rule, if any. Convenience for
    /// rendering and history records.
    pub fn rule_id(&self) -> Option<u32> {
        self.matched_rule.map(|r| r.id)
    }
}

/// Forward-chaining inference engine — stateless, fully functional.
///
/// The engine holds nothing: it takes the knowledge base by reference
/// and returns the outcome. That keeps it trivially thread-safe and
/// trivially testable.
pub struct InferenceEngine;

impl InferenceEngine {
    /// Evaluates the rule table against a visitor's input triple.
    ///
    /// Incomplete input returns the fallback immediately; otherwise the
    /// rules are scanned in ascending identifier order and the first
    /// full condition match wins. A completed scan with no match also
    /// returns the fallback, with no rule identifier.
    pub fn infer(kb: &KnowledgeBase, input: &ConsultationInput) -> Outcome {
        // Fast reject: any unset field resolves to the fallback without
        // touching the rule list.
        let (Some(purpose), Some(time), Some(duration)) =
            (input.purpose, input.time, input.duration)
        else {
            return Outcome {
                destination: kb.fallback(),
                matched_rule: None,
            };
        };

        // First-match-wins scan in ascending identifier order.
        for rule in kb.rules() {
            if rule.purpose == purpose && rule.time == time && rule.duration == duration {
                return Outcome {
                    destination: rule.destination,
                    matched_rule: Some(rule),
                };
            }
        }

        // No exact match — degrade to the fallback conclusion.
        Outcome {
            destination: kb.fallback(),
            matched_rule: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kb() -> KnowledgeBase {
        KnowledgeBase::new()
    }

    // ─── rule matching ─────────────────────────────────────────

    #[test]
    fn each_rule_triple_returns_its_own_conclusion() {
        let kb = kb();
        for rule in kb.rules() {
            let input = ConsultationInput {
                purpose: Some(rule.purpose),
                time: Some(rule.time),
                duration: Some(rule.duration),
            };
            let outcome = InferenceEngine::infer(&kb, &input);
            assert_eq!(outcome.destination, rule.destination);
            assert_eq!(outcome.rule_id(), Some(rule.id));
        }
    }

    #[test]
    fn scenario_rule_1() {
        // {G01, I01, J02} → {H01, rule 1}
        let kb = kb();
        let input = ConsultationInput::from_codes("G01", "I01", "J02");
        let outcome = InferenceEngine::infer(&kb, &input);
        assert_eq!(outcome.destination, DestinationId::H01);
        assert_eq!(outcome.rule_id(), Some(1));
    }

    #[test]
    fn scenario_rule_10() {
        // {G05, I03, J02} → {H05, rule 10}
        let kb = kb();
        let input = ConsultationInput::from_codes("G05", "I03", "J02");
        let outcome = InferenceEngine::infer(&kb, &input);
        assert_eq!(outcome.destination, DestinationId::H05);
        assert_eq!(outcome.rule_id(), Some(10));
    }

    // ─── fallback paths ────────────────────────────────────────

    #[test]
    fn incomplete_input_falls_back_without_rule() {
        // {"", I01, J02} → {H02, none}
        let kb = kb();
        let input = ConsultationInput::from_codes("", "I01", "J02");
        let outcome = InferenceEngine::infer(&kb, &input);
        assert_eq!(outcome.destination, DestinationId::H02);
        assert_eq!(outcome.matched_rule, None);
    }

    #[test]
    fn unmatched_valid_triple_falls_back_without_rule() {
        // {G01, I03, J03} is valid on every axis but matches no rule.
        let kb = kb();
        let input = ConsultationInput::from_codes("G01", "I03", "J03");
        assert!(input.is_complete());
        let outcome = InferenceEngine::infer(&kb, &input);
        assert_eq!(outcome.destination, DestinationId::H02);
        assert_eq!(outcome.matched_rule, None);
    }

    #[test]
    fn unknown_code_string_is_treated_as_unset() {
        let kb = kb();
        let input = ConsultationInput::from_codes("G99", "I01", "J02");
        assert!(!input.is_complete());
        let outcome = InferenceEngine::infer(&kb, &input);
        assert_eq!(outcome.destination, kb.fallback());
        assert_eq!(outcome.matched_rule, None);
    }

    #[test]
    fn fully_empty_input_falls_back() {
        let kb = kb();
        let outcome = InferenceEngine::infer(&kb, &ConsultationInput::default());
        assert_eq!(outcome.destination, DestinationId::H02);
        assert_eq!(outcome.matched_rule, None);
    }

    // ─── determinism ───────────────────────────────────────────

    #[test]
    fn repeated_calls_yield_identical_outcomes() {
        let kb = kb();
        let input = ConsultationInput::from_codes("G03", "I02", "J03");
        let first = InferenceEngine::infer(&kb, &input);
        for _ in 0..100 {
            assert_eq!(InferenceEngine::infer(&kb, &input), first);
        }
    }
}
