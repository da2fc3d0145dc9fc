use crate::config::AnalysisConfig;
use crate::signals::QuerySignals;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Score under the moderate threshold.
    BelowModerate,
    /// Too few shared vocabulary terms and no threat-money relaxation.
    InsufficientOverlap,
}

/// Outcome of the per-candidate gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Strong,
    Possible,
    Rejected(RejectReason),
}

impl Verdict {
    #[must_use]
    pub const fn is_accepted(self) -> bool {
        !matches!(self, Self::Rejected(_))
    }
}

/// Threshold gate that buckets one ranked candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecisionPolicy {
    strong_match: f64,
    moderate_match: f64,
    min_phrase_overlap: usize,
}

impl DecisionPolicy {
    #[must_use]
    pub const fn new(strong_match: f64, moderate_match: f64, min_phrase_overlap: usize) -> Self {
        Self {
            strong_match,
            moderate_match,
            min_phrase_overlap,
        }
    }

    #[must_use]
    pub const fn from_config(config: &AnalysisConfig) -> Self {
        Self::new(
            config.strong_match,
            config.moderate_match,
            config.min_phrase_overlap,
        )
    }

    /// Gate order: moderate score, phrase overlap (waived for threat-money
    /// queries), then strong vs possible. `overlap` is only evaluated once the
    /// score clears the moderate threshold.
    pub fn classify(
        &self,
        signals: &QuerySignals,
        score: f64,
        overlap: impl FnOnce() -> usize,
    ) -> Verdict {
        if score < self.moderate_match {
            return Verdict::Rejected(RejectReason::BelowModerate);
        }

        let overlap_count = overlap();
        if overlap_count < self.min_phrase_overlap && !signals.threat_money_case {
            return Verdict::Rejected(RejectReason::InsufficientOverlap);
        }

        if score >= self.strong_match && signals.domain_signal {
            Verdict::Strong
        } else {
            Verdict::Possible
        }
    }
}

impl Default for DecisionPolicy {
    fn default() -> Self {
        Self::from_config(&AnalysisConfig::default())
    }
}
