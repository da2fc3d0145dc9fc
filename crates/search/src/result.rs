use lawlens_corpus::OffenceRecord;
use serde::{Deserialize, Serialize};

pub const LIKELY_NOTE: &str = "These sections are commonly associated with similar incidents.";
pub const POSSIBLE_NOTE: &str = "These sections may be relevant based on partial similarity. A legal professional can confirm applicability.";
pub const NO_MATCH_MESSAGE: &str =
    "We could not confidently associate this description with specific IPC offences.";
pub const NO_MATCH_SUGGESTION: &str =
    "Try adding more details such as threats, fear, money demand, or document misuse.";
pub const DISCLAIMER: &str = "For legal awareness only. Not legal advice.";

/// One matched offence as returned to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    pub ipc_section: String,
    pub offense: String,
    /// Similarity score as a percentage, two decimals.
    pub confidence: f64,
    pub explanation: String,
    pub url: Option<String>,
    pub punishment: Option<String>,
    pub cognizable: Option<String>,
    pub bailable: Option<String>,
    pub court: Option<String>,
}

impl MatchRecord {
    #[must_use]
    pub fn new(record: &OffenceRecord, score: f64, explanation: String) -> Self {
        Self {
            ipc_section: record.section_id.clone(),
            offense: record.offense_label.clone(),
            confidence: confidence_percent(score),
            explanation,
            url: record.url.clone(),
            punishment: record.punishment_text.clone(),
            cognizable: record.cognizable_flag.clone(),
            bailable: record.bailable_flag.clone(),
            court: record.court_level.clone(),
        }
    }
}

#[must_use]
pub fn confidence_percent(score: f64) -> f64 {
    (score * 100.0 * 100.0).round() / 100.0
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    LikelyMatches,
    PossibleMatches,
    NoClearMatch,
}

impl MatchStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LikelyMatches => "likely_matches",
            Self::PossibleMatches => "possible_matches",
            Self::NoClearMatch => "no_clear_match",
        }
    }
}

/// Final analysis response, tagged by `status` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AnalysisResult {
    LikelyMatches {
        results: Vec<MatchRecord>,
        note: String,
        disclaimer: String,
    },
    PossibleMatches {
        results: Vec<MatchRecord>,
        note: String,
        disclaimer: String,
    },
    NoClearMatch {
        message: String,
        suggestion: String,
        disclaimer: String,
    },
}

impl AnalysisResult {
    /// Strong matches win outright; possible ones are only reported when
    /// there is no strong match.
    #[must_use]
    pub fn from_buckets(strong: Vec<MatchRecord>, possible: Vec<MatchRecord>) -> Self {
        if !strong.is_empty() {
            return Self::LikelyMatches {
                results: strong,
                note: LIKELY_NOTE.to_string(),
                disclaimer: DISCLAIMER.to_string(),
            };
        }
        if !possible.is_empty() {
            return Self::PossibleMatches {
                results: possible,
                note: POSSIBLE_NOTE.to_string(),
                disclaimer: DISCLAIMER.to_string(),
            };
        }
        Self::no_clear_match()
    }

    #[must_use]
    pub fn no_clear_match() -> Self {
        Self::NoClearMatch {
            message: NO_MATCH_MESSAGE.to_string(),
            suggestion: NO_MATCH_SUGGESTION.to_string(),
            disclaimer: DISCLAIMER.to_string(),
        }
    }

    #[must_use]
    pub const fn status(&self) -> MatchStatus {
        match self {
            Self::LikelyMatches { .. } => MatchStatus::LikelyMatches,
            Self::PossibleMatches { .. } => MatchStatus::PossibleMatches,
            Self::NoClearMatch { .. } => MatchStatus::NoClearMatch,
        }
    }

    #[must_use]
    pub fn results(&self) -> &[MatchRecord] {
        match self {
            Self::LikelyMatches { results, .. } | Self::PossibleMatches { results, .. } => results,
            Self::NoClearMatch { .. } => &[],
        }
    }
}
