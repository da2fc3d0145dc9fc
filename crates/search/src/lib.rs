//! # LawLens Search
//!
//! Maps a free-text incident description to candidate IPC offence sections.
//!
//! ```text
//! raw text ──> normalize ──> tf-idf vector ──> cosine top-k
//!                                                  │
//!              QuerySignals ──> DecisionPolicy <───┘
//!                                   │
//!                  strong / possible / rejected ──> explain ──> AnalysisResult
//! ```
//!
//! The [`OffenceIndex`] is built once and injected into an
//! [`IncidentAnalyzer`]; nothing here holds global state, so a test can
//! swap in a three-record corpus.

mod analyzer;
mod config;
mod error;
mod explain;
mod index;
mod policy;
mod result;
mod signals;

pub use analyzer::{Assessment, CandidateVerdict, IncidentAnalyzer};
pub use config::{
    AnalysisConfig, DEFAULT_MIN_PHRASE_OVERLAP, DEFAULT_MODERATE_MATCH, DEFAULT_STRONG_MATCH,
    DEFAULT_TOP_K,
};
pub use error::{Result, SearchError};
pub use explain::{explain, FALLBACK_EXPLANATION};
pub use index::OffenceIndex;
pub use policy::{DecisionPolicy, RejectReason, Verdict};
pub use result::{
    confidence_percent, AnalysisResult, MatchRecord, MatchStatus, DISCLAIMER, LIKELY_NOTE,
    NO_MATCH_MESSAGE, NO_MATCH_SUGGESTION, POSSIBLE_NOTE,
};
pub use signals::{looks_like_legal_incident, QuerySignals, LEGAL_ACTION_WORDS};

use lawlens_corpus::OffenceCorpus;

/// Build an index from `corpus` and wrap it in an analyzer.
pub fn analyzer_for_corpus(
    corpus: &OffenceCorpus,
    config: AnalysisConfig,
) -> Result<IncidentAnalyzer> {
    config.validate()?;
    let index = OffenceIndex::build(corpus, config.vectorizer)?;
    Ok(IncidentAnalyzer::new(std::sync::Arc::new(index), config))
}
