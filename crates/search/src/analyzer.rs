use crate::config::AnalysisConfig;
use crate::explain::explain;
use crate::index::OffenceIndex;
use crate::policy::{DecisionPolicy, Verdict};
use crate::result::{AnalysisResult, MatchRecord};
use crate::signals::QuerySignals;
use lawlens_text::normalize;
use log::{debug, warn};
use std::sync::Arc;

/// One ranked candidate with its gate outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateVerdict {
    /// Row in the index (load order among indexable records).
    pub row: usize,
    pub section_id: String,
    pub score: f64,
    pub verdict: Verdict,
}

/// Everything the decision policy saw for one query.
#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    pub normalized_query: String,
    pub signals: QuerySignals,
    /// Top-k candidates in rank order.
    pub candidates: Vec<CandidateVerdict>,
}

/// Incident analysis over an injected, shared offence index.
///
/// `analyze` never fails: nonsense or empty input degrades to
/// `no_clear_match`.
#[derive(Debug, Clone)]
pub struct IncidentAnalyzer {
    index: Arc<OffenceIndex>,
    config: AnalysisConfig,
    policy: DecisionPolicy,
}

impl IncidentAnalyzer {
    #[must_use]
    pub fn new(index: Arc<OffenceIndex>, config: AnalysisConfig) -> Self {
        Self {
            index,
            policy: DecisionPolicy::from_config(&config),
            config,
        }
    }

    #[must_use]
    pub fn index(&self) -> &Arc<OffenceIndex> {
        &self.index
    }

    #[must_use]
    pub const fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Rank and gate the top-k records without assembling a response.
    #[must_use]
    pub fn assess(&self, raw_text: &str) -> Assessment {
        let normalized_query = normalize(raw_text);
        let signals = QuerySignals::detect(&normalized_query);
        let query_vector = self.index.vectorize(&normalized_query);

        let ranked = match self.index.rank(query_vector.view(), self.config.top_k) {
            Ok(ranked) => ranked,
            Err(err) => {
                warn!("Ranking failed, treating query as unmatched: {err}");
                Vec::new()
            }
        };

        let candidates = ranked
            .into_iter()
            .filter_map(|(row, score)| {
                let record = self.index.record(row)?;
                let verdict = self.policy.classify(&signals, score, || {
                    self.index.phrase_overlap(query_vector.view(), row)
                });
                debug!(
                    "candidate section={} score={score:.4} verdict={verdict:?}",
                    record.section_id
                );
                Some(CandidateVerdict {
                    row,
                    section_id: record.section_id.clone(),
                    score,
                    verdict,
                })
            })
            .collect();

        Assessment {
            normalized_query,
            signals,
            candidates,
        }
    }

    #[must_use]
    pub fn analyze(&self, raw_text: &str) -> AnalysisResult {
        let assessment = self.assess(raw_text);

        let mut strong = Vec::new();
        let mut possible = Vec::new();
        for candidate in &assessment.candidates {
            let bucket = match candidate.verdict {
                Verdict::Strong => &mut strong,
                Verdict::Possible => &mut possible,
                Verdict::Rejected(_) => continue,
            };
            let Some(record) = self.index.record(candidate.row) else {
                continue;
            };
            let explanation = explain(
                &assessment.normalized_query,
                &record.offense_label.to_lowercase(),
            );
            bucket.push(MatchRecord::new(record, candidate.score, explanation));
        }

        let result = AnalysisResult::from_buckets(strong, possible);
        debug!(
            "analysis status={} results={}",
            result.status().as_str(),
            result.results().len()
        );
        result
    }
}
