use lawlens_corpus::OffenceCorpus;
use lawlens_search::{AnalysisConfig, IncidentAnalyzer, MatchStatus, OffenceIndex, Verdict};
use proptest::prelude::*;
use std::collections::BTreeSet;
use std::sync::Arc;

const SAMPLE_CORPUS: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../../data/ipc_sections.sample.json"
);

const QUERIES: &[&str] = &[
    "Someone sent me messages threatening to harm me if I don't pay them money.",
    "I received anonymous messages online saying they will hurt my family.",
    "My colleague keeps pressuring me to repay money I borrowed.",
    "Someone forged my signature on a document.",
    "He cheated me and took my property",
    "The weather is nice today.",
];

fn index() -> Arc<OffenceIndex> {
    let corpus = OffenceCorpus::load(SAMPLE_CORPUS).unwrap();
    Arc::new(OffenceIndex::build(&corpus, AnalysisConfig::default().vectorizer).unwrap())
}

fn rows_with(analyzer: &IncidentAnalyzer, query: &str, keep: impl Fn(Verdict) -> bool) -> BTreeSet<usize> {
    analyzer
        .assess(query)
        .candidates
        .into_iter()
        .filter(|c| keep(c.verdict))
        .map(|c| c.row)
        .collect()
}

proptest! {
    #[test]
    fn raising_strong_threshold_only_demotes(
        low in 0.10f64..=1.0,
        bump in 0.0f64..=0.9,
        query_idx in 0..QUERIES.len(),
    ) {
        let high = (low + bump).min(1.0);
        let index = index();
        let lenient = IncidentAnalyzer::new(
            index.clone(),
            AnalysisConfig { strong_match: low, ..AnalysisConfig::default() },
        );
        let strict = IncidentAnalyzer::new(
            index,
            AnalysisConfig { strong_match: high, ..AnalysisConfig::default() },
        );
        let query = QUERIES[query_idx];

        let strong_lenient = rows_with(&lenient, query, |v| v == Verdict::Strong);
        let strong_strict = rows_with(&strict, query, |v| v == Verdict::Strong);
        prop_assert!(strong_strict.is_subset(&strong_lenient));

        // Demotion moves candidates between buckets, never out of the result.
        prop_assert_eq!(
            rows_with(&lenient, query, Verdict::is_accepted),
            rows_with(&strict, query, Verdict::is_accepted)
        );
    }

    #[test]
    fn raising_moderate_threshold_only_removes(
        low in 0.0f64..=1.0,
        bump in 0.0f64..=1.0,
        query_idx in 0..QUERIES.len(),
    ) {
        let high = (low + bump).min(1.0);
        let index = index();
        let base = AnalysisConfig { strong_match: 1.0, ..AnalysisConfig::default() };
        let lenient = IncidentAnalyzer::new(
            index.clone(),
            AnalysisConfig { moderate_match: low, ..base },
        );
        let strict = IncidentAnalyzer::new(
            index,
            AnalysisConfig { moderate_match: high, ..base },
        );
        let query = QUERIES[query_idx];

        let accepted_lenient = rows_with(&lenient, query, Verdict::is_accepted);
        let accepted_strict = rows_with(&strict, query, Verdict::is_accepted);
        prop_assert!(accepted_strict.is_subset(&accepted_lenient));
    }

    #[test]
    fn strong_candidates_always_yield_likely_matches(query_idx in 0..QUERIES.len()) {
        let analyzer = IncidentAnalyzer::new(index(), AnalysisConfig::default());
        let query = QUERIES[query_idx];
        let has_strong = analyzer
            .assess(query)
            .candidates
            .iter()
            .any(|c| c.verdict == Verdict::Strong);
        let status = analyzer.analyze(query).status();
        prop_assert_eq!(has_strong, status == MatchStatus::LikelyMatches);
    }
}
