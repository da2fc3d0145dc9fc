use crate::error::{Result as SearchResult, SearchError};
use anyhow::{anyhow, Context, Result};
use lawlens_vector_store::VectorizerConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_TOP_K: usize = 5;
pub const DEFAULT_STRONG_MATCH: f64 = 0.35;
pub const DEFAULT_MODERATE_MATCH: f64 = 0.10;
pub const DEFAULT_MIN_PHRASE_OVERLAP: usize = 0;

/// Tunable thresholds for incident analysis.
///
/// Every key is optional in a config file; missing keys keep their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// How many top-ranked records are considered per query.
    pub top_k: usize,
    /// Cosine score at or above which a candidate can be a strong match.
    /// Strong also requires an action signal in the query.
    pub strong_match: f64,
    /// Cosine score below which a candidate is discarded outright.
    pub moderate_match: f64,
    /// Minimum shared vocabulary terms between query and record. Queries
    /// carrying both a threat and a money concept bypass this gate.
    pub min_phrase_overlap: usize,
    /// Vocabulary construction.
    pub vectorizer: VectorizerConfig,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            strong_match: DEFAULT_STRONG_MATCH,
            moderate_match: DEFAULT_MODERATE_MATCH,
            min_phrase_overlap: DEFAULT_MIN_PHRASE_OVERLAP,
            vectorizer: VectorizerConfig::default(),
        }
    }
}

impl AnalysisConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read analysis config {}", path.display()))?;
        Self::from_bytes(&bytes)
            .with_context(|| format!("Analysis config {} is invalid", path.display()))
    }

    /// Parse JSON, falling back to TOML.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let value: serde_json::Value = match serde_json::from_slice(bytes) {
            Ok(value) => value,
            Err(json_err) => {
                let utf8 =
                    std::str::from_utf8(bytes).map_err(|err| anyhow!("{json_err}; {err}"))?;
                let toml_value: toml::Value = toml::from_str(utf8).map_err(|toml_err| {
                    anyhow!(
                        "Config is not valid JSON or TOML ({json_err}); TOML parse error: {toml_err}"
                    )
                })?;
                serde_json::to_value(toml_value)
                    .map_err(|err| anyhow!("Failed to convert TOML config to JSON: {err}"))?
            }
        };

        let config: Self =
            serde_json::from_value(value).map_err(|err| anyhow!("Config parse error: {err}"))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> SearchResult<()> {
        if self.top_k == 0 {
            return Err(SearchError::InvalidConfig(
                "top_k must be at least 1".to_string(),
            ));
        }
        for (name, value) in [
            ("strong_match", self.strong_match),
            ("moderate_match", self.moderate_match),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(SearchError::InvalidConfig(format!(
                    "{name} must be within [0, 1], got {value}"
                )));
            }
        }
        self.vectorizer.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::{DecisionPolicy, RejectReason, Verdict};
    use crate::signals::QuerySignals;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_match_published_thresholds() {
        let config = AnalysisConfig::default();
        assert_eq!(config.top_k, 5);
        assert!((config.strong_match - 0.35).abs() < f64::EPSILON);
        assert!((config.moderate_match - 0.10).abs() < f64::EPSILON);
        assert_eq!(config.min_phrase_overlap, 0);
        assert_eq!(config.vectorizer.max_features, 5000);
        assert_eq!(config.vectorizer.ngram_max, 2);
    }

    #[test]
    fn json_partial_overrides() {
        let config = AnalysisConfig::from_bytes(br#"{"top_k": 3, "vectorizer": {"max_features": 100}}"#)
            .unwrap();
        assert_eq!(config.top_k, 3);
        assert_eq!(config.vectorizer.max_features, 100);
        assert_eq!(config.vectorizer.ngram_max, 2);
        assert!((config.strong_match - 0.35).abs() < f64::EPSILON);
    }

    #[test]
    fn toml_is_accepted() {
        let config = AnalysisConfig::from_bytes(
            b"strong_match = 0.5\nmin_phrase_overlap = 2\n\n[vectorizer]\nngram_max = 1\n",
        )
        .unwrap();
        assert!((config.strong_match - 0.5).abs() < f64::EPSILON);
        assert_eq!(config.min_phrase_overlap, 2);
        assert_eq!(config.vectorizer.ngram_max, 1);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = AnalysisConfig::from_bytes(br#"{"strong": 0.4}"#).unwrap_err();
        assert!(format!("{err:#}").contains("strong"), "{err:#}");
    }

    #[test]
    fn moderate_above_strong_is_accepted() {
        let config = AnalysisConfig::from_bytes(br#"{"moderate_match": 0.5, "strong_match": 0.35}"#)
            .unwrap();
        let policy = DecisionPolicy::from_config(&config);
        let signal = QuerySignals {
            domain_signal: true,
            threat_money_case: false,
        };
        let quiet = QuerySignals {
            domain_signal: false,
            threat_money_case: false,
        };

        // every survivor clears strong_match, so only the domain signal decides
        assert_eq!(policy.classify(&signal, 0.6, || 1), Verdict::Strong);
        assert_eq!(policy.classify(&quiet, 0.6, || 1), Verdict::Possible);
        assert_eq!(
            policy.classify(&signal, 0.4, || 1),
            Verdict::Rejected(RejectReason::BelowModerate)
        );
    }

    #[test]
    fn out_of_range_threshold_is_rejected() {
        let config = AnalysisConfig {
            strong_match: 1.5,
            ..AnalysisConfig::default()
        };
        assert!(config.validate().is_err());
        let config = AnalysisConfig {
            top_k: 0,
            ..AnalysisConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
