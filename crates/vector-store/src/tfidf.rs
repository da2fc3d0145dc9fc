use crate::error::{Result, VectorStoreError};
use crate::similarity::overlap_count;
use crate::tokenizer::{ngrams, tokenize};
use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

pub const DEFAULT_MAX_FEATURES: usize = 5000;
pub const DEFAULT_NGRAM_MAX: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VectorizerConfig {
    /// Vocabulary cap; the most frequent corpus terms are kept.
    pub max_features: usize,
    /// Longest n-gram (1 = unigrams only, 2 = unigrams + bigrams).
    pub ngram_max: usize,
}

impl Default for VectorizerConfig {
    fn default() -> Self {
        Self {
            max_features: DEFAULT_MAX_FEATURES,
            ngram_max: DEFAULT_NGRAM_MAX,
        }
    }
}

impl VectorizerConfig {
    pub fn validate(&self) -> Result<()> {
        if self.max_features == 0 {
            return Err(VectorStoreError::InvalidConfig(
                "max_features must be at least 1".to_string(),
            ));
        }
        if self.ngram_max == 0 {
            return Err(VectorStoreError::InvalidConfig(
                "ngram_max must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

/// Fitted tf-idf vocabulary.
///
/// Weights are raw term counts times smooth idf (`ln((1+n)/(1+df)) + 1`),
/// L2-normalized per text. The vocabulary never changes after [`fit`].
///
/// [`fit`]: TfidfVectorizer::fit
#[derive(Debug, Clone)]
pub struct TfidfVectorizer {
    config: VectorizerConfig,
    vocabulary: HashMap<String, usize>,
    terms: Vec<String>,
    idf: Array1<f64>,
}

impl TfidfVectorizer {
    /// Learn the vocabulary and idf weights from `documents`.
    pub fn fit<S: AsRef<str>>(documents: &[S], config: VectorizerConfig) -> Result<Self> {
        config.validate()?;

        let mut term_freq: BTreeMap<String, usize> = BTreeMap::new();
        let mut doc_freq: BTreeMap<String, usize> = BTreeMap::new();
        for document in documents {
            let counts = Self::count_terms(document.as_ref(), config.ngram_max);
            for (term, count) in counts {
                *term_freq.entry(term.clone()).or_insert(0) += count;
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        if term_freq.is_empty() {
            return Err(VectorStoreError::EmptyVocabulary);
        }

        // BTreeMap iteration is alphabetical, so the stable sort breaks
        // frequency ties alphabetically.
        let mut ranked: Vec<(String, usize)> = term_freq.into_iter().collect();
        if ranked.len() > config.max_features {
            ranked.sort_by(|a, b| b.1.cmp(&a.1));
            ranked.truncate(config.max_features);
        }
        let mut terms: Vec<String> = ranked.into_iter().map(|(term, _)| term).collect();
        terms.sort();

        #[allow(clippy::cast_precision_loss)]
        let n = documents.len() as f64;
        let idf: Array1<f64> = terms
            .iter()
            .map(|term| {
                #[allow(clippy::cast_precision_loss)]
                let df = doc_freq.get(term).copied().unwrap_or(0) as f64;
                ((1.0 + n) / (1.0 + df)).ln() + 1.0
            })
            .collect();

        let vocabulary = terms
            .iter()
            .enumerate()
            .map(|(idx, term)| (term.clone(), idx))
            .collect();

        log::debug!(
            "Fitted tf-idf vocabulary: {} terms over {} documents",
            terms.len(),
            documents.len()
        );

        Ok(Self {
            config,
            vocabulary,
            terms,
            idf,
        })
    }

    /// Fit on `documents` and return their row-aligned vector table.
    pub fn fit_transform<S: AsRef<str>>(
        documents: &[S],
        config: VectorizerConfig,
    ) -> Result<(Self, Array2<f64>)> {
        let vectorizer = Self::fit(documents, config)?;
        let matrix = vectorizer.transform_many(documents);
        Ok((vectorizer, matrix))
    }

    /// Project `text` into the fitted space. Unknown terms are ignored, so an
    /// unrelated text maps to the zero vector.
    #[must_use]
    pub fn transform(&self, text: &str) -> Array1<f64> {
        let mut vector = Array1::<f64>::zeros(self.dimension());
        for (term, count) in Self::count_terms(text, self.config.ngram_max) {
            if let Some(&idx) = self.vocabulary.get(&term) {
                #[allow(clippy::cast_precision_loss)]
                let tf = count as f64;
                vector[idx] = tf * self.idf[idx];
            }
        }

        let norm = vector.dot(&vector).sqrt();
        if norm > 0.0 {
            vector.mapv_inplace(|x| x / norm);
        }
        vector
    }

    #[must_use]
    pub fn transform_many<S: AsRef<str>>(&self, documents: &[S]) -> Array2<f64> {
        let mut matrix = Array2::<f64>::zeros((documents.len(), self.dimension()));
        for (row, document) in documents.iter().enumerate() {
            matrix.row_mut(row).assign(&self.transform(document.as_ref()));
        }
        matrix
    }

    /// Number of vocabulary terms both texts carry with non-zero weight.
    #[must_use]
    pub fn phrase_overlap(&self, left: &str, right: &str) -> usize {
        overlap_count(self.transform(left).view(), self.transform(right).view())
    }

    #[must_use]
    pub fn dimension(&self) -> usize {
        self.terms.len()
    }

    #[must_use]
    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    /// Vocabulary terms in dimension order.
    #[must_use]
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    #[must_use]
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.index_of(term).map(|idx| self.idf[idx])
    }

    #[must_use]
    pub const fn config(&self) -> VectorizerConfig {
        self.config
    }

    fn count_terms(text: &str, ngram_max: usize) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for term in ngrams(&tokenize(text), ngram_max) {
            *counts.entry(term).or_insert(0) += 1;
        }
        counts
    }
}
