use crate::error::{Result, SearchError};
use lawlens_corpus::{OffenceCorpus, OffenceRecord};
use lawlens_vector_store::{overlap_count, CorpusVectors, TfidfVectorizer, VectorizerConfig};
use log::info;
use ndarray::{Array1, ArrayView1};

/// Immutable search index over the indexable offence records.
///
/// Built once at startup and shared read-only between queries.
#[derive(Debug, Clone)]
pub struct OffenceIndex {
    records: Vec<OffenceRecord>,
    vectorizer: TfidfVectorizer,
    vectors: CorpusVectors,
}

impl OffenceIndex {
    /// Index every record whose label is not the "Not Available" sentinel,
    /// in corpus order.
    pub fn build(corpus: &OffenceCorpus, config: VectorizerConfig) -> Result<Self> {
        Self::from_records(corpus.indexable().cloned().collect(), config)
    }

    pub fn from_records(records: Vec<OffenceRecord>, config: VectorizerConfig) -> Result<Self> {
        if records.is_empty() {
            return Err(SearchError::EmptyIndex);
        }
        let texts: Vec<&str> = records.iter().map(|r| r.normalized_text.as_str()).collect();
        let (vectorizer, matrix) = TfidfVectorizer::fit_transform(&texts, config)?;
        info!(
            "Built offence index: {} records, {} vocabulary terms",
            records.len(),
            vectorizer.dimension()
        );
        Ok(Self {
            records,
            vectorizer,
            vectors: CorpusVectors::new(matrix),
        })
    }

    /// Project already-normalized text into the index space.
    #[must_use]
    pub fn vectorize(&self, normalized_text: &str) -> Array1<f64> {
        self.vectorizer.transform(normalized_text)
    }

    /// Top `k` `(row, score)` pairs, score descending, ties in load order.
    pub fn rank(&self, query: ArrayView1<'_, f64>, k: usize) -> Result<Vec<(usize, f64)>> {
        Ok(self.vectors.rank(query, k)?)
    }

    /// Shared non-zero vocabulary terms between `query` and record `row`.
    #[must_use]
    pub fn phrase_overlap(&self, query: ArrayView1<'_, f64>, row: usize) -> usize {
        self.vectors
            .row(row)
            .map_or(0, |vector| overlap_count(query, vector))
    }

    #[must_use]
    pub fn record(&self, row: usize) -> Option<&OffenceRecord> {
        self.records.get(row)
    }

    #[must_use]
    pub fn records(&self) -> &[OffenceRecord] {
        &self.records
    }

    #[must_use]
    pub const fn vectorizer(&self) -> &TfidfVectorizer {
        &self.vectorizer
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
