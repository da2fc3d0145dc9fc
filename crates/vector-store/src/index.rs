use crate::error::{Result, VectorStoreError};
use crate::similarity::cosine_similarity;
use ndarray::{Array2, ArrayView1};

/// Row-aligned corpus vector table with brute-force cosine ranking.
#[derive(Debug, Clone)]
pub struct CorpusVectors {
    matrix: Array2<f64>,
}

impl CorpusVectors {
    #[must_use]
    pub fn new(matrix: Array2<f64>) -> Self {
        Self { matrix }
    }

    /// Score `query` against every row, in row order.
    pub fn scores(&self, query: ArrayView1<'_, f64>) -> Result<Vec<f64>> {
        if query.len() != self.dimension() {
            return Err(VectorStoreError::InvalidDimension {
                expected: self.dimension(),
                actual: query.len(),
            });
        }
        Ok(self
            .matrix
            .rows()
            .into_iter()
            .map(|row| cosine_similarity(query, row))
            .collect())
    }

    /// Top `k` rows as `(row, score)`, score descending. Equal scores keep
    /// row order, so the earlier record wins.
    pub fn rank(&self, query: ArrayView1<'_, f64>, k: usize) -> Result<Vec<(usize, f64)>> {
        let mut scores: Vec<(usize, f64)> = self.scores(query)?.into_iter().enumerate().collect();
        scores.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        scores.truncate(k);
        Ok(scores)
    }

    #[must_use]
    pub fn row(&self, idx: usize) -> Option<ArrayView1<'_, f64>> {
        (idx < self.len()).then(|| self.matrix.row(idx))
    }

    #[must_use]
    pub fn dimension(&self) -> usize {
        self.matrix.ncols()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.matrix.nrows()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matrix.nrows() == 0
    }
}
