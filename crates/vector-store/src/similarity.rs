use ndarray::ArrayView1;

/// Cosine similarity. Mismatched lengths and all-zero vectors score 0.
#[must_use]
pub fn cosine_similarity(a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>) -> f64 {
    if a.len() != b.len() {
        return 0.0;
    }

    let dot_product = a.dot(&b);
    let norm_a = a.dot(&a).sqrt();
    let norm_b = b.dot(&b).sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    dot_product / (norm_a * norm_b)
}

/// Count of dimensions where both vectors are strictly positive.
#[must_use]
pub fn overlap_count(a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>) -> usize {
    a.iter().zip(b.iter()).filter(|(x, y)| **x > 0.0 && **y > 0.0).count()
}
