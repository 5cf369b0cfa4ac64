//! Cosine similarity over embedding vectors.

use tracing::{debug, warn};

use crate::Embedder;

/// `dot(a, b) / (|a| * |b|)` accumulated in `f64`.
///
/// Returns `None` when the similarity is undefined: an empty vector, a
/// dimension mismatch, or a zero-magnitude vector.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Option<f64> {
    if a.is_empty() || a.len() != b.len() {
        return None;
    }

    let mut dot = 0f64;
    let mut norm_a = 0f64;
    let mut norm_b = 0f64;
    for (&x, &y) in a.iter().zip(b.iter()) {
        let (x, y) = (f64::from(x), f64::from(y));
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom == 0.0 || !denom.is_finite() {
        return None;
    }
    let sim = dot / denom;
    sim.is_finite().then_some(sim)
}

/// Embed both texts and return their cosine similarity.
///
/// Embedding failures are logged and reported as `None`; callers treat
/// `None` as "no evidence" and carry on.
pub async fn embedding_similarity(embedder: &dyn Embedder, a: &str, b: &str) -> Option<f64> {
    let first = match embedder.embed(a).await {
        Ok(v) => v,
        Err(err) => {
            warn!(model = embedder.model_name(), error = %err, "embedding failed");
            return None;
        }
    };
    let second = match embedder.embed(b).await {
        Ok(v) => v,
        Err(err) => {
            warn!(model = embedder.model_name(), error = %err, "embedding failed");
            return None;
        }
    };

    let sim = cosine_similarity(&first, &second);
    if sim.is_none() {
        debug!(
            model = embedder.model_name(),
            dim_a = first.len(),
            dim_b = second.len(),
            "cosine similarity undefined"
        );
    }
    sim
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SemanticError;
    use async_trait::async_trait;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn identical_vectors() {
        let v = [0.3f32, -1.2, 4.0];
        assert!(approx(cosine_similarity(&v, &v).unwrap(), 1.0));
    }

    #[test]
    fn orthogonal_and_opposite() {
        assert!(approx(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).unwrap(), 0.0));
        assert!(approx(cosine_similarity(&[1.0, 2.0], &[-1.0, -2.0]).unwrap(), -1.0));
    }

    #[test]
    fn scale_invariant() {
        let a = [1.0f32, 2.0, 3.0];
        let b = [2.0f32, 4.0, 6.0];
        assert!(approx(cosine_similarity(&a, &b).unwrap(), 1.0));
    }

    #[test]
    fn zero_magnitude_is_undefined() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[1.0, 1.0]), None);
        assert_eq!(cosine_similarity(&[1.0, 1.0], &[0.0, 0.0]), None);
    }

    #[test]
    fn mismatched_or_empty_is_undefined() {
        assert_eq!(cosine_similarity(&[1.0], &[1.0, 2.0]), None);
        assert_eq!(cosine_similarity(&[], &[]), None);
    }

    struct Failing;

    #[async_trait]
    impl Embedder for Failing {
        fn model_name(&self) -> &str {
            "failing"
        }

        async fn embed(&self, _text: &str) -> Result<Vec<f32>, SemanticError> {
            Err(SemanticError::Http("HTTP error 500".into()))
        }
    }

    struct Constant(Vec<f32>);

    #[async_trait]
    impl Embedder for Constant {
        fn model_name(&self) -> &str {
            "constant"
        }

        async fn embed(&self, _text: &str) -> Result<Vec<f32>, SemanticError> {
            Ok(self.0.clone())
        }
    }

    #[tokio::test]
    async fn failure_becomes_none() {
        assert_eq!(embedding_similarity(&Failing, "a", "b").await, None);
    }

    #[tokio::test]
    async fn success_returns_cosine() {
        let sim = embedding_similarity(&Constant(vec![1.0, 1.0]), "a", "b").await;
        assert!(approx(sim.unwrap(), 1.0));
    }

    #[tokio::test]
    async fn zero_vector_becomes_none() {
        let sim = embedding_similarity(&Constant(vec![0.0, 0.0]), "a", "b").await;
        assert_eq!(sim, None);
    }
}
