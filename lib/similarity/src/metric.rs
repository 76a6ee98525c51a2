//! Metric functions
//!
//! Every function takes two vectors of equal length and returns a scalar.
//! The dispatcher reconciles lengths before any of these run.
//!
//! Empty input is a caller precondition: the magnitude based metrics produce
//! NaN from 0/0 and Hamming produces 0.0. Nothing here panics on it.

use crate::value_set::ValueSet;
use tracing::trace;
use vecsim_core::SimilarityMode;

/// Run the metric selected by `mode`
pub fn score(mode: SimilarityMode, a: &[f64], b: &[f64]) -> f64 {
    trace!(%mode, dim = a.len(), "dispatching metric");
    match mode {
        SimilarityMode::Cosine => cosine(a, b),
        SimilarityMode::Tanimoto => tanimoto(a, b),
        SimilarityMode::Ochiai => ochiai(a, b),
        SimilarityMode::JaccardIndex => jaccard_index(a, b),
        SimilarityMode::JaccardDistance => jaccard_distance(a, b),
        SimilarityMode::Dice => dice(a, b),
        SimilarityMode::Hamming => hamming(a, b),
    }
}

#[inline]
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

/// Euclidean norm
#[inline]
pub fn magnitude(a: &[f64]) -> f64 {
    a.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// Cosine similarity, in [-1, 1]
pub fn cosine(a: &[f64], b: &[f64]) -> f64 {
    dot(a, b) / (magnitude(a) * magnitude(b))
}

/// Continuous Tanimoto (extended Jaccard) coefficient
pub fn tanimoto(a: &[f64], b: &[f64]) -> f64 {
    let a_mag = magnitude(a);
    let b_mag = magnitude(b);
    let a_dot_b = dot(a, b);
    a_dot_b / (a_mag * a_mag + b_mag * b_mag - a_dot_b)
}

/// Ochiai coefficient over distinct values
pub fn ochiai(a: &[f64], b: &[f64]) -> f64 {
    let a = ValueSet::from_slice(a);
    let b = ValueSet::from_slice(b);
    a.intersection_len(&b) as f64 / (a.len() as f64 * b.len() as f64).sqrt()
}

/// Jaccard index over distinct values
pub fn jaccard_index(a: &[f64], b: &[f64]) -> f64 {
    let a = ValueSet::from_slice(a);
    let b = ValueSet::from_slice(b);
    a.intersection_len(&b) as f64 / a.union_len(&b) as f64
}

/// 1 - Jaccard index
pub fn jaccard_distance(a: &[f64], b: &[f64]) -> f64 {
    1.0 - jaccard_index(a, b)
}

/// Sørensen-Dice coefficient over distinct values
pub fn dice(a: &[f64], b: &[f64]) -> f64 {
    let a = ValueSet::from_slice(a);
    let b = ValueSet::from_slice(b);
    2.0 * a.intersection_len(&b) as f64 / (a.len() as f64 + b.len() as f64)
}

/// Count of positions where the vectors differ
///
/// Not normalized by length.
pub fn hamming(a: &[f64], b: &[f64]) -> f64 {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b.iter()).filter(|(x, y)| x != y).count() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn test_cosine_orthogonal() {
        assert_eq!(cosine(&[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0]), 0.0);
    }

    #[test]
    fn test_cosine_self_similarity() {
        let a = [0.3, -1.5, 2.0, 7.25];
        assert!((cosine(&a, &a) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_cosine_opposite() {
        assert!((cosine(&[1.0, 2.0], &[-1.0, -2.0]) + 1.0).abs() < EPS);
    }

    #[test]
    fn test_cosine_ignores_magnitude() {
        assert!((cosine(&[2.0, 0.0], &[1.0, 0.0]) - 1.0).abs() < EPS);
    }

    #[test]
    fn test_cosine_empty_is_nan() {
        assert!(cosine(&[], &[]).is_nan());
    }

    #[test]
    fn test_tanimoto() {
        // dot = 4, |a|^2 = |b|^2 = 5
        assert!((tanimoto(&[1.0, 2.0], &[2.0, 1.0]) - 4.0 / 6.0).abs() < EPS);
        assert!((tanimoto(&[1.0, 2.0, 3.0], &[1.0, 2.0, 3.0]) - 1.0).abs() < EPS);
        assert_eq!(tanimoto(&[1.0, 0.0], &[0.0, 1.0]), 0.0);
    }

    #[test]
    fn test_ochiai() {
        // {1,2,3} ∩ {2,3,4} = {2,3}
        let sim = ochiai(&[1.0, 2.0, 3.0], &[2.0, 3.0, 4.0]);
        assert!((sim - 2.0 / 3.0).abs() < EPS);
    }

    #[test]
    fn test_jaccard_index() {
        assert_eq!(jaccard_index(&[1.0, 2.0, 3.0], &[2.0, 3.0, 4.0]), 0.5);
        assert_eq!(jaccard_index(&[1.0, 2.0], &[2.0, 1.0]), 1.0);
        assert_eq!(jaccard_index(&[1.0, 2.0], &[3.0, 4.0]), 0.0);
    }

    #[test]
    fn test_jaccard_distance_complements_index() {
        let pairs: [(&[f64], &[f64]); 3] = [
            (&[1.0, 2.0, 3.0], &[2.0, 3.0, 4.0]),
            (&[0.1, 0.7, 0.7], &[0.7, 0.2, 0.9]),
            (&[5.0], &[5.0]),
        ];
        for (a, b) in pairs {
            assert_eq!(jaccard_distance(a, b), 1.0 - jaccard_index(a, b));
        }
    }

    #[test]
    fn test_dice() {
        let sim = dice(&[1.0, 2.0, 3.0], &[2.0, 3.0, 4.0]);
        assert!((sim - 4.0 / 6.0).abs() < EPS);
    }

    #[test]
    fn test_set_metrics_ignore_duplicates_and_order() {
        let a = [1.0, 1.0, 2.0];
        let deduped = [2.0, 1.0];
        let b = [2.0, 3.0];
        assert_eq!(ochiai(&a, &b), ochiai(&deduped, &b));
        assert_eq!(jaccard_index(&a, &b), jaccard_index(&deduped, &b));
        assert_eq!(dice(&a, &b), dice(&deduped, &b));
    }

    #[test]
    fn test_set_metrics_never_match_nan() {
        assert_eq!(jaccard_index(&[f64::NAN], &[f64::NAN]), 0.0);
        assert_eq!(jaccard_distance(&[f64::NAN], &[f64::NAN]), 1.0);
        assert_eq!(dice(&[f64::NAN, 1.0], &[f64::NAN, 1.0]), 0.5);

        // {1, NaN, NaN} has three elements, {1, 2, 3} has three
        let sim = ochiai(&[1.0, f64::NAN, f64::NAN], &[1.0, 2.0, 3.0]);
        assert!((sim - 1.0 / 3.0).abs() < EPS);
    }

    #[test]
    fn test_hamming() {
        assert_eq!(hamming(&[1.0, 1.0], &[1.0, 1.0]), 0.0);
        assert_eq!(hamming(&[1.0, 2.0, 3.0], &[1.0, 2.0, 4.0]), 1.0);
        assert_eq!(hamming(&[1.0, 2.0, 3.0], &[3.0, 2.0, 1.0]), 2.0);
        assert_eq!(hamming(&[], &[]), 0.0);
    }

    #[test]
    fn test_hamming_counts_nan_as_different() {
        assert_eq!(hamming(&[f64::NAN], &[f64::NAN]), 1.0);
    }

    #[test]
    fn test_score_dispatch() {
        let a = [1.0, 2.0, 3.0];
        let b = [1.0, 2.0, 4.0];
        assert_eq!(score(SimilarityMode::Cosine, &a, &b), cosine(&a, &b));
        assert_eq!(score(SimilarityMode::Tanimoto, &a, &b), tanimoto(&a, &b));
        assert_eq!(score(SimilarityMode::Ochiai, &a, &b), ochiai(&a, &b));
        assert_eq!(score(SimilarityMode::JaccardIndex, &a, &b), jaccard_index(&a, &b));
        assert_eq!(score(SimilarityMode::JaccardDistance, &a, &b), jaccard_distance(&a, &b));
        assert_eq!(score(SimilarityMode::Dice, &a, &b), dice(&a, &b));
        assert_eq!(score(SimilarityMode::Hamming, &a, &b), 1.0);
    }
}
