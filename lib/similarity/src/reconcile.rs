//! Length reconciliation and the stateless compute path

use crate::metric;
use tracing::debug;
use vecsim_core::{Error, MismatchMode, Result, SimilarityMode};

/// Bring two vectors to the same length according to `mode`
///
/// Equal-length input is returned untouched. Under [`MismatchMode::Truncate`]
/// the longer vector is cut to the prefix matching the shorter one's length;
/// argument order is preserved.
pub fn reconcile<'a>(
    a: &'a [f64],
    b: &'a [f64],
    mode: MismatchMode,
) -> Result<(&'a [f64], &'a [f64])> {
    if a.len() == b.len() {
        return Ok((a, b));
    }

    match mode {
        MismatchMode::Bail => {
            debug!(left = a.len(), right = b.len(), "length mismatch, bailing");
            Err(Error::LengthMismatch {
                left: a.len(),
                right: b.len(),
            })
        }
        MismatchMode::Truncate => {
            let len = a.len().min(b.len());
            debug!(left = a.len(), right = b.len(), len, "truncating to shorter length");
            Ok((&a[..len], &b[..len]))
        }
    }
}

/// Compute a score with explicit modes and no ambient state
///
/// Lengths are reconciled first; the reconciled pair then goes back through
/// the full path, where it takes the equal-length branch straight to the metric.
pub fn compute_with(
    a: &[f64],
    b: &[f64],
    similarity: SimilarityMode,
    mismatch: MismatchMode,
) -> Result<f64> {
    if a.len() != b.len() {
        let (a, b) = reconcile(a, b, mismatch)?;
        return compute_with(a, b, similarity, mismatch);
    }

    Ok(metric::score(similarity, a, b))
}
