//! # Parallel Batch Detection

use rayon::prelude::*;

use crate::{EDResult, detection::Detector, encoding::Encoding};

/// Classify a batch of inputs in parallel.
///
/// The detector's models are shared read-only across the ``rayon`` pool.
///
/// ## Returns
/// One result per input, in input order.
pub fn detect_batch<S>(
    detector: &Detector,
    texts: &[S],
) -> Vec<EDResult<Encoding>>
where
    S: AsRef<[u8]> + Sync,
{
    texts
        .par_iter()
        .map(|text| detector.detect(text.as_ref()))
        .collect()
}
