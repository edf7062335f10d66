//! # Encoding Detection
//!
//! Scores an input under both models and commits to the better fit.
//!
//! * [`log_likelihood_score`] scores bytes under one [`crate::EncodingModel`].
//! * [`detect`] compares the two scores; UTF-8 must win strictly.
//! * [`Detector`] owns both models for repeated queries.
//! * ``detect_batch`` (feature ``rayon``) classifies many inputs in parallel.

mod detector;
mod scoring;

#[cfg(feature = "rayon")]
mod batch;

#[cfg(feature = "rayon")]
#[doc(inline)]
pub use batch::detect_batch;
#[doc(inline)]
pub use detector::{Detector, Scores, detect, score_both};
#[doc(inline)]
pub use scoring::log_likelihood_score;
