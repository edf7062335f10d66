//! # `encdetect` Byte Bigram Encoding Detector
//!
//! Tell UTF-8 text from Windows-1251 text by comparing how well its bytes fit
//! two statistical byte models, one trained per encoding.
//!
//! See:
//! * [`model`] for the count and probability tables, and [`EncodingModel`].
//! * [`training`] to build a pair of models from reference corpora.
//! * [`detection`] to score and classify unknown bytes.
//! * [`corpus`] to load reference corpora from disk.
//!
//! ## Crate Features
//!
//! #### feature: ``default``
//!
//! * ``rayon``
//!
//! #### feature: ``rayon``
//!
//! Trains the two models concurrently, and enables
//! ``detection::detect_batch`` for classifying many inputs in parallel.
//!
//! #### feature: ``tracing``
//!
//! This enables a number of ``tracing`` instrumentation points.
//! This is only useful for timing tracing of the library itself.
//!
//! ## Detecting an Encoding
//!
//! ```rust,no_run
//! use encdetect::{CorpusPaths, Detector, Encoding};
//!
//! fn example(path: &str) -> encdetect::EDResult<Encoding> {
//!     let detector = Detector::from_corpus_paths(&CorpusPaths::default())?;
//!
//!     let text = encdetect::read_corpus(path)?;
//!     detector.detect(&text)
//! }
//! ```
//!
//! Models can also be trained directly from in-memory corpora:
//!
//! ```rust
//! use encdetect::{Encoding, detect, train};
//!
//! let (utf8, win1251) = train(
//!     "привет, мир".as_bytes(),
//!     &[0xEF, 0xF0, 0xE8, 0xE2, 0xE5, 0xF2, 0x2C, 0x20, 0xEC, 0xE8, 0xF0],
//! )
//! .unwrap();
//!
//! assert_eq!(
//!     detect(&utf8, &win1251, "мир".as_bytes()).unwrap(),
//!     Encoding::Utf8
//! );
//! ```
#![warn(missing_docs, unused)]

pub mod corpus;
pub mod detection;
pub mod encoding;
pub mod errors;
pub mod model;
pub mod training;
pub mod types;

#[doc(inline)]
pub use corpus::{CorpusPaths, read_corpus};
#[doc(inline)]
pub use detection::{Detector, Scores, detect};
#[doc(inline)]
pub use encoding::Encoding;
#[doc(inline)]
pub use errors::{EDResult, EncDetectError};
#[doc(inline)]
pub use model::EncodingModel;
#[doc(inline)]
pub use training::train;
