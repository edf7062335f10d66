//! # Model Training
//!
//! Builds the two [`EncodingModel`](crate::EncodingModel)s from reference
//! corpora, one genuinely UTF-8 and one genuinely Windows-1251.
//!
//! Training is a single pass over each corpus; there is no incremental
//! update. With the ``rayon`` feature, the two corpora are counted
//! concurrently.
//!
//! ```rust
//! use encdetect::{Encoding, training::train};
//!
//! let (utf8, win1251) = train("щука".as_bytes(), &[0xF9, 0xF3, 0xEA, 0xE0]).unwrap();
//!
//! assert_eq!(utf8.encoding(), Encoding::Utf8);
//! assert_eq!(win1251.encoding(), Encoding::Windows1251);
//! assert_eq!(win1251.unigram().get(0xF9), 0.25);
//! ```

mod trainer;

#[doc(inline)]
pub use trainer::{train, train_model};
