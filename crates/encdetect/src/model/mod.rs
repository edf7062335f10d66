//! # Byte Models
//!
//! Counting and probability tables, and the per-encoding [`EncodingModel`].
//!
//! A model is built in two steps:
//! * [`ByteCountTable`] and [`BytePairCountTable`] count a corpus in one scan each;
//! * [`UnigramProbability`] and [`BigramProbability`] normalize those counts.
//!
//! Pair tables are flat, indexed by [`crate::types::pair_index`].

mod count_tables;
mod encoding_model;
mod probability_tables;

#[doc(inline)]
pub use count_tables::{ByteCountTable, BytePairCountTable};
#[doc(inline)]
pub use encoding_model::EncodingModel;
#[doc(inline)]
pub use probability_tables::{BigramProbability, UnigramProbability};
