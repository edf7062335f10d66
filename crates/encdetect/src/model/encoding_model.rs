//! # Per-Encoding Byte Model

use crate::{
    EDResult,
    detection::log_likelihood_score,
    encoding::Encoding,
    model::{BigramProbability, ByteCountTable, BytePairCountTable, UnigramProbability},
    types::CountType,
};

/// The unigram and bigram probability tables for one [`Encoding`].
///
/// Immutable once built; share it by reference (it is ``Send + Sync``).
#[derive(Debug, Clone, PartialEq)]
pub struct EncodingModel {
    encoding: Encoding,
    unigram: UnigramProbability,
    bigram: BigramProbability,
}

impl EncodingModel {
    /// Assemble a model from its probability tables.
    pub fn new(
        encoding: Encoding,
        unigram: UnigramProbability,
        bigram: BigramProbability,
    ) -> Self {
        Self {
            encoding,
            unigram,
            bigram,
        }
    }

    /// Normalize a pair of count tables into a model.
    pub fn from_counts<C: CountType>(
        encoding: Encoding,
        byte_counts: &ByteCountTable<C>,
        pair_counts: &BytePairCountTable<C>,
    ) -> Self {
        Self::new(
            encoding,
            UnigramProbability::from_counts(byte_counts),
            BigramProbability::from_counts(pair_counts),
        )
    }

    /// The encoding this model was trained for.
    pub fn encoding(&self) -> Encoding {
        self.encoding
    }

    /// The unigram table.
    pub fn unigram(&self) -> &UnigramProbability {
        &self.unigram
    }

    /// The bigram table.
    pub fn bigram(&self) -> &BigramProbability {
        &self.bigram
    }

    /// The log-likelihood score of ``text`` under this model.
    ///
    /// See [`log_likelihood_score`].
    pub fn score(
        &self,
        text: &[u8],
    ) -> EDResult<f64> {
        log_likelihood_score(self, text)
    }
}
