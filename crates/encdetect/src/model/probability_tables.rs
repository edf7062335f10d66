//! # Unigram and Bigram Probability Tables

use crate::{
    model::{ByteCountTable, BytePairCountTable},
    types::{BytePair, CountType, NUM_PAIRS, NUM_SYMBOLS, pair_index},
};

fn normalize<C: CountType>(
    count: C,
    total: f64,
) -> f64 {
    if total > 0.0 {
        count.to_f64().unwrap_or_default() / total
    } else {
        0.0
    }
}

/// ``count / total`` per byte value.
///
/// Every entry lies in ``[0, 1]``. A table built from zero symbols is all zeros.
#[derive(Debug, Clone, PartialEq)]
pub struct UnigramProbability {
    probs: [f64; NUM_SYMBOLS],
}

impl UnigramProbability {
    /// Normalize a [`ByteCountTable`] by its total.
    pub fn from_counts<C: CountType>(counts: &ByteCountTable<C>) -> Self {
        let total = counts.total().to_f64().unwrap_or_default();

        let mut probs = [0.0; NUM_SYMBOLS];
        for (p, &c) in probs.iter_mut().zip(counts.counts().iter()) {
            *p = normalize(c, total);
        }
        Self { probs }
    }

    /// The probability of ``byte``.
    #[inline(always)]
    pub fn get(
        &self,
        byte: u8,
    ) -> f64 {
        self.probs[byte as usize]
    }

    /// The full table, indexed by byte value.
    pub fn probs(&self) -> &[f64; NUM_SYMBOLS] {
        &self.probs
    }
}

/// ``count / (n - 1)`` per ordered byte pair, for a corpus of ``n`` bytes.
///
/// Every entry lies in ``[0, 1]``. A table built from zero pairs is all zeros.
#[derive(Debug, Clone, PartialEq)]
pub struct BigramProbability {
    probs: Box<[f64]>,
}

impl BigramProbability {
    /// Normalize a [`BytePairCountTable`] by its total.
    pub fn from_counts<C: CountType>(counts: &BytePairCountTable<C>) -> Self {
        let total = counts.total().to_f64().unwrap_or_default();

        let probs: Box<[f64]> = counts
            .counts()
            .iter()
            .map(|&c| normalize(c, total))
            .collect();
        debug_assert_eq!(probs.len(), NUM_PAIRS);

        Self { probs }
    }

    /// The probability of ``pair``.
    #[inline(always)]
    pub fn get(
        &self,
        pair: BytePair,
    ) -> f64 {
        self.probs[pair_index(pair)]
    }

    /// The full table, indexed by [`pair_index`].
    pub fn probs(&self) -> &[f64] {
        &self.probs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unigram() {
        let probs = UnigramProbability::from_counts(&ByteCountTable::<u64>::from_bytes(b"abba"));

        assert_eq!(probs.get(b'a'), 0.5);
        assert_eq!(probs.get(b'b'), 0.5);
        assert_eq!(probs.get(b'c'), 0.0);

        let sum: f64 = probs.probs().iter().sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_bigram() {
        let probs =
            BigramProbability::from_counts(&BytePairCountTable::<u32>::from_bytes(b"abba"));

        // 3 pairs: ab, bb, ba
        assert_eq!(probs.get((b'a', b'b')), 1.0 / 3.0);
        assert_eq!(probs.get((b'b', b'b')), 1.0 / 3.0);
        assert_eq!(probs.get((b'b', b'a')), 1.0 / 3.0);
        assert_eq!(probs.get((b'a', b'a')), 0.0);
        assert_eq!(probs.probs().len(), NUM_PAIRS);
    }

    #[test]
    fn test_empty_tables_are_zero() {
        let unigram = UnigramProbability::from_counts(&ByteCountTable::<u64>::from_bytes(b""));
        assert!(unigram.probs().iter().all(|&p| p == 0.0));

        let bigram = BigramProbability::from_counts(&BytePairCountTable::<u64>::from_bytes(b"z"));
        assert!(bigram.probs().iter().all(|&p| p == 0.0));
    }
}
