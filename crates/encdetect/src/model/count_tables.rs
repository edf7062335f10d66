//! # Byte and Byte-Pair Count Tables

use crate::types::{
    BytePair,
    CountType,
    NUM_PAIRS,
    NUM_SYMBOLS,
    byte_pairs,
    index_pair,
    pair_index,
};

/// Occurrence counts of single byte values over a corpus.
#[derive(Debug, Clone, PartialEq)]
pub struct ByteCountTable<C: CountType = u64> {
    counts: [C; NUM_SYMBOLS],
    total: C,
}

impl<C: CountType> Default for ByteCountTable<C> {
    fn default() -> Self {
        Self {
            counts: [C::zero(); NUM_SYMBOLS],
            total: C::zero(),
        }
    }
}

impl<C: CountType> ByteCountTable<C> {
    /// Count every byte of ``bytes`` in one scan.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut table = Self::default();
        for &b in bytes {
            table.counts[b as usize] += C::one();
        }
        table.total = C::from_usize(bytes.len()).unwrap_or_else(C::max_value);
        table
    }

    /// The count of ``byte``.
    #[inline(always)]
    pub fn count(
        &self,
        byte: u8,
    ) -> C {
        self.counts[byte as usize]
    }

    /// The number of symbols scanned.
    pub fn total(&self) -> C {
        self.total
    }

    /// The full count array, indexed by byte value.
    pub fn counts(&self) -> &[C; NUM_SYMBOLS] {
        &self.counts
    }
}

/// Occurrence counts of adjacent ordered byte pairs over a corpus.
///
/// Indexed by [`pair_index`]; a corpus of ``n`` bytes yields ``n - 1`` pairs.
#[derive(Debug, Clone, PartialEq)]
pub struct BytePairCountTable<C: CountType = u64> {
    counts: Box<[C]>,
    total: C,
}

impl<C: CountType> Default for BytePairCountTable<C> {
    fn default() -> Self {
        Self {
            counts: vec![C::zero(); NUM_PAIRS].into_boxed_slice(),
            total: C::zero(),
        }
    }
}

impl<C: CountType> BytePairCountTable<C> {
    /// Count every adjacent pair of ``bytes`` in one sliding scan.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut table = Self::default();
        for pair in byte_pairs(bytes) {
            table.counts[pair_index(pair)] += C::one();
        }
        table.total =
            C::from_usize(bytes.len().saturating_sub(1)).unwrap_or_else(C::max_value);
        table
    }

    /// The count of ``pair``.
    #[inline(always)]
    pub fn count(
        &self,
        pair: BytePair,
    ) -> C {
        self.counts[pair_index(pair)]
    }

    /// The number of pairs scanned.
    pub fn total(&self) -> C {
        self.total
    }

    /// The full count slice, indexed by [`pair_index`].
    pub fn counts(&self) -> &[C] {
        &self.counts
    }

    /// Iterate the ``(pair, count)`` entries with a non-zero count.
    pub fn iter_nonzero(&self) -> impl Iterator<Item = (BytePair, C)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_zero())
            .map(|(i, &c)| (index_pair(i), c))
    }
}
