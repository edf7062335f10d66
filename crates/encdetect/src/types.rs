//! # Common Types and Traits
use core::{
    fmt::{Debug, Display},
    hash::Hash,
    ops::AddAssign,
};

use num_traits::{FromPrimitive, PrimInt, ToPrimitive, Unsigned};

/// The number of distinct byte values.
pub const NUM_SYMBOLS: usize = 1 << 8;

/// The number of distinct ordered byte pairs.
pub const NUM_PAIRS: usize = 1 << 16;

/// Probabilities at or below this are treated as unseen when scoring.
pub const EPSILON: f64 = 1e-12;

/// An ordered pair of adjacent bytes: ``(previous, current)``.
pub type BytePair = (u8, u8);

/// A type that can be used as an occurrence count.
pub trait CountType:
    'static
    + PrimInt
    + FromPrimitive
    + ToPrimitive
    + Unsigned
    + Hash
    + Default
    + Debug
    + Display
    + Send
    + Sync
    + AddAssign
{
}

impl<T> CountType for T where
    T: 'static
        + PrimInt
        + FromPrimitive
        + ToPrimitive
        + Unsigned
        + Hash
        + Default
        + Debug
        + Display
        + Send
        + Sync
        + AddAssign
{
}

/// Pack a [`BytePair`] into its table index, ``(prev << 8) | cur``.
#[inline(always)]
pub fn pair_index(pair: BytePair) -> usize {
    ((pair.0 as usize) << 8) | pair.1 as usize
}

/// Unpack a table index into its [`BytePair`].
///
/// ## Panics
/// If ``index >= NUM_PAIRS``.
#[inline(always)]
pub fn index_pair(index: usize) -> BytePair {
    assert!(index < NUM_PAIRS);
    ((index >> 8) as u8, (index & 0xFF) as u8)
}

/// Iterate the adjacent [`BytePair`]s of a byte slice.
///
/// Yields ``len - 1`` pairs; nothing for slices shorter than 2.
pub fn byte_pairs(bytes: &[u8]) -> impl Iterator<Item = BytePair> + '_ {
    bytes.windows(2).map(|w| (w[0], w[1]))
}

#[cfg(test)]
mod tests {
    use core::marker::PhantomData;

    use super::*;

    #[test]
    fn test_common_count_types() {
        struct IsCount<T: CountType>(PhantomData<T>);

        let _: IsCount<u16>;
        let _: IsCount<u32>;
        let _: IsCount<u64>;
        let _: IsCount<usize>;
    }

    #[test]
    fn test_pair_index() {
        assert_eq!(pair_index((0, 0)), 0);
        assert_eq!(pair_index((0, 1)), 1);
        assert_eq!(pair_index((1, 0)), 256);
        assert_eq!(pair_index((0xD0, 0xBF)), 0xD0BF);
        assert_eq!(pair_index((0xFF, 0xFF)), NUM_PAIRS - 1);

        assert_eq!(index_pair(0xD0BF), (0xD0, 0xBF));
        assert_eq!(index_pair(pair_index((0x20, 0xEF))), (0x20, 0xEF));
    }

    #[test]
    fn test_byte_pairs() {
        assert_eq!(byte_pairs(b"").count(), 0);
        assert_eq!(byte_pairs(b"a").count(), 0);
        assert_eq!(
            byte_pairs(b"abc").collect::<Vec<_>>(),
            vec![(b'a', b'b'), (b'b', b'c')]
        );
    }
}
