use bitvec::prelude::*;
use core::mem;

/// Fixed size set of vertex ids backed by a bit vector, with a running count
/// of set bits.
#[derive(Clone, Debug, Default)]
pub struct BitSet {
    cardinality: usize,
    bit_vec: BitVec,
}

const fn block_size() -> usize {
    mem::size_of::<usize>() * 8
}

impl BitSet {
    #[inline]
    pub fn new(size: usize) -> Self {
        Self {
            cardinality: 0,
            bit_vec: bitvec![0; size],
        }
    }

    /// Sets `idx` and returns whether it was already set.
    #[inline]
    pub fn set_bit(&mut self, idx: usize) -> bool {
        if self.bit_vec[idx] {
            return true;
        }
        self.bit_vec.set(idx, true);
        self.cardinality += 1;
        false
    }

    #[inline]
    pub fn cardinality(&self) -> usize {
        self.cardinality
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bit_vec.len()
    }

    /// First unset index at or after `idx`. Scans whole words at a time, so
    /// long runs of visited vertices are skipped cheaply.
    #[inline]
    pub fn get_next_unset(&self, idx: usize) -> Option<usize> {
        if idx >= self.len() {
            return None;
        }
        let words = self.bit_vec.as_slice();
        let mut word_idx = idx / block_size();
        let mut word = !words[word_idx] & (usize::MAX << (idx % block_size()));
        while word == 0 {
            word_idx += 1;
            word = !*words.get(word_idx)?;
        }
        let unset = word_idx * block_size() + word.trailing_zeros() as usize;
        // bits past `len` in the last word are never set
        Some(unset).filter(|v| *v < self.len())
    }
}

#[cfg(test)]
mod tests {
    use crate::datastructures::BitSet;

    #[test]
    fn set_bit_counts_once() {
        let mut bs = BitSet::new(256);
        for i in (0..256).filter(|i| i % 2 == 0) {
            assert!(!bs.set_bit(i));
        }
        assert!(bs.set_bit(0));
        assert!(bs.set_bit(254));
        assert_eq!(bs.cardinality(), 128);
        assert_eq!(bs.len(), 256);
    }

    #[test]
    fn next_unset() {
        let mut bs = BitSet::new(130);
        assert_eq!(bs.get_next_unset(3), Some(3));
        for i in 0..129 {
            if i != 64 {
                bs.set_bit(i);
            }
        }
        assert_eq!(bs.get_next_unset(0), Some(64));
        assert_eq!(bs.get_next_unset(65), Some(129));
        assert!(!bs.set_bit(64));
        assert!(bs.set_bit(64));
        assert!(!bs.set_bit(129));
        assert_eq!(bs.cardinality(), bs.len());
        assert_eq!(bs.get_next_unset(0), None);
        assert_eq!(bs.get_next_unset(130), None);
    }

    #[test]
    fn next_unset_on_word_boundary() {
        let mut bs = BitSet::new(128);
        for i in 0..64 {
            bs.set_bit(i);
        }
        assert_eq!(bs.get_next_unset(0), Some(64));
        for i in 64..128 {
            bs.set_bit(i);
        }
        assert_eq!(bs.get_next_unset(10), None);
    }
}
