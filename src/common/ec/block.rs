use std::ops::Deref;

use super::encoder::ecc;
use super::MAX_BLOCK_SIZE;
use crate::common::metadata::{ECLevel, Version};

// Codeword block
//------------------------------------------------------------------------------

/// Data codewords of one block followed by their ecc codewords, stored inline.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Block {
    codewords: [u8; MAX_BLOCK_SIZE],
    data_len: usize,
    ecc_len: usize,
}

impl Block {
    pub fn new(data: &[u8], ecc_len: usize) -> Self {
        let data_len = data.len();
        debug_assert!(data_len + ecc_len <= MAX_BLOCK_SIZE, "Block of {} codewords", data_len + ecc_len);

        let mut codewords = [0u8; MAX_BLOCK_SIZE];
        let (data_part, ecc_part) = codewords.split_at_mut(data_len);
        data_part.copy_from_slice(data);
        ecc_part[..ecc_len].copy_from_slice(&ecc(data, ecc_len));
        Self { codewords, data_len, ecc_len }
    }

    pub fn len(&self) -> usize {
        self.data_len + self.ecc_len
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[cfg(test)]
    pub fn ec_len(&self) -> usize {
        self.ecc_len
    }

    #[cfg(test)]
    pub fn data_len(&self) -> usize {
        self.data_len
    }

    #[cfg(test)]
    pub fn full(&self) -> &[u8] {
        &self.codewords[..self.len()]
    }

    pub fn data(&self) -> &[u8] {
        &self.codewords[..self.data_len]
    }

    pub fn ecc(&self) -> &[u8] {
        &self.codewords[self.data_len..self.len()]
    }
}

/// Slices data codewords into the version's short blocks, then its long blocks.
pub fn blockify(data: &[u8], ver: Version, ecl: ECLevel) -> Vec<&[u8]> {
    let (short_sz, short_cnt, long_sz, long_cnt) = ver.data_codewords_per_block(ecl);
    debug_assert_eq!(
        short_sz * short_cnt + long_sz * long_cnt,
        data.len(),
        "Data codewords don't match block layout"
    );

    let (short, long) = data.split_at(short_sz * short_cnt);
    short.chunks(short_sz).chain(long.chunks(long_sz.max(1))).collect()
}

pub fn compute_blocks(data: &[u8], ver: Version, ecl: ECLevel) -> Vec<Block> {
    let ecc_len = ver.ecc_per_block(ecl);
    blockify(data, ver, ecl).into_iter().map(|b| Block::new(b, ecc_len)).collect()
}

/// Column-major read of ragged rows: element `i` of every block that has one,
/// for increasing `i`.
pub fn interleave<T: Copy, V: Deref<Target = [T]>>(blocks: &[V]) -> Vec<T> {
    let longest = blocks.iter().map(|b| b.len()).max().unwrap_or(0);
    (0..longest).flat_map(move |i| blocks.iter().filter_map(move |b| b.get(i).copied())).collect()
}
