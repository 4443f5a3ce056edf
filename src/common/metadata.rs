use std::fmt::{Display, Formatter};
use std::ops::{Deref, Not};

use super::codec::Mode;
use super::error::{QRError, QRResult};
use super::mask::MaskPattern;
use super::version_db::*;

// Version
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord, Hash)]
pub struct Version(usize);

impl Version {
    pub const MIN: Version = Version(1);
    pub const MAX: Version = Version(40);

    pub fn new(version: usize) -> QRResult<Self> {
        match version {
            1..=40 => Ok(Self(version)),
            _ => Err(QRError::InvalidVersion(version)),
        }
    }

    pub(crate) fn all() -> impl Iterator<Item = Version> {
        (1..=40).map(Version)
    }

    pub const fn width(self) -> usize {
        self.0 * 4 + 17
    }

    // Bits available for mode indicator, char count, data & padding
    pub fn data_bit_capacity(self, ecl: ECLevel) -> usize {
        DATA_BIT_CAPACITY[self.0][ecl as usize]
    }

    pub fn data_capacity(self, ecl: ECLevel) -> usize {
        self.data_bit_capacity(ecl) >> 3
    }

    pub fn total_ecc(self, ecl: ECLevel) -> usize {
        TOTAL_ECC_CODEWORDS[self.0][ecl as usize]
    }

    pub fn block_counts(self, ecl: ECLevel) -> (usize, usize) {
        (SHORT_BLOCK_COUNT[self.0][ecl as usize], LONG_BLOCK_COUNT[self.0][ecl as usize])
    }

    pub fn ecc_per_block(self, ecl: ECLevel) -> usize {
        let (short_cnt, long_cnt) = self.block_counts(ecl);
        let total_blocks = short_cnt + long_cnt;
        debug_assert!(
            self.total_ecc(ecl) % total_blocks == 0,
            "Ecc codewords {} not divisible by block count {total_blocks}",
            self.total_ecc(ecl)
        );
        self.total_ecc(ecl) / total_blocks
    }

    // (short block size, short block count, long block size, long block count)
    pub fn data_codewords_per_block(self, ecl: ECLevel) -> (usize, usize, usize, usize) {
        let (short_cnt, long_cnt) = self.block_counts(ecl);
        let short_sz = self.data_capacity(ecl) / (short_cnt + long_cnt);
        let long_sz = if long_cnt > 0 { short_sz + 1 } else { 0 };
        (short_sz, short_cnt, long_sz, long_cnt)
    }

    pub fn total_codewords(self) -> usize {
        self.data_capacity(ECLevel::L) + self.total_ecc(ECLevel::L)
    }

    pub fn remainder_bits(self) -> usize {
        REMAINDER_BITS[self.0]
    }

    pub fn char_cnt_bits(self, mode: Mode) -> usize {
        let tier = match self.0 {
            1..=9 => 0,
            10..=26 => 1,
            _ => 2,
        };
        CHAR_CNT_BITS[mode.index()][tier]
    }

    pub fn alignment_pattern(self) -> &'static [i16] {
        ALIGNMENT_PATTERN_POSITIONS[self.0]
    }

    pub fn info(self) -> u32 {
        debug_assert!(self.0 >= 7, "Version info is only defined for versions 7 and above");
        VERSION_INFOS[self.0 - 7]
    }
}

impl Deref for Version {
    type Target = usize;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}


// Error correction level
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord, Hash)]
pub enum ECLevel {
    L = 0,
    M = 1,
    Q = 2,
    H = 3,
}

// Format information
//------------------------------------------------------------------------------

pub fn format_info(ecl: ECLevel, mask: MaskPattern) -> u32 {
    FORMAT_INFOS[ecl as usize][*mask as usize]
}


// Color
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    pub fn select<T>(self, light: T, dark: T) -> T {
        match self {
            Self::Light => light,
            Self::Dark => dark,
        }
    }
}

impl From<bool> for Color {
    fn from(bit: bool) -> Self {
        if bit {
            Self::Dark
        } else {
            Self::Light
        }
    }
}

impl Not for Color {
    type Output = Self;
    fn not(self) -> Self::Output {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

// Metadata
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub struct Metadata {
    pub version: Version,
    pub ec_level: ECLevel,
    pub mask: Option<MaskPattern>,
}

impl Display for Metadata {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.mask {
            Some(m) => write!(
                f,
                "{{ Version: {}, Ec level: {:?}, Mask: {} }}",
                self.version, self.ec_level, *m
            ),
            None => {
                write!(f, "{{ Version: {}, Ec level: {:?}, Mask: None }}", self.version, self.ec_level)
            }
        }
    }
}
