use std::cmp::Ordering;

use crate::common::version_db::MODE_INDICATOR_BITS;

// Mode
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Copy, Clone, Hash)]
pub enum Mode {
    Numeric = 0b0001,
    Alphanumeric = 0b0010,
    Byte = 0b0100,
}

impl PartialOrd for Mode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Mode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.index().cmp(&other.index())
    }
}

impl Mode {
    // Row of the char count bits table
    pub fn index(self) -> usize {
        match self {
            Self::Numeric => 0,
            Self::Alphanumeric => 1,
            Self::Byte => 2,
        }
    }

    pub fn contains(self, ch: char) -> bool {
        match self {
            Self::Numeric => ch.is_ascii_digit(),
            Self::Alphanumeric => {
                matches!(ch, '0'..='9' | 'A'..='Z' | ' ' | '$' | '%' | '*' | '+' | '-' | '.' | '/' | ':')
            }
            Self::Byte => (ch as u32) <= 0xFF,
        }
    }

    /// Value of a character in this mode. `$` maps to 0 in alphanumeric mode
    /// rather than the usual 37.
    #[inline]
    pub fn value(self, ch: char) -> u8 {
        debug_assert!(self.contains(ch), "Invalid {self:?} char: {ch:?}");
        match self {
            Self::Numeric => ch as u8 - b'0',
            Self::Alphanumeric => match ch {
                '0'..='9' => ch as u8 - b'0',
                'A'..='Z' => ch as u8 - b'A' + 10,
                ' ' => 36,
                '$' => 0,
                '%' => 38,
                '*' => 39,
                '+' => 40,
                '-' => 41,
                '.' => 42,
                '/' => 43,
                ':' => 44,
                _ => unreachable!("Invalid alphanumeric {ch:?}"),
            },
            Self::Byte => ch as u8,
        }
    }

    /// Number of values packed together into one bit group.
    pub fn chunk_size(self) -> usize {
        match self {
            Self::Numeric => 3,
            Self::Alphanumeric => 2,
            Self::Byte => 1,
        }
    }

    pub fn encode_chunk(self, chunk: &[u8]) -> u16 {
        let len = chunk.len();
        debug_assert!(
            (1..=self.chunk_size()).contains(&len),
            "Invalid chunk length for {self:?}: {len}"
        );
        match self {
            Self::Numeric => chunk.iter().fold(0_u16, |n, &v| n * 10 + v as u16),
            Self::Alphanumeric => chunk.iter().fold(0_u16, |n, &v| n * 45 + v as u16),
            Self::Byte => chunk[0] as u16,
        }
    }

    pub fn encoded_len(self, len: usize) -> usize {
        match self {
            Self::Numeric => (len * 10).div_ceil(3),
            Self::Alphanumeric => (len * 11).div_ceil(2),
            Self::Byte => len * 8,
        }
    }
}


// Segment
//------------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Segment<'a> {
    pub mode: Mode,
    pub len_bits: usize,  // Bit len of char count
    pub values: &'a [u8], // Per char values in mode
}

impl<'a> Segment<'a> {
    pub fn new(mode: Mode, len_bits: usize, values: &'a [u8]) -> Self {
        Self { mode, len_bits, values }
    }

    pub fn bit_len(&self) -> usize {
        let encoded_bits = self.mode.encoded_len(self.values.len());
        MODE_INDICATOR_BITS + self.len_bits + encoded_bits
    }
}


// Global constants
//------------------------------------------------------------------------------

pub static PADDING_CODEWORDS: [u8; 2] = [0b1110_1100, 0b0001_0001];

pub static MODES: [Mode; 3] = [Mode::Numeric, Mode::Alphanumeric, Mode::Byte];
