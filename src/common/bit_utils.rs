use num_traits::PrimInt;

// Bit stream
//------------------------------------------------------------------------------

/// Fixed capacity, msb first bit buffer.
///
/// Bits are appended at the end and consumed from a separate read cursor, so
/// a stream can be iterated after it has been filled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitStream {
    bytes: Vec<u8>,
    len: usize,
    capacity: usize,
    cursor: usize,
}

impl BitStream {
    pub fn new(capacity: usize) -> Self {
        Self { bytes: vec![0; capacity.div_ceil(8)], len: 0, capacity, cursor: 0 }
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        let len = bytes.len() * 8;
        Self { bytes: bytes.to_vec(), len, capacity: len, cursor: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn remaining(&self) -> usize {
        self.capacity - self.len
    }

    /// Written bytes, the last one zero filled past `len`.
    pub fn data(&self) -> &[u8] {
        &self.bytes[..self.len.div_ceil(8)]
    }

    pub fn get(&self, pos: usize) -> bool {
        debug_assert!(pos < self.len, "Bit {pos} past stream length {}", self.len);

        self.bytes[pos / 8] & (0x80 >> (pos % 8)) != 0
    }

    #[cfg(test)]
    pub fn to_bit_string(&self) -> String {
        (0..self.len).map(|i| if self.get(i) { '1' } else { '0' }).collect()
    }
}

// Writing
//------------------------------------------------------------------------------

impl BitStream {
    pub fn push(&mut self, bit: bool) {
        debug_assert!(self.len < self.capacity, "Stream full at capacity {}", self.capacity);

        if bit {
            self.bytes[self.len / 8] |= 0x80 >> (self.len % 8);
        }
        self.len += 1;
    }

    /// Appends the low `size` bits of `bits`, msb first.
    pub fn push_bits<T: PrimInt>(&mut self, bits: T, size: usize) {
        let width = T::zero().count_zeros() as usize;
        debug_assert!(size <= 16, "At most 16 bits per push: Size {size}");
        debug_assert!(
            size >= width - bits.leading_zeros() as usize,
            "Value doesn't fit in {size} bits"
        );
        debug_assert!(
            self.len + size <= self.capacity,
            "Stream overflow: Capacity {}, Needed {}",
            self.capacity,
            self.len + size
        );

        for shift in (0..size).rev() {
            self.push((bits >> shift) & T::one() == T::one());
        }
    }

    /// Appends whole bytes. The stream must be byte aligned.
    pub fn extend(&mut self, bytes: &[u8]) {
        debug_assert!(self.len % 8 == 0, "Stream not byte aligned: Len {}", self.len);
        debug_assert!(
            self.len + bytes.len() * 8 <= self.capacity,
            "Stream overflow: Capacity {}, Needed {}",
            self.capacity,
            self.len + bytes.len() * 8
        );

        let start = self.len / 8;
        self.bytes[start..start + bytes.len()].copy_from_slice(bytes);
        self.len += bytes.len() * 8;
    }
}


// Reading
//------------------------------------------------------------------------------

impl BitStream {
    /// Reads the next `n` bits as an msb first number, `None` if fewer remain.
    pub fn take_bits(&mut self, n: usize) -> Option<u16> {
        debug_assert!(n <= 16, "At most 16 bits per take: N {n}");

        if self.cursor + n > self.len {
            return None;
        }
        let res = (self.cursor..self.cursor + n).fold(0u16, |acc, i| (acc << 1) | self.get(i) as u16);
        self.cursor += n;
        Some(res)
    }

    pub fn take_bit(&mut self) -> Option<bool> {
        (self.cursor < self.len).then(|| {
            self.cursor += 1;
            self.get(self.cursor - 1)
        })
    }
}

impl Iterator for BitStream {
    type Item = bool;
    fn next(&mut self) -> Option<Self::Item> {
        self.take_bit()
    }
}
