pub use encode::*;

// Encoder
//------------------------------------------------------------------------------

pub mod encode {
    use tracing::debug;

    use super::writer::{pad_remaining_capacity, push_segment, push_terminator};
    use crate::common::bit_utils::BitStream;
    use crate::common::codec::{Mode, Segment, MODES};
    use crate::common::error::{QRError, QRResult};
    use crate::common::metadata::{ECLevel, Version};

    // Most compact mode whose charset covers the whole message
    pub fn choose_mode(data: &str) -> QRResult<Mode> {
        if let Some((index, ch)) = data.chars().enumerate().find(|(_, c)| !Mode::Byte.contains(*c)) {
            return Err(QRError::UnsupportedChar { ch, index });
        }
        if data.is_empty() {
            return Ok(Mode::Byte);
        }
        let mode = MODES
            .iter()
            .copied()
            .find(|m| data.chars().all(|c| m.contains(c)))
            .unwrap_or(Mode::Byte);
        Ok(mode)
    }

    pub fn encode_values(data: &str, mode: Mode) -> Vec<u8> {
        data.chars().map(|c| mode.value(c)).collect()
    }

    pub fn pack(values: &[u8], mode: Mode, ver: Version, ecl: ECLevel) -> QRResult<BitStream> {
        let seg = Segment::new(mode, ver.char_cnt_bits(mode), values);
        let bits = seg.bit_len();
        let capacity = ver.data_bit_capacity(ecl);
        if bits > capacity {
            return Err(QRError::DataTooLong { bits, capacity });
        }

        let mut bs = BitStream::new(capacity);
        push_segment(&seg, &mut bs);
        push_terminator(&mut bs);
        pad_remaining_capacity(&mut bs);
        Ok(bs)
    }

    pub fn encode(data: &str, ver: Version, ecl: ECLevel) -> QRResult<BitStream> {
        let mode = choose_mode(data)?;
        debug!(?mode, len = data.chars().count(), "Encoding data");
        let values = encode_values(data, mode);
        pack(&values, mode, ver, ecl)
    }

    // Smallest version whose data capacity fits the message
    pub fn find_version(data: &str, ecl: ECLevel) -> QRResult<Version> {
        let mode = choose_mode(data)?;
        let len = data.chars().count();
        let bit_len = |ver: Version| Segment::new(mode, ver.char_cnt_bits(mode), &[]).bit_len() + mode.encoded_len(len);
        match Version::all().find(|&v| bit_len(v) <= v.data_bit_capacity(ecl)) {
            Some(ver) => Ok(ver),
            None => Err(QRError::DataTooLong {
                bits: bit_len(Version::MAX),
                capacity: Version::MAX.data_bit_capacity(ecl),
            }),
        }
    }

}

// Writer for encoded data
//------------------------------------------------------------------------------

pub(super) mod writer {
    use crate::common::bit_utils::BitStream;
    use crate::common::codec::{Mode, Segment, PADDING_CODEWORDS};
    use crate::common::version_db::MODE_INDICATOR_BITS;

    pub fn push_segment(seg: &Segment, out: &mut BitStream) {
        push_header(seg, out);
        push_data(seg.mode, seg.values, out);
    }

    fn push_header(seg: &Segment, out: &mut BitStream) {
        out.push_bits(seg.mode as u8, MODE_INDICATOR_BITS);
        let char_cnt = seg.values.len();
        debug_assert!(
            char_cnt < (1 << seg.len_bits),
            "Char count exceeds bit length: Char count {char_cnt}, Char count bits {}",
            seg.len_bits
        );
        out.push_bits(char_cnt as u16, seg.len_bits);
    }

    fn push_data(mode: Mode, values: &[u8], out: &mut BitStream) {
        for chunk in values.chunks(mode.chunk_size()) {
            let len = mode.encoded_len(chunk.len());
            out.push_bits(mode.encode_chunk(chunk), len);
        }
    }

    // Up to four zero bits, truncated when the stream is nearly full
    pub fn push_terminator(out: &mut BitStream) {
        out.push_bits(0u8, out.remaining().min(4));
    }

    pub fn pad_remaining_capacity(out: &mut BitStream) {
        push_padding_bits(out);
        push_padding_codewords(out);
    }

    fn push_padding_bits(out: &mut BitStream) {
        out.push_bits(0u8, (8 - out.len() % 8) % 8);
    }

    /// Fills the rest of a byte aligned stream with alternating pad codewords.
    fn push_padding_codewords(out: &mut BitStream) {
        let pads = PADDING_CODEWORDS.iter().cycle().take(out.remaining() / 8).copied().collect::<Vec<_>>();
        out.extend(&pads);
    }

}
