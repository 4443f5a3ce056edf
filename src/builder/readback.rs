//! Reads a built symbol back into its message. Used as the round trip
//! oracle in tests.

use crate::builder::{Module, QR};
use crate::common::bit_utils::BitStream;
use crate::common::codec::{Mode, MODES};
use crate::common::ec::ecc;
use crate::common::iter::EncRegionIter;
use crate::common::metadata::{format_info, ECLevel, Version};
use crate::common::version_db::{FORMAT_INFO_COORDS_MAIN, MODE_INDICATOR_BITS};

#[derive(Debug)]
pub(crate) struct ReadBack {
    pub mode: Mode,
    pub text: String,
    pub ecc_valid: bool,
}

pub(crate) fn read_back(qr: &QR) -> ReadBack {
    let ver = qr.version();
    let ecl = qr.ec_level();
    let mask = qr.mask().expect("Symbol should be masked");

    let format = FORMAT_INFO_COORDS_MAIN.iter().fold(0, |acc, &(r, c)| (acc << 1) | qr.is_dark(r, c) as u32);
    assert_eq!(format, format_info(ecl, mask), "Format info mismatch");

    let mask_fn = mask.mask_function();
    let bits = EncRegionIter::new(ver)
        .filter(|&(r, c)| matches!(qr.get(r, c), Module::Data(_)))
        .map(|(r, c)| qr.is_dark(r, c) ^ mask_fn(r, c))
        .collect::<Vec<_>>();
    let codewords = bits
        .chunks_exact(8)
        .map(|byte| byte.iter().fold(0u8, |acc, &b| (acc << 1) | b as u8))
        .collect::<Vec<_>>();
    assert_eq!(codewords.len(), ver.total_codewords());

    let (data, ecc_valid) = deinterleave(&codewords, ver, ecl);
    let (mode, text) = parse(&data, ver);
    ReadBack { mode, text, ecc_valid }
}

// Splits codewords into blocks and checks each block's ecc
fn deinterleave(codewords: &[u8], ver: Version, ecl: ECLevel) -> (Vec<u8>, bool) {
    let (short_sz, short_cnt, long_sz, long_cnt) = ver.data_codewords_per_block(ecl);
    let ecc_len = ver.ecc_per_block(ecl);
    let sizes = [vec![short_sz; short_cnt], vec![long_sz; long_cnt]].concat();
    let mut blocks = vec![Vec::new(); sizes.len()];
    let mut cws = codewords.iter().copied();

    let max_sz = sizes.iter().copied().max().unwrap_or(0);
    for i in 0..max_sz {
        for (b, &sz) in blocks.iter_mut().zip(sizes.iter()) {
            if i < sz {
                b.extend(cws.next());
            }
        }
    }
    let mut ecc_blocks = vec![Vec::new(); sizes.len()];
    for _ in 0..ecc_len {
        for b in ecc_blocks.iter_mut() {
            b.extend(cws.next());
        }
    }

    let ecc_valid = blocks.iter().zip(ecc_blocks.iter()).all(|(d, e)| ecc(d, ecc_len) == *e);
    (blocks.concat(), ecc_valid)
}

fn parse(data: &[u8], ver: Version) -> (Mode, String) {
    let mut bs = BitStream::from_bytes(data);
    let indicator = bs.take_bits(MODE_INDICATOR_BITS).expect("Missing mode indicator");
    let mode = MODES
        .iter()
        .copied()
        .find(|&m| m as u16 == indicator)
        .unwrap_or_else(|| panic!("Unknown mode indicator {indicator:04b}"));
    let cnt = bs.take_bits(ver.char_cnt_bits(mode)).expect("Missing char count") as usize;

    let mut text = String::with_capacity(cnt);
    let mut remaining = cnt;
    while remaining > 0 {
        let n = remaining.min(mode.chunk_size());
        let chunk = bs.take_bits(mode.encoded_len(n)).expect("Truncated data");
        let mut chars = Vec::with_capacity(n);
        let mut val = chunk;
        for _ in 0..n {
            let (radix, ch) = match mode {
                Mode::Numeric => (10, char::from(b'0' + (val % 10) as u8)),
                Mode::Alphanumeric => (45, ALPHANUMERIC_CHARS[(val % 45) as usize]),
                Mode::Byte => (256, char::from(val as u8)),
            };
            chars.push(ch);
            val /= radix;
        }
        text.extend(chars.into_iter().rev());
        remaining -= n;
    }
    (mode, text)
}

static ALPHANUMERIC_CHARS: [char; 45] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I',
    'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', ' ', '$',
    '%', '*', '+', '-', '.', '/', ':',
];
