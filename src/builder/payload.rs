use tracing::debug;

use crate::common::bit_utils::BitStream;
use crate::common::codec::encode;
use crate::common::ec::{compute_blocks, interleave, Block};
use crate::common::error::QRResult;
use crate::common::metadata::{ECLevel, Version};

/// Encodes `data` and returns the final codeword sequence for the symbol:
/// interleaved data codewords, interleaved ECC codewords, then the remainder bits.
pub fn generate_codewords(data: &str, ver: Version, ecl: ECLevel) -> QRResult<BitStream> {
    let encoded = encode(data, ver, ecl)?;
    Ok(construct_payload(encoded.data(), ver, ecl))
}

pub(crate) fn construct_payload(data: &[u8], ver: Version, ecl: ECLevel) -> BitStream {
    let blocks = compute_blocks(data, ver, ecl);
    debug!(blocks = blocks.len(), ecc_per_block = ver.ecc_per_block(ecl), "Computed ecc blocks");

    let data_blocks = blocks.iter().map(Block::data).collect::<Vec<_>>();
    let ecc_blocks = blocks.iter().map(Block::ecc).collect::<Vec<_>>();

    let remainder = ver.remainder_bits();
    let mut payload = BitStream::new((ver.total_codewords() << 3) + remainder);
    payload.extend(&interleave(&data_blocks));
    payload.extend(&interleave(&ecc_blocks));
    payload.push_bits(0u8, remainder);
    payload
}
