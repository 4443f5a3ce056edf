use super::generator::generator;
use super::poly::Polynomial;

// ECC: Error Correction Codeword generator
//------------------------------------------------------------------------------

// Remainder of the data polynomial, shifted by x^ecc_count, divided by the
// generator polynomial. Its coefficients are the ecc.
pub fn ecc(block: &[u8], ecc_count: usize) -> Vec<u8> {
    let msg = Polynomial::from_codewords(block).shift(ecc_count);
    let (_, rem) = msg.div_rem(generator(ecc_count));
    rem.descending()
}
