use super::galois::{gf_add, gf_mul, gf_sub};

// Polynomial over GF(256), coefficients stored lowest degree first
//------------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polynomial {
    coeffs: Vec<u8>,
}

impl Polynomial {
    pub fn new(coeffs: Vec<u8>) -> Self {
        debug_assert!(!coeffs.is_empty(), "Polynomial must have at least one coefficient");
        Self { coeffs }
    }

    pub fn from_descending(coeffs: &[u8]) -> Self {
        Self::new(coeffs.iter().rev().copied().collect())
    }

    // First codeword becomes the highest degree term
    pub fn from_codewords(codewords: &[u8]) -> Self {
        Self::from_descending(codewords)
    }

    #[cfg(test)]
    pub fn coeffs(&self) -> &[u8] {
        &self.coeffs
    }

    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    #[cfg(test)]
    pub fn degree(&self) -> usize {
        self.coeffs.len() - 1
    }

    pub fn descending(&self) -> Vec<u8> {
        self.coeffs.iter().rev().copied().collect()
    }

    // Multiplies by x^n
    pub fn shift(&self, n: usize) -> Self {
        let mut coeffs = vec![0; n];
        coeffs.extend_from_slice(&self.coeffs);
        Self::new(coeffs)
    }

    #[cfg(test)]
    pub fn scale(&self, scalar: u8) -> Self {
        Self::new(self.coeffs.iter().map(|&c| gf_mul(c, scalar)).collect())
    }

    #[cfg(test)]
    pub fn add(&self, other: &Self) -> Self {
        let len = self.len().max(other.len());
        let coeff = |p: &Self, i: usize| p.coeffs.get(i).copied().unwrap_or(0);
        Self::new((0..len).map(|i| gf_add(coeff(self, i), coeff(other, i))).collect())
    }

    pub fn mul(&self, other: &Self) -> Self {
        let mut coeffs = vec![0; self.len() + other.len() - 1];
        for (i, &a) in self.coeffs.iter().enumerate() {
            for (j, &b) in other.coeffs.iter().enumerate() {
                coeffs[i + j] = gf_add(coeffs[i + j], gf_mul(a, b));
            }
        }
        Self::new(coeffs)
    }

    // Synthetic division by a monic divisor. Returns (quotient, remainder),
    // remainder always has divisor.len() - 1 coefficients.
    pub fn div_rem(&self, divisor: &Self) -> (Self, Self) {
        let num = self.descending();
        let den = divisor.descending();
        debug_assert_eq!(den[0], 1, "Divisor must be monic: {den:?}");

        let rem_len = den.len() - 1;
        if num.len() < den.len() {
            let mut rem = self.coeffs.clone();
            rem.resize(rem_len.max(1), 0);
            return (Self::new(vec![0]), Self::new(rem));
        }

        let mut res = num;
        for i in 0..=res.len() - den.len() {
            let lead = res[i];
            if lead == 0 {
                continue;
            }
            for (u, &v) in res[i + 1..].iter_mut().zip(den[1..].iter()) {
                *u = gf_sub(*u, gf_mul(lead, v));
            }
        }

        let (quot, rem) = res.split_at(res.len() - rem_len);
        let rem = if rem.is_empty() { Self::new(vec![0]) } else { Self::from_descending(rem) };
        (Self::from_descending(quot), rem)
    }
}
