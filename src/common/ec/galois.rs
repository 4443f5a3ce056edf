// Arithmetic over GF(256) with the QR primitive polynomial x^8 + x^4 + x^3 + x^2 + 1
//------------------------------------------------------------------------------

pub const PRIMITIVE_POLY: u16 = 0x11D;

pub static EXP_TABLE: [u8; 256] = build_tables().0;

pub static LOG_TABLE: [u8; 256] = build_tables().1;

const fn build_tables() -> ([u8; 256], [u8; 256]) {
    let mut exp = [0u8; 256];
    let mut log = [0u8; 256];
    let mut x: u16 = 1;
    let mut i = 0;
    while i < 256 {
        exp[i] = x as u8;
        log[x as usize] = i as u8;
        x <<= 1;
        if x > 0xFF {
            x ^= PRIMITIVE_POLY;
        }
        i += 1;
    }
    // x^255 wraps back to 1 and would overwrite log(1) with 255
    log[1] = 0;
    (exp, log)
}

#[inline]
pub fn gf_add(a: u8, b: u8) -> u8 {
    a ^ b
}

#[inline]
pub fn gf_sub(a: u8, b: u8) -> u8 {
    a ^ b
}

#[inline]
pub fn gf_mul(a: u8, b: u8) -> u8 {
    if a == 0 || b == 0 {
        return 0;
    }
    let log_sum = LOG_TABLE[a as usize] as usize + LOG_TABLE[b as usize] as usize;
    EXP_TABLE[log_sum % 255]
}
