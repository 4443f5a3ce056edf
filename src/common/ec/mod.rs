mod block;
mod encoder;
mod galois;
mod generator;
mod poly;

pub(crate) use block::*;
#[cfg(test)]
pub(crate) use encoder::*;

pub const MAX_BLOCK_SIZE: usize = 256;
