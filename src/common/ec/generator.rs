use once_cell::sync::{Lazy, OnceCell};

use super::galois::EXP_TABLE;
use super::poly::Polynomial;

// Memoized generator polynomials, keyed by degree
//------------------------------------------------------------------------------

pub const MAX_EC_DEGREE: usize = 68;

pub struct GeneratorCache {
    slots: [OnceCell<Polynomial>; MAX_EC_DEGREE + 1],
}

impl GeneratorCache {
    pub fn new() -> Self {
        Self { slots: std::array::from_fn(|_| OnceCell::new()) }
    }

    // g(n) = (x + a^0)(x + a^1)...(x + a^(n-1))
    pub fn get(&self, degree: usize) -> &Polynomial {
        assert!(
            (1..=MAX_EC_DEGREE).contains(&degree),
            "Generator degree out of range: {degree}"
        );

        self.slots[degree].get_or_init(|| {
            let factor = Polynomial::new(vec![EXP_TABLE[degree - 1], 1]);
            match degree {
                1 => factor,
                _ => factor.mul(self.get(degree - 1)),
            }
        })
    }

    #[cfg(test)]
    pub fn is_cached(&self, degree: usize) -> bool {
        self.slots.get(degree).is_some_and(|s| s.get().is_some())
    }
}

impl Default for GeneratorCache {
    fn default() -> Self {
        Self::new()
    }
}

static GENERATORS: Lazy<GeneratorCache> = Lazy::new(GeneratorCache::new);

pub fn generator(degree: usize) -> &'static Polynomial {
    GENERATORS.get(degree)
}
