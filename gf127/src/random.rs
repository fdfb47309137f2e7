//! Uniform random element generation for tests and benchmarks.

use rand::Rng;

use crate::elem::Gf127;

/// Fill a two-word element with random bits, forcing bit 127 (the high
/// bit of word 1) clear so every generated element has degree <= 126.
pub fn random_element<R: Rng + ?Sized>(rng: &mut R, a: &mut [u64; 2]) {
    a[0] = rng.gen();
    a[1] = rng.gen::<u64>() & ((1u64 << 63) - 1);
}

impl Gf127 {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut words = [0u64; 2];
        random_element(rng, &mut words);
        Gf127::from_words(words)
    }
}
