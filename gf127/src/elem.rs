//! Ergonomic wrapper around the flat-array API: `Gf127` behaves like a
//! normal numeric type (operator overloads, `Display`, serde) while
//! delegating every operation to the word-array functions in the other
//! modules.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Sub, SubAssign};

use gf127_core::{Gf127Error, Result};
use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

use crate::inverse::{inv_binary, inv_euclid};
use crate::mul::mult_shiftadd;
use crate::reduce::reduce;
use crate::repr::degree;
use crate::square::square;

/// An element of GF(2^127) with reduction polynomial z^127 + z^63 + 1.
///
/// Internally a `[lo, hi]` two-word array, exposed here as named fields
/// purely for readability; `from_words`/`to_words` are the supported way
/// to cross the array boundary.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Zeroize)]
pub struct Gf127 {
    lo: u64,
    hi: u64,
}

impl Gf127 {
    pub const ZERO: Gf127 = Gf127 { lo: 0, hi: 0 };
    pub const ONE: Gf127 = Gf127 { lo: 1, hi: 0 };

    pub fn zero() -> Self {
        Self::ZERO
    }

    pub fn one() -> Self {
        Self::ONE
    }

    pub fn from_words(words: [u64; 2]) -> Self {
        Gf127 { lo: words[0], hi: words[1] }
    }

    pub fn to_words(self) -> [u64; 2] {
        [self.lo, self.hi]
    }

    /// Decode 16 little-endian bytes into a field element. The only
    /// fallible entry point in the crate.
    pub fn from_bytes_le(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != 16 {
            return Err(Gf127Error::InvalidParameter(format!(
                "expected 16 bytes, got {}",
                bytes.len()
            )));
        }
        let lo = u64::from_le_bytes(bytes[0..8].try_into().unwrap());
        let hi = u64::from_le_bytes(bytes[8..16].try_into().unwrap());
        Ok(Gf127 { lo, hi })
    }

    pub fn to_bytes_le(self) -> [u8; 16] {
        let mut out = [0u8; 16];
        out[0..8].copy_from_slice(&self.lo.to_le_bytes());
        out[8..16].copy_from_slice(&self.hi.to_le_bytes());
        out
    }

    pub fn degree(self) -> usize {
        degree(&[self.lo, self.hi], 2)
    }

    pub fn square(self) -> Self {
        let mut wide = [0u64; 4];
        square(&[self.lo, self.hi], &mut wide);
        reduce(&mut wide);
        Gf127 { lo: wide[0], hi: wide[1] }
    }

    /// Invert via the extended Euclidean algorithm.
    ///
    /// # Panics
    /// Panics if `self` is zero (zero has no inverse).
    pub fn inv_euclid(self) -> Self {
        assert!(self != Self::ZERO, "attempted to invert zero in GF(2^127)");
        let mut inv = [0u64; 2];
        inv_euclid(&[self.lo, self.hi], &mut inv);
        Gf127 { lo: inv[0], hi: inv[1] }
    }

    /// Invert via the binary (extended binary GCD) algorithm.
    ///
    /// # Panics
    /// Panics if `self` is zero (zero has no inverse).
    pub fn inv_binary(self) -> Self {
        assert!(self != Self::ZERO, "attempted to invert zero in GF(2^127)");
        let mut inv = [0u64; 2];
        inv_binary(&[self.lo, self.hi], &mut inv);
        Gf127 { lo: inv[0], hi: inv[1] }
    }

    /// Alias for [`Gf127::inv_euclid`]; the crate's default inversion.
    pub fn inv(self) -> Self {
        self.inv_euclid()
    }
}

impl Default for Gf127 {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Add for Gf127 {
    type Output = Gf127;
    fn add(self, rhs: Gf127) -> Gf127 {
        Gf127 { lo: self.lo ^ rhs.lo, hi: self.hi ^ rhs.hi }
    }
}

impl AddAssign for Gf127 {
    fn add_assign(&mut self, rhs: Gf127) {
        *self = *self + rhs;
    }
}

// Addition and subtraction coincide in characteristic 2.
impl Sub for Gf127 {
    type Output = Gf127;
    fn sub(self, rhs: Gf127) -> Gf127 {
        self + rhs
    }
}

impl SubAssign for Gf127 {
    fn sub_assign(&mut self, rhs: Gf127) {
        *self = *self - rhs;
    }
}

impl Mul for Gf127 {
    type Output = Gf127;
    fn mul(self, rhs: Gf127) -> Gf127 {
        let mut c = [0u64; 2];
        mult_shiftadd(&[self.lo, self.hi], &[rhs.lo, rhs.hi], &mut c);
        Gf127 { lo: c[0], hi: c[1] }
    }
}

impl MulAssign for Gf127 {
    fn mul_assign(&mut self, rhs: Gf127) {
        *self = *self * rhs;
    }
}

impl fmt::Debug for Gf127 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Gf127 {{ lo: {:#018x}, hi: {:#018x} }}", self.lo, self.hi)
    }
}

/// Displays as a sum of powers of z, e.g. `z^126 + z^5 + 1`, matching the
/// polynomial notation the reduction scenarios are phrased in.
impl fmt::Display for Gf127 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let indices = crate::repr::polynomial_to_index(&[self.lo, self.hi], 2);
        if indices.is_empty() {
            return write!(f, "0");
        }
        let terms: Vec<String> = indices
            .iter()
            .rev()
            .map(|&i| match i {
                0 => "1".to_string(),
                1 => "z".to_string(),
                _ => format!("z^{i}"),
            })
            .collect();
        write!(f, "{}", terms.join(" + "))
    }
}
