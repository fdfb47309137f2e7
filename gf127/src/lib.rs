//! Arithmetic in GF(2^127) with reduction polynomial f(z) = z^127 + z^63 + 1.
//!
//! The low-level API operates on `[u64; N]` word arrays matching the
//! layout used throughout the module set (bit `k` lives in bit `k % 64`
//! of word `k / 64`). [`Gf127`] wraps that representation with the
//! operator overloads and (de)serialization idiomatic Rust code expects.

pub mod elem;
pub mod inverse;
pub mod mul;
pub mod random;
pub mod reduce;
pub mod repr;
pub mod square;
pub mod timing;

pub use elem::Gf127;
pub use gf127_core::{Gf127Error, Result};

pub use inverse::{extended_euclid, inv_binary, inv_euclid};
pub use mul::{mult_lr_comb, mult_lr_comb_window, mult_lr_comb_window8, mult_rl_comb, mult_shiftadd};
pub use reduce::reduce;
pub use repr::{add, add_ext, degree, equal, index_to_polynomial, left_shift, polynomial_to_index, right_shift};
pub use square::square;
pub use timing::Timer;
