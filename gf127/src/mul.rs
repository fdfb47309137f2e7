//! The four multiplication variants from the reduction-polynomial spec:
//! shift-and-add (reduced), right-to-left comb, left-to-right comb, and
//! left-to-right comb with a digit window.

use crate::repr::{add, left_shift};
use crate::reduce::R;

/// Right-to-left shift-and-add multiplication, already reduced mod f.
///
/// Preconditions: `a`, `b` have degree <= 126.
pub fn mult_shiftadd(a: &[u64; 2], b: &[u64; 2], c: &mut [u64; 2]) {
    let mut b1 = *b;

    *c = if a[0] & 1 == 1 { *b } else { [0, 0] };

    let mut digit_val = 2u64;
    let mut j = 0usize;
    for i in 1..127 {
        left_shift(&mut b1, 2);
        if b1[1] & (1 << 63) != 0 {
            b1[1] &= (1u64 << 63) - 1;
            let r = R;
            let b1_copy = b1;
            add(&r, &b1_copy, &mut b1);
        }

        if a[j] & digit_val == digit_val {
            let c_copy = *c;
            add(&b1, &c_copy, c);
        }

        if i == 63 {
            j += 1;
            digit_val = 1;
        } else {
            digit_val <<= 1;
        }
    }
}

/// XOR a 3-word polynomial into `c` starting at word `offset`.
fn xor_in3(c: &mut [u64; 4], offset: usize, v: &[u64; 3]) {
    for i in 0..3 {
        c[offset + i] ^= v[i];
    }
}

/// XOR a 2-word polynomial into `c` starting at word `offset`.
fn xor_in2(c: &mut [u64; 4], offset: usize, v: &[u64; 2]) {
    for i in 0..2 {
        c[offset + i] ^= v[i];
    }
}

/// Right-to-left comb multiplication. Unreduced, four words.
pub fn mult_rl_comb(a: &[u64; 2], b: &[u64; 2], c: &mut [u64; 4]) {
    let mut b1 = [b[0], b[1], 0u64];
    *c = [0u64; 4];

    let mut digit_val = 1u64;
    for k in 0..64 {
        for j in 0..2 {
            if a[j] & digit_val == digit_val {
                xor_in3(c, j, &b1);
            }
        }
        if k < 63 {
            left_shift(&mut b1, 3);
        }
        digit_val <<= 1;
    }
}

/// Left-to-right comb multiplication. Unreduced, four words.
pub fn mult_lr_comb(a: &[u64; 2], b: &[u64; 2], c: &mut [u64; 4]) {
    *c = [0u64; 4];

    let mut digit_val = 1u64 << 63;
    for k in (0..64).rev() {
        for j in 0..2 {
            if a[j] & digit_val == digit_val {
                xor_in2(c, j, b);
            }
        }
        if k != 0 {
            left_shift(c, 4);
        }
        digit_val >>= 1;
    }
}

/// Left-to-right comb multiplication with a `w`-bit digit window.
/// `w` must divide 64.
pub fn mult_lr_comb_window(a: &[u64; 2], b: &[u64; 2], c: &mut [u64; 4], w: u32) {
    debug_assert_eq!(64 % w, 0, "window size must divide 64");
    let num_polynomials = 1usize << w;

    let mut window_products = vec![[0u64; 4]; num_polynomials];
    for (i, slot) in window_products.iter_mut().enumerate() {
        let bu = [i as u64, 0];
        mult_rl_comb(b, &bu, slot);
    }

    *c = [0u64; 4];

    let mut digit_val = 1u64 << 63;
    for k in (0..(64 / w)).rev() {
        for j in 0..2 {
            let mut u = 0usize;
            let mut digit_val1 = digit_val;
            for _ in 0..w {
                u <<= 1;
                if a[j] & digit_val1 == digit_val1 {
                    u |= 1;
                }
                digit_val1 >>= 1;
            }
            let slot = window_products[u];
            xor_in3(c, j, &[slot[0], slot[1], slot[2]]);
        }
        digit_val = digit_val.checked_shr(w).unwrap_or(0);

        if k != 0 {
            for _ in 0..w {
                left_shift(c, 4);
            }
        }
    }
}

/// Left-to-right comb multiplication specialised for an 8-bit window.
/// Functionally identical to `mult_lr_comb_window(a, b, c, 8)`, but the
/// shift step operates on whole bytes with carry propagation across the
/// four words instead of eight single-bit shifts.
pub fn mult_lr_comb_window8(a: &[u64; 2], b: &[u64; 2], c: &mut [u64; 4]) {
    let mut window_products = vec![[0u64; 4]; 256];
    for (i, slot) in window_products.iter_mut().enumerate() {
        let u = [i as u64, 0];
        mult_rl_comb(&u, b, slot);
    }

    *c = [0u64; 4];

    let mut digit_val = 1u64 << 63;
    for k in (0..8).rev() {
        for j in 0..2 {
            let mut u = 0usize;
            let mut digit_val1 = digit_val;
            for _ in 0..8 {
                u <<= 1;
                if a[j] & digit_val1 == digit_val1 {
                    u |= 1;
                }
                digit_val1 >>= 1;
            }
            let slot = window_products[u];
            xor_in3(c, j, &[slot[0], slot[1], slot[2]]);
        }
        digit_val = digit_val.checked_shr(8).unwrap_or(0);

        if k != 0 {
            let mut old_carry = 0u64;
            for word in c.iter_mut() {
                let carry = *word >> 56;
                *word = (*word << 8) | old_carry;
                old_carry = carry;
            }
        }
    }
}
