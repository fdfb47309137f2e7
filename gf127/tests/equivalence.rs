//! Cross-algorithm equivalence and algebraic-law checks driven by random
//! elements, plus the byte round-trip property.

use gf127::{add_ext, degree, mult_lr_comb, mult_lr_comb_window, mult_rl_comb, mult_shiftadd, reduce, square, Gf127};
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn arb_element() -> impl Strategy<Value = [u64; 2]> {
    (any::<u64>(), any::<u64>()).prop_map(|(lo, hi)| [lo, hi & ((1u64 << 63) - 1)])
}

proptest! {
    #[test]
    fn all_multiply_variants_agree(a in arb_element(), b in arb_element()) {
        let mut reference = [0u64; 2];
        mult_shiftadd(&a, &b, &mut reference);

        let mut rl = [0u64; 4];
        mult_rl_comb(&a, &b, &mut rl);
        reduce(&mut rl);
        prop_assert_eq!([rl[0], rl[1]], reference);

        let mut lr = [0u64; 4];
        mult_lr_comb(&a, &b, &mut lr);
        reduce(&mut lr);
        prop_assert_eq!([lr[0], lr[1]], reference);

        for w in [1u32, 2, 4, 8, 16, 32] {
            let mut win = [0u64; 4];
            mult_lr_comb_window(&a, &b, &mut win, w);
            reduce(&mut win);
            prop_assert_eq!([win[0], win[1]], reference);
        }
    }

    #[test]
    fn square_equals_self_multiply(a in arb_element()) {
        let mut squared = [0u64; 4];
        square(&a, &mut squared);
        reduce(&mut squared);

        let mut mul_self = [0u64; 2];
        mult_shiftadd(&a, &a, &mut mul_self);

        prop_assert_eq!([squared[0], squared[1]], mul_self);
    }

    #[test]
    fn addition_is_commutative_and_self_inverse(a in arb_element(), b in arb_element()) {
        let x = Gf127::from_words(a);
        let y = Gf127::from_words(b);
        prop_assert_eq!(x + y, y + x);
        prop_assert_eq!((x + y) + y, x);
    }

    #[test]
    fn multiplication_is_commutative_and_distributes(a in arb_element(), b in arb_element(), c in arb_element()) {
        let x = Gf127::from_words(a);
        let y = Gf127::from_words(b);
        let z = Gf127::from_words(c);
        prop_assert_eq!(x * y, y * x);
        prop_assert_eq!(x * (y + z), (x * y) + (x * z));
    }

    #[test]
    fn byte_round_trip(a in arb_element()) {
        let x = Gf127::from_words(a);
        let bytes = x.to_bytes_le();
        let y = Gf127::from_bytes_le(&bytes).unwrap();
        prop_assert_eq!(x, y);
    }
}

#[test]
fn nonzero_elements_invert_both_ways() {
    let mut rng = ChaCha20Rng::seed_from_u64(99);
    for _ in 0..200 {
        let x = Gf127::random(&mut rng);
        if x == Gf127::zero() {
            continue;
        }
        let inv_e = x.inv_euclid();
        let inv_b = x.inv_binary();
        assert_eq!(inv_e, inv_b);
        assert_eq!(x * inv_e, Gf127::one());
    }
}

#[test]
fn inverse_of_product_is_product_of_inverses() {
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    for _ in 0..50 {
        let x = Gf127::random(&mut rng);
        let y = Gf127::random(&mut rng);
        if x == Gf127::zero() || y == Gf127::zero() {
            continue;
        }
        let lhs = (x * y).inv();
        let rhs = x.inv() * y.inv();
        assert_eq!(lhs, rhs);
    }
}

#[test]
fn add_ext_matches_elementwise_xor_over_wide_buffers() {
    let a = [1u64, 2, 3, 4];
    let b = [5u64, 6, 7, 8];
    let mut c = [0u64; 4];
    add_ext(&a, &b, &mut c, 4);
    assert_eq!(c, [1 ^ 5, 2 ^ 6, 3 ^ 7, 4 ^ 8]);
}

#[test]
fn degree_is_consistent_with_random_elements() {
    let mut rng = ChaCha20Rng::seed_from_u64(3);
    for _ in 0..50 {
        let x = Gf127::random(&mut rng);
        let words = x.to_words();
        assert_eq!(degree(&words, 2), x.degree());
        assert!(x.degree() <= 126);
    }
}
