use longint::{Integer, Word64};
use rand_xoshiro::{
    rand_core::{RngCore, SeedableRng},
    Xoshiro128StarStar,
};

use crate::fuzz::{eq, fuzz_step, int64};

/// Compares `Word64` to `u64` as an oracle, and checks normalization of
/// arbitrary `Integer`s
pub fn word64_identities(iters: u32, seed: u64) {
    let mut rng = Xoshiro128StarStar::seed_from_u64(seed);
    let two_pow_64 = Integer::ONE.shl(64);
    let mut v = Integer::ZERO;
    for _ in 0..iters {
        let a = rng.next_u64() >> (rng.next_u32() % 64);
        let b = rng.next_u64() >> (rng.next_u32() % 64);
        let x = Word64::from_u64(a);
        let y = Word64::from_u64(b);
        assert_eq!(x.add(&y).to_u64(), a.wrapping_add(b));
        assert_eq!(x.sub(&y).to_u64(), a.wrapping_sub(b));
        assert_eq!(x.mul(&y).to_u64(), a.wrapping_mul(b));
        assert_eq!(x.and(&y).to_u64(), a & b);
        assert_eq!(x.or(&y).to_u64(), a | b);
        assert_eq!(x.xor(&y).to_u64(), a ^ b);
        assert_eq!(x.not().to_u64(), !a);
        assert_eq!((&x + &y).to_u64(), a.wrapping_add(b));
        assert_eq!((!x.clone()).to_u64(), !a);
        assert_eq!(x.cmp(&y), a.cmp(&b));
        assert_eq!(x.to_f64(), a as f64);
        assert_eq!(x.to_u32(), a as u32);
        if b != 0 {
            assert_eq!(x.quot(&y).unwrap().to_u64(), a / b);
            assert_eq!(x.rem(&y).unwrap().to_u64(), a % b);
        } else {
            assert!(x.quot(&y).is_err());
            assert!(x.rem(&y).is_err());
        }
        let s = (rng.next_u32() % 80) as usize;
        assert_eq!(x.shl(s).to_u64(), a.checked_shl(s as u32).unwrap_or(0));
        assert_eq!(x.shr(s).to_u64(), a.checked_shr(s as u32).unwrap_or(0));

        // the bridge
        let i = int64(a as i64);
        assert_eq!(Word64::from_int64(i), x);
        assert_eq!(x.to_int64(), i);
        assert_eq!(i.to_unsigned_f64(), x.to_f64());
        assert_eq!(
            Word64::from_parts(a as u32, (a >> 32) as u32).into_integer(),
            Integer::from_u64(a)
        );

        // normalization is `((v rem 2^64) + 2^64) rem 2^64`
        v = fuzz_step(&mut rng, &v, 200);
        let expected = v
            .rem(&two_pow_64)
            .unwrap()
            .add(&two_pow_64)
            .rem(&two_pow_64)
            .unwrap();
        let w = Word64::new(v.clone());
        eq(w.as_integer(), &expected);
        assert!(!w.as_integer().is_negative());
        assert!(w.as_integer() < &two_pow_64);
    }
}
