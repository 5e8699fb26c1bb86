use longint::{Int64, Integer};
use rand_xoshiro::{rand_core::RngCore, Xoshiro128StarStar};

mod int64;
mod integer;
mod word64;

#[track_caller]
fn check_invariants(x: &Integer) {
    let sign = x.sign_word();
    if (sign != 0) && (sign != u32::MAX) {
        panic!("invalid sign word: {}", x.debug_limbs());
    }
    if x.limbs().last() == Some(&sign) {
        panic!("not in canonical form: {}", x.debug_limbs());
    }
}

/// Checks for equality and that invariants are being kept
#[track_caller]
fn eq(lhs: &Integer, rhs: &Integer) {
    check_invariants(lhs);
    check_invariants(rhs);
    if lhs != rhs {
        panic!(
            "lhs and rhs are not equal when they should be:\nlhs:{} rhs:{}",
            lhs.debug_limbs(),
            rhs.debug_limbs()
        );
    }
}

/// Checks for nonequality and that invariants are being kept
#[track_caller]
fn ne(lhs: &Integer, rhs: &Integer) {
    check_invariants(lhs);
    check_invariants(rhs);
    if lhs == rhs {
        panic!(
            "lhs and rhs are equal when they should not be:\nlhs:{} rhs:{}",
            lhs.debug_limbs(),
            rhs.debug_limbs()
        );
    }
}

/// Applies a random run of ones to `x` with a random bitwise operation. Runs
/// hit the edge cases of carries and sign words far more often than uniform
/// values do. Bits at or beyond `bits` are never set directly, but the sign
/// can flip.
pub fn fuzz_step(rng: &mut Xoshiro128StarStar, x: &Integer, bits: usize) -> Integer {
    let r0 = (rng.next_u32() as usize) % bits;
    let r1 = (rng.next_u32() as usize) % bits;
    let (lo, hi) = if r0 <= r1 { (r0, r1 + 1) } else { (r1, r0 + 1) };
    // ones in the range `lo..hi`
    let run = Integer::ONE.shl(hi - lo).dec().shl(lo);
    let res = match rng.next_u32() % 4 {
        0 => x.or(&run),
        1 => x.and(&run.not()),
        _ => x.xor(&run),
    };
    // reinterpret the `bits` wide pattern as signed
    res.truncate_signed(bits)
}

/// The `i64` version of [fuzz_step]
pub fn fuzz_step_i64(rng: &mut Xoshiro128StarStar, x: i64) -> i64 {
    let r0 = rng.next_u32() % 64;
    let r1 = rng.next_u32() % 64;
    let run = (u64::MAX << r0).rotate_left(r1) as i64;
    match rng.next_u32() % 4 {
        0 => x | run,
        1 => x & run,
        _ => x ^ run,
    }
}

/// Converts values of at most 128 bits to the primitive, used as an oracle
pub fn to_i128(x: &Integer) -> Option<i128> {
    if x.significant_bits() >= 128 {
        return None
    }
    let mut res = 0u128;
    for i in (0..4).rev() {
        res = (res << 32) | (x.limb(i) as u128);
    }
    Some(res as i128)
}

pub fn from_i128(x: i128) -> Integer {
    let x = x as u128;
    Integer::from_bits(&[
        x as u32,
        (x >> 32) as u32,
        (x >> 64) as u32,
        (x >> 96) as u32,
    ])
}

pub fn int64(x: i64) -> Int64 {
    Int64::from_i64(x)
}

pub use int64::int64_identities;
pub use integer::{integer_identities, integer_oracle};
pub use word64::word64_identities;
