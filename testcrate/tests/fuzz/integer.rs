use core::cmp::Ordering;

use longint::Integer;
use rand_xoshiro::{
    rand_core::{RngCore, SeedableRng},
    Xoshiro128StarStar,
};

use crate::fuzz::{eq, from_i128, fuzz_step, ne, to_i128};

fn signum_ordering(x: &Integer) -> Ordering {
    if x.is_negative() {
        Ordering::Less
    } else if x.is_zero() {
        Ordering::Equal
    } else {
        Ordering::Greater
    }
}

/// Checks the laws of both division policies for a nonzero `y`
#[track_caller]
fn division_laws(x: &Integer, y: &Integer) {
    let (q, r) = x.quot_rem(y).unwrap();
    eq(&q.mul(y).add(&r), x);
    assert!(r.is_zero() || (r.is_negative() == x.is_negative()));
    assert!(r.abs() < y.abs());
    eq(&q, &x.quot(y).unwrap());
    eq(&r, &x.rem(y).unwrap());

    let (d, m) = x.div_mod(y).unwrap();
    eq(&d.mul(y).add(&m), x);
    assert!(m.is_zero() || (m.is_negative() == y.is_negative()));
    assert!(m.abs() < y.abs());
    eq(&d, &x.div(y).unwrap());
    eq(&m, &x.modulo(y).unwrap());
    // the formula for `mod` in terms of `rem`
    eq(&m, &y.add(&x.rem(y).unwrap()).rem(y).unwrap());
    if r.is_zero() || (x.is_negative() == y.is_negative()) {
        eq(&d, &q);
    } else {
        eq(&d, &q.dec());
    }
}

#[track_caller]
fn identities_inner(rng: &mut Xoshiro128StarStar, x: &Integer, y: &Integer, z: &Integer) {
    // identity and inversion
    ne(x, &x.not());
    eq(x, &x.not().not());
    eq(&x.not().inc(), &x.neg());
    eq(&x.neg().neg(), x);
    eq(&x.add(&x.neg()), &Integer::ZERO);

    // De Morgan's
    eq(&x.and(y).not(), &x.not().or(&y.not()));
    eq(&x.or(y).not(), &x.not().and(&y.not()));
    eq(&x.xor(y), &x.or(y).and(&x.and(y).not()));

    // commutativity and associativity
    eq(&x.add(y), &y.add(x));
    eq(&x.add(y).add(z), &x.add(&y.add(z)));
    eq(&x.mul(y), &y.mul(x));
    eq(&x.mul(y).mul(z), &x.mul(&y.mul(z)));
    eq(&x.mul(&y.add(z)), &x.mul(y).add(&x.mul(z)));
    eq(&x.sub(y), &x.add(&y.neg()));
    eq(&x.sub(y).add(y), x);

    // the direct comparison matches the subtraction based ordering
    assert_eq!(x.cmp(y), signum_ordering(&x.sub(y)));
    assert_eq!(y.cmp(x), signum_ordering(&y.sub(x)));
    assert_eq!(x.cmp(x), Ordering::Equal);
    assert_eq!(signum_ordering(x), x.cmp(&Integer::ZERO));
    let signum = match signum_ordering(x) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    };
    eq(&x.signum(), &Integer::from_i32(signum));

    // division
    if !y.is_zero() {
        division_laws(x, y);
        division_laws(&x.mul(y), y);
        eq(&x.mul(y).quot(y).unwrap(), x);
        eq(&x.mul(y).rem(y).unwrap(), &Integer::ZERO);
    } else {
        assert!(x.quot(y).is_err());
        assert!(x.modulo(y).is_err());
    }
    if !z.is_zero() {
        division_laws(&x.mul(y).add(z), z);
    }

    // shifting is multiplication or floored division by powers of two
    let s = (rng.next_u32() % 200) as usize;
    let pow = Integer::from_i32(2).pow(s as u32);
    eq(&x.shl(s), &x.mul(&pow));
    eq(&x.shr(s), &x.div(&pow).unwrap());
    eq(&x.shl(s).shr(s), x);
    assert_eq!(x.test_bit(s), x.shr(s).is_odd());

    // truncation to fixed widths
    eq(&x.truncate_signed(64), &Integer::from_int64(x.to_int64()));
    eq(&x.truncate_signed(32), &Integer::from_i32(x.to_i32()));
    let w = x.significant_bits() + 1;
    eq(&x.truncate_signed(w), x);

    // string round trips
    let radix = ((rng.next_u32() % 35) + 2) as u8;
    let s = x.to_string_radix(radix).unwrap();
    eq(&Integer::from_str_radix(&s, radix).unwrap(), x);
    assert_eq!(x.to_string(), x.to_string_radix(10).unwrap());
    eq(&x.to_string().parse::<Integer>().unwrap(), x);
    // the standard library parser rounds correctly
    assert_eq!(x.to_f64(), x.to_string().parse::<f64>().unwrap());
    let upper = x.to_string_radix_case(radix, true).unwrap();
    eq(&Integer::from_str_radix(&upper, radix).unwrap(), x);

    // limb round trips
    eq(&Integer::from_bits(&x.to_bits(x.limbs().len() + 1)), x);
}

/// Randomized identities on `Integer`s of up to `bits` bits
pub fn integer_identities(iters: u32, seed: u64, bits: usize) {
    let mut rng = Xoshiro128StarStar::seed_from_u64(seed);
    let mut x = Integer::ZERO;
    let mut y = Integer::ZERO;
    let mut z = Integer::ZERO;
    for _ in 0..iters {
        x = fuzz_step(&mut rng, &x, bits);
        y = fuzz_step(&mut rng, &y, bits);
        z = fuzz_step(&mut rng, &z, bits);
        identities_inner(&mut rng, &x, &y, &z);
    }
}

/// Compares `Integer` to `i128` for operands that fit in an `i64`
pub fn integer_oracle(iters: u32, seed: u64) {
    let mut rng = Xoshiro128StarStar::seed_from_u64(seed);
    let mut x = Integer::ZERO;
    let mut y = Integer::ZERO;
    for _ in 0..iters {
        x = fuzz_step(&mut rng, &x, 64);
        y = fuzz_step(&mut rng, &y, 64);
        let a = to_i128(&x).unwrap();
        let b = to_i128(&y).unwrap();
        assert_eq!(x.to_i64() as i128, a);
        eq(&Integer::from_i64(a as i64), &x);
        eq(&x.add(&y), &from_i128(a + b));
        eq(&x.sub(&y), &from_i128(a - b));
        eq(&x.mul(&y), &from_i128(a * b));
        eq(&x.and(&y), &from_i128(a & b));
        eq(&x.or(&y), &from_i128(a | b));
        eq(&x.xor(&y), &from_i128(a ^ b));
        eq(&x.not(), &from_i128(!a));
        eq(&x.neg(), &from_i128(-a));
        assert_eq!(x.cmp(&y), a.cmp(&b));
        assert_eq!(x.to_f64(), a as f64);
        assert_eq!(x.to_i32(), a as i32);
        assert_eq!(x.to_u32(), a as u32);
        assert_eq!(x.to_string(), a.to_string());
        if b != 0 {
            eq(&x.quot(&y).unwrap(), &from_i128(a / b));
            eq(&x.rem(&y).unwrap(), &from_i128(a % b));
            let floor = if ((a % b) != 0) && (((a % b) < 0) != (b < 0)) {
                (a / b) - 1
            } else {
                a / b
            };
            eq(&x.div(&y).unwrap(), &from_i128(floor));
        }
        // doubles round toward zero
        let f = a as f64;
        eq(&Integer::from_f64(f), &from_i128(f as i128));
        eq(&Integer::from_f64(f / 3.0), &from_i128((f / 3.0) as i128));
    }
}
