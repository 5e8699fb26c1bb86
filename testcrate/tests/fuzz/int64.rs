use longint::Int64;
use rand_xoshiro::{
    rand_core::{RngCore, SeedableRng},
    Xoshiro128StarStar,
};

use crate::fuzz::{fuzz_step_i64, int64};

fn floor_div_mod(a: i64, b: i64) -> (i64, i64) {
    let q = a.wrapping_div(b);
    let r = a.wrapping_rem(b);
    if (r != 0) && ((r < 0) != (b < 0)) {
        (q.wrapping_sub(1), r.wrapping_add(b))
    } else {
        (q, r)
    }
}

#[track_caller]
fn identities_inner(rng: &mut Xoshiro128StarStar, a: i64, b: i64) {
    let x = int64(a);
    let y = int64(b);
    assert_eq!(x.to_i64(), a);
    assert_eq!(x.to_bits(), (a as u32, ((a as u64) >> 32) as u32));
    assert_eq!(x.low_bits(), a as i32);
    assert_eq!(x.high_bits(), (a >> 32) as i32);
    assert_eq!(x.to_i32(), a as i32);
    assert_eq!(x.to_u64(), a as u64);

    assert_eq!(x.add(y).to_i64(), a.wrapping_add(b));
    assert_eq!(x.sub(y).to_i64(), a.wrapping_sub(b));
    assert_eq!(x.mul(y).to_i64(), a.wrapping_mul(b));
    assert_eq!(x.neg().to_i64(), a.wrapping_neg());
    assert_eq!(x.abs().to_i64(), a.wrapping_abs());
    assert_eq!(x.signum().to_i64(), a.signum());
    assert_eq!(x.not().to_i64(), !a);
    assert_eq!(x.not().add(Int64::ONE), x.neg());
    assert_eq!(x.and(y).to_i64(), a & b);
    assert_eq!(x.or(y).to_i64(), a | b);
    assert_eq!(x.xor(y).to_i64(), a ^ b);
    assert_eq!(x.cmp(&y), a.cmp(&b));
    assert_eq!(x.const_cmp(y), a.cmp(&b));
    assert_eq!(x.ult(y), (a as u64) < (b as u64));

    // the operator traits agree with the inherent functions
    assert_eq!((x + y).to_i64(), a.wrapping_add(b));
    assert_eq!((x - y).to_i64(), a.wrapping_sub(b));
    assert_eq!((x * y).to_i64(), a.wrapping_mul(b));
    assert_eq!((-x).to_i64(), a.wrapping_neg());
    assert_eq!((!x & y).to_i64(), !a & b);

    if b != 0 {
        let (q, r) = x.quot_rem(y).unwrap();
        assert_eq!(q.to_i64(), a.wrapping_div(b));
        assert_eq!(r.to_i64(), a.wrapping_rem(b));
        assert_eq!(x.quot(y).unwrap(), q);
        assert_eq!(x.rem(y).unwrap(), r);
        let (d, m) = floor_div_mod(a, b);
        assert_eq!(x.div(y).unwrap().to_i64(), d);
        assert_eq!(x.modulo(y).unwrap().to_i64(), m);
        assert_eq!(x.div_mod(y).unwrap(), (int64(d), int64(m)));
    } else {
        assert!(x.quot(y).is_err());
        assert!(x.rem(y).is_err());
        assert!(x.div(y).is_err());
        assert!(x.modulo(y).is_err());
    }

    let s = rng.next_u32() % 128;
    assert_eq!(x.shl(s).to_i64(), a.wrapping_shl(s));
    assert_eq!(x.shr(s).to_i64(), a.wrapping_shr(s));
    assert_eq!(x.shr_u(s).to_i64(), (a as u64).wrapping_shr(s) as i64);
    assert_eq!((x << s).to_i64(), a.wrapping_shl(s));
    assert_eq!((x >> s).to_i64(), a.wrapping_shr(s));

    // doubles
    assert_eq!(x.to_f64(), a as f64);
    assert_eq!(x.to_unsigned_f64(), (a as u64) as f64);
    let f = f64::from_bits(rng.next_u64());
    // unlike `as` casts, the infinities become zero
    let expected = if f.is_infinite() { 0 } else { f as i64 };
    assert_eq!(Int64::from_f64(f).to_i64(), expected);
    assert_eq!(Int64::from_f64(a as f64).to_i64(), (a as f64) as i64);
    assert_eq!(Int64::from_f64((a as f64) / 7.0).to_i64(), ((a as f64) / 7.0) as i64);

    // strings
    let radix = ((rng.next_u32() % 35) + 2) as u8;
    let mut buf = [0u8; Int64::MAX_CHARS];
    let len = x.to_bytes_radix(&mut buf, radix, false).unwrap();
    let s = core::str::from_utf8(&buf[..len]).unwrap();
    assert_eq!(i64::from_str_radix(s, radix as u32), Ok(a));
    assert_eq!(Int64::from_str_radix(s, radix), Ok(x));
    assert_eq!(format!("{}", x), format!("{}", a));
    assert_eq!(format!("{:?}", x), format!("{:?}", a));
    assert_eq!(format!("{:x}", x), format!("{:x}", a));
    assert_eq!(format!("{:#X}", x), format!("{:#X}", a));
    assert_eq!(format!("{:o}", x), format!("{:o}", a));
    assert_eq!(format!("{:#b}", x), format!("{:#b}", a));
    assert_eq!(format!("{:>30}", x), format!("{:>30}", a));
    assert_eq!(format!("{:+}", x), format!("{:+}", a));
    assert_eq!(x.to_string().parse::<Int64>(), Ok(x));
}

/// Compares `Int64` to `i64` as an oracle on random edge heavy values
pub fn int64_identities(iters: u32, seed: u64) {
    let mut rng = Xoshiro128StarStar::seed_from_u64(seed);
    let mut a = 0i64;
    let mut b = 0i64;
    for _ in 0..iters {
        a = fuzz_step_i64(&mut rng, a);
        b = fuzz_step_i64(&mut rng, b);
        identities_inner(&mut rng, a, b);
        // small divisors go through the fast paths
        identities_inner(&mut rng, a, b >> 40);
        identities_inner(&mut rng, a >> 20, b >> 50);
    }
}
