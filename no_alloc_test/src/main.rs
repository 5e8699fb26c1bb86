#![no_std]
#![no_main]

extern crate panic_halt;

use longint::prelude::*;
use rand_xoshiro::{rand_core::SeedableRng, Xoshiro128StarStar};
use riscv_minimal_rt::entry;

const PARSED: Int64 = match Int64::from_str_radix("-12345", 10) {
    Ok(x) => x,
    Err(_) => panic!(),
};

#[entry]
fn main() -> ! {
    let x0 = PARSED;
    let x1 = Int64::from_i32(12345);
    assert!(x0.add(x1).is_zero());
    assert_eq!(Int64::MAX_VALUE.add(Int64::ONE), Int64::MIN_VALUE);
    assert_eq!(
        Int64::from_i32(-7).div_mod(Int64::from_i32(2)),
        Ok((Int64::from_i32(-4), Int64::from_i32(1)))
    );
    assert_eq!(Int64::ONE.quot(Int64::ZERO), Err(DivisionByZero));

    let mut rng = Xoshiro128StarStar::seed_from_u64(0);
    let r = Int64::rand_using(&mut rng).unwrap();
    let (q, m) = r.quot_rem(Int64::from_i32(1000)).unwrap();
    assert_eq!(q.mul(Int64::from_i32(1000)).add(m), r);

    // formatting into a stack buffer
    let mut buf = [0u8; Int64::MAX_CHARS];
    let len = Int64::MIN_VALUE.to_bytes_radix(&mut buf, 10, false).unwrap();
    assert_eq!(&buf[..len], b"-9223372036854775808");
    assert_eq!(Int64::from_bytes_radix(&buf[..len], 10), Ok(Int64::MIN_VALUE));

    let d = decode_f64(-1.5);
    assert_eq!(d.signed_mantissa(), -(3 << 51));
    assert_eq!(Int64::from_f64(-1.5e300), Int64::MIN_VALUE);

    panic!("main is not allowed to return")
}
