use longint::prelude::*;
use rand_xoshiro::{
    rand_core::{RngCore, SeedableRng},
    Xoshiro128StarStar,
};

#[test]
fn rand() {
    // `try_fill_bytes` on 8 bytes consumes exactly one `next_u64`
    let mut rng0 = Xoshiro128StarStar::seed_from_u64(0);
    let mut rng1 = Xoshiro128StarStar::seed_from_u64(0);
    for _ in 0..4 {
        let x = Int64::rand_using(&mut rng0).unwrap();
        assert_eq!(x, Int64::from_u64(rng1.next_u64()));
    }

    let mut rng0 = Xoshiro128StarStar::seed_from_u64(7);
    let mut rng1 = Xoshiro128StarStar::seed_from_u64(7);
    let x = Integer::rand_using(&mut rng0, 4).unwrap();
    let mut bits = [0u32; 4];
    let mut bytes = [0u8; 16];
    rng1.fill_bytes(&mut bytes);
    for (i, chunk) in bytes.chunks_exact(4).enumerate() {
        bits[i] = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    assert_eq!(x, Integer::from_bits(&bits));
    assert_eq!(x.to_bits(4), bits.to_vec());

    assert_eq!(Integer::rand_using(&mut rng0, 0).unwrap(), Integer::ZERO);
}

#[test]
fn rand_sign_coverage() {
    let mut rng = Xoshiro128StarStar::seed_from_u64(0);
    let mut negatives = 0;
    let mut nonnegatives = 0;
    for _ in 0..256 {
        let x = Integer::rand_using(&mut rng, 2).unwrap();
        assert!(x.significant_bits() <= 63);
        if x.is_negative() {
            negatives += 1;
        } else {
            nonnegatives += 1;
        }
        let y = Int64::rand_using(&mut rng).unwrap();
        assert_eq!(Integer::from_int64(y).to_int64(), y);
    }
    assert!(negatives > 0);
    assert!(nonnegatives > 0);
}
