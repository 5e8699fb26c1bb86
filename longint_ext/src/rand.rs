use alloc::vec;

use crate::Integer;

/// `rand_support` functions
impl Integer {
    // this is tested by `testcrate/tests/rand.rs`

    /// Creates a random `Integer` uniformly distributed over the signed range
    /// of `limbs` 32 bit limbs, using a `rand_core::RngCore` random number
    /// generator. This works by calling `RngCore::try_fill_bytes` on a little
    /// endian byte buffer.
    ///
    /// ```
    /// // Example using the `rand_xoshiro` crate.
    /// use longint::Integer;
    /// use rand_xoshiro::{rand_core::SeedableRng, Xoshiro128StarStar};
    ///
    /// let mut rng = Xoshiro128StarStar::seed_from_u64(0);
    /// let x = Integer::rand_using(&mut rng, 3).unwrap();
    /// assert!(x.significant_bits() <= 95);
    /// ```
    pub fn rand_using<R>(rng: &mut R, limbs: usize) -> Result<Integer, rand_core::Error>
    where
        R: rand_core::RngCore,
    {
        let mut bytes = vec![0u8; limbs * 4];
        rng.try_fill_bytes(&mut bytes)?;
        let bits: alloc::vec::Vec<u32> = bytes
            .chunks_exact(4)
            .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
            .collect();
        Ok(Integer::from_bits(&bits))
    }
}
