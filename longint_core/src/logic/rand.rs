use crate::Int64;

/// `rand_support` functions
impl Int64 {
    // this is tested by `testcrate/tests/rand.rs`

    /// Creates a uniformly random `Int64` using a `rand_core::RngCore` random
    /// number generator. This works by calling `RngCore::try_fill_bytes` on a
    /// little endian buffer of 8 bytes.
    ///
    /// ```
    /// // Example using the `rand_xoshiro` crate.
    /// use longint::Int64;
    /// use rand_xoshiro::{rand_core::SeedableRng, Xoshiro128StarStar};
    ///
    /// let mut rng0 = Xoshiro128StarStar::seed_from_u64(0);
    /// let mut rng1 = Xoshiro128StarStar::seed_from_u64(0);
    /// let x = Int64::rand_using(&mut rng0).unwrap();
    /// assert_eq!(x, Int64::rand_using(&mut rng1).unwrap());
    /// ```
    pub fn rand_using<R>(rng: &mut R) -> Result<Self, rand_core::Error>
    where
        R: rand_core::RngCore,
    {
        let mut bytes = [0u8; 8];
        rng.try_fill_bytes(&mut bytes)?;
        Ok(Self::from_u64(u64::from_le_bytes(bytes)))
    }
}
