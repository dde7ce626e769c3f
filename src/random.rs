use crate::config::FALLBACK_SEED;
use rand_core::{impls, Error, RngCore, SeedableRng};

/// A value in the half-open range `[low, high)`; `low` when the range is empty
pub fn random_range<R: RngCore + ?Sized>(rng: &mut R, low: u8, high: u8) -> u8 {
    if high <= low {
        return low;
    }
    let span = u32::from(high - low);
    low + (rng.next_u32() % span) as u8
}

/// Marsaglia xorshift generator, small enough for an 8-bit target
#[derive(Clone, Debug)]
pub struct XorShift32(u32);

impl XorShift32 {
    pub const fn new(seed: u32) -> Self {
        if seed == 0 {
            Self(FALLBACK_SEED)
        } else {
            Self(seed)
        }
    }
}

impl RngCore for XorShift32 {
    fn next_u32(&mut self) -> u32 {
        self.0 ^= self.0 << 13;
        self.0 ^= self.0 >> 17;
        self.0 ^= self.0 << 5;
        self.0
    }

    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for XorShift32 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}
