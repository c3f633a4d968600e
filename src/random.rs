//! Deterministic randomness for reproducible generation.
//!
//! Every random decision in the crate flows through [`XorShift64`], so a
//! fixed seed reproduces the exact same graphs. The generator also implements
//! the `rand` traits, which lets shuffles and range draws from the ecosystem
//! run on top of it.

use parking_lot::Mutex;
use rand::{RngCore, SeedableRng};

/// Fixed word of the two-word xorshift state.
const XORSHIFT_INIT: u64 = 8_867_512_362_436_069;

/// Seed used until the first [`srand`] call.
const DEFAULT_SEED: u64 = 88_172_645_463_325_252;

static PROCESS_RNG: Mutex<XorShift64> = Mutex::new(XorShift64::new(DEFAULT_SEED));

/// 64-bit xorshift generator with a two-word state.
///
/// The same seed always yields the same sequence. Integer draws use the
/// `value mod span + lo` mapping, real draws scale the raw word into the
/// requested interval.
#[derive(Debug, Clone)]
pub struct XorShift64 {
    x: u64,
    w: u64,
}

impl XorShift64 {
    pub const fn new(seed: u64) -> Self {
        Self {
            x: XORSHIFT_INIT,
            w: seed,
        }
    }

    /// Advances the state and returns the next raw 64-bit word.
    pub fn next_raw(&mut self) -> u64 {
        let t = self.x ^ (self.x << 11);
        self.x = self.w;
        self.w = self.w ^ (self.w >> 19) ^ (t ^ (t >> 8));
        self.w
    }

    /// Uniform integer in `[lo, hi)`. The caller guarantees `lo < hi`.
    pub fn randrange(&mut self, lo: u64, hi: u64) -> u64 {
        lo + self.next_raw() % (hi - lo)
    }

    /// Uniform real in `[lo, hi)`.
    pub fn randrange_f64(&mut self, lo: f64, hi: f64) -> f64 {
        lo + (self.next_raw() as f64 / u64::MAX as f64) * (hi - lo)
    }
}

impl RngCore for XorShift64 {
    fn next_u32(&mut self) -> u32 {
        self.next_raw() as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next_raw()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let word = self.next_raw().to_le_bytes();
            chunk.copy_from_slice(&word[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for XorShift64 {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u64::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::new(state)
    }
}

/// Re-seeds the process-wide generator backing [`fork_rng`] and the
/// constructors that do not receive an explicit generator.
pub fn srand(seed: u64) {
    *PROCESS_RNG.lock() = XorShift64::new(seed);
}

/// Derives an independent generator from the process-wide one.
pub(crate) fn fork_rng() -> XorShift64 {
    XorShift64::new(PROCESS_RNG.lock().next_raw())
}
