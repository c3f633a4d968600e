//! Uniform sampling of distinct integers from a range with exclusions.

use crate::error::{GraphError, Result};
use crate::random::{self, XorShift64};

/// A one-shot uniform sample of `sample_size` distinct integers from
/// `[lo, hi)` that avoids a caller-supplied exclusion set.
///
/// The draw runs in `O(K log K + |excl|)` without materializing the
/// complement: `K` values are drawn with repetition from a shrunken range and
/// sorted, then each is shifted past the samples before it and the
/// exclusions at or below it. The result is strictly increasing.
pub struct RangeSampler {
    samples: Vec<u64>,
}

impl RangeSampler {
    /// Draws the sample from the process-wide generator (see
    /// [`crate::srand`]).
    pub fn new(sample_size: usize, lo: u64, hi: u64, excl: Vec<u64>) -> Result<Self> {
        let mut rng = random::fork_rng();
        Self::with_rng(sample_size, lo, hi, excl, &mut rng)
    }

    /// Draws the sample using `rng`.
    ///
    /// `excl` need not be sorted; duplicates are dropped. Fails with
    /// `TooManySamples` when fewer than `sample_size` values of `[lo, hi)`
    /// remain outside `excl`.
    pub fn with_rng(
        sample_size: usize,
        lo: u64,
        hi: u64,
        mut excl: Vec<u64>,
        rng: &mut XorShift64,
    ) -> Result<Self> {
        if lo > hi {
            return Err(GraphError::InvalidArgument(format!(
                "empty sampling range [{lo}, {hi})"
            )));
        }
        excl.sort_unstable();
        excl.dedup();
        if excl.first().is_some_and(|&e| e < lo) || excl.last().is_some_and(|&e| e >= hi) {
            return Err(GraphError::InvalidArgument(
                "exclusion outside the sampling range".into(),
            ));
        }

        let k = sample_size as u64;
        let e = excl.len() as u64;
        if hi - lo < k + e {
            return Err(GraphError::TooManySamples);
        }

        // Largest admissible output is hi - 1; the draw range leaves exactly
        // enough headroom for the +i and +j shifts below.
        let top = hi - k - e + 1;
        let mut samples: Vec<u64> = (0..sample_size).map(|_| rng.randrange(lo, top)).collect();
        samples.sort_unstable();

        let mut skipped = 0usize;
        for (i, sample) in samples.iter_mut().enumerate() {
            while skipped < excl.len() && excl[skipped] <= *sample + (i + skipped) as u64 {
                skipped += 1;
            }
            *sample += (i + skipped) as u64;
        }
        Ok(Self { samples })
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, u64> {
        self.samples.iter()
    }

    pub fn as_slice(&self) -> &[u64] {
        &self.samples
    }

    pub fn into_vec(self) -> Vec<u64> {
        self.samples
    }
}

impl IntoIterator for RangeSampler {
    type Item = u64;
    type IntoIter = std::vec::IntoIter<u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.into_iter()
    }
}

impl<'a> IntoIterator for &'a RangeSampler {
    type Item = &'a u64;
    type IntoIter = std::slice::Iter<'a, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
