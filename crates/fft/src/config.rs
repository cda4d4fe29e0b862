#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

/// Number of field multiplications that cost about as much as one exponentiation.
pub const DEFAULT_EXP_TO_MUL_RATIO: usize = 6000 / 17;

/// Tuning of the chunked exponentiation-table build.
///
/// A table of `n` entries is split into chunks of `(n - 1) / parallelism` entries.
/// Each chunk pays one exponentiation for its first entry, so chunking only kicks in
/// when a chunk holds at least `exp_to_mul_ratio` entries.
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PrecomputeConfig {
    pub parallelism: usize,
    pub exp_to_mul_ratio: usize,
}

impl Default for PrecomputeConfig {
    /// A quarter of the worker threads, at least one.
    fn default() -> Self {
        Self {
            parallelism: (crate::parallel::num_threads() / 4).max(1),
            exp_to_mul_ratio: DEFAULT_EXP_TO_MUL_RATIO,
        }
    }
}

impl PrecomputeConfig {
    /// Never chunk.
    pub fn sequential() -> Self {
        Self {
            parallelism: 1,
            exp_to_mul_ratio: usize::MAX,
        }
    }

    /// Always chunk into `parallelism` pieces, however small.
    pub fn chunked(parallelism: usize) -> Self {
        Self {
            parallelism: parallelism.max(1),
            exp_to_mul_ratio: 1,
        }
    }

    /// Chunk length for a table of `len` entries, or `None` for a single pass.
    pub fn chunk_interval(&self, len: usize) -> Option<usize> {
        if len < 2 {
            return None;
        }
        let interval = (len - 1) / self.parallelism.max(1);
        if interval == 0 || interval < self.exp_to_mul_ratio {
            None
        } else {
            Some(interval)
        }
    }
}
