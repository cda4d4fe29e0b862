use serde::{Deserialize, Serialize};

/// Smallest power of two `>= n`; `n` itself when it already is one.
///
/// `next_power_of_two(0)` is `1`. Returns `None` on overflow.
pub fn next_power_of_two(n: usize) -> Option<usize> {
    n.checked_next_power_of_two()
}

/// log2 of a power of two.
#[inline]
pub fn log2_pow2(n: usize) -> u32 {
    debug_assert!(n.is_power_of_two(), "{n} is not a power of two");
    n.trailing_zeros()
}

/// Reverse the lowest `bits` bits of `i`.
#[inline]
pub fn bit_reverse_index(i: usize, bits: u32) -> usize {
    if bits == 0 {
        return 0;
    }
    i.reverse_bits() >> (usize::BITS - bits)
}

/// Permute `v` in place so that the element at index `k` moves to the index
/// whose `log2(len)` low bits are those of `k` reversed.
///
/// `v.len()` must be a power of two (or zero).
pub fn bit_reverse<T>(v: &mut [T]) {
    let n = v.len();
    if n <= 2 {
        return;
    }
    assert!(n.is_power_of_two(), "bit_reverse: length {n} is not a power of two");
    let bits = log2_pow2(n);
    for i in 0..n {
        let j = bit_reverse_index(i, bits);
        if i < j {
            v.swap(i, j);
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ByteSize(pub usize);

impl core::fmt::Display for ByteSize {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let n = self.0 as f64;
        let (value, suffix) = if n >= (1 << 30) as f64 {
            (n / (1 << 30) as f64, "GiB")
        } else if n >= (1 << 20) as f64 {
            (n / (1 << 20) as f64, "MiB")
        } else if n >= (1 << 10) as f64 {
            (n / (1 << 10) as f64, "KiB")
        } else {
            (n, "B")
        };
        write!(f, "{value:.2} {suffix}")
    }
}
