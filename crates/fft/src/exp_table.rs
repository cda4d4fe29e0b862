use ark_ff::Field;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug_span, trace};
use utils::bit_reverse;

use crate::config::PrecomputeConfig;

/// `[scale * w^k for k in 0..len]`, permuted into bit-reversed order.
pub fn scaled_exp_table<F: Field>(
    scale: F,
    w: F,
    len: usize,
    config: &PrecomputeConfig,
) -> Vec<F> {
    let mut table = vec![F::zero(); len];
    if len == 0 {
        return table;
    }
    table[0] = scale;
    precompute_exp_table(scale, w, &mut table, config);
    bit_reverse(&mut table);
    table
}

/// Fill `table[1..]` with `scale * w^k`. `table[0]` is left as is.
///
/// Large tables are cut into contiguous chunks that are filled concurrently; each
/// chunk starts from one exponentiation and continues by multiplication, so the
/// result is identical to the single pass.
pub fn precompute_exp_table<F: Field>(
    scale: F,
    w: F,
    table: &mut [F],
    config: &PrecomputeConfig,
) {
    let n = table.len();
    if n < 2 {
        return;
    }

    let Some(interval) = config.chunk_interval(n) else {
        precompute_exp_table_chunk(scale, w, 1, &mut table[1..]);
        return;
    };

    let _span = debug_span!("exp_table_chunks", n, interval).entered();
    trace!(chunks = (n - 1).div_ceil(interval), "chunked exp table");

    let fill = |(i, chunk): (usize, &mut [F])| {
        let power = (1 + i * interval) as u64;
        precompute_exp_table_chunk(scale, w, power, chunk);
    };

    #[cfg(feature = "parallel")]
    table[1..].par_chunks_mut(interval).enumerate().for_each(fill);

    #[cfg(not(feature = "parallel"))]
    table[1..].chunks_mut(interval).enumerate().for_each(fill);
}

fn precompute_exp_table_chunk<F: Field>(scale: F, w: F, power: u64, chunk: &mut [F]) {
    let Some((first, rest)) = chunk.split_first_mut() else {
        return;
    };
    *first = w.pow([power]) * scale;
    let mut acc = *first;
    for x in rest {
        acc *= w;
        *x = acc;
    }
}
