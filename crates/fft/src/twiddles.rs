use ark_ff::Field;

/// Twiddle tables for every stage of a radix-2 transform of size `2^nb_stages`
/// driven by `omega`, a primitive `2^nb_stages`-th root of unity.
///
/// Stage `i` holds `w_i^0, w_i^1, ..., w_i^(2^(nb_stages - i))` where `w_0 = omega` and
/// `w_i = w_{i-1}^2`. The last entry wraps around to one; strided lookups rely on it.
pub fn stage_twiddles<F: Field>(omega: F, nb_stages: u32) -> Vec<Vec<F>> {
    let mut stages: Vec<Vec<F>> = Vec::with_capacity(nb_stages as usize);
    for i in 0..nb_stages {
        let w = match stages.last() {
            None => omega,
            Some(prev) => prev[2],
        };
        let len = 1 + (1usize << (nb_stages - i));
        let mut t = Vec::with_capacity(len);
        t.push(F::one());
        t.push(w);
        for j in 2..len {
            let next = t[j - 1] * w;
            t.push(next);
        }
        stages.push(t);
    }
    stages
}
