use ark_ff::{Field, PrimeField};
use field::{CurveParameters, FieldConfig};
use tracing::{debug, debug_span};
use utils::{log2_pow2, next_power_of_two, ByteSize};

use crate::config::PrecomputeConfig;
use crate::error::DomainError;
use crate::exp_table::scaled_exp_table;
use crate::parallel::join;
use crate::twiddles::stage_twiddles;

/// A multiplicative subgroup of power-of-two order `cardinality`, with the
/// tables a radix-2 NTT over it needs.
///
/// `generator_sq_rt` has order `2 * cardinality` and squares to `generator`;
/// everything else is derived from those two values. All tables are filled at
/// construction and never change afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Domain<F: Field> {
    generator: F,
    generator_inv: F,
    generator_sq_rt: F,
    generator_sq_rt_inv: F,
    cardinality: usize,
    cardinality_inv: F,
    twiddles: Vec<Vec<F>>,
    twiddles_inv: Vec<Vec<F>>,
    exp_table1: Vec<F>,
    exp_table2: Vec<F>,
}

impl<F: Field> Domain<F> {
    /// Smallest domain with at least `min_size` elements, with the default precompute config.
    pub fn new(min_size: usize, field: &FieldConfig<F>) -> Result<Self, DomainError> {
        Self::with_config(min_size, field, &PrecomputeConfig::default())
    }

    pub fn with_config(
        min_size: usize,
        field: &FieldConfig<F>,
        precompute: &PrecomputeConfig,
    ) -> Result<Self, DomainError> {
        if min_size == 0 {
            return Err(DomainError::EmptyDomain);
        }
        let max_order_root = field.max_order_root();
        let too_large = |log_size| DomainError::TooLarge {
            min_size,
            log_size,
            max_order_root,
        };

        let cardinality = next_power_of_two(min_size).ok_or_else(|| too_large(usize::BITS))?;
        let log_size = log2_pow2(cardinality);
        // a root of order 2 * cardinality must exist
        if log_size + 1 > max_order_root {
            return Err(too_large(log_size));
        }

        let expo = pow2_limbs(max_order_root - log_size - 1);
        let generator_sq_rt = field.root_of_unity().pow(&expo);

        Self::from_generator_sq_rt(generator_sq_rt, cardinality, precompute)
    }

    /// Build every table from a square root of the subgroup generator.
    ///
    /// `generator_sq_rt` must have order exactly `2 * cardinality`.
    pub(crate) fn from_generator_sq_rt(
        generator_sq_rt: F,
        cardinality: usize,
        precompute: &PrecomputeConfig,
    ) -> Result<Self, DomainError> {
        let _span = debug_span!("fft_domain", cardinality).entered();

        let generator = generator_sq_rt.square();
        let generator_sq_rt_inv = generator_sq_rt
            .inverse()
            .ok_or(DomainError::NotInvertible("generator square root"))?;
        let generator_inv = generator
            .inverse()
            .ok_or(DomainError::NotInvertible("generator"))?;
        let cardinality_inv = F::from(cardinality as u64)
            .inverse()
            .ok_or(DomainError::NotInvertible("cardinality"))?;

        let nb_stages = log2_pow2(cardinality);

        // four independent builds, each owning its output
        let ((twiddles, twiddles_inv), (exp_table1, exp_table2)) = join(
            || {
                join(
                    || stage_twiddles(generator, nb_stages),
                    || stage_twiddles(generator_inv, nb_stages),
                )
            },
            || {
                join(
                    || scaled_exp_table(cardinality_inv, generator_sq_rt, cardinality, precompute),
                    || {
                        scaled_exp_table(
                            cardinality_inv,
                            generator_sq_rt_inv,
                            cardinality,
                            precompute,
                        )
                    },
                )
            },
        );

        let domain = Self {
            generator,
            generator_inv,
            generator_sq_rt,
            generator_sq_rt_inv,
            cardinality,
            cardinality_inv,
            twiddles,
            twiddles_inv,
            exp_table1,
            exp_table2,
        };
        debug!(
            cardinality,
            nb_stages,
            tables = %ByteSize(domain.table_bytes()),
            "precomputed fft domain"
        );
        Ok(domain)
    }

    /// Transform size, a power of two.
    pub fn cardinality(&self) -> usize {
        self.cardinality
    }

    /// `cardinality` as a field element, inverted.
    pub fn cardinality_inv(&self) -> F {
        self.cardinality_inv
    }

    /// log2(cardinality).
    pub fn log_cardinality(&self) -> u32 {
        log2_pow2(self.cardinality)
    }

    /// Number of radix-2 stages, equal to `log_cardinality`.
    pub fn nb_stages(&self) -> usize {
        self.twiddles.len()
    }

    pub fn generator(&self) -> F {
        self.generator
    }

    pub fn generator_inv(&self) -> F {
        self.generator_inv
    }

    pub fn generator_sq_rt(&self) -> F {
        self.generator_sq_rt
    }

    pub fn generator_sq_rt_inv(&self) -> F {
        self.generator_sq_rt_inv
    }

    /// Per-stage powers of the generator; stage `i` has `2^(nb_stages - i) + 1` entries.
    pub fn twiddles(&self) -> &[Vec<F>] {
        &self.twiddles
    }

    /// Same layout as [`Self::twiddles`], driven by the inverse generator.
    pub fn twiddles_inv(&self) -> &[Vec<F>] {
        &self.twiddles_inv
    }

    /// `cardinality_inv * generator_sq_rt^k`, in bit-reversed order.
    pub fn exp_table1(&self) -> &[F] {
        &self.exp_table1
    }

    /// `cardinality_inv * generator_sq_rt_inv^k`, in bit-reversed order.
    pub fn exp_table2(&self) -> &[F] {
        &self.exp_table2
    }

    /// `generator^k`, read from the first twiddle stage when in range.
    pub fn element(&self, k: usize) -> F {
        if let Some(v) = self.twiddles.first().and_then(|t| t.get(k)) {
            return *v;
        }
        self.generator.pow([k as u64])
    }

    /// Iterator over `[1, generator, ..., generator^(cardinality - 1)]`.
    pub fn elements(&self) -> DomainIter<F> {
        DomainIter {
            generator: self.generator,
            cur: F::one(),
            i: 0,
            n: self.cardinality,
        }
    }

    /// Heap footprint of the precomputed tables.
    pub fn table_bytes(&self) -> usize {
        let twiddle_len: usize = self
            .twiddles
            .iter()
            .chain(self.twiddles_inv.iter())
            .map(Vec::len)
            .sum();
        let exp_len = self.exp_table1.len() + self.exp_table2.len();
        (twiddle_len + exp_len) * core::mem::size_of::<F>()
    }
}

impl<F: PrimeField> Domain<F> {
    /// Domain over the scalar field of `C`, using the curve parameter table.
    pub fn for_curve<C: CurveParameters<Fr = F>>(min_size: usize) -> Result<Self, DomainError> {
        let field = FieldConfig::for_curve::<C>()?;
        Self::new(min_size, &field)
    }
}

/// Iterator over the elements of a [`Domain`].
pub struct DomainIter<F: Field> {
    generator: F,
    cur: F,
    i: usize,
    n: usize,
}

impl<F: Field> Iterator for DomainIter<F> {
    type Item = F;

    fn next(&mut self) -> Option<Self::Item> {
        if self.i >= self.n {
            return None;
        }
        let out = self.cur;
        self.cur *= self.generator;
        self.i += 1;
        Some(out)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.n.saturating_sub(self.i);
        (remaining, Some(remaining))
    }
}

impl<F: Field> ExactSizeIterator for DomainIter<F> {}

/// Little-endian limbs of `2^k`.
fn pow2_limbs(k: u32) -> Vec<u64> {
    let mut limbs = vec![0u64; (k / 64) as usize + 1];
    limbs[(k / 64) as usize] = 1 << (k % 64);
    limbs
}

#[cfg(test)]
mod tests {
    use super::*;
    use ark_ff::{FftField, One};
    use ark_poly::{EvaluationDomain, Radix2EvaluationDomain};
    use field::{Bls12_377, Bls12_381, Bn254, Bw6_761};
    use utils::bit_reverse_index;

    fn check_invariants<F: Field>(d: &Domain<F>, min_size: usize) {
        let n = d.cardinality();
        assert!(n.is_power_of_two());
        assert!(n >= min_size && n / 2 < min_size);

        // primitivity
        assert!(d.generator().pow([n as u64]).is_one());
        if n > 1 {
            assert!(!d.generator().pow([(n / 2) as u64]).is_one());
        }
        assert_eq!(d.generator_sq_rt().square(), d.generator());
        assert!(d.generator_sq_rt().pow([2 * n as u64]).is_one());
        assert!(!d.generator_sq_rt().pow([n as u64]).is_one());

        assert!((d.generator() * d.generator_inv()).is_one());
        assert!((d.generator_sq_rt() * d.generator_sq_rt_inv()).is_one());
        assert!((d.cardinality_inv() * F::from(n as u64)).is_one());

        let nb_stages = d.log_cardinality() as usize;
        assert_eq!(d.nb_stages(), nb_stages);
        for (table, omega) in [
            (d.twiddles(), d.generator()),
            (d.twiddles_inv(), d.generator_inv()),
        ] {
            assert_eq!(table.len(), nb_stages);
            let mut base = omega;
            for (i, stage) in table.iter().enumerate() {
                assert_eq!(stage.len(), (1 << (nb_stages - i)) + 1);
                assert!(stage[0].is_one());
                assert_eq!(stage.last(), stage.first());
                for (j, x) in stage.iter().enumerate() {
                    assert_eq!(*x, base.pow([j as u64]));
                }
                base.square_in_place();
            }
        }

        for (table, root) in [
            (d.exp_table1(), d.generator_sq_rt()),
            (d.exp_table2(), d.generator_sq_rt_inv()),
        ] {
            assert_eq!(table.len(), n);
            let mut expected = d.cardinality_inv();
            for k in 0..n {
                assert_eq!(table[bit_reverse_index(k, nb_stages as u32)], expected);
                expected *= root;
            }
        }
    }

    #[test]
    fn size_five_on_bn254() {
        let d = Domain::<ark_bn254::Fr>::for_curve::<Bn254>(5).expect("domain");
        assert_eq!(d.cardinality(), 8);
        assert_eq!(d.nb_stages(), 3);
        let lens: Vec<usize> = d.twiddles().iter().map(Vec::len).collect();
        assert_eq!(lens, [9, 5, 3]);
        let lens: Vec<usize> = d.twiddles_inv().iter().map(Vec::len).collect();
        assert_eq!(lens, [9, 5, 3]);
        assert_eq!(d.exp_table1().len(), 8);
        assert_eq!(d.exp_table2().len(), 8);
        assert!((d.cardinality_inv() * ark_bn254::Fr::from(8u64)).is_one());
        check_invariants(&d, 5);
    }

    #[test]
    fn power_of_two_is_kept() {
        let d = Domain::<ark_bn254::Fr>::for_curve::<Bn254>(8).expect("domain");
        assert_eq!(d.cardinality(), 8);
        check_invariants(&d, 8);
    }

    #[test]
    fn invariants_across_sizes() {
        let field = FieldConfig::<ark_bn254::Fr>::for_curve::<Bn254>().unwrap();
        for m in [1usize, 2, 3, 4, 7, 16, 17, 100, 1000] {
            let d = Domain::new(m, &field).expect("domain");
            check_invariants(&d, m);
        }
    }

    #[test]
    fn every_curve_builds() {
        check_invariants(&Domain::<ark_bn254::Fr>::for_curve::<Bn254>(32).unwrap(), 32);
        check_invariants(&Domain::<ark_bls12_377::Fr>::for_curve::<Bls12_377>(32).unwrap(), 32);
        check_invariants(&Domain::<ark_bls12_381::Fr>::for_curve::<Bls12_381>(32).unwrap(), 32);
        check_invariants(&Domain::<ark_bw6_761::Fr>::for_curve::<Bw6_761>(32).unwrap(), 32);
    }

    #[test]
    fn single_element_domain() {
        let d = Domain::<ark_bls12_381::Fr>::for_curve::<Bls12_381>(1).unwrap();
        assert_eq!(d.cardinality(), 1);
        assert!(d.generator().is_one());
        assert_eq!(d.generator_sq_rt(), -ark_bls12_381::Fr::one());
        assert!(d.twiddles().is_empty());
        assert_eq!(d.exp_table1(), &[ark_bls12_381::Fr::one()]);
        assert_eq!(d.exp_table2(), &[ark_bls12_381::Fr::one()]);
    }

    #[test]
    fn empty_domain_is_rejected() {
        let err = Domain::<ark_bn254::Fr>::for_curve::<Bn254>(0).unwrap_err();
        assert!(matches!(err, DomainError::EmptyDomain));
    }

    #[test]
    fn too_large_is_rejected_before_allocation() {
        // 2^27 + 1 rounds to 2^28, which needs a root of order 2^29
        let err = Domain::<ark_bn254::Fr>::for_curve::<Bn254>((1 << 27) + 1).unwrap_err();
        assert!(matches!(
            err,
            DomainError::TooLarge {
                log_size: 28,
                max_order_root: 28,
                ..
            }
        ));

        let err = Domain::<ark_bn254::Fr>::for_curve::<Bn254>(usize::MAX).unwrap_err();
        assert!(matches!(err, DomainError::TooLarge { .. }));
    }

    #[test]
    fn small_injected_field() {
        // generator of the order-16 subgroup of bn254
        let root = FieldConfig::<ark_bn254::Fr>::for_curve::<Bn254>()
            .unwrap()
            .root_of_unity()
            .pow([1u64 << 24]);
        let field = FieldConfig::new(root, 4).expect("order 16");

        let d = Domain::new(8, &field).expect("8 fits");
        check_invariants(&d, 8);
        assert_eq!(d.generator_sq_rt(), root);

        let err = Domain::new(9, &field).unwrap_err();
        assert!(matches!(
            err,
            DomainError::TooLarge {
                min_size: 9,
                log_size: 4,
                max_order_root: 4
            }
        ));
    }

    #[test]
    fn chunking_does_not_change_the_domain() {
        let field = FieldConfig::<ark_bls12_381::Fr>::for_curve::<Bls12_381>().unwrap();
        let m = 1 << 10;
        let sequential = Domain::with_config(m, &field, &PrecomputeConfig::sequential()).unwrap();
        let max_chunks = PrecomputeConfig::chunked(m - 1);
        assert_eq!(max_chunks.chunk_interval(m), Some(1));
        let chunked = Domain::with_config(m, &field, &max_chunks).unwrap();
        let default = Domain::new(m, &field).unwrap();
        assert_eq!(sequential, chunked);
        assert_eq!(sequential, default);
        check_invariants(&sequential, m);
    }

    #[test]
    fn agrees_with_ark_poly() {
        let field = FieldConfig::<ark_bls12_381::Fr>::from_fft_field().unwrap();
        for m in [1usize, 5, 64, 300] {
            let d = Domain::new(m, &field).unwrap();
            let ark = Radix2EvaluationDomain::<ark_bls12_381::Fr>::new(m).unwrap();
            assert_eq!(ark.size, d.cardinality() as u64);
            assert_eq!(ark.log_size_of_group, d.log_cardinality());
            assert_eq!(ark.size_inv, d.cardinality_inv());
            assert_eq!(ark.group_gen, d.generator());
            assert_eq!(ark.group_gen_inv, d.generator_inv());
            let ours: Vec<_> = d.elements().collect();
            let theirs: Vec<_> = ark.elements().collect();
            assert_eq!(ours, theirs);
        }
    }

    #[test]
    fn hosts_any_arkworks_fft_field() {
        let field = FieldConfig::<ark_pallas::Fr>::from_fft_field().unwrap();
        let d = Domain::new(20, &field).unwrap();
        assert_eq!(d.cardinality(), 32);
        assert_eq!(
            d.generator_sq_rt(),
            ark_pallas::Fr::TWO_ADIC_ROOT_OF_UNITY.pow([1u64 << 26])
        );
        check_invariants(&d, 20);
    }

    #[test]
    fn element_lookup() {
        let d = Domain::<ark_bn254::Fr>::for_curve::<Bn254>(16).unwrap();
        let elems: Vec<_> = d.elements().collect();
        assert_eq!(elems.len(), 16);
        assert_eq!(d.elements().len(), 16);
        for (k, e) in elems.iter().enumerate() {
            assert_eq!(d.element(k), *e);
        }
        assert!(d.element(16).is_one());
        assert_eq!(d.element(17), d.generator());
        assert_eq!(d.element(40), d.generator().pow([8u64]));
    }

    #[test]
    fn table_footprint() {
        let d = Domain::<ark_bn254::Fr>::for_curve::<Bn254>(8).unwrap();
        // twiddles 2 * (9 + 5 + 3), exp tables 2 * 8
        let entries = 2 * 17 + 16;
        assert_eq!(d.table_bytes(), entries * core::mem::size_of::<ark_bn254::Fr>());
    }

    #[test]
    fn pow2_limbs_layout() {
        assert_eq!(pow2_limbs(0), vec![1]);
        assert_eq!(pow2_limbs(63), vec![1 << 63]);
        assert_eq!(pow2_limbs(64), vec![0, 1]);
    }
}
