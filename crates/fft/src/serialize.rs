//! Compact encoding of a [`Domain`]: only `cardinality` and `generator_sq_rt`
//! are written, the tables are rebuilt on load.

use ark_ff::Field;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize, Read, Write};
use field::log_order;
use utils::log2_pow2;

use crate::config::PrecomputeConfig;
use crate::domain::Domain;
use crate::error::DomainError;

impl<F: Field> Domain<F> {
    /// Write `cardinality` (u64) then `generator_sq_rt`, both compressed.
    pub fn serialize_params<W: Write>(&self, mut writer: W) -> Result<(), DomainError> {
        (self.cardinality() as u64).serialize_compressed(&mut writer)?;
        self.generator_sq_rt().serialize_compressed(&mut writer)?;
        Ok(())
    }

    pub fn serialized_params_size(&self) -> usize {
        0u64.compressed_size() + self.generator_sq_rt().compressed_size()
    }

    /// Read what [`Self::serialize_params`] wrote and recompute every table.
    pub fn deserialize_params<R: Read>(
        mut reader: R,
        precompute: &PrecomputeConfig,
    ) -> Result<Self, DomainError> {
        let raw = u64::deserialize_compressed(&mut reader)?;
        let generator_sq_rt = F::deserialize_compressed(&mut reader)?;

        let cardinality = usize::try_from(raw)
            .ok()
            .filter(|n| n.is_power_of_two())
            .ok_or(DomainError::InvalidCardinality(raw))?;

        let log_order_expected = log2_pow2(cardinality) + 1;
        if log_order(generator_sq_rt, log_order_expected) != Some(log_order_expected) {
            return Err(DomainError::InvalidGenerator { cardinality });
        }

        Self::from_generator_sq_rt(generator_sq_rt, cardinality, precompute)
    }
}
