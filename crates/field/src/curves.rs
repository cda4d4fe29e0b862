use ark_ff::{FftField, PrimeField};

#[cfg(feature = "serde1")]
use serde::{Deserialize, Serialize};

/// Identifies one row of the curve parameter table.
#[cfg_attr(feature = "serde1", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[allow(non_camel_case_types)]
pub enum CurveId {
    Bn254,
    Bls12_377,
    Bls12_381,
    Bw6_761,
}

impl CurveId {
    pub const ALL: [CurveId; 4] = [
        CurveId::Bn254,
        CurveId::Bls12_377,
        CurveId::Bls12_381,
        CurveId::Bw6_761,
    ];

    /// 2-adicity of the scalar field of this curve.
    pub fn max_order_root(self) -> u32 {
        match self {
            CurveId::Bn254 => Bn254::MAX_ORDER_ROOT,
            CurveId::Bls12_377 => Bls12_377::MAX_ORDER_ROOT,
            CurveId::Bls12_381 => Bls12_381::MAX_ORDER_ROOT,
            CurveId::Bw6_761 => Bw6_761::MAX_ORDER_ROOT,
        }
    }
}

impl core::fmt::Display for CurveId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            CurveId::Bn254 => "bn254",
            CurveId::Bls12_377 => "bls12-377",
            CurveId::Bls12_381 => "bls12-381",
            CurveId::Bw6_761 => "bw6-761",
        };
        f.write_str(name)
    }
}

/// Compile-time constants of a curve's scalar field.
///
/// `ROOT_OF_UNITY` generates the whole subgroup of order `2^MAX_ORDER_ROOT`
/// of the field's multiplicative group, written as a decimal numeral.
pub trait CurveParameters {
    const ID: CurveId;
    const ROOT_OF_UNITY: &'static str;
    const MAX_ORDER_ROOT: u32;

    type Fr: PrimeField + FftField;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Bn254;

impl CurveParameters for Bn254 {
    const ID: CurveId = CurveId::Bn254;
    const ROOT_OF_UNITY: &'static str =
        "19103219067921713944291392827692070036145651957329286315305642004821462161904";
    const MAX_ORDER_ROOT: u32 = 28;

    type Fr = ark_bn254::Fr;
}

#[derive(Clone, Copy, Debug, Default)]
#[allow(non_camel_case_types)]
pub struct Bls12_377;

impl CurveParameters for Bls12_377 {
    const ID: CurveId = CurveId::Bls12_377;
    const ROOT_OF_UNITY: &'static str =
        "8065159656716812877374967518403273466521432693661810619979959746626482506078";
    const MAX_ORDER_ROOT: u32 = 47;

    type Fr = ark_bls12_377::Fr;
}

#[derive(Clone, Copy, Debug, Default)]
#[allow(non_camel_case_types)]
pub struct Bls12_381;

impl CurveParameters for Bls12_381 {
    const ID: CurveId = CurveId::Bls12_381;
    const ROOT_OF_UNITY: &'static str =
        "10238227357739495823651030575849232062558860180284477541189508159991286009131";
    const MAX_ORDER_ROOT: u32 = 32;

    type Fr = ark_bls12_381::Fr;
}

#[derive(Clone, Copy, Debug, Default)]
#[allow(non_camel_case_types)]
pub struct Bw6_761;

impl CurveParameters for Bw6_761 {
    const ID: CurveId = CurveId::Bw6_761;
    const ROOT_OF_UNITY: &'static str = "32863578547254505029601261939868325669770508939375122462904745766352256812585773382134936404344547323199885654433";
    const MAX_ORDER_ROOT: u32 = 46;

    type Fr = ark_bw6_761::Fr;
}
