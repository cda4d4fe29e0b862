use ark_ff::{FftField, Field, PrimeField};

use crate::curves::CurveParameters;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid decimal field element: {0:?}")]
    InvalidDecimal(String),
    #[error("2-adicity must be at least 1")]
    ZeroTwoAdicity,
    #[error("root of unity does not have order 2^{max_order_root}")]
    NotPrimitive { max_order_root: u32 },
}

/// Smallest `k <= bound` such that `x^(2^k) = 1`, or `None` if there is none.
///
/// For `x` in a 2-adic subgroup this is the base-2 log of its order.
pub fn log_order<F: Field>(x: F, bound: u32) -> Option<u32> {
    let mut acc = x;
    for k in 0..=bound {
        if acc.is_one() {
            return Some(k);
        }
        acc.square_in_place();
    }
    None
}

/// Generator of the full 2-adic subgroup of `F` together with its order `2^max_order_root`.
///
/// Construction validates that `root_of_unity` has exactly that order, so every
/// power-of-two domain up to `2^(max_order_root - 1)` can be carved out of it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldConfig<F: Field> {
    root_of_unity: F,
    max_order_root: u32,
}

impl<F: Field> FieldConfig<F> {
    pub fn new(root_of_unity: F, max_order_root: u32) -> Result<Self, ConfigError> {
        if max_order_root == 0 {
            return Err(ConfigError::ZeroTwoAdicity);
        }
        if log_order(root_of_unity, max_order_root) != Some(max_order_root) {
            return Err(ConfigError::NotPrimitive { max_order_root });
        }
        Ok(Self {
            root_of_unity,
            max_order_root,
        })
    }

    pub fn root_of_unity(&self) -> F {
        self.root_of_unity
    }

    pub fn max_order_root(&self) -> u32 {
        self.max_order_root
    }
}

impl<F: PrimeField> FieldConfig<F> {
    /// Parse the root from a decimal numeral.
    pub fn from_decimal(root_of_unity: &str, max_order_root: u32) -> Result<Self, ConfigError> {
        let root = root_of_unity
            .parse::<F>()
            .map_err(|_| ConfigError::InvalidDecimal(root_of_unity.to_owned()))?;
        Self::new(root, max_order_root)
    }

    /// Row of the curve parameter table for `C`.
    pub fn for_curve<C: CurveParameters<Fr = F>>() -> Result<Self, ConfigError> {
        Self::from_decimal(C::ROOT_OF_UNITY, C::MAX_ORDER_ROOT)
    }
}

impl<F: FftField> FieldConfig<F> {
    /// Use the 2-adic root arkworks ships with the field.
    pub fn from_fft_field() -> Result<Self, ConfigError> {
        Self::new(F::TWO_ADIC_ROOT_OF_UNITY, F::TWO_ADICITY)
    }
}
