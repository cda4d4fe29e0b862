//! fft crate: precomputed radix-2 NTT domains over 2-adic prime fields.
//!
//! A [`Domain`] fixes a power-of-two subgroup of the field's multiplicative group
//! and carries everything a forward, inverse or coset transform reads:
//! - per-stage twiddle tables for the generator and its inverse,
//! - two bit-reversed tables of `n^-1 * g^k`, with `g` the square root of the
//!   generator (coset shift) and its inverse.
//!
//! The transforms themselves live with the callers.

mod config;
mod domain;
mod error;
mod exp_table;
mod parallel;
mod serialize;
mod twiddles;

pub use config::{PrecomputeConfig, DEFAULT_EXP_TO_MUL_RATIO};
pub use domain::{Domain, DomainIter};
pub use error::DomainError;
pub use exp_table::{precompute_exp_table, scaled_exp_table};
pub use twiddles::stage_twiddles;

pub use field::{CurveId, CurveParameters, FieldConfig};
