//! field crate: the root-of-unity parameters of the pairing-friendly scalar fields
//! that host radix-2 NTT domains.
//!
//! Key points:
//! - Field arithmetic comes from arkworks (ark-ff 0.5.x); this crate only fixes,
//!   per field, a generator of the full 2-adic subgroup and that subgroup's order.
//! - `FieldConfig` is the injected configuration consumed by the domain builder.
//!   It can come from the curve table, from a decimal literal, or from the
//!   arkworks constants of any `FftField`.

pub mod config;
pub mod curves;

pub use config::{log_order, ConfigError, FieldConfig};
pub use curves::{Bls12_377, Bls12_381, Bn254, Bw6_761, CurveId, CurveParameters};
