#![allow(non_upper_case_globals)]

//! Physical constants for callers working in SI units.
//!
//! The solver core is unit-agnostic; these exist so demo and application code
//! can set [`PhysicalConstants`][crate::hamiltonian::PhysicalConstants] and
//! convert output energies without pulling in another crate. Values are taken
//! from NIST.

use std::f64::consts::PI;

/// Planck constant (kg m^2 s^-1)
pub const h: f64 = 6.62607015e-34;
//             +/- 0 (exact)

/// reduced Planck constant (kg m^2 s^-1)
pub const hbar: f64 = h / 2.0 / PI;
//                +/- 0 (exact)

/// elementary charge (C)
pub const e: f64 = 1.602176634e-19;
//             +/- 0 (exact)

/// electron mass (kg)
pub const me: f64 = 9.1093837015e-31;
//              +/- 0.0000000028e-31
