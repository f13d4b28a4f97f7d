// Copyright (c) 2024 Espresso Systems (espressosys.com)
// This file is part of the Jellyfish library.

// You should have received a copy of the MIT License
// along with the Jellyfish library. If not, see <https://mit-license.org/>.

//! Exact arithmetic over the scalar field of BN254, the field used by circom
//! circuits.
//!
//! Every [`FieldElement`] is kept as its canonical residue in `[0, p)`, and
//! every operation reduces immediately. Arbitrary integers (negative or
//! larger than `p`) enter the field through [`reduce`].

#![cfg_attr(not(test), no_std)]
#![deny(missing_docs)]

mod element;
mod errors;

use ark_bn254::Fr;
use ark_ff::PrimeField;
use lazy_static::lazy_static;
use num_bigint::{BigInt, BigUint};

pub use element::FieldElement;
pub use errors::FieldError;

/// Decimal rendering of the field modulus `p`.
pub const MODULUS_DEC: &str =
    "21888242871839275222246405745257275088548364400416034343698204186575808495617";

lazy_static! {
    static ref MODULUS: BigInt = BigInt::from(BigUint::from(Fr::MODULUS));
}

/// The field modulus `p` as an unbounded integer.
pub fn modulus() -> BigUint {
    MODULUS.magnitude().clone()
}

/// Map any integer to its unique representative in `[0, p)`.
///
/// `x` may be negative or exceed `p`; the result is congruent to `x` mod `p`.
pub fn reduce(x: &BigInt) -> FieldElement {
    let p = &*MODULUS;
    // `%` on BigInt keeps the sign of the dividend
    let r = ((x % p) + p) % p;
    FieldElement::from_fr(Fr::from(r.magnitude().clone()))
}
