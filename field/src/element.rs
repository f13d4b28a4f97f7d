// Copyright (c) 2024 Espresso Systems (espressosys.com)
// This file is part of the Jellyfish library.

// You should have received a copy of the MIT License
// along with the Jellyfish library. If not, see <https://mit-license.org/>.

//! The field element type and its arithmetic.

use ark_bn254::Fr;
use ark_ff::{Field, One, Zero};
use ark_std::{
    fmt,
    ops::{Add, AddAssign, Mul, MulAssign},
    str::FromStr,
    string::ToString,
};
use num_bigint::{BigInt, BigUint};

use crate::{reduce, FieldError};

/// A canonical residue modulo the BN254 scalar field order.
///
/// Backed by the 256-bit Montgomery form of `ark_bn254::Fr`, so the value
/// at rest is always in `[0, p)` and every `+`/`*` is reduced on the spot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FieldElement(Fr);

impl FieldElement {
    /// The additive identity.
    #[inline]
    pub fn zero() -> Self {
        Self(Fr::zero())
    }

    /// The multiplicative identity.
    #[inline]
    pub fn one() -> Self {
        Self(Fr::one())
    }

    /// Whether this is the additive identity.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Wrap an arkworks field element.
    #[inline]
    pub fn from_fr(fr: Fr) -> Self {
        Self(fr)
    }

    /// The underlying arkworks field element.
    #[inline]
    pub fn into_fr(self) -> Fr {
        self.0
    }

    /// `(self + rhs) mod p`
    #[inline]
    pub fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }

    /// `(self * rhs) mod p`
    #[inline]
    pub fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }

    /// `self^5 mod p`, evaluated as `x^2`, `x^4 = x^2 * x^2`, `x^5 = x^4 * x`
    /// with a reduction after every multiplication.
    #[inline]
    pub fn sbox(self) -> Self {
        let x2 = Self(self.0.square());
        let x4 = Self(x2.0.square());
        x4.mul(self)
    }

    /// The canonical representative as an unbounded integer.
    pub fn to_biguint(&self) -> BigUint {
        self.0.into()
    }

    /// Parse an optionally signed decimal integer and reduce it into the
    /// field. Negative and over-range values are accepted.
    pub fn from_dec_str(s: &str) -> Result<Self, FieldError> {
        let digits = s.strip_prefix(['+', '-']).unwrap_or(s);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(FieldError::InvalidDecimal(s.to_string()));
        }
        BigInt::parse_bytes(s.as_bytes(), 10)
            .map(|x| reduce(&x))
            .ok_or_else(|| FieldError::InvalidDecimal(s.to_string()))
    }
}

impl From<u64> for FieldElement {
    fn from(x: u64) -> Self {
        Self(Fr::from(x))
    }
}

impl From<Fr> for FieldElement {
    fn from(fr: Fr) -> Self {
        Self(fr)
    }
}

impl From<&BigInt> for FieldElement {
    fn from(x: &BigInt) -> Self {
        reduce(x)
    }
}

impl FromStr for FieldElement {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_dec_str(s)
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_biguint())
    }
}

impl Add for FieldElement {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        FieldElement::add(self, rhs)
    }
}

impl AddAssign for FieldElement {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = FieldElement::add(*self, rhs);
    }
}

impl Mul for FieldElement {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        FieldElement::mul(self, rhs)
    }
}

impl MulAssign for FieldElement {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = FieldElement::mul(*self, rhs);
    }
}
