// Copyright (c) 2024 Espresso Systems (espressosys.com)
// This file is part of the Jellyfish library.

// You should have received a copy of the MIT License
// along with the Jellyfish library. If not, see <https://mit-license.org/>.

//! Error types.

// using `displaydoc` instead of `thiserror`, see
// https://github.com/dtolnay/thiserror/pull/64#issuecomment-735805334
// `thiserror` does not support #![no_std]

use displaydoc::Display;
use jf_p2lite_field::FieldError;

/// Errors raised at the hashing boundary, before any permutation runs.
#[derive(Debug, Display, Clone, Eq, PartialEq)]
pub enum P2Error {
    /// Expected a preimage of 2 field elements, got {0}
    InvalidInputShape(usize),
    /// Bad field element, {0}
    Field(FieldError),
}

impl ark_std::error::Error for P2Error {}

impl From<FieldError> for P2Error {
    fn from(err: FieldError) -> Self {
        Self::Field(err)
    }
}
