// Copyright (c) 2024 Espresso Systems (espressosys.com)
// This file is part of the Jellyfish library.

// You should have received a copy of the MIT License
// along with the Jellyfish library. If not, see <https://mit-license.org/>.

//! Error types.

use ark_std::string::String;
use displaydoc::Display;

/// Failures when bringing external values into the field.
///
/// Arithmetic on [`crate::FieldElement`] itself never fails.
#[derive(Debug, Display, Clone, Eq, PartialEq)]
pub enum FieldError {
    /// Not a decimal integer: {0}
    InvalidDecimal(String),
}

impl ark_std::error::Error for FieldError {}
