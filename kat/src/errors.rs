// Copyright (c) 2024 Espresso Systems (espressosys.com)
// This file is part of the Jellyfish library.

// You should have received a copy of the MIT License
// along with the Jellyfish library. If not, see <https://mit-license.org/>.

//! Error types.

use displaydoc::Display;
use jf_p2lite::P2Error;
use jf_p2lite_field::FieldError;

/// Failures while producing or checking known-answer records.
#[derive(Debug, Display)]
pub enum KatError {
    /// I/O error, {0}
    Io(std::io::Error),
    /// Malformed JSON, {0}
    Json(serde_json::Error),
    /// Cannot hash preimage, {0}
    Hash(P2Error),
    /// Digest mismatch for preimage [{preimage}]: record says [{expected}], computed [{computed}]
    DigestMismatch {
        /// preimage of the record, comma separated
        preimage: String,
        /// digest stored in the record, comma separated
        expected: String,
        /// digest recomputed from the preimage, comma separated
        computed: String,
    },
}

// Display already renders the inner error, so no `source()` chain.
impl std::error::Error for KatError {}

impl From<std::io::Error> for KatError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for KatError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

impl From<P2Error> for KatError {
    fn from(e: P2Error) -> Self {
        Self::Hash(e)
    }
}

impl From<FieldError> for KatError {
    fn from(e: FieldError) -> Self {
        Self::Hash(P2Error::from(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn inner_error_is_rendered_once() {
        let err = KatError::from(FieldError::InvalidDecimal("1.5".to_string()));
        assert!(err.source().is_none());
        assert_eq!(
            anyhow::Error::from(err).to_string(),
            "Cannot hash preimage, Bad field element, Not a decimal integer: 1.5"
        );
    }

    #[test]
    fn io_errors_keep_their_message() {
        let err = KatError::from(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"));
        assert!(err.source().is_none());
        let err = anyhow::Error::from(err);
        assert_eq!(err.chain().count(), 1);
        assert_eq!(err.to_string(), "I/O error, gone");
    }
}
