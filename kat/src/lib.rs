// Copyright (c) 2024 Espresso Systems (espressosys.com)
// This file is part of the Jellyfish library.

// You should have received a copy of the MIT License
// along with the Jellyfish library. If not, see <https://mit-license.org/>.

//! Known-answer vectors for the p2lite hash.
//!
//! A [`KatRecord`] is the flat `{ "preimage": [..], "hash": [..] }` record
//! handed to the proving pipeline as public inputs. This crate computes such
//! records, writes them to disk, reads them back and re-checks them against
//! the hash.
#![deny(missing_docs)]

mod errors;
mod record;
mod store;

pub use errors::KatError;
pub use record::{builtin_cases, hash_records, KatCase, KatRecord, GOLDEN};
pub use store::{
    case_file_name, read_preimages, read_record, write_record, write_vectors, PROVER_INPUT_FILE,
};
