// Copyright (c) 2024 Espresso Systems (espressosys.com)
// This file is part of the Jellyfish library.

// You should have received a copy of the MIT License
// along with the Jellyfish library. If not, see <https://mit-license.org/>.

//! JSON persistence of known-answer records.

use std::{
    fs::{self, File},
    path::{Path, PathBuf},
};

use jf_p2lite::P2Error;
use serde_json::Value;
use tracing::{debug, info};

use crate::{builtin_cases, record::decimal_text, KatError, KatRecord};

/// Default file name of the record handed to the witness generator.
pub const PROVER_INPUT_FILE: &str = "input.json";

/// `test_<name>.json`, with every whitespace run in `name` replaced by `_`
/// and the result lowercased.
pub fn case_file_name(name: &str) -> String {
    let mut stem = String::with_capacity(name.len());
    let mut in_space = false;
    for c in name.chars() {
        if c.is_whitespace() {
            if !in_space {
                stem.push('_');
            }
            in_space = true;
        } else {
            stem.extend(c.to_lowercase());
            in_space = false;
        }
    }
    format!("test_{stem}.json")
}

/// Write `record` as pretty-printed JSON (2-space indent).
pub fn write_record(path: impl AsRef<Path>, record: &KatRecord) -> Result<(), KatError> {
    let path = path.as_ref();
    fs::write(path, serde_json::to_string_pretty(record)?)?;
    info!(path = %path.display(), "wrote record");
    Ok(())
}

/// Load a record written by [`write_record`].
pub fn read_record(path: impl AsRef<Path>) -> Result<KatRecord, KatError> {
    let path = path.as_ref();
    let record = serde_json::from_reader(File::open(path)?)?;
    debug!(path = %path.display(), "read record");
    Ok(record)
}

/// Compute every built-in case and write it to `dir/test_<name>.json`,
/// creating `dir` if needed. Returns the written paths in case order.
pub fn write_vectors(dir: impl AsRef<Path>) -> Result<Vec<PathBuf>, KatError> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;
    builtin_cases()
        .into_iter()
        .map(|case| -> Result<PathBuf, KatError> {
            let record = KatRecord::compute(case.preimage)?;
            let path = dir.join(case_file_name(case.name));
            write_record(&path, &record)?;
            Ok(path)
        })
        .collect()
}

/// Read a JSON list of preimages, e.g. `[["123", "456"], [0, 7]]`.
///
/// Elements may be decimal strings or JSON integers of any size. An entry that
/// is not a pair fails with [`P2Error::InvalidInputShape`].
pub fn read_preimages(path: impl AsRef<Path>) -> Result<Vec<[String; 2]>, KatError> {
    let entries: Vec<Vec<Value>> = serde_json::from_reader(File::open(path.as_ref())?)?;
    entries
        .into_iter()
        .map(|entry| -> Result<[String; 2], KatError> {
            let [a, b]: [Value; 2] = entry
                .try_into()
                .map_err(|e: Vec<Value>| P2Error::InvalidInputShape(e.len()))?;
            Ok([decimal_text(a)?, decimal_text(b)?])
        })
        .collect()
}
