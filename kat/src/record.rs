// Copyright (c) 2024 Espresso Systems (espressosys.com)
// This file is part of the Jellyfish library.

// You should have received a copy of the MIT License
// along with the Jellyfish library. If not, see <https://mit-license.org/>.

//! Known-answer records and the pinned golden vectors.

use jf_p2lite::{hash_batch, hash_dec, to_dec_strings, Digest, Preimage};
use jf_p2lite_field::{FieldElement, FieldError};
use serde::{de::Error as _, Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::KatError;

/// `(name, preimage, digest)` for every built-in case, digests pinned from
/// the reference driver of the paired circuit.
pub const GOLDEN: [(&str, [&str; 2], [&str; 2]); 3] = [
    (
        "simple",
        ["123", "456"],
        [
            "11374543379178441901704371982791979449193461156168616459102214755818604442021",
            "15698588122225580495418099946295464058063693957421668735579724907577446693607",
        ],
    ),
    (
        "zero",
        ["0", "0"],
        [
            "20406561499596883705305439977553641669900562403193540778468352451955620940825",
            "20406561499596883705305439977553641669900562403193540778468352451955620940825",
        ],
    ),
    (
        "large",
        ["999999999", "888888888"],
        [
            "2094154139033751919077269004045539214142142362992806110350151199534721819045",
            "11992432220226655070162035502104002508805892183494248545673829691993925491990",
        ],
    ),
];

/// A named preimage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KatCase {
    /// short name, also used for the output file name
    pub name: &'static str,
    /// preimage as decimal strings
    pub preimage: [&'static str; 2],
}

/// The built-in cases, in [`GOLDEN`] order.
pub fn builtin_cases() -> Vec<KatCase> {
    GOLDEN
        .iter()
        .map(|&(name, preimage, _)| KatCase { name, preimage })
        .collect()
}

/// A preimage together with its digest, both as decimal strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KatRecord {
    /// the two preimage elements, as supplied; JSON integers are read as
    /// their decimal text
    #[serde(deserialize_with = "deserialize_preimage")]
    pub preimage: [String; 2],
    /// the two digest elements, canonical decimal
    pub hash: [String; 2],
}

impl KatRecord {
    /// Hash `preimage` and record the result.
    ///
    /// The preimage strings are kept verbatim; the digest is rendered in
    /// canonical decimal.
    pub fn compute(preimage: [&str; 2]) -> Result<Self, KatError> {
        let digest = hash_dec(preimage)?;
        Ok(Self::from_digest(preimage.map(String::from), &digest))
    }

    /// Recompute the digest from the preimage and compare it with the stored
    /// one, digit for digit.
    pub fn verify(&self) -> Result<(), KatError> {
        let [a, b] = &self.preimage;
        let computed = to_dec_strings(&hash_dec([a.as_str(), b.as_str()])?);
        if computed[..] != self.hash[..] {
            return Err(KatError::DigestMismatch {
                preimage: self.preimage.join(", "),
                expected: self.hash.join(", "),
                computed: computed.join(", "),
            });
        }
        Ok(())
    }

    fn from_digest(preimage: [String; 2], digest: &Digest) -> Self {
        let hash = [digest[0].to_string(), digest[1].to_string()];
        Self { preimage, hash }
    }
}

/// Decimal text of a JSON preimage element: a string as-is, or an integer
/// literal of any size.
pub(crate) fn decimal_text(value: Value) -> Result<String, FieldError> {
    match value {
        // with `arbitrary_precision` the literal keeps its source text
        Value::Number(n) => {
            let text = n.to_string();
            let digits = text.strip_prefix('-').unwrap_or(&text);
            if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
                Ok(text)
            } else {
                Err(FieldError::InvalidDecimal(text))
            }
        },
        Value::String(s) => Ok(s),
        other => Err(FieldError::InvalidDecimal(other.to_string())),
    }
}

fn deserialize_preimage<'de, D>(deserializer: D) -> Result<[String; 2], D::Error>
where
    D: Deserializer<'de>,
{
    let [a, b] = <[Value; 2]>::deserialize(deserializer)?;
    Ok([
        decimal_text(a).map_err(D::Error::custom)?,
        decimal_text(b).map_err(D::Error::custom)?,
    ])
}

/// Hash many preimages at once (in parallel with the `parallel` feature),
/// preserving their order.
///
/// All preimages are parsed before any hashing starts, so a malformed entry
/// fails the whole batch.
pub fn hash_records(preimages: &[[String; 2]]) -> Result<Vec<KatRecord>, KatError> {
    let parsed = preimages
        .iter()
        .map(|[a, b]| -> Result<Preimage, KatError> {
            Ok([FieldElement::from_dec_str(a)?, FieldElement::from_dec_str(b)?])
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(preimages
        .iter()
        .zip(hash_batch(&parsed).iter())
        .map(|(preimage, digest)| KatRecord::from_digest(preimage.clone(), digest))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn golden_vectors_hold() {
        for (name, preimage, digest) in GOLDEN {
            let record = KatRecord::compute(preimage).unwrap();
            assert_eq!(record.hash, digest.map(String::from), "case {name}");
            record.verify().unwrap();
        }
    }

    #[test]
    fn builtin_cases_follow_golden_order() {
        let names: Vec<_> = builtin_cases().iter().map(|c| c.name).collect();
        assert_eq!(names, ["simple", "zero", "large"]);
        assert_eq!(builtin_cases()[2].preimage, ["999999999", "888888888"]);
    }

    #[test]
    fn tampered_record_fails_verification() {
        let mut record = KatRecord::compute(["123", "456"]).unwrap();
        record.hash.swap(0, 1);
        match record.verify() {
            Err(KatError::DigestMismatch {
                preimage, computed, ..
            }) => {
                assert_eq!(preimage, "123, 456");
                assert!(computed.starts_with(GOLDEN[0].2[0]));
            },
            other => panic!("expected a mismatch, got {other:?}"),
        }
    }

    #[test]
    fn non_canonical_digest_text_is_a_mismatch() {
        let mut record = KatRecord::compute(["0", "0"]).unwrap();
        record.hash[1].insert(0, '0');
        assert!(matches!(
            record.verify(),
            Err(KatError::DigestMismatch { .. })
        ));
    }

    #[test]
    fn preimage_is_kept_verbatim() {
        let record = KatRecord::compute(["-1", "0"]).unwrap();
        assert_eq!(record.preimage, ["-1".to_string(), "0".to_string()]);
        assert_eq!(
            record.hash,
            KatRecord::compute([
                "21888242871839275222246405745257275088548364400416034343698204186575808495616",
                "0"
            ])
            .unwrap()
            .hash
        );
    }

    #[test]
    fn batch_records_match_single_records() {
        let preimages: Vec<[String; 2]> = GOLDEN
            .iter()
            .map(|(_, p, _)| p.map(String::from))
            .collect();
        let records = hash_records(&preimages).unwrap();
        assert_eq!(records.len(), 3);
        for (record, (_, preimage, digest)) in records.iter().zip(GOLDEN) {
            assert_eq!(record, &KatRecord::compute(preimage).unwrap());
            assert_eq!(record.hash, digest.map(String::from));
        }
    }

    #[test]
    fn batch_rejects_bad_entries() {
        let preimages = vec![
            ["1".to_string(), "2".to_string()],
            ["x".to_string(), "2".to_string()],
        ];
        assert!(matches!(hash_records(&preimages), Err(KatError::Hash(_))));
    }
}
