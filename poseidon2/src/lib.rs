// Copyright (c) 2024 Espresso Systems (espressosys.com)
// This file is part of the Jellyfish library.

// You should have received a copy of the MIT License
// along with the Jellyfish library. If not, see <https://mit-license.org/>.

//! A reduced-round, Poseidon2-style permutation hash over the BN254 scalar
//! field.
//!
//! Parameters `(t, d, rounds) = (3, 5, 5)`: every round adds the round index
//! to all slots, applies `x -> x^5` to all slots and multiplies by a fixed
//! 3x3 matrix (see [`constants`]). A 2-element preimage is zero-padded to the
//! width-3 state; the digest is the first two slots of the final state.
//!
//! This is NOT the published Poseidon2 instance: round constants are the bare
//! round indices and there are no partial rounds. It reproduces, bit for bit,
//! the 5-round circom circuit it is paired with, and must not be "upgraded".

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(missing_docs)]

pub mod batch;
pub mod constants;
mod errors;
mod mix;
pub mod trace;

use ark_std::vec::Vec;
use jf_p2lite_field::FieldElement;

pub use batch::hash_batch;
pub use constants::{RATE, ROUNDS, STATE_SIZE};
pub use errors::P2Error;
pub use trace::{permute_with_trace, RoundTrace};

/// Hash input: two field elements.
pub type Preimage = [FieldElement; RATE];
/// Hash output: the first two slots of the permuted state.
pub type Digest = [FieldElement; RATE];

/// Hash a 2-element preimage.
///
/// The state is `[preimage[0], preimage[1], 0]`, permuted for [`ROUNDS`]
/// rounds and truncated to its first two slots.
pub fn permute(preimage: Preimage) -> Digest {
    let mut state = pad(preimage);
    permute_state_mut(&mut state);
    truncate(&state)
}

/// Apply all rounds to a full width-3 state in place.
pub fn permute_state_mut(state: &mut [FieldElement; STATE_SIZE]) {
    for round in 1..=ROUNDS {
        add_round_constant(state, round);
        sbox_layer(state);
        mix::matmul(state);
    }
}

/// Hash a preimage given as decimal strings.
///
/// Values outside `[0, p)`, including negative ones, are reduced rather than
/// rejected.
pub fn hash_dec(preimage: [&str; RATE]) -> Result<Digest, P2Error> {
    let a = FieldElement::from_dec_str(preimage[0])?;
    let b = FieldElement::from_dec_str(preimage[1])?;
    Ok(permute([a, b]))
}

/// Hash a preimage of unchecked length, rejecting anything but exactly
/// [`RATE`] elements.
pub fn hash_slice(preimage: &[FieldElement]) -> Result<Digest, P2Error> {
    let preimage: Preimage = preimage
        .try_into()
        .map_err(|_| P2Error::InvalidInputShape(preimage.len()))?;
    Ok(permute(preimage))
}

/// Render a digest (or preimage) as decimal strings.
pub fn to_dec_strings(elems: &[FieldElement]) -> Vec<ark_std::string::String> {
    use ark_std::string::ToString;
    elems.iter().map(ToString::to_string).collect()
}

#[inline(always)]
pub(crate) fn pad(preimage: Preimage) -> [FieldElement; STATE_SIZE] {
    [preimage[0], preimage[1], FieldElement::zero()]
}

#[inline(always)]
pub(crate) fn truncate(state: &[FieldElement; STATE_SIZE]) -> Digest {
    [state[0], state[1]]
}

/// `s -> s + r` on every slot
#[inline(always)]
pub(crate) fn add_round_constant(state: &mut [FieldElement; STATE_SIZE], round: u64) {
    let rc = constants::round_constant(round);
    for s in state.iter_mut() {
        *s += rc;
    }
}

/// `s -> s^5` on every slot (full S-box layer)
#[inline(always)]
pub(crate) fn sbox_layer(state: &mut [FieldElement; STATE_SIZE]) {
    for s in state.iter_mut() {
        *s = s.sbox();
    }
}
