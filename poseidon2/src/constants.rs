// Copyright (c) 2024 Espresso Systems (espressosys.com)
// This file is part of the Jellyfish library.

// You should have received a copy of the MIT License
// along with the Jellyfish library. If not, see <https://mit-license.org/>.

//! Fixed parameters of the permutation.
//!
//! These must stay identical to the paired circom circuit: any divergence
//! silently yields different digests.

use jf_p2lite_field::FieldElement;

/// t: state size
pub const STATE_SIZE: usize = 3;
/// r: number of state slots carrying the preimage and the digest
pub const RATE: usize = 2;
/// number of rounds, all of them full
pub const ROUNDS: u64 = 5;
/// d: sbox degree
pub const SBOX_DEGREE: u64 = 5;

/// Mixing matrix applied after every S-box layer.
/// [ 2 3 1 ]
/// [ 1 2 3 ]
/// [ 3 1 2 ]
pub const MDS_MATRIX: [[u64; STATE_SIZE]; STATE_SIZE] = [[2, 3, 1], [1, 2, 3], [3, 1, 2]];

/// Constant added to every slot in round `round` (1-indexed): the round
/// index itself.
#[inline(always)]
pub fn round_constant(round: u64) -> FieldElement {
    FieldElement::from(round)
}
