// Copyright (c) 2024 Espresso Systems (espressosys.com)
// This file is part of the Jellyfish library.

// You should have received a copy of the MIT License
// along with the Jellyfish library. If not, see <https://mit-license.org/>.

//! Round-by-round snapshots of the permutation, for locating the first
//! divergence from a circuit witness.

use ark_std::vec::Vec;
use jf_p2lite_field::FieldElement;

use crate::{
    add_round_constant, constants::STATE_SIZE, mix, pad, sbox_layer, truncate, Digest, Preimage,
    ROUNDS,
};

/// State of one round after each of its three layers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundTrace {
    /// 1-indexed round number, also the round constant
    pub round: u64,
    /// after adding the round constant
    pub after_constant: [FieldElement; STATE_SIZE],
    /// after the S-box layer
    pub after_sbox: [FieldElement; STATE_SIZE],
    /// after the mixing layer, i.e. the input of the next round
    pub after_mix: [FieldElement; STATE_SIZE],
}

/// Same digest as [`crate::permute`], together with one [`RoundTrace`] per
/// round.
pub fn permute_with_trace(preimage: Preimage) -> (Digest, Vec<RoundTrace>) {
    let mut state = pad(preimage);
    let mut rounds = Vec::with_capacity(ROUNDS as usize);
    for round in 1..=ROUNDS {
        add_round_constant(&mut state, round);
        let after_constant = state;
        sbox_layer(&mut state);
        let after_sbox = state;
        mix::matmul(&mut state);
        rounds.push(RoundTrace {
            round,
            after_constant,
            after_sbox,
            after_mix: state,
        });
    }
    (truncate(&state), rounds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::permute;

    fn fe(x: u64) -> FieldElement {
        FieldElement::from(x)
    }

    #[test]
    fn zero_preimage_trace() {
        let (digest, rounds) = permute_with_trace([FieldElement::zero(); 2]);
        assert_eq!(rounds.len(), ROUNDS as usize);

        assert_eq!(rounds[0].round, 1);
        assert_eq!(rounds[0].after_constant, [fe(1); 3]);
        assert_eq!(rounds[0].after_sbox, [fe(1); 3]);
        assert_eq!(rounds[0].after_mix, [fe(6); 3]);

        assert_eq!(rounds[1].after_constant, [fe(8); 3]);
        assert_eq!(rounds[1].after_sbox, [fe(32768); 3]);
        assert_eq!(rounds[1].after_mix, [fe(196608); 3]);

        assert_eq!(
            rounds[2].after_mix,
            [FieldElement::from_dec_str("1762748325866394460895184306").unwrap(); 3]
        );

        let last = &rounds[4];
        assert_eq!(last.round, 5);
        assert_eq!(digest, [last.after_mix[0], last.after_mix[1]]);
        assert_eq!(digest, permute([FieldElement::zero(); 2]));
    }

    #[test]
    fn trace_agrees_with_permute() {
        let preimage = [fe(999_999_999), fe(888_888_888)];
        let (digest, rounds) = permute_with_trace(preimage);
        assert_eq!(digest, permute(preimage));
        for pair in rounds.windows(2) {
            assert_eq!(pair[0].round + 1, pair[1].round);
            let rc = fe(pair[1].round);
            for i in 0..STATE_SIZE {
                assert_eq!(pair[0].after_mix[i] + rc, pair[1].after_constant[i]);
                assert_eq!(pair[1].after_constant[i].sbox(), pair[1].after_sbox[i]);
            }
        }
    }
}
