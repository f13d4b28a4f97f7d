// Copyright (c) 2024 Espresso Systems (espressosys.com)
// This file is part of the Jellyfish library.

// You should have received a copy of the MIT License
// along with the Jellyfish library. If not, see <https://mit-license.org/>.

//! Linear layer

use jf_p2lite_field::FieldElement;

use crate::constants::{MDS_MATRIX, STATE_SIZE};

#[inline(always)]
/// x := M * x where M is [`MDS_MATRIX`]
pub(crate) fn matmul(state: &mut [FieldElement; STATE_SIZE]) {
    // every output row reads the whole pre-mix state
    let input = *state;
    for (out, row) in state.iter_mut().zip(MDS_MATRIX.iter()) {
        *out = row
            .iter()
            .zip(input.iter())
            .fold(FieldElement::zero(), |acc, (&coeff, &x)| {
                acc + FieldElement::from(coeff) * x
            });
    }
}
