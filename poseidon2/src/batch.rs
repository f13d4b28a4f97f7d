// Copyright (c) 2024 Espresso Systems (espressosys.com)
// This file is part of the Jellyfish library.

// You should have received a copy of the MIT License
// along with the Jellyfish library. If not, see <https://mit-license.org/>.

//! Hashing many independent preimages.
//!
//! Each preimage owns its own state, so jobs need no coordination; with the
//! `parallel` feature they are spread over the rayon thread pool.

use ark_std::vec::Vec;

use crate::{permute, Digest, Preimage};

/// Iterate `data` on the rayon pool when `parallel` is on, sequentially otherwise.
#[cfg(feature = "parallel")]
fn parallelizable_slice_iter<T: Sync>(data: &[T]) -> rayon::slice::Iter<'_, T> {
    use rayon::iter::IntoParallelIterator;
    data.into_par_iter()
}

#[cfg(not(feature = "parallel"))]
fn parallelizable_slice_iter<T>(data: &[T]) -> ark_std::slice::Iter<'_, T> {
    data.iter()
}

/// Hash every preimage; `out[i]` is the digest of `preimages[i]`.
pub fn hash_batch(preimages: &[Preimage]) -> Vec<Digest> {
    #[cfg(feature = "parallel")]
    use rayon::iter::ParallelIterator;

    parallelizable_slice_iter(preimages)
        .map(|preimage| permute(*preimage))
        .collect()
}
