//! Shuffle planning.
//! Reorders the collected batch into a uniformly random permutation that
//! defines the final numbering; never touches the filesystem.

use rand::seq::SliceRandom;

/// Shuffle the batch in place (unbiased Fisher–Yates, OS-seeded).
/// Repeated invocations over the same directory produce different orders.
pub fn shuffle_batch<T>(batch: &mut [T]) {
    let mut rng = rand::rng();
    batch.shuffle(&mut rng);
}
