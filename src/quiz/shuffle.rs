use rand::Rng;

/// Returns a uniformly random permutation of `items` (Fisher-Yates).
///
/// The input slice is left untouched; the permutation is built on a copy.
/// Random subsets are drawn by shuffling and truncating the result.
pub fn shuffle<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = items.to_vec();
    for i in (1..shuffled.len()).rev() {
        let j = rng.gen_range(0..=i);
        shuffled.swap(i, j);
    }
    shuffled
}
