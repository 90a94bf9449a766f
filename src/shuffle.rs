use rand::Rng;

/// Shuffle a slice in place using Fisher-Yates.
///
/// Walks from the last index down, swapping each element with one chosen
/// uniformly from `[0, i]`, so every permutation is equally likely.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}
