use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const BASES: &[u8] = b"ACGT";

/// Random DNA sequence of `length` bases.
///
/// A seed makes the output reproducible; without one the RNG is seeded from
/// OS entropy. This is test-data tooling, not part of the transformation
/// core — nothing else in the crate is randomized.
pub fn random_dna(length: usize, seed: Option<u64>) -> String {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    (0..length)
        .map(|_| BASES[rng.gen_range(0..BASES.len())] as char)
        .collect()
}
