use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// Helpers producing reproducible operands for property-style tests.
// Added allow(dead_code) because usage across different test crates isn't detected easily.
#[allow(dead_code)]
pub(crate) fn random_pairs(seed: u64, count: usize) -> Vec<(f64, f64)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| (rng.gen_range(-100.0..100.0), rng.gen_range(-100.0..100.0)))
        .collect()
}

#[allow(dead_code)]
pub(crate) fn random_positive(seed: u64, count: usize) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count).map(|_| rng.gen_range(0.1..20.0)).collect()
}
