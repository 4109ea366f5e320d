//! Random Dataset Generation

use rand::Rng;

/// Generate a fresh dataset of `n` integers uniformly drawn from `[0, n)`.
///
/// One dataset is generated per trial; each variant then sorts its own
/// element-for-element copy.
pub fn generate_dataset<R: Rng>(rng: &mut R, n: usize) -> Vec<u32> {
    if n == 0 {
        return Vec::new();
    }
    let bound = n as u32;
    (0..n).map(|_| rng.gen_range(0..bound)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_length_and_value_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let data = generate_dataset(&mut rng, 500);
        assert_eq!(data.len(), 500);
        assert!(data.iter().all(|&v| v < 500));
    }

    #[test]
    fn test_zero_length() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert!(generate_dataset(&mut rng, 0).is_empty());
    }

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let mut a = ChaCha8Rng::seed_from_u64(99);
        let mut b = ChaCha8Rng::seed_from_u64(99);
        assert_eq!(generate_dataset(&mut a, 64), generate_dataset(&mut b, 64));
    }
}
