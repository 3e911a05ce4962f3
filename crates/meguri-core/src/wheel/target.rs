use rand::Rng;

/// Ten full turns.
pub const DEFAULT_MIN_ROTATION: f64 = 3600.0;

/// Total rotation for a new spin: a whole-degree offset in `0..360` on top of
/// `min_rotation`.
pub fn generate_target<R: Rng + ?Sized>(rng: &mut R, min_rotation: f64) -> f64 {
    f64::from(rng.random_range(0..360u32)) + min_rotation
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn test_target_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let target = generate_target(&mut rng, DEFAULT_MIN_ROTATION);
            assert!((3600.0..3960.0).contains(&target));
            assert_eq!(target.fract(), 0.0);
        }
    }

    #[test]
    fn test_targets_vary_between_spins() {
        let mut rng = StdRng::seed_from_u64(42);
        let targets: Vec<f64> = (0..20).map(|_| generate_target(&mut rng, 720.0)).collect();
        assert!(targets.iter().any(|t| *t != targets[0]));
    }
}
