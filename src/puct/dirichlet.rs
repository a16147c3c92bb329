//! Symmetric Dirichlet(alpha) sampling for root exploration noise, built
//! from `rand_distr::Gamma` (`rand` alone has no Dirichlet/Gamma
//! distribution): drawing k i.i.d. Gamma(alpha, 1) samples and
//! normalizing them to sum to 1 yields a draw from Dir(alpha, ..., alpha).

use rand::Rng;
use rand_distr::{Distribution, Gamma};

/// Draws `k` i.i.d. `Gamma(alpha, 1)` samples and normalizes them to a
/// point on the simplex, which is exactly a draw from `Dir(alpha, ..., alpha)`.
pub fn sample_dirichlet<R: Rng>(rng: &mut R, k: usize, alpha: f64) -> Vec<f64> {
    if k == 0 {
        return Vec::new();
    }
    let gamma = Gamma::new(alpha, 1.0).expect("alpha must be positive");
    let samples: Vec<f64> = (0..k).map(|_| gamma.sample(rng)).collect();
    let sum: f64 = samples.iter().sum();
    if sum <= 0.0 {
        return vec![1.0 / k as f64; k];
    }
    samples.iter().map(|s| s / sum).collect()
}

/// Blends `noise` into `priors` with weight `epsilon`, then renormalizes.
pub fn mix_and_renormalize(priors: &mut [f64], noise: &[f64], epsilon: f64) {
    for (p, n) in priors.iter_mut().zip(noise) {
        *p = (1.0 - epsilon) * *p + epsilon * n;
    }
    let sum: f64 = priors.iter().sum();
    if sum > 0.0 {
        for p in priors.iter_mut() {
            *p /= sum;
        }
    }
}
