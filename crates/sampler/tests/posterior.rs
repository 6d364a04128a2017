use std::sync::{Arc, Mutex};

use approx::assert_abs_diff_eq;
use ndarray::{Array2, array};
use rand::SeedableRng;
use rand::rngs::StdRng;
use statrs::statistics::Statistics;
use stochmat_assessment::is_transition_matrix;
use stochmat_matrix::{CsrMatrix, DiaMatrix, GeneratorMatrix};
use stochmat_sampler::{NonReversibleSampler, SamplerConfig};

fn seeded<M: stochmat_matrix::MatrixView + ?Sized>(counts: &M, seed: u64) -> NonReversibleSampler {
    NonReversibleSampler::from_config(counts, &SamplerConfig::new().with_seed(seed)).unwrap()
}

/// Collects `P[row, col]` over `n_draws` successive updates.
fn draws_of(sampler: &mut NonReversibleSampler, row: usize, col: usize, n_draws: usize) -> Vec<f64> {
    (0..n_draws)
        .map(|_| {
            sampler.update(1);
            sampler.transition_matrix()[[row, col]]
        })
        .collect()
}

#[test]
fn every_draw_is_a_transition_matrix() {
    let z = array![
        [12.0, 3.0, 0.0, 0.0],
        [2.0, 30.0, 4.0, 0.0],
        [0.0, 5.0, 0.0, 1.0],
        [0.0, 0.0, 0.0, 0.0]
    ];
    let mut s = seeded(&z, 1);
    assert!(is_transition_matrix(s.transition_matrix(), 1e-12).unwrap());
    for _ in 0..200 {
        s.update(1);
        assert!(is_transition_matrix(s.transition_matrix(), 1e-12).unwrap());
    }
}

#[test]
fn heavy_row_concentrates_on_its_frequency() {
    let mut z = Array2::zeros((3, 3));
    z[[0, 0]] = 10_000.0;
    z[[1, 0]] = 1.0;
    z[[2, 0]] = 7_000.0;
    z[[2, 1]] = 3_000.0;
    let mut s = seeded(&z, 2);

    let heavy = draws_of(&mut s, 0, 0, 500);
    let light = draws_of(&mut s, 1, 0, 500);
    let split = draws_of(&mut s, 2, 0, 500);

    // Beta(10001, 2): mean ~0.9998, variance ~2e-8.
    assert_abs_diff_eq!(heavy.iter().mean(), 10_001.0 / 10_003.0, epsilon = 1e-4);
    assert!(heavy.iter().variance() < 1e-6);
    // Beta(2, 2): variance 0.05.
    assert!(light.iter().variance() > 1e-2);
    // Converges to the empirical 70/30 split.
    assert_abs_diff_eq!(split.iter().mean(), 0.7, epsilon = 5e-3);
    assert!(split.iter().variance() < 1e-4);
}

#[test]
fn unobserved_row_is_flat_dirichlet() {
    let z = Array2::<f64>::zeros((4, 4));
    let mut s = seeded(&z, 3);
    let draws = draws_of(&mut s, 2, 1, 4000);
    // Dirichlet(1, 1, 1, 1) marginal is Beta(1, 3): mean 0.25.
    assert_abs_diff_eq!(draws.iter().mean(), 0.25, epsilon = 0.02);
}

#[test]
fn sparse_counts_match_dense_counts() {
    let dense = array![[5.0, 0.0, 1.0], [0.0, 2.0, 0.0], [3.0, 0.0, 4.0]];
    let mut triplets = Vec::new();
    for ((i, j), &v) in dense.indexed_iter() {
        if v != 0.0 {
            triplets.push((i, j, v));
        }
    }
    let csr = CsrMatrix::from_triplets(3, 3, &triplets).unwrap();
    let band = DiaMatrix::new(
        3,
        3,
        array![[5.0, 2.0, 4.0], [0.0, 0.0, 1.0], [3.0, 0.0, 0.0]],
        vec![0, 2, -2],
    )
    .unwrap();

    let from_dense = seeded(&dense, 4);
    let from_csr = seeded(&GeneratorMatrix::from(csr), 4);
    let from_band = seeded(&band, 4);
    assert_eq!(from_csr.alpha(), from_dense.alpha());
    assert_eq!(from_band.alpha(), from_dense.alpha());
    // Same seed and parameters, same first draw.
    assert_eq!(from_csr.transition_matrix(), from_dense.transition_matrix());
}

#[test]
fn stationary_distribution_is_fresh_each_call() {
    let z = array![[40.0, 10.0], [20.0, 30.0]];
    let mut s = seeded(&z, 5);
    let (_, first) = s.sample(1, true).unwrap().into_parts();
    let (_, second) = s.sample(1, true).unwrap().into_parts();
    let first = first.unwrap();
    let second = second.unwrap();
    assert_abs_diff_eq!(first.sum(), 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(second.sum(), 1.0, epsilon = 1e-12);
    assert_ne!(first, second);
    assert_eq!(s.n_updates(), 3);
}

#[test]
fn caller_supplied_rng() {
    let z = array![[1.0, 2.0], [3.0, 4.0]];
    let config = SamplerConfig::new();
    let a = NonReversibleSampler::with_rng(&z, &config, StdRng::seed_from_u64(8)).unwrap();
    let b = NonReversibleSampler::with_rng(&z, &config, StdRng::seed_from_u64(8)).unwrap();
    assert_eq!(a.transition_matrix(), b.transition_matrix());
}

#[test]
fn shared_behind_a_lock() {
    let z = array![[3.0, 1.0], [1.0, 3.0]];
    let sampler = Arc::new(Mutex::new(seeded(&z, 9)));
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let sampler = Arc::clone(&sampler);
            std::thread::spawn(move || {
                for _ in 0..25 {
                    sampler.lock().unwrap().update(1);
                }
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }
    let s = sampler.lock().unwrap();
    assert_eq!(s.n_updates(), 101);
    assert!(is_transition_matrix(s.transition_matrix(), 1e-12).unwrap());
}
