//! WENO reconstruction benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability (10K to 1M cells)
//! - Stencil order (k = 2 to 5)
//! - Evaluation points per cell
//! - Individual kernels (weights, stencils, combination)
//! - Pathological inputs (shocks, noise, constant fields)
//!
//! For serial execution, use `FASTWENO_BACKEND=serial cargo bench`.
//! For parallel execution, use `FASTWENO_BACKEND=parallel cargo bench`.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use fastWeno::prelude::*;
use rand::prelude::*;
use rand_distr::Normal;
use std::env;
use std::f64::consts::PI;
use std::hint::black_box;

// ============================================================================
// Helper Functions
// ============================================================================

fn get_config() -> (bool, &'static str) {
    match env::var("FASTWENO_BACKEND").ok().as_deref() {
        Some("cpu_serial") | Some("serial") => (false, "serial"),
        Some("cpu") | Some("parallel") | _ => (true, "parallel"),
    }
}

/// Owned inputs of one `(N, k, n)` reconstruction step.
struct Problem {
    n_cells: usize,
    k: usize,
    n: usize,
    q: Vec<f64>,
    sigma: Vec<f64>,
    w: Vec<f64>,
    c: Vec<f64>,
}

impl Problem {
    /// Builds smoothness indicators and coefficients around `q`.
    ///
    /// The coefficients are random but fixed; kernel cost does not depend on
    /// their values. Smoothness indicators are sums of squared differences
    /// over each stencil.
    fn new(q: Vec<f64>, k: usize, n: usize, seed: u64) -> Self {
        let n_cells = q.len();
        let mut rng = StdRng::seed_from_u64(seed);

        let mut sigma = vec![0.0; n_cells * k];
        for i in 0..n_cells {
            for r in 0..k {
                if r > i || i - r + k > n_cells {
                    continue;
                }
                let window = &q[i - r..i - r + k];
                sigma[i * k + r] = window.windows(2).map(|d| (d[1] - d[0]).powi(2)).sum();
            }
        }

        let w = (0..n_cells * k).map(|_| rng.random_range(0.05..1.0)).collect();
        let c = (0..n_cells * k * n * k)
            .map(|_| rng.random_range(-1.0..1.0))
            .collect();

        Self {
            n_cells,
            k,
            n,
            q,
            sigma,
            w,
            c,
        }
    }

    fn run(&self, parallel: bool) -> Vec<f64> {
        let (n_cells, k, n) = (self.n_cells, self.k, self.n);
        let mut qs = vec![0.0; n_cells * n];
        Weno::new()
            .order(k)
            .points(n)
            .parallel(parallel)
            .build()
            .unwrap()
            .reconstruct(
                &ArrayView::from_shape(&self.q, [n_cells]).unwrap(),
                0,
                n_cells - 1,
                &ArrayView::from_shape(&self.sigma, [n_cells, k]).unwrap(),
                &ArrayView::from_shape(&self.w, [n_cells, k]).unwrap(),
                &ArrayView::from_shape(&self.c, [n_cells, k, n, k]).unwrap(),
                &mut ArrayViewMut::from_shape(&mut qs, [n_cells, n]).unwrap(),
            )
            .unwrap();
        qs
    }
}

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Generate smooth sinusoidal cell averages with Gaussian noise.
fn generate_sine_data(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise_dist = Normal::new(0.0, 0.01).unwrap();

    (0..size)
        .map(|i| {
            let x = (i as f64 + 0.5) / size as f64;
            (2.0 * PI * x).sin() + noise_dist.sample(&mut rng)
        })
        .collect()
}

/// Generate a Sod-like profile with two discontinuities.
fn generate_shock_data(size: usize) -> Vec<f64> {
    (0..size)
        .map(|i| match i * 4 / size {
            0 => 1.0,
            1 | 2 => 0.426,
            _ => 0.125,
        })
        .collect()
}

/// Generate high-noise data (SNR < 1).
fn generate_high_noise_data(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise_dist = Normal::new(0.0, 2.0).unwrap();

    (0..size)
        .map(|i| {
            let x = (i as f64 + 0.5) / size as f64;
            0.5 * (2.0 * PI * x).sin() + noise_dist.sample(&mut rng)
        })
        .collect()
}

// ============================================================================
// Benchmark Functions
// ============================================================================

fn bench_scalability(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("scalability_{}", mode_name));
    group.sample_size(30);

    for size in [10_000, 100_000, 1_000_000] {
        group.throughput(Throughput::Elements(size as u64));

        let problem = Problem::new(generate_sine_data(size, 42), 3, 2, 7);

        group.bench_with_input(BenchmarkId::new("weno5", size), &size, |b, _| {
            b.iter(|| black_box(&problem).run(use_parallel))
        });
    }
    group.finish();
}

fn bench_order(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("order_{}", mode_name));
    group.sample_size(50);

    let size = 100_000;
    let q = generate_sine_data(size, 42);

    for k in [2, 3, 4, 5] {
        let problem = Problem::new(q.clone(), k, 2, 7);
        group.bench_with_input(BenchmarkId::new("reconstruct", k), &k, |b, _| {
            b.iter(|| black_box(&problem).run(use_parallel))
        });
    }
    group.finish();
}

fn bench_points(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("points_{}", mode_name));
    group.sample_size(50);

    let size = 100_000;
    let q = generate_sine_data(size, 42);

    for n in [1, 2, 4] {
        let problem = Problem::new(q.clone(), 3, n, 7);
        group.bench_with_input(BenchmarkId::new("reconstruct", n), &n, |b, _| {
            b.iter(|| black_box(&problem).run(use_parallel))
        });
    }
    group.finish();
}

fn bench_kernels(c: &mut Criterion) {
    let mut group = c.benchmark_group("kernels");
    group.sample_size(50);

    let size = 100_000;
    let problem = Problem::new(generate_sine_data(size, 42), 3, 2, 7);
    let (n_cells, k, n) = (problem.n_cells, problem.k, problem.n);
    let q = ArrayView::from_shape(&problem.q, [n_cells]).unwrap();
    let sigma = ArrayView::from_shape(&problem.sigma, [n_cells, k]).unwrap();
    let w = ArrayView::from_shape(&problem.w, [n_cells, k]).unwrap();
    let coeffs = ArrayView::from_shape(&problem.c, [n_cells, k, n, k]).unwrap();

    let mut wr = vec![0.0; n_cells * k];
    let mut qr = vec![0.0; n_cells * k * n];
    let mut qs = vec![0.0; n_cells * n];

    group.bench_function("compute_weights", |b| {
        b.iter(|| {
            let mut wr_view = ArrayViewMut::from_shape(&mut wr, [n_cells, k]).unwrap();
            compute_weights(0, n_cells - 1, &sigma, &w, &mut wr_view).unwrap()
        })
    });

    group.bench_function("compute_weights_parallel", |b| {
        b.iter(|| {
            let mut wr_view = ArrayViewMut::from_shape(&mut wr, [n_cells, k]).unwrap();
            compute_weights_parallel(0, n_cells - 1, &sigma, &w, &mut wr_view).unwrap()
        })
    });

    group.bench_function("reconstruct_stencils", |b| {
        b.iter(|| {
            let mut qr_view = ArrayViewMut::from_shape(&mut qr, [n_cells, k, n]).unwrap();
            reconstruct_stencils(&q, 0, 0, n_cells - 1, &coeffs, &mut qr_view).unwrap()
        })
    });

    group.bench_function("combine", |b| {
        b.iter(|| {
            let wr_view = ArrayView::from_shape(&wr, [n_cells, k]).unwrap();
            let qr_view = ArrayView::from_shape(&qr, [n_cells, k, n]).unwrap();
            let mut qs_view = ArrayViewMut::from_shape(&mut qs, [n_cells, n]).unwrap();
            combine(&wr_view, &qr_view, 0, 0, n_cells - 1, &mut qs_view).unwrap()
        })
    });

    group.finish();
}

fn bench_pathological(c: &mut Criterion) {
    let (use_parallel, mode_name) = get_config();
    let mut group = c.benchmark_group(format!("pathological_{}", mode_name));
    group.sample_size(50);

    let size = 100_000;

    // Discontinuities
    let shock = Problem::new(generate_shock_data(size), 3, 2, 7);
    group.bench_function("shock", |b| {
        b.iter(|| black_box(&shock).run(use_parallel))
    });

    // High noise
    let noisy = Problem::new(generate_high_noise_data(size, 42), 3, 2, 7);
    group.bench_function("high_noise", |b| {
        b.iter(|| black_box(&noisy).run(use_parallel))
    });

    // Constant field, every smoothness indicator is zero
    let constant = Problem::new(vec![5.0; size], 3, 2, 7);
    group.bench_function("constant", |b| {
        b.iter(|| black_box(&constant).run(use_parallel))
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_scalability,
    bench_order,
    bench_points,
    bench_kernels,
    bench_pathological,
);

criterion_main!(benches);
