//! fastWeno Shock Reconstruction Examples
//!
//! This example demonstrates features specific to `fastWeno`:
//! - Fifth-order WENO (k = 3) face reconstruction of a shocked profile
//! - Parallel execution using `rayon`
//! - Sequential fallback
//! - `ndarray` integration and vector-valued state

use fastWeno::prelude::*;
use ndarray::{Array1, Array2, Array3, Array4};
use std::time::Instant;

/// Right-face coefficients of the uniform-grid k = 3 stencils, by shift.
const RIGHT_FACE: [[f64; 3]; 3] = [
    [1.0 / 3.0, 5.0 / 6.0, -1.0 / 6.0],
    [-1.0 / 6.0, 5.0 / 6.0, 1.0 / 3.0],
    [1.0 / 3.0, -7.0 / 6.0, 11.0 / 6.0],
];

/// Optimal linear weights for the right face.
const RIGHT_OPTIMAL: [f64; 3] = [0.3, 0.6, 0.1];

fn main() -> Result<(), WenoError> {
    println!("{}", "=".repeat(80));
    println!("fastWeno Shock Reconstruction Examples");
    println!("{}", "=".repeat(80));
    println!();

    example_1_shock_profile()?;
    example_2_parallel_vs_sequential()?;
    example_3_vector_state()?;

    Ok(())
}

/// Cell averages of a Shu-Osher style profile sampled at cell centers.
fn shocked_profile(n_cells: usize) -> Array1<f64> {
    Array1::from_shape_fn(n_cells, |i| {
        let x = -5.0 + 10.0 * (i as f64 + 0.5) / n_cells as f64;
        if x < -4.0 {
            3.857143
        } else {
            1.0 + 0.2 * (5.0 * x).sin()
        }
    })
}

/// Jiang-Shu smoothness indicators for the right face.
fn smoothness(q: &Array1<f64>) -> Array2<f64> {
    let n_cells = q.len();
    Array2::from_shape_fn((n_cells, 3), |(i, r)| {
        if r > i || i - r + 2 >= n_cells {
            return 0.0;
        }
        let (a, b, c) = (q[i - r], q[i - r + 1], q[i - r + 2]);
        let slope = match r {
            0 => 3.0 * a - 4.0 * b + c,
            1 => a - c,
            _ => a - 4.0 * b + 3.0 * c,
        };
        13.0 / 12.0 * (a - 2.0 * b + c).powi(2) + 0.25 * slope * slope
    })
}

/// Optimal weights and coefficients for `n_cells` uniform cells.
fn uniform_grid(n_cells: usize) -> (Array2<f64>, Array4<f64>) {
    let w = Array2::from_shape_fn((n_cells, 3), |(_, r)| RIGHT_OPTIMAL[r]);
    let c = Array4::from_shape_fn((n_cells, 3, 1, 3), |(_, r, _, j)| RIGHT_FACE[r][j]);
    (w, c)
}

/// Example 1: Shock Profile
/// Reconstructs right-face values and inspects the weights at the shock
fn example_1_shock_profile() -> Result<(), WenoError> {
    println!("Example 1: Shock Profile");
    println!("{}", "-".repeat(80));

    let n_cells = 200;
    let q = shocked_profile(n_cells);
    let sigma = smoothness(&q);
    let (w, c) = uniform_grid(n_cells);
    let mut qs = Array2::<f64>::zeros((n_cells, 1));

    let mut weno = Weno::new().order(3).points(1).build()?;
    weno.reconstruct(
        &q.as_weno_view()?,
        0,
        n_cells - 1,
        &sigma.as_weno_view()?,
        &w.as_weno_view()?,
        &c.as_weno_view()?,
        &mut qs.as_weno_view_mut()?,
    )?;

    let (q_min, q_max) = q
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    let (f_min, f_max) = qs
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
    println!("Cell averages range: [{:.6}, {:.6}]", q_min, q_max);
    println!("Face values range:   [{:.6}, {:.6}]", f_min, f_max);

    let wr = weno.nonlinear_weights()?;
    println!();
    println!("{:>6} {:>12} {:>12} {:>12} {:>12}", "cell", "q", "wr[0]", "wr[1]", "wr[2]");
    for i in 16..24 {
        println!(
            "{:>6} {:>12.6} {:>12.3e} {:>12.3e} {:>12.3e}",
            i,
            q[i],
            wr.at([i, 0]),
            wr.at([i, 1]),
            wr.at([i, 2])
        );
    }

    println!();
    Ok(())
}

/// Example 2: Parallel vs Sequential
/// Compares timings and checks that both paths agree bit for bit
fn example_2_parallel_vs_sequential() -> Result<(), WenoError> {
    println!("Example 2: Parallel vs Sequential");
    println!("{}", "-".repeat(80));

    let n_cells = 200_000;
    let q = shocked_profile(n_cells);
    let sigma = smoothness(&q);
    let (w, c) = uniform_grid(n_cells);

    let mut outputs = Vec::new();
    for parallel in [false, true] {
        let mut qs = Array2::<f64>::zeros((n_cells, 1));
        let mut weno = Weno::new().order(3).points(1).parallel(parallel).build()?;

        let start = Instant::now();
        weno.reconstruct(
            &q.as_weno_view()?,
            0,
            n_cells - 1,
            &sigma.as_weno_view()?,
            &w.as_weno_view()?,
            &c.as_weno_view()?,
            &mut qs.as_weno_view_mut()?,
        )?;
        let duration = start.elapsed();

        let mode = if parallel { "Parallel" } else { "Sequential" };
        println!("{:<12} {} cells in {:?}", mode, n_cells, duration);
        outputs.push(qs);
    }

    println!("Identical results: {}", outputs[0] == outputs[1]);
    println!();
    Ok(())
}

/// Example 3: Vector State
/// Reconstructs every component of an interleaved state array in place
fn example_3_vector_state() -> Result<(), WenoError> {
    println!("Example 3: Vector State");
    println!("{}", "-".repeat(80));

    let (n_cells, n_components) = (100, 3);
    let density = shocked_profile(n_cells);
    let state = Array2::from_shape_fn((n_cells, n_components), |(i, m)| {
        density[i] * (1.0 + m as f64)
    });
    let (w, c) = uniform_grid(n_cells);
    let mut faces = Array3::<f64>::zeros((n_cells, 1, n_components));

    let mut weno = Weno::new().order(3).points(1).build()?;
    for m in 0..n_components {
        let component = state.column(m).to_owned();
        let sigma = smoothness(&component);
        weno.reconstruct(
            &component_view(&state, m)?,
            0,
            n_cells - 1,
            &sigma.as_weno_view()?,
            &w.as_weno_view()?,
            &c.as_weno_view()?,
            &mut component_view_mut(&mut faces, m)?,
        )?;
    }

    println!("{:>6} {:>12} {:>12} {:>12}", "cell", "q[0]", "q[1]", "q[2]");
    for i in (0..n_cells).step_by(20) {
        println!(
            "{:>6} {:>12.6} {:>12.6} {:>12.6}",
            i,
            faces[[i, 0, 0]],
            faces[[i, 0, 1]],
            faces[[i, 0, 2]]
        );
    }

    println!();
    Ok(())
}
