//! Unnormalized WENO weights.
//!
//! `alpha_r = w_r / (eps + sigma_r)^2` rewards smooth stencils (small
//! `sigma_r`) relative to their optimal linear weight `w_r`. Normalizing the
//! alphas of one cell yields its nonlinear weights.

// External dependencies
use num_traits::Float;

/// Regularizer added to every smoothness indicator before squaring.
///
/// Keeps `alpha` finite for perfectly smooth stencils.
pub const EPSILON: f64 = 1e-5;

/// `w / ((eps + sigma) * (eps + sigma))`.
#[inline(always)]
pub fn alpha<T: Float>(w: T, sigma: T, eps: T) -> T {
    let d = eps + sigma;
    w / (d * d)
}

/// [`EPSILON`] in the precision of `T`.
///
/// Built as `1 / 10^5` from exact small integers, so the result is the
/// correctly rounded `1e-5` of `T` and no fallible cast is involved.
#[inline]
pub fn epsilon<T: Float>() -> T {
    let ten = (0..10).fold(T::zero(), |acc, _| acc + T::one());
    T::one() / (ten * ten * ten * ten * ten)
}
