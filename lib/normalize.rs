//! Normalization and sign-fixing of real-valued wavefunctions.

use ndarray::{ self as nd, Ix1 };

/// Calculate the probability norm `Σ ψ_k² dx` of a wavefunction via the
/// trapezoidal rule.
///
/// *Panics if `q` has length less than 2*.
pub fn wf_norm<S>(q: &nd::ArrayBase<S, Ix1>, dx: f64) -> f64
where S: nd::Data<Elem = f64>
{
    let n: usize = q.len();
    (dx / 2.0) * (
        q[0].powi(2)
        + 2.0 * q.iter().skip(1).take(n - 2).map(|qk| qk.powi(2)).sum::<f64>()
        + q[n - 1].powi(2)
    )
}

/// Rescale a wavefunction in place to unit probability norm.
///
/// *Panics if `q` has length less than 2*.
pub fn wf_renormalize<S>(q: &mut nd::ArrayBase<S, Ix1>, dx: f64)
where S: nd::DataMut<Elem = f64>
{
    let norm = wf_norm(q, dx).sqrt();
    q.iter_mut().for_each(|qk| { *qk /= norm; });
}

/// Return a copy of a wavefunction rescaled to unit probability norm.
///
/// *Panics if `q` has length less than 2*.
pub fn wf_normalized<S>(q: &nd::ArrayBase<S, Ix1>, dx: f64) -> nd::Array1<f64>
where S: nd::Data<Elem = f64>
{
    let norm = wf_norm(q, dx).sqrt();
    q.mapv(|qk| qk / norm)
}

/// Fix the overall sign of a wavefunction so that its largest-magnitude
/// component is positive (ties go to the first occurrence).
///
/// Eigenvectors are only defined up to a sign, which LAPACK chooses
/// arbitrarily; pinning it keeps repeated runs and different backends
/// directionally consistent. Idempotent.
pub fn fix_sign<S>(q: &mut nd::ArrayBase<S, Ix1>)
where S: nd::DataMut<Elem = f64>
{
    let peak
        = q.iter()
        .fold(0.0_f64, |acc, qk| {
            if qk.abs() > acc.abs() { *qk } else { acc }
        });
    if peak < 0.0 {
        q.iter_mut().for_each(|qk| { *qk = -*qk; });
    }
}

#[cfg(test)]
mod tests {
    use approx::{ assert_abs_diff_eq, assert_relative_eq };
    use ndarray as nd;
    use super::*;

    #[test]
    fn norm_of_constant_function() {
        // trapezoidal rule is exact for a constant
        let q = nd::Array1::from_elem(11, 2.0);
        assert_relative_eq!(wf_norm(&q, 0.1), 4.0, epsilon = 1e-12);
    }

    #[test]
    fn renormalize_gives_unit_norm() {
        let x: nd::Array1<f64> = nd::Array1::linspace(-5.0, 5.0, 501);
        let mut q = x.mapv(|xk| (-xk.powi(2)).exp());
        wf_renormalize(&mut q, 10.0 / 500.0);
        assert_abs_diff_eq!(wf_norm(&q, 10.0 / 500.0), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn normalization_is_idempotent() {
        let x: nd::Array1<f64> = nd::Array1::linspace(-5.0, 5.0, 501);
        let dx = 10.0 / 500.0;
        let once = wf_normalized(&x.mapv(|xk| (-xk.powi(2)).exp()), dx);
        let twice = wf_normalized(&once, dx);
        for (a, b) in once.iter().zip(&twice) {
            assert_abs_diff_eq!(a, b, epsilon = 1e-12);
        }
    }

    #[test]
    fn fix_sign_flips_negative_peak() {
        let mut q = nd::array![0.1, -0.9, 0.3];
        fix_sign(&mut q);
        assert_relative_eq!(q[1], 0.9);
        assert_relative_eq!(q[0], -0.1);
    }

    #[test]
    fn fix_sign_leaves_positive_peak_alone() {
        let mut q = nd::array![-0.1, 0.9, 0.3];
        fix_sign(&mut q);
        assert_relative_eq!(q[0], -0.1);
        assert_relative_eq!(q[1], 0.9);
    }

    #[test]
    fn fix_sign_is_idempotent() {
        let mut q = nd::array![0.5, -0.5, -0.7];
        fix_sign(&mut q);
        let once = q.clone();
        fix_sign(&mut q);
        assert_eq!(q, once);
    }
}
