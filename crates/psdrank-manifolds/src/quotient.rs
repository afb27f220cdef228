//! Field-generic kernel shared by the real and Hermitian fixed-rank PSD
//! quotient geometries.
//!
//! The projection, retraction, transport, and random-factor logic are
//! identical over both scalar fields once transpose is read as
//! conjugate-transpose; the metric-dependent operations stay in the variant
//! implementations.

use nalgebra::{Complex, ComplexField, DMatrix};
use psdrank_core::{error::Result, linalg::solve_lyapunov_hermitian, types::Scalar};
use rand::RngCore;
use rand_distr::{Distribution, StandardNormal};

/// Projects the ambient matrix `h` onto the horizontal space at the factor `y`.
///
/// The orbit directions at `y` are `y·Ω` for skew-Hermitian `Ω`; the
/// component of `h` along them is found by solving the continuous Lyapunov
/// equation `(YᴴY)·Ω + Ω·(YᴴY) = YᴴH − HᴴY` and subtracted. The result
/// satisfies the horizontality condition `YᴴP = PᴴY` exactly. Requires `y`
/// to have full column rank; a rank-deficient factor surfaces as the
/// Lyapunov solver's `NumericalError`.
pub(crate) fn project_horizontal<E>(y: &DMatrix<E>, h: &DMatrix<E>) -> Result<DMatrix<E>>
where
    E: ComplexField,
    E::RealField: Scalar,
{
    let gram = y.adjoint() * y;
    let skew = y.adjoint() * h - h.adjoint() * y;
    let omega = solve_lyapunov_hermitian(&gram, &skew)?;
    Ok(h - y * omega)
}

/// Samples an n×k factor with i.i.d. standard-normal entries.
pub(crate) fn gaussian_factor<T: Scalar>(n: usize, k: usize, rng: &mut dyn RngCore) -> DMatrix<T> {
    let normal = StandardNormal;
    DMatrix::from_fn(n, k, |_, _| {
        let v: f64 = normal.sample(rng);
        <T as Scalar>::from_f64(v)
    })
}

/// Samples a complex n×k factor with independent standard-normal real and
/// imaginary parts.
pub(crate) fn gaussian_factor_complex<T: Scalar>(
    n: usize,
    k: usize,
    rng: &mut dyn RngCore,
) -> DMatrix<Complex<T>> {
    let normal = StandardNormal;
    DMatrix::from_fn(n, k, |_, _| {
        let re: f64 = normal.sample(rng);
        let im: f64 = normal.sample(rng);
        Complex::new(<T as Scalar>::from_f64(re), <T as Scalar>::from_f64(im))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_projection_removes_orbit_component() {
        let mut rng = StdRng::seed_from_u64(42);
        let y = gaussian_factor::<f64>(6, 3, &mut rng);
        let h = gaussian_factor::<f64>(6, 3, &mut rng);

        let p = project_horizontal(&y, &h).unwrap();

        // Horizontal vectors satisfy YᵀP − PᵀY = 0.
        let skew = y.transpose() * &p - p.transpose() * &y;
        assert!(skew.norm() < 1e-10, "residual skew component {}", skew.norm());
    }

    #[test]
    fn test_projection_rejects_rank_deficient_factor() {
        let mut rng = StdRng::seed_from_u64(43);
        let mut y = gaussian_factor::<f64>(5, 2, &mut rng);
        let first = y.column(0).into_owned();
        y.set_column(1, &first); // collapse to rank one
        let h = gaussian_factor::<f64>(5, 2, &mut rng);

        assert!(project_horizontal(&y, &h).is_err());
    }

    #[test]
    fn test_gaussian_factor_shapes() {
        let mut rng = StdRng::seed_from_u64(44);
        let y = gaussian_factor::<f64>(7, 2, &mut rng);
        assert_eq!(y.shape(), (7, 2));

        let z = gaussian_factor_complex::<f64>(7, 2, &mut rng);
        assert_eq!(z.shape(), (7, 2));
        // Real and imaginary parts are sampled independently; both nonzero.
        assert!(z.iter().any(|c| c.im != 0.0));
    }
}
