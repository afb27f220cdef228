//! Linear-algebra primitives required by the quotient geometry.
//!
//! The horizontal projection of the fixed-rank PSD quotient needs the unique
//! solution of a continuous Lyapunov equation with a Hermitian coefficient.
//! `nalgebra` supplies the eigendecomposition; this module builds the solver
//! on top of it.

use crate::error::{ManifoldError, Result};
use crate::types::Scalar;
use nalgebra::{ComplexField, DMatrix};
use num_traits::{Float, One};

/// Solves the continuous Lyapunov equation `A·X + X·A = Q` for Hermitian `A`.
///
/// With the eigendecomposition `A = V·Λ·Vᴴ` the equation decouples into
/// `(VᴴXV)ᵢⱼ·(λᵢ + λⱼ) = (VᴴQV)ᵢⱼ`, which is solved elementwise. When `Q` is
/// skew-Hermitian the solution is the unique skew-Hermitian `X`.
///
/// # Errors
///
/// Returns [`ManifoldError::DimensionMismatch`] if the operands are not
/// square matrices of the same size, and [`ManifoldError::NumericalError`]
/// when some `λᵢ + λⱼ` is numerically zero. For a positive-definite `A`
/// (such as the Gram matrix `YᴴY` of a full-rank factor) the latter only
/// happens when the factor has lost rank; the failure is fatal for that step
/// and is never retried here.
pub fn solve_lyapunov_hermitian<E>(a: &DMatrix<E>, q: &DMatrix<E>) -> Result<DMatrix<E>>
where
    E: ComplexField,
    E::RealField: Scalar,
{
    if !a.is_square() || a.shape() != q.shape() {
        return Err(ManifoldError::dimension_mismatch(
            format!("square matrices of equal size, lhs {}x{}", a.nrows(), a.ncols()),
            format!("rhs {}x{}", q.nrows(), q.ncols()),
        ));
    }

    let eigen = a.clone().symmetric_eigen();
    let lambda = eigen.eigenvalues;
    let v = eigen.eigenvectors;

    let k = a.nrows();
    let mut spread = <E::RealField as Scalar>::from_f64(0.0);
    for i in 0..k {
        let mag = Float::abs(lambda[i]);
        if mag > spread {
            spread = mag;
        }
    }
    let tol = Float::max(spread, E::RealField::one()) * E::RealField::EPSILON
        * <E::RealField as Scalar>::from_usize(k);

    let q_rot = v.adjoint() * q * &v;
    let mut x_rot = DMatrix::<E>::zeros(k, k);
    for i in 0..k {
        for j in 0..k {
            let denom = lambda[i] + lambda[j];
            if Float::abs(denom) <= tol {
                return Err(ManifoldError::numerical_error(
                    "Lyapunov solve failed: coefficient matrix has a (near-)zero \
                     eigenvalue pair sum; the factor has likely lost full rank",
                ));
            }
            x_rot[(i, j)] = q_rot[(i, j)].clone() / E::from_real(denom);
        }
    }

    Ok(&v * x_rot * v.adjoint())
}
