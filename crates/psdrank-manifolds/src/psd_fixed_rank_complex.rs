//! Fixed-rank PSD quotient manifold, complex (Hermitian) variant.
//!
//! The manifold of n×n complex Hermitian positive-semidefinite matrices of
//! rank exactly k, as the quotient of full-rank complex n×k factors by the
//! right action of the unitary group U(k).

use nalgebra::{Complex, DMatrix, SVD};
use rand::RngCore;

use psdrank_core::{
    error::{ManifoldError, Result},
    manifold::Manifold,
    types::Scalar,
};

use crate::psd_fixed_rank::check_sizes;
use crate::quotient;

/// Quotient manifold of n×n Hermitian PSD matrices of rank k, parameterized
/// as X = Y·Yᴴ with Y ∈ ℂ^{n×k}.
///
/// For any k×k unitary Q, Y·Q represents the same X, so the manifold is the
/// set of equivalence classes ℂ^{n×k}/U(k). The projection, retraction, and
/// transport reuse the real variant's kernel with conjugate-transpose in
/// place of transpose; the metric-dependent operations differ:
///
/// - **Dimension**: `2·k·n − k²` (real dimension of the ambient factor space
///   minus the dimension of the unitary orbit group)
/// - **Metric**: twice the real part of the Hermitian contraction, i.e. the
///   usual metric of the complex plane identified with ℝ²
/// - **Distance**: the squared horizontal residual after optimally aligning
///   the two representatives within their orbits via an SVD
///
/// Like the real variant, the geometry breaks down if the factor loses full
/// rank, and `pair_mean` and `logarithmic_map` stay unsupported.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PsdFixedRankComplex {
    n: usize,
    k: usize,
    name: String,
}

impl PsdFixedRankComplex {
    /// Create the manifold of n×n Hermitian PSD matrices of rank k.
    ///
    /// # Errors
    ///
    /// Returns an error if `n == 0`, `k == 0`, or `k > n`.
    pub fn new(n: usize, k: usize) -> Result<Self> {
        check_sizes(n, k)?;
        Ok(Self {
            n,
            k,
            name: format!(
                "YY' quotient manifold of Hermitian {n}x{n} complex matrices of rank {k}"
            ),
        })
    }

    /// Ambient dimension n.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Rank k.
    pub fn k(&self) -> usize {
        self.k
    }
}

impl<T: Scalar> Manifold<T> for PsdFixedRankComplex {
    type Point = DMatrix<Complex<T>>;
    type Tangent = DMatrix<Complex<T>>;

    fn name(&self) -> &str {
        &self.name
    }

    /// `2·k·n` real factor parameters minus the `k²` unitary orbit directions.
    fn dimension(&self) -> usize {
        2 * self.k * self.n - self.k * self.k
    }

    fn typical_distance(&self) -> T {
        <T as Scalar>::from_usize(10 + self.k)
    }

    /// Twice the real part of the Hermitian contraction `Σ conj(uᵢⱼ)·vᵢⱼ`.
    ///
    /// The factor of two identifies ℂ with ℝ² so that each complex degree of
    /// freedom is counted once per real coordinate.
    fn inner_product(
        &self,
        _point: &DMatrix<Complex<T>>,
        u: &DMatrix<Complex<T>>,
        v: &DMatrix<Complex<T>>,
    ) -> Result<T> {
        let two = <T as Scalar>::from_usize(2);
        Ok(two * u.dotc(v).re)
    }

    /// Squared horizontal residual after optimal orbit alignment.
    ///
    /// With `Vᴴ·U = W·Σ·Zᴴ`, the unitary `Q* = W·Zᴴ` best aligns the two
    /// representatives; the value returned is `inner(E, E) / 2` for
    /// `E = U − V·Q*`. It is zero exactly when the two factors represent the
    /// same equivalence class. Note this is the original halved squared
    /// residual, not its square root.
    fn distance(&self, x: &DMatrix<Complex<T>>, y: &DMatrix<Complex<T>>) -> Result<T> {
        let svd = SVD::new(y.adjoint() * x, true, true);
        let w = svd
            .u
            .ok_or_else(|| ManifoldError::numerical_error("SVD failed to compute U"))?;
        let z_t = svd
            .v_t
            .ok_or_else(|| ManifoldError::numerical_error("SVD failed to compute V^H"))?;
        let alignment = w * z_t;
        let e = x - y * alignment;
        let ip = self.inner_product(x, &e, &e)?;
        Ok(ip / <T as Scalar>::from_usize(2))
    }

    fn project_tangent(
        &self,
        point: &DMatrix<Complex<T>>,
        ambient: &DMatrix<Complex<T>>,
    ) -> Result<DMatrix<Complex<T>>> {
        quotient::project_horizontal(point, ambient)
    }

    fn retract(
        &self,
        point: &DMatrix<Complex<T>>,
        tangent: &DMatrix<Complex<T>>,
    ) -> Result<DMatrix<Complex<T>>> {
        Ok(point + tangent)
    }

    /// As in the real variant, the Euclidean gradient of an orbit-invariant
    /// cost is already horizontal.
    fn euclidean_to_riemannian_gradient(
        &self,
        _point: &DMatrix<Complex<T>>,
        euclidean_grad: &DMatrix<Complex<T>>,
    ) -> Result<DMatrix<Complex<T>>> {
        Ok(euclidean_grad.clone())
    }

    fn random_point(&self, rng: &mut dyn RngCore) -> DMatrix<Complex<T>> {
        quotient::gaussian_factor_complex(self.n, self.k, rng)
    }

    fn random_tangent(
        &self,
        point: &DMatrix<Complex<T>>,
        rng: &mut dyn RngCore,
    ) -> Result<DMatrix<Complex<T>>> {
        let h = quotient::gaussian_factor_complex(self.n, self.k, rng);
        let p = quotient::project_horizontal(point, &h)?;
        let nrm = self.norm(point, &p)?;
        Ok(p / Complex::new(nrm, T::zero()))
    }
}
