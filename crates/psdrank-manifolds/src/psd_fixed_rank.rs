//! Fixed-rank PSD quotient manifold, real variant.
//!
//! The manifold of n×n symmetric positive-semidefinite matrices of rank
//! exactly k, as the quotient of full-rank n×k factors by the right action
//! of the orthogonal group O(k).

use nalgebra::DMatrix;
use rand::RngCore;

use psdrank_core::{
    error::Result,
    manifold::Manifold,
    types::Scalar,
};

use crate::quotient;

/// Quotient manifold of n×n symmetric PSD matrices of rank k, parameterized
/// as X = Y·Yᵀ with Y ∈ ℝ^{n×k}.
///
/// # Mathematical Definition
///
/// A point X is represented by any full-rank factor Y with X = Y·Yᵀ; since
/// (Y·Q)(Y·Q)ᵀ = Y·Yᵀ for every orthogonal Q, factors are grouped into the
/// equivalence class {Y·Q : Q ∈ O(k)} and the set of classes is a Riemannian
/// quotient manifold. Tangent vectors are n×k matrices Ydot in the
/// *horizontal space* at Y, with the ambient derivative
/// `Xdot = Y·Ydotᵀ + Ydot·Yᵀ`. The metric is the Euclidean metric on the
/// factor.
///
/// # Properties
///
/// - **Dimension**: `k·n − k·(k−1)/2`
/// - **Metric**: Frobenius inner product on the horizontal space
/// - **Retraction**: `Y + U` (the total space is flat)
///
/// The geometry is not complete: if optimization drives Y rank-deficient,
/// the horizontal projection fails with a numerical error. Use this geometry
/// only when the points of interest are expected to have rank exactly k, and
/// reduce k otherwise.
///
/// `distance`, `logarithmic_map`, and `pair_mean` have no closed form here
/// and signal `NotImplemented`.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PsdFixedRank {
    n: usize,
    k: usize,
    name: String,
}

impl PsdFixedRank {
    /// Create the manifold of n×n symmetric PSD matrices of rank k.
    ///
    /// # Errors
    ///
    /// Returns an error if `n == 0`, `k == 0`, or `k > n`.
    pub fn new(n: usize, k: usize) -> Result<Self> {
        check_sizes(n, k)?;
        Ok(Self {
            n,
            k,
            name: format!("YY' quotient manifold of {n}x{n} PSD matrices of rank {k}"),
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

pub(crate) fn check_sizes(n: usize, k: usize) -> Result<()> {
    use psdrank_core::error::ManifoldError;
    if n == 0 || k == 0 {
        return Err(ManifoldError::invalid_point(
            "fixed-rank PSD manifold requires n > 0 and k > 0",
        ));
    }
    if k > n {
        return Err(ManifoldError::invalid_point(format!(
            "rank k={k} cannot exceed ambient dimension n={n}"
        )));
    }
    Ok(())
}

impl<T: Scalar> Manifold<T> for PsdFixedRank {
    type Point = DMatrix<T>;
    type Tangent = DMatrix<T>;

    fn name(&self) -> &str {
        &self.name
    }

    /// `k·n` factor parameters minus the `k·(k−1)/2` orbit directions.
    fn dimension(&self) -> usize {
        self.k * self.n - self.k * (self.k - 1) / 2
    }

    fn typical_distance(&self) -> T {
        <T as Scalar>::from_usize(10 + self.k)
    }

    /// Euclidean (Frobenius) inner product on the total space.
    fn inner_product(&self, _point: &DMatrix<T>, u: &DMatrix<T>, v: &DMatrix<T>) -> Result<T> {
        Ok(u.dot(v))
    }

    fn project_tangent(&self, point: &DMatrix<T>, ambient: &DMatrix<T>) -> Result<DMatrix<T>> {
        quotient::project_horizontal(point, ambient)
    }

    fn retract(&self, point: &DMatrix<T>, tangent: &DMatrix<T>) -> Result<DMatrix<T>> {
        Ok(point + tangent)
    }

    /// The Euclidean gradient of an orbit-invariant cost is already
    /// horizontal, so no projection is needed.
    fn euclidean_to_riemannian_gradient(
        &self,
        _point: &DMatrix<T>,
        euclidean_grad: &DMatrix<T>,
    ) -> Result<DMatrix<T>> {
        Ok(euclidean_grad.clone())
    }

    fn random_point(&self, rng: &mut dyn RngCore) -> DMatrix<T> {
        quotient::gaussian_factor(self.n, self.k, rng)
    }

    fn random_tangent(&self, point: &DMatrix<T>, rng: &mut dyn RngCore) -> Result<DMatrix<T>> {
        let h = quotient::gaussian_factor(self.n, self.k, rng);
        let p = quotient::project_horizontal(point, &h)?;
        let nrm = self.norm(point, &p)?;
        Ok(p / nrm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use psdrank_core::error::ManifoldError;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn create_test_manifold() -> PsdFixedRank {
        PsdFixedRank::new(10, 3).unwrap()
    }

    #[test]
    fn test_creation_and_dimension() {
        let manifold = create_test_manifold();
        assert_eq!(manifold.n(), 10);
        assert_eq!(manifold.k(), 3);
        // k*n - k*(k-1)/2 = 30 - 3
        assert_eq!(<PsdFixedRank as Manifold<f64>>::dimension(&manifold), 27);
        assert!(<PsdFixedRank as Manifold<f64>>::name(&manifold).contains("10x10"));
    }

    #[test]
    fn test_creation_rejects_bad_sizes() {
        assert!(PsdFixedRank::new(0, 1).is_err());
        assert!(PsdFixedRank::new(4, 0).is_err());
        assert!(PsdFixedRank::new(3, 4).is_err());
    }

    #[test]
    fn test_typical_distance() {
        let manifold = create_test_manifold();
        assert_eq!(
            <PsdFixedRank as Manifold<f64>>::typical_distance(&manifold),
            13.0
        );
    }

    #[test]
    fn test_inner_product_is_frobenius() {
        let manifold = create_test_manifold();
        let mut rng = StdRng::seed_from_u64(1);
        let y = manifold.random_point(&mut rng);
        let u = quotient::gaussian_factor::<f64>(10, 3, &mut rng);
        let v = quotient::gaussian_factor::<f64>(10, 3, &mut rng);

        let ip = manifold.inner_product(&y, &u, &v).unwrap();
        assert_relative_eq!(ip, u.dot(&v), epsilon = 1e-14);
        assert_relative_eq!(
            manifold.norm(&y, &u).unwrap(),
            u.norm(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_projection_is_idempotent() {
        let manifold = create_test_manifold();
        let mut rng = StdRng::seed_from_u64(2);
        let y = manifold.random_point(&mut rng);
        let h = quotient::gaussian_factor::<f64>(10, 3, &mut rng);

        let once = manifold.project_tangent(&y, &h).unwrap();
        let twice = manifold.project_tangent(&y, &once).unwrap();
        assert_relative_eq!(once, twice, epsilon = 1e-9);
    }

    #[test]
    fn test_retraction_at_zero_is_identity() {
        let manifold = create_test_manifold();
        let mut rng = StdRng::seed_from_u64(3);
        let y = manifold.random_point(&mut rng);
        let zero = DMatrix::<f64>::zeros(10, 3);

        let reached = manifold.retract(&y, &zero).unwrap();
        assert_eq!(reached, y);
    }

    #[test]
    fn test_random_tangent_has_unit_norm() {
        let manifold = create_test_manifold();
        let mut rng = StdRng::seed_from_u64(4);
        let y: DMatrix<f64> = manifold.random_point(&mut rng);
        let u = manifold.random_tangent(&y, &mut rng).unwrap();

        assert_relative_eq!(manifold.norm(&y, &u).unwrap(), 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_unsupported_operations() {
        let manifold = create_test_manifold();
        let mut rng = StdRng::seed_from_u64(5);
        let x: DMatrix<f64> = manifold.random_point(&mut rng);
        let y: DMatrix<f64> = manifold.random_point(&mut rng);

        assert!(matches!(
            manifold.distance(&x, &y),
            Err(ManifoldError::NotImplemented { .. })
        ));
        assert!(matches!(
            manifold.logarithmic_map(&x, &y),
            Err(ManifoldError::NotImplemented { .. })
        ));
        assert!(matches!(
            manifold.pair_mean(&x, &y),
            Err(ManifoldError::NotImplemented { .. })
        ));
    }

    #[test]
    fn test_exponential_map_falls_back_to_retraction() {
        let manifold = create_test_manifold();
        let mut rng = StdRng::seed_from_u64(6);
        let y: DMatrix<f64> = manifold.random_point(&mut rng);
        let u = manifold.random_tangent(&y, &mut rng).unwrap();

        let reached = manifold.exponential_map(&y, &u).unwrap();
        assert!(!reached.is_exact());
        assert_eq!(reached.value, manifold.retract(&y, &u).unwrap());
    }

    #[test]
    fn test_gradient_conversion_is_identity() {
        let manifold = create_test_manifold();
        let mut rng = StdRng::seed_from_u64(7);
        let y = manifold.random_point(&mut rng);
        let egrad = quotient::gaussian_factor::<f64>(10, 3, &mut rng);

        let rgrad = manifold
            .euclidean_to_riemannian_gradient(&y, &egrad)
            .unwrap();
        assert_eq!(rgrad, egrad);
    }

    #[test]
    fn test_hessian_conversion_projects() {
        let manifold = create_test_manifold();
        let mut rng = StdRng::seed_from_u64(8);
        let y = manifold.random_point(&mut rng);
        let egrad = quotient::gaussian_factor::<f64>(10, 3, &mut rng);
        let ehess = quotient::gaussian_factor::<f64>(10, 3, &mut rng);
        let dir = manifold.random_tangent(&y, &mut rng).unwrap();

        let rhess = manifold
            .euclidean_to_riemannian_hessian(&y, &egrad, &ehess, &dir)
            .unwrap();
        assert_relative_eq!(
            rhess,
            manifold.project_tangent(&y, &ehess).unwrap(),
            epsilon = 1e-12
        );
    }
}
