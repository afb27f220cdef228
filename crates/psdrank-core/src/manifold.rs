//! The manifold contract and advisory-carrying results.
//!
//! A Riemannian manifold (ℳ, g) is a smooth space ℳ equipped with a metric g
//! providing an inner product on each tangent space T_p ℳ. The [`Manifold`]
//! trait is the operation set a generic optimization driver programs
//! against: it never reaches into a concrete manifold's representation, only
//! into this capability set.
//!
//! Quotient manifolds add one subtlety: many representatives correspond to
//! the same abstract point, and operations must be well-defined on
//! equivalence classes rather than on raw coordinates. That constraint is
//! honored by construction inside each implementation; the contract itself
//! is representation-agnostic.

use crate::{
    error::{ManifoldError, Result},
    types::Scalar,
};
use num_traits::Float;
use rand::RngCore;
use std::fmt::{self, Debug};

/// A non-fatal advisory attached to an otherwise successful operation.
///
/// Advisories report recoverable conditions, such as a manifold substituting
/// its retraction for a missing closed-form exponential map. They are plain
/// data, never exceptions used for control flow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Advisory {
    message: String,
}

impl Advisory {
    /// Create an advisory with the given message.
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Advisory reporting that a manifold fell back from the exponential map
    /// to its retraction.
    pub fn retraction_fallback(manifold: &str) -> Self {
        Self::new(format!(
            "Exponential map for {manifold} not implemented yet; used retraction instead."
        ))
    }

    /// The advisory text.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// A computed value together with an optional [`Advisory`].
///
/// Operations with a documented approximation fallback return this type so
/// the caller can observe the substitution without the operation failing.
#[derive(Debug, Clone)]
pub struct Advised<V> {
    /// The computed value.
    pub value: V,
    /// Advisory describing any substitution that was applied.
    pub advisory: Option<Advisory>,
}

impl<V> Advised<V> {
    /// A value computed exactly as requested, with no advisory.
    pub fn exact(value: V) -> Self {
        Self {
            value,
            advisory: None,
        }
    }

    /// A value computed through a documented substitution.
    pub fn with_advisory(value: V, advisory: Advisory) -> Self {
        Self {
            value,
            advisory: Some(advisory),
        }
    }

    /// Whether the value was computed without any substitution.
    pub fn is_exact(&self) -> bool {
        self.advisory.is_none()
    }

    /// Discards the advisory and returns the value.
    pub fn into_value(self) -> V {
        self.value
    }
}

/// Trait for Riemannian manifolds.
///
/// # Type Parameters
///
/// - `T`: the real scalar type used for all metric quantities (f32 or f64).
///   Complex manifolds keep complex points but still measure with `T`.
///
/// # Associated Types
///
/// - [`Point`](Manifold::Point): the representation of a point on the
///   manifold (for factor-parameterized manifolds, the factor itself)
/// - [`Tangent`](Manifold::Tangent): the representation of a tangent vector
///   at a point
///
/// # Contract
///
/// Implementations must satisfy:
///
/// 1. **Metric**: `inner_product` is symmetric (or Hermitian) bilinear and
///    positive definite on the tangent space.
/// 2. **Projection idempotency**: `project_tangent(p, ·)` is idempotent on
///    its image.
/// 3. **Retraction constraints**: `retract(p, 0) = p` and the differential
///    of the retraction at zero is the identity.
/// 4. **Quotient invariance**: for quotient manifolds, every operation is
///    invariant under the group action identifying equivalent
///    representatives.
///
/// Operations without a closed form for a given manifold either return
/// [`ManifoldError::NotImplemented`] (hard failure, e.g. `distance` where no
/// formula exists) or fall back to a documented approximation with an
/// [`Advisory`] (e.g. `exponential_map` substituting the retraction).
pub trait Manifold<T: Scalar>: Debug + Send + Sync {
    /// Representation of a point on the manifold.
    type Point: Clone + Debug;
    /// Representation of a tangent vector at a point.
    type Tangent: Clone + Debug;

    /// Returns a human-readable name for the manifold.
    fn name(&self) -> &str;

    /// Returns the intrinsic (real) dimension of the manifold.
    ///
    /// For quotient manifolds this counts degrees of freedom *after*
    /// removing the orbit directions.
    fn dimension(&self) -> usize;

    /// Returns a typical distance scale on the manifold.
    ///
    /// Generic trust-region drivers use this as an initial step-size
    /// heuristic; it is a scale estimate, not a curvature-derived quantity.
    fn typical_distance(&self) -> T;

    /// Computes the Riemannian inner product of two tangent vectors at a point.
    fn inner_product(
        &self,
        point: &Self::Point,
        u: &Self::Tangent,
        v: &Self::Tangent,
    ) -> Result<T>;

    /// Computes the norm of a tangent vector, `sqrt(inner_product(p, v, v))`.
    ///
    /// Derived from `inner_product` so that manifold-specific metric
    /// conventions (such as a factor of two on complex manifolds) flow
    /// through consistently.
    fn norm(&self, point: &Self::Point, vector: &Self::Tangent) -> Result<T> {
        self.inner_product(point, vector, vector)
            .map(|ip| <T as Float>::sqrt(ip))
    }

    /// Computes the geodesic (or approximating) distance between two points.
    ///
    /// Manifolds without a closed form return
    /// [`ManifoldError::NotImplemented`], which is the default.
    fn distance(&self, _x: &Self::Point, _y: &Self::Point) -> Result<T> {
        Err(ManifoldError::not_implemented(format!(
            "distance on {}",
            self.name()
        )))
    }

    /// Projects an arbitrary ambient matrix onto the tangent space at `point`.
    ///
    /// For quotient manifolds this is the *horizontal* projection: the
    /// component along the orbit directions is removed.
    fn project_tangent(&self, point: &Self::Point, ambient: &Self::Tangent)
        -> Result<Self::Tangent>;

    /// Maps a tangent vector at `point` to a new point on the manifold.
    ///
    /// Must satisfy `retract(p, 0) = p` and first-order agreement with the
    /// exponential map.
    fn retract(&self, point: &Self::Point, tangent: &Self::Tangent) -> Result<Self::Point>;

    /// Computes the geodesic exponential map.
    ///
    /// The default implementation substitutes the retraction and attaches a
    /// [`retraction fallback`](Advisory::retraction_fallback) advisory
    /// naming the manifold; implementations with a closed form override this
    /// and return an exact value.
    fn exponential_map(
        &self,
        point: &Self::Point,
        tangent: &Self::Tangent,
    ) -> Result<Advised<Self::Point>> {
        let reached = self.retract(point, tangent)?;
        Ok(Advised::with_advisory(
            reached,
            Advisory::retraction_fallback(self.name()),
        ))
    }

    /// Computes the inverse of the exponential map.
    ///
    /// Defaults to [`ManifoldError::NotImplemented`].
    fn logarithmic_map(&self, _point: &Self::Point, _other: &Self::Point) -> Result<Self::Tangent> {
        Err(ManifoldError::not_implemented(format!(
            "logarithmic map on {}",
            self.name()
        )))
    }

    /// Converts a Euclidean gradient into the Riemannian gradient.
    ///
    /// Defaults to the tangent projection, which is correct whenever the
    /// manifold carries the metric induced from the ambient space.
    fn euclidean_to_riemannian_gradient(
        &self,
        point: &Self::Point,
        euclidean_grad: &Self::Tangent,
    ) -> Result<Self::Tangent> {
        self.project_tangent(point, euclidean_grad)
    }

    /// Converts a Euclidean Hessian-vector product into the Riemannian one.
    ///
    /// Defaults to projecting the Euclidean Hessian-vector product onto the
    /// tangent space at `point`.
    fn euclidean_to_riemannian_hessian(
        &self,
        point: &Self::Point,
        _euclidean_grad: &Self::Tangent,
        euclidean_hess: &Self::Tangent,
        _direction: &Self::Tangent,
    ) -> Result<Self::Tangent> {
        self.project_tangent(point, euclidean_hess)
    }

    /// Samples a random point on the manifold.
    ///
    /// The generator is supplied by the caller; the manifold never manages
    /// seeding.
    fn random_point(&self, rng: &mut dyn RngCore) -> Self::Point;

    /// Samples a random unit-norm tangent vector at `point`.
    fn random_tangent(&self, point: &Self::Point, rng: &mut dyn RngCore)
        -> Result<Self::Tangent>;

    /// Transports a tangent vector from `from` to the nearby point `to`.
    ///
    /// The default re-projects onto the tangent space at the destination,
    /// ignoring curvature between the two points; this approximates parallel
    /// transport for nearby points.
    fn transport(
        &self,
        _from: &Self::Point,
        to: &Self::Point,
        vector: &Self::Tangent,
    ) -> Result<Self::Tangent> {
        self.project_tangent(to, vector)
    }

    /// Computes the Riemannian mean of two points.
    ///
    /// Defaults to [`ManifoldError::NotImplemented`].
    fn pair_mean(&self, _x: &Self::Point, _y: &Self::Point) -> Result<Self::Point> {
        Err(ManifoldError::not_implemented(format!(
            "pair mean on {}",
            self.name()
        )))
    }
}
