//! Riemannian geometry of fixed-rank PSD quotient manifolds.
//!
//! `psdrank` provides the geometric primitives needed to run gradient-based
//! and second-order optimization directly on the set of n×n symmetric (or
//! Hermitian) positive-semidefinite matrices of exact rank k, represented by
//! an n×k factor Y with X = Y·Yᴴ. Factors related by an orthogonal/unitary
//! right-multiplication describe the same matrix, so the geometry is defined
//! on equivalence classes: tangent vectors live in the horizontal space,
//! obtained by a Lyapunov-equation solve.
//!
//! # Example
//!
//! ```
//! use psdrank::prelude::*;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let manifold = PsdFixedRank::new(10, 3)?;
//! let mut rng = StdRng::seed_from_u64(0);
//!
//! let y: DMatrix<f64> = manifold.random_point(&mut rng);
//! let direction = manifold.random_tangent(&y, &mut rng)?;
//!
//! // Take a small step along the manifold.
//! let step = manifold.retract(&y, &(direction * 0.1))?;
//! assert_eq!(step.shape(), (10, 3));
//! # Ok::<(), psdrank::ManifoldError>(())
//! ```

pub use psdrank_core::{
    batch::{batched_product, batched_symmetrize, batched_transpose, MatrixBatch},
    error::{ManifoldError, Result},
    linalg::solve_lyapunov_hermitian,
    manifold::{Advised, Advisory, Manifold},
    types::Scalar,
};
pub use psdrank_manifolds::{PsdFixedRank, PsdFixedRankComplex};

// Re-export the linear algebra backend for downstream convenience.
pub use nalgebra;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::{
        Advised, Advisory, Manifold, ManifoldError, MatrixBatch, PsdFixedRank,
        PsdFixedRankComplex, Result, Scalar,
    };
    pub use nalgebra::{Complex, DMatrix};
}
