//! Core traits and types for optimization on fixed-rank PSD quotient manifolds.
//!
//! This crate provides the foundations shared by every concrete manifold:
//! the [`Manifold`](manifold::Manifold) contract that a generic Riemannian
//! optimizer programs against, the error taxonomy, the batched dense-matrix
//! helpers, and the continuous Lyapunov solver that the quotient geometry
//! relies on for its horizontal projection.
//!
//! # Key Concepts
//!
//! - **Quotient manifold**: points related by a group action (here,
//!   right-multiplication by orthogonal/unitary matrices) are identified
//! - **Horizontal space**: the subspace of ambient tangent directions
//!   orthogonal to the orbit directions; the "true" tangent space of the
//!   quotient
//! - **Retraction**: a first-order substitute for the exponential map
//!
//! # Modules
//!
//! - [`batch`]: shape-polymorphic batched matrix operations
//! - [`error`]: error types for manifold operations
//! - [`linalg`]: linear-algebra primitives (Lyapunov solve)
//! - [`manifold`]: the manifold contract and advisory-carrying results
//! - [`types`]: scalar trait and numerical constants

pub mod batch;
pub mod error;
pub mod linalg;
pub mod manifold;
pub mod types;

// Re-export commonly used items at the crate root
pub use error::{ManifoldError, Result};

/// Prelude module for convenient imports.
///
/// # Example
/// ```
/// use psdrank_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::batch::{
        batched_product, batched_symmetrize, batched_transpose, MatrixBatch,
    };
    pub use crate::error::{ManifoldError, Result};
    pub use crate::linalg::solve_lyapunov_hermitian;
    pub use crate::manifold::{Advised, Advisory, Manifold};
    pub use crate::types::Scalar;
}
