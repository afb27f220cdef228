//! Concrete fixed-rank PSD quotient manifold geometries.
//!
//! This crate implements the manifold of n×n symmetric (or Hermitian)
//! positive-semidefinite matrices of exact rank k, parameterized by an n×k
//! factor Y with X = Y·Yᴴ. Factors related by right-multiplication with an
//! orthogonal (real) or unitary (complex) k×k matrix represent the same
//! point, so the geometry is a Riemannian *quotient*: tangent vectors live
//! in the horizontal space obtained by removing the orbit directions.
//!
//! Both variants share one field-generic projection/retraction kernel; the
//! complex variant overrides only the metric-dependent operations.

pub mod psd_fixed_rank;
pub mod psd_fixed_rank_complex;

mod quotient;

// Re-export main manifolds for convenience
pub use psd_fixed_rank::PsdFixedRank;
pub use psd_fixed_rank_complex::PsdFixedRankComplex;
