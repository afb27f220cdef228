//! Shape-polymorphic batched matrix operations.
//!
//! Manifold computations sometimes process a stack of same-shaped matrices
//! instead of one matrix at a time. [`MatrixBatch`] carries the batching
//! rank in its variant tag, so a single operation set works uniformly on one
//! matrix or on many without the caller stating which case applies. Output
//! batching always mirrors input batching.

use crate::error::{ManifoldError, Result};
use nalgebra::{ComplexField, DMatrix};

/// One dense matrix, or a stack of dense matrices processed slice-by-slice.
#[derive(Debug, Clone, PartialEq)]
pub enum MatrixBatch<E: ComplexField> {
    /// A single matrix.
    Single(DMatrix<E>),
    /// A stack of matrices sharing one leading batch dimension.
    Stacked(Vec<DMatrix<E>>),
}

impl<E: ComplexField> MatrixBatch<E> {
    /// Number of slices in the batch (1 for a single matrix).
    pub fn len(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Stacked(slices) => slices.len(),
        }
    }

    /// Whether the batch holds no slices at all.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Stacked(slices) if slices.is_empty())
    }

    /// Applies `f` to every slice, preserving the batching.
    fn map<F>(&self, f: F) -> Self
    where
        F: Fn(&DMatrix<E>) -> DMatrix<E>,
    {
        match self {
            Self::Single(a) => Self::Single(f(a)),
            Self::Stacked(slices) => Self::Stacked(slices.iter().map(f).collect()),
        }
    }
}

impl<E: ComplexField> From<DMatrix<E>> for MatrixBatch<E> {
    fn from(matrix: DMatrix<E>) -> Self {
        Self::Single(matrix)
    }
}

impl<E: ComplexField> From<Vec<DMatrix<E>>> for MatrixBatch<E> {
    fn from(slices: Vec<DMatrix<E>>) -> Self {
        Self::Stacked(slices)
    }
}

/// Computes the matrix product slice-by-slice.
///
/// For two single matrices this is the ordinary product. For two stacks the
/// leading batch dimensions must agree and the result is the stack of
/// per-slice products. Mixing a single matrix with a stack is a
/// [`DimensionMismatch`](ManifoldError::DimensionMismatch) error, as are
/// incompatible inner dimensions.
pub fn batched_product<E: ComplexField>(
    a: &MatrixBatch<E>,
    b: &MatrixBatch<E>,
) -> Result<MatrixBatch<E>> {
    match (a, b) {
        (MatrixBatch::Single(a), MatrixBatch::Single(b)) => {
            Ok(MatrixBatch::Single(product_slice(a, b)?))
        }
        (MatrixBatch::Stacked(a), MatrixBatch::Stacked(b)) => {
            if a.len() != b.len() {
                return Err(ManifoldError::dimension_mismatch(
                    format!("batch of {} slices", a.len()),
                    format!("batch of {} slices", b.len()),
                ));
            }
            let slices = a
                .iter()
                .zip(b.iter())
                .map(|(x, y)| product_slice(x, y))
                .collect::<Result<Vec<_>>>()?;
            Ok(MatrixBatch::Stacked(slices))
        }
        _ => Err(ManifoldError::dimension_mismatch(
            "operands with matching batch rank",
            "one single matrix and one stack",
        )),
    }
}

/// Computes the (non-conjugating) transpose slice-by-slice.
pub fn batched_transpose<E: ComplexField>(a: &MatrixBatch<E>) -> MatrixBatch<E> {
    a.map(DMatrix::transpose)
}

/// Computes the symmetrization ½(A + Aᵗ) slice-by-slice.
///
/// Exactly reproduces ordinary symmetrization on a single matrix. Every
/// slice must be square.
pub fn batched_symmetrize<E: ComplexField>(a: &MatrixBatch<E>) -> Result<MatrixBatch<E>> {
    match a {
        MatrixBatch::Single(m) => Ok(MatrixBatch::Single(symmetrize_slice(m)?)),
        MatrixBatch::Stacked(slices) => {
            let slices = slices
                .iter()
                .map(symmetrize_slice)
                .collect::<Result<Vec<_>>>()?;
            Ok(MatrixBatch::Stacked(slices))
        }
    }
}

fn product_slice<E: ComplexField>(a: &DMatrix<E>, b: &DMatrix<E>) -> Result<DMatrix<E>> {
    if a.ncols() != b.nrows() {
        return Err(ManifoldError::dimension_mismatch(
            format!("left operand with {} columns matching right operand rows", b.nrows()),
            format!("{}x{} * {}x{}", a.nrows(), a.ncols(), b.nrows(), b.ncols()),
        ));
    }
    Ok(a * b)
}

fn symmetrize_slice<E: ComplexField>(a: &DMatrix<E>) -> Result<DMatrix<E>> {
    if !a.is_square() {
        return Err(ManifoldError::dimension_mismatch(
            "square matrix",
            format!("{}x{}", a.nrows(), a.ncols()),
        ));
    }
    let two = E::one() + E::one();
    Ok((a + a.transpose()) / two)
}
