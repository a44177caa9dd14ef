//! Fixed-size diagonal rank-2 tensor, packed diagonal inline storage.

use std::fmt;

use rand::Rng;

use crate::backend::{linalg, reduce};
use crate::error::TensorError;
use crate::index;
use crate::random::{fill_uniform, RandomUniform};
use crate::scalar::Scalar;

use super::dim::{Buffer, Dim};

/// Fixed-size counterpart of [`crate::cartesian::Tensor2d`]. Off-diagonal
/// reads return the zero constant by value; off-diagonal entries cannot be
/// written.
///
/// # Example
///
/// ```
/// use cartens::tiny::{Tensor2d, D3};
///
/// let a: Tensor2d<f64, D3> = Tensor2d::from_slice(&[2.0, 3.0, 5.0]);
/// assert_eq!(a.det(), 30.0);
/// assert_eq!(a.trace(), 10.0);
/// assert_eq!(a.get(0, 1), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor2d<T: Scalar, D: Dim> {
    data: D::Buf1<T>,
}

impl<T: Scalar, D: Dim> Tensor2d<T, D> {
    /// Zero-initialized tensor.
    pub fn zero() -> Self {
        Self {
            data: Buffer::filled(T::zero()),
        }
    }

    /// Tensor with every diagonal entry one; equals the identity.
    pub fn ones() -> Self {
        Self::constant(T::one())
    }

    /// Tensor with every diagonal entry equal to `value`.
    pub fn constant(value: T) -> Self {
        Self {
            data: Buffer::filled(value),
        }
    }

    /// Tensor holding `0, 1, 2, ...` on the diagonal.
    pub fn arange() -> Self {
        let mut out = Self::zero();
        out.set_arange();
        out
    }

    /// The second-order identity tensor.
    pub fn identity() -> Self {
        Self::constant(T::one())
    }

    /// Copy the diagonal entries from a slice of length `ND`.
    pub fn from_slice(src: &[T]) -> Self {
        let mut out = Self::zero();
        out.set_copy(src);
        out
    }

    /// Copy from a full `ND * ND` row-major dense buffer, keeping the
    /// diagonal. The source must be diagonal (debug-asserted only); use
    /// [`Self::try_from_dense`] for a checked conversion.
    pub fn from_dense(src: &[T]) -> Self {
        let mut out = Self::zero();
        out.set_copy_dense(src);
        out
    }

    /// Checked conversion from a full `ND * ND` row-major dense buffer.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` on a wrong source length and `NotDiagonal`
    /// if any off-diagonal entry is non-zero.
    pub fn try_from_dense(src: &[T]) -> Result<Self, TensorError> {
        let nd = D::ND;
        if src.len() != index::tensor2_size(nd) {
            return Err(TensorError::ShapeMismatch {
                expected: index::tensor2_size(nd),
                actual: src.len(),
            });
        }
        for i in 0..nd {
            for j in 0..nd {
                if i != j && src[i * nd + j] != T::zero() {
                    return Err(TensorError::NotDiagonal { i, j });
                }
            }
        }
        Ok(Self::from_dense(src))
    }

    /// Number of dimensions.
    #[inline]
    pub fn nd(&self) -> usize {
        D::ND
    }

    /// Number of stored entries (`ND`).
    #[inline]
    pub fn size(&self) -> usize {
        D::ND
    }

    /// Rank (number of axes).
    #[inline]
    pub fn rank(&self) -> usize {
        2
    }

    /// Packed storage (the diagonal) as a slice.
    #[inline]
    pub fn data(&self) -> &[T] {
        self.data.as_ref()
    }

    /// Packed storage as a mutable slice.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        self.data.as_mut()
    }

    /// Iterate over the stored diagonal.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data().iter()
    }

    /// Iterate mutably over the stored diagonal.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data_mut().iter_mut()
    }

    /// Read entry `(i, j)`; off-diagonal entries are the zero constant.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> T {
        debug_assert!(i < D::ND && j < D::ND);
        if i == j {
            self.data()[i]
        } else {
            T::zero()
        }
    }

    /// Mutable access to diagonal entry `(i, i)`.
    #[inline]
    pub fn get_mut(&mut self, i: usize, j: usize) -> &mut T {
        debug_assert!(i == j, "only diagonal entries of a Tensor2d are writable");
        &mut self.data_mut()[i]
    }

    /// Write diagonal entry `(i, i)`.
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: T) {
        debug_assert!(i == j, "only diagonal entries of a Tensor2d are writable");
        self.data_mut()[i] = value;
    }

    /// Fill the diagonal with zeros.
    pub fn set_zero(&mut self) {
        self.data_mut().fill(T::zero());
    }

    /// Fill the diagonal with ones.
    pub fn set_ones(&mut self) {
        self.data_mut().fill(T::one());
    }

    /// Fill the diagonal with a constant.
    pub fn set_constant(&mut self, value: T) {
        self.data_mut().fill(value);
    }

    /// Fill the diagonal with `0, 1, 2, ...`.
    pub fn set_arange(&mut self) {
        for (i, x) in self.data_mut().iter_mut().enumerate() {
            *x = T::from_usize(i);
        }
    }

    /// Set to the second-order identity tensor.
    pub fn set_identity(&mut self) {
        self.data_mut().fill(T::one());
    }

    /// Copy the diagonal from a slice of matching length.
    pub fn set_copy(&mut self, src: &[T]) {
        debug_assert_eq!(src.len(), D::ND);
        self.data_mut().copy_from_slice(src);
    }

    /// Copy from a full `ND * ND` row-major dense buffer, dropping the
    /// (structurally zero) off-diagonal entries. The source must be
    /// diagonal; debug builds assert this, release builds do not check.
    pub fn set_copy_dense(&mut self, src: &[T]) {
        let nd = D::ND;
        debug_assert_eq!(src.len(), index::tensor2_size(nd));
        #[cfg(debug_assertions)]
        for i in 0..nd {
            for j in 0..nd {
                debug_assert!(
                    i == j || src[i * nd + j] == T::zero(),
                    "dense source is not diagonal at ({i},{j})"
                );
            }
        }
        for i in 0..nd {
            self.data_mut()[i] = src[i * nd + i];
        }
    }

    /// Copy the stored diagonal into `dst`.
    pub fn copy_to(&self, dst: &mut [T]) {
        debug_assert_eq!(dst.len(), D::ND);
        dst.copy_from_slice(self.data());
    }

    /// Copy into a full `ND * ND` row-major dense buffer, materializing the
    /// off-diagonal zeros.
    pub fn copy_to_dense(&self, dst: &mut [T]) {
        let nd = D::ND;
        debug_assert_eq!(dst.len(), index::tensor2_size(nd));
        dst.fill(T::zero());
        for i in 0..nd {
            dst[i * nd + i] = self.data()[i];
        }
    }

    /// Stored diagonal as a `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        self.data().to_vec()
    }

    /// Copy into the runtime-dimensioned family.
    pub fn to_cartesian(&self) -> crate::cartesian::Tensor2d<T> {
        crate::cartesian::Tensor2d::from_vec(D::ND, self.to_vec())
            .expect("fixed-size buffer length matches its dimension")
    }

    /// Transpose; a diagonal tensor equals its transpose.
    pub fn t(&self) -> Self {
        self.clone()
    }

    /// Trace, `A_ii`.
    pub fn trace(&self) -> T {
        linalg::trace_t2d(D::ND, self.data())
    }

    /// Determinant: the product of the diagonal entries.
    pub fn det(&self) -> T {
        linalg::det_t2d(D::ND, self.data())
    }

    /// Inverse: the reciprocal of each diagonal entry; a zero entry yields
    /// an infinite entry per IEEE arithmetic.
    pub fn inv(&self) -> Self {
        let mut out = Self::zero();
        linalg::inv_t2d(D::ND, self.data(), out.data_mut());
        out
    }

    /// Checked inverse.
    ///
    /// # Errors
    ///
    /// Returns `Singular` if any diagonal entry is zero.
    pub fn try_inv(&self) -> Result<Self, TensorError> {
        if self.data().iter().any(|&x| x == T::zero()) {
            return Err(TensorError::Singular);
        }
        Ok(self.inv())
    }

    /// Entry-wise absolute value.
    pub fn abs(&self) -> Self {
        let mut out = self.clone();
        for x in out.data_mut().iter_mut() {
            *x = x.abs();
        }
        out
    }

    /// Sum of absolute values of the stored entries.
    pub fn norm(&self) -> T {
        reduce::norm(self.data())
    }

    /// Offset of the minimum stored entry.
    pub fn argmin(&self) -> usize {
        reduce::argmin(self.data())
    }

    /// Offset of the maximum stored entry.
    pub fn argmax(&self) -> usize {
        reduce::argmax(self.data())
    }

    /// Minimum stored entry.
    pub fn min(&self) -> T {
        reduce::min(self.data())
    }

    /// Maximum stored entry.
    pub fn max(&self) -> T {
        reduce::max(self.data())
    }

    /// Sum over all logical entries (the diagonal).
    pub fn sum(&self) -> T {
        reduce::sum(self.data())
    }

    /// Mean over the `ND * ND` logical entries.
    pub fn mean(&self) -> T {
        self.sum() / T::from_usize(D::ND * D::ND)
    }

    /// Weighted average over the logical entries; divides by the weight sum
    /// unless `normalize` is `false`.
    pub fn average(&self, weights: &Self, normalize: bool) -> T {
        let mut out = T::zero();
        for i in 0..D::ND {
            out += self.data()[i] * weights.data()[i];
        }
        if normalize {
            out / weights.sum()
        } else {
            out
        }
    }
}

impl<T: Scalar + RandomUniform, D: Dim> Tensor2d<T, D> {
    /// Tensor with uniform random diagonal entries in `[lower, upper)`.
    pub fn random(lower: T, upper: T) -> Self {
        let mut out = Self::zero();
        out.set_random(lower, upper);
        out
    }

    /// Like [`Self::random`], threading an explicit generator.
    pub fn random_with_rng<R: Rng>(lower: T, upper: T, rng: &mut R) -> Self {
        let mut out = Self::zero();
        out.set_random_with_rng(lower, upper, rng);
        out
    }

    /// Fill the diagonal with uniform random values.
    pub fn set_random(&mut self, lower: T, upper: T) {
        fill_uniform(self.data_mut(), lower, upper, &mut rand::rng());
    }

    /// Like [`Self::set_random`], threading an explicit generator.
    pub fn set_random_with_rng<R: Rng>(&mut self, lower: T, upper: T, rng: &mut R) {
        fill_uniform(self.data_mut(), lower, upper, rng);
    }
}

impl<T: Scalar, D: Dim> Default for Tensor2d<T, D> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Scalar, D: Dim> std::ops::Index<usize> for Tensor2d<T, D> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.data()[i]
    }
}

impl<T: Scalar, D: Dim> std::ops::IndexMut<usize> for Tensor2d<T, D> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data_mut()[i]
    }
}

impl<T: Scalar + fmt::Display, D: Dim> fmt::Display for Tensor2d<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..D::ND {
            if i > 0 {
                write!(f, "; ")?;
            }
            for j in 0..D::ND {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", self.get(i, j))?;
            }
        }
        write!(f, ";")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiny::D3;
    use approx::assert_relative_eq;

    #[test]
    fn test_no_heap_size() {
        assert_eq!(
            std::mem::size_of::<Tensor2d<f64, D3>>(),
            3 * std::mem::size_of::<f64>()
        );
    }

    #[test]
    fn test_diag_scenario() {
        let a: Tensor2d<f64, D3> = Tensor2d::from_slice(&[2.0, 3.0, 5.0]);
        assert_eq!(a.det(), 30.0);
        assert_eq!(a.trace(), 10.0);
        let inv = a.inv();
        assert_relative_eq!(inv.get(0, 0), 0.5);
        assert_relative_eq!(inv.get(1, 1), 1.0 / 3.0);
        assert_relative_eq!(inv.get(2, 2), 0.2);
    }

    #[test]
    fn test_off_diagonal_zero() {
        let a: Tensor2d<f64, D3> = Tensor2d::arange();
        for i in 0..3 {
            for j in 0..3 {
                if i != j {
                    assert_eq!(a.get(i, j), 0.0);
                }
            }
        }
    }

    #[test]
    fn test_try_inv() {
        let a: Tensor2d<f64, D3> = Tensor2d::from_slice(&[1.0, 0.0, 2.0]);
        assert!(a.try_inv().is_err());
        assert!(a.inv().get(1, 1).is_infinite());
    }

    #[test]
    fn test_from_dense_checked() {
        let dense = [2.0, 0.0, 0.0, 0.0, 3.0, 0.0, 0.0, 0.0, 5.0];
        let a: Tensor2d<f64, D3> = Tensor2d::try_from_dense(&dense).unwrap();
        assert_eq!(a.data(), &[2.0, 3.0, 5.0]);

        let bad = [2.0, 1.0, 0.0, 0.0, 3.0, 0.0, 0.0, 0.0, 5.0];
        assert!(Tensor2d::<f64, D3>::try_from_dense(&bad).is_err());
    }
}
