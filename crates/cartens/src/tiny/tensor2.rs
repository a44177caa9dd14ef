//! Fixed-size dense rank-2 tensor with inline storage.

use std::fmt;

use rand::Rng;

use crate::backend::{linalg, reduce};
use crate::index;
use crate::random::{fill_uniform, RandomUniform};
use crate::scalar::Scalar;

use super::dim::{Buffer, Dim};

/// Fixed-size counterpart of [`crate::cartesian::Tensor2`].
///
/// # Example
///
/// ```
/// use cartens::tiny::{Tensor2, D2};
///
/// let a: Tensor2<f64, D2> = Tensor2::from_slice(&[1.0, 2.0, 3.0, 4.0]);
/// assert_eq!(a.trace(), 5.0);
/// assert_eq!(a.det(), -2.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor2<T: Scalar, D: Dim> {
    data: D::Buf2<T>,
}

impl<T: Scalar, D: Dim> Tensor2<T, D> {
    /// Zero-initialized tensor.
    pub fn zero() -> Self {
        Self {
            data: Buffer::filled(T::zero()),
        }
    }

    /// Tensor filled with ones.
    pub fn ones() -> Self {
        Self::constant(T::one())
    }

    /// Tensor filled with a constant.
    pub fn constant(value: T) -> Self {
        Self {
            data: Buffer::filled(value),
        }
    }

    /// Tensor holding `0, 1, 2, ...` in storage order.
    pub fn arange() -> Self {
        let mut out = Self::zero();
        out.set_arange();
        out
    }

    /// The second-order identity tensor.
    pub fn identity() -> Self {
        let mut out = Self::zero();
        out.set_identity();
        out
    }

    /// Copy the entries from a row-major slice of length `ND * ND`.
    pub fn from_slice(src: &[T]) -> Self {
        let mut out = Self::zero();
        out.set_copy(src);
        out
    }

    /// Number of dimensions.
    #[inline]
    pub fn nd(&self) -> usize {
        D::ND
    }

    /// Number of stored entries (`ND * ND`).
    #[inline]
    pub fn size(&self) -> usize {
        index::tensor2_size(D::ND)
    }

    /// Rank (number of axes).
    #[inline]
    pub fn rank(&self) -> usize {
        2
    }

    /// Packed storage as a slice.
    #[inline]
    pub fn data(&self) -> &[T] {
        self.data.as_ref()
    }

    /// Packed storage as a mutable slice.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        self.data.as_mut()
    }

    /// Iterate over the packed storage.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data().iter()
    }

    /// Iterate mutably over the packed storage.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data_mut().iter_mut()
    }

    /// Compress `(i, j)` to a storage offset.
    #[inline]
    pub fn compress(&self, i: usize, j: usize) -> usize {
        index::tensor2(D::ND, i, j)
    }

    /// Decompress a storage offset to `(i, j)`.
    #[inline]
    pub fn decompress(&self, offset: usize) -> (usize, usize) {
        index::tensor2_unpack(D::ND, offset)
    }

    /// Read entry `(i, j)`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> T {
        self.data()[index::tensor2(D::ND, i, j)]
    }

    /// Mutable access to entry `(i, j)`.
    #[inline]
    pub fn get_mut(&mut self, i: usize, j: usize) -> &mut T {
        &mut self.data_mut()[index::tensor2(D::ND, i, j)]
    }

    /// Write entry `(i, j)`.
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: T) {
        self.data_mut()[index::tensor2(D::ND, i, j)] = value;
    }

    /// Fill with zeros.
    pub fn set_zero(&mut self) {
        self.data_mut().fill(T::zero());
    }

    /// Fill with ones.
    pub fn set_ones(&mut self) {
        self.data_mut().fill(T::one());
    }

    /// Fill with a constant.
    pub fn set_constant(&mut self, value: T) {
        self.data_mut().fill(value);
    }

    /// Fill with `0, 1, 2, ...` in storage order.
    pub fn set_arange(&mut self) {
        for (i, x) in self.data_mut().iter_mut().enumerate() {
            *x = T::from_usize(i);
        }
    }

    /// Set to the second-order identity tensor.
    pub fn set_identity(&mut self) {
        self.set_zero();
        for i in 0..D::ND {
            self.data_mut()[index::tensor2(D::ND, i, i)] = T::one();
        }
    }

    /// Copy entries from a slice of matching length.
    pub fn set_copy(&mut self, src: &[T]) {
        debug_assert_eq!(src.len(), self.size());
        self.data_mut().copy_from_slice(src);
    }

    /// Same as [`Self::set_copy`] for the dense kind.
    pub fn set_copy_dense(&mut self, src: &[T]) {
        self.set_copy(src);
    }

    /// Copy the entries into `dst`.
    pub fn copy_to(&self, dst: &mut [T]) {
        debug_assert_eq!(dst.len(), self.size());
        dst.copy_from_slice(self.data());
    }

    /// Copy into a full `ND * ND` row-major dense buffer.
    pub fn copy_to_dense(&self, dst: &mut [T]) {
        self.copy_to(dst);
    }

    /// Packed entries as a `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        self.data().to_vec()
    }

    /// Copy into the runtime-dimensioned family.
    pub fn to_cartesian(&self) -> crate::cartesian::Tensor2<T> {
        crate::cartesian::Tensor2::from_vec(D::ND, self.to_vec())
            .expect("fixed-size buffer length matches its dimension")
    }

    /// `true` if `A_ij == A_ji` for every entry.
    pub fn is_symmetric(&self) -> bool {
        for i in 0..D::ND {
            for j in (i + 1)..D::ND {
                if self.get(i, j) != self.get(j, i) {
                    return false;
                }
            }
        }
        true
    }

    /// `true` if every off-diagonal entry is zero.
    pub fn is_diagonal(&self) -> bool {
        for i in 0..D::ND {
            for j in 0..D::ND {
                if i != j && self.get(i, j) != T::zero() {
                    return false;
                }
            }
        }
        true
    }

    /// Transpose, `C_ij = A_ji`.
    pub fn t(&self) -> Self {
        let mut out = Self::zero();
        linalg::transpose_t2(D::ND, self.data(), out.data_mut());
        out
    }

    /// Trace, `A_ii`.
    pub fn trace(&self) -> T {
        linalg::trace_t2(D::ND, self.data())
    }

    /// Determinant via the closed-form cofactor expansion.
    pub fn det(&self) -> T {
        linalg::det_t2(D::ND, self.data())
    }

    /// Inverse via the adjugate divided by the determinant; singular input
    /// produces non-finite entries per IEEE arithmetic.
    pub fn inv(&self) -> Self {
        let mut out = Self::zero();
        linalg::inv_t2(D::ND, self.data(), out.data_mut());
        out
    }

    /// Checked inverse.
    ///
    /// # Errors
    ///
    /// Returns `Singular` for a zero determinant.
    pub fn try_inv(&self) -> Result<Self, crate::error::TensorError> {
        if self.det() == T::zero() {
            return Err(crate::error::TensorError::Singular);
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

    /// Sum of absolute values.
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

    /// Sum of the entries.
    pub fn sum(&self) -> T {
        reduce::sum(self.data())
    }

    /// Mean over the `ND * ND` entries.
    pub fn mean(&self) -> T {
        self.sum() / T::from_usize(D::ND * D::ND)
    }

    /// Weighted average; divides by the weight sum unless `normalize` is
    /// `false`.
    pub fn average(&self, weights: &Self, normalize: bool) -> T {
        let mut out = T::zero();
        for i in 0..self.size() {
            out += self.data()[i] * weights.data()[i];
        }
        if normalize {
            out / weights.sum()
        } else {
            out
        }
    }
}

impl<T: Scalar + RandomUniform, D: Dim> Tensor2<T, D> {
    /// Tensor with uniform random entries in `[lower, upper)`.
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

    /// Fill with uniform random entries in `[lower, upper)`.
    pub fn set_random(&mut self, lower: T, upper: T) {
        fill_uniform(self.data_mut(), lower, upper, &mut rand::rng());
    }

    /// Like [`Self::set_random`], threading an explicit generator.
    pub fn set_random_with_rng<R: Rng>(&mut self, lower: T, upper: T, rng: &mut R) {
        fill_uniform(self.data_mut(), lower, upper, rng);
    }
}

impl<T: Scalar, D: Dim> Default for Tensor2<T, D> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Scalar, D: Dim> std::ops::Index<usize> for Tensor2<T, D> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.data()[i]
    }
}

impl<T: Scalar, D: Dim> std::ops::IndexMut<usize> for Tensor2<T, D> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data_mut()[i]
    }
}

impl<T: Scalar + fmt::Display, D: Dim> fmt::Display for Tensor2<T, D> {
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
    use crate::tiny::{D2, D3};
    use approx::assert_relative_eq;

    #[test]
    fn test_identity() {
        let i: Tensor2<f64, D3> = Tensor2::identity();
        for a in 0..3 {
            for b in 0..3 {
                assert_eq!(i.get(a, b), if a == b { 1.0 } else { 0.0 });
            }
        }
    }

    #[test]
    fn test_no_heap_size() {
        assert_eq!(
            std::mem::size_of::<Tensor2<f64, D3>>(),
            9 * std::mem::size_of::<f64>()
        );
    }

    #[test]
    fn test_det_inv() {
        let a: Tensor2<f64, D2> = Tensor2::from_slice(&[2.0, 0.0, 0.0, 4.0]);
        assert_eq!(a.det(), 8.0);
        let inv = a.inv();
        assert_relative_eq!(inv.get(0, 0), 0.5);
        assert_relative_eq!(inv.get(1, 1), 0.25);
    }

    #[test]
    fn test_transpose_involution() {
        let a: Tensor2<f64, D3> = Tensor2::arange();
        assert_eq!(a.t().t(), a);
    }

    #[test]
    fn test_try_inv_singular() {
        let a: Tensor2<f64, D2> = Tensor2::zero();
        assert!(a.try_inv().is_err());
    }

    #[test]
    fn test_to_cartesian() {
        let a: Tensor2<f64, D2> = Tensor2::arange();
        let b = a.to_cartesian();
        assert_eq!(b.nd(), 2);
        assert_eq!(b.data(), a.data());
    }
}
