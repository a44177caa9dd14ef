//! Fixed-size symmetric rank-2 tensor, packed upper-triangular inline
//! storage.

use std::fmt;

use rand::Rng;

use crate::backend::{linalg, reduce};
use crate::error::TensorError;
use crate::index;
use crate::random::{fill_uniform, RandomUniform};
use crate::scalar::Scalar;

use super::dim::{Buffer, Dim};

/// Fixed-size counterpart of [`crate::cartesian::Tensor2s`].
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor2s<T: Scalar, D: Dim> {
    data: D::Buf2s<T>,
}

impl<T: Scalar, D: Dim> Tensor2s<T, D> {
    /// Zero-initialized tensor.
    pub fn zero() -> Self {
        Self {
            data: Buffer::filled(T::zero()),
        }
    }

    /// Tensor whose logical entries are all one.
    pub fn ones() -> Self {
        Self::constant(T::one())
    }

    /// Tensor whose logical entries all equal `value`.
    pub fn constant(value: T) -> Self {
        Self {
            data: Buffer::filled(value),
        }
    }

    /// Tensor holding `0, 1, 2, ...` in packed storage order.
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

    /// Copy the packed upper-triangle entries from a slice.
    pub fn from_slice(src: &[T]) -> Self {
        let mut out = Self::zero();
        out.set_copy(src);
        out
    }

    /// Copy from a full `ND * ND` row-major dense buffer, keeping the upper
    /// triangle. The source must be symmetric (debug-asserted only); use
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
    /// Returns `ShapeMismatch` on a wrong source length and `NotSymmetric`
    /// if any mirror pair differs.
    pub fn try_from_dense(src: &[T]) -> Result<Self, TensorError> {
        let nd = D::ND;
        if src.len() != index::tensor2_size(nd) {
            return Err(TensorError::ShapeMismatch {
                expected: index::tensor2_size(nd),
                actual: src.len(),
            });
        }
        for i in 0..nd {
            for j in (i + 1)..nd {
                if src[i * nd + j] != src[j * nd + i] {
                    return Err(TensorError::NotSymmetric { i, j });
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

    /// Number of stored entries (`ND * (ND + 1) / 2`).
    #[inline]
    pub fn size(&self) -> usize {
        index::tensor2s_size(D::ND)
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

    /// Compress `(i, j)` to a packed storage offset; mirror pairs compress
    /// to the same offset.
    #[inline]
    pub fn compress(&self, i: usize, j: usize) -> usize {
        index::tensor2s(D::ND, i, j)
    }

    /// Decompress a packed storage offset to `(i, j)` with `i <= j`.
    #[inline]
    pub fn decompress(&self, offset: usize) -> (usize, usize) {
        index::tensor2s_unpack(D::ND, offset)
    }

    /// Read entry `(i, j)`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> T {
        self.data()[index::tensor2s(D::ND, i, j)]
    }

    /// Mutable access to entry `(i, j)`; also reaches the mirror `(j, i)`.
    #[inline]
    pub fn get_mut(&mut self, i: usize, j: usize) -> &mut T {
        &mut self.data_mut()[index::tensor2s(D::ND, i, j)]
    }

    /// Write entry `(i, j)` (and thereby its mirror `(j, i)`).
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: T) {
        self.data_mut()[index::tensor2s(D::ND, i, j)] = value;
    }

    /// Fill with zeros.
    pub fn set_zero(&mut self) {
        self.data_mut().fill(T::zero());
    }

    /// Set every logical entry to one.
    pub fn set_ones(&mut self) {
        self.data_mut().fill(T::one());
    }

    /// Set every logical entry to a constant.
    pub fn set_constant(&mut self, value: T) {
        self.data_mut().fill(value);
    }

    /// Fill with `0, 1, 2, ...` in packed storage order.
    pub fn set_arange(&mut self) {
        for (i, x) in self.data_mut().iter_mut().enumerate() {
            *x = T::from_usize(i);
        }
    }

    /// Set to the second-order identity tensor.
    pub fn set_identity(&mut self) {
        self.set_zero();
        for i in 0..D::ND {
            self.data_mut()[index::tensor2s(D::ND, i, i)] = T::one();
        }
    }

    /// Copy packed entries from a slice of matching length.
    pub fn set_copy(&mut self, src: &[T]) {
        debug_assert_eq!(src.len(), self.size());
        self.data_mut().copy_from_slice(src);
    }

    /// Copy from a full `ND * ND` row-major dense buffer, dropping the
    /// (redundant) lower triangle. The source must be symmetric; debug
    /// builds assert this, release builds do not check.
    pub fn set_copy_dense(&mut self, src: &[T]) {
        let nd = D::ND;
        debug_assert_eq!(src.len(), index::tensor2_size(nd));
        #[cfg(debug_assertions)]
        for i in 0..nd {
            for j in (i + 1)..nd {
                debug_assert!(
                    src[i * nd + j] == src[j * nd + i],
                    "dense source is not symmetric at ({i},{j})"
                );
            }
        }
        for i in 0..nd {
            for j in i..nd {
                self.data_mut()[index::tensor2s(nd, i, j)] = src[i * nd + j];
            }
        }
    }

    /// Copy the packed entries into `dst`.
    pub fn copy_to(&self, dst: &mut [T]) {
        debug_assert_eq!(dst.len(), self.size());
        dst.copy_from_slice(self.data());
    }

    /// Copy into a full `ND * ND` row-major dense buffer, materializing
    /// both triangles.
    pub fn copy_to_dense(&self, dst: &mut [T]) {
        let nd = D::ND;
        debug_assert_eq!(dst.len(), index::tensor2_size(nd));
        for i in 0..nd {
            for j in i..nd {
                let x = self.data()[index::tensor2s(nd, i, j)];
                dst[i * nd + j] = x;
                dst[j * nd + i] = x;
            }
        }
    }

    /// Packed entries as a `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        self.data().to_vec()
    }

    /// Copy into the runtime-dimensioned family.
    pub fn to_cartesian(&self) -> crate::cartesian::Tensor2s<T> {
        crate::cartesian::Tensor2s::from_vec(D::ND, self.to_vec())
            .expect("fixed-size buffer length matches its dimension")
    }

    /// `true` if every off-diagonal entry is zero.
    pub fn is_diagonal(&self) -> bool {
        for i in 0..D::ND {
            for j in (i + 1)..D::ND {
                if self.get(i, j) != T::zero() {
                    return false;
                }
            }
        }
        true
    }

    /// Transpose; a symmetric tensor equals its transpose.
    pub fn t(&self) -> Self {
        self.clone()
    }

    /// Trace, `A_ii`.
    pub fn trace(&self) -> T {
        linalg::trace_t2s(D::ND, self.data())
    }

    /// Determinant via the symmetric closed form on the packed triangle.
    pub fn det(&self) -> T {
        linalg::det_t2s(D::ND, self.data())
    }

    /// Inverse via the packed symmetric adjugate; singular input produces
    /// non-finite entries per IEEE arithmetic.
    pub fn inv(&self) -> Self {
        let mut out = Self::zero();
        linalg::inv_t2s(D::ND, self.data(), out.data_mut());
        out
    }

    /// Checked inverse.
    ///
    /// # Errors
    ///
    /// Returns `Singular` for a zero determinant.
    pub fn try_inv(&self) -> Result<Self, TensorError> {
        if self.det() == T::zero() {
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

    /// Sum of absolute values of the packed entries.
    pub fn norm(&self) -> T {
        reduce::norm(self.data())
    }

    /// Packed offset of the minimum stored entry.
    pub fn argmin(&self) -> usize {
        reduce::argmin(self.data())
    }

    /// Packed offset of the maximum stored entry.
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

    /// Logical sum over all `ND * ND` entries; packed off-diagonal entries
    /// count twice.
    pub fn sum(&self) -> T {
        reduce::sum_t2s(D::ND, self.data())
    }

    /// Mean over the `ND * ND` logical entries.
    pub fn mean(&self) -> T {
        self.sum() / T::from_usize(D::ND * D::ND)
    }

    /// Weighted average over the logical entries; divides by the weight sum
    /// unless `normalize` is `false`.
    pub fn average(&self, weights: &Self, normalize: bool) -> T {
        let mut prod = self.clone();
        for i in 0..prod.size() {
            prod.data_mut()[i] *= weights.data()[i];
        }
        if normalize {
            prod.sum() / weights.sum()
        } else {
            prod.sum()
        }
    }
}

impl<T: Scalar + RandomUniform, D: Dim> Tensor2s<T, D> {
    /// Tensor with uniform random packed entries in `[lower, upper)`.
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

    /// Fill the packed entries with uniform random values.
    pub fn set_random(&mut self, lower: T, upper: T) {
        fill_uniform(self.data_mut(), lower, upper, &mut rand::rng());
    }

    /// Like [`Self::set_random`], threading an explicit generator.
    pub fn set_random_with_rng<R: Rng>(&mut self, lower: T, upper: T, rng: &mut R) {
        fill_uniform(self.data_mut(), lower, upper, rng);
    }
}

impl<T: Scalar, D: Dim> Default for Tensor2s<T, D> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Scalar, D: Dim> std::ops::Index<usize> for Tensor2s<T, D> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.data()[i]
    }
}

impl<T: Scalar, D: Dim> std::ops::IndexMut<usize> for Tensor2s<T, D> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data_mut()[i]
    }
}

impl<T: Scalar + fmt::Display, D: Dim> fmt::Display for Tensor2s<T, D> {
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
            std::mem::size_of::<Tensor2s<f64, D3>>(),
            6 * std::mem::size_of::<f64>()
        );
    }

    #[test]
    fn test_mirror_access() {
        let mut a: Tensor2s<f64, D3> = Tensor2s::zero();
        a.set(0, 2, 5.0);
        assert_eq!(a.get(2, 0), 5.0);
    }

    #[test]
    fn test_from_dense_checked() {
        let dense = [2.0, 1.0, 0.0, 1.0, 3.0, 1.0, 0.0, 1.0, 4.0];
        let a: Tensor2s<f64, D3> = Tensor2s::try_from_dense(&dense).unwrap();
        assert_eq!(a.data(), &[2.0, 1.0, 0.0, 3.0, 1.0, 4.0]);

        let bad = [1.0, 2.0, 0.0, 3.0, 4.0, 0.0, 0.0, 0.0, 5.0];
        assert!(Tensor2s::<f64, D3>::try_from_dense(&bad).is_err());
    }

    #[test]
    fn test_det_inv() {
        let a: Tensor2s<f64, D3> =
            Tensor2s::from_slice(&[2.0, 1.0, 0.0, 3.0, 1.0, 4.0]);
        assert_relative_eq!(a.det(), 18.0);
        let inv = a.inv();
        let prod = crate::ops::Dot::dot(&a, &inv);
        for i in 0..3 {
            for j in 0..3 {
                let expect = if i == j { 1.0 } else { 0.0 };
                assert_relative_eq!(prod.get(i, j), expect, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_weighted_sum() {
        let a: Tensor2s<f64, D3> = Tensor2s::ones();
        // 3 diagonal entries + 2 * 3 off-diagonal entries
        assert_eq!(a.sum(), 9.0);
        assert_eq!(a.mean(), 1.0);
    }
}
