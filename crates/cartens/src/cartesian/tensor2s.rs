//! Runtime-dimensioned symmetric rank-2 tensor, packed upper-triangular
//! storage.

use std::fmt;

use rand::Rng;

use crate::backend::{linalg, reduce};
use crate::error::TensorError;
use crate::index;
use crate::random::{fill_uniform, RandomUniform};
use crate::scalar::Scalar;

/// Rank-2 Cartesian tensor with runtime dimension and `A_ij == A_ji`
/// guaranteed by storage: only the `nd * (nd + 1) / 2` upper-triangle
/// entries exist, and both `(i, j)` and `(j, i)` resolve to the same packed
/// slot.
///
/// # Example
///
/// ```
/// use cartens::cartesian::Tensor2s;
///
/// let mut a: Tensor2s<f64> = Tensor2s::zero(3);
/// a.set(0, 2, 5.0);
/// assert_eq!(a.get(2, 0), 5.0);
/// ```
#[derive(Debug, Clone)]
pub struct Tensor2s<T: Scalar> {
    nd: usize,
    data: Vec<T>,
    periodic: bool,
}

impl<T: Scalar> Tensor2s<T> {
    /// Create a zero-initialized tensor.
    pub fn zero(nd: usize) -> Self {
        Self {
            nd,
            data: vec![T::zero(); index::tensor2s_size(nd)],
            periodic: false,
        }
    }

    /// Create a tensor whose logical entries are all one.
    pub fn ones(nd: usize) -> Self {
        Self::constant(nd, T::one())
    }

    /// Create a tensor whose logical entries all equal `value`.
    pub fn constant(nd: usize, value: T) -> Self {
        Self {
            nd,
            data: vec![value; index::tensor2s_size(nd)],
            periodic: false,
        }
    }

    /// Create a tensor holding `0, 1, 2, ...` in packed storage order.
    pub fn arange(nd: usize) -> Self {
        let mut out = Self::zero(nd);
        out.set_arange();
        out
    }

    /// Create the second-order identity tensor.
    pub fn identity(nd: usize) -> Self {
        let mut out = Self::zero(nd);
        out.set_identity();
        out
    }

    /// Create a tensor from packed upper-triangle entries
    /// (`[A00, A01, .., A11, ..]`).
    ///
    /// # Errors
    ///
    /// Returns `TensorError::ShapeMismatch` if the data length is not
    /// `nd * (nd + 1) / 2`.
    pub fn from_vec(nd: usize, data: Vec<T>) -> Result<Self, TensorError> {
        let expected = index::tensor2s_size(nd);
        if data.len() != expected {
            return Err(TensorError::ShapeMismatch {
                expected,
                actual: data.len(),
            });
        }
        Ok(Self {
            nd,
            data,
            periodic: false,
        })
    }

    /// Create a tensor from a full `nd * nd` row-major dense buffer,
    /// keeping the upper triangle.
    ///
    /// The source must actually be symmetric; this is debug-asserted only,
    /// a non-symmetric source in a release build silently loses its lower
    /// triangle. Use [`Self::try_from_dense`] for a checked conversion.
    pub fn from_dense(nd: usize, src: &[T]) -> Self {
        let mut out = Self::zero(nd);
        out.set_copy_dense(src);
        out
    }

    /// Checked conversion from a full `nd * nd` row-major dense buffer.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` on a wrong source length and `NotSymmetric`
    /// if any mirror pair differs.
    pub fn try_from_dense(nd: usize, src: &[T]) -> Result<Self, TensorError> {
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
        Ok(Self::from_dense(nd, src))
    }

    /// Number of dimensions.
    #[inline]
    pub fn nd(&self) -> usize {
        self.nd
    }

    /// Number of stored entries (`nd * (nd + 1) / 2`).
    #[inline]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Rank (number of axes).
    #[inline]
    pub fn rank(&self) -> usize {
        2
    }

    /// Shape along each axis.
    pub fn shape(&self) -> Vec<usize> {
        vec![self.nd; 2]
    }

    /// Enable or disable periodic (wrapping) signed indexing via [`Self::at`].
    pub fn set_periodic(&mut self, periodic: bool) {
        self.periodic = periodic;
    }

    /// Packed storage as a slice.
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Packed storage as a mutable slice.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Iterate over the packed storage.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Iterate mutably over the packed storage.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Compress `(i, j)` to a packed storage offset; `(i, j)` and `(j, i)`
    /// compress to the same offset.
    #[inline]
    pub fn compress(&self, i: usize, j: usize) -> usize {
        index::tensor2s(self.nd, i, j)
    }

    /// Decompress a packed storage offset to `(i, j)` with `i <= j`.
    #[inline]
    pub fn decompress(&self, offset: usize) -> (usize, usize) {
        index::tensor2s_unpack(self.nd, offset)
    }

    /// Read entry `(i, j)`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> T {
        self.data[index::tensor2s(self.nd, i, j)]
    }

    /// Mutable access to entry `(i, j)`; writing through it also updates
    /// the logical mirror entry `(j, i)`.
    #[inline]
    pub fn get_mut(&mut self, i: usize, j: usize) -> &mut T {
        &mut self.data[index::tensor2s(self.nd, i, j)]
    }

    /// Write entry `(i, j)` (and thereby its mirror `(j, i)`).
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: T) {
        self.data[index::tensor2s(self.nd, i, j)] = value;
    }

    /// Read entry `(i, j)` with signed indexing; wraps periodically when
    /// the periodic flag is set.
    pub fn at(&self, i: isize, j: isize) -> T {
        let n = self.nd as isize;
        debug_assert!(self.periodic || (i >= 0 && i < n && j >= 0 && j < n));
        let i = index::wrap(i, self.nd);
        let j = index::wrap(j, self.nd);
        self.data[index::tensor2s(self.nd, i, j)]
    }

    /// Fill with zeros.
    pub fn set_zero(&mut self) {
        self.data.fill(T::zero());
    }

    /// Set every logical entry to one.
    pub fn set_ones(&mut self) {
        self.data.fill(T::one());
    }

    /// Set every logical entry to a constant.
    pub fn set_constant(&mut self, value: T) {
        self.data.fill(value);
    }

    /// Fill with `0, 1, 2, ...` in packed storage order.
    pub fn set_arange(&mut self) {
        for (i, x) in self.data.iter_mut().enumerate() {
            *x = T::from_usize(i);
        }
    }

    /// Set to the second-order identity tensor.
    pub fn set_identity(&mut self) {
        self.set_zero();
        for i in 0..self.nd {
            self.data[index::tensor2s(self.nd, i, i)] = T::one();
        }
    }

    /// Copy packed entries from a slice of matching length.
    pub fn set_copy(&mut self, src: &[T]) {
        debug_assert_eq!(src.len(), self.data.len());
        self.data.copy_from_slice(src);
    }

    /// Copy from a full `nd * nd` row-major dense buffer, dropping the
    /// (redundant) lower triangle.
    ///
    /// The source must be symmetric; debug builds assert this, release
    /// builds do not check.
    pub fn set_copy_dense(&mut self, src: &[T]) {
        let nd = self.nd;
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
                self.data[index::tensor2s(nd, i, j)] = src[i * nd + j];
            }
        }
    }

    /// Copy the packed entries into `dst`.
    pub fn copy_to(&self, dst: &mut [T]) {
        debug_assert_eq!(dst.len(), self.data.len());
        dst.copy_from_slice(&self.data);
    }

    /// Copy into a full `nd * nd` row-major dense buffer, materializing
    /// both triangles.
    pub fn copy_to_dense(&self, dst: &mut [T]) {
        let nd = self.nd;
        debug_assert_eq!(dst.len(), index::tensor2_size(nd));
        for i in 0..nd {
            for j in i..nd {
                let x = self.data[index::tensor2s(nd, i, j)];
                dst[i * nd + j] = x;
                dst[j * nd + i] = x;
            }
        }
    }

    /// Packed entries as a `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        self.data.clone()
    }

    /// Resize to a new dimension. A size-changing resize reallocates and
    /// leaves the contents unspecified.
    pub fn resize(&mut self, nd: usize) {
        if nd != self.nd {
            self.nd = nd;
            self.data.resize(index::tensor2s_size(nd), T::zero());
        }
    }

    /// Reshape to the given shape.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` for a rank other than 2 and `NotSquare` for
    /// unequal axes.
    pub fn reshape(&mut self, shape: &[usize]) -> Result<(), TensorError> {
        if shape.len() != 2 {
            return Err(TensorError::ShapeMismatch {
                expected: 2,
                actual: shape.len(),
            });
        }
        if shape[0] != shape[1] {
            return Err(TensorError::NotSquare {
                rows: shape[0],
                cols: shape[1],
            });
        }
        self.resize(shape[0]);
        Ok(())
    }

    /// `true` if every off-diagonal entry is zero.
    pub fn is_diagonal(&self) -> bool {
        for i in 0..self.nd {
            for j in (i + 1)..self.nd {
                if self.get(i, j) != T::zero() {
                    return false;
                }
            }
        }
        true
    }

    /// Transpose; a symmetric tensor equals its transpose, so this is a
    /// copy.
    pub fn t(&self) -> Self {
        self.clone()
    }

    /// Trace, `A_ii`.
    pub fn trace(&self) -> T {
        linalg::trace_t2s(self.nd, &self.data)
    }

    /// Determinant via the symmetric closed form on the packed triangle.
    ///
    /// # Panics
    ///
    /// Panics for dimensions other than 2 and 3.
    pub fn det(&self) -> T {
        linalg::det_t2s(self.nd, &self.data)
    }

    /// Inverse via the packed symmetric adjugate; the inverse of a
    /// symmetric tensor is symmetric, so the result stays packed. A
    /// singular tensor produces non-finite entries per IEEE arithmetic.
    ///
    /// # Panics
    ///
    /// Panics for dimensions other than 2 and 3.
    pub fn inv(&self) -> Self {
        let mut out = Self::zero(self.nd);
        linalg::inv_t2s(self.nd, &self.data, &mut out.data);
        out
    }

    /// Checked inverse: fails on singular input instead of producing
    /// non-finite entries.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedDim` for dimensions other than 2 and 3, and
    /// `Singular` for a zero determinant.
    pub fn try_inv(&self) -> Result<Self, TensorError> {
        if self.nd != 2 && self.nd != 3 {
            return Err(TensorError::UnsupportedDim { nd: self.nd });
        }
        if self.det() == T::zero() {
            return Err(TensorError::Singular);
        }
        Ok(self.inv())
    }

    /// Entry-wise absolute value.
    pub fn abs(&self) -> Self {
        let mut out = self.clone();
        for x in out.data.iter_mut() {
            *x = x.abs();
        }
        out
    }

    /// Sum of absolute values of the packed entries.
    pub fn norm(&self) -> T {
        reduce::norm(&self.data)
    }

    /// Packed offset of the minimum stored entry (see [`Self::decompress`]).
    pub fn argmin(&self) -> usize {
        reduce::argmin(&self.data)
    }

    /// Packed offset of the maximum stored entry.
    pub fn argmax(&self) -> usize {
        reduce::argmax(&self.data)
    }

    /// Minimum stored entry.
    pub fn min(&self) -> T {
        reduce::min(&self.data)
    }

    /// Maximum stored entry.
    pub fn max(&self) -> T {
        reduce::max(&self.data)
    }

    /// Logical sum over all `nd * nd` entries: each packed off-diagonal
    /// entry stands for two logical entries and counts twice.
    pub fn sum(&self) -> T {
        reduce::sum_t2s(self.nd, &self.data)
    }

    /// Mean over the `nd * nd` logical entries.
    pub fn mean(&self) -> T {
        self.sum() / T::from_usize(self.nd * self.nd)
    }

    /// Weighted average over the logical entries; divides by the weight sum
    /// unless `normalize` is `false`.
    pub fn average(&self, weights: &Self, normalize: bool) -> T {
        debug_assert_eq!(self.nd, weights.nd);
        let mut prod = self.clone();
        for i in 0..prod.data.len() {
            prod.data[i] *= weights.data[i];
        }
        if normalize {
            prod.sum() / weights.sum()
        } else {
            prod.sum()
        }
    }
}

impl<T: Scalar + RandomUniform> Tensor2s<T> {
    /// Create a tensor with uniform random packed entries in
    /// `[lower, upper)`.
    pub fn random(nd: usize, lower: T, upper: T) -> Self {
        let mut out = Self::zero(nd);
        out.set_random(lower, upper);
        out
    }

    /// Like [`Self::random`], threading an explicit generator.
    pub fn random_with_rng<R: Rng>(nd: usize, lower: T, upper: T, rng: &mut R) -> Self {
        let mut out = Self::zero(nd);
        out.set_random_with_rng(lower, upper, rng);
        out
    }

    /// Fill the packed entries with uniform random values in
    /// `[lower, upper)`.
    pub fn set_random(&mut self, lower: T, upper: T) {
        fill_uniform(&mut self.data, lower, upper, &mut rand::rng());
    }

    /// Like [`Self::set_random`], threading an explicit generator.
    pub fn set_random_with_rng<R: Rng>(&mut self, lower: T, upper: T, rng: &mut R) {
        fill_uniform(&mut self.data, lower, upper, rng);
    }
}

impl<T: Scalar> PartialEq for Tensor2s<T> {
    fn eq(&self, other: &Self) -> bool {
        self.nd == other.nd && self.data == other.data
    }
}

impl<T: Scalar> std::ops::Index<usize> for Tensor2s<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<T: Scalar> std::ops::IndexMut<usize> for Tensor2s<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i]
    }
}

impl<T: Scalar + fmt::Display> fmt::Display for Tensor2s<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.nd {
            if i > 0 {
                write!(f, "; ")?;
            }
            for j in 0..self.nd {
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
    use approx::assert_relative_eq;

    #[test]
    fn test_mirror_access() {
        let mut a: Tensor2s<f64> = Tensor2s::zero(3);
        a.set(0, 2, 5.0);
        assert_eq!(a.get(2, 0), 5.0);
        *a.get_mut(2, 1) = 3.0;
        assert_eq!(a.get(1, 2), 3.0);
    }

    #[test]
    fn test_symmetric_closure() {
        let a: Tensor2s<f64> = Tensor2s::arange(3);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(a.get(i, j), a.get(j, i));
            }
        }
    }

    #[test]
    fn test_from_dense_roundtrip() {
        // [[1,2],[2,5]]
        let dense = [1.0, 2.0, 2.0, 5.0];
        let a = Tensor2s::try_from_dense(2, &dense).unwrap();
        assert_eq!(a.data(), &[1.0, 2.0, 5.0]);

        let mut back = [0.0; 4];
        a.copy_to_dense(&mut back);
        assert_eq!(back, dense);
    }

    #[test]
    fn test_try_from_dense_rejects_asymmetric() {
        let dense = [1.0, 2.0, 3.0, 5.0];
        assert!(matches!(
            Tensor2s::try_from_dense(2, &dense),
            Err(TensorError::NotSymmetric { i: 0, j: 1 })
        ));
    }

    #[test]
    fn test_sum_mean_weighted() {
        // [[1,2],[2,5]]: sum 10, mean 2.5
        let a = Tensor2s::from_vec(2, vec![1.0, 2.0, 5.0]).unwrap();
        assert_eq!(a.sum(), 10.0);
        assert_relative_eq!(a.mean(), 2.5);

        let w: Tensor2s<f64> = Tensor2s::ones(2);
        assert_relative_eq!(a.average(&w, true), 2.5);
        assert_relative_eq!(a.average(&w, false), 10.0);
    }

    #[test]
    fn test_trace_det() {
        // [[2,1],[1,3]]
        let a = Tensor2s::from_vec(2, vec![2.0, 1.0, 3.0]).unwrap();
        assert_eq!(a.trace(), 5.0);
        assert_eq!(a.det(), 5.0);
    }

    #[test]
    fn test_inv() {
        let a = Tensor2s::from_vec(3, vec![2.0, 1.0, 0.0, 3.0, 1.0, 4.0]).unwrap();
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
    fn test_transpose_is_copy() {
        let a = Tensor2s::from_vec(2, vec![1.0, 2.0, 5.0]).unwrap();
        assert_eq!(a.t(), a);
    }

    #[test]
    fn test_is_diagonal() {
        let mut a: Tensor2s<f64> = Tensor2s::identity(3);
        assert!(a.is_diagonal());
        a.set(0, 1, 2.0);
        assert!(!a.is_diagonal());
    }

    #[test]
    fn test_display() {
        let a = Tensor2s::from_vec(2, vec![1.0, 2.0, 5.0]).unwrap();
        assert_eq!(format!("{a}"), "1, 2; 2, 5;");
    }
}
