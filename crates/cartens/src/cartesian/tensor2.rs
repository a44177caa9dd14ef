//! Runtime-dimensioned dense rank-2 tensor.

use std::fmt;

use rand::Rng;

use crate::backend::{linalg, reduce};
use crate::error::TensorError;
use crate::index;
use crate::random::{fill_uniform, RandomUniform};
use crate::scalar::Scalar;

/// Rank-2 Cartesian tensor with runtime dimension, dense row-major storage.
///
/// No symmetry is assumed; all `nd * nd` entries are stored.
///
/// # Example
///
/// ```
/// use cartens::cartesian::Tensor2;
///
/// let a = Tensor2::from_vec(2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
/// assert_eq!(a.get(1, 0), 3.0);
/// assert_eq!(a.trace(), 5.0);
/// ```
#[derive(Debug, Clone)]
pub struct Tensor2<T: Scalar> {
    nd: usize,
    data: Vec<T>,
    periodic: bool,
}

impl<T: Scalar> Tensor2<T> {
    /// Create a zero-initialized tensor.
    pub fn zero(nd: usize) -> Self {
        Self {
            nd,
            data: vec![T::zero(); index::tensor2_size(nd)],
            periodic: false,
        }
    }

    /// Create a tensor filled with ones.
    pub fn ones(nd: usize) -> Self {
        Self::constant(nd, T::one())
    }

    /// Create a tensor filled with a constant.
    pub fn constant(nd: usize, value: T) -> Self {
        Self {
            nd,
            data: vec![value; index::tensor2_size(nd)],
            periodic: false,
        }
    }

    /// Create a tensor holding `0, 1, 2, ...` in storage order.
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

    /// Create a tensor from packed row-major entries.
    ///
    /// # Errors
    ///
    /// Returns `TensorError::ShapeMismatch` if the data length is not
    /// `nd * nd`.
    pub fn from_vec(nd: usize, data: Vec<T>) -> Result<Self, TensorError> {
        let expected = index::tensor2_size(nd);
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

    /// Number of dimensions.
    #[inline]
    pub fn nd(&self) -> usize {
        self.nd
    }

    /// Number of stored entries (`nd * nd`).
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

    /// Compress `(i, j)` to a storage offset.
    #[inline]
    pub fn compress(&self, i: usize, j: usize) -> usize {
        index::tensor2(self.nd, i, j)
    }

    /// Decompress a storage offset to `(i, j)`.
    #[inline]
    pub fn decompress(&self, offset: usize) -> (usize, usize) {
        index::tensor2_unpack(self.nd, offset)
    }

    /// Read entry `(i, j)`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> T {
        self.data[index::tensor2(self.nd, i, j)]
    }

    /// Mutable access to entry `(i, j)`.
    #[inline]
    pub fn get_mut(&mut self, i: usize, j: usize) -> &mut T {
        &mut self.data[index::tensor2(self.nd, i, j)]
    }

    /// Write entry `(i, j)`.
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: T) {
        self.data[index::tensor2(self.nd, i, j)] = value;
    }

    /// Read entry `(i, j)` with signed indexing; wraps periodically when the
    /// periodic flag is set.
    pub fn at(&self, i: isize, j: isize) -> T {
        let n = self.nd as isize;
        debug_assert!(self.periodic || (i >= 0 && i < n && j >= 0 && j < n));
        let i = index::wrap(i, self.nd);
        let j = index::wrap(j, self.nd);
        self.data[index::tensor2(self.nd, i, j)]
    }

    /// Fill with zeros.
    pub fn set_zero(&mut self) {
        self.data.fill(T::zero());
    }

    /// Fill with ones.
    pub fn set_ones(&mut self) {
        self.data.fill(T::one());
    }

    /// Fill with a constant.
    pub fn set_constant(&mut self, value: T) {
        self.data.fill(value);
    }

    /// Fill with `0, 1, 2, ...` in storage order.
    pub fn set_arange(&mut self) {
        for (i, x) in self.data.iter_mut().enumerate() {
            *x = T::from_usize(i);
        }
    }

    /// Set to the second-order identity tensor.
    pub fn set_identity(&mut self) {
        self.set_zero();
        for i in 0..self.nd {
            self.data[index::tensor2(self.nd, i, i)] = T::one();
        }
    }

    /// Copy packed entries from a slice of matching length.
    pub fn set_copy(&mut self, src: &[T]) {
        debug_assert_eq!(src.len(), self.data.len());
        self.data.copy_from_slice(src);
    }

    /// Copy from a full `nd * nd` row-major dense buffer. For the dense kind
    /// this is the same as [`Self::set_copy`].
    pub fn set_copy_dense(&mut self, src: &[T]) {
        self.set_copy(src);
    }

    /// Copy the packed entries into `dst`.
    pub fn copy_to(&self, dst: &mut [T]) {
        debug_assert_eq!(dst.len(), self.data.len());
        dst.copy_from_slice(&self.data);
    }

    /// Copy into a full `nd * nd` row-major dense buffer.
    pub fn copy_to_dense(&self, dst: &mut [T]) {
        self.copy_to(dst);
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
            self.data.resize(index::tensor2_size(nd), T::zero());
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

    /// `true` if `A_ij == A_ji` for every entry.
    pub fn is_symmetric(&self) -> bool {
        for i in 0..self.nd {
            for j in (i + 1)..self.nd {
                if self.get(i, j) != self.get(j, i) {
                    return false;
                }
            }
        }
        true
    }

    /// `true` if every off-diagonal entry is zero.
    pub fn is_diagonal(&self) -> bool {
        for i in 0..self.nd {
            for j in 0..self.nd {
                if i != j && self.get(i, j) != T::zero() {
                    return false;
                }
            }
        }
        true
    }

    /// Transpose, `C_ij = A_ji`.
    pub fn t(&self) -> Self {
        let mut out = Self::zero(self.nd);
        linalg::transpose_t2(self.nd, &self.data, &mut out.data);
        out
    }

    /// Trace, `A_ii`.
    pub fn trace(&self) -> T {
        linalg::trace_t2(self.nd, &self.data)
    }

    /// Determinant via the closed-form cofactor expansion.
    ///
    /// # Panics
    ///
    /// Panics for dimensions other than 2 and 3.
    pub fn det(&self) -> T {
        linalg::det_t2(self.nd, &self.data)
    }

    /// Inverse via the adjugate divided by the determinant. A singular
    /// tensor produces non-finite entries per IEEE arithmetic.
    ///
    /// # Panics
    ///
    /// Panics for dimensions other than 2 and 3.
    pub fn inv(&self) -> Self {
        let mut out = Self::zero(self.nd);
        linalg::inv_t2(self.nd, &self.data, &mut out.data);
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

    /// Sum of absolute values.
    pub fn norm(&self) -> T {
        reduce::norm(&self.data)
    }

    /// Offset of the minimum stored entry.
    pub fn argmin(&self) -> usize {
        reduce::argmin(&self.data)
    }

    /// Offset of the maximum stored entry.
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

    /// Sum of the entries.
    pub fn sum(&self) -> T {
        reduce::sum(&self.data)
    }

    /// Mean over the `nd * nd` entries.
    pub fn mean(&self) -> T {
        self.sum() / T::from_usize(self.nd * self.nd)
    }

    /// Weighted average; divides by the weight sum unless `normalize` is
    /// `false`.
    pub fn average(&self, weights: &Self, normalize: bool) -> T {
        debug_assert_eq!(self.nd, weights.nd);
        let mut out = T::zero();
        for i in 0..self.data.len() {
            out += self.data[i] * weights.data[i];
        }
        if normalize {
            out / weights.sum()
        } else {
            out
        }
    }
}

impl<T: Scalar + RandomUniform> Tensor2<T> {
    /// Create a tensor with uniform random entries in `[lower, upper)`.
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

    /// Fill with uniform random entries in `[lower, upper)`.
    pub fn set_random(&mut self, lower: T, upper: T) {
        fill_uniform(&mut self.data, lower, upper, &mut rand::rng());
    }

    /// Like [`Self::set_random`], threading an explicit generator.
    pub fn set_random_with_rng<R: Rng>(&mut self, lower: T, upper: T, rng: &mut R) {
        fill_uniform(&mut self.data, lower, upper, rng);
    }
}

impl<T: Scalar> PartialEq for Tensor2<T> {
    fn eq(&self, other: &Self) -> bool {
        self.nd == other.nd && self.data == other.data
    }
}

impl<T: Scalar> std::ops::Index<usize> for Tensor2<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<T: Scalar> std::ops::IndexMut<usize> for Tensor2<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i]
    }
}

impl<T: Scalar + fmt::Display> fmt::Display for Tensor2<T> {
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
    fn test_identity() {
        let i: Tensor2<f64> = Tensor2::identity(3);
        for a in 0..3 {
            for b in 0..3 {
                assert_eq!(i.get(a, b), if a == b { 1.0 } else { 0.0 });
            }
        }
    }

    #[test]
    fn test_get_set() {
        let mut a: Tensor2<f64> = Tensor2::zero(2);
        a.set(0, 1, 5.0);
        assert_eq!(a.get(0, 1), 5.0);
        assert_eq!(a[1], 5.0);
        *a.get_mut(1, 0) = 2.0;
        assert_eq!(a.get(1, 0), 2.0);
    }

    #[test]
    fn test_compress_roundtrip() {
        let a: Tensor2<f64> = Tensor2::zero(3);
        for offset in 0..a.size() {
            let (i, j) = a.decompress(offset);
            assert_eq!(a.compress(i, j), offset);
        }
    }

    #[test]
    fn test_periodic_at() {
        let mut a = Tensor2::from_vec(2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        a.set_periodic(true);
        assert_eq!(a.at(-1, -1), 4.0);
        assert_eq!(a.at(2, 0), 1.0);
    }

    #[test]
    fn test_transpose_involution() {
        let a = Tensor2::from_vec(2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(a.t().t(), a);
        assert_eq!(a.t().get(0, 1), 3.0);
    }

    #[test]
    fn test_structure_checks() {
        let s = Tensor2::from_vec(2, vec![1.0, 2.0, 2.0, 5.0]).unwrap();
        assert!(s.is_symmetric());
        assert!(!s.is_diagonal());

        let d = Tensor2::from_vec(2, vec![1.0, 0.0, 0.0, 5.0]).unwrap();
        assert!(d.is_diagonal());

        let g = Tensor2::from_vec(2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert!(!g.is_symmetric());
        assert!(!g.is_diagonal());
    }

    #[test]
    fn test_det_inv_consistency() {
        let a = Tensor2::from_vec(3, vec![2.0, 1.0, 0.0, 1.0, 3.0, 1.0, 0.0, 1.0, 4.0]).unwrap();
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
    fn test_try_inv_singular() {
        let a: Tensor2<f64> = Tensor2::zero(2);
        assert!(matches!(a.try_inv(), Err(TensorError::Singular)));

        let b: Tensor2<f64> = Tensor2::identity(4);
        assert!(matches!(
            b.try_inv(),
            Err(TensorError::UnsupportedDim { nd: 4 })
        ));
    }

    #[test]
    fn test_reductions() {
        let a = Tensor2::from_vec(2, vec![1.0, -2.0, 3.0, -4.0]).unwrap();
        assert_eq!(a.norm(), 10.0);
        assert_eq!(a.sum(), -2.0);
        assert_eq!(a.mean(), -0.5);
        assert_eq!(a.argmax(), 2);
    }

    #[test]
    fn test_reshape() {
        let mut a: Tensor2<f64> = Tensor2::zero(2);
        a.reshape(&[3, 3]).unwrap();
        assert_eq!(a.size(), 9);
        assert!(a.reshape(&[2, 3]).is_err());
        assert!(a.reshape(&[3]).is_err());
    }

    #[test]
    fn test_display() {
        let a = Tensor2::from_vec(2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(format!("{a}"), "1, 2; 3, 4;");
    }
}
