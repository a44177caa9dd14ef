//! Runtime-dimensioned diagonal rank-2 tensor, packed diagonal storage.

use std::fmt;

use rand::Rng;

use crate::backend::{linalg, reduce};
use crate::error::TensorError;
use crate::index;
use crate::random::{fill_uniform, RandomUniform};
use crate::scalar::Scalar;

/// Rank-2 Cartesian tensor with runtime dimension and `A_ij == 0` for
/// `i != j` guaranteed by storage: only the `nd` diagonal entries exist.
///
/// Off-diagonal reads return the zero constant by value; off-diagonal
/// entries cannot be written.
///
/// # Example
///
/// ```
/// use cartens::cartesian::Tensor2d;
///
/// let a = Tensor2d::from_vec(3, vec![2.0, 3.0, 5.0]).unwrap();
/// assert_eq!(a.get(1, 1), 3.0);
/// assert_eq!(a.get(0, 2), 0.0);
/// assert_eq!(a.det(), 30.0);
/// ```
#[derive(Debug, Clone)]
pub struct Tensor2d<T: Scalar> {
    nd: usize,
    data: Vec<T>,
    periodic: bool,
}

impl<T: Scalar> Tensor2d<T> {
    /// Create a zero-initialized tensor.
    pub fn zero(nd: usize) -> Self {
        Self {
            nd,
            data: vec![T::zero(); nd],
            periodic: false,
        }
    }

    /// Create a tensor with every diagonal entry one; this equals the
    /// second-order identity tensor.
    pub fn ones(nd: usize) -> Self {
        Self::constant(nd, T::one())
    }

    /// Create a tensor with every diagonal entry equal to `value`.
    pub fn constant(nd: usize, value: T) -> Self {
        Self {
            nd,
            data: vec![value; nd],
            periodic: false,
        }
    }

    /// Create a tensor holding `0, 1, 2, ...` on the diagonal.
    pub fn arange(nd: usize) -> Self {
        let mut out = Self::zero(nd);
        out.set_arange();
        out
    }

    /// Create the second-order identity tensor.
    pub fn identity(nd: usize) -> Self {
        Self::constant(nd, T::one())
    }

    /// Create a tensor from its diagonal entries.
    ///
    /// # Errors
    ///
    /// Returns `TensorError::ShapeMismatch` if the data length is not `nd`.
    pub fn from_vec(nd: usize, data: Vec<T>) -> Result<Self, TensorError> {
        if data.len() != nd {
            return Err(TensorError::ShapeMismatch {
                expected: nd,
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
    /// keeping the diagonal.
    ///
    /// The source must actually be diagonal; this is debug-asserted only.
    /// Use [`Self::try_from_dense`] for a checked conversion.
    pub fn from_dense(nd: usize, src: &[T]) -> Self {
        let mut out = Self::zero(nd);
        out.set_copy_dense(src);
        out
    }

    /// Checked conversion from a full `nd * nd` row-major dense buffer.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` on a wrong source length and `NotDiagonal`
    /// if any off-diagonal entry is non-zero.
    pub fn try_from_dense(nd: usize, src: &[T]) -> Result<Self, TensorError> {
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
        Ok(Self::from_dense(nd, src))
    }

    /// Number of dimensions.
    #[inline]
    pub fn nd(&self) -> usize {
        self.nd
    }

    /// Number of stored entries (`nd`).
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

    /// Packed storage (the diagonal) as a slice.
    #[inline]
    pub fn data(&self) -> &[T] {
        &self.data
    }

    /// Packed storage as a mutable slice.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Iterate over the stored diagonal.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Iterate mutably over the stored diagonal.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.data.iter_mut()
    }

    /// Read entry `(i, j)`. Off-diagonal entries are the zero constant,
    /// returned by value.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> T {
        debug_assert!(i < self.nd && j < self.nd);
        if i == j {
            self.data[i]
        } else {
            T::zero()
        }
    }

    /// Mutable access to diagonal entry `(i, i)`. Off-diagonal entries are
    /// not stored and cannot be written.
    #[inline]
    pub fn get_mut(&mut self, i: usize, j: usize) -> &mut T {
        debug_assert!(i == j, "only diagonal entries of a Tensor2d are writable");
        debug_assert!(i < self.nd);
        &mut self.data[i]
    }

    /// Write diagonal entry `(i, i)`.
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: T) {
        debug_assert!(i == j, "only diagonal entries of a Tensor2d are writable");
        debug_assert!(i < self.nd);
        self.data[i] = value;
    }

    /// Read entry `(i, j)` with signed indexing; wraps periodically when
    /// the periodic flag is set.
    pub fn at(&self, i: isize, j: isize) -> T {
        let n = self.nd as isize;
        debug_assert!(self.periodic || (i >= 0 && i < n && j >= 0 && j < n));
        let i = index::wrap(i, self.nd);
        let j = index::wrap(j, self.nd);
        self.get(i, j)
    }

    /// Fill the diagonal with zeros.
    pub fn set_zero(&mut self) {
        self.data.fill(T::zero());
    }

    /// Fill the diagonal with ones.
    pub fn set_ones(&mut self) {
        self.data.fill(T::one());
    }

    /// Fill the diagonal with a constant.
    pub fn set_constant(&mut self, value: T) {
        self.data.fill(value);
    }

    /// Fill the diagonal with `0, 1, 2, ...`.
    pub fn set_arange(&mut self) {
        for (i, x) in self.data.iter_mut().enumerate() {
            *x = T::from_usize(i);
        }
    }

    /// Set to the second-order identity tensor.
    pub fn set_identity(&mut self) {
        self.data.fill(T::one());
    }

    /// Copy the diagonal from a slice of matching length.
    pub fn set_copy(&mut self, src: &[T]) {
        debug_assert_eq!(src.len(), self.data.len());
        self.data.copy_from_slice(src);
    }

    /// Copy from a full `nd * nd` row-major dense buffer, dropping the
    /// (structurally zero) off-diagonal entries.
    ///
    /// The source must be diagonal; debug builds assert this, release
    /// builds do not check.
    pub fn set_copy_dense(&mut self, src: &[T]) {
        let nd = self.nd;
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
            self.data[i] = src[i * nd + i];
        }
    }

    /// Copy the stored diagonal into `dst`.
    pub fn copy_to(&self, dst: &mut [T]) {
        debug_assert_eq!(dst.len(), self.data.len());
        dst.copy_from_slice(&self.data);
    }

    /// Copy into a full `nd * nd` row-major dense buffer, materializing the
    /// off-diagonal zeros.
    pub fn copy_to_dense(&self, dst: &mut [T]) {
        let nd = self.nd;
        debug_assert_eq!(dst.len(), index::tensor2_size(nd));
        dst.fill(T::zero());
        for i in 0..nd {
            dst[i * nd + i] = self.data[i];
        }
    }

    /// Stored diagonal as a `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        self.data.clone()
    }

    /// Resize to a new dimension. A size-changing resize reallocates and
    /// leaves the contents unspecified.
    pub fn resize(&mut self, nd: usize) {
        if nd != self.nd {
            self.nd = nd;
            self.data.resize(nd, T::zero());
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

    /// Transpose; a diagonal tensor equals its transpose, so this is a
    /// copy.
    pub fn t(&self) -> Self {
        self.clone()
    }

    /// Trace, `A_ii`.
    pub fn trace(&self) -> T {
        linalg::trace_t2d(self.nd, &self.data)
    }

    /// Determinant: the product of the diagonal entries. Defined for every
    /// dimension.
    pub fn det(&self) -> T {
        linalg::det_t2d(self.nd, &self.data)
    }

    /// Inverse: the reciprocal of each diagonal entry. A zero entry yields
    /// an infinite entry per IEEE arithmetic.
    pub fn inv(&self) -> Self {
        let mut out = Self::zero(self.nd);
        linalg::inv_t2d(self.nd, &self.data, &mut out.data);
        out
    }

    /// Checked inverse: fails if any diagonal entry is zero (a singular
    /// matrix) instead of producing infinite entries.
    ///
    /// # Errors
    ///
    /// Returns `Singular` if any diagonal entry is zero.
    pub fn try_inv(&self) -> Result<Self, TensorError> {
        if self.data.iter().any(|&x| x == T::zero()) {
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

    /// Sum of absolute values of the stored entries.
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

    /// Sum over all logical entries; the off-diagonal entries are zero, so
    /// this is the sum of the diagonal.
    pub fn sum(&self) -> T {
        reduce::sum(&self.data)
    }

    /// Mean over the `nd * nd` logical entries.
    pub fn mean(&self) -> T {
        self.sum() / T::from_usize(self.nd * self.nd)
    }

    /// Weighted average over the logical entries; divides by the weight sum
    /// unless `normalize` is `false`.
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

impl<T: Scalar + RandomUniform> Tensor2d<T> {
    /// Create a tensor with uniform random diagonal entries in
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

    /// Fill the diagonal with uniform random values in `[lower, upper)`.
    pub fn set_random(&mut self, lower: T, upper: T) {
        fill_uniform(&mut self.data, lower, upper, &mut rand::rng());
    }

    /// Like [`Self::set_random`], threading an explicit generator.
    pub fn set_random_with_rng<R: Rng>(&mut self, lower: T, upper: T, rng: &mut R) {
        fill_uniform(&mut self.data, lower, upper, rng);
    }
}

impl<T: Scalar> PartialEq for Tensor2d<T> {
    fn eq(&self, other: &Self) -> bool {
        self.nd == other.nd && self.data == other.data
    }
}

impl<T: Scalar> std::ops::Index<usize> for Tensor2d<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<T: Scalar> std::ops::IndexMut<usize> for Tensor2d<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i]
    }
}

impl<T: Scalar + fmt::Display> fmt::Display for Tensor2d<T> {
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
    fn test_diagonal_closure() {
        let a = Tensor2d::from_vec(3, vec![2.0, 3.0, 5.0]).unwrap();
        for i in 0..3 {
            for j in 0..3 {
                if i != j {
                    assert_eq!(a.get(i, j), 0.0);
                }
            }
        }
    }

    #[test]
    fn test_diag_scenario() {
        // diag(2, 3, 5): det 30, trace 10, inverse reciprocal
        let a = Tensor2d::from_vec(3, vec![2.0, 3.0, 5.0]).unwrap();
        assert_eq!(a.det(), 30.0);
        assert_eq!(a.trace(), 10.0);

        let inv = a.inv();
        assert_relative_eq!(inv.get(0, 0), 0.5);
        assert_relative_eq!(inv.get(1, 1), 1.0 / 3.0);
        assert_relative_eq!(inv.get(2, 2), 0.2);
    }

    #[test]
    fn test_try_inv_zero_entry() {
        let a = Tensor2d::<f64>::from_vec(3, vec![2.0, 0.0, 5.0]).unwrap();
        assert!(matches!(a.try_inv(), Err(TensorError::Singular)));
        // unchecked inverse follows IEEE arithmetic
        assert!(a.inv().get(1, 1).is_infinite());
    }

    #[test]
    fn test_det_any_dim() {
        // no closed-form restriction for diagonal storage
        let a = Tensor2d::from_vec(5, vec![1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(a.det(), 120.0);
        assert!(a.try_inv().is_ok());
    }

    #[test]
    fn test_from_dense_roundtrip() {
        let dense = [2.0, 0.0, 0.0, 3.0];
        let a = Tensor2d::try_from_dense(2, &dense).unwrap();
        assert_eq!(a.data(), &[2.0, 3.0]);

        let mut back = [9.0; 4];
        a.copy_to_dense(&mut back);
        assert_eq!(back, dense);
    }

    #[test]
    fn test_try_from_dense_rejects_offdiagonal() {
        let dense = [2.0, 1.0, 0.0, 3.0];
        assert!(matches!(
            Tensor2d::try_from_dense(2, &dense),
            Err(TensorError::NotDiagonal { i: 0, j: 1 })
        ));
    }

    #[test]
    fn test_identity_equals_ones() {
        let i: Tensor2d<f64> = Tensor2d::identity(3);
        let o: Tensor2d<f64> = Tensor2d::ones(3);
        assert_eq!(i, o);
    }

    #[test]
    fn test_sum_mean() {
        let a = Tensor2d::from_vec(2, vec![2.0, 6.0]).unwrap();
        assert_eq!(a.sum(), 8.0);
        // logical element count is nd * nd
        assert_eq!(a.mean(), 2.0);
    }

    #[test]
    fn test_display() {
        let a = Tensor2d::from_vec(2, vec![1.0, 2.0]).unwrap();
        assert_eq!(format!("{a}"), "1, 0; 0, 2;");
    }
}
