//! Runtime-dimensioned dense rank-4 tensor.

use std::fmt;

use rand::Rng;

use crate::backend::{linalg, reduce};
use crate::error::TensorError;
use crate::index;
use crate::random::{fill_uniform, RandomUniform};
use crate::scalar::Scalar;

/// Rank-4 Cartesian tensor with runtime dimension, fully dense storage of
/// all `nd^4` entries (no symmetry is assumed at rank 4).
///
/// # Example
///
/// ```
/// use cartens::cartesian::{Tensor2, Tensor4};
/// use cartens::ops::Ddot;
///
/// let i4: Tensor4<f64> = Tensor4::identity(3);
/// let a = Tensor2::arange(3);
/// assert_eq!(i4.ddot(&a), a);
/// ```
#[derive(Debug, Clone)]
pub struct Tensor4<T: Scalar> {
    nd: usize,
    data: Vec<T>,
    periodic: bool,
}

impl<T: Scalar> Tensor4<T> {
    /// Create a zero-initialized tensor.
    pub fn zero(nd: usize) -> Self {
        Self {
            nd,
            data: vec![T::zero(); index::tensor4_size(nd)],
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
            data: vec![value; index::tensor4_size(nd)],
            periodic: false,
        }
    }

    /// Create a tensor holding `0, 1, 2, ...` in storage order.
    pub fn arange(nd: usize) -> Self {
        let mut out = Self::zero(nd);
        out.set_arange();
        out
    }

    /// Create the fourth-order identity `I_ijkl = d_il d_jk`, the identity
    /// under double contraction: `I : A == A`.
    pub fn identity(nd: usize) -> Self {
        let mut out = Self::zero(nd);
        out.set_identity();
        out
    }

    /// Create the right-transposed identity `I_ijkl = d_ik d_jl`, which
    /// transposes under double contraction: `Irt : A == A^T`.
    pub fn identity_rt(nd: usize) -> Self {
        let mut out = Self::zero(nd);
        out.set_identity_rt();
        out
    }

    /// Create the symmetrizer `(I + Irt) / 2`, which extracts the symmetric
    /// part: `Is : A == (A + A^T) / 2`.
    pub fn symmetrizer(nd: usize) -> Self {
        let mut out = Self::zero(nd);
        out.set_symmetrizer();
        out
    }

    /// Create the deviatoric projector `Is - II / nd`, which extracts the
    /// symmetric trace-free part of a rank-2 tensor.
    pub fn deviatoric(nd: usize) -> Self {
        let mut out = Self::zero(nd);
        out.set_deviatoric();
        out
    }

    /// Create the dyadic product of two second-order identity tensors,
    /// `II_ijkl = d_ij d_kl`: `II : A == tr(A) I`.
    pub fn ii(nd: usize) -> Self {
        let mut out = Self::zero(nd);
        out.set_ii();
        out
    }

    /// Create a tensor from packed row-major entries.
    ///
    /// # Errors
    ///
    /// Returns `TensorError::ShapeMismatch` if the data length is not
    /// `nd^4`.
    pub fn from_vec(nd: usize, data: Vec<T>) -> Result<Self, TensorError> {
        let expected = index::tensor4_size(nd);
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

    /// Number of stored entries (`nd^4`).
    #[inline]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Rank (number of axes).
    #[inline]
    pub fn rank(&self) -> usize {
        4
    }

    /// Shape along each axis.
    pub fn shape(&self) -> Vec<usize> {
        vec![self.nd; 4]
    }

    /// Enable or disable periodic (wrapping) signed indexing via [`Self::at`].
    pub fn set_periodic(&mut self, periodic: bool) {
        self.periodic = periodic;
    }

    /// Read entry `(i, j, k, l)` with signed indexing; wraps periodically
    /// when the periodic flag is set.
    pub fn at(&self, i: isize, j: isize, k: isize, l: isize) -> T {
        let n = self.nd as isize;
        debug_assert!(
            self.periodic
                || ((0..n).contains(&i)
                    && (0..n).contains(&j)
                    && (0..n).contains(&k)
                    && (0..n).contains(&l))
        );
        let i = index::wrap(i, self.nd);
        let j = index::wrap(j, self.nd);
        let k = index::wrap(k, self.nd);
        let l = index::wrap(l, self.nd);
        self.data[index::tensor4(self.nd, i, j, k, l)]
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

    /// Compress `(i, j, k, l)` to a storage offset.
    #[inline]
    pub fn compress(&self, i: usize, j: usize, k: usize, l: usize) -> usize {
        index::tensor4(self.nd, i, j, k, l)
    }

    /// Decompress a storage offset to `(i, j, k, l)`.
    #[inline]
    pub fn decompress(&self, offset: usize) -> (usize, usize, usize, usize) {
        index::tensor4_unpack(self.nd, offset)
    }

    /// Read entry `(i, j, k, l)`.
    #[inline]
    pub fn get(&self, i: usize, j: usize, k: usize, l: usize) -> T {
        self.data[index::tensor4(self.nd, i, j, k, l)]
    }

    /// Mutable access to entry `(i, j, k, l)`.
    #[inline]
    pub fn get_mut(&mut self, i: usize, j: usize, k: usize, l: usize) -> &mut T {
        &mut self.data[index::tensor4(self.nd, i, j, k, l)]
    }

    /// Write entry `(i, j, k, l)`.
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, k: usize, l: usize, value: T) {
        self.data[index::tensor4(self.nd, i, j, k, l)] = value;
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

    /// Set to the fourth-order identity `I_ijkl = d_il d_jk`.
    pub fn set_identity(&mut self) {
        self.set_zero();
        for i in 0..self.nd {
            for j in 0..self.nd {
                self.data[index::tensor4(self.nd, i, j, j, i)] = T::one();
            }
        }
    }

    /// Set to the right-transposed identity `I_ijkl = d_ik d_jl`.
    pub fn set_identity_rt(&mut self) {
        self.set_zero();
        for i in 0..self.nd {
            for j in 0..self.nd {
                self.data[index::tensor4(self.nd, i, j, i, j)] = T::one();
            }
        }
    }

    /// Set to the symmetrizer `(I + Irt) / 2`.
    pub fn set_symmetrizer(&mut self) {
        self.set_zero();
        let half = T::one() / (T::one() + T::one());
        for i in 0..self.nd {
            for j in 0..self.nd {
                self.data[index::tensor4(self.nd, i, j, j, i)] += half;
                self.data[index::tensor4(self.nd, i, j, i, j)] += half;
            }
        }
    }

    /// Set to the deviatoric projector `Is - II / nd`.
    pub fn set_deviatoric(&mut self) {
        self.set_symmetrizer();
        let frac = T::one() / T::from_usize(self.nd);
        for i in 0..self.nd {
            for k in 0..self.nd {
                self.data[index::tensor4(self.nd, i, i, k, k)] -= frac;
            }
        }
    }

    /// Set to the dyadic of two second-order identities,
    /// `II_ijkl = d_ij d_kl`.
    pub fn set_ii(&mut self) {
        self.set_zero();
        for i in 0..self.nd {
            for k in 0..self.nd {
                self.data[index::tensor4(self.nd, i, i, k, k)] = T::one();
            }
        }
    }

    /// Copy packed entries from a slice of matching length.
    pub fn set_copy(&mut self, src: &[T]) {
        debug_assert_eq!(src.len(), self.data.len());
        self.data.copy_from_slice(src);
    }

    /// Copy the packed entries into `dst`.
    pub fn copy_to(&self, dst: &mut [T]) {
        debug_assert_eq!(dst.len(), self.data.len());
        dst.copy_from_slice(&self.data);
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
            self.data.resize(index::tensor4_size(nd), T::zero());
        }
    }

    /// Reshape to the given shape.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` for a rank other than 4 and `NotSquare` if
    /// the axes differ.
    pub fn reshape(&mut self, shape: &[usize]) -> Result<(), TensorError> {
        if shape.len() != 4 {
            return Err(TensorError::ShapeMismatch {
                expected: 4,
                actual: shape.len(),
            });
        }
        for &n in &shape[1..] {
            if n != shape[0] {
                return Err(TensorError::NotSquare {
                    rows: shape[0],
                    cols: n,
                });
            }
        }
        self.resize(shape[0]);
        Ok(())
    }

    /// Full reversal transposition, `C_lkji = A_ijkl`.
    pub fn t(&self) -> Self {
        let mut out = Self::zero(self.nd);
        linalg::transpose_t4(self.nd, &self.data, &mut out.data);
        out
    }

    /// Right-pair swap, `C_ijlk = A_ijkl`.
    pub fn rt(&self) -> Self {
        let mut out = Self::zero(self.nd);
        linalg::transpose_t4_r(self.nd, &self.data, &mut out.data);
        out
    }

    /// Left-pair swap, `C_jikl = A_ijkl`.
    pub fn lt(&self) -> Self {
        let mut out = Self::zero(self.nd);
        linalg::transpose_t4_l(self.nd, &self.data, &mut out.data);
        out
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

    /// Mean over the `nd^4` entries.
    pub fn mean(&self) -> T {
        self.sum() / T::from_usize(self.data.len())
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

impl<T: Scalar + RandomUniform> Tensor4<T> {
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

impl<T: Scalar> PartialEq for Tensor4<T> {
    fn eq(&self, other: &Self) -> bool {
        self.nd == other.nd && self.data == other.data
    }
}

impl<T: Scalar> std::ops::Index<usize> for Tensor4<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<T: Scalar> std::ops::IndexMut<usize> for Tensor4<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i]
    }
}

impl<T: Scalar + fmt::Display> fmt::Display for Tensor4<T> {
    /// Renders the tensor as an `nd^2 x nd^2` grid: rows run over `(i, j)`,
    /// columns over `(k, l)`, rows separated by `;`, columns by `,`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.nd {
            for j in 0..self.nd {
                if i + j > 0 {
                    write!(f, "; ")?;
                }
                for k in 0..self.nd {
                    for l in 0..self.nd {
                        if k + l > 0 {
                            write!(f, ", ")?;
                        }
                        write!(f, "{}", self.get(i, j, k, l))?;
                    }
                }
            }
        }
        write!(f, ";")
    }
}
