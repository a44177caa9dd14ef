//! Fixed-size dense rank-4 tensor with inline storage.

use std::fmt;

use rand::Rng;

use crate::backend::{linalg, reduce};
use crate::index;
use crate::random::{fill_uniform, RandomUniform};
use crate::scalar::Scalar;

use super::dim::{Buffer, Dim};

/// Fixed-size counterpart of [`crate::cartesian::Tensor4`].
///
/// # Example
///
/// ```
/// use cartens::tiny::{Tensor2, Tensor4, D3};
/// use cartens::ops::Ddot;
///
/// let i4: Tensor4<f64, D3> = Tensor4::identity();
/// let a: Tensor2<f64, D3> = Tensor2::arange();
/// assert_eq!(i4.ddot(&a), a);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor4<T: Scalar, D: Dim> {
    data: D::Buf4<T>,
}

impl<T: Scalar, D: Dim> Tensor4<T, D> {
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

    /// The fourth-order identity `I_ijkl = d_il d_jk` (`I : A == A`).
    pub fn identity() -> Self {
        let mut out = Self::zero();
        out.set_identity();
        out
    }

    /// The right-transposed identity `I_ijkl = d_ik d_jl`
    /// (`Irt : A == A^T`).
    pub fn identity_rt() -> Self {
        let mut out = Self::zero();
        out.set_identity_rt();
        out
    }

    /// The symmetrizer `(I + Irt) / 2`.
    pub fn symmetrizer() -> Self {
        let mut out = Self::zero();
        out.set_symmetrizer();
        out
    }

    /// The deviatoric projector `Is - II / ND`.
    pub fn deviatoric() -> Self {
        let mut out = Self::zero();
        out.set_deviatoric();
        out
    }

    /// The dyadic of two second-order identities, `II_ijkl = d_ij d_kl`.
    pub fn ii() -> Self {
        let mut out = Self::zero();
        out.set_ii();
        out
    }

    /// Copy the entries from a row-major slice of length `ND^4`.
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

    /// Number of stored entries (`ND^4`).
    #[inline]
    pub fn size(&self) -> usize {
        index::tensor4_size(D::ND)
    }

    /// Rank (number of axes).
    #[inline]
    pub fn rank(&self) -> usize {
        4
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

    /// Compress `(i, j, k, l)` to a storage offset.
    #[inline]
    pub fn compress(&self, i: usize, j: usize, k: usize, l: usize) -> usize {
        index::tensor4(D::ND, i, j, k, l)
    }

    /// Decompress a storage offset to `(i, j, k, l)`.
    #[inline]
    pub fn decompress(&self, offset: usize) -> (usize, usize, usize, usize) {
        index::tensor4_unpack(D::ND, offset)
    }

    /// Read entry `(i, j, k, l)`.
    #[inline]
    pub fn get(&self, i: usize, j: usize, k: usize, l: usize) -> T {
        self.data()[index::tensor4(D::ND, i, j, k, l)]
    }

    /// Mutable access to entry `(i, j, k, l)`.
    #[inline]
    pub fn get_mut(&mut self, i: usize, j: usize, k: usize, l: usize) -> &mut T {
        &mut self.data_mut()[index::tensor4(D::ND, i, j, k, l)]
    }

    /// Write entry `(i, j, k, l)`.
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, k: usize, l: usize, value: T) {
        self.data_mut()[index::tensor4(D::ND, i, j, k, l)] = value;
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

    /// Set to the fourth-order identity `I_ijkl = d_il d_jk`.
    pub fn set_identity(&mut self) {
        self.set_zero();
        for i in 0..D::ND {
            for j in 0..D::ND {
                self.data_mut()[index::tensor4(D::ND, i, j, j, i)] = T::one();
            }
        }
    }

    /// Set to the right-transposed identity `I_ijkl = d_ik d_jl`.
    pub fn set_identity_rt(&mut self) {
        self.set_zero();
        for i in 0..D::ND {
            for j in 0..D::ND {
                self.data_mut()[index::tensor4(D::ND, i, j, i, j)] = T::one();
            }
        }
    }

    /// Set to the symmetrizer `(I + Irt) / 2`.
    pub fn set_symmetrizer(&mut self) {
        self.set_zero();
        let half = T::one() / (T::one() + T::one());
        for i in 0..D::ND {
            for j in 0..D::ND {
                self.data_mut()[index::tensor4(D::ND, i, j, j, i)] += half;
                self.data_mut()[index::tensor4(D::ND, i, j, i, j)] += half;
            }
        }
    }

    /// Set to the deviatoric projector `Is - II / ND`.
    pub fn set_deviatoric(&mut self) {
        self.set_symmetrizer();
        let frac = T::one() / T::from_usize(D::ND);
        for i in 0..D::ND {
            for k in 0..D::ND {
                self.data_mut()[index::tensor4(D::ND, i, i, k, k)] -= frac;
            }
        }
    }

    /// Set to the dyadic of two second-order identities.
    pub fn set_ii(&mut self) {
        self.set_zero();
        for i in 0..D::ND {
            for k in 0..D::ND {
                self.data_mut()[index::tensor4(D::ND, i, i, k, k)] = T::one();
            }
        }
    }

    /// Copy entries from a slice of matching length.
    pub fn set_copy(&mut self, src: &[T]) {
        debug_assert_eq!(src.len(), self.size());
        self.data_mut().copy_from_slice(src);
    }

    /// Copy the entries into `dst`.
    pub fn copy_to(&self, dst: &mut [T]) {
        debug_assert_eq!(dst.len(), self.size());
        dst.copy_from_slice(self.data());
    }

    /// Packed entries as a `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        self.data().to_vec()
    }

    /// Copy into the runtime-dimensioned family.
    pub fn to_cartesian(&self) -> crate::cartesian::Tensor4<T> {
        crate::cartesian::Tensor4::from_vec(D::ND, self.to_vec())
            .expect("fixed-size buffer length matches its dimension")
    }

    /// Full reversal transposition, `C_lkji = A_ijkl`.
    pub fn t(&self) -> Self {
        let mut out = Self::zero();
        linalg::transpose_t4(D::ND, self.data(), out.data_mut());
        out
    }

    /// Right-pair swap, `C_ijlk = A_ijkl`.
    pub fn rt(&self) -> Self {
        let mut out = Self::zero();
        linalg::transpose_t4_r(D::ND, self.data(), out.data_mut());
        out
    }

    /// Left-pair swap, `C_jikl = A_ijkl`.
    pub fn lt(&self) -> Self {
        let mut out = Self::zero();
        linalg::transpose_t4_l(D::ND, self.data(), out.data_mut());
        out
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

    /// Mean over the `ND^4` entries.
    pub fn mean(&self) -> T {
        self.sum() / T::from_usize(self.size())
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

impl<T: Scalar + RandomUniform, D: Dim> Tensor4<T, D> {
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

impl<T: Scalar, D: Dim> Default for Tensor4<T, D> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Scalar, D: Dim> std::ops::Index<usize> for Tensor4<T, D> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.data()[i]
    }
}

impl<T: Scalar, D: Dim> std::ops::IndexMut<usize> for Tensor4<T, D> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data_mut()[i]
    }
}

impl<T: Scalar + fmt::Display, D: Dim> fmt::Display for Tensor4<T, D> {
    /// Renders the tensor as an `ND^2 x ND^2` grid: rows run over `(i, j)`,
    /// columns over `(k, l)`, rows separated by `;`, columns by `,`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..D::ND {
            for j in 0..D::ND {
                if i + j > 0 {
                    write!(f, "; ")?;
                }
                for k in 0..D::ND {
                    for l in 0..D::ND {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiny::{Tensor2, Tensor2s, D2, D3};
    use crate::ops::{Ddot, Dyadic};
    use approx::assert_relative_eq;

    #[test]
    fn test_no_heap_size() {
        assert_eq!(
            std::mem::size_of::<Tensor4<f64, D3>>(),
            81 * std::mem::size_of::<f64>()
        );
    }

    #[test]
    fn test_identity_laws() {
        let i4: Tensor4<f64, D3> = Tensor4::identity();
        let a: Tensor2<f64, D3> = Tensor2::arange();
        assert_eq!(i4.ddot(&a), a);

        let irt: Tensor4<f64, D3> = Tensor4::identity_rt();
        assert_eq!(irt.ddot(&a), a.t());
    }

    #[test]
    fn test_dyadic_identities() {
        let i2: Tensor2s<f64, D2> = Tensor2s::identity();
        let ii: Tensor4<f64, D2> = Tensor4::ii();
        assert_eq!(i2.dyadic(&i2), ii);
    }

    #[test]
    fn test_deviatoric_kills_trace() {
        let id: Tensor4<f64, D3> = Tensor4::deviatoric();
        let a: Tensor2<f64, D3> = Tensor2::arange();
        assert_relative_eq!(id.ddot(&a).trace(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_transpositions() {
        let a: Tensor4<f64, D2> = Tensor4::arange();
        assert_eq!(a.t().t(), a);
        assert_eq!(a.rt().rt(), a);
        assert_eq!(a.lt().lt(), a);
        assert_eq!(a.rt().get(0, 0, 0, 1), a.get(0, 0, 1, 0));
    }
}
