//! Non-owning diagonal rank-2 view.

use crate::backend::{linalg, reduce};
use crate::cartesian;
use crate::error::TensorError;
use crate::scalar::Scalar;

/// Read-only diagonal rank-2 view over a caller-owned slice of the `nd`
/// diagonal entries. Off-diagonal reads return the zero constant by value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tensor2dView<'a, T: Scalar> {
    nd: usize,
    data: &'a [T],
}

impl<'a, T: Scalar> Tensor2dView<'a, T> {
    /// Bind a view to a diagonal slice.
    ///
    /// # Errors
    ///
    /// Returns `TensorError::ShapeMismatch` if the slice length is not `nd`.
    pub fn from_slice(nd: usize, data: &'a [T]) -> Result<Self, TensorError> {
        if data.len() != nd {
            return Err(TensorError::ShapeMismatch {
                expected: nd,
                actual: data.len(),
            });
        }
        Ok(Self { nd, data })
    }

    /// Number of dimensions.
    #[inline]
    pub fn nd(&self) -> usize {
        self.nd
    }

    /// Number of viewed (stored) entries.
    #[inline]
    pub fn size(&self) -> usize {
        self.nd
    }

    /// Rank (number of axes).
    #[inline]
    pub fn rank(&self) -> usize {
        2
    }

    /// The viewed storage (the diagonal).
    #[inline]
    pub fn data(&self) -> &'a [T] {
        self.data
    }

    /// Iterate over the viewed diagonal.
    pub fn iter(&self) -> std::slice::Iter<'a, T> {
        self.data.iter()
    }

    /// Read entry `(i, j)`; off-diagonal entries are the zero constant.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> T {
        debug_assert!(i < self.nd && j < self.nd);
        if i == j {
            self.data[i]
        } else {
            T::zero()
        }
    }

    /// Copy into an owning [`cartesian::Tensor2d`].
    pub fn to_owned(&self) -> cartesian::Tensor2d<T> {
        cartesian::Tensor2d::from_vec(self.nd, self.data.to_vec())
            .expect("view length matches its dimension")
    }

    /// Transpose; diagonal, so this is a copy into an owning tensor.
    pub fn t(&self) -> cartesian::Tensor2d<T> {
        self.to_owned()
    }

    /// Trace, `A_ii`.
    pub fn trace(&self) -> T {
        linalg::trace_t2d(self.nd, self.data)
    }

    /// Determinant: the product of the diagonal.
    pub fn det(&self) -> T {
        linalg::det_t2d(self.nd, self.data)
    }

    /// Inverse into an owning tensor.
    pub fn inv(&self) -> cartesian::Tensor2d<T> {
        let mut out = cartesian::Tensor2d::zero(self.nd);
        linalg::inv_t2d(self.nd, self.data, out.data_mut());
        out
    }

    /// Sum of absolute values of the stored entries.
    pub fn norm(&self) -> T {
        reduce::norm(self.data)
    }

    /// Sum over the logical entries (the diagonal).
    pub fn sum(&self) -> T {
        reduce::sum(self.data)
    }

    /// Mean over the `nd * nd` logical entries.
    pub fn mean(&self) -> T {
        self.sum() / T::from_usize(self.nd * self.nd)
    }
}

impl<'a, T: Scalar> std::ops::Index<usize> for Tensor2dView<'a, T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_diag() {
        let storage = [2.0, 3.0, 5.0];
        let v = Tensor2dView::from_slice(3, &storage).unwrap();
        assert_eq!(v.get(0, 0), 2.0);
        assert_eq!(v.get(0, 1), 0.0);
        assert_eq!(v.det(), 30.0);
        assert_eq!(v.trace(), 10.0);
        assert_eq!(v.inv().data(), &[0.5, 1.0 / 3.0, 0.2]);
    }
}
