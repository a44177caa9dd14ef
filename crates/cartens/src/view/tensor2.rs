//! Non-owning dense rank-2 view.

use crate::backend::{linalg, reduce};
use crate::cartesian;
use crate::error::TensorError;
use crate::index;
use crate::scalar::Scalar;

/// Read-only dense rank-2 view over a caller-owned row-major slice of
/// `nd * nd` entries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tensor2View<'a, T: Scalar> {
    nd: usize,
    data: &'a [T],
}

impl<'a, T: Scalar> Tensor2View<'a, T> {
    /// Bind a view to a packed row-major slice.
    ///
    /// # Errors
    ///
    /// Returns `TensorError::ShapeMismatch` if the slice length is not
    /// `nd * nd`.
    pub fn from_slice(nd: usize, data: &'a [T]) -> Result<Self, TensorError> {
        let expected = index::tensor2_size(nd);
        if data.len() != expected {
            return Err(TensorError::ShapeMismatch {
                expected,
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

    /// Number of viewed entries.
    #[inline]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Rank (number of axes).
    #[inline]
    pub fn rank(&self) -> usize {
        2
    }

    /// The viewed storage.
    #[inline]
    pub fn data(&self) -> &'a [T] {
        self.data
    }

    /// Iterate over the viewed entries.
    pub fn iter(&self) -> std::slice::Iter<'a, T> {
        self.data.iter()
    }

    /// Read entry `(i, j)`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> T {
        self.data[index::tensor2(self.nd, i, j)]
    }

    /// Copy into an owning [`cartesian::Tensor2`].
    pub fn to_owned(&self) -> cartesian::Tensor2<T> {
        cartesian::Tensor2::from_vec(self.nd, self.data.to_vec())
            .expect("view length matches its dimension")
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

    /// Transpose into an owning tensor.
    pub fn t(&self) -> cartesian::Tensor2<T> {
        let mut out = cartesian::Tensor2::zero(self.nd);
        linalg::transpose_t2(self.nd, self.data, out.data_mut());
        out
    }

    /// Trace, `A_ii`.
    pub fn trace(&self) -> T {
        linalg::trace_t2(self.nd, self.data)
    }

    /// Determinant (closed form, 2 or 3 dimensions).
    pub fn det(&self) -> T {
        linalg::det_t2(self.nd, self.data)
    }

    /// Inverse into an owning tensor.
    pub fn inv(&self) -> cartesian::Tensor2<T> {
        let mut out = cartesian::Tensor2::zero(self.nd);
        linalg::inv_t2(self.nd, self.data, out.data_mut());
        out
    }

    /// Sum of absolute values.
    pub fn norm(&self) -> T {
        reduce::norm(self.data)
    }

    /// Sum of the entries.
    pub fn sum(&self) -> T {
        reduce::sum(self.data)
    }

    /// Mean over the `nd * nd` entries.
    pub fn mean(&self) -> T {
        self.sum() / T::from_usize(self.nd * self.nd)
    }
}

impl<'a, T: Scalar> std::ops::Index<usize> for Tensor2View<'a, T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}
