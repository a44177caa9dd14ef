//! Non-owning symmetric rank-2 view.

use crate::backend::{linalg, reduce};
use crate::cartesian;
use crate::error::TensorError;
use crate::index;
use crate::scalar::Scalar;

/// Read-only symmetric rank-2 view over a caller-owned packed
/// upper-triangle slice of `nd * (nd + 1) / 2` entries.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tensor2sView<'a, T: Scalar> {
    nd: usize,
    data: &'a [T],
}

impl<'a, T: Scalar> Tensor2sView<'a, T> {
    /// Bind a view to a packed upper-triangle slice.
    ///
    /// # Errors
    ///
    /// Returns `TensorError::ShapeMismatch` if the slice length is not
    /// `nd * (nd + 1) / 2`.
    pub fn from_slice(nd: usize, data: &'a [T]) -> Result<Self, TensorError> {
        let expected = index::tensor2s_size(nd);
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

    /// Number of viewed (packed) entries.
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

    /// Iterate over the viewed packed entries.
    pub fn iter(&self) -> std::slice::Iter<'a, T> {
        self.data.iter()
    }

    /// Read entry `(i, j)`; mirror pairs resolve to the same packed slot.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> T {
        self.data[index::tensor2s(self.nd, i, j)]
    }

    /// Copy into an owning [`cartesian::Tensor2s`].
    pub fn to_owned(&self) -> cartesian::Tensor2s<T> {
        cartesian::Tensor2s::from_vec(self.nd, self.data.to_vec())
            .expect("view length matches its dimension")
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

    /// Transpose; symmetric, so this is a copy into an owning tensor.
    pub fn t(&self) -> cartesian::Tensor2s<T> {
        self.to_owned()
    }

    /// Trace, `A_ii`.
    pub fn trace(&self) -> T {
        linalg::trace_t2s(self.nd, self.data)
    }

    /// Determinant (symmetric closed form, 2 or 3 dimensions).
    pub fn det(&self) -> T {
        linalg::det_t2s(self.nd, self.data)
    }

    /// Inverse into an owning tensor.
    pub fn inv(&self) -> cartesian::Tensor2s<T> {
        let mut out = cartesian::Tensor2s::zero(self.nd);
        linalg::inv_t2s(self.nd, self.data, out.data_mut());
        out
    }

    /// Sum of absolute values of the packed entries.
    pub fn norm(&self) -> T {
        reduce::norm(self.data)
    }

    /// Logical sum (packed off-diagonal entries count twice).
    pub fn sum(&self) -> T {
        reduce::sum_t2s(self.nd, self.data)
    }

    /// Mean over the `nd * nd` logical entries.
    pub fn mean(&self) -> T {
        self.sum() / T::from_usize(self.nd * self.nd)
    }
}

impl<'a, T: Scalar> std::ops::Index<usize> for Tensor2sView<'a, T> {
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
    fn test_view_mirror_and_reductions() {
        // packed [[1,2],[2,5]]
        let storage = [1.0, 2.0, 5.0];
        let v = Tensor2sView::from_slice(2, &storage).unwrap();
        assert_eq!(v.get(1, 0), 2.0);
        assert_eq!(v.sum(), 10.0);
        assert_eq!(v.trace(), 6.0);
        assert_eq!(v.to_owned().data(), &storage);
    }
}
