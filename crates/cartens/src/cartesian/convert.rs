//! Conversions along the structural-refinement order
//! `Tensor2d -> Tensor2s -> Tensor2`.
//!
//! Widening is total and lossless (the missing entries are structural
//! zeros, respectively the mirrored triangle) and is implemented as `From`.
//! Narrowing is partial: it is only valid when the source actually has the
//! claimed structure, so it is implemented as `TryFrom` on top of the
//! structural predicates.

use crate::error::TensorError;
use crate::index;
use crate::scalar::Scalar;

use super::{Tensor2, Tensor2d, Tensor2s};

// ---- widening ------------------------------------------------------------

impl<T: Scalar> From<&Tensor2d<T>> for Tensor2s<T> {
    fn from(a: &Tensor2d<T>) -> Self {
        let nd = a.nd();
        let mut out = Tensor2s::zero(nd);
        for i in 0..nd {
            out.data_mut()[index::tensor2s(nd, i, i)] = a.data()[i];
        }
        out
    }
}

impl<T: Scalar> From<&Tensor2d<T>> for Tensor2<T> {
    fn from(a: &Tensor2d<T>) -> Self {
        let nd = a.nd();
        let mut out = Tensor2::zero(nd);
        for i in 0..nd {
            out.data_mut()[index::tensor2(nd, i, i)] = a.data()[i];
        }
        out
    }
}

impl<T: Scalar> From<&Tensor2s<T>> for Tensor2<T> {
    fn from(a: &Tensor2s<T>) -> Self {
        let nd = a.nd();
        let mut out = Tensor2::zero(nd);
        a.copy_to_dense(out.data_mut());
        out
    }
}

impl<T: Scalar> From<Tensor2d<T>> for Tensor2s<T> {
    fn from(a: Tensor2d<T>) -> Self {
        Self::from(&a)
    }
}

impl<T: Scalar> From<Tensor2d<T>> for Tensor2<T> {
    fn from(a: Tensor2d<T>) -> Self {
        Self::from(&a)
    }
}

impl<T: Scalar> From<Tensor2s<T>> for Tensor2<T> {
    fn from(a: Tensor2s<T>) -> Self {
        Self::from(&a)
    }
}

// ---- narrowing -----------------------------------------------------------

impl<T: Scalar> TryFrom<&Tensor2<T>> for Tensor2s<T> {
    type Error = TensorError;

    /// Fails with `NotSymmetric` unless `A_ij == A_ji` for every pair.
    fn try_from(a: &Tensor2<T>) -> Result<Self, TensorError> {
        Tensor2s::try_from_dense(a.nd(), a.data())
    }
}

impl<T: Scalar> TryFrom<&Tensor2<T>> for Tensor2d<T> {
    type Error = TensorError;

    /// Fails with `NotDiagonal` unless every off-diagonal entry is zero.
    fn try_from(a: &Tensor2<T>) -> Result<Self, TensorError> {
        Tensor2d::try_from_dense(a.nd(), a.data())
    }
}

impl<T: Scalar> TryFrom<&Tensor2s<T>> for Tensor2d<T> {
    type Error = TensorError;

    /// Fails with `NotDiagonal` unless every packed off-diagonal entry is
    /// zero.
    fn try_from(a: &Tensor2s<T>) -> Result<Self, TensorError> {
        let nd = a.nd();
        for i in 0..nd {
            for j in (i + 1)..nd {
                if a.get(i, j) != T::zero() {
                    return Err(TensorError::NotDiagonal { i, j });
                }
            }
        }
        let mut out = Tensor2d::zero(nd);
        for i in 0..nd {
            out.data_mut()[i] = a.get(i, i);
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widen_diag() {
        let d = Tensor2d::from_vec(3, vec![2.0, 3.0, 5.0]).unwrap();

        let s = Tensor2s::from(&d);
        let g = Tensor2::from(&d);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(s.get(i, j), d.get(i, j));
                assert_eq!(g.get(i, j), d.get(i, j));
            }
        }
    }

    #[test]
    fn test_widen_symmetric() {
        let s = Tensor2s::from_vec(2, vec![1.0, 2.0, 5.0]).unwrap();
        let g = Tensor2::from(&s);
        assert_eq!(g.data(), &[1.0, 2.0, 2.0, 5.0]);
    }

    #[test]
    fn test_roundtrip_diag() {
        let d = Tensor2d::from_vec(3, vec![2.0, 3.0, 5.0]).unwrap();
        let g = Tensor2::from(&d);
        let back = Tensor2d::try_from(&g).unwrap();
        assert_eq!(back, d);
    }

    #[test]
    fn test_roundtrip_symmetric() {
        let s = Tensor2s::from_vec(3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let g = Tensor2::from(&s);
        let back = Tensor2s::try_from(&g).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn test_narrowing_rejects_structure_violation() {
        let g = Tensor2::from_vec(2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert!(Tensor2s::try_from(&g).is_err());
        assert!(Tensor2d::try_from(&g).is_err());

        let s = Tensor2s::from_vec(2, vec![1.0, 2.0, 5.0]).unwrap();
        assert!(matches!(
            Tensor2d::try_from(&s),
            Err(TensorError::NotDiagonal { i: 0, j: 1 })
        ));
    }

    #[test]
    fn test_widen_chain_agrees() {
        // d -> s -> dense equals d -> dense
        let d = Tensor2d::from_vec(3, vec![1.0, 2.0, 3.0]).unwrap();
        let via_s = Tensor2::from(&Tensor2s::from(&d));
        let direct = Tensor2::from(&d);
        assert_eq!(via_s, direct);
    }
}
