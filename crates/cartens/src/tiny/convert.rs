//! Conversions along `Tensor2d -> Tensor2s -> Tensor2` for the fixed-size
//! family, and bridges to the runtime-dimensioned family.

use crate::error::TensorError;
use crate::index;
use crate::scalar::Scalar;
use crate::{cartesian, tiny};

use super::dim::Dim;
use super::{Tensor2, Tensor2d, Tensor2s};

// ---- widening ------------------------------------------------------------

impl<T: Scalar, D: Dim> From<&Tensor2d<T, D>> for Tensor2s<T, D> {
    fn from(a: &Tensor2d<T, D>) -> Self {
        let mut out = Tensor2s::zero();
        for i in 0..D::ND {
            out.data_mut()[index::tensor2s(D::ND, i, i)] = a.data()[i];
        }
        out
    }
}

impl<T: Scalar, D: Dim> From<&Tensor2d<T, D>> for Tensor2<T, D> {
    fn from(a: &Tensor2d<T, D>) -> Self {
        let mut out = Tensor2::zero();
        for i in 0..D::ND {
            out.data_mut()[index::tensor2(D::ND, i, i)] = a.data()[i];
        }
        out
    }
}

impl<T: Scalar, D: Dim> From<&Tensor2s<T, D>> for Tensor2<T, D> {
    fn from(a: &Tensor2s<T, D>) -> Self {
        let mut out = Tensor2::zero();
        a.copy_to_dense(out.data_mut());
        out
    }
}

impl<T: Scalar, D: Dim> From<Tensor2d<T, D>> for Tensor2s<T, D> {
    fn from(a: Tensor2d<T, D>) -> Self {
        Self::from(&a)
    }
}

impl<T: Scalar, D: Dim> From<Tensor2d<T, D>> for Tensor2<T, D> {
    fn from(a: Tensor2d<T, D>) -> Self {
        Self::from(&a)
    }
}

impl<T: Scalar, D: Dim> From<Tensor2s<T, D>> for Tensor2<T, D> {
    fn from(a: Tensor2s<T, D>) -> Self {
        Self::from(&a)
    }
}

// ---- narrowing -----------------------------------------------------------

impl<T: Scalar, D: Dim> TryFrom<&Tensor2<T, D>> for Tensor2s<T, D> {
    type Error = TensorError;

    fn try_from(a: &Tensor2<T, D>) -> Result<Self, TensorError> {
        Tensor2s::try_from_dense(a.data())
    }
}

impl<T: Scalar, D: Dim> TryFrom<&Tensor2<T, D>> for Tensor2d<T, D> {
    type Error = TensorError;

    fn try_from(a: &Tensor2<T, D>) -> Result<Self, TensorError> {
        Tensor2d::try_from_dense(a.data())
    }
}

impl<T: Scalar, D: Dim> TryFrom<&Tensor2s<T, D>> for Tensor2d<T, D> {
    type Error = TensorError;

    fn try_from(a: &Tensor2s<T, D>) -> Result<Self, TensorError> {
        for i in 0..D::ND {
            for j in (i + 1)..D::ND {
                if a.get(i, j) != T::zero() {
                    return Err(TensorError::NotDiagonal { i, j });
                }
            }
        }
        let mut out = Tensor2d::zero();
        for i in 0..D::ND {
            out.data_mut()[i] = a.get(i, i);
        }
        Ok(out)
    }
}

// ---- bridges to the runtime-dimensioned family ---------------------------
// The owned-to-cartesian direction lives on the fixed types as
// `to_cartesian`; the reverse requires a dimension check.

macro_rules! try_from_cartesian {
    ($($fixed:ident from $var:ident),+ $(,)?) => {
        $(
            impl<T: Scalar, D: Dim> TryFrom<&cartesian::$var<T>> for tiny::$fixed<T, D> {
                type Error = TensorError;

                /// Fails with `ShapeMismatch` unless the runtime dimension
                /// equals `D::ND`.
                fn try_from(a: &cartesian::$var<T>) -> Result<Self, TensorError> {
                    if a.nd() != D::ND {
                        return Err(TensorError::ShapeMismatch {
                            expected: D::ND,
                            actual: a.nd(),
                        });
                    }
                    let mut out = Self::zero();
                    out.set_copy(a.data());
                    Ok(out)
                }
            }
        )+
    };
}

try_from_cartesian!(
    Vector from Vector,
    Tensor2 from Tensor2,
    Tensor2s from Tensor2s,
    Tensor2d from Tensor2d,
    Tensor4 from Tensor4,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiny::D3;

    #[test]
    fn test_widen_roundtrip() {
        let d: Tensor2d<f64, D3> = Tensor2d::from_slice(&[2.0, 3.0, 5.0]);
        let g = Tensor2::from(&d);
        let back = Tensor2d::try_from(&g).unwrap();
        assert_eq!(back, d);

        let s = Tensor2s::from(&d);
        let g2 = Tensor2::from(&s);
        assert_eq!(g2, g);
    }

    #[test]
    fn test_narrow_rejects() {
        let g: Tensor2<f64, D3> = Tensor2::arange();
        assert!(Tensor2s::try_from(&g).is_err());
        assert!(Tensor2d::try_from(&g).is_err());
    }

    #[test]
    fn test_bridge_to_cartesian_and_back() {
        let a: Tensor2s<f64, D3> = Tensor2s::arange();
        let dyn_a = a.to_cartesian();
        let back: Tensor2s<f64, D3> = Tensor2s::try_from(&dyn_a).unwrap();
        assert_eq!(back, a);

        // wrong runtime dimension is rejected
        let small = cartesian::Tensor2s::<f64>::zero(2);
        assert!(Tensor2s::<f64, D3>::try_from(&small).is_err());
    }
}
