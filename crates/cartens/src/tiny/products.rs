//! Tensor product dispatch table for the fixed-size family.
//!
//! The same table as the runtime-dimensioned family, resolved against the
//! compile-time dimension marker; both families call the identical backend
//! kernels.

use crate::backend::contract;
use crate::ops::{Ddot, Dot, Dyadic};
use crate::scalar::Scalar;

use super::dim::Dim;
use super::{Tensor2, Tensor2d, Tensor2s, Tensor4, Vector};

macro_rules! impl_product {
    ($trait:ident, $method:ident, $lhs:ident, $rhs:ident, $out:ident, $kernel:path) => {
        impl<T: Scalar, D: Dim> $trait<$rhs<T, D>> for $lhs<T, D> {
            type Output = $out<T, D>;

            fn $method(&self, rhs: &$rhs<T, D>) -> $out<T, D> {
                let mut out = $out::zero();
                $kernel(D::ND, self.data(), rhs.data(), out.data_mut());
                out
            }
        }
    };
}

macro_rules! impl_ddot_scalar {
    ($lhs:ident, $rhs:ident, $kernel:path) => {
        impl<T: Scalar, D: Dim> Ddot<$rhs<T, D>> for $lhs<T, D> {
            type Output = T;

            fn ddot(&self, rhs: &$rhs<T, D>) -> T {
                $kernel(D::ND, self.data(), rhs.data())
            }
        }
    };
    ($lhs:ident, $rhs:ident, $kernel:path, swapped) => {
        impl<T: Scalar, D: Dim> Ddot<$rhs<T, D>> for $lhs<T, D> {
            type Output = T;

            fn ddot(&self, rhs: &$rhs<T, D>) -> T {
                $kernel(D::ND, rhs.data(), self.data())
            }
        }
    };
}

// ---- dot -----------------------------------------------------------------

impl_product!(Dot, dot, Tensor2, Tensor2, Tensor2, contract::dot_t2_t2);
impl_product!(Dot, dot, Tensor2, Tensor2s, Tensor2, contract::dot_t2_t2s);
impl_product!(Dot, dot, Tensor2, Tensor2d, Tensor2, contract::dot_t2_t2d);
impl_product!(Dot, dot, Tensor2s, Tensor2, Tensor2, contract::dot_t2s_t2);
impl_product!(Dot, dot, Tensor2s, Tensor2s, Tensor2, contract::dot_t2s_t2s);
impl_product!(Dot, dot, Tensor2s, Tensor2d, Tensor2, contract::dot_t2s_t2d);
impl_product!(Dot, dot, Tensor2d, Tensor2, Tensor2, contract::dot_t2d_t2);
impl_product!(Dot, dot, Tensor2d, Tensor2s, Tensor2, contract::dot_t2d_t2s);
impl_product!(Dot, dot, Tensor2d, Tensor2d, Tensor2d, contract::dot_t2d_t2d);

impl_product!(Dot, dot, Tensor2, Vector, Vector, contract::dot_t2_v);
impl_product!(Dot, dot, Tensor2s, Vector, Vector, contract::dot_t2s_v);
impl_product!(Dot, dot, Tensor2d, Vector, Vector, contract::dot_t2d_v);
impl_product!(Dot, dot, Vector, Tensor2, Vector, contract::dot_v_t2);

impl<T: Scalar, D: Dim> Dot<Tensor2s<T, D>> for Vector<T, D> {
    type Output = Vector<T, D>;

    fn dot(&self, rhs: &Tensor2s<T, D>) -> Vector<T, D> {
        let mut out = Vector::zero();
        contract::dot_t2s_v(D::ND, rhs.data(), self.data(), out.data_mut());
        out
    }
}

impl<T: Scalar, D: Dim> Dot<Tensor2d<T, D>> for Vector<T, D> {
    type Output = Vector<T, D>;

    fn dot(&self, rhs: &Tensor2d<T, D>) -> Vector<T, D> {
        let mut out = Vector::zero();
        contract::dot_t2d_v(D::ND, rhs.data(), self.data(), out.data_mut());
        out
    }
}

impl<T: Scalar, D: Dim> Dot<Vector<T, D>> for Vector<T, D> {
    type Output = T;

    fn dot(&self, rhs: &Vector<T, D>) -> T {
        contract::dot_v_v(self.data(), rhs.data())
    }
}

// ---- ddot ----------------------------------------------------------------

impl_ddot_scalar!(Tensor2, Tensor2, contract::ddot_t2_t2);
impl_ddot_scalar!(Tensor2, Tensor2s, contract::ddot_t2_t2s);
impl_ddot_scalar!(Tensor2, Tensor2d, contract::ddot_t2_t2d);
impl_ddot_scalar!(Tensor2s, Tensor2, contract::ddot_t2_t2s, swapped);
impl_ddot_scalar!(Tensor2s, Tensor2s, contract::ddot_t2s_t2s);
impl_ddot_scalar!(Tensor2s, Tensor2d, contract::ddot_t2s_t2d);
impl_ddot_scalar!(Tensor2d, Tensor2, contract::ddot_t2_t2d, swapped);
impl_ddot_scalar!(Tensor2d, Tensor2s, contract::ddot_t2s_t2d, swapped);
impl_ddot_scalar!(Tensor2d, Tensor2d, contract::ddot_t2d_t2d);

impl_product!(Ddot, ddot, Tensor2, Tensor4, Tensor2, contract::ddot_t2_t4);
impl_product!(Ddot, ddot, Tensor2s, Tensor4, Tensor2, contract::ddot_t2s_t4);
impl_product!(Ddot, ddot, Tensor2d, Tensor4, Tensor2, contract::ddot_t2d_t4);
impl_product!(Ddot, ddot, Tensor4, Tensor2, Tensor2, contract::ddot_t4_t2);
impl_product!(Ddot, ddot, Tensor4, Tensor2s, Tensor2, contract::ddot_t4_t2s);
impl_product!(Ddot, ddot, Tensor4, Tensor2d, Tensor2, contract::ddot_t4_t2d);
impl_product!(Ddot, ddot, Tensor4, Tensor4, Tensor4, contract::ddot_t4_t4);

// ---- dyadic --------------------------------------------------------------

impl_product!(Dyadic, dyadic, Tensor2, Tensor2, Tensor4, contract::dyadic_t2_t2);
impl_product!(Dyadic, dyadic, Tensor2, Tensor2s, Tensor4, contract::dyadic_t2_t2s);
impl_product!(Dyadic, dyadic, Tensor2, Tensor2d, Tensor4, contract::dyadic_t2_t2d);
impl_product!(Dyadic, dyadic, Tensor2s, Tensor2, Tensor4, contract::dyadic_t2s_t2);
impl_product!(Dyadic, dyadic, Tensor2s, Tensor2s, Tensor4, contract::dyadic_t2s_t2s);
impl_product!(Dyadic, dyadic, Tensor2s, Tensor2d, Tensor4, contract::dyadic_t2s_t2d);
impl_product!(Dyadic, dyadic, Tensor2d, Tensor2, Tensor4, contract::dyadic_t2d_t2);
impl_product!(Dyadic, dyadic, Tensor2d, Tensor2s, Tensor4, contract::dyadic_t2d_t2s);
impl_product!(Dyadic, dyadic, Tensor2d, Tensor2d, Tensor4, contract::dyadic_t2d_t2d);
impl_product!(Dyadic, dyadic, Vector, Vector, Tensor2, contract::dyadic_v_v);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiny::D3;
    use approx::assert_relative_eq;

    #[test]
    fn test_identity_dot() {
        let i: Tensor2d<f64, D3> = Tensor2d::identity();
        let a: Tensor2<f64, D3> = Tensor2::arange();
        assert_eq!(i.dot(&a), a);
    }

    #[test]
    fn test_diag_dot_diag() {
        let a: Tensor2d<f64, D3> = Tensor2d::from_slice(&[2.0, 3.0, 5.0]);
        let b: Tensor2d<f64, D3> = Tensor2d::from_slice(&[1.0, 2.0, 3.0]);
        let c: Tensor2d<f64, D3> = a.dot(&b);
        assert_eq!(c.data(), &[2.0, 6.0, 15.0]);
    }

    #[test]
    fn test_ddot_dot_trace_consistency() {
        let a: Tensor2<f64, D3> = Tensor2::arange();
        let s: Tensor2s<f64, D3> = Tensor2s::arange();
        let d: Tensor2d<f64, D3> = Tensor2d::from_slice(&[2.0, 3.0, 5.0]);

        assert_relative_eq!(a.ddot(&s), a.dot(&s).trace(), epsilon = 1e-12);
        assert_relative_eq!(s.ddot(&d), s.dot(&d).trace(), epsilon = 1e-12);
        assert_relative_eq!(d.ddot(&a), d.dot(&a).trace(), epsilon = 1e-12);
    }

    #[test]
    fn test_dyadic_identities() {
        let i2: Tensor2<f64, D3> = Tensor2::identity();
        let ii: Tensor4<f64, D3> = Tensor4::ii();
        assert_eq!(i2.dyadic(&i2), ii);
    }
}
