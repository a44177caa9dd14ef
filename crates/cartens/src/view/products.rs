//! Tensor products with a view as the left operand.
//!
//! A view participates in the same dispatch table as its owning
//! counterpart; results are always owning `cartesian` containers. (For a
//! view on the right-hand side, copy it out with `to_owned` first.)

use crate::backend::contract;
use crate::cartesian::{Tensor2, Tensor2d, Tensor2s, Tensor4, Vector};
use crate::ops::{Ddot, Dot, Dyadic};
use crate::scalar::Scalar;

use super::{Tensor2View, Tensor2dView, Tensor2sView, VectorView};

macro_rules! impl_view_product {
    ($trait:ident, $method:ident, $lhs:ident, $rhs:ident, $out:ident, $kernel:path) => {
        impl<'a, T: Scalar> $trait<$rhs<T>> for $lhs<'a, T> {
            type Output = $out<T>;

            fn $method(&self, rhs: &$rhs<T>) -> $out<T> {
                debug_assert_eq!(self.nd(), rhs.nd());
                let mut out = $out::zero(self.nd());
                $kernel(self.nd(), self.data(), rhs.data(), out.data_mut());
                out
            }
        }
    };
}

macro_rules! impl_view_ddot_scalar {
    ($lhs:ident, $rhs:ident, $kernel:path) => {
        impl<'a, T: Scalar> Ddot<$rhs<T>> for $lhs<'a, T> {
            type Output = T;

            fn ddot(&self, rhs: &$rhs<T>) -> T {
                debug_assert_eq!(self.nd(), rhs.nd());
                $kernel(self.nd(), self.data(), rhs.data())
            }
        }
    };
    ($lhs:ident, $rhs:ident, $kernel:path, swapped) => {
        impl<'a, T: Scalar> Ddot<$rhs<T>> for $lhs<'a, T> {
            type Output = T;

            fn ddot(&self, rhs: &$rhs<T>) -> T {
                debug_assert_eq!(self.nd(), rhs.nd());
                $kernel(self.nd(), rhs.data(), self.data())
            }
        }
    };
}

// ---- dense view ----------------------------------------------------------

impl_view_product!(Dot, dot, Tensor2View, Tensor2, Tensor2, contract::dot_t2_t2);
impl_view_product!(Dot, dot, Tensor2View, Tensor2s, Tensor2, contract::dot_t2_t2s);
impl_view_product!(Dot, dot, Tensor2View, Tensor2d, Tensor2, contract::dot_t2_t2d);
impl_view_product!(Dot, dot, Tensor2View, Vector, Vector, contract::dot_t2_v);
impl_view_ddot_scalar!(Tensor2View, Tensor2, contract::ddot_t2_t2);
impl_view_ddot_scalar!(Tensor2View, Tensor2s, contract::ddot_t2_t2s);
impl_view_ddot_scalar!(Tensor2View, Tensor2d, contract::ddot_t2_t2d);
impl_view_product!(Ddot, ddot, Tensor2View, Tensor4, Tensor2, contract::ddot_t2_t4);
impl_view_product!(Dyadic, dyadic, Tensor2View, Tensor2, Tensor4, contract::dyadic_t2_t2);
impl_view_product!(Dyadic, dyadic, Tensor2View, Tensor2s, Tensor4, contract::dyadic_t2_t2s);
impl_view_product!(Dyadic, dyadic, Tensor2View, Tensor2d, Tensor4, contract::dyadic_t2_t2d);

// ---- symmetric view ------------------------------------------------------

impl_view_product!(Dot, dot, Tensor2sView, Tensor2, Tensor2, contract::dot_t2s_t2);
impl_view_product!(Dot, dot, Tensor2sView, Tensor2s, Tensor2, contract::dot_t2s_t2s);
impl_view_product!(Dot, dot, Tensor2sView, Tensor2d, Tensor2, contract::dot_t2s_t2d);
impl_view_product!(Dot, dot, Tensor2sView, Vector, Vector, contract::dot_t2s_v);
impl_view_ddot_scalar!(Tensor2sView, Tensor2, contract::ddot_t2_t2s, swapped);
impl_view_ddot_scalar!(Tensor2sView, Tensor2s, contract::ddot_t2s_t2s);
impl_view_ddot_scalar!(Tensor2sView, Tensor2d, contract::ddot_t2s_t2d);
impl_view_product!(Ddot, ddot, Tensor2sView, Tensor4, Tensor2, contract::ddot_t2s_t4);
impl_view_product!(Dyadic, dyadic, Tensor2sView, Tensor2, Tensor4, contract::dyadic_t2s_t2);
impl_view_product!(Dyadic, dyadic, Tensor2sView, Tensor2s, Tensor4, contract::dyadic_t2s_t2s);
impl_view_product!(Dyadic, dyadic, Tensor2sView, Tensor2d, Tensor4, contract::dyadic_t2s_t2d);

// ---- diagonal view -------------------------------------------------------

impl_view_product!(Dot, dot, Tensor2dView, Tensor2, Tensor2, contract::dot_t2d_t2);
impl_view_product!(Dot, dot, Tensor2dView, Tensor2s, Tensor2, contract::dot_t2d_t2s);
impl_view_product!(Dot, dot, Tensor2dView, Tensor2d, Tensor2d, contract::dot_t2d_t2d);
impl_view_product!(Dot, dot, Tensor2dView, Vector, Vector, contract::dot_t2d_v);
impl_view_ddot_scalar!(Tensor2dView, Tensor2, contract::ddot_t2_t2d, swapped);
impl_view_ddot_scalar!(Tensor2dView, Tensor2s, contract::ddot_t2s_t2d, swapped);
impl_view_ddot_scalar!(Tensor2dView, Tensor2d, contract::ddot_t2d_t2d);
impl_view_product!(Ddot, ddot, Tensor2dView, Tensor4, Tensor2, contract::ddot_t2d_t4);
impl_view_product!(Dyadic, dyadic, Tensor2dView, Tensor2, Tensor4, contract::dyadic_t2d_t2);
impl_view_product!(Dyadic, dyadic, Tensor2dView, Tensor2s, Tensor4, contract::dyadic_t2d_t2s);
impl_view_product!(Dyadic, dyadic, Tensor2dView, Tensor2d, Tensor4, contract::dyadic_t2d_t2d);

// ---- vector view ---------------------------------------------------------

impl_view_product!(Dot, dot, VectorView, Tensor2, Vector, contract::dot_v_t2);
impl_view_product!(Dyadic, dyadic, VectorView, Vector, Tensor2, contract::dyadic_v_v);

impl<'a, T: Scalar> Dot<Tensor2s<T>> for VectorView<'a, T> {
    type Output = Vector<T>;

    fn dot(&self, rhs: &Tensor2s<T>) -> Vector<T> {
        debug_assert_eq!(self.nd(), rhs.nd());
        let mut out = Vector::zero(self.nd());
        contract::dot_t2s_v(self.nd(), rhs.data(), self.data(), out.data_mut());
        out
    }
}

impl<'a, T: Scalar> Dot<Tensor2d<T>> for VectorView<'a, T> {
    type Output = Vector<T>;

    fn dot(&self, rhs: &Tensor2d<T>) -> Vector<T> {
        debug_assert_eq!(self.nd(), rhs.nd());
        let mut out = Vector::zero(self.nd());
        contract::dot_t2d_v(self.nd(), rhs.data(), self.data(), out.data_mut());
        out
    }
}

impl<'a, T: Scalar> Dot<Vector<T>> for VectorView<'a, T> {
    type Output = T;

    fn dot(&self, rhs: &Vector<T>) -> T {
        debug_assert_eq!(self.nd(), rhs.nd());
        contract::dot_v_v(self.data(), rhs.data())
    }
}
