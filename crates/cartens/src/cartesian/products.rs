//! Tensor product dispatch table for the runtime-dimensioned family.
//!
//! One `Dot`/`Ddot`/`Dyadic` implementation per storage-kind pair; the
//! `Output` of each implementation encodes the algebraic closure of that
//! combination (e.g. only `Tensor2d . Tensor2d` stays diagonal). All the
//! arithmetic lives in [`crate::backend::contract`]; these implementations
//! only check shapes, pick the result kind and allocate it.

use crate::backend::contract;
use crate::ops::{Ddot, Dot, Dyadic};
use crate::scalar::Scalar;

use super::{Tensor2, Tensor2d, Tensor2s, Tensor4, Vector};

/// Implements `Dot`/`Dyadic` for a rank-2 pair producing a tensor result.
macro_rules! impl_product {
    ($trait:ident, $method:ident, $lhs:ident, $rhs:ident, $out:ident, $kernel:path) => {
        impl<T: Scalar> $trait<$rhs<T>> for $lhs<T> {
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

// ---- dot: rank-2 . rank-2 ------------------------------------------------
// Only diagonal . diagonal is closed; every other combination is dense.

impl_product!(Dot, dot, Tensor2, Tensor2, Tensor2, contract::dot_t2_t2);
impl_product!(Dot, dot, Tensor2, Tensor2s, Tensor2, contract::dot_t2_t2s);
impl_product!(Dot, dot, Tensor2, Tensor2d, Tensor2, contract::dot_t2_t2d);
impl_product!(Dot, dot, Tensor2s, Tensor2, Tensor2, contract::dot_t2s_t2);
impl_product!(Dot, dot, Tensor2s, Tensor2s, Tensor2, contract::dot_t2s_t2s);
impl_product!(Dot, dot, Tensor2s, Tensor2d, Tensor2, contract::dot_t2s_t2d);
impl_product!(Dot, dot, Tensor2d, Tensor2, Tensor2, contract::dot_t2d_t2);
impl_product!(Dot, dot, Tensor2d, Tensor2s, Tensor2, contract::dot_t2d_t2s);
impl_product!(Dot, dot, Tensor2d, Tensor2d, Tensor2d, contract::dot_t2d_t2d);

// ---- dot: rank-2 . vector and vector . rank-2 ----------------------------

impl_product!(Dot, dot, Tensor2, Vector, Vector, contract::dot_t2_v);
impl_product!(Dot, dot, Tensor2s, Vector, Vector, contract::dot_t2s_v);
impl_product!(Dot, dot, Tensor2d, Vector, Vector, contract::dot_t2d_v);
impl_product!(Dot, dot, Vector, Tensor2, Vector, contract::dot_v_t2);

impl<T: Scalar> Dot<Tensor2s<T>> for Vector<T> {
    type Output = Vector<T>;

    // a_i B_ij == B_ji a_j: by symmetry this is the rank-2 . vector kernel.
    fn dot(&self, rhs: &Tensor2s<T>) -> Vector<T> {
        debug_assert_eq!(self.nd(), rhs.nd());
        let mut out = Vector::zero(self.nd());
        contract::dot_t2s_v(self.nd(), rhs.data(), self.data(), out.data_mut());
        out
    }
}

impl<T: Scalar> Dot<Tensor2d<T>> for Vector<T> {
    type Output = Vector<T>;

    fn dot(&self, rhs: &Tensor2d<T>) -> Vector<T> {
        debug_assert_eq!(self.nd(), rhs.nd());
        let mut out = Vector::zero(self.nd());
        contract::dot_t2d_v(self.nd(), rhs.data(), self.data(), out.data_mut());
        out
    }
}

impl<T: Scalar> Dot<Vector<T>> for Vector<T> {
    type Output = T;

    fn dot(&self, rhs: &Vector<T>) -> T {
        debug_assert_eq!(self.nd(), rhs.nd());
        contract::dot_v_v(self.data(), rhs.data())
    }
}

// ---- ddot: rank-2 : rank-2 (scalar results) ------------------------------
// `A_ij B_ji` is symmetric in its operands, so mirrored combinations reuse
// the canonical kernel with the arguments swapped.

impl<T: Scalar> Ddot<Tensor2<T>> for Tensor2<T> {
    type Output = T;

    fn ddot(&self, rhs: &Tensor2<T>) -> T {
        debug_assert_eq!(self.nd(), rhs.nd());
        contract::ddot_t2_t2(self.nd(), self.data(), rhs.data())
    }
}

impl<T: Scalar> Ddot<Tensor2s<T>> for Tensor2<T> {
    type Output = T;

    fn ddot(&self, rhs: &Tensor2s<T>) -> T {
        debug_assert_eq!(self.nd(), rhs.nd());
        contract::ddot_t2_t2s(self.nd(), self.data(), rhs.data())
    }
}

impl<T: Scalar> Ddot<Tensor2d<T>> for Tensor2<T> {
    type Output = T;

    fn ddot(&self, rhs: &Tensor2d<T>) -> T {
        debug_assert_eq!(self.nd(), rhs.nd());
        contract::ddot_t2_t2d(self.nd(), self.data(), rhs.data())
    }
}

impl<T: Scalar> Ddot<Tensor2<T>> for Tensor2s<T> {
    type Output = T;

    fn ddot(&self, rhs: &Tensor2<T>) -> T {
        debug_assert_eq!(self.nd(), rhs.nd());
        contract::ddot_t2_t2s(self.nd(), rhs.data(), self.data())
    }
}

impl<T: Scalar> Ddot<Tensor2s<T>> for Tensor2s<T> {
    type Output = T;

    fn ddot(&self, rhs: &Tensor2s<T>) -> T {
        debug_assert_eq!(self.nd(), rhs.nd());
        contract::ddot_t2s_t2s(self.nd(), self.data(), rhs.data())
    }
}

impl<T: Scalar> Ddot<Tensor2d<T>> for Tensor2s<T> {
    type Output = T;

    fn ddot(&self, rhs: &Tensor2d<T>) -> T {
        debug_assert_eq!(self.nd(), rhs.nd());
        contract::ddot_t2s_t2d(self.nd(), self.data(), rhs.data())
    }
}

impl<T: Scalar> Ddot<Tensor2<T>> for Tensor2d<T> {
    type Output = T;

    fn ddot(&self, rhs: &Tensor2<T>) -> T {
        debug_assert_eq!(self.nd(), rhs.nd());
        contract::ddot_t2_t2d(self.nd(), rhs.data(), self.data())
    }
}

impl<T: Scalar> Ddot<Tensor2s<T>> for Tensor2d<T> {
    type Output = T;

    fn ddot(&self, rhs: &Tensor2s<T>) -> T {
        debug_assert_eq!(self.nd(), rhs.nd());
        contract::ddot_t2s_t2d(self.nd(), rhs.data(), self.data())
    }
}

impl<T: Scalar> Ddot<Tensor2d<T>> for Tensor2d<T> {
    type Output = T;

    fn ddot(&self, rhs: &Tensor2d<T>) -> T {
        debug_assert_eq!(self.nd(), rhs.nd());
        contract::ddot_t2d_t2d(self.nd(), self.data(), rhs.data())
    }
}

// ---- ddot with rank-4 operands -------------------------------------------

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
    use approx::assert_relative_eq;

    fn t2() -> Tensor2<f64> {
        Tensor2::from_vec(3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 10.0]).unwrap()
    }

    fn t2s() -> Tensor2s<f64> {
        Tensor2s::from_vec(3, vec![2.0, 1.0, 0.0, 3.0, 1.0, 4.0]).unwrap()
    }

    fn t2d() -> Tensor2d<f64> {
        Tensor2d::from_vec(3, vec![2.0, 3.0, 5.0]).unwrap()
    }

    #[test]
    fn test_identity_dot_preserves() {
        let i = Tensor2::identity(3);
        assert_eq!(i.dot(&t2()), t2());

        let is = Tensor2s::identity(3);
        assert_eq!(is.dot(&t2()), t2());

        let id = Tensor2d::identity(3);
        assert_eq!(id.dot(&t2()), t2());
    }

    #[test]
    fn test_diag_dot_diag_stays_diag() {
        let a = t2d();
        let b = Tensor2d::from_vec(3, vec![1.0, 2.0, 3.0]).unwrap();
        let c: Tensor2d<f64> = a.dot(&b);
        assert_eq!(c.data(), &[2.0, 6.0, 15.0]);
    }

    #[test]
    fn test_dot_vector() {
        let a = t2d();
        let v = Vector::ones(3);
        assert_eq!(a.dot(&v).data(), &[2.0, 3.0, 5.0]);
        assert_eq!(v.dot(&v), 3.0);
    }

    #[test]
    fn test_vector_dot_symmetric_commutes() {
        let s = t2s();
        let v = Vector::from_vec(3, vec![1.0, 2.0, 3.0]).unwrap();
        assert_eq!(v.dot(&s), s.dot(&v));
    }

    #[test]
    fn test_ddot_matches_dot_trace() {
        // A : B == tr(A . B) across kind pairs
        let a = t2();
        let s = t2s();
        let d = t2d();

        assert_relative_eq!(a.ddot(&s), a.dot(&s).trace(), epsilon = 1e-12);
        assert_relative_eq!(s.ddot(&a), s.dot(&a).trace(), epsilon = 1e-12);
        assert_relative_eq!(a.ddot(&d), a.dot(&d).trace(), epsilon = 1e-12);
        assert_relative_eq!(d.ddot(&a), d.dot(&a).trace(), epsilon = 1e-12);
        assert_relative_eq!(s.ddot(&d), s.dot(&d).trace(), epsilon = 1e-12);
        assert_relative_eq!(d.ddot(&s), d.dot(&s).trace(), epsilon = 1e-12);
        assert_relative_eq!(d.ddot(&d), d.dot(&d).trace(), epsilon = 1e-12);
        assert_relative_eq!(s.ddot(&s), s.dot(&s).trace(), epsilon = 1e-12);
        assert_relative_eq!(a.ddot(&a), a.dot(&a).trace(), epsilon = 1e-12);
    }

    #[test]
    fn test_dyadic_identities_give_ii() {
        let i2 = Tensor2::<f64>::identity(3);
        let i2s = Tensor2s::identity(3);
        let i2d = Tensor2d::identity(3);
        let ii = Tensor4::ii(3);

        assert_eq!(i2.dyadic(&i2), ii);
        assert_eq!(i2s.dyadic(&i2d), ii);
        assert_eq!(i2d.dyadic(&i2s), ii);
        assert_eq!(i2d.dyadic(&i2d), ii);
    }

    #[test]
    fn test_dyadic_vectors() {
        let a = Vector::from_vec(2, vec![1.0, 2.0]).unwrap();
        let b = Vector::from_vec(2, vec![3.0, 4.0]).unwrap();
        let c = a.dyadic(&b);
        assert_eq!(c.data(), &[3.0, 4.0, 6.0, 8.0]);
    }

    #[test]
    fn test_t4_ddot_t4() {
        // I : Irt == Irt (composition of the maps: A -> (A^T))
        let i4: Tensor4<f64> = Tensor4::identity(3);
        let irt: Tensor4<f64> = Tensor4::identity_rt(3);
        assert_eq!(i4.ddot(&irt), irt);
        assert_eq!(i4.ddot(&i4), i4);
    }

    #[test]
    fn test_t2_ddot_t4_identity() {
        // C_kl = A_ij I_jikl with I_jikl = d_jl d_ik gives C_kl = A_kl.
        let a = t2();
        let i4: Tensor4<f64> = Tensor4::identity(3);
        assert_eq!(a.ddot(&i4), a);

        let d = t2d();
        let b: Tensor2<f64> = d.ddot(&i4);
        assert_eq!(b, Tensor2::from(&d));
    }
}
