//! Element-wise (Hadamard) operator algebra for the runtime-dimensioned
//! family.
//!
//! `*`, `/`, `+`, `-` act entry-wise; single contraction is spelled `dot`,
//! never `*`. Mixed storage kinds follow the closure rules: combining with
//! a less structured kind widens (`Tensor2s + Tensor2d -> Tensor2s`,
//! `Tensor2 + Tensor2s -> Tensor2`), multiplying by a diagonal narrows
//! (`Tensor2 * Tensor2d -> Tensor2d`, the off-diagonal factors hit
//! structural zeros), and adding a scalar to a diagonal widens to symmetric
//! (the scalar reaches the off-diagonal zeros).

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::index;
use crate::scalar::Scalar;

use super::{Tensor2, Tensor2d, Tensor2s, Tensor4, Vector};

/// Entry-wise binary operators between two containers of the same kind,
/// acting on the packed storage.
macro_rules! same_kind_ops {
    ($ty:ident: $($trait:ident $method:ident $op:tt),+ $(,)?) => {
        $(
            impl<'a, 'b, T: Scalar> $trait<&'b $ty<T>> for &'a $ty<T> {
                type Output = $ty<T>;

                fn $method(self, rhs: &'b $ty<T>) -> $ty<T> {
                    debug_assert_eq!(self.nd(), rhs.nd());
                    let mut out = self.clone();
                    for (x, &y) in out.data_mut().iter_mut().zip(rhs.data().iter()) {
                        *x = *x $op y;
                    }
                    out
                }
            }

            impl<T: Scalar> $trait<$ty<T>> for $ty<T> {
                type Output = $ty<T>;

                fn $method(self, rhs: $ty<T>) -> $ty<T> {
                    $trait::$method(&self, &rhs)
                }
            }
        )+
    };
}

/// Entry-wise binary operators against a scalar on the right.
macro_rules! scalar_ops {
    ($ty:ident: $($trait:ident $method:ident $op:tt),+ $(,)?) => {
        $(
            impl<'a, T: Scalar> $trait<T> for &'a $ty<T> {
                type Output = $ty<T>;

                fn $method(self, rhs: T) -> $ty<T> {
                    let mut out = self.clone();
                    for x in out.data_mut().iter_mut() {
                        *x = *x $op rhs;
                    }
                    out
                }
            }

            impl<T: Scalar> $trait<T> for $ty<T> {
                type Output = $ty<T>;

                fn $method(self, rhs: T) -> $ty<T> {
                    $trait::$method(&self, rhs)
                }
            }
        )+
    };
}

/// Entry-wise compound assignment from the same kind and from a scalar.
macro_rules! assign_ops {
    ($ty:ident: $($trait:ident $method:ident $op:tt),+ $(,)?) => {
        $(
            impl<'a, T: Scalar> $trait<&'a $ty<T>> for $ty<T> {
                fn $method(&mut self, rhs: &'a $ty<T>) {
                    debug_assert_eq!(self.nd(), rhs.nd());
                    for (x, &y) in self.data_mut().iter_mut().zip(rhs.data().iter()) {
                        *x $op y;
                    }
                }
            }

            impl<T: Scalar> $trait<$ty<T>> for $ty<T> {
                fn $method(&mut self, rhs: $ty<T>) {
                    $trait::$method(self, &rhs);
                }
            }

            impl<T: Scalar> $trait<T> for $ty<T> {
                fn $method(&mut self, rhs: T) {
                    for x in self.data_mut().iter_mut() {
                        *x $op rhs;
                    }
                }
            }
        )+
    };
}

/// Scalar on the left: `s * A` and friends, per supported scalar type.
macro_rules! scalar_left_mul {
    ($scalar:ty: $($ty:ident),+ $(,)?) => {
        $(
            impl<'a> Mul<&'a $ty<$scalar>> for $scalar {
                type Output = $ty<$scalar>;

                fn mul(self, rhs: &'a $ty<$scalar>) -> $ty<$scalar> {
                    rhs * self
                }
            }

            impl Mul<$ty<$scalar>> for $scalar {
                type Output = $ty<$scalar>;

                fn mul(self, rhs: $ty<$scalar>) -> $ty<$scalar> {
                    rhs * self
                }
            }
        )+
    };
}

/// Unary sign operators.
macro_rules! neg_ops {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl<'a, T: Scalar> Neg for &'a $ty<T> {
                type Output = $ty<T>;

                fn neg(self) -> $ty<T> {
                    let mut out = self.clone();
                    for x in out.data_mut().iter_mut() {
                        *x = -*x;
                    }
                    out
                }
            }

            impl<T: Scalar> Neg for $ty<T> {
                type Output = $ty<T>;

                fn neg(self) -> $ty<T> {
                    -&self
                }
            }
        )+
    };
}

neg_ops!(Vector, Tensor2, Tensor2s, Tensor2d, Tensor4);

same_kind_ops!(Vector: Add add +, Sub sub -, Mul mul *, Div div /);
same_kind_ops!(Tensor2: Add add +, Sub sub -, Mul mul *, Div div /);
same_kind_ops!(Tensor2s: Add add +, Sub sub -, Mul mul *, Div div /);
same_kind_ops!(Tensor4: Add add +, Sub sub -, Mul mul *, Div div /);
// no same-kind `/` for the diagonal kind: the off-diagonal entries would be 0/0
same_kind_ops!(Tensor2d: Add add +, Sub sub -, Mul mul *);

scalar_ops!(Vector: Add add +, Sub sub -, Mul mul *, Div div /);
scalar_ops!(Tensor2: Add add +, Sub sub -, Mul mul *, Div div /);
scalar_ops!(Tensor2s: Add add +, Sub sub -, Mul mul *, Div div /);
scalar_ops!(Tensor4: Add add +, Sub sub -, Mul mul *, Div div /);
// adding a scalar to a diagonal tensor widens (see below); only the
// structure-preserving scalar ops stay diagonal
scalar_ops!(Tensor2d: Mul mul *, Div div /);

assign_ops!(Vector: AddAssign add_assign +=, SubAssign sub_assign -=, MulAssign mul_assign *=, DivAssign div_assign /=);
assign_ops!(Tensor2: AddAssign add_assign +=, SubAssign sub_assign -=, MulAssign mul_assign *=, DivAssign div_assign /=);
assign_ops!(Tensor2s: AddAssign add_assign +=, SubAssign sub_assign -=, MulAssign mul_assign *=, DivAssign div_assign /=);
assign_ops!(Tensor4: AddAssign add_assign +=, SubAssign sub_assign -=, MulAssign mul_assign *=, DivAssign div_assign /=);

scalar_left_mul!(f64: Vector, Tensor2, Tensor2s, Tensor2d, Tensor4);
scalar_left_mul!(f32: Vector, Tensor2, Tensor2s, Tensor2d, Tensor4);

// ---- dense (o) symmetric: logical entry-wise, dense result ---------------

macro_rules! t2_t2s_ops {
    ($($trait:ident $method:ident $op:tt),+ $(,)?) => {
        $(
            impl<'a, 'b, T: Scalar> $trait<&'b Tensor2s<T>> for &'a Tensor2<T> {
                type Output = Tensor2<T>;

                fn $method(self, rhs: &'b Tensor2s<T>) -> Tensor2<T> {
                    debug_assert_eq!(self.nd(), rhs.nd());
                    let nd = self.nd();
                    let mut out = self.clone();
                    for i in 0..nd {
                        for j in 0..nd {
                            let x = out.get(i, j) $op rhs.get(i, j);
                            out.set(i, j, x);
                        }
                    }
                    out
                }
            }

            impl<'a, 'b, T: Scalar> $trait<&'b Tensor2<T>> for &'a Tensor2s<T> {
                type Output = Tensor2<T>;

                fn $method(self, rhs: &'b Tensor2<T>) -> Tensor2<T> {
                    debug_assert_eq!(self.nd(), rhs.nd());
                    let nd = self.nd();
                    let mut out = Tensor2::zero(nd);
                    for i in 0..nd {
                        for j in 0..nd {
                            out.set(i, j, self.get(i, j) $op rhs.get(i, j));
                        }
                    }
                    out
                }
            }

            impl<T: Scalar> $trait<Tensor2s<T>> for Tensor2<T> {
                type Output = Tensor2<T>;

                fn $method(self, rhs: Tensor2s<T>) -> Tensor2<T> {
                    $trait::$method(&self, &rhs)
                }
            }

            impl<T: Scalar> $trait<Tensor2<T>> for Tensor2s<T> {
                type Output = Tensor2<T>;

                fn $method(self, rhs: Tensor2<T>) -> Tensor2<T> {
                    $trait::$method(&self, &rhs)
                }
            }
        )+
    };
}

t2_t2s_ops!(Add add +, Sub sub -, Mul mul *, Div div /);

// ---- additive diagonal combinations: only the diagonal changes -----------

macro_rules! add_diag_ops {
    ($wide:ident, $($trait:ident $method:ident $op:tt),+ $(,)?) => {
        $(
            impl<'a, 'b, T: Scalar> $trait<&'b Tensor2d<T>> for &'a $wide<T> {
                type Output = $wide<T>;

                fn $method(self, rhs: &'b Tensor2d<T>) -> $wide<T> {
                    debug_assert_eq!(self.nd(), rhs.nd());
                    let mut out = self.clone();
                    for i in 0..self.nd() {
                        let x = out.get(i, i) $op rhs.data()[i];
                        out.set(i, i, x);
                    }
                    out
                }
            }

            impl<'a, 'b, T: Scalar> $trait<&'b $wide<T>> for &'a Tensor2d<T> {
                type Output = $wide<T>;

                fn $method(self, rhs: &'b $wide<T>) -> $wide<T> {
                    debug_assert_eq!(self.nd(), rhs.nd());
                    let nd = self.nd();
                    let mut out = $wide::zero(nd);
                    for i in 0..nd {
                        for j in 0..nd {
                            out.set(i, j, self.get(i, j) $op rhs.get(i, j));
                        }
                    }
                    out
                }
            }

            impl<T: Scalar> $trait<Tensor2d<T>> for $wide<T> {
                type Output = $wide<T>;

                fn $method(self, rhs: Tensor2d<T>) -> $wide<T> {
                    $trait::$method(&self, &rhs)
                }
            }

            impl<T: Scalar> $trait<$wide<T>> for Tensor2d<T> {
                type Output = $wide<T>;

                fn $method(self, rhs: $wide<T>) -> $wide<T> {
                    $trait::$method(&self, &rhs)
                }
            }
        )+
    };
}

add_diag_ops!(Tensor2, Add add +, Sub sub -);
add_diag_ops!(Tensor2s, Add add +, Sub sub -);

// ---- multiplicative diagonal combinations: the result stays diagonal -----

macro_rules! mul_diag_ops {
    ($wide:ident) => {
        impl<'a, 'b, T: Scalar> Mul<&'b $wide<T>> for &'a Tensor2d<T> {
            type Output = Tensor2d<T>;

            fn mul(self, rhs: &'b $wide<T>) -> Tensor2d<T> {
                debug_assert_eq!(self.nd(), rhs.nd());
                let mut out = self.clone();
                for i in 0..self.nd() {
                    out.data_mut()[i] *= rhs.get(i, i);
                }
                out
            }
        }

        impl<'a, 'b, T: Scalar> Div<&'b $wide<T>> for &'a Tensor2d<T> {
            type Output = Tensor2d<T>;

            fn div(self, rhs: &'b $wide<T>) -> Tensor2d<T> {
                debug_assert_eq!(self.nd(), rhs.nd());
                let mut out = self.clone();
                for i in 0..self.nd() {
                    out.data_mut()[i] /= rhs.get(i, i);
                }
                out
            }
        }

        impl<'a, 'b, T: Scalar> Mul<&'b Tensor2d<T>> for &'a $wide<T> {
            type Output = Tensor2d<T>;

            fn mul(self, rhs: &'b Tensor2d<T>) -> Tensor2d<T> {
                debug_assert_eq!(self.nd(), rhs.nd());
                let mut out = rhs.clone();
                for i in 0..self.nd() {
                    out.data_mut()[i] *= self.get(i, i);
                }
                out
            }
        }

        impl<T: Scalar> Mul<$wide<T>> for Tensor2d<T> {
            type Output = Tensor2d<T>;

            fn mul(self, rhs: $wide<T>) -> Tensor2d<T> {
                Mul::mul(&self, &rhs)
            }
        }

        impl<T: Scalar> Div<$wide<T>> for Tensor2d<T> {
            type Output = Tensor2d<T>;

            fn div(self, rhs: $wide<T>) -> Tensor2d<T> {
                Div::div(&self, &rhs)
            }
        }

        impl<T: Scalar> Mul<Tensor2d<T>> for $wide<T> {
            type Output = Tensor2d<T>;

            fn mul(self, rhs: Tensor2d<T>) -> Tensor2d<T> {
                Mul::mul(&self, &rhs)
            }
        }
    };
}

mul_diag_ops!(Tensor2);
mul_diag_ops!(Tensor2s);

// ---- diagonal (+-) scalar: the scalar reaches the off-diagonal zeros, so
// the result widens to symmetric ------------------------------------------

impl<'a, T: Scalar> Add<T> for &'a Tensor2d<T> {
    type Output = Tensor2s<T>;

    fn add(self, rhs: T) -> Tensor2s<T> {
        let nd = self.nd();
        let mut out = Tensor2s::constant(nd, rhs);
        for i in 0..nd {
            out.data_mut()[index::tensor2s(nd, i, i)] += self.data()[i];
        }
        out
    }
}

impl<T: Scalar> Add<T> for Tensor2d<T> {
    type Output = Tensor2s<T>;

    fn add(self, rhs: T) -> Tensor2s<T> {
        &self + rhs
    }
}

impl<'a, T: Scalar> Sub<T> for &'a Tensor2d<T> {
    type Output = Tensor2s<T>;

    fn sub(self, rhs: T) -> Tensor2s<T> {
        let nd = self.nd();
        let mut out = Tensor2s::constant(nd, -rhs);
        for i in 0..nd {
            out.data_mut()[index::tensor2s(nd, i, i)] += self.data()[i];
        }
        out
    }
}

impl<T: Scalar> Sub<T> for Tensor2d<T> {
    type Output = Tensor2s<T>;

    fn sub(self, rhs: T) -> Tensor2s<T> {
        &self - rhs
    }
}

// ---- compound assignment across kinds ------------------------------------
// Provided only where the receiver's kind absorbs the result without
// widening.

macro_rules! t2_assign_from {
    ($rhs:ident: $($trait:ident $method:ident $op:tt),+ $(,)?) => {
        $(
            impl<'a, T: Scalar> $trait<&'a $rhs<T>> for Tensor2<T> {
                fn $method(&mut self, rhs: &'a $rhs<T>) {
                    debug_assert_eq!(self.nd(), rhs.nd());
                    for i in 0..self.nd() {
                        for j in 0..self.nd() {
                            let x = self.get(i, j);
                            let y = rhs.get(i, j);
                            self.set(i, j, x $op y);
                        }
                    }
                }
            }

            impl<T: Scalar> $trait<$rhs<T>> for Tensor2<T> {
                fn $method(&mut self, rhs: $rhs<T>) {
                    $trait::$method(self, &rhs);
                }
            }
        )+
    };
}

t2_assign_from!(Tensor2s: AddAssign add_assign +, SubAssign sub_assign -, MulAssign mul_assign *, DivAssign div_assign /);
// `/=` by a diagonal divides the off-diagonal entries by zero, so only the
// well-defined operators are provided
t2_assign_from!(Tensor2d: AddAssign add_assign +, SubAssign sub_assign -, MulAssign mul_assign *);

macro_rules! t2s_assign_from_diag {
    ($($trait:ident $method:ident $op:tt),+ $(,)?) => {
        $(
            impl<'a, T: Scalar> $trait<&'a Tensor2d<T>> for Tensor2s<T> {
                fn $method(&mut self, rhs: &'a Tensor2d<T>) {
                    debug_assert_eq!(self.nd(), rhs.nd());
                    for i in 0..self.nd() {
                        for j in i..self.nd() {
                            let x = self.get(i, j);
                            let y = rhs.get(i, j);
                            self.set(i, j, x $op y);
                        }
                    }
                }
            }

            impl<T: Scalar> $trait<Tensor2d<T>> for Tensor2s<T> {
                fn $method(&mut self, rhs: Tensor2d<T>) {
                    $trait::$method(self, &rhs);
                }
            }
        )+
    };
}

t2s_assign_from_diag!(AddAssign add_assign +, SubAssign sub_assign -, MulAssign mul_assign *);

macro_rules! t2d_assign_from {
    ($rhs:ident) => {
        impl<'a, T: Scalar> MulAssign<&'a $rhs<T>> for Tensor2d<T> {
            fn mul_assign(&mut self, rhs: &'a $rhs<T>) {
                debug_assert_eq!(self.nd(), rhs.nd());
                for i in 0..self.nd() {
                    self.data_mut()[i] *= rhs.get(i, i);
                }
            }
        }

        impl<'a, T: Scalar> DivAssign<&'a $rhs<T>> for Tensor2d<T> {
            fn div_assign(&mut self, rhs: &'a $rhs<T>) {
                debug_assert_eq!(self.nd(), rhs.nd());
                for i in 0..self.nd() {
                    self.data_mut()[i] /= rhs.get(i, i);
                }
            }
        }

        impl<T: Scalar> MulAssign<$rhs<T>> for Tensor2d<T> {
            fn mul_assign(&mut self, rhs: $rhs<T>) {
                MulAssign::mul_assign(self, &rhs);
            }
        }

        impl<T: Scalar> DivAssign<$rhs<T>> for Tensor2d<T> {
            fn div_assign(&mut self, rhs: $rhs<T>) {
                DivAssign::div_assign(self, &rhs);
            }
        }
    };
}

t2d_assign_from!(Tensor2);
t2d_assign_from!(Tensor2s);

// same-kind compound assignment for the diagonal kind, minus the
// ill-defined `/=` and scalar `+=`/`-=` (those widen, see above)
macro_rules! t2d_same_assign {
    ($($trait:ident $method:ident $op:tt),+ $(,)?) => {
        $(
            impl<'a, T: Scalar> $trait<&'a Tensor2d<T>> for Tensor2d<T> {
                fn $method(&mut self, rhs: &'a Tensor2d<T>) {
                    debug_assert_eq!(self.nd(), rhs.nd());
                    for (x, &y) in self.data_mut().iter_mut().zip(rhs.data().iter()) {
                        *x $op y;
                    }
                }
            }

            impl<T: Scalar> $trait<Tensor2d<T>> for Tensor2d<T> {
                fn $method(&mut self, rhs: Tensor2d<T>) {
                    $trait::$method(self, &rhs);
                }
            }
        )+
    };
}

t2d_same_assign!(AddAssign add_assign +=, SubAssign sub_assign -=, MulAssign mul_assign *=);

impl<T: Scalar> MulAssign<T> for Tensor2d<T> {
    fn mul_assign(&mut self, rhs: T) {
        for x in self.data_mut().iter_mut() {
            *x *= rhs;
        }
    }
}

impl<T: Scalar> DivAssign<T> for Tensor2d<T> {
    fn div_assign(&mut self, rhs: T) {
        for x in self.data_mut().iter_mut() {
            *x /= rhs;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_kind_elementwise() {
        let a = Tensor2::from_vec(2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let b = Tensor2::from_vec(2, vec![4.0, 3.0, 2.0, 1.0]).unwrap();
        assert_eq!((&a + &b).data(), &[5.0, 5.0, 5.0, 5.0]);
        assert_eq!((&a - &b).data(), &[-3.0, -1.0, 1.0, 3.0]);
        assert_eq!((&a * &b).data(), &[4.0, 6.0, 6.0, 4.0]);
    }

    #[test]
    fn test_scalar_ops() {
        let a = Tensor2s::<f64>::from_vec(2, vec![1.0, 2.0, 5.0]).unwrap();
        assert_eq!((&a * 2.0).data(), &[2.0, 4.0, 10.0]);
        assert_eq!((2.0 * &a).data(), &[2.0, 4.0, 10.0]);
        assert_eq!((&a + 1.0).data(), &[2.0, 3.0, 6.0]);
    }

    #[test]
    fn test_compound_assign() {
        let mut a = Vector::from_vec(2, vec![1.0, 2.0]).unwrap();
        a += Vector::ones(2);
        assert_eq!(a.data(), &[2.0, 3.0]);
        a *= 3.0;
        assert_eq!(a.data(), &[6.0, 9.0]);
    }

    #[test]
    fn test_neg() {
        let a = Tensor2d::from_vec(2, vec![1.0, -2.0]).unwrap();
        assert_eq!((-&a).data(), &[-1.0, 2.0]);
    }

    #[test]
    fn test_t2_plus_t2s_widens() {
        let a = Tensor2::from_vec(2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let s = Tensor2s::from_vec(2, vec![1.0, 1.0, 1.0]).unwrap();
        let c: Tensor2<f64> = &a + &s;
        assert_eq!(c.data(), &[2.0, 3.0, 4.0, 5.0]);
        let d: Tensor2<f64> = &s - &a;
        assert_eq!(d.data(), &[0.0, -1.0, -2.0, -3.0]);
    }

    #[test]
    fn test_t2_plus_diag_touches_diagonal_only() {
        let a = Tensor2::from_vec(2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let d = Tensor2d::from_vec(2, vec![10.0, 20.0]).unwrap();
        let c: Tensor2<f64> = &a + &d;
        assert_eq!(c.data(), &[11.0, 2.0, 3.0, 24.0]);
        let e: Tensor2<f64> = &d - &a;
        assert_eq!(e.data(), &[9.0, -2.0, -3.0, 16.0]);
    }

    #[test]
    fn test_mul_by_diag_narrows() {
        let a = Tensor2::from_vec(2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let d = Tensor2d::from_vec(2, vec![10.0, 20.0]).unwrap();
        let c: Tensor2d<f64> = &a * &d;
        assert_eq!(c.data(), &[10.0, 80.0]);
        let e: Tensor2d<f64> = &d / &a;
        assert_eq!(e.data(), &[10.0, 5.0]);
    }

    #[test]
    fn test_diag_plus_scalar_widens_to_symmetric() {
        let d = Tensor2d::from_vec(2, vec![1.0, 2.0]).unwrap();
        let s: Tensor2s<f64> = &d + 1.0;
        assert_eq!(s.get(0, 0), 2.0);
        assert_eq!(s.get(0, 1), 1.0);
        assert_eq!(s.get(1, 1), 3.0);

        let m: Tensor2s<f64> = &d - 1.0;
        assert_eq!(m.get(0, 0), 0.0);
        assert_eq!(m.get(0, 1), -1.0);
        assert_eq!(m.get(1, 1), 1.0);
    }

    #[test]
    fn test_mixed_compound_assign() {
        let mut a = Tensor2::from_vec(2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let s = Tensor2s::from_vec(2, vec![1.0, 1.0, 1.0]).unwrap();
        a += &s;
        assert_eq!(a.data(), &[2.0, 3.0, 4.0, 5.0]);

        let mut d = Tensor2d::from_vec(2, vec![2.0, 4.0]).unwrap();
        d *= &s;
        assert_eq!(d.data(), &[2.0, 4.0]);

        let mut s2 = Tensor2s::from_vec(2, vec![1.0, 1.0, 1.0]).unwrap();
        s2 += Tensor2d::from_vec(2, vec![1.0, 2.0]).unwrap();
        assert_eq!(s2.data(), &[2.0, 1.0, 3.0]);
    }
}
