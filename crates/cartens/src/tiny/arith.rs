//! Element-wise operator algebra for the fixed-size family; the same kind
//! rules as [`crate::cartesian`]'s operators.

use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::index;
use crate::scalar::Scalar;

use super::dim::Dim;
use super::{Tensor2, Tensor2d, Tensor2s, Tensor4, Vector};

macro_rules! same_kind_ops {
    ($ty:ident: $($trait:ident $method:ident $op:tt),+ $(,)?) => {
        $(
            impl<'a, 'b, T: Scalar, D: Dim> $trait<&'b $ty<T, D>> for &'a $ty<T, D> {
                type Output = $ty<T, D>;

                fn $method(self, rhs: &'b $ty<T, D>) -> $ty<T, D> {
                    let mut out = self.clone();
                    for (x, &y) in out.data_mut().iter_mut().zip(rhs.data().iter()) {
                        *x = *x $op y;
                    }
                    out
                }
            }

            impl<T: Scalar, D: Dim> $trait<$ty<T, D>> for $ty<T, D> {
                type Output = $ty<T, D>;

                fn $method(self, rhs: $ty<T, D>) -> $ty<T, D> {
                    $trait::$method(&self, &rhs)
                }
            }
        )+
    };
}

macro_rules! scalar_ops {
    ($ty:ident: $($trait:ident $method:ident $op:tt),+ $(,)?) => {
        $(
            impl<'a, T: Scalar, D: Dim> $trait<T> for &'a $ty<T, D> {
                type Output = $ty<T, D>;

                fn $method(self, rhs: T) -> $ty<T, D> {
                    let mut out = self.clone();
                    for x in out.data_mut().iter_mut() {
                        *x = *x $op rhs;
                    }
                    out
                }
            }

            impl<T: Scalar, D: Dim> $trait<T> for $ty<T, D> {
                type Output = $ty<T, D>;

                fn $method(self, rhs: T) -> $ty<T, D> {
                    $trait::$method(&self, rhs)
                }
            }
        )+
    };
}

macro_rules! assign_ops {
    ($ty:ident: $($trait:ident $method:ident $op:tt),+ $(,)?) => {
        $(
            impl<'a, T: Scalar, D: Dim> $trait<&'a $ty<T, D>> for $ty<T, D> {
                fn $method(&mut self, rhs: &'a $ty<T, D>) {
                    for (x, &y) in self.data_mut().iter_mut().zip(rhs.data().iter()) {
                        *x $op y;
                    }
                }
            }

            impl<T: Scalar, D: Dim> $trait<$ty<T, D>> for $ty<T, D> {
                fn $method(&mut self, rhs: $ty<T, D>) {
                    $trait::$method(self, &rhs);
                }
            }

            impl<T: Scalar, D: Dim> $trait<T> for $ty<T, D> {
                fn $method(&mut self, rhs: T) {
                    for x in self.data_mut().iter_mut() {
                        *x $op rhs;
                    }
                }
            }
        )+
    };
}

macro_rules! scalar_left_mul {
    ($scalar:ty: $($ty:ident),+ $(,)?) => {
        $(
            impl<'a, D: Dim> Mul<&'a $ty<$scalar, D>> for $scalar {
                type Output = $ty<$scalar, D>;

                fn mul(self, rhs: &'a $ty<$scalar, D>) -> $ty<$scalar, D> {
                    rhs * self
                }
            }

            impl<D: Dim> Mul<$ty<$scalar, D>> for $scalar {
                type Output = $ty<$scalar, D>;

                fn mul(self, rhs: $ty<$scalar, D>) -> $ty<$scalar, D> {
                    rhs * self
                }
            }
        )+
    };
}

macro_rules! neg_ops {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl<'a, T: Scalar, D: Dim> Neg for &'a $ty<T, D> {
                type Output = $ty<T, D>;

                fn neg(self) -> $ty<T, D> {
                    let mut out = self.clone();
                    for x in out.data_mut().iter_mut() {
                        *x = -*x;
                    }
                    out
                }
            }

            impl<T: Scalar, D: Dim> Neg for $ty<T, D> {
                type Output = $ty<T, D>;

                fn neg(self) -> $ty<T, D> {
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
same_kind_ops!(Tensor2d: Add add +, Sub sub -, Mul mul *);

scalar_ops!(Vector: Add add +, Sub sub -, Mul mul *, Div div /);
scalar_ops!(Tensor2: Add add +, Sub sub -, Mul mul *, Div div /);
scalar_ops!(Tensor2s: Add add +, Sub sub -, Mul mul *, Div div /);
scalar_ops!(Tensor4: Add add +, Sub sub -, Mul mul *, Div div /);
scalar_ops!(Tensor2d: Mul mul *, Div div /);

assign_ops!(Vector: AddAssign add_assign +=, SubAssign sub_assign -=, MulAssign mul_assign *=, DivAssign div_assign /=);
assign_ops!(Tensor2: AddAssign add_assign +=, SubAssign sub_assign -=, MulAssign mul_assign *=, DivAssign div_assign /=);
assign_ops!(Tensor2s: AddAssign add_assign +=, SubAssign sub_assign -=, MulAssign mul_assign *=, DivAssign div_assign /=);
assign_ops!(Tensor4: AddAssign add_assign +=, SubAssign sub_assign -=, MulAssign mul_assign *=, DivAssign div_assign /=);

scalar_left_mul!(f64: Vector, Tensor2, Tensor2s, Tensor2d, Tensor4);
scalar_left_mul!(f32: Vector, Tensor2, Tensor2s, Tensor2d, Tensor4);

// ---- mixed kinds (same rules as the runtime-dimensioned family) ----------

macro_rules! t2_t2s_ops {
    ($($trait:ident $method:ident $op:tt),+ $(,)?) => {
        $(
            impl<'a, 'b, T: Scalar, D: Dim> $trait<&'b Tensor2s<T, D>> for &'a Tensor2<T, D> {
                type Output = Tensor2<T, D>;

                fn $method(self, rhs: &'b Tensor2s<T, D>) -> Tensor2<T, D> {
                    let mut out = self.clone();
                    for i in 0..D::ND {
                        for j in 0..D::ND {
                            let x = out.get(i, j) $op rhs.get(i, j);
                            out.set(i, j, x);
                        }
                    }
                    out
                }
            }

            impl<'a, 'b, T: Scalar, D: Dim> $trait<&'b Tensor2<T, D>> for &'a Tensor2s<T, D> {
                type Output = Tensor2<T, D>;

                fn $method(self, rhs: &'b Tensor2<T, D>) -> Tensor2<T, D> {
                    let mut out = Tensor2::zero();
                    for i in 0..D::ND {
                        for j in 0..D::ND {
                            out.set(i, j, self.get(i, j) $op rhs.get(i, j));
                        }
                    }
                    out
                }
            }

            impl<T: Scalar, D: Dim> $trait<Tensor2s<T, D>> for Tensor2<T, D> {
                type Output = Tensor2<T, D>;

                fn $method(self, rhs: Tensor2s<T, D>) -> Tensor2<T, D> {
                    $trait::$method(&self, &rhs)
                }
            }

            impl<T: Scalar, D: Dim> $trait<Tensor2<T, D>> for Tensor2s<T, D> {
                type Output = Tensor2<T, D>;

                fn $method(self, rhs: Tensor2<T, D>) -> Tensor2<T, D> {
                    $trait::$method(&self, &rhs)
                }
            }
        )+
    };
}

t2_t2s_ops!(Add add +, Sub sub -, Mul mul *, Div div /);

macro_rules! add_diag_ops {
    ($wide:ident, $($trait:ident $method:ident $op:tt),+ $(,)?) => {
        $(
            impl<'a, 'b, T: Scalar, D: Dim> $trait<&'b Tensor2d<T, D>> for &'a $wide<T, D> {
                type Output = $wide<T, D>;

                fn $method(self, rhs: &'b Tensor2d<T, D>) -> $wide<T, D> {
                    let mut out = self.clone();
                    for i in 0..D::ND {
                        let x = out.get(i, i) $op rhs.data()[i];
                        out.set(i, i, x);
                    }
                    out
                }
            }

            impl<'a, 'b, T: Scalar, D: Dim> $trait<&'b $wide<T, D>> for &'a Tensor2d<T, D> {
                type Output = $wide<T, D>;

                fn $method(self, rhs: &'b $wide<T, D>) -> $wide<T, D> {
                    let mut out = $wide::zero();
                    for i in 0..D::ND {
                        for j in 0..D::ND {
                            out.set(i, j, self.get(i, j) $op rhs.get(i, j));
                        }
                    }
                    out
                }
            }

            impl<T: Scalar, D: Dim> $trait<Tensor2d<T, D>> for $wide<T, D> {
                type Output = $wide<T, D>;

                fn $method(self, rhs: Tensor2d<T, D>) -> $wide<T, D> {
                    $trait::$method(&self, &rhs)
                }
            }

            impl<T: Scalar, D: Dim> $trait<$wide<T, D>> for Tensor2d<T, D> {
                type Output = $wide<T, D>;

                fn $method(self, rhs: $wide<T, D>) -> $wide<T, D> {
                    $trait::$method(&self, &rhs)
                }
            }
        )+
    };
}

add_diag_ops!(Tensor2, Add add +, Sub sub -);
add_diag_ops!(Tensor2s, Add add +, Sub sub -);

macro_rules! mul_diag_ops {
    ($wide:ident) => {
        impl<'a, 'b, T: Scalar, D: Dim> Mul<&'b $wide<T, D>> for &'a Tensor2d<T, D> {
            type Output = Tensor2d<T, D>;

            fn mul(self, rhs: &'b $wide<T, D>) -> Tensor2d<T, D> {
                let mut out = self.clone();
                for i in 0..D::ND {
                    out.data_mut()[i] *= rhs.get(i, i);
                }
                out
            }
        }

        impl<'a, 'b, T: Scalar, D: Dim> Div<&'b $wide<T, D>> for &'a Tensor2d<T, D> {
            type Output = Tensor2d<T, D>;

            fn div(self, rhs: &'b $wide<T, D>) -> Tensor2d<T, D> {
                let mut out = self.clone();
                for i in 0..D::ND {
                    out.data_mut()[i] /= rhs.get(i, i);
                }
                out
            }
        }

        impl<'a, 'b, T: Scalar, D: Dim> Mul<&'b Tensor2d<T, D>> for &'a $wide<T, D> {
            type Output = Tensor2d<T, D>;

            fn mul(self, rhs: &'b Tensor2d<T, D>) -> Tensor2d<T, D> {
                let mut out = rhs.clone();
                for i in 0..D::ND {
                    out.data_mut()[i] *= self.get(i, i);
                }
                out
            }
        }

        impl<T: Scalar, D: Dim> Mul<$wide<T, D>> for Tensor2d<T, D> {
            type Output = Tensor2d<T, D>;

            fn mul(self, rhs: $wide<T, D>) -> Tensor2d<T, D> {
                Mul::mul(&self, &rhs)
            }
        }

        impl<T: Scalar, D: Dim> Div<$wide<T, D>> for Tensor2d<T, D> {
            type Output = Tensor2d<T, D>;

            fn div(self, rhs: $wide<T, D>) -> Tensor2d<T, D> {
                Div::div(&self, &rhs)
            }
        }

        impl<T: Scalar, D: Dim> Mul<Tensor2d<T, D>> for $wide<T, D> {
            type Output = Tensor2d<T, D>;

            fn mul(self, rhs: Tensor2d<T, D>) -> Tensor2d<T, D> {
                Mul::mul(&self, &rhs)
            }
        }
    };
}

mul_diag_ops!(Tensor2);
mul_diag_ops!(Tensor2s);

// diagonal (+-) scalar widens to symmetric

impl<'a, T: Scalar, D: Dim> Add<T> for &'a Tensor2d<T, D> {
    type Output = Tensor2s<T, D>;

    fn add(self, rhs: T) -> Tensor2s<T, D> {
        let mut out = Tensor2s::constant(rhs);
        for i in 0..D::ND {
            out.data_mut()[index::tensor2s(D::ND, i, i)] += self.data()[i];
        }
        out
    }
}

impl<T: Scalar, D: Dim> Add<T> for Tensor2d<T, D> {
    type Output = Tensor2s<T, D>;

    fn add(self, rhs: T) -> Tensor2s<T, D> {
        &self + rhs
    }
}

impl<'a, T: Scalar, D: Dim> Sub<T> for &'a Tensor2d<T, D> {
    type Output = Tensor2s<T, D>;

    fn sub(self, rhs: T) -> Tensor2s<T, D> {
        let mut out = Tensor2s::constant(-rhs);
        for i in 0..D::ND {
            out.data_mut()[index::tensor2s(D::ND, i, i)] += self.data()[i];
        }
        out
    }
}

impl<T: Scalar, D: Dim> Sub<T> for Tensor2d<T, D> {
    type Output = Tensor2s<T, D>;

    fn sub(self, rhs: T) -> Tensor2s<T, D> {
        &self - rhs
    }
}

// compound assignment across kinds, where the receiver absorbs the result

macro_rules! t2_assign_from {
    ($rhs:ident: $($trait:ident $method:ident $op:tt),+ $(,)?) => {
        $(
            impl<'a, T: Scalar, D: Dim> $trait<&'a $rhs<T, D>> for Tensor2<T, D> {
                fn $method(&mut self, rhs: &'a $rhs<T, D>) {
                    for i in 0..D::ND {
                        for j in 0..D::ND {
                            let x = self.get(i, j);
                            let y = rhs.get(i, j);
                            self.set(i, j, x $op y);
                        }
                    }
                }
            }

            impl<T: Scalar, D: Dim> $trait<$rhs<T, D>> for Tensor2<T, D> {
                fn $method(&mut self, rhs: $rhs<T, D>) {
                    $trait::$method(self, &rhs);
                }
            }
        )+
    };
}

t2_assign_from!(Tensor2s: AddAssign add_assign +, SubAssign sub_assign -, MulAssign mul_assign *, DivAssign div_assign /);
t2_assign_from!(Tensor2d: AddAssign add_assign +, SubAssign sub_assign -, MulAssign mul_assign *);

macro_rules! t2s_assign_from_diag {
    ($($trait:ident $method:ident $op:tt),+ $(,)?) => {
        $(
            impl<'a, T: Scalar, D: Dim> $trait<&'a Tensor2d<T, D>> for Tensor2s<T, D> {
                fn $method(&mut self, rhs: &'a Tensor2d<T, D>) {
                    for i in 0..D::ND {
                        for j in i..D::ND {
                            let x = self.get(i, j);
                            let y = rhs.get(i, j);
                            self.set(i, j, x $op y);
                        }
                    }
                }
            }

            impl<T: Scalar, D: Dim> $trait<Tensor2d<T, D>> for Tensor2s<T, D> {
                fn $method(&mut self, rhs: Tensor2d<T, D>) {
                    $trait::$method(self, &rhs);
                }
            }
        )+
    };
}

t2s_assign_from_diag!(AddAssign add_assign +, SubAssign sub_assign -, MulAssign mul_assign *);

macro_rules! t2d_assign_from {
    ($rhs:ident) => {
        impl<'a, T: Scalar, D: Dim> MulAssign<&'a $rhs<T, D>> for Tensor2d<T, D> {
            fn mul_assign(&mut self, rhs: &'a $rhs<T, D>) {
                for i in 0..D::ND {
                    self.data_mut()[i] *= rhs.get(i, i);
                }
            }
        }

        impl<'a, T: Scalar, D: Dim> DivAssign<&'a $rhs<T, D>> for Tensor2d<T, D> {
            fn div_assign(&mut self, rhs: &'a $rhs<T, D>) {
                for i in 0..D::ND {
                    self.data_mut()[i] /= rhs.get(i, i);
                }
            }
        }

        impl<T: Scalar, D: Dim> MulAssign<$rhs<T, D>> for Tensor2d<T, D> {
            fn mul_assign(&mut self, rhs: $rhs<T, D>) {
                MulAssign::mul_assign(self, &rhs);
            }
        }

        impl<T: Scalar, D: Dim> DivAssign<$rhs<T, D>> for Tensor2d<T, D> {
            fn div_assign(&mut self, rhs: $rhs<T, D>) {
                DivAssign::div_assign(self, &rhs);
            }
        }
    };
}

t2d_assign_from!(Tensor2);
t2d_assign_from!(Tensor2s);

macro_rules! t2d_same_assign {
    ($($trait:ident $method:ident $op:tt),+ $(,)?) => {
        $(
            impl<'a, T: Scalar, D: Dim> $trait<&'a Tensor2d<T, D>> for Tensor2d<T, D> {
                fn $method(&mut self, rhs: &'a Tensor2d<T, D>) {
                    for (x, &y) in self.data_mut().iter_mut().zip(rhs.data().iter()) {
                        *x $op y;
                    }
                }
            }

            impl<T: Scalar, D: Dim> $trait<Tensor2d<T, D>> for Tensor2d<T, D> {
                fn $method(&mut self, rhs: Tensor2d<T, D>) {
                    $trait::$method(self, &rhs);
                }
            }
        )+
    };
}

t2d_same_assign!(AddAssign add_assign +=, SubAssign sub_assign -=, MulAssign mul_assign *=);

impl<T: Scalar, D: Dim> MulAssign<T> for Tensor2d<T, D> {
    fn mul_assign(&mut self, rhs: T) {
        for x in self.data_mut().iter_mut() {
            *x *= rhs;
        }
    }
}

impl<T: Scalar, D: Dim> DivAssign<T> for Tensor2d<T, D> {
    fn div_assign(&mut self, rhs: T) {
        for x in self.data_mut().iter_mut() {
            *x /= rhs;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiny::D2;

    #[test]
    fn test_same_kind_and_scalar() {
        let a: Tensor2<f64, D2> = Tensor2::from_slice(&[1.0, 2.0, 3.0, 4.0]);
        let b: Tensor2<f64, D2> = Tensor2::ones();
        assert_eq!((&a + &b).data(), &[2.0, 3.0, 4.0, 5.0]);
        assert_eq!((&a * 2.0).data(), &[2.0, 4.0, 6.0, 8.0]);
        assert_eq!((2.0 * &a).data(), &[2.0, 4.0, 6.0, 8.0]);
    }

    #[test]
    fn test_diag_widening_and_narrowing() {
        let a: Tensor2<f64, D2> = Tensor2::from_slice(&[1.0, 2.0, 3.0, 4.0]);
        let d: Tensor2d<f64, D2> = Tensor2d::from_slice(&[10.0, 20.0]);

        let sum: Tensor2<f64, D2> = &a + &d;
        assert_eq!(sum.data(), &[11.0, 2.0, 3.0, 24.0]);

        let prod: Tensor2d<f64, D2> = &a * &d;
        assert_eq!(prod.data(), &[10.0, 80.0]);

        let s: Tensor2s<f64, D2> = &d + 1.0;
        assert_eq!(s.data(), &[11.0, 1.0, 21.0]);
    }

    #[test]
    fn test_compound() {
        let mut a: Tensor2<f64, D2> = Tensor2::ones();
        a += Tensor2s::<f64, D2>::identity();
        assert_eq!(a.data(), &[2.0, 1.0, 1.0, 2.0]);

        let mut d: Tensor2d<f64, D2> = Tensor2d::from_slice(&[2.0, 4.0]);
        d /= 2.0;
        assert_eq!(d.data(), &[1.0, 2.0]);
    }
}
