//! Transposition, trace, determinant and inverse kernels.
//!
//! Determinants and inverses use the closed-form small-matrix formulas
//! (cofactor expansion, adjugate) specialized per storage kind, not generic
//! elimination. Closed forms exist for 2 and 3 dimensions; asking for any
//! other dimension is a precondition violation and panics. The diagonal
//! specializations reduce to a product respectively a reciprocal per entry.
//!
//! Inverses follow native floating-point semantics on singular input: the
//! division by a zero determinant produces inf/NaN entries. Callers that
//! need a detectable failure use the `try_inv` entry points on the
//! containers, which test the determinant first.

use crate::index;
use crate::scalar::Scalar;

// -------------------------------------------------------------------------
// transpositions
// -------------------------------------------------------------------------

/// `C_ij = A_ji`, dense rank-2.
pub fn transpose_t2<T: Scalar>(nd: usize, a: &[T], out: &mut [T]) {
    debug_assert_eq!(a.len(), index::tensor2_size(nd));
    debug_assert_eq!(out.len(), index::tensor2_size(nd));

    for i in 0..nd {
        for j in 0..nd {
            out[j * nd + i] = a[i * nd + j];
        }
    }
}

/// `C_lkji = A_ijkl`, full reversal of a rank-4 tensor.
pub fn transpose_t4<T: Scalar>(nd: usize, a: &[T], out: &mut [T]) {
    debug_assert_eq!(a.len(), index::tensor4_size(nd));
    debug_assert_eq!(out.len(), index::tensor4_size(nd));

    for i in 0..nd {
        for j in 0..nd {
            for k in 0..nd {
                for l in 0..nd {
                    out[index::tensor4(nd, l, k, j, i)] = a[index::tensor4(nd, i, j, k, l)];
                }
            }
        }
    }
}

/// `C_ijlk = A_ijkl`, right-pair swap.
pub fn transpose_t4_r<T: Scalar>(nd: usize, a: &[T], out: &mut [T]) {
    debug_assert_eq!(a.len(), index::tensor4_size(nd));
    debug_assert_eq!(out.len(), index::tensor4_size(nd));

    for i in 0..nd {
        for j in 0..nd {
            for k in 0..nd {
                for l in 0..nd {
                    out[index::tensor4(nd, i, j, l, k)] = a[index::tensor4(nd, i, j, k, l)];
                }
            }
        }
    }
}

/// `C_jikl = A_ijkl`, left-pair swap.
pub fn transpose_t4_l<T: Scalar>(nd: usize, a: &[T], out: &mut [T]) {
    debug_assert_eq!(a.len(), index::tensor4_size(nd));
    debug_assert_eq!(out.len(), index::tensor4_size(nd));

    for i in 0..nd {
        for j in 0..nd {
            for k in 0..nd {
                for l in 0..nd {
                    out[index::tensor4(nd, j, i, k, l)] = a[index::tensor4(nd, i, j, k, l)];
                }
            }
        }
    }
}

// -------------------------------------------------------------------------
// trace
// -------------------------------------------------------------------------

/// `A_ii`, dense rank-2.
pub fn trace_t2<T: Scalar>(nd: usize, a: &[T]) -> T {
    debug_assert_eq!(a.len(), index::tensor2_size(nd));

    let mut sum = T::zero();
    for i in 0..nd {
        sum += a[i * nd + i];
    }
    sum
}

/// `A_ii`, symmetric rank-2.
pub fn trace_t2s<T: Scalar>(nd: usize, a: &[T]) -> T {
    debug_assert_eq!(a.len(), index::tensor2s_size(nd));

    let mut sum = T::zero();
    for i in 0..nd {
        sum += a[index::tensor2s(nd, i, i)];
    }
    sum
}

/// `A_ii`, diagonal rank-2: the whole packed buffer.
pub fn trace_t2d<T: Scalar>(nd: usize, a: &[T]) -> T {
    debug_assert_eq!(a.len(), nd);

    let mut sum = T::zero();
    for i in 0..nd {
        sum += a[i];
    }
    sum
}

// -------------------------------------------------------------------------
// determinant
// -------------------------------------------------------------------------

/// Determinant of a dense rank-2 tensor, cofactor expansion.
///
/// # Panics
///
/// Panics for dimensions other than 2 and 3.
pub fn det_t2<T: Scalar>(nd: usize, a: &[T]) -> T {
    debug_assert_eq!(a.len(), index::tensor2_size(nd));

    match nd {
        2 => a[0] * a[3] - a[1] * a[2],
        3 => {
            a[0] * (a[4] * a[8] - a[5] * a[7]) - a[1] * (a[3] * a[8] - a[5] * a[6])
                + a[2] * (a[3] * a[7] - a[4] * a[6])
        }
        _ => panic!("no closed-form determinant for {nd} dimensions"),
    }
}

/// Determinant of a symmetric rank-2 tensor, evaluated on the packed
/// upper triangle.
///
/// # Panics
///
/// Panics for dimensions other than 2 and 3.
pub fn det_t2s<T: Scalar>(nd: usize, a: &[T]) -> T {
    debug_assert_eq!(a.len(), index::tensor2s_size(nd));

    let two = T::one() + T::one();
    match nd {
        2 => a[0] * a[2] - a[1] * a[1],
        3 => {
            a[0] * a[3] * a[5] + two * (a[1] * a[2] * a[4])
                - a[4] * a[4] * a[0]
                - a[2] * a[2] * a[3]
                - a[1] * a[1] * a[5]
        }
        _ => panic!("no closed-form determinant for {nd} dimensions"),
    }
}

/// Determinant of a diagonal rank-2 tensor: the product of the diagonal.
/// Defined for every dimension.
pub fn det_t2d<T: Scalar>(nd: usize, a: &[T]) -> T {
    debug_assert_eq!(a.len(), nd);

    let mut prod = T::one();
    for i in 0..nd {
        prod = prod * a[i];
    }
    prod
}

// -------------------------------------------------------------------------
// inverse
// -------------------------------------------------------------------------

/// Inverse of a dense rank-2 tensor: adjugate divided by determinant.
///
/// # Panics
///
/// Panics for dimensions other than 2 and 3.
pub fn inv_t2<T: Scalar>(nd: usize, a: &[T], out: &mut [T]) {
    debug_assert_eq!(a.len(), index::tensor2_size(nd));
    debug_assert_eq!(out.len(), index::tensor2_size(nd));

    let det = det_t2(nd, a);
    match nd {
        2 => {
            out[0] = a[3] / det;
            out[1] = -a[1] / det;
            out[2] = -a[2] / det;
            out[3] = a[0] / det;
        }
        3 => {
            out[0] = (a[4] * a[8] - a[5] * a[7]) / det;
            out[1] = (a[2] * a[7] - a[1] * a[8]) / det;
            out[2] = (a[1] * a[5] - a[2] * a[4]) / det;
            out[3] = (a[5] * a[6] - a[3] * a[8]) / det;
            out[4] = (a[0] * a[8] - a[2] * a[6]) / det;
            out[5] = (a[2] * a[3] - a[0] * a[5]) / det;
            out[6] = (a[3] * a[7] - a[4] * a[6]) / det;
            out[7] = (a[1] * a[6] - a[0] * a[7]) / det;
            out[8] = (a[0] * a[4] - a[1] * a[3]) / det;
        }
        _ => panic!("no closed-form inverse for {nd} dimensions"),
    }
}

/// Inverse of a symmetric rank-2 tensor, packed adjugate over determinant.
/// The inverse of a symmetric matrix is symmetric, so the result stays in
/// packed storage.
///
/// # Panics
///
/// Panics for dimensions other than 2 and 3.
pub fn inv_t2s<T: Scalar>(nd: usize, a: &[T], out: &mut [T]) {
    debug_assert_eq!(a.len(), index::tensor2s_size(nd));
    debug_assert_eq!(out.len(), index::tensor2s_size(nd));

    let det = det_t2s(nd, a);
    match nd {
        2 => {
            out[0] = a[2] / det;
            out[1] = -a[1] / det;
            out[2] = a[0] / det;
        }
        3 => {
            out[0] = (a[3] * a[5] - a[4] * a[4]) / det;
            out[1] = (a[2] * a[4] - a[1] * a[5]) / det;
            out[2] = (a[1] * a[4] - a[2] * a[3]) / det;
            out[3] = (a[0] * a[5] - a[2] * a[2]) / det;
            out[4] = (a[1] * a[2] - a[0] * a[4]) / det;
            out[5] = (a[0] * a[3] - a[1] * a[1]) / det;
        }
        _ => panic!("no closed-form inverse for {nd} dimensions"),
    }
}

/// Inverse of a diagonal rank-2 tensor: reciprocal of each diagonal entry.
/// Defined for every dimension; a zero entry yields an infinite entry.
pub fn inv_t2d<T: Scalar>(nd: usize, a: &[T], out: &mut [T]) {
    debug_assert_eq!(a.len(), nd);
    debug_assert_eq!(out.len(), nd);

    for i in 0..nd {
        out[i] = T::one() / a[i];
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_transpose_t2() {
        let a = [1.0, 2.0, 3.0, 4.0];
        let mut out = [0.0; 4];
        transpose_t2(2, &a, &mut out);
        assert_eq!(out, [1.0, 3.0, 2.0, 4.0]);
    }

    #[test]
    fn test_transpose_t4_involution() {
        let nd = 2;
        let a: Vec<f64> = (0..16).map(|x| x as f64).collect();
        let mut t = [0.0; 16];
        let mut back = [0.0; 16];

        transpose_t4(nd, &a, &mut t);
        transpose_t4(nd, &t, &mut back);
        assert_eq!(back.as_slice(), a.as_slice());

        transpose_t4_r(nd, &a, &mut t);
        transpose_t4_r(nd, &t, &mut back);
        assert_eq!(back.as_slice(), a.as_slice());

        transpose_t4_l(nd, &a, &mut t);
        transpose_t4_l(nd, &t, &mut back);
        assert_eq!(back.as_slice(), a.as_slice());
    }

    #[test]
    fn test_trace() {
        assert_eq!(trace_t2(2, &[1.0, 2.0, 3.0, 4.0]), 5.0);
        // packed [[1,2],[2,5]]
        assert_eq!(trace_t2s(2, &[1.0, 2.0, 5.0]), 6.0);
        assert_eq!(trace_t2d(3, &[2.0, 3.0, 5.0]), 10.0);
    }

    #[test]
    fn test_det_2d() {
        assert_eq!(det_t2(2, &[1.0, 2.0, 3.0, 4.0]), -2.0);
        assert_eq!(det_t2s(2, &[1.0, 2.0, 5.0]), 1.0);
        assert_eq!(det_t2d(3, &[2.0, 3.0, 5.0]), 30.0);
    }

    #[test]
    fn test_det_3d() {
        // [[2,1,0],[1,3,1],[0,1,4]]: det = 2*(12-1) - 1*(4-0) + 0 = 18
        let a = [2.0, 1.0, 0.0, 1.0, 3.0, 1.0, 0.0, 1.0, 4.0];
        assert_relative_eq!(det_t2(3, &a), 18.0);

        // same matrix, packed symmetric: [2,1,0,3,1,4]
        let s = [2.0, 1.0, 0.0, 3.0, 1.0, 4.0];
        assert_relative_eq!(det_t2s(3, &s), 18.0);
    }

    #[test]
    fn test_inv_t2_3d() {
        let a = [2.0, 1.0, 0.0, 1.0, 3.0, 1.0, 0.0, 1.0, 4.0];
        let mut inv = [0.0; 9];
        inv_t2(3, &a, &mut inv);

        // A . inv(A) == I
        let mut prod = [0.0; 9];
        crate::backend::contract::dot_t2_t2(3, &a, &inv, &mut prod);
        for i in 0..3 {
            for j in 0..3 {
                let expect = if i == j { 1.0 } else { 0.0 };
                assert_relative_eq!(prod[i * 3 + j], expect, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_inv_t2s_3d() {
        let s = [2.0, 1.0, 0.0, 3.0, 1.0, 4.0];
        let mut inv = [0.0; 6];
        inv_t2s(3, &s, &mut inv);

        let mut prod = [0.0; 9];
        crate::backend::contract::dot_t2s_t2s(3, &s, &inv, &mut prod);
        for i in 0..3 {
            for j in 0..3 {
                let expect = if i == j { 1.0 } else { 0.0 };
                assert_relative_eq!(prod[i * 3 + j], expect, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_inv_t2d() {
        let mut out = [0.0; 3];
        inv_t2d(3, &[2.0, 3.0, 5.0], &mut out);
        assert_relative_eq!(out[0], 0.5);
        assert_relative_eq!(out[1], 1.0 / 3.0);
        assert_relative_eq!(out[2], 0.2);
    }

    #[test]
    fn test_inv_t2d_singular_is_inf() {
        let mut out = [0.0f64; 2];
        inv_t2d(2, &[1.0, 0.0], &mut out);
        assert!(out[1].is_infinite());
    }

    #[test]
    #[should_panic(expected = "no closed-form determinant")]
    fn test_det_unsupported_dim() {
        let a = [0.0; 16];
        det_t2(4, &a);
    }
}
