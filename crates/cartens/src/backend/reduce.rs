//! Reduction kernels over packed buffers.
//!
//! Most reductions act on the packed storage directly; the symmetric sum is
//! the exception, weighting each packed off-diagonal entry by two because it
//! stands for the two logical mirror entries. `mean` divides by the logical
//! element count (`nd * nd` for rank 2), never by the packed length.

use crate::index;
use crate::scalar::Scalar;

/// Sum of absolute values of the packed entries.
pub fn norm<T: Scalar>(a: &[T]) -> T {
    let mut out = T::zero();
    for &x in a {
        out += x.abs();
    }
    out
}

/// Offset of the minimum packed entry.
pub fn argmin<T: Scalar>(a: &[T]) -> usize {
    debug_assert!(!a.is_empty());
    let mut arg = 0;
    for i in 1..a.len() {
        if a[i] < a[arg] {
            arg = i;
        }
    }
    arg
}

/// Offset of the maximum packed entry.
pub fn argmax<T: Scalar>(a: &[T]) -> usize {
    debug_assert!(!a.is_empty());
    let mut arg = 0;
    for i in 1..a.len() {
        if a[i] > a[arg] {
            arg = i;
        }
    }
    arg
}

/// Minimum packed entry.
pub fn min<T: Scalar>(a: &[T]) -> T {
    a[argmin(a)]
}

/// Maximum packed entry.
pub fn max<T: Scalar>(a: &[T]) -> T {
    a[argmax(a)]
}

/// Plain sum of the packed entries. For dense and diagonal storage this is
/// also the logical sum (the entries a diagonal container does not store are
/// zero).
pub fn sum<T: Scalar>(a: &[T]) -> T {
    let mut out = T::zero();
    for &x in a {
        out += x;
    }
    out
}

/// Logical sum of a symmetric container: diagonal entries count once,
/// packed off-diagonal entries twice.
pub fn sum_t2s<T: Scalar>(nd: usize, a: &[T]) -> T {
    debug_assert_eq!(a.len(), index::tensor2s_size(nd));

    let two = T::one() + T::one();
    let mut out = T::zero();
    for i in 0..nd {
        for j in i..nd {
            let x = a[index::tensor2s(nd, i, j)];
            if i == j {
                out += x;
            } else {
                out += two * x;
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_norm() {
        assert_eq!(norm(&[1.0, -2.0, 3.0]), 6.0);
    }

    #[test]
    fn test_argminmax() {
        let a = [3.0, -1.0, 4.0, -1.5, 2.0];
        assert_eq!(argmin(&a), 3);
        assert_eq!(argmax(&a), 2);
        assert_eq!(min(&a), -1.5);
        assert_eq!(max(&a), 4.0);
    }

    #[test]
    fn test_sum() {
        assert_eq!(sum(&[1.0, 2.0, 3.0]), 6.0);
    }

    #[test]
    fn test_sum_t2s_weights_offdiagonal() {
        // packed [[1,2],[2,5]]: logical sum = 1 + 2 + 2 + 5 = 10
        assert_eq!(sum_t2s(2, &[1.0, 2.0, 5.0]), 10.0);
    }
}
