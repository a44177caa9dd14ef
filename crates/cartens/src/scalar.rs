//! Scalar trait for tensor element types.

use num_traits::{Float, NumAssign};
use std::fmt::Debug;

/// Trait for scalar types supported by cartens.
///
/// This trait wraps `num_traits::Float` with the additional bounds required
/// by the tensor kernels, plus an infallible conversion from `usize` used by
/// the reductions (`mean`, `average`) and by `set_arange`.
pub trait Scalar: Float + NumAssign + Default + Debug + 'static {
    /// Convert an element count or index to a scalar.
    fn from_usize(n: usize) -> Self;
}

impl Scalar for f64 {
    #[inline]
    fn from_usize(n: usize) -> Self {
        n as f64
    }
}

impl Scalar for f32 {
    #[inline]
    fn from_usize(n: usize) -> Self {
        n as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_one() {
        assert_eq!(<f64 as num_traits::Zero>::zero(), 0.0);
        assert_eq!(<f64 as num_traits::One>::one(), 1.0);
        assert_eq!(<f32 as num_traits::Zero>::zero(), 0.0);
        assert_eq!(<f32 as num_traits::One>::one(), 1.0);
    }

    #[test]
    fn test_from_usize() {
        assert_eq!(<f64 as Scalar>::from_usize(9), 9.0);
        assert_eq!(<f32 as Scalar>::from_usize(4), 4.0);
    }
}
