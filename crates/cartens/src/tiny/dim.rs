//! Compile-time dimension markers and inline storage buffers.
//!
//! A [`Dim`] marker type carries the dimension as an associated constant
//! and selects, per storage kind, the exact inline array length through
//! generic associated types. This keeps fixed-size containers free of heap
//! allocation while every buffer length stays consistent with the
//! index-compression scheme by construction.

use std::fmt::Debug;

use crate::scalar::Scalar;

/// Inline storage cell of a fixed-size container.
///
/// Implemented for plain arrays; the container types never name a concrete
/// length, they go through [`Dim`]'s associated buffers.
pub trait Buffer<T: Scalar>:
    AsRef<[T]> + AsMut<[T]> + Clone + Debug + PartialEq + 'static
{
    /// A buffer with every entry set to `value`.
    fn filled(value: T) -> Self;
}

impl<T: Scalar, const N: usize> Buffer<T> for [T; N] {
    fn filled(value: T) -> Self {
        [value; N]
    }
}

/// Compile-time dimension of the fixed-size tensor family.
///
/// `Buf1` holds `ND` entries (vectors and diagonal rank-2 storage), `Buf2`
/// holds `ND * ND` (dense rank-2), `Buf2s` holds `ND * (ND + 1) / 2`
/// (packed symmetric rank-2) and `Buf4` holds `ND^4` (dense rank-4).
pub trait Dim: Copy + Debug + PartialEq + Eq + 'static {
    /// Number of dimensions.
    const ND: usize;

    /// Rank-1 / diagonal rank-2 buffer, `ND` entries.
    type Buf1<T: Scalar>: Buffer<T>;

    /// Dense rank-2 buffer, `ND * ND` entries.
    type Buf2<T: Scalar>: Buffer<T>;

    /// Packed symmetric rank-2 buffer, `ND * (ND + 1) / 2` entries.
    type Buf2s<T: Scalar>: Buffer<T>;

    /// Dense rank-4 buffer, `ND^4` entries.
    type Buf4<T: Scalar>: Buffer<T>;
}

/// Two dimensions (plane strain/stress problems).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct D2;

/// Three dimensions.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct D3;

impl Dim for D2 {
    const ND: usize = 2;

    type Buf1<T: Scalar> = [T; 2];
    type Buf2<T: Scalar> = [T; 4];
    type Buf2s<T: Scalar> = [T; 3];
    type Buf4<T: Scalar> = [T; 16];
}

impl Dim for D3 {
    const ND: usize = 3;

    type Buf1<T: Scalar> = [T; 3];
    type Buf2<T: Scalar> = [T; 9];
    type Buf2s<T: Scalar> = [T; 6];
    type Buf4<T: Scalar> = [T; 81];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index;

    #[test]
    fn test_buffer_lengths_match_index_scheme() {
        fn check<D: Dim>() {
            assert_eq!(
                <D::Buf1<f64> as Buffer<f64>>::filled(0.0).as_ref().len(),
                D::ND
            );
            assert_eq!(
                <D::Buf2<f64> as Buffer<f64>>::filled(0.0).as_ref().len(),
                index::tensor2_size(D::ND)
            );
            assert_eq!(
                <D::Buf2s<f64> as Buffer<f64>>::filled(0.0).as_ref().len(),
                index::tensor2s_size(D::ND)
            );
            assert_eq!(
                <D::Buf4<f64> as Buffer<f64>>::filled(0.0).as_ref().len(),
                index::tensor4_size(D::ND)
            );
        }
        check::<D2>();
        check::<D3>();
    }

    #[test]
    fn test_filled() {
        let b: [f64; 4] = Buffer::filled(2.5);
        assert_eq!(b, [2.5; 4]);
    }
}
