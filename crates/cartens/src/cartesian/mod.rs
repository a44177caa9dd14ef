//! Runtime-dimensioned Cartesian tensors.
//!
//! Five container kinds, each a plain value type over a heap-backed packed
//! buffer sized by the index-compression scheme of [`crate::index`]:
//!
//! ```text
//! Vector<T>    - rank 1, nd entries
//! Tensor2<T>   - rank 2, dense, nd*nd entries (row-major)
//! Tensor2s<T>  - rank 2, symmetric, nd*(nd+1)/2 entries (packed upper)
//! Tensor2d<T>  - rank 2, diagonal, nd entries
//! Tensor4<T>   - rank 4, dense, nd^4 entries
//! ```
//!
//! The diagonal and symmetric kinds are structural refinements of the dense
//! kind; widening conversions (`Tensor2d` -> `Tensor2s` -> `Tensor2`) are
//! total and implemented as `From`, narrowing ones are checked and
//! implemented as `TryFrom` (see [`convert`](self)). Tensor products are
//! provided through the [`Dot`](crate::ops::Dot), [`Ddot`](crate::ops::Ddot)
//! and [`Dyadic`](crate::ops::Dyadic) traits with one implementation per
//! storage-kind pair.
//!
//! The containers support `resize`/`reshape`; a size-changing resize
//! reallocates the buffer and leaves the contents unspecified.

mod arith;
mod convert;
mod products;
mod tensor2;
mod tensor2d;
mod tensor2s;
mod tensor4;
mod vector;

pub use tensor2::Tensor2;
pub use tensor2d::Tensor2d;
pub use tensor2s::Tensor2s;
pub use tensor4::Tensor4;
pub use vector::Vector;
