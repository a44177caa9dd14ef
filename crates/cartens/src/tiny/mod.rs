//! Compile-time-dimensioned Cartesian tensors with inline storage.
//!
//! The same five container kinds and the same operation surface as
//! [`crate::cartesian`], but the dimension is a [`Dim`] marker type (`D2`,
//! `D3`) and the storage an inline array selected through the marker's
//! generic associated buffers: no heap allocation anywhere.
//!
//! ```
//! use cartens::tiny::{Tensor2d, Vector, D3};
//! use cartens::ops::Dot;
//!
//! let a: Tensor2d<f64, D3> = Tensor2d::from_slice(&[2.0, 3.0, 5.0]);
//! let v: Vector<f64, D3> = Vector::ones();
//! assert_eq!(a.dot(&v).data(), &[2.0, 3.0, 5.0]);
//! ```
//!
//! Both families delegate to the same backend kernels, so the semantics are
//! identical; use this family when the dimension is known at compile time
//! (the usual case in continuum mechanics: 2 or 3), the `cartesian` family
//! when it is not.

mod arith;
mod convert;
mod dim;
mod products;
mod tensor2;
mod tensor2d;
mod tensor2s;
mod tensor4;
mod vector;

pub use dim::{Buffer, Dim, D2, D3};
pub use tensor2::Tensor2;
pub use tensor2d::Tensor2d;
pub use tensor2s::Tensor2s;
pub use tensor4::Tensor4;
pub use vector::Vector;
