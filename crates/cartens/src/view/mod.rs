//! Non-owning views over caller-supplied storage.
//!
//! For each rank-1/rank-2 storage kind there is a view counterpart that
//! binds to a borrowed packed slice: [`VectorView`], [`Tensor2View`],
//! [`Tensor2sView`], [`Tensor2dView`]. A view shares the index-compression
//! scheme and operation semantics of its owning counterpart but never
//! allocates or frees the buffer; the referenced memory belongs to the
//! caller, and the borrow ties the view's lifetime to it. In particular a
//! view taken into a dynamic container cannot outlive a `resize` of that
//! container: the borrow checker rejects the program instead of leaving a
//! dangling view.
//!
//! ```
//! use cartens::view::Tensor2dView;
//!
//! let storage = [2.0, 3.0, 5.0];
//! let a = Tensor2dView::from_slice(3, &storage).unwrap();
//! assert_eq!(a.det(), 30.0);
//! assert_eq!(a.get(0, 1), 0.0);
//! ```

mod products;
mod tensor2;
mod tensor2d;
mod tensor2s;
mod vector;

pub use tensor2::Tensor2View;
pub use tensor2d::Tensor2dView;
pub use tensor2s::Tensor2sView;
pub use vector::VectorView;
