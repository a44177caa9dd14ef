//! cartens - small fixed-rank Cartesian tensors for continuum mechanics.
//!
//! This crate provides vectors, rank-2 tensors in dense, symmetric-packed
//! and diagonal-packed storage, and dense rank-4 tensors, with the tensor
//! algebra of continuum mechanics (`dot`, `ddot`, `dyadic`, `cross`,
//! transpositions, `trace`, `det`, `inv`) implemented consistently across
//! every storage representation.
//!
//! # Architecture
//!
//! ```text
//! Level 1: container families, identical operation surface
//!     cartesian - runtime dimension, heap-backed
//!     tiny      - compile-time dimension (D2/D3), inline storage
//!     view      - non-owning, bound to caller-supplied storage
//!
//! Level 2: dispatch
//!     ops::{Dot, Ddot, Dyadic} - one implementation per storage-kind
//!     pair; the Output type encodes the algebraic closure of the pair
//!
//! Level 3: shared kernels
//!     backend::{contract, linalg, reduce} - slice-level loops
//!     parameterized by the dimension, structural zeros skipped
//!
//! Level 0: index compression
//!     index - (i,j) / (i,j,k,l) <-> packed offset, per storage kind
//! ```
//!
//! Storage kinds form a refinement order: every diagonal tensor is a valid
//! symmetric tensor is a valid dense tensor. Widening conversions are
//! `From` and lossless; narrowing ones are `TryFrom` and check the claimed
//! structure.
//!
//! # Example
//!
//! ```
//! use cartens::cartesian::{Tensor2, Tensor2d, Vector};
//! use cartens::ops::{Ddot, Dot};
//!
//! let a = Tensor2d::from_vec(3, vec![2.0, 3.0, 5.0]).unwrap();
//! assert_eq!(a.det(), 30.0);
//! assert_eq!(a.trace(), 10.0);
//!
//! let v = Vector::ones(3);
//! assert_eq!(a.dot(&v).data(), &[2.0, 3.0, 5.0]);
//!
//! // the identity, in symmetric storage, against a dense operand
//! let i = cartens::cartesian::Tensor2s::identity(3);
//! let b = Tensor2::<f64>::random(3, 0.0, 1.0);
//! assert_eq!(i.dot(&b), b);
//! assert!((i.ddot(&b) - b.trace()).abs() < 1e-12);
//! ```

pub mod backend;
pub mod cartesian;
pub mod error;
pub mod index;
pub mod ops;
pub mod random;
pub mod scalar;
pub mod tiny;
pub mod view;

pub use error::TensorError;
pub use ops::{Ddot, Dot, Dyadic};
pub use random::RandomUniform;
pub use scalar::Scalar;
