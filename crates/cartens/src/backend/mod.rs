//! Storage-kind-aware computation kernels.
//!
//! The kernels operate on raw packed slices parameterized by the runtime
//! dimension, so the same loop serves the fixed-size (`tiny`), dynamic
//! (`cartesian`), and non-owning (`view`) families:
//!
//! ```text
//! Level 1: container methods / operation traits (Dot, Ddot, Dyadic)
//!     → pick the result kind, allocate output
//! Level 2: backend kernels (this module)
//!     → one loop per storage-kind combination, structural zeros skipped
//! ```
//!
//! Kernels for symmetric operands read through the packed-upper-triangle
//! index map and weight packed off-diagonal entries where a contraction
//! visits both mirror copies; kernels for diagonal operands touch `nd`
//! entries instead of `nd*nd`.

pub mod contract;
pub mod linalg;
pub mod reduce;
