//! Operation traits for the tensor product dispatch table.
//!
//! Rust resolves the storage-kind combinations statically through these
//! traits: each `(Lhs, Rhs)` pair gets its own implementation, whose
//! `Output` encodes the algebraic closure of that combination. For example
//! `dot` of two diagonal tensors stays diagonal, while `dot` of two
//! symmetric tensors is dense in general; every full double contraction of
//! two rank-2 operands is a scalar.

/// Single contraction: `C_ik = A_ij B_jk` for two rank-2 operands,
/// `C_i = A_ij b_j` / `C_j = a_i B_ij` with a vector, and the scalar
/// `a_i b_i` for two vectors.
pub trait Dot<Rhs = Self> {
    /// Result kind of the contraction.
    type Output;

    /// Contract one index pair with `rhs`.
    fn dot(&self, rhs: &Rhs) -> Self::Output;
}

/// Double contraction: `A_ij B_ji` (scalar) for two rank-2 operands,
/// `C_ij = A_ijkl B_lk` / `C_kl = A_ij B_jikl` with a rank-4 operand, and
/// `C_ijmn = A_ijkl B_lkmn` for two rank-4 operands.
pub trait Ddot<Rhs = Self> {
    /// Result kind of the double contraction.
    type Output;

    /// Contract two index pairs with `rhs`.
    fn ddot(&self, rhs: &Rhs) -> Self::Output;
}

/// Dyadic (outer) product: `C_ijkl = A_ij B_kl` for two rank-2 operands,
/// `C_ij = a_i b_j` for two vectors.
pub trait Dyadic<Rhs = Self> {
    /// Result kind of the outer product.
    type Output;

    /// Raise rank by combining with `rhs` without contraction.
    fn dyadic(&self, rhs: &Rhs) -> Self::Output;
}
