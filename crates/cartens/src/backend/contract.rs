//! Contraction kernels: `dot` (single), `ddot` (double), `dyadic` (outer)
//! and the 3D `cross` product, one kernel per storage-kind combination.
//!
//! Naming: `dot_t2s_t2d` contracts a symmetric-packed left operand with a
//! diagonal-packed right operand. `ddot` is symmetric in its operands
//! (`A_ij B_ji == B_ji A_ij`), so only canonical kind orders are provided;
//! callers swap arguments for the mirrored combinations.

use crate::index;
use crate::scalar::Scalar;

// -------------------------------------------------------------------------
// dot: rank-2 . rank-2, C_ik = A_ij B_jk
// -------------------------------------------------------------------------

/// `C_ik = A_ij B_jk`, both operands dense.
pub fn dot_t2_t2<T: Scalar>(nd: usize, a: &[T], b: &[T], out: &mut [T]) {
    debug_assert_eq!(a.len(), index::tensor2_size(nd));
    debug_assert_eq!(b.len(), index::tensor2_size(nd));
    debug_assert_eq!(out.len(), index::tensor2_size(nd));

    for i in 0..nd {
        for k in 0..nd {
            let mut sum = T::zero();
            for j in 0..nd {
                sum += a[i * nd + j] * b[j * nd + k];
            }
            out[i * nd + k] = sum;
        }
    }
}

/// `C_ik = A_ij B_jk`, dense . symmetric.
pub fn dot_t2_t2s<T: Scalar>(nd: usize, a: &[T], b: &[T], out: &mut [T]) {
    debug_assert_eq!(a.len(), index::tensor2_size(nd));
    debug_assert_eq!(b.len(), index::tensor2s_size(nd));
    debug_assert_eq!(out.len(), index::tensor2_size(nd));

    for i in 0..nd {
        for k in 0..nd {
            let mut sum = T::zero();
            for j in 0..nd {
                sum += a[i * nd + j] * b[index::tensor2s(nd, j, k)];
            }
            out[i * nd + k] = sum;
        }
    }
}

/// `C_ik = A_ik B_kk`, dense . diagonal: one multiply per output entry.
pub fn dot_t2_t2d<T: Scalar>(nd: usize, a: &[T], b: &[T], out: &mut [T]) {
    debug_assert_eq!(a.len(), index::tensor2_size(nd));
    debug_assert_eq!(b.len(), nd);
    debug_assert_eq!(out.len(), index::tensor2_size(nd));

    for i in 0..nd {
        for k in 0..nd {
            out[i * nd + k] = a[i * nd + k] * b[k];
        }
    }
}

/// `C_ik = A_ij B_jk`, symmetric . dense.
pub fn dot_t2s_t2<T: Scalar>(nd: usize, a: &[T], b: &[T], out: &mut [T]) {
    debug_assert_eq!(a.len(), index::tensor2s_size(nd));
    debug_assert_eq!(b.len(), index::tensor2_size(nd));
    debug_assert_eq!(out.len(), index::tensor2_size(nd));

    for i in 0..nd {
        for k in 0..nd {
            let mut sum = T::zero();
            for j in 0..nd {
                sum += a[index::tensor2s(nd, i, j)] * b[j * nd + k];
            }
            out[i * nd + k] = sum;
        }
    }
}

/// `C_ik = A_ij B_jk`, symmetric . symmetric (result still dense in general).
pub fn dot_t2s_t2s<T: Scalar>(nd: usize, a: &[T], b: &[T], out: &mut [T]) {
    debug_assert_eq!(a.len(), index::tensor2s_size(nd));
    debug_assert_eq!(b.len(), index::tensor2s_size(nd));
    debug_assert_eq!(out.len(), index::tensor2_size(nd));

    for i in 0..nd {
        for k in 0..nd {
            let mut sum = T::zero();
            for j in 0..nd {
                sum += a[index::tensor2s(nd, i, j)] * b[index::tensor2s(nd, j, k)];
            }
            out[i * nd + k] = sum;
        }
    }
}

/// `C_ik = A_ik B_kk`, symmetric . diagonal.
pub fn dot_t2s_t2d<T: Scalar>(nd: usize, a: &[T], b: &[T], out: &mut [T]) {
    debug_assert_eq!(a.len(), index::tensor2s_size(nd));
    debug_assert_eq!(b.len(), nd);
    debug_assert_eq!(out.len(), index::tensor2_size(nd));

    for i in 0..nd {
        for k in 0..nd {
            out[i * nd + k] = a[index::tensor2s(nd, i, k)] * b[k];
        }
    }
}

/// `C_ik = A_ii B_ik`, diagonal . dense.
pub fn dot_t2d_t2<T: Scalar>(nd: usize, a: &[T], b: &[T], out: &mut [T]) {
    debug_assert_eq!(a.len(), nd);
    debug_assert_eq!(b.len(), index::tensor2_size(nd));
    debug_assert_eq!(out.len(), index::tensor2_size(nd));

    for i in 0..nd {
        for k in 0..nd {
            out[i * nd + k] = a[i] * b[i * nd + k];
        }
    }
}

/// `C_ik = A_ii B_ik`, diagonal . symmetric.
pub fn dot_t2d_t2s<T: Scalar>(nd: usize, a: &[T], b: &[T], out: &mut [T]) {
    debug_assert_eq!(a.len(), nd);
    debug_assert_eq!(b.len(), index::tensor2s_size(nd));
    debug_assert_eq!(out.len(), index::tensor2_size(nd));

    for i in 0..nd {
        for k in 0..nd {
            out[i * nd + k] = a[i] * b[index::tensor2s(nd, i, k)];
        }
    }
}

/// `C_ii = A_ii B_ii`, diagonal . diagonal: closed under multiplication.
pub fn dot_t2d_t2d<T: Scalar>(nd: usize, a: &[T], b: &[T], out: &mut [T]) {
    debug_assert_eq!(a.len(), nd);
    debug_assert_eq!(b.len(), nd);
    debug_assert_eq!(out.len(), nd);

    for i in 0..nd {
        out[i] = a[i] * b[i];
    }
}

// -------------------------------------------------------------------------
// dot: rank-2 . vector and vector . rank-2
// -------------------------------------------------------------------------

/// `C_i = A_ij b_j`, dense . vector.
pub fn dot_t2_v<T: Scalar>(nd: usize, a: &[T], b: &[T], out: &mut [T]) {
    debug_assert_eq!(a.len(), index::tensor2_size(nd));
    debug_assert_eq!(b.len(), nd);
    debug_assert_eq!(out.len(), nd);

    for i in 0..nd {
        let mut sum = T::zero();
        for j in 0..nd {
            sum += a[i * nd + j] * b[j];
        }
        out[i] = sum;
    }
}

/// `C_i = A_ij b_j`, symmetric . vector. Also serves `b_i A_ij` by symmetry.
pub fn dot_t2s_v<T: Scalar>(nd: usize, a: &[T], b: &[T], out: &mut [T]) {
    debug_assert_eq!(a.len(), index::tensor2s_size(nd));
    debug_assert_eq!(b.len(), nd);
    debug_assert_eq!(out.len(), nd);

    for i in 0..nd {
        let mut sum = T::zero();
        for j in 0..nd {
            sum += a[index::tensor2s(nd, i, j)] * b[j];
        }
        out[i] = sum;
    }
}

/// `C_i = A_ii b_i`, diagonal . vector. Also serves `b_i A_ij` by symmetry.
pub fn dot_t2d_v<T: Scalar>(nd: usize, a: &[T], b: &[T], out: &mut [T]) {
    debug_assert_eq!(a.len(), nd);
    debug_assert_eq!(b.len(), nd);
    debug_assert_eq!(out.len(), nd);

    for i in 0..nd {
        out[i] = a[i] * b[i];
    }
}

/// `C_j = a_i B_ij`, vector . dense.
pub fn dot_v_t2<T: Scalar>(nd: usize, a: &[T], b: &[T], out: &mut [T]) {
    debug_assert_eq!(a.len(), nd);
    debug_assert_eq!(b.len(), index::tensor2_size(nd));
    debug_assert_eq!(out.len(), nd);

    for j in 0..nd {
        let mut sum = T::zero();
        for i in 0..nd {
            sum += a[i] * b[i * nd + j];
        }
        out[j] = sum;
    }
}

/// `C = a_i b_i`, full contraction of two vectors.
pub fn dot_v_v<T: Scalar>(a: &[T], b: &[T]) -> T {
    debug_assert_eq!(a.len(), b.len());

    let mut sum = T::zero();
    for i in 0..a.len() {
        sum += a[i] * b[i];
    }
    sum
}

// -------------------------------------------------------------------------
// ddot: rank-2 : rank-2, C = A_ij B_ji
// -------------------------------------------------------------------------

/// `C = A_ij B_ji`, both dense.
pub fn ddot_t2_t2<T: Scalar>(nd: usize, a: &[T], b: &[T]) -> T {
    debug_assert_eq!(a.len(), index::tensor2_size(nd));
    debug_assert_eq!(b.len(), index::tensor2_size(nd));

    let mut sum = T::zero();
    for i in 0..nd {
        for j in 0..nd {
            sum += a[i * nd + j] * b[j * nd + i];
        }
    }
    sum
}

/// `C = A_ij B_ji`, dense : symmetric (`B_ji == B_ij`).
pub fn ddot_t2_t2s<T: Scalar>(nd: usize, a: &[T], b: &[T]) -> T {
    debug_assert_eq!(a.len(), index::tensor2_size(nd));
    debug_assert_eq!(b.len(), index::tensor2s_size(nd));

    let mut sum = T::zero();
    for i in 0..nd {
        for j in 0..nd {
            sum += a[i * nd + j] * b[index::tensor2s(nd, i, j)];
        }
    }
    sum
}

/// `C = A_ii B_ii`, dense : diagonal.
pub fn ddot_t2_t2d<T: Scalar>(nd: usize, a: &[T], b: &[T]) -> T {
    debug_assert_eq!(a.len(), index::tensor2_size(nd));
    debug_assert_eq!(b.len(), nd);

    let mut sum = T::zero();
    for i in 0..nd {
        sum += a[i * nd + i] * b[i];
    }
    sum
}

/// `C = A_ij B_ji`, symmetric : symmetric. Each packed off-diagonal entry
/// stands for two logical entries, hence the weight of two.
pub fn ddot_t2s_t2s<T: Scalar>(nd: usize, a: &[T], b: &[T]) -> T {
    debug_assert_eq!(a.len(), index::tensor2s_size(nd));
    debug_assert_eq!(b.len(), index::tensor2s_size(nd));

    let two = T::one() + T::one();
    let mut sum = T::zero();
    for i in 0..nd {
        for j in i..nd {
            let k = index::tensor2s(nd, i, j);
            if i == j {
                sum += a[k] * b[k];
            } else {
                sum += two * a[k] * b[k];
            }
        }
    }
    sum
}

/// `C = A_ii B_ii`, symmetric : diagonal.
pub fn ddot_t2s_t2d<T: Scalar>(nd: usize, a: &[T], b: &[T]) -> T {
    debug_assert_eq!(a.len(), index::tensor2s_size(nd));
    debug_assert_eq!(b.len(), nd);

    let mut sum = T::zero();
    for i in 0..nd {
        sum += a[index::tensor2s(nd, i, i)] * b[i];
    }
    sum
}

/// `C = A_ii B_ii`, diagonal : diagonal.
pub fn ddot_t2d_t2d<T: Scalar>(nd: usize, a: &[T], b: &[T]) -> T {
    debug_assert_eq!(a.len(), nd);
    debug_assert_eq!(b.len(), nd);

    let mut sum = T::zero();
    for i in 0..nd {
        sum += a[i] * b[i];
    }
    sum
}

// -------------------------------------------------------------------------
// ddot with rank-4 operands
// -------------------------------------------------------------------------

/// `C_ij = A_ijkl B_lk`, rank-4 : dense rank-2.
pub fn ddot_t4_t2<T: Scalar>(nd: usize, a: &[T], b: &[T], out: &mut [T]) {
    debug_assert_eq!(a.len(), index::tensor4_size(nd));
    debug_assert_eq!(b.len(), index::tensor2_size(nd));
    debug_assert_eq!(out.len(), index::tensor2_size(nd));

    for i in 0..nd {
        for j in 0..nd {
            let mut sum = T::zero();
            for k in 0..nd {
                for l in 0..nd {
                    sum += a[index::tensor4(nd, i, j, k, l)] * b[l * nd + k];
                }
            }
            out[i * nd + j] = sum;
        }
    }
}

/// `C_ij = A_ijkl B_lk`, rank-4 : symmetric rank-2.
pub fn ddot_t4_t2s<T: Scalar>(nd: usize, a: &[T], b: &[T], out: &mut [T]) {
    debug_assert_eq!(a.len(), index::tensor4_size(nd));
    debug_assert_eq!(b.len(), index::tensor2s_size(nd));
    debug_assert_eq!(out.len(), index::tensor2_size(nd));

    for i in 0..nd {
        for j in 0..nd {
            let mut sum = T::zero();
            for k in 0..nd {
                for l in 0..nd {
                    sum += a[index::tensor4(nd, i, j, k, l)] * b[index::tensor2s(nd, l, k)];
                }
            }
            out[i * nd + j] = sum;
        }
    }
}

/// `C_ij = A_ijkk B_kk`, rank-4 : diagonal rank-2.
pub fn ddot_t4_t2d<T: Scalar>(nd: usize, a: &[T], b: &[T], out: &mut [T]) {
    debug_assert_eq!(a.len(), index::tensor4_size(nd));
    debug_assert_eq!(b.len(), nd);
    debug_assert_eq!(out.len(), index::tensor2_size(nd));

    for i in 0..nd {
        for j in 0..nd {
            let mut sum = T::zero();
            for k in 0..nd {
                sum += a[index::tensor4(nd, i, j, k, k)] * b[k];
            }
            out[i * nd + j] = sum;
        }
    }
}

/// `C_kl = A_ij B_jikl`, dense rank-2 : rank-4.
pub fn ddot_t2_t4<T: Scalar>(nd: usize, a: &[T], b: &[T], out: &mut [T]) {
    debug_assert_eq!(a.len(), index::tensor2_size(nd));
    debug_assert_eq!(b.len(), index::tensor4_size(nd));
    debug_assert_eq!(out.len(), index::tensor2_size(nd));

    for k in 0..nd {
        for l in 0..nd {
            let mut sum = T::zero();
            for i in 0..nd {
                for j in 0..nd {
                    sum += a[i * nd + j] * b[index::tensor4(nd, j, i, k, l)];
                }
            }
            out[k * nd + l] = sum;
        }
    }
}

/// `C_kl = A_ij B_jikl`, symmetric rank-2 : rank-4.
pub fn ddot_t2s_t4<T: Scalar>(nd: usize, a: &[T], b: &[T], out: &mut [T]) {
    debug_assert_eq!(a.len(), index::tensor2s_size(nd));
    debug_assert_eq!(b.len(), index::tensor4_size(nd));
    debug_assert_eq!(out.len(), index::tensor2_size(nd));

    for k in 0..nd {
        for l in 0..nd {
            let mut sum = T::zero();
            for i in 0..nd {
                for j in 0..nd {
                    sum += a[index::tensor2s(nd, i, j)] * b[index::tensor4(nd, j, i, k, l)];
                }
            }
            out[k * nd + l] = sum;
        }
    }
}

/// `C_kl = A_ii B_iikl`, diagonal rank-2 : rank-4.
pub fn ddot_t2d_t4<T: Scalar>(nd: usize, a: &[T], b: &[T], out: &mut [T]) {
    debug_assert_eq!(a.len(), nd);
    debug_assert_eq!(b.len(), index::tensor4_size(nd));
    debug_assert_eq!(out.len(), index::tensor2_size(nd));

    for k in 0..nd {
        for l in 0..nd {
            let mut sum = T::zero();
            for i in 0..nd {
                sum += a[i] * b[index::tensor4(nd, i, i, k, l)];
            }
            out[k * nd + l] = sum;
        }
    }
}

/// `C_ijmn = A_ijkl B_lkmn`, rank-4 : rank-4.
pub fn ddot_t4_t4<T: Scalar>(nd: usize, a: &[T], b: &[T], out: &mut [T]) {
    debug_assert_eq!(a.len(), index::tensor4_size(nd));
    debug_assert_eq!(b.len(), index::tensor4_size(nd));
    debug_assert_eq!(out.len(), index::tensor4_size(nd));

    for i in 0..nd {
        for j in 0..nd {
            for m in 0..nd {
                for n in 0..nd {
                    let mut sum = T::zero();
                    for k in 0..nd {
                        for l in 0..nd {
                            sum += a[index::tensor4(nd, i, j, k, l)]
                                * b[index::tensor4(nd, l, k, m, n)];
                        }
                    }
                    out[index::tensor4(nd, i, j, m, n)] = sum;
                }
            }
        }
    }
}

// -------------------------------------------------------------------------
// dyadic: rank-2 (x) rank-2 -> rank-4, C_ijkl = A_ij B_kl
// -------------------------------------------------------------------------

/// `C_ijkl = A_ij B_kl`, both dense.
pub fn dyadic_t2_t2<T: Scalar>(nd: usize, a: &[T], b: &[T], out: &mut [T]) {
    debug_assert_eq!(a.len(), index::tensor2_size(nd));
    debug_assert_eq!(b.len(), index::tensor2_size(nd));
    debug_assert_eq!(out.len(), index::tensor4_size(nd));

    for i in 0..nd {
        for j in 0..nd {
            for k in 0..nd {
                for l in 0..nd {
                    out[index::tensor4(nd, i, j, k, l)] = a[i * nd + j] * b[k * nd + l];
                }
            }
        }
    }
}

/// `C_ijkl = A_ij B_kl`, dense (x) symmetric.
pub fn dyadic_t2_t2s<T: Scalar>(nd: usize, a: &[T], b: &[T], out: &mut [T]) {
    debug_assert_eq!(a.len(), index::tensor2_size(nd));
    debug_assert_eq!(b.len(), index::tensor2s_size(nd));
    debug_assert_eq!(out.len(), index::tensor4_size(nd));

    for i in 0..nd {
        for j in 0..nd {
            for k in 0..nd {
                for l in 0..nd {
                    out[index::tensor4(nd, i, j, k, l)] =
                        a[i * nd + j] * b[index::tensor2s(nd, k, l)];
                }
            }
        }
    }
}

/// `C_ijkk = A_ij B_kk`, dense (x) diagonal: only `k == l` entries are
/// non-zero.
pub fn dyadic_t2_t2d<T: Scalar>(nd: usize, a: &[T], b: &[T], out: &mut [T]) {
    debug_assert_eq!(a.len(), index::tensor2_size(nd));
    debug_assert_eq!(b.len(), nd);
    debug_assert_eq!(out.len(), index::tensor4_size(nd));

    out.fill(T::zero());
    for i in 0..nd {
        for j in 0..nd {
            for k in 0..nd {
                out[index::tensor4(nd, i, j, k, k)] = a[i * nd + j] * b[k];
            }
        }
    }
}

/// `C_ijkl = A_ij B_kl`, symmetric (x) dense.
pub fn dyadic_t2s_t2<T: Scalar>(nd: usize, a: &[T], b: &[T], out: &mut [T]) {
    debug_assert_eq!(a.len(), index::tensor2s_size(nd));
    debug_assert_eq!(b.len(), index::tensor2_size(nd));
    debug_assert_eq!(out.len(), index::tensor4_size(nd));

    for i in 0..nd {
        for j in 0..nd {
            for k in 0..nd {
                for l in 0..nd {
                    out[index::tensor4(nd, i, j, k, l)] =
                        a[index::tensor2s(nd, i, j)] * b[k * nd + l];
                }
            }
        }
    }
}

/// `C_ijkl = A_ij B_kl`, symmetric (x) symmetric.
pub fn dyadic_t2s_t2s<T: Scalar>(nd: usize, a: &[T], b: &[T], out: &mut [T]) {
    debug_assert_eq!(a.len(), index::tensor2s_size(nd));
    debug_assert_eq!(b.len(), index::tensor2s_size(nd));
    debug_assert_eq!(out.len(), index::tensor4_size(nd));

    for i in 0..nd {
        for j in 0..nd {
            for k in 0..nd {
                for l in 0..nd {
                    out[index::tensor4(nd, i, j, k, l)] =
                        a[index::tensor2s(nd, i, j)] * b[index::tensor2s(nd, k, l)];
                }
            }
        }
    }
}

/// `C_ijkk = A_ij B_kk`, symmetric (x) diagonal.
pub fn dyadic_t2s_t2d<T: Scalar>(nd: usize, a: &[T], b: &[T], out: &mut [T]) {
    debug_assert_eq!(a.len(), index::tensor2s_size(nd));
    debug_assert_eq!(b.len(), nd);
    debug_assert_eq!(out.len(), index::tensor4_size(nd));

    out.fill(T::zero());
    for i in 0..nd {
        for j in 0..nd {
            for k in 0..nd {
                out[index::tensor4(nd, i, j, k, k)] = a[index::tensor2s(nd, i, j)] * b[k];
            }
        }
    }
}

/// `C_iikl = A_ii B_kl`, diagonal (x) dense.
pub fn dyadic_t2d_t2<T: Scalar>(nd: usize, a: &[T], b: &[T], out: &mut [T]) {
    debug_assert_eq!(a.len(), nd);
    debug_assert_eq!(b.len(), index::tensor2_size(nd));
    debug_assert_eq!(out.len(), index::tensor4_size(nd));

    out.fill(T::zero());
    for i in 0..nd {
        for k in 0..nd {
            for l in 0..nd {
                out[index::tensor4(nd, i, i, k, l)] = a[i] * b[k * nd + l];
            }
        }
    }
}

/// `C_iikl = A_ii B_kl`, diagonal (x) symmetric.
pub fn dyadic_t2d_t2s<T: Scalar>(nd: usize, a: &[T], b: &[T], out: &mut [T]) {
    debug_assert_eq!(a.len(), nd);
    debug_assert_eq!(b.len(), index::tensor2s_size(nd));
    debug_assert_eq!(out.len(), index::tensor4_size(nd));

    out.fill(T::zero());
    for i in 0..nd {
        for k in 0..nd {
            for l in 0..nd {
                out[index::tensor4(nd, i, i, k, l)] = a[i] * b[index::tensor2s(nd, k, l)];
            }
        }
    }
}

/// `C_iikk = A_ii B_kk`, diagonal (x) diagonal: `nd * nd` non-zero entries.
pub fn dyadic_t2d_t2d<T: Scalar>(nd: usize, a: &[T], b: &[T], out: &mut [T]) {
    debug_assert_eq!(a.len(), nd);
    debug_assert_eq!(b.len(), nd);
    debug_assert_eq!(out.len(), index::tensor4_size(nd));

    out.fill(T::zero());
    for i in 0..nd {
        for k in 0..nd {
            out[index::tensor4(nd, i, i, k, k)] = a[i] * b[k];
        }
    }
}

/// `C_ij = a_i b_j`, vector (x) vector -> dense rank-2.
pub fn dyadic_v_v<T: Scalar>(nd: usize, a: &[T], b: &[T], out: &mut [T]) {
    debug_assert_eq!(a.len(), nd);
    debug_assert_eq!(b.len(), nd);
    debug_assert_eq!(out.len(), index::tensor2_size(nd));

    for i in 0..nd {
        for j in 0..nd {
            out[i * nd + j] = a[i] * b[j];
        }
    }
}

/// 3D cross product `c = a x b`.
pub fn cross_v<T: Scalar>(a: &[T], b: &[T], out: &mut [T]) {
    debug_assert_eq!(a.len(), 3);
    debug_assert_eq!(b.len(), 3);
    debug_assert_eq!(out.len(), 3);

    out[0] = a[1] * b[2] - a[2] * b[1];
    out[1] = a[2] * b[0] - a[0] * b[2];
    out[2] = a[0] * b[1] - a[1] * b[0];
}

#[cfg(test)]
mod tests {
    use super::*;

    // Dense 2x2: [[1,2],[3,4]]
    const A: [f64; 4] = [1.0, 2.0, 3.0, 4.0];
    // Dense 2x2: [[5,6],[7,8]]
    const B: [f64; 4] = [5.0, 6.0, 7.0, 8.0];
    // Symmetric 2x2 packed [s00, s01, s11]: [[1,2],[2,5]]
    const S: [f64; 3] = [1.0, 2.0, 5.0];
    // Diagonal 2x2: diag(2, 3)
    const D: [f64; 2] = [2.0, 3.0];

    #[test]
    fn test_dot_t2_t2() {
        let mut out = [0.0; 4];
        dot_t2_t2(2, &A, &B, &mut out);
        assert_eq!(out, [19.0, 22.0, 43.0, 50.0]);
    }

    #[test]
    fn test_dot_t2_t2s_matches_dense() {
        // Widen S and compare against the dense kernel.
        let s_dense = [1.0, 2.0, 2.0, 5.0];
        let mut expect = [0.0; 4];
        dot_t2_t2(2, &A, &s_dense, &mut expect);

        let mut out = [0.0; 4];
        dot_t2_t2s(2, &A, &S, &mut out);
        assert_eq!(out, expect);
    }

    #[test]
    fn test_dot_t2d_t2() {
        let mut out = [0.0; 4];
        dot_t2d_t2(2, &D, &B, &mut out);
        // row i scaled by d_i
        assert_eq!(out, [10.0, 12.0, 21.0, 24.0]);
    }

    #[test]
    fn test_dot_t2_t2d() {
        let mut out = [0.0; 4];
        dot_t2_t2d(2, &A, &D, &mut out);
        // column k scaled by d_k
        assert_eq!(out, [2.0, 6.0, 6.0, 12.0]);
    }

    #[test]
    fn test_dot_t2d_t2d() {
        let mut out = [0.0; 2];
        dot_t2d_t2d(2, &D, &[4.0, 5.0], &mut out);
        assert_eq!(out, [8.0, 15.0]);
    }

    #[test]
    fn test_dot_vector() {
        let v = [1.0, 1.0];
        let mut out = [0.0; 2];
        dot_t2_v(2, &A, &v, &mut out);
        assert_eq!(out, [3.0, 7.0]);

        dot_v_t2(2, &v, &A, &mut out);
        assert_eq!(out, [4.0, 6.0]);

        assert_eq!(dot_v_v(&[1.0, 2.0], &[3.0, 4.0]), 11.0);
    }

    #[test]
    fn test_ddot_t2_t2() {
        // sum_ij A_ij B_ji = 1*5 + 2*7 + 3*6 + 4*8 = 69
        assert_eq!(ddot_t2_t2(2, &A, &B), 69.0);
    }

    #[test]
    fn test_ddot_t2s_t2s_weights_offdiagonal() {
        // [[1,2],[2,5]] : [[1,2],[2,5]] = 1 + 2*4 + 25 = 34
        assert_eq!(ddot_t2s_t2s(2, &S, &S), 34.0);
    }

    #[test]
    fn test_ddot_diagonal() {
        assert_eq!(ddot_t2_t2d(2, &A, &D), 1.0 * 2.0 + 4.0 * 3.0);
        assert_eq!(ddot_t2s_t2d(2, &S, &D), 1.0 * 2.0 + 5.0 * 3.0);
        assert_eq!(ddot_t2d_t2d(2, &D, &[4.0, 5.0]), 23.0);
    }

    #[test]
    fn test_ddot_t4_t2_identity() {
        // I_ijkl = d_il d_jk  =>  I : A == A
        let nd = 2;
        let mut i4 = [0.0; 16];
        for i in 0..nd {
            for j in 0..nd {
                i4[index::tensor4(nd, i, j, j, i)] = 1.0;
            }
        }
        let mut out = [0.0; 4];
        ddot_t4_t2(nd, &i4, &A, &mut out);
        assert_eq!(out, A);
    }

    #[test]
    fn test_dyadic_t2d_t2d() {
        let mut out = [0.0; 16];
        dyadic_t2d_t2d(2, &D, &[1.0, 1.0], &mut out);
        // non-zero only at (i,i,k,k)
        assert_eq!(out[index::tensor4(2, 0, 0, 0, 0)], 2.0);
        assert_eq!(out[index::tensor4(2, 0, 0, 1, 1)], 2.0);
        assert_eq!(out[index::tensor4(2, 1, 1, 0, 0)], 3.0);
        assert_eq!(out[index::tensor4(2, 1, 1, 1, 1)], 3.0);
        assert_eq!(out[index::tensor4(2, 0, 1, 0, 0)], 0.0);
    }

    #[test]
    fn test_dyadic_v_v() {
        let mut out = [0.0; 4];
        dyadic_v_v(2, &[1.0, 2.0], &[3.0, 4.0], &mut out);
        assert_eq!(out, [3.0, 4.0, 6.0, 8.0]);
    }

    #[test]
    fn test_cross() {
        let mut out = [0.0; 3];
        cross_v(&[1.0, 0.0, 0.0], &[0.0, 1.0, 0.0], &mut out);
        assert_eq!(out, [0.0, 0.0, 1.0]);
    }
}
