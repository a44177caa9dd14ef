//! Index-compression schemes: bijections between structured tensor indices
//! and offsets into the packed storage buffer, one scheme per storage kind.
//!
//! Dense rank-2 storage is row-major. Symmetric rank-2 storage packs the
//! upper triangle row by row, so only the `nd*(nd+1)/2` independent entries
//! are stored. Diagonal rank-2 storage holds the `nd` diagonal entries; an
//! off-diagonal index pair has no offset (the logical value is zero).

/// Number of stored entries of a dense rank-2 container.
#[inline]
pub const fn tensor2_size(nd: usize) -> usize {
    nd * nd
}

/// Number of stored entries of a symmetric rank-2 container.
#[inline]
pub const fn tensor2s_size(nd: usize) -> usize {
    nd * (nd + 1) / 2
}

/// Number of stored entries of a dense rank-4 container.
#[inline]
pub const fn tensor4_size(nd: usize) -> usize {
    nd * nd * nd * nd
}

/// Compress dense rank-2 indices to a storage offset (row-major).
#[inline]
pub fn tensor2(nd: usize, i: usize, j: usize) -> usize {
    debug_assert!(i < nd && j < nd);
    i * nd + j
}

/// Decompress a dense rank-2 storage offset to `(row, col)`.
#[inline]
pub fn tensor2_unpack(nd: usize, offset: usize) -> (usize, usize) {
    debug_assert!(offset < tensor2_size(nd));
    (offset / nd, offset % nd)
}

/// Compress symmetric rank-2 indices to a packed-upper-triangle offset.
///
/// The pair is first canonicalized to `(a, b) = (min(i, j), max(i, j))`;
/// both `A(i,j)` and `A(j,i)` compress to the same offset.
#[inline]
pub fn tensor2s(nd: usize, i: usize, j: usize) -> usize {
    debug_assert!(i < nd && j < nd);
    let (a, b) = if i <= j { (i, j) } else { (j, i) };
    a * (2 * nd - a + 1) / 2 + (b - a)
}

/// Decompress a packed-upper-triangle offset to `(row, col)` with
/// `row <= col`.
///
/// Scans the cumulative row-start offsets to find the row; O(nd) per call.
pub fn tensor2s_unpack(nd: usize, offset: usize) -> (usize, usize) {
    debug_assert!(offset < tensor2s_size(nd));
    let mut row = 0;
    let mut keyafter;
    loop {
        row += 1;
        keyafter = row * nd - (row - 1) * row / 2;
        if offset < keyafter {
            break;
        }
    }
    row -= 1;
    (row, offset + nd - keyafter)
}

/// Compress a diagonal rank-2 index to a storage offset.
///
/// Only `(i, i)` pairs are stored; off-diagonal pairs have no offset.
#[inline]
pub fn tensor2d(nd: usize, i: usize) -> usize {
    debug_assert!(i < nd);
    i
}

/// Compress dense rank-4 indices to a storage offset (row-major).
#[inline]
pub fn tensor4(nd: usize, i: usize, j: usize, k: usize, l: usize) -> usize {
    debug_assert!(i < nd && j < nd && k < nd && l < nd);
    ((i * nd + j) * nd + k) * nd + l
}

/// Decompress a dense rank-4 storage offset to `(i, j, k, l)`.
#[inline]
pub fn tensor4_unpack(nd: usize, offset: usize) -> (usize, usize, usize, usize) {
    debug_assert!(offset < tensor4_size(nd));
    let l = offset % nd;
    let k = (offset / nd) % nd;
    let j = (offset / (nd * nd)) % nd;
    let i = offset / (nd * nd * nd);
    (i, j, k, l)
}

/// Wrap a signed index periodically onto `0..n`.
///
/// `wrap(-1, 3) == 2`, `wrap(3, 3) == 0`.
#[inline]
pub fn wrap(i: isize, n: usize) -> usize {
    let n = n as isize;
    ((n + i % n) % n) as usize
}
