//! Promotion/conversion graph: widening is lossless, narrowing is checked.

use cartens::cartesian::{Tensor2, Tensor2d, Tensor2s};
use cartens::ops::Dot;
use cartens::TensorError;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn rng() -> StdRng {
    StdRng::seed_from_u64(0xcafe)
}

#[test]
fn widening_preserves_every_logical_entry() {
    let mut rng = rng();
    let d = Tensor2d::random_with_rng(3, -1.0, 1.0, &mut rng);
    let s = Tensor2s::random_with_rng(3, -1.0, 1.0, &mut rng);

    let d_as_s = Tensor2s::from(&d);
    let d_as_dense = Tensor2::from(&d);
    let s_as_dense = Tensor2::from(&s);

    for i in 0..3 {
        for j in 0..3 {
            assert_eq!(d_as_s.get(i, j), d.get(i, j));
            assert_eq!(d_as_dense.get(i, j), d.get(i, j));
            assert_eq!(s_as_dense.get(i, j), s.get(i, j));
        }
    }
}

#[test]
fn roundtrip_diag_dense_diag() {
    let mut rng = rng();
    let d = Tensor2d::random_with_rng(3, -1.0, 1.0, &mut rng);
    let dense = Tensor2::from(&d);
    assert!(dense.is_diagonal());
    let back = Tensor2d::try_from(&dense).unwrap();
    assert_eq!(back, d);
}

#[test]
fn roundtrip_symmetric_dense_symmetric() {
    let mut rng = rng();
    let s = Tensor2s::random_with_rng(3, -1.0, 1.0, &mut rng);
    let dense = Tensor2::from(&s);
    assert!(dense.is_symmetric());
    let back = Tensor2s::try_from(&dense).unwrap();
    assert_eq!(back, s);
}

#[test]
fn non_symmetric_dense_fails_checked_narrowing() {
    let a = Tensor2::from_vec(3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]).unwrap();
    assert!(!a.is_symmetric());
    assert!(matches!(
        Tensor2s::try_from(&a),
        Err(TensorError::NotSymmetric { .. })
    ));
    assert!(matches!(
        Tensor2d::try_from(&a),
        Err(TensorError::NotDiagonal { .. })
    ));
}

#[test]
fn copy_dense_roundtrip_through_raw_buffers() {
    let mut rng = rng();
    let s = Tensor2s::random_with_rng(3, -1.0, 1.0, &mut rng);

    let mut dense = [0.0; 9];
    s.copy_to_dense(&mut dense);
    let back = Tensor2s::try_from_dense(3, &dense).unwrap();
    assert_eq!(back, s);

    let d = Tensor2d::random_with_rng(3, -1.0, 1.0, &mut rng);
    let mut dense = [9.0; 9];
    d.copy_to_dense(&mut dense);
    let back = Tensor2d::try_from_dense(3, &dense).unwrap();
    assert_eq!(back, d);
}

/// Generic code written against the dense kind accepts widened arguments
/// transparently.
#[test]
fn widening_feeds_generic_dense_code() {
    fn double_contract_with_identity(a: impl Into<Tensor2<f64>>) -> f64 {
        let a = a.into();
        a.dot(&Tensor2::identity(a.nd())).trace()
    }

    let d = Tensor2d::from_vec(3, vec![2.0, 3.0, 5.0]).unwrap();
    let s = Tensor2s::identity(3);

    assert_eq!(double_contract_with_identity(d), 10.0);
    assert_eq!(double_contract_with_identity(s), 3.0);
}
