//! Determinant and inverse checks against an independent dense
//! linear-algebra reference (faer).

use approx::assert_relative_eq;
use cartens::cartesian::{Tensor2, Tensor2d, Tensor2s};
use cartens::ops::Dot;
use cartens::TensorError;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn rng() -> StdRng {
    StdRng::seed_from_u64(0xfeed)
}

fn faer_det(nd: usize, a: &Tensor2<f64>) -> f64 {
    let m = faer::Mat::from_fn(nd, nd, |i, j| a.get(i, j));
    m.determinant()
}

#[test]
fn dense_det_matches_reference() {
    let mut rng = rng();
    for nd in [2, 3] {
        for _ in 0..10 {
            let a = Tensor2::random_with_rng(nd, -1.0, 1.0, &mut rng);
            assert_relative_eq!(a.det(), faer_det(nd, &a), epsilon = 1e-12);
        }
    }
}

#[test]
fn symmetric_det_matches_reference() {
    let mut rng = rng();
    for nd in [2, 3] {
        for _ in 0..10 {
            let s = Tensor2s::random_with_rng(nd, -1.0, 1.0, &mut rng);
            let dense = Tensor2::from(&s);
            assert_relative_eq!(s.det(), faer_det(nd, &dense), epsilon = 1e-12);
            assert_relative_eq!(s.det(), dense.det(), epsilon = 1e-12);
        }
    }
}

#[test]
fn diagonal_det_matches_reference() {
    let mut rng = rng();
    let d = Tensor2d::random_with_rng(3, 0.5, 2.0, &mut rng);
    let dense = Tensor2::from(&d);
    assert_relative_eq!(d.det(), faer_det(3, &dense), epsilon = 1e-12);
}

#[test]
fn inverse_times_original_is_identity() {
    let mut rng = rng();
    for nd in [2, 3] {
        // shift the diagonal away from singularity
        let a = Tensor2::random_with_rng(nd, -1.0, 1.0, &mut rng) + Tensor2::identity(nd) * 3.0;
        let prod = a.dot(&a.inv());
        for i in 0..nd {
            for j in 0..nd {
                let expect = if i == j { 1.0 } else { 0.0 };
                assert_relative_eq!(prod.get(i, j), expect, epsilon = 1e-12);
            }
        }

        let s = Tensor2s::random_with_rng(nd, -1.0, 1.0, &mut rng) + Tensor2s::identity(nd) * 3.0;
        let prod = s.dot(&s.inv());
        for i in 0..nd {
            for j in 0..nd {
                let expect = if i == j { 1.0 } else { 0.0 };
                assert_relative_eq!(prod.get(i, j), expect, epsilon = 1e-12);
            }
        }
    }

    let d = Tensor2d::random_with_rng(3, 0.5, 2.0, &mut rng);
    let prod: Tensor2d<f64> = d.dot(&d.inv());
    for i in 0..3 {
        assert_relative_eq!(prod.get(i, i), 1.0, epsilon = 1e-12);
    }
}

#[test]
fn symmetric_inverse_stays_symmetric_and_matches_dense() {
    let mut rng = rng();
    let s = Tensor2s::random_with_rng(3, -1.0, 1.0, &mut rng) + Tensor2s::identity(3) * 3.0;
    let dense_inv = Tensor2::from(&s).inv();
    let packed_inv = s.inv();
    for i in 0..3 {
        for j in 0..3 {
            assert_relative_eq!(packed_inv.get(i, j), dense_inv.get(i, j), epsilon = 1e-12);
        }
    }
}

#[test]
fn singular_input_follows_ieee() {
    // a singular dense matrix: two identical rows
    let a = Tensor2::<f64>::from_vec(2, vec![1.0, 2.0, 1.0, 2.0]).unwrap();
    assert_eq!(a.det(), 0.0);
    let inv = a.inv();
    assert!(inv.data().iter().any(|x| !x.is_finite()));
    assert!(matches!(a.try_inv(), Err(TensorError::Singular)));

    // diagonal with a zero entry
    let d = Tensor2d::<f64>::from_vec(3, vec![1.0, 0.0, 2.0]).unwrap();
    assert!(d.inv().get(1, 1).is_infinite());
    assert!(matches!(d.try_inv(), Err(TensorError::Singular)));
}

#[test]
fn unsupported_dimension_is_rejected() {
    let a: Tensor2<f64> = Tensor2::identity(5);
    assert!(matches!(
        a.try_inv(),
        Err(TensorError::UnsupportedDim { nd: 5 })
    ));

    // the diagonal kind has no such restriction
    let d: Tensor2d<f64> = Tensor2d::constant(5, 2.0);
    assert_eq!(d.det(), 32.0);
    assert!(d.try_inv().is_ok());
}
