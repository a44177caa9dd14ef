//! The fixed-size family exposes the same operation surface with the same
//! semantics as the runtime-dimensioned family.

use approx::assert_relative_eq;
use cartens::ops::{Ddot, Dot, Dyadic};
use cartens::tiny::{Tensor2, Tensor2d, Tensor2s, Tensor4, Vector, D2, D3};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn rng() -> StdRng {
    StdRng::seed_from_u64(0xd1ce)
}

#[test]
fn identity_laws() {
    let mut rng = rng();
    let a: Tensor2<f64, D3> = Tensor2::random_with_rng(-1.0, 1.0, &mut rng);

    let i: Tensor2d<f64, D3> = Tensor2d::identity();
    assert_eq!(i.dot(&a), a);

    let i4: Tensor4<f64, D3> = Tensor4::identity();
    assert_eq!(i4.ddot(&a), a);
    assert_eq!(a.ddot(&i4), a);
}

#[test]
fn diag_scenario() {
    let a: Tensor2d<f64, D3> = Tensor2d::from_slice(&[2.0, 3.0, 5.0]);

    assert_relative_eq!(a.det(), 30.0);
    assert_relative_eq!(a.trace(), 10.0);

    let inv = a.inv();
    assert_relative_eq!(inv.get(0, 0), 0.5);
    assert_relative_eq!(inv.get(1, 1), 1.0 / 3.0);
    assert_relative_eq!(inv.get(2, 2), 0.2);

    let v: Vector<f64, D3> = Vector::ones();
    assert_eq!(a.dot(&v).data(), &[2.0, 3.0, 5.0]);
}

#[test]
fn dyadic_of_identities() {
    let i2: Tensor2<f64, D2> = Tensor2::identity();
    let i2s: Tensor2s<f64, D2> = Tensor2s::identity();
    let i2d: Tensor2d<f64, D2> = Tensor2d::identity();
    let ii: Tensor4<f64, D2> = Tensor4::ii();

    assert_eq!(i2.dyadic(&i2), ii);
    assert_eq!(i2s.dyadic(&i2d), ii);
    assert_eq!(i2d.dyadic(&i2d), ii);
}

/// Both families run the same kernels; spot-check they agree bit for bit.
#[test]
fn agrees_with_cartesian_family() {
    let mut rng = rng();
    let a: Tensor2<f64, D3> = Tensor2::random_with_rng(-1.0, 1.0, &mut rng);
    let s: Tensor2s<f64, D3> = Tensor2s::random_with_rng(-1.0, 1.0, &mut rng);
    let d: Tensor2d<f64, D3> = Tensor2d::random_with_rng(-1.0, 1.0, &mut rng);

    let (va, vs, vd) = (a.to_cartesian(), s.to_cartesian(), d.to_cartesian());

    assert_eq!(a.dot(&s).data(), va.dot(&vs).data());
    assert_eq!(s.dot(&d).data(), vs.dot(&vd).data());
    assert_eq!(a.ddot(&s), va.ddot(&vs));
    assert_eq!(d.ddot(&d), vd.ddot(&vd));
    assert_eq!(a.dyadic(&d).data(), va.dyadic(&vd).data());
    assert_eq!(a.det(), va.det());
    assert_eq!(s.inv().data(), vs.inv().data());
    assert_eq!(d.trace(), vd.trace());
}

#[test]
fn transpose_involution() {
    let mut rng = rng();
    let a: Tensor2<f64, D2> = Tensor2::random_with_rng(-1.0, 1.0, &mut rng);
    let t4: Tensor4<f64, D2> = Tensor4::random_with_rng(-1.0, 1.0, &mut rng);

    assert_eq!(a.t().t(), a);
    assert_eq!(t4.t().t(), t4);
    assert_eq!(t4.rt().rt(), t4);
    assert_eq!(t4.lt().lt(), t4);
}

#[test]
fn conversions_roundtrip() {
    let mut rng = rng();
    let d: Tensor2d<f64, D3> = Tensor2d::random_with_rng(-1.0, 1.0, &mut rng);

    let dense = Tensor2::from(&d);
    assert!(dense.is_diagonal());
    let back = Tensor2d::try_from(&dense).unwrap();
    assert_eq!(back, d);

    let s: Tensor2s<f64, D3> = Tensor2s::random_with_rng(-1.0, 1.0, &mut rng);
    let dense = Tensor2::from(&s);
    assert!(dense.is_symmetric());
    let back = Tensor2s::try_from(&dense).unwrap();
    assert_eq!(back, s);
}

#[test]
fn d2_det_inv() {
    let a: Tensor2<f64, D2> = Tensor2::from_slice(&[1.0, 2.0, 3.0, 4.0]);
    assert_relative_eq!(a.det(), -2.0);

    let prod = a.dot(&a.inv());
    for i in 0..2 {
        for j in 0..2 {
            let expect = if i == j { 1.0 } else { 0.0 };
            assert_relative_eq!(prod.get(i, j), expect, epsilon = 1e-12);
        }
    }
}
