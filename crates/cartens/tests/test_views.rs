//! Non-owning views share the index-compression scheme and the operation
//! semantics of their owning counterparts.

use approx::assert_relative_eq;
use cartens::cartesian::{Tensor2, Tensor2d, Tensor2s, Vector};
use cartens::ops::{Ddot, Dot};
use cartens::view::{Tensor2View, Tensor2dView, Tensor2sView, VectorView};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn rng() -> StdRng {
    StdRng::seed_from_u64(0xab1e)
}

#[test]
fn views_bind_external_storage_without_copying() {
    // caller-owned buffers, e.g. columns of a larger state array
    let stress = [1.0, 0.3, 0.2, 2.0, 0.1, 3.0];
    let view = Tensor2sView::from_slice(3, &stress).unwrap();

    assert_eq!(view.data().as_ptr(), stress.as_ptr());
    assert_eq!(view.get(1, 0), 0.3);
    assert_relative_eq!(view.trace(), 6.0);
}

#[test]
fn view_operations_match_owned() {
    let mut rng = rng();
    let a = Tensor2::random_with_rng(3, -1.0, 1.0, &mut rng);
    let s = Tensor2s::random_with_rng(3, -1.0, 1.0, &mut rng);
    let d = Tensor2d::random_with_rng(3, -1.0, 1.0, &mut rng);
    let v = Vector::random_with_rng(3, -1.0, 1.0, &mut rng);

    let av = Tensor2View::from_slice(3, a.data()).unwrap();
    let sv = Tensor2sView::from_slice(3, s.data()).unwrap();
    let dv = Tensor2dView::from_slice(3, d.data()).unwrap();
    let vv = VectorView::from_slice(3, v.data()).unwrap();

    assert_eq!(av.dot(&s), a.dot(&s));
    assert_eq!(sv.dot(&a), s.dot(&a));
    assert_eq!(dv.dot(&a), d.dot(&a));
    assert_eq!(av.ddot(&s), a.ddot(&s));
    assert_eq!(sv.ddot(&d), s.ddot(&d));
    assert_eq!(vv.dot(&v), v.dot(&v));

    assert_eq!(av.trace(), a.trace());
    assert_eq!(sv.det(), s.det());
    assert_eq!(dv.inv(), d.inv());
    assert_eq!(av.t(), a.t());
}

#[test]
fn diag_view_dot_diag_stays_diagonal() {
    let storage = [2.0, 3.0, 5.0];
    let view = Tensor2dView::from_slice(3, &storage).unwrap();
    let d = Tensor2d::from_vec(3, vec![1.0, 2.0, 3.0]).unwrap();

    let prod: Tensor2d<f64> = view.dot(&d);
    assert_eq!(prod.data(), &[2.0, 6.0, 15.0]);
}

#[test]
fn to_owned_copies_out() {
    let storage = [1.0, 2.0, 3.0];
    let owned = {
        let view = VectorView::from_slice(3, &storage).unwrap();
        view.to_owned()
    };
    // the owned copy outlives the view
    assert_eq!(owned.data(), &[1.0, 2.0, 3.0]);
}

#[test]
fn view_length_validation() {
    let storage = [1.0, 2.0, 3.0];
    assert!(Tensor2View::from_slice(3, &storage).is_err());
    assert!(Tensor2sView::from_slice(3, &storage).is_err());
    assert!(Tensor2dView::from_slice(3, &storage).is_ok());
    assert!(VectorView::from_slice(2, &storage).is_err());
}
