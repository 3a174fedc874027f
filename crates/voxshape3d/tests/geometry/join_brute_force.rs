use super::{random_shape, sample_points};
use voxshape3d::shape::{shapes, BooleanOp};

fn operators() -> impl Iterator<Item = BooleanOp> {
    BooleanOp::ALL.into_iter().filter(|op| !op.is_degenerate())
}

#[test]
fn join_matches_pointwise_evaluation() {
    let mut rng = oorandom::Rand32::new(42);

    for _ in 0..60 {
        let a = random_shape(&mut rng, 3);
        let b = random_shape(&mut rng, 3);
        let points = sample_points(&a, &b);

        for op in operators() {
            let joined = shapes::join(&a, &b, op);
            let unoptimized = shapes::join_unoptimized(&a, &b, op);
            let mut any = false;

            for pt in &points {
                let expected = op.apply(a.contains_local_point(pt), b.contains_local_point(pt));
                any |= expected;
                assert_eq!(joined.contains_local_point(pt), expected, "{op:?} at {pt:?}");
                assert_eq!(unoptimized.contains_local_point(pt), expected, "{op:?} at {pt:?}");
            }

            assert_eq!(shapes::join_is_not_empty(&a, &b, op), any, "{op:?}");
            assert_eq!(joined.is_empty(), !any, "{op:?}");
        }
    }
}

#[test]
fn union_is_commutative() {
    let mut rng = oorandom::Rand32::new(7);

    for _ in 0..40 {
        let a = random_shape(&mut rng, 2);
        let b = random_shape(&mut rng, 2);
        let ab = shapes::join(&a, &b, BooleanOp::Or);
        let ba = shapes::join(&b, &a, BooleanOp::Or);

        assert_eq!(ab.is_empty(), a.is_empty() && b.is_empty());
        for pt in sample_points(&a, &b) {
            assert_eq!(ab.contains_local_point(&pt), ba.contains_local_point(&pt));
        }
    }
}

#[test]
fn intersection_with_itself() {
    let mut rng = oorandom::Rand32::new(1234);

    for _ in 0..40 {
        let a = random_shape(&mut rng, 3);
        // Same occupancy, different instance and layout.
        let copy = a.translated(0.0, 0.0, 0.0);
        let both = shapes::join(&a, &copy, BooleanOp::And);

        assert!(shapes::join_unoptimized(&a, &a, BooleanOp::And).ptr_eq(&a));
        assert_eq!(both.is_empty(), a.is_empty());
        assert!(!shapes::join_is_not_empty(&a, &copy, BooleanOp::NotSame));
        for pt in sample_points(&a, &a) {
            assert_eq!(both.contains_local_point(&pt), a.contains_local_point(&pt));
        }
    }
}

#[test]
fn optimize_keeps_occupancy() {
    let mut rng = oorandom::Rand32::new(99);

    for _ in 0..40 {
        let a = random_shape(&mut rng, 4);
        let b = random_shape(&mut rng, 4);
        let raw = shapes::join_unoptimized(&a, &b, BooleanOp::NotSame);
        let optimized = raw.optimize();

        for pt in sample_points(&a, &b) {
            assert_eq!(raw.contains_local_point(&pt), optimized.contains_local_point(&pt));
        }
    }
}

#[test]
fn half_slabs() {
    let bottom = shapes::box_shape(0.0, 0.0, 0.0, 1.0, 0.5, 1.0);
    let top = shapes::box_shape(0.0, 0.5, 0.0, 1.0, 1.0, 1.0);

    assert!(shapes::join(&bottom, &top, BooleanOp::Or).ptr_eq(&shapes::block()));
    assert!(shapes::join(&shapes::block(), &top, BooleanOp::OnlyFirst).is_cube());
    assert!(!shapes::join_is_not_empty(&bottom, &top, BooleanOp::And));
    assert!(shapes::join_is_not_empty(&bottom, &top, BooleanOp::Or));

    let difference = shapes::join(&shapes::block(), &top, BooleanOp::OnlyFirst);
    assert!(!shapes::join_is_not_empty(&difference, &bottom, BooleanOp::NotSame));
}
