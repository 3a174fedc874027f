use voxshape3d::math::Direction;
use voxshape3d::shape::shapes;

#[test]
fn full_blocks_occlude_each_other() {
    let block = shapes::block();
    let empty = shapes::empty();

    for dir in Direction::ALL {
        assert!(shapes::block_occludes(&block, &block, dir));
        assert!(shapes::block_occludes(&block, &block, dir.opposite()));
        assert!(!shapes::block_occludes(&block, &empty, dir));
        assert!(shapes::face_shape_occludes(&block, &empty));
        assert!(!shapes::face_shape_occludes(&empty, &empty));
    }
}

#[test]
fn slab_against_block() {
    let bottom = shapes::box_shape(0.0, 0.0, 0.0, 1.0, 0.5, 1.0);
    let block = shapes::block();

    // The top of the slab does not reach the block above.
    assert!(!shapes::block_occludes(&bottom, &block, Direction::PosY));
    // The bottom face of the slab is entirely covered by the block below.
    assert!(shapes::block_occludes(&bottom, &block, Direction::NegY));
    // The block's side is only half covered by a neighboring slab.
    assert!(!shapes::block_occludes(&block, &bottom, Direction::PosX));
    // The slab's side is entirely covered by a neighboring block.
    assert!(shapes::block_occludes(&bottom, &block, Direction::PosX));
}

#[test]
fn complementary_halves_cover_a_face() {
    let west = shapes::box_shape(0.0, 0.0, 0.0, 1.0, 1.0, 0.5);
    let east = shapes::box_shape(0.0, 0.0, 0.5, 1.0, 1.0, 1.0);

    // Looking through the +x face: `west` covers the lower half in z, `east` the upper one.
    assert!(shapes::merged_face_occludes(&west, &east, Direction::PosX));
    assert!(!shapes::merged_face_occludes(&west, &west, Direction::PosX));
    assert!(!shapes::merged_face_occludes(&west, &shapes::empty(), Direction::PosX));

    let west_face = west.face_shape(Direction::PosX);
    let east_face = east.face_shape(Direction::NegX);
    assert!(shapes::face_shape_occludes(&west_face, &east_face));
    assert!(!shapes::face_shape_occludes(&west_face, &west_face));
}

#[test]
fn recessed_faces_do_not_count() {
    // Flush with the bottom but not with the top.
    let low = shapes::box_shape(0.0, 0.0, 0.0, 1.0, 0.75, 1.0);
    // Flush with the top but not with the bottom.
    let high = shapes::box_shape(0.0, 0.25, 0.0, 1.0, 1.0, 1.0);

    assert!(shapes::boundary_face_shape(&low, Direction::PosY).is_empty());
    assert!(!shapes::boundary_face_shape(&low, Direction::NegY).is_empty());
    assert!(!shapes::merged_face_occludes(&low, &high, Direction::PosY));
    assert!(shapes::merged_face_occludes(&high, &low, Direction::PosY));
}
