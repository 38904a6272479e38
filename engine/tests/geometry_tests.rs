//! Geometry Tests - Column Boxes, Separation, and the Boundary Clamp
//!
//! Exercises the collision volumes and room bounds through the public API:
//! vertical-column construction, horizontal separation, footprint
//! containment, and clamp behavior at the room edges.

use glam::Vec3;
use roomcraft_engine::{footprint_corners, OrientedBox, Room, Transform};

// ============================================================================
// Column volumes
// ============================================================================

#[test]
fn test_column_ignores_object_height() {
    // Same footprint at wildly different heights must produce the same
    // horizontal relationship: columns cannot pass over or under each other.
    let ground = OrientedBox::column(
        Vec3::new(2.0, 2.0, 2.0),
        &Transform::from_translation(Vec3::new(0.0, 1.0, 0.0)),
    );
    let raised = OrientedBox::column(
        Vec3::new(2.0, 40.0, 2.0),
        &Transform::from_translation(Vec3::new(1.0, 60.0, 0.0)),
    );

    assert!(ground.intersects_horizontal(&raised));
}

#[test]
fn test_true_box_keeps_real_height() {
    let table = OrientedBox::true_box(
        Vec3::new(2.0, 2.0, 3.0),
        &Transform::from_translation(Vec3::new(0.0, 1.0, 0.0)),
    );
    assert!((table.top_y() - 2.0).abs() < 1e-6);

    let column = OrientedBox::column(
        Vec3::new(2.0, 2.0, 3.0),
        &Transform::from_translation(Vec3::new(0.0, 1.0, 0.0)),
    );
    assert!(column.top_y() > 100.0);
}

#[test]
fn test_footprint_matches_containment() {
    let surface = OrientedBox::column(
        Vec3::new(3.0, 1.0, 3.0),
        &Transform::from_translation(Vec3::new(0.0, 0.5, 0.0)),
    );

    let centered = footprint_corners(
        Vec3::ONE,
        &Transform::from_translation(Vec3::new(0.0, 0.5, 0.0)),
    );
    assert!(centered
        .iter()
        .all(|&corner| surface.contains_horizontal(corner)));

    let shifted = footprint_corners(
        Vec3::ONE,
        &Transform::from_translation(Vec3::new(1.2, 0.5, 0.0)),
    );
    assert!(shifted
        .iter()
        .any(|&corner| !surface.contains_horizontal(corner)));
}

// ============================================================================
// Boundary clamp
// ============================================================================

#[test]
fn test_clamp_keeps_footprint_inside_walls() {
    let room = Room::default();

    // Anywhere the clamp puts an object, its column must not touch a wall.
    for &(x, z) in &[(20.0_f32, 20.0_f32), (-20.0, 0.0), (0.0, -20.0), (4.9, -4.9)] {
        let (cx, cz) = room.clamp_to_room(x, z, 2.0, 3.0);
        let body = OrientedBox::column(
            Vec3::new(2.0, 2.0, 3.0),
            &Transform::from_translation(Vec3::new(cx, 1.0, cz)),
        );
        for wall in room.wall_colliders() {
            let wall_box = OrientedBox::column(wall.dimension, &wall.transform);
            assert!(
                !body.intersects_horizontal(&wall_box),
                "clamped ({x}, {z}) -> ({cx}, {cz}) still hits a wall"
            );
        }
    }
}

#[test]
fn test_clamp_is_idempotent_for_all_fitting_sizes() {
    let room = Room::default();
    for w in [0.5_f32, 1.0, 2.0, 5.0, 10.0] {
        for d in [0.5_f32, 1.0, 3.0, 10.0] {
            let once = room.clamp_to_room(7.3, -8.1, w, d);
            let twice = room.clamp_to_room(once.0, once.1, w, d);
            assert_eq!(once, twice, "clamp not idempotent for {w}x{d}");
        }
    }
}
