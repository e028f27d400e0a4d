// Camera viewport updates and screen-to-plane picking.

use field_core::*;
use glam::{Vec2, Vec3};

#[test]
fn resize_with_same_viewport_is_idempotent() {
    let mut once = Camera::default();
    assert!(once.set_viewport(1280, 720));

    let mut twice = Camera::default();
    assert!(twice.set_viewport(1280, 720));
    assert!(!twice.set_viewport(1280, 720));

    assert_eq!(once, twice);
    assert_eq!(once.projection_matrix(), twice.projection_matrix());
}

#[test]
fn zero_sized_viewport_is_ignored() {
    let mut cam = Camera::default();
    cam.set_viewport(800, 600);
    let before = cam.clone();
    assert!(!cam.set_viewport(0, 600));
    assert!(!cam.set_viewport(800, 0));
    assert_eq!(cam, before);
}

#[test]
fn screen_centre_hits_plane_origin() {
    let mut cam = Camera::default();
    cam.set_viewport(1920, 1080);
    let hit = pick_plane(&cam, Vec2::ZERO).unwrap();
    assert!(hit.length() < 1e-4);
}

#[test]
fn click_on_projected_plane_point_picks_it_back() {
    let mut cam = Camera::default();
    cam.set_viewport(1600, 900);
    for p in [Vec2::new(2.0, 3.0), Vec2::new(-4.5, 1.0), Vec2::new(6.0, -5.0)] {
        let world = plane_to_world(p.extend(0.0));
        let ndc = cam.project(world).unwrap();
        let hit = pick_plane(&cam, ndc).unwrap();
        assert!((hit - p).length() < 1e-3, "picked {hit:?} for {p:?}");
    }
}

#[test]
fn screen_up_and_right_map_to_plane_up_and_right() {
    let mut cam = Camera::default();
    cam.set_viewport(1000, 1000);
    let up = pick_plane(&cam, Vec2::new(0.0, 0.5)).unwrap();
    let right = pick_plane(&cam, Vec2::new(0.5, 0.0)).unwrap();
    assert!(up.y > 0.0 && up.x.abs() < 1e-4);
    assert!(right.x > 0.0 && right.y.abs() < 1e-4);
}

#[test]
fn ray_parallel_to_ground_misses() {
    let ray = Ray {
        origin: Vec3::new(0.0, 10.0, 0.0),
        dir: Vec3::X,
    };
    assert!(ray.intersect_ground().is_none());
    let away = Ray {
        origin: Vec3::new(0.0, 10.0, 0.0),
        dir: Vec3::Y,
    };
    assert!(away.intersect_ground().is_none());
}

#[test]
fn plane_to_world_matches_group_rotation() {
    let m = plane_model_matrix();
    for p in [Vec3::new(1.0, 2.0, 3.0), Vec3::new(-4.0, 0.5, -0.25)] {
        let a = m.transform_point3(p);
        let b = plane_to_world(p);
        assert!((a - b).length() < 1e-5);
        // height ends up pointing at the camera
        assert!((b.y - p.z).abs() < 1e-6);
        assert_eq!(ground_to_plane(b), p.truncate());
    }
}

#[test]
fn css_coordinates_map_to_ndc() {
    assert_eq!(css_to_ndc(0.0, 0.0, 200.0, 100.0), Vec2::new(-1.0, 1.0));
    assert_eq!(css_to_ndc(200.0, 100.0, 200.0, 100.0), Vec2::new(1.0, -1.0));
    assert_eq!(css_to_ndc(100.0, 50.0, 200.0, 100.0), Vec2::ZERO);
    assert_eq!(css_to_ndc(5.0, 5.0, 0.0, 100.0), Vec2::ZERO);
}
