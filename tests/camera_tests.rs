use glam::{Vec3, Vec4Swizzles};
use scene_switcher::camera::{Camera, Projection};

fn ortho_bounds(camera: &Camera) -> (f32, f32, f32, f32) {
    match camera.projection {
        Projection::Orthographic {
            left,
            right,
            top,
            bottom,
            ..
        } => (left, right, top, bottom),
        other => panic!("expected orthographic, got {other:?}"),
    }
}

#[test]
fn test_orthographic_reproject_widens_horizontally() {
    let mut camera = Camera::orthographic(10.0, 1.0, 0.1, 1000.0);
    assert_eq!(ortho_bounds(&camera), (-5.0, 5.0, 5.0, -5.0));

    camera.reproject(2.0);

    assert_eq!(ortho_bounds(&camera), (-10.0, 10.0, 5.0, -5.0));
}

#[test]
fn test_orthographic_reproject_keeps_near_far_and_frustum() {
    let mut camera = Camera::orthographic(10.0, 1.0, 0.1, 1000.0);
    camera.reproject(0.5);

    match camera.projection {
        Projection::Orthographic {
            near,
            far,
            frustum_size,
            left,
            ..
        } => {
            assert_eq!((near, far, frustum_size), (0.1, 1000.0, 10.0));
            assert_eq!(left, -2.5);
        }
        other => panic!("expected orthographic, got {other:?}"),
    }
}

#[test]
fn test_perspective_reproject_changes_only_aspect() {
    let mut camera = Camera::perspective(75.0, 1.0, 0.1, 1000.0).at(Vec3::new(0.0, 0.0, 5.0));
    let before = camera;

    camera.reproject(16.0 / 9.0);

    assert_eq!(camera.projection, Projection::perspective(75.0, 16.0 / 9.0, 0.1, 1000.0));
    assert_eq!(camera.position, before.position);
    assert_eq!(camera.target, before.target);
}

#[test]
fn test_perspective_camera_sees_origin_centered() {
    let camera = Camera::perspective(75.0, 1.0, 0.1, 1000.0).at(Vec3::new(0.0, 0.0, 5.0));

    let clip = camera.view_projection() * Vec3::ZERO.extend(1.0);
    let ndc = clip.xyz() / clip.w;

    assert!(ndc.x.abs() < 1e-5);
    assert!(ndc.y.abs() < 1e-5);
    assert!(ndc.z > 0.0 && ndc.z < 1.0);
}

#[test]
fn test_top_down_camera_screen_up_is_negative_z() {
    let camera = Camera::orthographic(10.0, 1.0, 0.1, 1000.0)
        .at(Vec3::new(0.0, 10.0, 0.0))
        .looking_at(Vec3::ZERO)
        .with_up(Vec3::NEG_Z);

    let ahead = camera.view_projection() * Vec3::new(0.0, 0.0, -2.5).extend(1.0);
    let right = camera.view_projection() * Vec3::new(2.5, 0.0, 0.0).extend(1.0);

    assert!((ahead.y - 0.5).abs() < 1e-5);
    assert!((right.x - 0.5).abs() < 1e-5);
}
