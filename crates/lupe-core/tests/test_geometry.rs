use approx::assert_relative_eq;

use lupe_core::geometry::{
    compute_scale, compute_transform, compute_translation, Rect, Size, Transform,
};

#[test]
fn test_scale_capped_at_native_resolution() {
    // Full image fits the 1140x740 effective viewport on both axes, so the
    // scale is exactly the thumbnail-to-full ratio regardless of aspect.
    let scale = compute_scale(
        Size::new(800.0, 400.0),
        Size::new(200.0, 100.0),
        Size::new(1200.0, 800.0),
        60.0,
    );
    assert_relative_eq!(scale, 4.0);

    // Same with a tall image.
    let scale = compute_scale(
        Size::new(300.0, 700.0),
        Size::new(60.0, 140.0),
        Size::new(1200.0, 800.0),
        60.0,
    );
    assert_relative_eq!(scale, 5.0);
}

#[test]
fn test_height_bound_scenario() {
    // Thumbnail 200x150 at viewport 1200x800, offset 60, full 2000x1500:
    // effective viewport 1140x740, max scale 10, image aspect 1.333 <
    // viewport aspect 1.540, so height binds: (740 / 1500) * 10.
    let scale = compute_scale(
        Size::new(2000.0, 1500.0),
        Size::new(200.0, 150.0),
        Size::new(1200.0, 800.0),
        60.0,
    );
    assert_relative_eq!(scale, (740.0 / 1500.0) * 10.0, epsilon = 1e-12);

    // The scaled thumbnail height equals the effective viewport height.
    assert_relative_eq!(scale * 150.0, 740.0, epsilon = 1e-9);
}

#[test]
fn test_width_bound_scenario() {
    // Wide image: aspect 2.0 > viewport aspect 1.54, so width binds.
    let scale = compute_scale(
        Size::new(3000.0, 1500.0),
        Size::new(300.0, 150.0),
        Size::new(1200.0, 800.0),
        60.0,
    );
    assert_relative_eq!(scale, (1140.0 / 3000.0) * 10.0, epsilon = 1e-12);
    // The scaled thumbnail width equals the effective viewport width.
    assert_relative_eq!(scale * 300.0, 1140.0, epsilon = 1e-9);
}

#[test]
fn test_aspect_limited_height_fills_effective_viewport() {
    let full = Size::new(1000.0, 2000.0);
    let thumb = Size::new(100.0, 200.0);
    let viewport = Size::new(1600.0, 900.0);
    let scale = compute_scale(full, thumb, viewport, 60.0);
    // Taller-relative image: scale * thumb.height * (full/thumb ratio)
    // collapses to scale * full.height / max_scale = effective height.
    let max_scale = full.width / thumb.width;
    assert_relative_eq!(scale / max_scale * full.height, 900.0 - 60.0, epsilon = 1e-9);
}

#[test]
fn test_translation_recentres_thumbnail() {
    let thumb = Rect::new(100.0, 100.0, 200.0, 150.0);
    let viewport = Size::new(1200.0, 800.0);
    let (dx, dy) = compute_translation(thumb, viewport);
    assert_relative_eq!(dx, 400.0);
    assert_relative_eq!(dy, 225.0);

    // A thumbnail already centred needs no translation.
    let centred = Rect::new(500.0, 325.0, 200.0, 150.0);
    let (dx, dy) = compute_translation(centred, viewport);
    assert_relative_eq!(dx, 0.0);
    assert_relative_eq!(dy, 0.0);
}

#[test]
fn test_compute_transform_composes_scale_and_translation() {
    let transform = compute_transform(
        Size::new(2000.0, 1500.0),
        Rect::new(100.0, 100.0, 200.0, 150.0),
        Size::new(1200.0, 800.0),
        60.0,
    );
    assert_relative_eq!(transform.dx, 400.0);
    assert_relative_eq!(transform.dy, 225.0);
    assert_relative_eq!(transform.scale, 740.0 / 1500.0 * 10.0, epsilon = 1e-12);
}

#[test]
fn test_css_serialization() {
    let transform = Transform {
        dx: 10.5,
        dy: -4.0,
        scale: 2.0,
    };
    assert_eq!(transform.to_css(), "translate3d(10.5px, -4px, 0) scale(2)");
    assert_eq!(transform.to_string(), transform.to_css());
}

#[test]
fn test_size_validity_and_aspect() {
    assert!(Size::new(200.0, 150.0).is_valid());
    assert!(!Size::new(0.0, 150.0).is_valid());
    assert!(!Size::new(200.0, -1.0).is_valid());
    assert_relative_eq!(Size::new(200.0, 150.0).aspect_ratio(), 4.0 / 3.0);
}
