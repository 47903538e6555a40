use super::*;

#[test]
fn domain_maps_corners_with_y_up() {
    let canvas = Canvas::square(200);
    let bottom_left = ArtDomain::to_pixel(Point::new(0.0, 0.0), canvas);
    let top_right = ArtDomain::to_pixel(Point::new(100.0, 100.0), canvas);
    assert!((bottom_left.x - 0.0).abs() < 1e-9);
    assert!((bottom_left.y - 200.0).abs() < 1e-9);
    assert!((top_right.x - 200.0).abs() < 1e-9);
    assert!((top_right.y - 0.0).abs() < 1e-9);
}

#[test]
fn domain_scales_non_square_canvas_per_axis() {
    let canvas = Canvas {
        width: 400,
        height: 100,
    };
    let p = ArtDomain::to_pixel(Point::new(50.0, 25.0), canvas);
    assert!((p.x - 200.0).abs() < 1e-9);
    assert!((p.y - 75.0).abs() < 1e-9);
}

#[test]
fn domain_contains_is_inclusive() {
    assert!(ArtDomain::contains(Point::new(0.0, 100.0)));
    assert!(!ArtDomain::contains(Point::new(-0.1, 50.0)));
    assert!(!ArtDomain::contains(Point::new(50.0, 100.5)));
}

#[test]
fn with_alpha_scales_existing_alpha() {
    let c = Rgba8::new(10, 20, 30, 255).with_alpha(0.15);
    assert_eq!(c.a, 38);
    assert_eq!((c.r, c.g, c.b), (10, 20, 30));
    assert_eq!(Rgba8::new(1, 2, 3, 128).with_alpha(2.0).a, 128);
}

#[test]
fn premul_round_trips_opaque_and_clears_transparent() {
    let c = Rgba8::new(255, 89, 94, 255);
    assert_eq!(c.premultiplied().to_straight(), c);
    assert_eq!(
        Rgba8Premul::transparent().to_straight(),
        Rgba8::new(0, 0, 0, 0)
    );
}
