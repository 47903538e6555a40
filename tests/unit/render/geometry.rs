use super::*;
use crate::{
    foundation::core::{ArtDomain, Canvas},
    generate::{shapes::generate_shapes, storm::generate_storm},
};

fn first_of(kind: ShapeKind) -> Shape {
    generate_shapes(300, "ocean", Some(21))
        .into_iter()
        .find(|s| s.kind() == kind)
        .unwrap()
}

#[test]
fn circle_is_a_disc_of_radius_size() {
    let s = first_of(ShapeKind::Circle);
    assert_eq!(
        render_shape(&s),
        Geometry::Disc {
            center: s.center(),
            radius: s.size()
        }
    );
}

#[test]
fn square_has_side_twice_size() {
    let s = first_of(ShapeKind::Square);
    let Geometry::Rect { rect } = render_shape(&s) else {
        panic!("square did not render as rect");
    };
    assert!((rect.width() - 2.0 * s.size()).abs() < 1e-12);
    assert!((rect.height() - 2.0 * s.size()).abs() < 1e-12);
    assert!((rect.center() - s.center()).hypot() < 1e-12);
}

#[test]
fn triangle_apex_and_base_follow_size() {
    let s = first_of(ShapeKind::Triangle);
    let Geometry::Polygon { points } = render_shape(&s) else {
        panic!("triangle did not render as polygon");
    };
    let (x, y, k) = (s.x(), s.y(), s.size());
    assert_eq!(points[0], Point::new(x, y + k));
    assert_eq!(points[1], Point::new(x - k, y - k));
    assert_eq!(points[2], Point::new(x + k, y - k));
}

#[test]
fn primitives_map_to_lines_and_discs() {
    let prims = generate_storm(8, "sunset", Some(3));
    for p in &prims {
        let item = DrawItem::from(p);
        assert_eq!(item.color, p.color());
        assert_eq!(item.alpha, p.alpha());
        match (p, item.geometry) {
            (Primitive::LineSegment { width, .. }, Geometry::Line { width_pt, .. }) => {
                assert_eq!(*width, width_pt);
            }
            (Primitive::FilledCircle { radius, .. }, Geometry::Disc { radius: r, .. }) => {
                assert_eq!(*radius, r);
            }
            other => panic!("unexpected mapping {other:?}"),
        }
    }
}

#[test]
fn line_quad_width_scales_with_points() {
    let canvas = Canvas::square(100);
    let g = Geometry::Line {
        p0: Point::new(10.0, 50.0),
        p1: Point::new(90.0, 50.0),
        width_pt: 2.0,
    };
    let bbox = kurbo::Shape::bounding_box(&g.to_pixel_path(ArtDomain::to_canvas(canvas), 3.0));
    assert!((bbox.height() - 6.0).abs() < 1e-9);
    // 80px long plus a 3px projecting cap at each end
    assert!((bbox.width() - 86.0).abs() < 1e-9);
    assert!((bbox.x0 - 7.0).abs() < 1e-9);
}

#[test]
fn zero_length_line_is_empty() {
    let g = Geometry::Line {
        p0: Point::new(10.0, 10.0),
        p1: Point::new(10.0, 10.0),
        width_pt: 1.0,
    };
    assert!(g.to_pixel_path(Affine::IDENTITY, 1.0).elements().is_empty());
}

#[test]
fn disc_outline_lands_in_pixel_space() {
    let canvas = Canvas::square(1000);
    let g = Geometry::Disc {
        center: Point::new(50.0, 50.0),
        radius: 5.0,
    };
    let bbox = kurbo::Shape::bounding_box(&g.to_pixel_path(ArtDomain::to_canvas(canvas), 1.0));
    assert!((bbox.center().x - 500.0).abs() < 0.5);
    assert!((bbox.width() - 100.0).abs() < 0.5);
}

#[test]
fn diagonal_line_caps_extend_along_the_segment() {
    let g = Geometry::Line {
        p0: Point::new(0.0, 0.0),
        p1: Point::new(30.0, 40.0),
        width_pt: 0.0,
    };
    let path = g.to_pixel_path(Affine::IDENTITY, 1.0);
    let bbox = kurbo::Shape::bounding_box(&path);
    assert!((bbox.width() - 30.0).abs() < 1e-9);

    let Geometry::Line { p0, p1, .. } = g else {
        unreachable!()
    };
    let g = Geometry::Line {
        p0,
        p1,
        width_pt: 10.0,
    };
    let bbox = kurbo::Shape::bounding_box(&g.to_pixel_path(Affine::IDENTITY, 1.0));
    // caps push the ends 3 further in x; the half-width offset adds 4 more
    assert!((bbox.x0 - (-3.0 - 4.0)).abs() < 1e-9);
    assert!((bbox.x1 - (33.0 + 4.0)).abs() < 1e-9);
}
