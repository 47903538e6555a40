use kurbo::Shape as _;

use crate::{
    foundation::core::{Affine, BezPath, Point, Rect, Vec2},
    generate::{
        shapes::{Shape, ShapeKind},
        storm::Primitive,
    },
    palette::registry::PaletteColor,
};

/// Flattening tolerance for curved outlines, in pixels.
const PATH_TOLERANCE_PX: f64 = 0.1;

/// Variant-specific outline in domain units.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Geometry {
    Disc { center: Point, radius: f64 },
    Rect { rect: Rect },
    Polygon { points: [Point; 3] },
    /// `width_pt` is a stroke width in typographic points, independent of the domain scale.
    Line { p0: Point, p1: Point, width_pt: f64 },
}

/// One paint operation: geometry plus a palette color and its alpha.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct DrawItem {
    pub geometry: Geometry,
    pub color: PaletteColor,
    pub alpha: f64,
}

/// Circle: disc of radius `size`. Square: side `2*size` centered on the shape.
/// Triangle: apex `(x, y+size)`, base corners `(x∓size, y-size)`.
pub fn render_shape(shape: &Shape) -> Geometry {
    let (x, y, s) = (shape.x(), shape.y(), shape.size());
    match shape.kind() {
        ShapeKind::Circle => Geometry::Disc {
            center: Point::new(x, y),
            radius: s,
        },
        ShapeKind::Square => Geometry::Rect {
            rect: Rect::new(x - s, y - s, x + s, y + s),
        },
        ShapeKind::Triangle => Geometry::Polygon {
            points: [
                Point::new(x, y + s),
                Point::new(x - s, y - s),
                Point::new(x + s, y - s),
            ],
        },
    }
}

pub fn render_primitive(prim: &Primitive) -> Geometry {
    match *prim {
        Primitive::LineSegment {
            x1,
            y1,
            x2,
            y2,
            width,
            ..
        } => Geometry::Line {
            p0: Point::new(x1, y1),
            p1: Point::new(x2, y2),
            width_pt: width,
        },
        Primitive::FilledCircle { x, y, radius, .. } => Geometry::Disc {
            center: Point::new(x, y),
            radius,
        },
    }
}

impl From<&Shape> for DrawItem {
    fn from(shape: &Shape) -> Self {
        Self {
            geometry: render_shape(shape),
            color: shape.color(),
            alpha: shape.alpha(),
        }
    }
}

impl From<&Primitive> for DrawItem {
    fn from(prim: &Primitive) -> Self {
        Self {
            geometry: render_primitive(prim),
            color: prim.color(),
            alpha: prim.alpha(),
        }
    }
}

impl Geometry {
    /// Fillable outline in pixel space. Lines become quads `width_pt * px_per_pt` pixels wide
    /// with projecting caps; a zero-length line yields an empty path.
    pub fn to_pixel_path(&self, to_px: Affine, px_per_pt: f64) -> BezPath {
        match *self {
            Geometry::Disc { center, radius } => {
                (to_px * kurbo::Circle::new(center, radius)).to_path(PATH_TOLERANCE_PX)
            }
            Geometry::Rect { rect } => to_px
                .transform_rect_bbox(rect)
                .to_path(PATH_TOLERANCE_PX),
            Geometry::Polygon { points } => {
                let mut path = BezPath::new();
                path.move_to(to_px * points[0]);
                for &p in &points[1..] {
                    path.line_to(to_px * p);
                }
                path.close_path();
                path
            }
            Geometry::Line { p0, p1, width_pt } => {
                let (a, b) = (to_px * p0, to_px * p1);
                let dir = b - a;
                let len = dir.hypot();
                let mut path = BezPath::new();
                if len <= f64::EPSILON {
                    return path;
                }
                let half = width_pt * px_per_pt / 2.0;
                let n = Vec2::new(-dir.y, dir.x) * (half / len);
                // projecting caps: both ends extend by half the width
                let t = dir * (half / len);
                let (a, b) = (a - t, b + t);
                path.move_to(a + n);
                path.line_to(b + n);
                path.line_to(b - n);
                path.line_to(a - n);
                path.close_path();
                path
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/geometry.rs"]
mod tests;
