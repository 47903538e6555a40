pub use kurbo::{Affine, BezPath, Point, Rect, Vec2};

/// Output raster size in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn square(side: u32) -> Self {
        Self {
            width: side,
            height: side,
        }
    }
}

/// The abstract drawing domain shared by both generators: `[0,100] x [0,100]`, y pointing up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArtDomain;

impl ArtDomain {
    pub const MIN: f64 = 0.0;
    pub const MAX: f64 = 100.0;

    pub fn extent() -> f64 {
        Self::MAX - Self::MIN
    }

    /// Domain -> pixel transform for `canvas` (y flipped so the domain origin sits bottom-left).
    pub fn to_canvas(canvas: Canvas) -> Affine {
        let sx = f64::from(canvas.width) / Self::extent();
        let sy = f64::from(canvas.height) / Self::extent();
        Affine::new([
            sx,
            0.0,
            0.0,
            -sy,
            -Self::MIN * sx,
            f64::from(canvas.height) + Self::MIN * sy,
        ])
    }

    pub fn to_pixel(p: Point, canvas: Canvas) -> Point {
        Self::to_canvas(canvas) * p
    }

    pub fn contains(p: Point) -> bool {
        (Self::MIN..=Self::MAX).contains(&p.x) && (Self::MIN..=Self::MAX).contains(&p.y)
    }
}

/// Straight (non-premultiplied) RGBA8.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const WHITE: Self = Self {
        r: 255,
        g: 255,
        b: 255,
        a: 255,
    };

    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Scale the color's own alpha by `alpha` (clamped to `0..=1`).
    pub fn with_alpha(self, alpha: f64) -> Self {
        let a = (f64::from(self.a) * alpha.clamp(0.0, 1.0)).round() as u8;
        Self { a, ..self }
    }

    pub fn premultiplied(self) -> Rgba8Premul {
        Rgba8Premul::from_straight_rgba(self.r, self.g, self.b, self.a)
    }
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8Premul {
    pub fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }

    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        Self {
            r: premul(r, a),
            g: premul(g, a),
            b: premul(b, a),
            a,
        }
    }

    pub fn to_straight(self) -> Rgba8 {
        if self.a == 0 {
            return Rgba8::new(0, 0, 0, 0);
        }
        let a = u32::from(self.a);
        let unpremul = |c: u8| -> u8 { ((u32::from(c) * 255 + a / 2) / a).min(255) as u8 };
        Rgba8::new(unpremul(self.r), unpremul(self.g), unpremul(self.b), self.a)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
