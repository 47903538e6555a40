use crate::{
    foundation::core::{Point, Vec2},
    generate::PREALLOC_LIMIT,
    palette::registry::{self, Palette, PaletteColor},
    random::ArtRng,
};

/// Palette used when the requested name is not registered.
pub const SHAPES_DEFAULT_PALETTE: &Palette = &registry::OCEAN;

pub const SHAPE_POS_RANGE: (f64, f64) = (5.0, 95.0);
pub const SHAPE_SIZE_RANGE: (f64, f64) = (1.0, 6.0);
pub const SHAPE_ALPHA_RANGE: (f64, f64) = (0.25, 0.85);
/// Shapes at indices divisible by this drift after construction.
pub const DRIFT_EVERY: usize = 5;
pub const DRIFT_RANGE: (f64, f64) = (-4.0, 4.0);
/// Recolor candidates are indices divisible by this whose size exceeds [`RECOLOR_MIN_SIZE`].
pub const RECOLOR_EVERY: usize = 3;
pub const RECOLOR_MIN_SIZE: f64 = 5.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    Circle,
    Square,
    Triangle,
}

/// Sampling order for the variant draw.
pub const SHAPE_KINDS: [ShapeKind; 3] = [
    ShapeKind::Circle,
    ShapeKind::Square,
    ShapeKind::Triangle,
];

/// Which setup mutations were applied while the shape was being built.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize)]
pub struct ShapeEdits {
    pub drift: Option<Vec2>,
    /// Set even when the replacement color equals the previous color.
    pub recolored: bool,
}

impl ShapeEdits {
    pub fn is_untouched(&self) -> bool {
        self.drift.is_none() && !self.recolored
    }
}

/// A finished shape. Fields are read-only once generation returns.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Shape {
    kind: ShapeKind,
    x: f64,
    y: f64,
    size: f64,
    color: PaletteColor,
    alpha: f64,
    edits: ShapeEdits,
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> f64 {
        self.size
    }

    pub fn color(&self) -> PaletteColor {
        self.color
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    pub fn edits(&self) -> ShapeEdits {
        self.edits
    }
}

/// Setup phase of a shape: the only place `move`/`recolor` exist.
struct ShapeSetup(Shape);

impl ShapeSetup {
    fn new(kind: ShapeKind, x: f64, y: f64, size: f64, color: PaletteColor, alpha: f64) -> Self {
        Self(Shape {
            kind,
            x,
            y,
            size,
            color,
            alpha,
            edits: ShapeEdits::default(),
        })
    }

    fn translate(&mut self, dx: f64, dy: f64) {
        self.0.x += dx;
        self.0.y += dy;
        let prev = self.0.edits.drift.unwrap_or(Vec2::ZERO);
        self.0.edits.drift = Some(prev + Vec2::new(dx, dy));
    }

    fn recolor(&mut self, color: PaletteColor) {
        self.0.color = color;
        self.0.edits.recolored = true;
    }

    fn finish(self) -> Shape {
        self.0
    }
}

/// Build `count` circles, squares and triangles with drift and recolor rules applied.
///
/// Per index the stream is consumed as: x, y, size, color, alpha, variant, then
/// (dx, dy) if the shape drifts and a color if it is recolored.
/// `count <= 0` yields an empty vector.
#[tracing::instrument(level = "debug")]
pub fn generate_shapes(count: i64, palette: &str, seed: Option<u64>) -> Vec<Shape> {
    let colors = &registry::resolve(palette, SHAPES_DEFAULT_PALETTE).colors;
    let count = usize::try_from(count).unwrap_or(0);
    let mut rng = ArtRng::new(seed);

    let mut shapes = Vec::with_capacity(count.min(PREALLOC_LIMIT));
    let (mut drifted, mut recolored) = (0usize, 0usize);
    for i in 0..count {
        let x = rng.uniform(SHAPE_POS_RANGE.0, SHAPE_POS_RANGE.1);
        let y = rng.uniform(SHAPE_POS_RANGE.0, SHAPE_POS_RANGE.1);
        let size = rng.uniform(SHAPE_SIZE_RANGE.0, SHAPE_SIZE_RANGE.1);
        let color = *rng.choice(colors);
        let alpha = rng.uniform(SHAPE_ALPHA_RANGE.0, SHAPE_ALPHA_RANGE.1);
        let kind = *rng.choice(&SHAPE_KINDS);

        let mut setup = ShapeSetup::new(kind, x, y, size, color, alpha);

        if i % DRIFT_EVERY == 0 {
            let dx = rng.uniform(DRIFT_RANGE.0, DRIFT_RANGE.1);
            let dy = rng.uniform(DRIFT_RANGE.0, DRIFT_RANGE.1);
            setup.translate(dx, dy);
            drifted += 1;
        }

        if size > RECOLOR_MIN_SIZE && i % RECOLOR_EVERY == 0 {
            setup.recolor(*rng.choice(colors));
            recolored += 1;
        }

        shapes.push(setup.finish());
    }

    tracing::debug!(emitted = shapes.len(), drifted, recolored, "shapes generated");
    shapes
}

#[cfg(test)]
#[path = "../../tests/unit/generate/shapes.rs"]
mod tests;
