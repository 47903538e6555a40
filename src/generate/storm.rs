use crate::{
    generate::PREALLOC_LIMIT,
    palette::registry::{self, Palette, PaletteColor},
    random::ArtRng,
};

/// Palette used when the requested name is not registered.
pub const STORM_DEFAULT_PALETTE: &Palette = &registry::SUNSET;

pub const STORM_POS_RANGE: (f64, f64) = (0.0, 100.0);
pub const STORM_RADIUS_RANGE: (f64, f64) = (0.2, 6.0);
/// Every `LINE_EVERY`-th primitive (starting at index 0) is a line segment.
pub const LINE_EVERY: usize = 7;
pub const LINE_OFFSET_RANGE: (f64, f64) = (-15.0, 15.0);
pub const LINE_WIDTH_RANGE: (f64, f64) = (0.3, 2.5);
pub const LINE_ALPHA_RANGE: (f64, f64) = (0.2, 0.8);
/// Circles with a radius above this are drawn faint at [`FAINT_ALPHA`].
pub const FAINT_RADIUS: f64 = 4.0;
pub const FAINT_ALPHA: f64 = 0.15;
pub const CIRCLE_ALPHA_RANGE: (f64, f64) = (0.2, 0.9);

/// One storm draw-op. Sequence order is paint order (back to front).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Primitive {
    LineSegment {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        /// Stroke width in points.
        width: f64,
        alpha: f64,
        color: PaletteColor,
    },
    FilledCircle {
        x: f64,
        y: f64,
        radius: f64,
        alpha: f64,
        color: PaletteColor,
    },
}

impl Primitive {
    pub fn color(&self) -> PaletteColor {
        match self {
            Self::LineSegment { color, .. } | Self::FilledCircle { color, .. } => color,
        }
    }

    pub fn alpha(&self) -> f64 {
        match self {
            Self::LineSegment { alpha, .. } | Self::FilledCircle { alpha, .. } => *alpha,
        }
    }

    pub fn is_line(&self) -> bool {
        matches!(self, Self::LineSegment { .. })
    }
}

/// Scatter `count` circles and line segments over the domain.
///
/// Per index the stream is consumed as: x, y, color, radius, then either
/// (dx, dy, width, alpha) for lines or (alpha, unless the circle is faint) for circles.
/// `count <= 0` yields an empty vector.
#[tracing::instrument(level = "debug")]
pub fn generate_storm(count: i64, palette: &str, seed: Option<u64>) -> Vec<Primitive> {
    let colors = &registry::resolve(palette, STORM_DEFAULT_PALETTE).colors;
    let count = usize::try_from(count).unwrap_or(0);
    let mut rng = ArtRng::new(seed);

    let mut out = Vec::with_capacity(count.min(PREALLOC_LIMIT));
    for i in 0..count {
        let x = rng.uniform(STORM_POS_RANGE.0, STORM_POS_RANGE.1);
        let y = rng.uniform(STORM_POS_RANGE.0, STORM_POS_RANGE.1);
        let color = *rng.choice(colors);
        let r = rng.uniform(STORM_RADIUS_RANGE.0, STORM_RADIUS_RANGE.1);

        let prim = if i % LINE_EVERY == 0 {
            let x2 = x + rng.uniform(LINE_OFFSET_RANGE.0, LINE_OFFSET_RANGE.1);
            let y2 = y + rng.uniform(LINE_OFFSET_RANGE.0, LINE_OFFSET_RANGE.1);
            let width = rng.uniform(LINE_WIDTH_RANGE.0, LINE_WIDTH_RANGE.1);
            let alpha = rng.uniform(LINE_ALPHA_RANGE.0, LINE_ALPHA_RANGE.1);
            Primitive::LineSegment {
                x1: x,
                y1: y,
                x2,
                y2,
                width,
                alpha,
                color,
            }
        } else {
            let alpha = if r > FAINT_RADIUS {
                FAINT_ALPHA
            } else {
                rng.uniform(CIRCLE_ALPHA_RANGE.0, CIRCLE_ALPHA_RANGE.1)
            };
            Primitive::FilledCircle {
                x,
                y,
                radius: r,
                alpha,
                color,
            }
        };
        out.push(prim);
    }

    tracing::debug!(emitted = out.len(), "storm generated");
    out
}

#[cfg(test)]
#[path = "../../tests/unit/generate/storm.rs"]
mod tests;
