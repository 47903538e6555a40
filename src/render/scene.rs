use crate::{
    foundation::{core::Rgba8, error::GenartResult},
    generate::{shapes::Shape, storm::Primitive},
    palette::color::parse_hex,
    render::geometry::DrawItem,
};

/// An ordered paint list over a solid background. `items[0]` is painted first.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Scene {
    pub background: Rgba8,
    pub items: Vec<DrawItem>,
}

impl Scene {
    pub fn new(background: Rgba8, items: Vec<DrawItem>) -> Self {
        Self { background, items }
    }

    pub fn storm(background: Rgba8, prims: &[Primitive]) -> Self {
        Self::new(background, prims.iter().map(DrawItem::from).collect())
    }

    pub fn shapes(background: Rgba8, shapes: &[Shape]) -> Self {
        Self::new(background, shapes.iter().map(DrawItem::from).collect())
    }

    /// Parse `background` as a hex color.
    pub fn with_background_hex(background: &str, items: Vec<DrawItem>) -> GenartResult<Self> {
        Ok(Self::new(parse_hex(background)?, items))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/scene.rs"]
mod tests;
