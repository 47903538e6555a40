use std::path::Path;

use crate::{
    config::{ArtConfig, GeneratorKind},
    foundation::{core::Rgba8, error::GenartResult},
    generate::{
        shapes::{Shape, generate_shapes},
        storm::{Primitive, generate_storm},
    },
    render::{
        cpu::{FrameRGBA, rasterize},
        geometry::DrawItem,
        png::write_png,
        scene::Scene,
    },
};

/// Output of one generator run, in paint order.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "generator", content = "items", rename_all = "snake_case")]
pub enum Artwork {
    Storm(Vec<Primitive>),
    Shapes(Vec<Shape>),
}

impl Artwork {
    pub fn generate(cfg: &ArtConfig) -> Self {
        match cfg.generator {
            GeneratorKind::Storm => Self::Storm(generate_storm(cfg.count, &cfg.palette, cfg.seed)),
            GeneratorKind::Shapes => {
                Self::Shapes(generate_shapes(cfg.count, &cfg.palette, cfg.seed))
            }
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Storm(p) => p.len(),
            Self::Shapes(s) => s.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn draw_items(&self) -> Vec<DrawItem> {
        match self {
            Self::Storm(p) => p.iter().map(DrawItem::from).collect(),
            Self::Shapes(s) => s.iter().map(DrawItem::from).collect(),
        }
    }

    pub fn scene(&self, background: Rgba8) -> Scene {
        Scene::new(background, self.draw_items())
    }
}

/// Generate and rasterize `cfg` without touching the filesystem.
#[tracing::instrument(skip(cfg), fields(generator = ?cfg.generator, count = cfg.count))]
pub fn render_config(cfg: &ArtConfig) -> GenartResult<(Artwork, FrameRGBA)> {
    cfg.validate()?;
    let art = Artwork::generate(cfg);
    let scene = Scene::with_background_hex(&cfg.background, art.draw_items())?;
    let frame = rasterize(&scene, &cfg.raster_settings())?;
    Ok((art, frame))
}

/// Generate, rasterize and write `cfg` as a PNG at `path`.
pub fn render_config_to_png(cfg: &ArtConfig, path: &Path) -> GenartResult<Artwork> {
    let (art, frame) = render_config(cfg)?;
    write_png(&frame, path)?;
    tracing::info!(path = %path.display(), items = art.len(), "artwork written");
    Ok(art)
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
