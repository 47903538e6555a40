//! JSON-loadable artwork configuration.
//!
//! Omitted fields take the defaults of the selected generator, so `{"generator": "shapes"}`
//! alone is a complete configuration.

use std::path::Path;

use anyhow::Context as _;

use crate::{
    foundation::{
        core::Canvas,
        error::{GenartError, GenartResult},
    },
    generate::{shapes::SHAPES_DEFAULT_PALETTE, storm::STORM_DEFAULT_PALETTE},
    palette::color::parse_hex,
    render::cpu::RasterSettings,
};

pub const DEFAULT_BACKGROUND: &str = "#ffffff";
pub const DEFAULT_SIZE_PX: u32 = 1400;
pub const DEFAULT_DPI: f64 = 200.0;
pub const MAX_SIZE_PX: u32 = 8192;
pub const MAX_COUNT: i64 = 1_000_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GeneratorKind {
    Storm,
    Shapes,
}

impl GeneratorKind {
    pub fn default_count(self) -> i64 {
        match self {
            Self::Storm => 250,
            Self::Shapes => 180,
        }
    }

    pub fn default_palette(self) -> &'static str {
        match self {
            Self::Storm => STORM_DEFAULT_PALETTE.name,
            Self::Shapes => SHAPES_DEFAULT_PALETTE.name,
        }
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "RawConfig")]
pub struct ArtConfig {
    pub generator: GeneratorKind,
    /// `<= 0` renders an empty canvas; capped at [`MAX_COUNT`].
    pub count: i64,
    /// Unknown names fall back to the generator's default palette.
    pub palette: String,
    pub seed: Option<u64>,
    pub background: String,
    /// Side of the square output image.
    pub size_px: u32,
    pub dpi: f64,
}

#[derive(serde::Deserialize)]
#[serde(deny_unknown_fields)]
struct RawConfig {
    generator: GeneratorKind,
    count: Option<i64>,
    palette: Option<String>,
    seed: Option<u64>,
    background: Option<String>,
    size_px: Option<u32>,
    dpi: Option<f64>,
}

impl From<RawConfig> for ArtConfig {
    fn from(raw: RawConfig) -> Self {
        let base = ArtConfig::for_generator(raw.generator);
        Self {
            generator: raw.generator,
            count: raw.count.unwrap_or(base.count),
            palette: raw.palette.unwrap_or(base.palette),
            seed: raw.seed,
            background: raw.background.unwrap_or(base.background),
            size_px: raw.size_px.unwrap_or(base.size_px),
            dpi: raw.dpi.unwrap_or(base.dpi),
        }
    }
}

impl ArtConfig {
    pub fn for_generator(generator: GeneratorKind) -> Self {
        Self {
            generator,
            count: generator.default_count(),
            palette: generator.default_palette().to_owned(),
            seed: None,
            background: DEFAULT_BACKGROUND.to_owned(),
            size_px: DEFAULT_SIZE_PX,
            dpi: DEFAULT_DPI,
        }
    }

    pub fn validate(&self) -> GenartResult<()> {
        parse_hex(&self.background)
            .map_err(|e| GenartError::validation(format!("background: {e}")))?;
        if self.count > MAX_COUNT {
            return Err(GenartError::validation(format!(
                "count must be <= {MAX_COUNT}"
            )));
        }
        if self.size_px == 0 || self.size_px > MAX_SIZE_PX {
            return Err(GenartError::validation(format!(
                "size_px must be in 1..={MAX_SIZE_PX}"
            )));
        }
        if !(self.dpi.is_finite() && self.dpi > 0.0) {
            return Err(GenartError::validation("dpi must be finite and > 0"));
        }
        Ok(())
    }

    pub fn raster_settings(&self) -> RasterSettings {
        RasterSettings {
            canvas: Canvas::square(self.size_px),
            dpi: self.dpi,
        }
    }

    pub fn from_json_str(s: &str) -> GenartResult<Self> {
        let cfg: Self = serde_json::from_str(s).map_err(|e| GenartError::serde(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_json_path(path: &Path) -> GenartResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&s)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/config/mod.rs"]
mod tests;
