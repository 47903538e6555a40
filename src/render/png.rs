use std::path::Path;

use anyhow::Context as _;

use crate::{
    foundation::{
        core::Rgba8Premul,
        error::{GenartError, GenartResult},
    },
    render::{
        cpu::{FrameRGBA, RasterSettings, rasterize},
        scene::Scene,
    },
};

pub fn ensure_parent_dir(path: &Path) -> GenartResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Straight-alpha RGBA8 bytes for encoders that expect them.
pub fn to_straight_rgba8(frame: &FrameRGBA) -> Vec<u8> {
    if !frame.premultiplied {
        return frame.data.clone();
    }
    let mut out = Vec::with_capacity(frame.data.len());
    for px in frame.data.chunks_exact(4) {
        let c = Rgba8Premul {
            r: px[0],
            g: px[1],
            b: px[2],
            a: px[3],
        }
        .to_straight();
        out.extend_from_slice(&[c.r, c.g, c.b, c.a]);
    }
    out
}

/// Encode `frame` as PNG at `path`, creating parent directories.
pub fn write_png(frame: &FrameRGBA, path: &Path) -> GenartResult<()> {
    let expected = frame.width as usize * frame.height as usize * 4;
    if frame.data.len() != expected {
        return Err(GenartError::render("frame byte length mismatch"));
    }
    ensure_parent_dir(path)?;
    image::save_buffer_with_format(
        path,
        &to_straight_rgba8(frame),
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    tracing::debug!(path = %path.display(), "wrote png");
    Ok(())
}

/// Rasterize `scene` and write it to `path`.
pub fn render_to_png(scene: &Scene, settings: &RasterSettings, path: &Path) -> GenartResult<()> {
    let frame = rasterize(scene, settings)?;
    write_png(&frame, path)
}

#[cfg(test)]
#[path = "../../tests/unit/render/png.rs"]
mod tests;
