use crate::{
    foundation::{
        core::{ArtDomain, BezPath, Canvas, Point},
        error::{GenartError, GenartResult},
    },
    palette::color::parse_hex,
    render::scene::Scene,
};

/// Pixels of an 8-bit RGBA raster.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
    pub premultiplied: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RasterSettings {
    pub canvas: Canvas,
    /// Converts line widths from points to pixels.
    pub dpi: f64,
}

impl Default for RasterSettings {
    /// A 7in square figure at 200 dpi.
    fn default() -> Self {
        Self {
            canvas: Canvas::square(1400),
            dpi: 200.0,
        }
    }
}

impl RasterSettings {
    pub fn px_per_pt(&self) -> f64 {
        self.dpi / 72.0
    }
}

/// Paint `scene` back to front onto a fresh canvas.
#[tracing::instrument(skip(scene), fields(items = scene.items.len()))]
pub fn rasterize(scene: &Scene, settings: &RasterSettings) -> GenartResult<FrameRGBA> {
    let width: u16 = settings
        .canvas
        .width
        .try_into()
        .map_err(|_| GenartError::render("canvas width exceeds u16"))?;
    let height: u16 = settings
        .canvas
        .height
        .try_into()
        .map_err(|_| GenartError::render("canvas height exceeds u16"))?;
    if width == 0 || height == 0 {
        return Err(GenartError::render("canvas must be non-empty"));
    }
    if !(settings.dpi.is_finite() && settings.dpi > 0.0) {
        return Err(GenartError::render("dpi must be finite and > 0"));
    }

    let mut ctx = vello_cpu::RenderContext::new(width, height);
    let bg = scene.background;
    ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(bg.r, bg.g, bg.b, bg.a));
    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
        0.0,
        0.0,
        f64::from(width),
        f64::from(height),
    ));

    let to_px = ArtDomain::to_canvas(settings.canvas);
    let px_per_pt = settings.px_per_pt();
    for item in &scene.items {
        let c = parse_hex(item.color)?.with_alpha(item.alpha);
        let path = item.geometry.to_pixel_path(to_px, px_per_pt);
        if path.elements().is_empty() {
            continue;
        }
        ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a));
        ctx.fill_path(&bezpath_to_cpu(&path));
    }
    ctx.flush();

    let mut pixmap = vello_cpu::Pixmap::new(width, height);
    ctx.render_to_pixmap(&mut pixmap);

    Ok(FrameRGBA {
        width: settings.canvas.width,
        height: settings.canvas.height,
        data: pixmap.data_as_u8_slice().to_vec(),
        premultiplied: true,
    })
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
