//! genart turns a seeded random stream and a small parameter set into 2D compositions and
//! rasterizes them to PNG.
//!
//! # Pipeline overview
//!
//! 1. **Generate**: `(count, palette, seed) -> Vec<Primitive>` ([`generate_storm`]) or
//!    `Vec<Shape>` ([`generate_shapes`]). Pure, infallible, deterministic when seeded.
//! 2. **Describe**: each primitive/shape maps to a [`DrawItem`] (geometry + color + alpha);
//!    a [`Scene`] is the ordered paint list over a background.
//! 3. **Rasterize**: [`rasterize`] paints the scene back to front on the CPU ([`FrameRGBA`]).
//! 4. **Write**: [`write_png`] encodes the frame.
//!
//! Every generator call owns its random stream; there is no process-global RNG.
#![forbid(unsafe_code)]

pub mod config;
pub mod foundation;
pub mod generate;
pub mod palette;
pub mod pipeline;
pub mod random;
pub mod render;

pub use config::{ArtConfig, GeneratorKind};
pub use foundation::core::{ArtDomain, Canvas, Point, Rect, Rgba8, Rgba8Premul, Vec2};
pub use foundation::error::{GenartError, GenartResult};
pub use generate::shapes::{Shape, ShapeEdits, ShapeKind, generate_shapes};
pub use generate::storm::{Primitive, generate_storm};
pub use palette::color::parse_hex;
pub use palette::registry::{PALETTES, Palette, PaletteColor};
pub use pipeline::{Artwork, render_config, render_config_to_png};
pub use random::ArtRng;
pub use render::cpu::{FrameRGBA, RasterSettings, rasterize};
pub use render::geometry::{DrawItem, Geometry, render_primitive, render_shape};
pub use render::png::{render_to_png, write_png};
pub use render::scene::Scene;
