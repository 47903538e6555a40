/// A color value as registered in a palette (`#RRGGBB`). Generators pass these through
/// untouched so emitted colors compare equal to the palette entries.
pub type PaletteColor = &'static str;

/// A named, ordered, immutable list of colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Palette {
    pub name: &'static str,
    pub colors: [PaletteColor; 5],
}

pub const SUNSET: Palette = Palette {
    name: "sunset",
    colors: ["#ff595e", "#ffca3a", "#8ac926", "#1982c4", "#6a4c93"],
};

pub const OCEAN: Palette = Palette {
    name: "ocean",
    colors: ["#001219", "#005f73", "#0a9396", "#94d2bd", "#e9d8a6"],
};

pub const MONO: Palette = Palette {
    name: "mono",
    colors: ["#111111", "#333333", "#555555", "#777777", "#999999"],
};

/// Every registered palette, in display order.
pub static PALETTES: [Palette; 3] = [SUNSET, OCEAN, MONO];

/// Exact-name lookup; `None` for unregistered names.
pub fn lookup(name: &str) -> Option<&'static Palette> {
    PALETTES.iter().find(|p| p.name == name)
}

/// Total lookup: unregistered names resolve to `fallback`.
pub fn resolve(name: &str, fallback: &'static Palette) -> &'static Palette {
    match lookup(name) {
        Some(p) => p,
        None => {
            tracing::debug!(
                requested = name,
                fallback = fallback.name,
                "unknown palette, using fallback"
            );
            fallback
        }
    }
}

pub fn names() -> impl Iterator<Item = &'static str> {
    PALETTES.iter().map(|p| p.name)
}

impl Palette {
    pub fn contains(&self, color: &str) -> bool {
        self.colors.iter().any(|c| *c == color)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/palette/registry.rs"]
mod tests;
