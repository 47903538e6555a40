use crate::foundation::{
    core::Rgba8,
    error::{GenartError, GenartResult},
};

/// Parse `#RRGGBB` or `#RRGGBBAA` (leading `#` optional, case-insensitive).
pub fn parse_hex(s: &str) -> GenartResult<Rgba8> {
    let s = s.trim();
    let s = s.strip_prefix('#').unwrap_or(s);

    fn hex_byte(pair: &str) -> GenartResult<u8> {
        u8::from_str_radix(pair, 16)
            .map_err(|_| GenartError::color(format!("invalid hex byte \"{pair}\"")))
    }

    if !s.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(GenartError::color(format!(
            "hex color \"{s}\" contains non-hex characters"
        )));
    }

    match s.len() {
        6 => Ok(Rgba8::new(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
            255,
        )),
        8 => Ok(Rgba8::new(
            hex_byte(&s[0..2])?,
            hex_byte(&s[2..4])?,
            hex_byte(&s[4..6])?,
            hex_byte(&s[6..8])?,
        )),
        _ => Err(GenartError::color(
            "hex color must be #RRGGBB or #RRGGBBAA (case-insensitive)",
        )),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/palette/color.rs"]
mod tests;
