use crate::foundation::error::{FlowError, FlowResult};

/// CSS color string carried by a visual element.
///
/// Kept as the literal the scene is authored with ("red", "#e94560") so the frame state
/// serializes exactly what a web-style renderer expects. [`Color::to_rgba8`] resolves it for
/// the SVG preview writer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(transparent)]
pub struct Color(&'static str);

impl Color {
    pub const RED: Color = Color("red");
    pub const WHITE: Color = Color("white");
    pub const CRIMSON: Color = Color("#e94560");
    pub const GOLD: Color = Color("#ffd700");
    pub const MIDNIGHT: Color = Color("#1a1a2e");

    pub const fn new(css: &'static str) -> Self {
        Self(css)
    }

    pub fn as_str(self) -> &'static str {
        self.0
    }

    /// Straight-alpha RGBA8.
    pub fn to_rgba8(self) -> FlowResult<[u8; 4]> {
        let s = self.0.trim();
        match s.to_ascii_lowercase().as_str() {
            "red" => return Ok([255, 0, 0, 255]),
            "white" => return Ok([255, 255, 255, 255]),
            "black" => return Ok([0, 0, 0, 255]),
            "transparent" => return Ok([0, 0, 0, 0]),
            _ => {}
        }
        parse_hex(s).map_err(FlowError::validation)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

fn parse_hex(s: &str) -> Result<[u8; 4], String> {
    let Some(hex) = s.strip_prefix('#') else {
        return Err(format!("unsupported color \"{s}\""));
    };
    if !hex.is_ascii() {
        return Err(format!("invalid hex color \"{s}\""));
    }

    fn hex_byte(pair: &str) -> Result<u8, String> {
        u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte \"{pair}\""))
    }

    match hex.len() {
        6 => Ok([
            hex_byte(&hex[0..2])?,
            hex_byte(&hex[2..4])?,
            hex_byte(&hex[4..6])?,
            255,
        ]),
        8 => Ok([
            hex_byte(&hex[0..2])?,
            hex_byte(&hex[2..4])?,
            hex_byte(&hex[4..6])?,
            hex_byte(&hex[6..8])?,
        ]),
        _ => Err("hex color must be #RRGGBB or #RRGGBBAA (case-insensitive)".to_owned()),
    }
}
