use pangocairo::pango;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const OUTLINE: Color = Color::rgb(0.0, 34.0 / 255.0, 0.0);
    pub const TABLE: Color = Color::rgb(0.0, 128.0 / 255.0, 0.0);

    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Parses `#rrggbb` or `#rrggbbaa`.
    pub fn from_hex(raw: &str) -> Option<Self> {
        let hex = raw.trim().strip_prefix('#')?;
        if !hex.is_ascii() || (hex.len() != 6 && hex.len() != 8) {
            return None;
        }
        let channel = |i: usize| -> Option<f64> {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .ok()
                .map(|v| v as f64 / 255.0)
        };
        let alpha = if hex.len() == 8 { channel(6)? } else { 1.0 };
        Some(Self::rgba(channel(0)?, channel(2)?, channel(4)?, alpha))
    }

    pub fn to_hex(self) -> String {
        let byte = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}{:02x}",
            byte(self.red),
            byte(self.green),
            byte(self.blue),
            byte(self.alpha)
        )
    }

    pub fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }

    pub fn set_source(self, cr: &cairo::Context) {
        cr.set_source_rgba(self.red, self.green, self.blue, self.alpha);
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Color::from_hex(&raw)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid colour `{raw}`")))
    }
}

/// Draws `text` with its baseline at `y`, the way a canvas `fillText` would.
pub(crate) fn fill_text(
    cr: &cairo::Context,
    text: &str,
    family: &str,
    pixel_size: f64,
    x: f64,
    y: f64,
) {
    let layout = pangocairo::functions::create_layout(cr);
    let mut font_desc = pango::FontDescription::new();
    font_desc.set_family(family);
    font_desc.set_absolute_size(pixel_size * pango::SCALE as f64);
    layout.set_font_description(Some(&font_desc));
    layout.set_text(text);

    let baseline = layout.baseline() as f64 / pango::SCALE as f64;
    cr.move_to(x, y - baseline);
    pangocairo::functions::show_layout(cr, &layout);
}

/// Draws `text` centred inside the given box.
pub(crate) fn centered_text(
    cr: &cairo::Context,
    text: &str,
    family: &str,
    pixel_size: f64,
    (x, y, w, h): (f64, f64, f64, f64),
) {
    let layout = pangocairo::functions::create_layout(cr);
    let mut font_desc = pango::FontDescription::new();
    font_desc.set_family(family);
    font_desc.set_weight(pango::Weight::Bold);
    font_desc.set_absolute_size(pixel_size * pango::SCALE as f64);
    layout.set_font_description(Some(&font_desc));
    layout.set_text(text);

    let (text_width, text_height) = layout.pixel_size();
    cr.move_to(
        x + (w - text_width as f64) / 2.0,
        y + (h - text_height as f64) / 2.0,
    );
    pangocairo::functions::show_layout(cr, &layout);
}
