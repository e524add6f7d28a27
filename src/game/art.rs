use std::fmt;

use super::card::{CardValue, Face};
use super::geometry::Rect;
use super::paint::{Color, centered_text};

const GLYPH_FAMILY: &str = "Noto Color Emoji, Apple Color Emoji, Segoe UI Emoji, sans";
const BACK_FAMILY: &str = "Cantarell, Noto Sans, sans";
/// Fill behind glyph artwork.
pub const FACE_STOCK: Color = Color::WHITE;
pub const BACK_STOCK: Color = Color::rgb(0.16, 0.22, 0.45);
const MIN_PAINT_EXTENT: f64 = 1.0;

pub const DEFAULT_GLYPHS: [&str; 12] = [
    "🐶", "🦊", "🐼", "🐸", "🐙", "🦋", "🍓", "🍋", "🍉", "🚀", "🎲", "⚽",
];

/// A single picture a card can show: a decoded raster or a text glyph.
#[derive(Clone)]
pub enum Artwork {
    Image(cairo::ImageSurface),
    Glyph(String),
}

impl fmt::Debug for Artwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Artwork::Image(surface) => write!(f, "Image({}x{})", surface.width(), surface.height()),
            Artwork::Glyph(text) => write!(f, "Glyph({text:?})"),
        }
    }
}

impl Artwork {
    /// Paints the artwork stretched over `rect`, which must be normalized.
    ///
    /// Rectangles thinner than a pixel (a card edge-on mid-flip) paint nothing;
    /// scaling a surface by zero would leave the context in an error state.
    pub fn paint(&self, cr: &cairo::Context, rect: Rect, side: Face) -> Result<(), cairo::Error> {
        if rect.w < MIN_PAINT_EXTENT || rect.h < MIN_PAINT_EXTENT {
            return Ok(());
        }
        match self {
            Artwork::Image(surface) => {
                let (img_w, img_h) = (surface.width(), surface.height());
                if img_w <= 0 || img_h <= 0 {
                    return Ok(());
                }
                cr.save()?;
                cr.translate(rect.x, rect.y);
                cr.scale(rect.w / img_w as f64, rect.h / img_h as f64);
                cr.set_source_surface(surface, 0.0, 0.0)?;
                cr.paint()?;
                cr.restore()?;
            }
            Artwork::Glyph(text) => {
                let (stock, ink, family, scale) = match side {
                    Face::Up => (FACE_STOCK, Color::BLACK, GLYPH_FAMILY, 0.40),
                    Face::Down => (BACK_STOCK, Color::WHITE, BACK_FAMILY, 0.34),
                };
                stock.set_source(cr);
                cr.rectangle(rect.x, rect.y, rect.w, rect.h);
                cr.fill()?;

                ink.set_source(cr);
                centered_text(
                    cr,
                    text,
                    family,
                    rect.w.min(rect.h) * scale,
                    (rect.x, rect.y, rect.w, rect.h),
                );
            }
        }
        Ok(())
    }
}

/// Faces for every card value plus the shared back.
#[derive(Clone, Debug)]
pub struct CardArt {
    faces: Vec<Artwork>,
    back: Artwork,
}

impl CardArt {
    /// `faces[n - 1]` is shown for `CardValue(n)`.
    pub fn new(faces: Vec<Artwork>, back: Artwork) -> Self {
        Self { faces, back }
    }

    pub fn glyphs() -> Self {
        Self::new(
            DEFAULT_GLYPHS
                .iter()
                .map(|g| Artwork::Glyph(g.to_string()))
                .collect(),
            Artwork::Glyph("?".to_string()),
        )
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    pub fn back(&self) -> &Artwork {
        &self.back
    }

    pub fn face(&self, value: CardValue) -> &Artwork {
        let idx = usize::from(value.0).saturating_sub(1);
        self.faces.get(idx).unwrap_or(&self.back)
    }

    pub(crate) fn paint_back(&self, cr: &cairo::Context, rect: Rect) -> Result<(), cairo::Error> {
        self.back.paint(cr, rect, Face::Down)
    }

    pub(crate) fn paint_face(
        &self,
        cr: &cairo::Context,
        value: CardValue,
        rect: Rect,
    ) -> Result<(), cairo::Error> {
        self.face(value).paint(cr, rect, Face::Up)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_value_falls_back_to_back() {
        let art = CardArt::glyphs();
        assert_eq!(art.face_count(), 12);
        assert!(matches!(art.face(CardValue(1)), Artwork::Glyph(g) if g == "🐶"));
        assert!(matches!(art.face(CardValue(40)), Artwork::Glyph(g) if g == "?"));
        assert!(matches!(art.face(CardValue(0)), Artwork::Glyph(g) if g == "🐶"));
    }

    #[test]
    fn edge_on_rect_paints_nothing() {
        let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, 20, 20).unwrap();
        let cr = cairo::Context::new(&surface).unwrap();
        let art = CardArt::glyphs();
        art.paint_back(&cr, Rect::new(5.0, 0.0, 0.2, 20.0)).unwrap();
        assert!(cr.status().is_ok());
    }
}
