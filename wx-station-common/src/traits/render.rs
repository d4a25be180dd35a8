use embedded_graphics::prelude::Point;
use embedded_graphics::text::Alignment;

use crate::types::{IconId, Trend};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ink {
    Primary,
    Secondary,
    Accent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontSize {
    Small,
    Medium,
    Large,
}

/// Anything the backend draws that is not text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Weather(IconId),
    /// Moon phase index 0..=7.
    Moon(u8),
    Trend(Trend),
}

impl Glyph {
    /// Edge length of the square the glyph occupies.
    pub fn size(self) -> u32 {
        match self {
            Glyph::Weather(_) => 32,
            Glyph::Moon(_) => 24,
            Glyph::Trend(_) => 8,
        }
    }
}

/// Drawing backend. Text origins are the top edge of the line; the
/// alignment decides whether `origin.x` is the left edge, centre or right
/// edge. Glyph origins are the top-left corner.
pub trait RenderBackend {
    type Error: core::fmt::Debug;

    fn clear(&mut self) -> Result<(), Self::Error>;

    fn draw_text(
        &mut self,
        text: &str,
        origin: Point,
        alignment: Alignment,
        ink: Ink,
        font: FontSize,
    ) -> Result<(), Self::Error>;

    fn draw_glyph(&mut self, glyph: Glyph, origin: Point) -> Result<(), Self::Error>;

    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}
