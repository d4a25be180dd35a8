use std::path::PathBuf;

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Alignment;
use embedded_graphics_simulator::{OutputSettings, SimulatorDisplay};
use thiserror::Error;
use wx_station_common::*;
use wx_station_graphics::{EgBackend, Palette, layout};

#[derive(Error, Debug)]
pub enum DisplayError {
    #[error("failed to write frame to {0}")]
    Save(String),
}

const PALETTE: Palette<Rgb888> = Palette {
    background: Rgb888::new(0x10, 0x14, 0x1c),
    primary: Rgb888::new(0xf0, 0xf0, 0xf0),
    secondary: Rgb888::new(0x90, 0x9c, 0xb0),
    accent: Rgb888::new(0xff, 0xc0, 0x30),
};

/// 320x240 in-memory screen. Every finished frame is written to a PNG so
/// the layout can be inspected without hardware.
pub struct PngDisplay {
    backend: EgBackend<SimulatorDisplay<Rgb888>>,
    path: PathBuf,
    frames: u32,
}

impl PngDisplay {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let display = SimulatorDisplay::new(Size::new(layout::SCREEN_WIDTH as u32, layout::SCREEN_HEIGHT as u32));
        Self {
            backend: EgBackend::new(display, PALETTE),
            path: path.into(),
            frames: 0,
        }
    }
}

impl RenderBackend for PngDisplay {
    type Error = DisplayError;

    fn clear(&mut self) -> Result<(), Self::Error> {
        let Ok(()) = self.backend.clear();
        Ok(())
    }

    fn draw_text(
        &mut self,
        text: &str,
        origin: Point,
        alignment: Alignment,
        ink: Ink,
        font: FontSize,
    ) -> Result<(), Self::Error> {
        let Ok(()) = self.backend.draw_text(text, origin, alignment, ink, font);
        Ok(())
    }

    fn draw_glyph(&mut self, glyph: Glyph, origin: Point) -> Result<(), Self::Error> {
        let Ok(()) = self.backend.draw_glyph(glyph, origin);
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.backend
            .target()
            .to_rgb_output_image(&OutputSettings::default())
            .save_png(&self.path)
            .map_err(|_| DisplayError::Save(self.path.display().to_string()))?;
        self.frames += 1;
        debug!("Frame {} written to {}", self.frames, self.path.display());
        Ok(())
    }
}
