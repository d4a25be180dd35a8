//! `embedded-graphics` implementation of the render backend. Weather and
//! moon icons are composed from primitives rather than bitmaps.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, Rectangle, Triangle};
use embedded_graphics::text::{Alignment, Baseline, Text, TextStyleBuilder};
use wx_station_common::{FontSize, Glyph, IconId, Ink, RenderBackend, Trend};

use super::text::font_for;

/// Colours for each ink plus the background.
#[derive(Debug, Clone, Copy)]
pub struct Palette<C> {
    pub background: C,
    pub primary: C,
    pub secondary: C,
    pub accent: C,
}

impl<C: PixelColor> Palette<C> {
    pub fn ink(&self, ink: Ink) -> C {
        match ink {
            Ink::Primary => self.primary,
            Ink::Secondary => self.secondary,
            Ink::Accent => self.accent,
        }
    }
}

pub struct EgBackend<D: DrawTarget> {
    target: D,
    palette: Palette<D::Color>,
}

impl<D: DrawTarget> EgBackend<D>
where
    D::Error: core::fmt::Debug,
{
    pub fn new(target: D, palette: Palette<D::Color>) -> Self {
        Self { target, palette }
    }

    pub fn target(&self) -> &D {
        &self.target
    }

    fn fill(&self, ink: Ink) -> PrimitiveStyle<D::Color> {
        PrimitiveStyle::with_fill(self.palette.ink(ink))
    }

    fn stroke(&self, ink: Ink, width: u32) -> PrimitiveStyle<D::Color> {
        PrimitiveStyle::with_stroke(self.palette.ink(ink), width)
    }

    fn erase(&self) -> PrimitiveStyle<D::Color> {
        PrimitiveStyle::with_fill(self.palette.background)
    }

    fn draw_sun(&mut self, centre: Point, diameter: u32) -> Result<(), D::Error> {
        let radius = diameter as i32 / 2;
        Circle::with_center(centre, diameter)
            .into_styled(self.fill(Ink::Accent))
            .draw(&mut self.target)?;

        const RAYS: [(i32, i32); 8] = [
            (0, -1),
            (1, -1),
            (1, 0),
            (1, 1),
            (0, 1),
            (-1, 1),
            (-1, 0),
            (-1, -1),
        ];
        for (dx, dy) in RAYS {
            let start = centre + Point::new(dx * (radius + 2), dy * (radius + 2));
            let end = centre + Point::new(dx * (radius + 5), dy * (radius + 5));
            Line::new(start, end)
                .into_styled(self.stroke(Ink::Accent, 1))
                .draw(&mut self.target)?;
        }
        Ok(())
    }

    fn draw_crescent(&mut self, centre: Point, diameter: u32) -> Result<(), D::Error> {
        Circle::with_center(centre, diameter)
            .into_styled(self.fill(Ink::Primary))
            .draw(&mut self.target)?;
        let shift = diameter as i32 / 3;
        Circle::with_center(centre + Point::new(shift, -shift / 2), diameter)
            .into_styled(self.erase())
            .draw(&mut self.target)
    }

    /// Cloud filling the lower two thirds of a 32px box at `origin`.
    fn draw_cloud(&mut self, origin: Point) -> Result<(), D::Error> {
        let style = self.fill(Ink::Secondary);
        Circle::new(origin + Point::new(4, 10), 12)
            .into_styled(style)
            .draw(&mut self.target)?;
        Circle::new(origin + Point::new(11, 6), 14)
            .into_styled(style)
            .draw(&mut self.target)?;
        Circle::new(origin + Point::new(18, 10), 11)
            .into_styled(style)
            .draw(&mut self.target)?;
        Rectangle::new(origin + Point::new(9, 14), Size::new(16, 7))
            .into_styled(style)
            .draw(&mut self.target)?;
        Ok(())
    }

    fn draw_streaks(&mut self, origin: Point, length: i32, ink: Ink) -> Result<(), D::Error> {
        for x in [9, 16, 23] {
            let start = origin + Point::new(x, 24);
            Line::new(start, start + Point::new(-2, length))
                .into_styled(self.stroke(ink, 1))
                .draw(&mut self.target)?;
        }
        Ok(())
    }

    fn draw_weather(&mut self, icon: IconId, origin: Point) -> Result<(), D::Error> {
        match icon {
            IconId::ClearDay => self.draw_sun(origin + Point::new(16, 16), 14),
            IconId::ClearNight => self.draw_crescent(origin + Point::new(14, 16), 20),
            IconId::PartlyCloudyDay => {
                self.draw_sun(origin + Point::new(21, 11), 8)?;
                self.draw_cloud(origin + Point::new(0, 4))
            }
            IconId::PartlyCloudyNight => {
                self.draw_crescent(origin + Point::new(20, 10), 12)?;
                self.draw_cloud(origin + Point::new(0, 4))
            }
            IconId::Fog => {
                for (y, inset) in [(10, 2), (16, 6), (22, 2)] {
                    Line::new(
                        origin + Point::new(inset, y),
                        origin + Point::new(31 - inset, y),
                    )
                    .into_styled(self.stroke(Ink::Secondary, 2))
                    .draw(&mut self.target)?;
                }
                Ok(())
            }
            IconId::Drizzle => {
                self.draw_cloud(origin)?;
                self.draw_streaks(origin, 3, Ink::Primary)
            }
            IconId::Rain => {
                self.draw_cloud(origin)?;
                self.draw_streaks(origin, 6, Ink::Primary)
            }
            IconId::Snow => {
                self.draw_cloud(origin)?;
                for (x, y) in [(8, 25), (15, 28), (22, 25)] {
                    Circle::with_center(origin + Point::new(x, y), 3)
                        .into_styled(self.fill(Ink::Primary))
                        .draw(&mut self.target)?;
                }
                Ok(())
            }
            IconId::Thunderstorm => {
                self.draw_cloud(origin)?;
                let bolt = [
                    origin + Point::new(17, 19),
                    origin + Point::new(12, 25),
                    origin + Point::new(17, 25),
                    origin + Point::new(13, 30),
                ];
                for pair in bolt.windows(2) {
                    Line::new(pair[0], pair[1])
                        .into_styled(self.stroke(Ink::Accent, 2))
                        .draw(&mut self.target)?;
                }
                Ok(())
            }
            IconId::Unknown => {
                Rectangle::new(origin + Point::new(4, 4), Size::new(24, 24))
                    .into_styled(self.stroke(Ink::Secondary, 1))
                    .draw(&mut self.target)?;
                self.draw_text(
                    "?",
                    origin + Point::new(16, 6),
                    Alignment::Center,
                    Ink::Secondary,
                    FontSize::Large,
                )
            }
        }
    }

    /// Lit part of the disc is whatever a same-sized shadow disc does not
    /// cover. The shadow leaves to the left while waxing and returns from
    /// the right while waning.
    fn draw_moon(&mut self, index: u8, origin: Point) -> Result<(), D::Error> {
        let diameter = Glyph::Moon(index).size();
        let centre = origin + Point::new(diameter as i32 / 2, diameter as i32 / 2);
        let step = diameter as i32 / 4;
        let index = (index % 8) as i32;

        let disc = Circle::with_center(centre, diameter);
        let shadow = (index != 4).then(|| {
            let offset = if index < 4 {
                -index * step
            } else {
                (8 - index) * step
            };
            Circle::with_center(centre + Point::new(offset, 0), diameter)
        });
        let lit = self.palette.ink(Ink::Primary);
        self.target.draw_iter(
            disc.points()
                .filter(|point| shadow.is_none_or(|shadow| !shadow.contains(*point)))
                .map(|point| Pixel(point, lit)),
        )?;
        disc.into_styled(self.stroke(Ink::Primary, 1))
            .draw(&mut self.target)
    }

    fn draw_trend(&mut self, trend: Trend, origin: Point) -> Result<(), D::Error> {
        let size = Glyph::Trend(trend).size() as i32;
        match trend {
            Trend::Rising => Triangle::new(
                origin + Point::new(size / 2, 0),
                origin + Point::new(0, size - 1),
                origin + Point::new(size - 1, size - 1),
            )
            .into_styled(self.fill(Ink::Accent))
            .draw(&mut self.target),
            Trend::Falling => Triangle::new(
                origin,
                origin + Point::new(size - 1, 0),
                origin + Point::new(size / 2, size - 1),
            )
            .into_styled(self.fill(Ink::Accent))
            .draw(&mut self.target),
            Trend::Steady => Line::new(
                origin + Point::new(0, size / 2),
                origin + Point::new(size - 1, size / 2),
            )
            .into_styled(self.stroke(Ink::Secondary, 1))
            .draw(&mut self.target),
        }
    }
}

impl<D: DrawTarget> RenderBackend for EgBackend<D>
where
    D::Error: core::fmt::Debug,
{
    type Error = D::Error;

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.target.clear(self.palette.background)
    }

    fn draw_text(
        &mut self,
        text: &str,
        origin: Point,
        alignment: Alignment,
        ink: Ink,
        font: FontSize,
    ) -> Result<(), Self::Error> {
        let character_style = MonoTextStyle::new(font_for(font), self.palette.ink(ink));
        let text_style = TextStyleBuilder::new()
            .alignment(alignment)
            .baseline(Baseline::Top)
            .build();
        Text::with_text_style(text, origin, character_style, text_style).draw(&mut self.target)?;
        Ok(())
    }

    fn draw_glyph(&mut self, glyph: Glyph, origin: Point) -> Result<(), Self::Error> {
        match glyph {
            Glyph::Weather(icon) => self.draw_weather(icon, origin),
            Glyph::Moon(index) => self.draw_moon(index, origin),
            Glyph::Trend(trend) => self.draw_trend(trend, origin),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::mock_display::MockDisplay;
    use embedded_graphics::pixelcolor::BinaryColor;

    const MONO: Palette<BinaryColor> = Palette {
        background: BinaryColor::Off,
        primary: BinaryColor::On,
        secondary: BinaryColor::On,
        accent: BinaryColor::On,
    };

    fn backend() -> EgBackend<MockDisplay<BinaryColor>> {
        let mut display = MockDisplay::new();
        display.set_allow_overdraw(true);
        EgBackend::new(display, MONO)
    }

    #[test]
    fn every_weather_icon_stays_in_its_box() {
        let icons = [
            IconId::ClearDay,
            IconId::ClearNight,
            IconId::PartlyCloudyDay,
            IconId::PartlyCloudyNight,
            IconId::Fog,
            IconId::Drizzle,
            IconId::Rain,
            IconId::Snow,
            IconId::Thunderstorm,
            IconId::Unknown,
        ];
        for icon in icons {
            let mut backend = backend();
            backend
                .draw_glyph(Glyph::Weather(icon), Point::new(8, 8))
                .unwrap();
            let area = backend.target().affected_area();
            assert!(area.size.width > 0, "{icon:?} drew nothing");
            let icon_box = Rectangle::new(Point::new(8, 8), Size::new(32, 32));
            assert!(
                icon_box.contains(area.top_left) && icon_box.contains(area.bottom_right().unwrap()),
                "{icon:?} spilled outside its box: {area:?}"
            );
        }
    }

    #[test]
    fn new_moon_is_only_an_outline() {
        let mut new_moon = backend();
        new_moon.draw_glyph(Glyph::Moon(0), Point::zero()).unwrap();
        let mut full_moon = backend();
        full_moon.draw_glyph(Glyph::Moon(4), Point::zero()).unwrap();

        let lit = |display: &MockDisplay<BinaryColor>| {
            display
                .bounding_box()
                .points()
                .filter(|p| display.get_pixel(*p) == Some(BinaryColor::On))
                .count()
        };
        assert!(lit(new_moon.target()) < lit(full_moon.target()));
        assert_eq!(new_moon.target().get_pixel(Point::new(12, 12)), None);
        assert_eq!(full_moon.target().get_pixel(Point::new(12, 12)), Some(BinaryColor::On));
    }

    #[test]
    fn rising_and_falling_arrows_differ() {
        let mut up = backend();
        up.draw_glyph(Glyph::Trend(Trend::Rising), Point::zero()).unwrap();
        let mut down = backend();
        down.draw_glyph(Glyph::Trend(Trend::Falling), Point::zero()).unwrap();
        assert_eq!(up.target().get_pixel(Point::new(4, 5)), Some(BinaryColor::On));
        assert_eq!(down.target().get_pixel(Point::new(4, 2)), Some(BinaryColor::On));
        assert_eq!(up.target().get_pixel(Point::new(0, 0)), None);
        assert_eq!(down.target().get_pixel(Point::new(0, 7)), None);
    }

    #[test]
    fn text_is_drawn_below_origin() {
        let mut backend = backend();
        backend
            .draw_text("12", Point::new(0, 2), Alignment::Left, Ink::Primary, FontSize::Small)
            .unwrap();
        let area = backend.target().affected_area();
        assert!(area.top_left.y >= 2);
    }

    #[test]
    fn plan_replays_through_generic_executor() {
        let mut plan = crate::renderer::RenderPlan::new();
        plan.push_glyph(Glyph::Weather(IconId::Unknown), Point::zero());
        plan.push_text("9", Point::new(40, 0), Alignment::Left, Ink::Primary, FontSize::Small);

        let mut backend = backend();
        crate::renderer::execute_plan(&plan, &mut backend).unwrap();
        assert_eq!(backend.target().get_pixel(Point::new(4, 4)), Some(BinaryColor::On));
        assert_eq!(backend.target().get_pixel(Point::new(63, 63)), Some(BinaryColor::Off));
    }
}
