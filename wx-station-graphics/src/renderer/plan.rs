//! Turns a snapshot plus the station's derived state into an ordered list
//! of draw commands. Nothing here touches pixels.

use core::fmt::Write;

use embedded_graphics::prelude::Point;
use embedded_graphics::text::Alignment;
use wx_station_common::weather::{classify, compass_sector, condition_word};
use wx_station_common::*;

use super::layout::*;
use super::text::{TextMetrics, colon_anchor_x, split_lines};

pub const MAX_COMMANDS: usize = 48;
pub const WAITING_NOTICE: &str = "Waiting for weather";

pub type PlanText = heapless::String<64>;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Text {
        text: PlanText,
        origin: Point,
        alignment: Alignment,
        ink: Ink,
        font: FontSize,
    },
    Glyph {
        glyph: Glyph,
        origin: Point,
    },
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderPlan {
    commands: heapless::Vec<DrawCommand, MAX_COMMANDS>,
}

impl RenderPlan {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_text(
        &mut self,
        text: &str,
        origin: Point,
        alignment: Alignment,
        ink: Ink,
        font: FontSize,
    ) {
        let mut bounded = PlanText::new();
        for ch in text.chars() {
            if bounded.push(ch).is_err() {
                break;
            }
        }
        self.commands
            .push(DrawCommand::Text {
                text: bounded,
                origin,
                alignment,
                ink,
                font,
            })
            .ok();
    }

    pub fn push_glyph(&mut self, glyph: Glyph, origin: Point) {
        self.commands
            .push(DrawCommand::Glyph { glyph, origin })
            .ok();
    }

    /// Left-aligned text that breaks onto a second line when wider than
    /// `max_width`. Returns the number of lines pushed.
    pub fn push_wrapped<M: TextMetrics>(
        &mut self,
        text: &str,
        origin: Point,
        max_width: u32,
        ink: Ink,
        font: FontSize,
        metrics: &M,
    ) -> usize {
        let (first, second) = if metrics.text_width(text, font) > max_width {
            split_lines(text)
        } else {
            (text, "")
        };
        self.push_text(first, origin, Alignment::Left, ink, font);
        if second.is_empty() {
            return 1;
        }
        let below = origin + Point::new(0, metrics.line_height(font) as i32);
        self.push_text(second, below, Alignment::Left, ink, font);
        2
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            DrawCommand::Glyph { .. } => None,
        })
    }

    pub fn glyphs(&self) -> impl Iterator<Item = (Glyph, Point)> + '_ {
        self.commands.iter().filter_map(|command| match command {
            DrawCommand::Glyph { glyph, origin } => Some((*glyph, *origin)),
            DrawCommand::Text { .. } => None,
        })
    }
}

/// Everything one redraw depends on.
pub struct PlanInput<'a> {
    pub snapshot: Option<&'a ForecastSnapshot>,
    pub trend: Trend,
    /// Shown until a snapshot carries its own location.
    pub location: &'a str,
    pub clock: &'a LocalClock,
    pub units: UnitSystem,
    pub now: i64,
}

pub fn build_plan<M: TextMetrics>(input: &PlanInput<'_>, metrics: &M) -> RenderPlan {
    let mut plan = RenderPlan::new();
    let local = input.clock.to_local(input.now);

    let location = input
        .snapshot
        .map(|snapshot| snapshot.location_name.as_str())
        .unwrap_or(input.location);
    plan_header(&mut plan, location, &local, metrics);

    match input.snapshot {
        Some(snapshot) => {
            plan_current(&mut plan, snapshot, input);
            plan_details(&mut plan, snapshot, input, metrics);
            plan_forecast(&mut plan, snapshot, input);
            plan_astronomy(&mut plan, snapshot, input, metrics);
        }
        None => plan.push_text(
            WAITING_NOTICE,
            NOTICE,
            Alignment::Center,
            Ink::Accent,
            FontSize::Medium,
        ),
    }

    debug!("render plan: {} commands", plan.len());
    plan
}

fn plan_header<M: TextMetrics>(
    plan: &mut RenderPlan,
    location: &str,
    local: &LocalDateTime,
    metrics: &M,
) {
    let font = if metrics.text_width(location, FontSize::Medium) <= LOCATION_MAX_WIDTH {
        FontSize::Medium
    } else {
        FontSize::Small
    };
    plan.push_text(
        location,
        Point::new(MARGIN, HEADER_Y),
        Alignment::Left,
        Ink::Primary,
        font,
    );
    plan.push_text(
        &local.format_date(),
        Point::new(SCREEN_WIDTH - MARGIN, HEADER_Y),
        Alignment::Right,
        Ink::Secondary,
        FontSize::Small,
    );

    let time = local.format_time();
    let right = colon_anchor_x(&time, CLOCK_COLON_X, FontSize::Large, metrics);
    plan.push_text(
        &time,
        Point::new(right, CLOCK_Y),
        Alignment::Right,
        Ink::Primary,
        FontSize::Large,
    );
}

fn plan_current(plan: &mut RenderPlan, snapshot: &ForecastSnapshot, input: &PlanInput<'_>) {
    let current = &snapshot.current;
    let icon = classify(
        current.weather_code,
        true,
        input.now,
        snapshot.sunrise,
        snapshot.sunset,
    );
    plan.push_glyph(Glyph::Weather(icon), CURRENT_ICON);
    plan.push_text(
        &format_temperature(current.temperature, input.units),
        CURRENT_TEMP,
        Alignment::Left,
        Ink::Primary,
        FontSize::Large,
    );
    plan.push_text(
        condition_word(current.weather_code),
        CONDITION_WORD,
        Alignment::Left,
        Ink::Secondary,
        FontSize::Small,
    );

    let sunrise = input.clock.to_local(snapshot.sunrise).format_time();
    let sunset = input.clock.to_local(snapshot.sunset).format_time();
    let mut line = PlanText::new();
    let _ = write!(line, "Rise {} Set {}", sunrise, sunset);
    plan.push_text(
        &line,
        SUN_TIMES,
        Alignment::Left,
        Ink::Secondary,
        FontSize::Small,
    );
}

fn plan_details<M: TextMetrics>(
    plan: &mut RenderPlan,
    snapshot: &ForecastSnapshot,
    input: &PlanInput<'_>,
    metrics: &M,
) {
    let current = &snapshot.current;
    let units = input.units;

    let mut humidity = PlanText::new();
    let _ = write!(humidity, "Humidity {}%", current.humidity);

    let mut wind = PlanText::new();
    let _ = write!(
        wind,
        "Wind {} {} {}",
        libm::roundf(current.wind_speed) as i32,
        units.speed_suffix(),
        compass_sector(current.wind_direction as f32).abbreviation()
    );

    let mut pressure = PlanText::new();
    let _ = write!(pressure, "Pressure {}", units.format_pressure(current.pressure_hpa));

    let mut cloud = PlanText::new();
    let _ = write!(cloud, "Cloud {}%", current.cloud_cover);

    for (line, text) in [&humidity, &wind, &pressure, &cloud].into_iter().enumerate() {
        plan.push_text(
            text,
            Point::new(DETAIL_X, detail_line_y(line)),
            Alignment::Left,
            Ink::Primary,
            FontSize::Small,
        );
    }

    if input.trend != Trend::Steady {
        let x = DETAIL_X + metrics.text_width(&pressure, FontSize::Small) as i32 + TREND_GAP;
        plan.push_glyph(
            Glyph::Trend(input.trend),
            Point::new(x, detail_line_y(2) + 1),
        );
    }
}

fn plan_forecast(plan: &mut RenderPlan, snapshot: &ForecastSnapshot, input: &PlanInput<'_>) {
    for (index, day) in snapshot.daily.iter().enumerate() {
        let centre = forecast_panel_x(index) + FORECAST_PANEL_WIDTH / 2;
        let label = input.clock.to_local(day.sunrise).weekday_name();
        plan.push_text(
            label,
            Point::new(centre, FORECAST_Y),
            Alignment::Center,
            Ink::Primary,
            FontSize::Medium,
        );

        let icon = classify(
            day.weather_code,
            false,
            input.now,
            snapshot.sunrise,
            snapshot.sunset,
        );
        let half = Glyph::Weather(icon).size() as i32 / 2;
        plan.push_glyph(
            Glyph::Weather(icon),
            Point::new(centre - half, FORECAST_ICON_Y),
        );

        plan.push_text(
            &format_range(day.temp_max, day.temp_min),
            Point::new(centre, FORECAST_TEMP_Y),
            Alignment::Center,
            Ink::Secondary,
            FontSize::Small,
        );
    }
}

fn plan_astronomy<M: TextMetrics>(
    plan: &mut RenderPlan,
    snapshot: &ForecastSnapshot,
    input: &PlanInput<'_>,
    metrics: &M,
) {
    let utc = LocalClock::utc().to_local(input.now);
    let phase = moon_phase(
        utc.year as i32,
        utc.month as u32,
        utc.day as u32,
        utc.hour as u32,
    );

    plan.push_glyph(Glyph::Moon(phase.index), MOON_ICON);
    plan.push_wrapped(
        phase.name(),
        Point::new(PHASE_TEXT_X, ASTRONOMY_Y),
        PHASE_MAX_WIDTH,
        Ink::Primary,
        FontSize::Small,
        metrics,
    );

    let mut lit = PlanText::new();
    let _ = write!(lit, "{}% lit", phase.illumination);
    plan.push_text(
        &lit,
        Point::new(PHASE_TEXT_X, ILLUMINATION_Y),
        Alignment::Left,
        Ink::Secondary,
        FontSize::Small,
    );

    if snapshot.observed_at > 0 {
        let mut updated = PlanText::new();
        let _ = write!(
            updated,
            "Updated {}",
            input.clock.to_local(snapshot.observed_at).format_time()
        );
        plan.push_text(
            &updated,
            Point::new(SCREEN_WIDTH - MARGIN, UPDATED_Y),
            Alignment::Right,
            Ink::Secondary,
            FontSize::Small,
        );
    }
}

/// `15°C`, rounded to whole degrees.
pub fn format_temperature(value: f32, units: UnitSystem) -> PlanText {
    let mut out = PlanText::new();
    let _ = write!(
        out,
        "{}{}",
        libm::roundf(value) as i32,
        units.temperature_suffix()
    );
    out
}

/// `16°/9°`.
pub fn format_range(max: f32, min: f32) -> PlanText {
    let mut out = PlanText::new();
    let _ = write!(
        out,
        "{}°/{}°",
        libm::roundf(max) as i32,
        libm::roundf(min) as i32
    );
    out
}
