/// Number of forecast days shown next to today's conditions.
pub const FORECAST_DAYS: usize = 4;

pub type LocationName = heapless::String<64>;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurrentConditions {
    /// In the configured unit system.
    pub temperature: f32,
    pub humidity: u8,
    pub pressure_hpa: f32,
    /// In the configured unit system.
    pub wind_speed: f32,
    /// Bearing in [0, 360).
    pub wind_direction: u16,
    pub cloud_cover: u8,
    pub weather_code: u16,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyForecast {
    pub temp_max: f32,
    pub temp_min: f32,
    pub weather_code: u16,
    /// Representative timestamp of the day, used for its weekday label.
    pub sunrise: i64,
}

/// One refresh cycle's complete weather picture.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastSnapshot {
    pub observed_at: i64,
    pub current: CurrentConditions,
    pub daily: [DailyForecast; FORECAST_DAYS],
    pub sunrise: i64,
    pub sunset: i64,
    pub location_name: LocationName,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconId {
    ClearDay,
    ClearNight,
    PartlyCloudyDay,
    PartlyCloudyNight,
    Fog,
    Drizzle,
    Rain,
    Snow,
    Thunderstorm,
    Unknown,
}

impl IconId {
    pub fn name(self) -> &'static str {
        match self {
            IconId::ClearDay => "clear-day",
            IconId::ClearNight => "clear-night",
            IconId::PartlyCloudyDay => "partly-cloudy-day",
            IconId::PartlyCloudyNight => "partly-cloudy-night",
            IconId::Fog => "fog",
            IconId::Drizzle => "drizzle",
            IconId::Rain => "rain",
            IconId::Snow => "snow",
            IconId::Thunderstorm => "thunderstorm",
            IconId::Unknown => "unknown",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compass {
    North,
    Northeast,
    East,
    Southeast,
    South,
    Southwest,
    West,
    Northwest,
}

impl Compass {
    pub const SECTORS: [Compass; 8] = [
        Compass::North,
        Compass::Northeast,
        Compass::East,
        Compass::Southeast,
        Compass::South,
        Compass::Southwest,
        Compass::West,
        Compass::Northwest,
    ];

    pub fn abbreviation(self) -> &'static str {
        match self {
            Compass::North => "N",
            Compass::Northeast => "NE",
            Compass::East => "E",
            Compass::Southeast => "SE",
            Compass::South => "S",
            Compass::Southwest => "SW",
            Compass::West => "W",
            Compass::Northwest => "NW",
        }
    }
}

/// Direction of the pressure arrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Trend {
    Rising,
    Falling,
    #[default]
    Steady,
}

/// Copies `text` into a [`LocationName`], cutting at the last character
/// boundary that fits.
pub fn bounded_location(text: &str) -> LocationName {
    let mut out = LocationName::new();
    for ch in text.chars() {
        if out.push(ch).is_err() {
            break;
        }
    }
    out
}
